//! Startup, window creation and destruction, and CLI timers.

use std::time::Instant;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::app::lifecycle::{self, QuitReason};
use crate::app::registry::{CloseOutcome, WindowKey};
use crate::app::shell_window::ShellWindow;
use crate::error::ShellError;

use super::WindowManager;

impl WindowManager {
    /// Application ready: install the menu, then open the first window.
    /// Later resumes are ignored.
    pub fn start(&mut self, event_loop: &ActiveEventLoop) {
        if self.start_time.is_some() {
            return;
        }
        self.start_time = Some(Instant::now());
        log::info!(
            "Starting {} (dev mode: {})",
            self.config.app_name,
            self.dev_mode()
        );

        if let Err(e) = self.install_menu() {
            crate::debug_error!("MENU", "Failed to install menu: {}", e);
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("Failed to create first window: {}", e);
        }
    }

    /// Install the application menu. Repeated calls leave the host untouched.
    pub fn install_menu(&mut self) -> Result<(), ShellError> {
        if self.menu.install()? {
            crate::debug_info!(
                "MENU",
                "Menu installed (keyboard shortcuts: {})",
                self.shortcuts.as_ref().map_or(0, |s| s.len())
            );
        }
        Ok(())
    }

    /// Open a new window showing the local page and track it at the front of
    /// the window list
    pub fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowKey, ShellError> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.app_name)
            .with_inner_size(LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ))
            .with_visible(true);

        let window = event_loop.create_window(window_attrs)?;
        let key = WindowKey::from(window.id());

        if let Err(e) = self.menu.attach_to_window(&window) {
            log::warn!("Failed to attach menu to {}: {}", key, e);
        }

        let shell_window = match ShellWindow::open(window, &self.content, self.dev_mode()) {
            Ok(shell_window) => shell_window,
            Err(e) => {
                self.menu.detach_window(key);
                return Err(e);
            }
        };
        self.registry.register(key, shell_window);
        crate::debug_info!("WINDOW", "Opened {} (open windows: {})", key, self.registry.len());

        Ok(key)
    }

    /// Close handler for one window
    pub fn close_window(&mut self, key: WindowKey) -> CloseOutcome {
        if self.focused == Some(key) {
            self.focused = None;
        }
        self.menu.detach_window(key);
        lifecycle::handle_window_closed(&mut self.registry, &mut self.quit, key)
    }

    /// Close every window and quit
    pub fn quit_all(&mut self) {
        self.quit.request(QuitReason::MenuQuit);
        let keys = self.registry.keys().to_vec();
        for key in keys {
            self.close_window(key);
        }
    }

    /// Check timing-based CLI options (exit-after)
    pub fn check_cli_timers(&mut self) {
        let (Some(start_time), Some(exit_after)) =
            (self.start_time, self.runtime_options.exit_after)
        else {
            return;
        };

        if start_time.elapsed().as_secs_f64() >= exit_after {
            log::info!("Exit-after timer expired ({:.1}s), exiting", exit_after);
            self.quit.request(QuitReason::ExitAfter);
        }
    }
}
