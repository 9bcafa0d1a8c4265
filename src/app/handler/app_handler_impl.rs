//! `ApplicationHandler` impl for `WindowManager`.

use std::time::{Duration, Instant};

use crate::app::lifecycle;
use crate::app::registry::WindowKey;
use crate::app::window_manager::WindowManager;
use crate::platform;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::WindowId;

/// Wake-up interval while the host toolkit needs pumping
const HOST_POLL_INTERVAL: Duration = Duration::from_millis(16);

impl ApplicationHandler for WindowManager {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.start(event_loop);
        self.exit_if_requested(event_loop);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let key = WindowKey::from(window_id);
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                crate::debug_log!("WINDOW", "Close signal for {}", key);
                self.close_window(key);
            }
            WindowEvent::Focused(focused) => {
                self.set_focus(key, focused);
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }
            WindowEvent::KeyboardInput {
                event,
                is_synthetic: false,
                ..
            } => {
                self.handle_shortcut(key, &event, event_loop);
            }
            _ => {}
        }

        self.exit_if_requested(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        platform::pump_host_events();

        self.process_menu_events(event_loop);
        self.check_cli_timers();

        // Safety net alongside the per-window close handler
        lifecycle::check_all_windows_closed(&self.registry, &mut self.quit);

        if self.exit_if_requested(event_loop) {
            return;
        }

        let control_flow = if platform::needs_polling() {
            ControlFlow::WaitUntil(Instant::now() + HOST_POLL_INTERVAL)
        } else if let (Some(start), Some(secs)) =
            (self.start_time, self.runtime_options.exit_after)
        {
            ControlFlow::WaitUntil(start + Duration::from_secs_f64(secs))
        } else {
            ControlFlow::Wait
        };
        event_loop.set_control_flow(control_flow);
    }
}

impl WindowManager {
    /// Call the host's exit the first time a quit has been requested
    fn exit_if_requested(&mut self, event_loop: &ActiveEventLoop) -> bool {
        if self.quit.take_exit() {
            log::info!("Exiting event loop ({:?})", self.quit.reason());
            event_loop.exit();
            return true;
        }
        self.quit.is_requested()
    }
}
