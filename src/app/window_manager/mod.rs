//! Multi-window manager for the shell
//!
//! This module contains `WindowManager`, which owns the window registry, the
//! native menu and the quit guard, and is the single controller for window
//! lifecycle.
//!
//! The implementation is split across sub-modules for clarity:
//! - `window_lifecycle` — startup, window creation, close handling, CLI timers
//! - `menu_actions`     — native menu event and keyboard shortcut dispatch

mod menu_actions;
mod window_lifecycle;

use crate::app::content::ContentRoot;
use crate::app::lifecycle::QuitGuard;
use crate::app::registry::{WindowKey, WindowRegistry};
use crate::app::shell_window::ShellWindow;
use crate::cli::RuntimeOptions;
use crate::config::Config;
use crate::menu::{MenuManager, ShortcutRegistry};
use std::time::Instant;
use winit::keyboard::ModifiersState;

/// Manages the shell's windows and shared resources
pub struct WindowManager {
    /// Open windows, newest first, keyed by window id
    pub(crate) registry: WindowRegistry<ShellWindow>,
    /// Native menu manager, installed on first resume
    pub(crate) menu: MenuManager,
    /// Accelerators matched from key events where the menu bar can't fire them
    pub(crate) shortcuts: Option<ShortcutRegistry>,
    /// Last modifier state reported by the focused window
    pub(crate) modifiers: ModifiersState,
    /// Shared configuration
    pub(crate) config: Config,
    /// Page and asset directory served to every window
    pub(crate) content: ContentRoot,
    /// Single exit path for all termination triggers
    pub(crate) quit: QuitGuard,
    /// Window that last reported focus
    pub(crate) focused: Option<WindowKey>,
    /// Runtime options from CLI
    pub(crate) runtime_options: RuntimeOptions,
    /// When the app started (for timing-based CLI options)
    pub(crate) start_time: Option<Instant>,
}

impl WindowManager {
    /// Create a new window manager
    pub fn new(
        config: Config,
        content: ContentRoot,
        runtime_options: RuntimeOptions,
        menu: MenuManager,
        shortcuts: Option<ShortcutRegistry>,
    ) -> Self {
        Self {
            registry: WindowRegistry::new(),
            menu,
            shortcuts,
            modifiers: ModifiersState::empty(),
            config,
            content,
            quit: QuitGuard::new(),
            focused: None,
            runtime_options,
            start_time: None,
        }
    }

    /// Development mode from config/environment or the `--dev` flag
    pub fn dev_mode(&self) -> bool {
        self.config.dev_mode || self.runtime_options.dev
    }

    /// The focused window, if it is still open
    pub fn focused_window(&self) -> Option<&ShellWindow> {
        self.focused.and_then(|key| self.registry.get(key))
    }

    /// Record a focus change reported by the host
    pub(crate) fn set_focus(&mut self, key: WindowKey, focused: bool) {
        if focused {
            self.focused = Some(key);
        } else if self.focused == Some(key) {
            self.focused = None;
            self.modifiers = ModifiersState::empty();
        }
    }
}
