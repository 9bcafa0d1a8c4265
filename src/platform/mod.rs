//! Platform abstraction layer for webview-shell.
//!
//! This module centralises the platform-specific conventions that would
//! otherwise be scattered across the codebase as inline
//! `#[cfg(target_os = ...)]` blocks.
//!
//! # Conventions
//!
//! - Menu construction takes a [`Platform`] value instead of branching on
//!   `cfg`, so both layouts can be built and inspected on any host.
//! - [`Platform::current`] is the only place that consults the compile target
//!   for menu layout; host toolkit setup lives in `host`.

mod host;
mod modifiers;

pub use host::{init_host, menu_bar_handles_shortcuts, needs_polling, pump_host_events};
pub use modifiers::primary_modifier;

/// Menu-bar convention of the host operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Unified application-name menu first, Cmd-based shortcuts (macOS).
    Mac,
    /// File menu first with its own Quit entry, Ctrl/Alt-based shortcuts.
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Mac
        } else {
            Platform::Other
        }
    }

    /// Whether the first menu is the application's own name rather than "File".
    pub fn has_unified_app_menu(self) -> bool {
        matches!(self, Platform::Mac)
    }
}
