//! Host toolkit setup beyond what winit does itself.
//!
//! On Linux and the BSDs, wry renders through WebKitGTK, which needs GTK
//! initialised on the main thread and its main context pumped from the winit
//! loop. Elsewhere these are no-ops.

use anyhow::Result;

#[cfg(any(
    target_os = "linux",
    target_os = "dragonfly",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd"
))]
mod imp {
    use anyhow::{Context, Result};

    pub fn init_host() -> Result<()> {
        gtk::init().context("failed to initialise GTK")?;
        log::info!("GTK initialised for web views");
        Ok(())
    }

    pub fn pump_host_events() {
        while gtk::events_pending() {
            gtk::main_iteration_do(false);
        }
    }

    pub const NEEDS_POLLING: bool = true;

    // No menu bar on winit windows here
    pub const MENU_BAR_SHORTCUTS: bool = false;
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "dragonfly",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd"
)))]
mod imp {
    use anyhow::Result;

    pub fn init_host() -> Result<()> {
        Ok(())
    }

    pub fn pump_host_events() {}

    pub const NEEDS_POLLING: bool = false;

    pub const MENU_BAR_SHORTCUTS: bool = true;
}

/// Prepare the host toolkit. Call once on the main thread before the event loop.
pub fn init_host() -> Result<()> {
    imp::init_host()
}

/// Run pending host toolkit work. Call from every `about_to_wait`.
pub fn pump_host_events() {
    imp::pump_host_events();
}

/// Whether the event loop must wake periodically to pump the host toolkit.
pub fn needs_polling() -> bool {
    imp::NEEDS_POLLING
}

/// Whether the native menu bar fires its own accelerators. When it does not,
/// key events must be matched against the menu template by the shell.
pub fn menu_bar_handles_shortcuts() -> bool {
    imp::MENU_BAR_SHORTCUTS
}
