//! Window close handling and application termination.
//!
//! Two independent paths can end the application: the per-window close
//! handler when it removes the last record, and the all-windows-closed check
//! run after every event batch. Both go through [`QuitGuard`], which lets the
//! event loop exit exactly once.

use super::registry::{CloseOutcome, WindowKey, WindowRegistry};

/// Why the application is terminating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitReason {
    /// The close handler removed the last window
    LastWindowClosed,
    /// The per-batch check found no windows left
    AllWindowsClosed,
    /// Quit chosen from the menu
    MenuQuit,
    /// The `--exit-after` timer expired
    ExitAfter,
}

#[derive(Debug, Default)]
pub struct QuitGuard {
    reason: Option<QuitReason>,
    exit_issued: bool,
}

impl QuitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a quit request. Only the first request counts; later ones
    /// return `false` and keep the original reason.
    pub fn request(&mut self, reason: QuitReason) -> bool {
        if self.reason.is_some() {
            log::debug!("Quit already requested, ignoring {:?}", reason);
            return false;
        }
        log::info!("Quit requested: {:?}", reason);
        self.reason = Some(reason);
        true
    }

    pub fn is_requested(&self) -> bool {
        self.reason.is_some()
    }

    pub fn reason(&self) -> Option<QuitReason> {
        self.reason
    }

    /// `true` exactly once after a request: the moment to call the host's exit.
    pub fn take_exit(&mut self) -> bool {
        if self.reason.is_some() && !self.exit_issued {
            self.exit_issued = true;
            true
        } else {
            false
        }
    }
}

/// Close handler for one window: `Open` → `Closing` → removed.
///
/// Removes the window's record and drops its handle. A repeated close signal
/// for the same window finds no record and does nothing. Requests termination
/// when the last window goes.
pub fn handle_window_closed<H>(
    registry: &mut WindowRegistry<H>,
    quit: &mut QuitGuard,
    key: WindowKey,
) -> CloseOutcome {
    if !registry.contains(key) {
        log::trace!("Close signal for untracked {}", key);
        return CloseOutcome::Untracked;
    }

    registry.begin_close(key);
    let (outcome, handle) = registry.finish_close(key);
    drop(handle);
    log::info!("Closed {} ({:?})", key, outcome);

    if outcome == CloseOutcome::LastWindowClosed {
        quit.request(QuitReason::LastWindowClosed);
    }
    outcome
}

/// The all-windows-closed safety net, run once per event batch.
pub fn check_all_windows_closed<H>(registry: &WindowRegistry<H>, quit: &mut QuitGuard) {
    if registry.all_closed() {
        quit.request(QuitReason::AllWindowsClosed);
    }
}
