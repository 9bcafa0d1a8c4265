//! Bookkeeping for open windows.
//!
//! `WindowRegistry` owns one record per open window plus the newest-first
//! window list. It is generic over the handle so lifecycle logic can run
//! without a display.

use std::collections::HashMap;
use winit::window::WindowId;

/// Opaque numeric identifier of one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowKey(pub u64);

impl From<WindowId> for WindowKey {
    fn from(id: WindowId) -> Self {
        WindowKey(u64::from(id))
    }
}

impl std::fmt::Display for WindowKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Lifecycle phase of a tracked window. A removed window has no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPhase {
    Open,
    Closing,
}

/// The shell's entry for one open window.
#[derive(Debug)]
pub struct WindowRecord<H> {
    pub key: WindowKey,
    pub phase: WindowPhase,
    pub handle: H,
}

/// Result of removing a window's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Removed; this many windows are still open.
    Remaining(usize),
    /// Removed; it was the last open window.
    LastWindowClosed,
    /// No record for this key (already removed or never tracked).
    Untracked,
}

#[derive(Debug)]
pub struct WindowRegistry<H> {
    /// Open windows, newest first
    order: Vec<WindowKey>,
    records: HashMap<WindowKey, WindowRecord<H>>,
    /// Set once the first window is registered
    ever_opened: bool,
}

impl<H> Default for WindowRegistry<H> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            records: HashMap::new(),
            ever_opened: false,
        }
    }
}

impl<H> WindowRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a newly opened window at the front of the list.
    ///
    /// Returns `false` and leaves the registry untouched if `key` is already
    /// tracked.
    pub fn register(&mut self, key: WindowKey, handle: H) -> bool {
        if self.records.contains_key(&key) {
            log::warn!("{} is already registered", key);
            return false;
        }
        self.order.insert(0, key);
        self.records.insert(
            key,
            WindowRecord {
                key,
                phase: WindowPhase::Open,
                handle,
            },
        );
        self.ever_opened = true;
        true
    }

    /// Move an open window to `Closing`. Returns `false` if the window is
    /// untracked or already closing.
    pub fn begin_close(&mut self, key: WindowKey) -> bool {
        match self.records.get_mut(&key) {
            Some(record) if record.phase == WindowPhase::Open => {
                record.phase = WindowPhase::Closing;
                true
            }
            _ => false,
        }
    }

    /// Remove a window's record from both the list and the map, handing back
    /// its handle. Dropping the handle is the caller's business.
    pub fn finish_close(&mut self, key: WindowKey) -> (CloseOutcome, Option<H>) {
        let Some(record) = self.records.remove(&key) else {
            return (CloseOutcome::Untracked, None);
        };
        self.order.retain(|k| *k != key);

        let outcome = if self.order.is_empty() {
            CloseOutcome::LastWindowClosed
        } else {
            CloseOutcome::Remaining(self.order.len())
        };
        (outcome, Some(record.handle))
    }

    pub fn get(&self, key: WindowKey) -> Option<&H> {
        self.records.get(&key).map(|record| &record.handle)
    }

    pub fn phase(&self, key: WindowKey) -> Option<WindowPhase> {
        self.records.get(&key).map(|record| record.phase)
    }

    pub fn contains(&self, key: WindowKey) -> bool {
        self.records.contains_key(&key)
    }

    /// Keys of open windows, newest first
    pub fn keys(&self) -> &[WindowKey] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True once at least one window has opened and none remain.
    pub fn all_closed(&self) -> bool {
        self.ever_opened && self.is_empty()
    }
}
