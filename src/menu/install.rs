//! Bookkeeping for where the menu has been handed to the host.

use crate::app::registry::WindowKey;
use std::collections::HashSet;

/// Tracks the one application-level install and the windows the menu bar
/// is attached to, so neither happens twice.
#[derive(Debug, Default)]
pub struct MenuInstallation {
    installed: bool,
    attached: HashSet<WindowKey>,
}

impl MenuInstallation {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` on the first call only.
    pub fn mark_installed(&mut self) -> bool {
        !std::mem::replace(&mut self.installed, true)
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// `true` if the menu bar was not yet attached to `key`.
    pub fn mark_attached(&mut self, key: WindowKey) -> bool {
        self.attached.insert(key)
    }

    /// Forget a closed window.
    pub fn detach(&mut self, key: WindowKey) -> bool {
        self.attached.remove(&key)
    }

    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }
}
