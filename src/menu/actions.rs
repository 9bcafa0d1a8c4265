//! Menu action definitions for webview-shell
//!
//! This module defines the `MenuAction` enum that represents every menu item
//! whose behaviour the shell implements itself. Edit and Window menu entries
//! are native roles handled by the host and never produce an action.

/// Actions that can be triggered from the menu system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    // File menu
    /// Open a new window
    NewWindow,
    /// Close the focused window
    CloseWindow,
    /// Quit the application (app menu on macOS, File menu elsewhere)
    Quit,

    // View menu
    /// Reload the focused window's page
    Reload,
    /// Ask the focused window's page to toggle full screen
    ToggleFullScreen,
    /// Toggle the focused window's web inspector
    ToggleDevTools,
}
