//! Menu action handling for the window manager.
//!
//! This module processes native menu events (New Window, Reload, etc.)
//! and dispatches them to the focused window. Where the menu bar cannot fire
//! its own accelerators, key presses are matched against the menu template
//! and take the same path.

use winit::event::KeyEvent;
use winit::event_loop::ActiveEventLoop;

use crate::app::registry::WindowKey;
use crate::app::shell_window::PageAction;
use crate::menu::{MenuAction, ShortcutMatcher};

use super::WindowManager;

impl WindowManager {
    /// Handle a menu action
    pub fn handle_menu_action(&mut self, action: MenuAction, event_loop: &ActiveEventLoop) {
        crate::debug_log!("MENU", "Menu action: {:?}", action);
        match action {
            MenuAction::NewWindow => {
                if let Err(e) = self.create_window(event_loop) {
                    log::error!("Failed to create window: {}", e);
                }
            }
            MenuAction::CloseWindow => {
                if let Some(key) = self.focused {
                    self.close_window(key);
                }
            }
            MenuAction::Quit => {
                self.quit_all();
            }
            MenuAction::Reload => {
                if let Some(window) = self.focused_window()
                    && let Err(e) = window.reload()
                {
                    log::error!("Failed to reload window: {}", e);
                }
            }
            MenuAction::ToggleFullScreen => {
                if let Some(window) = self.focused_window()
                    && let Err(e) = window.send_action(PageAction::ToggleFullscreen)
                {
                    log::error!("Failed to toggle full screen: {}", e);
                }
            }
            MenuAction::ToggleDevTools => {
                if let Some(window) = self.focused_window() {
                    window.toggle_devtools();
                }
            }
        }
    }

    /// Drain pending menu events
    pub fn process_menu_events(&mut self, event_loop: &ActiveEventLoop) {
        // Collect actions to avoid borrow conflicts
        let actions: Vec<_> = self.menu.poll_events().collect();
        for action in actions {
            self.handle_menu_action(action, event_loop);
        }
    }

    /// Run the menu action bound to a key press in `key`'s window.
    ///
    /// Returns `true` if the press matched a menu accelerator.
    pub fn handle_shortcut(
        &mut self,
        key: WindowKey,
        event: &KeyEvent,
        event_loop: &ActiveEventLoop,
    ) -> bool {
        let Some(shortcuts) = &self.shortcuts else {
            return false;
        };
        let matcher = ShortcutMatcher::from_event(event, self.modifiers);
        let Some(action) = shortcuts.lookup(&matcher) else {
            return false;
        };

        crate::debug_trace!("MENU", "Shortcut {:?} in {}", action, key);
        // Key events only reach the window that has focus
        self.focused = Some(key);
        self.handle_menu_action(action, event_loop);
        true
    }
}
