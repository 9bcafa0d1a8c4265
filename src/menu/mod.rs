//! Native menu support for webview-shell
//!
//! This module provides cross-platform native menu support using the `muda` crate.
//! - macOS: Global application menu bar, installed once on the application
//! - Windows: The same menu attached to each window as it opens; accelerators
//!   are translated by a message hook on the event loop
//! - Linux: Not attached (winit windows are not GTK windows); accelerators are
//!   dispatched from window key events through [`ShortcutRegistry`]

mod actions;
mod install;
mod shortcuts;
mod template;

pub use actions::MenuAction;
pub use install::MenuInstallation;
pub use shortcuts::{ShortcutMatcher, ShortcutRegistry, accelerator_code, accelerator_modifiers};
pub use template::{MenuEntry, MenuTemplate, NativeRole, SubmenuTemplate};

use crate::app::registry::WindowKey;
use crate::error::ShellError;
use muda::{Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem, Submenu};
use std::collections::HashMap;
use winit::window::Window;

/// Manages the native menu system
pub struct MenuManager {
    /// The root menu
    #[cfg_attr(not(any(target_os = "macos", target_os = "windows")), allow(dead_code))]
    menu: Menu,
    /// Mapping from menu item IDs to actions
    action_map: HashMap<MenuId, MenuAction>,
    /// App-level install and per-window attachments
    installation: MenuInstallation,
}

impl MenuManager {
    /// Create the native menu from a template
    pub fn new(template: &MenuTemplate) -> Result<Self, ShellError> {
        let menu = Menu::new();
        let mut action_map = HashMap::new();

        for submenu_template in &template.menus {
            let submenu = Submenu::new(&submenu_template.label, true);
            for entry in &submenu_template.entries {
                append_entry(&submenu, entry, &mut action_map)?;
            }
            menu.append(&submenu)?;
        }

        log::debug!(
            "Built menu with {} top-level menus and {} actions",
            template.menus.len(),
            action_map.len()
        );

        Ok(Self {
            menu,
            action_map,
            installation: MenuInstallation::new(),
        })
    }

    /// Make this the application's active menu.
    ///
    /// Returns `Ok(false)` without touching the host when the menu is already
    /// installed, so repeated calls never duplicate entries.
    pub fn install(&mut self) -> Result<bool, ShellError> {
        if !self.installation.mark_installed() {
            log::debug!("Menu already installed, ignoring repeated install");
            return Ok(false);
        }

        #[cfg(target_os = "macos")]
        {
            // On macOS, init for NSApp (global menu bar)
            self.menu.init_for_nsapp();
            log::info!("Initialized macOS global menu bar");
        }

        #[cfg(target_os = "windows")]
        log::info!("Application menu ready, attaching to windows as they open");

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        log::info!("Application menu ready, shortcuts dispatched from key events");

        Ok(true)
    }

    pub fn is_installed(&self) -> bool {
        self.installation.is_installed()
    }

    /// Attach the menu bar to a window where the platform uses per-window menus.
    ///
    /// Returns `Ok(false)` if the window already has it.
    pub fn attach_to_window(&mut self, window: &Window) -> Result<bool, ShellError> {
        let key = WindowKey::from(window.id());
        if !self.installation.mark_attached(key) {
            return Ok(false);
        }

        #[cfg(target_os = "windows")]
        {
            use winit::raw_window_handle::{HasWindowHandle, RawWindowHandle};
            if let Ok(handle) = window.window_handle()
                && let RawWindowHandle::Win32(win32_handle) = handle.as_raw()
            {
                // SAFETY: the handle belongs to a live window owned by the caller.
                unsafe { self.menu.init_for_hwnd(win32_handle.hwnd.get())? };
                log::info!("Attached menu bar to {}", key);
            }
        }

        #[cfg(not(target_os = "windows"))]
        log::debug!("Tracking menu for {} (no per-window menu bar)", key);

        Ok(true)
    }

    /// Forget a window's attachment once it has closed
    pub fn detach_window(&mut self, key: WindowKey) {
        self.installation.detach(key);
    }

    /// Message hook that runs the menu's accelerator table on every message,
    /// so Ctrl/Alt shortcuts reach the menu before the window sees them.
    #[cfg(target_os = "windows")]
    pub fn accelerator_hook(&self) -> impl FnMut(*const std::ffi::c_void) -> bool + 'static {
        use windows_sys::Win32::UI::WindowsAndMessaging::{MSG, TranslateAcceleratorW};
        let menu = self.menu.clone();
        move |msg| {
            let msg = msg as *const MSG;
            // SAFETY: winit hands the hook a valid MSG for the duration of the call.
            unsafe { TranslateAcceleratorW((*msg).hwnd, menu.haccel() as _, msg) == 1 }
        }
    }

    /// Poll for menu events and return any triggered actions
    pub fn poll_events(&self) -> impl Iterator<Item = MenuAction> + '_ {
        std::iter::from_fn(|| {
            // Use try_recv to get events without blocking
            match MenuEvent::receiver().try_recv() {
                Ok(event) => Some(self.action_map.get(&event.id).copied()),
                Err(_) => None,
            }
        })
        .flatten()
    }
}

fn append_entry(
    submenu: &Submenu,
    entry: &MenuEntry,
    action_map: &mut HashMap<MenuId, MenuAction>,
) -> Result<(), ShellError> {
    match entry {
        MenuEntry::Action {
            id,
            label,
            accelerator,
            action,
        } => {
            let item = MenuItem::with_id(*id, label, true, accelerator.clone());
            action_map.insert(item.id().clone(), *action);
            submenu.append(&item)?;
        }
        MenuEntry::Native { label, role } => {
            let item = native_item(*role, label);
            submenu.append(&item)?;
        }
        MenuEntry::Separator => {
            submenu.append(&PredefinedMenuItem::separator())?;
        }
    }
    Ok(())
}

fn native_item(role: NativeRole, label: &str) -> PredefinedMenuItem {
    let text = Some(label);
    match role {
        NativeRole::Undo => PredefinedMenuItem::undo(text),
        NativeRole::Redo => PredefinedMenuItem::redo(text),
        NativeRole::Cut => PredefinedMenuItem::cut(text),
        NativeRole::Copy => PredefinedMenuItem::copy(text),
        NativeRole::Paste => PredefinedMenuItem::paste(text),
        NativeRole::SelectAll => PredefinedMenuItem::select_all(text),
        NativeRole::Minimize => PredefinedMenuItem::minimize(text),
        NativeRole::CloseWindow => PredefinedMenuItem::close_window(text),
        NativeRole::Services => PredefinedMenuItem::services(text),
        NativeRole::Hide => PredefinedMenuItem::hide(text),
        NativeRole::HideOthers => PredefinedMenuItem::hide_others(text),
        NativeRole::ShowAll => PredefinedMenuItem::show_all(text),
    }
}
