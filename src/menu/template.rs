//! Static description of the application menu.
//!
//! The template is plain data built once per run from fixed entries plus a
//! [`Platform`] flag. [`MenuManager`](super::MenuManager) turns it into native
//! `muda` items; tests inspect it directly.

use super::MenuAction;
use crate::platform::{Platform, primary_modifier};
use muda::accelerator::{Accelerator, Code, Modifiers};

/// Host-implemented menu behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeRole {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
    Minimize,
    CloseWindow,
    Services,
    Hide,
    HideOthers,
    ShowAll,
}

/// One row in a submenu.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    /// Item handled by the shell through a [`MenuAction`].
    Action {
        id: &'static str,
        label: String,
        accelerator: Option<Accelerator>,
        action: MenuAction,
    },
    /// Item delegated to the host's native behaviour.
    Native { label: String, role: NativeRole },
    Separator,
}

impl MenuEntry {
    fn action(
        id: &'static str,
        label: impl Into<String>,
        accelerator: Option<Accelerator>,
        action: MenuAction,
    ) -> Self {
        MenuEntry::Action {
            id,
            label: label.into(),
            accelerator,
            action,
        }
    }

    fn native(label: impl Into<String>, role: NativeRole) -> Self {
        MenuEntry::Native {
            label: label.into(),
            role,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            MenuEntry::Action { label, .. } | MenuEntry::Native { label, .. } => Some(label),
            MenuEntry::Separator => None,
        }
    }

    pub fn menu_action(&self) -> Option<MenuAction> {
        match self {
            MenuEntry::Action { action, .. } => Some(*action),
            _ => None,
        }
    }
}

/// A top-level menu and its entries.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmenuTemplate {
    pub label: String,
    pub entries: Vec<MenuEntry>,
}

impl SubmenuTemplate {
    fn new(label: impl Into<String>, entries: Vec<MenuEntry>) -> Self {
        Self {
            label: label.into(),
            entries,
        }
    }

    pub fn count_action(&self, action: MenuAction) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.menu_action() == Some(action))
            .count()
    }
}

/// The complete menu bar, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuTemplate {
    pub platform: Platform,
    pub menus: Vec<SubmenuTemplate>,
}

impl MenuTemplate {
    /// Build the menu bar for `platform`. `app_name` titles the macOS
    /// application menu and its Hide entry.
    pub fn build(platform: Platform, app_name: &str) -> Self {
        let cmd_or_ctrl = primary_modifier(platform);

        let mut file_entries = vec![
            MenuEntry::action(
                "new_window",
                "New Window",
                Some(Accelerator::new(Some(cmd_or_ctrl), Code::KeyN)),
                MenuAction::NewWindow,
            ),
            MenuEntry::action(
                "close_window",
                "Close Window",
                Some(match platform {
                    Platform::Mac => Accelerator::new(Some(Modifiers::META), Code::KeyW),
                    Platform::Other => Accelerator::new(Some(Modifiers::ALT), Code::F4),
                }),
                MenuAction::CloseWindow,
            ),
        ];

        // On macOS, Quit lives in the application menu instead
        if !platform.has_unified_app_menu() {
            file_entries.push(MenuEntry::Separator);
            file_entries.push(quit_entry(cmd_or_ctrl));
        }

        let edit = SubmenuTemplate::new(
            "Edit",
            vec![
                MenuEntry::native("Undo", NativeRole::Undo),
                MenuEntry::native("Redo", NativeRole::Redo),
                MenuEntry::Separator,
                MenuEntry::native("Cut", NativeRole::Cut),
                MenuEntry::native("Copy", NativeRole::Copy),
                MenuEntry::native("Paste", NativeRole::Paste),
                MenuEntry::native("Select All", NativeRole::SelectAll),
            ],
        );

        let view = SubmenuTemplate::new(
            "View",
            vec![
                MenuEntry::action(
                    "reload",
                    "Reload",
                    Some(Accelerator::new(Some(cmd_or_ctrl), Code::KeyR)),
                    MenuAction::Reload,
                ),
                MenuEntry::action(
                    "toggle_fullscreen",
                    "Toggle Full Screen",
                    None,
                    MenuAction::ToggleFullScreen,
                ),
                MenuEntry::action(
                    "toggle_devtools",
                    "Toggle Developer Tools",
                    None,
                    MenuAction::ToggleDevTools,
                ),
            ],
        );

        let window = SubmenuTemplate::new(
            "Window",
            vec![
                MenuEntry::native("Minimize", NativeRole::Minimize),
                MenuEntry::native("Close", NativeRole::CloseWindow),
            ],
        );

        let mut menus = vec![
            SubmenuTemplate::new("File", file_entries),
            edit,
            view,
            window,
        ];

        if platform.has_unified_app_menu() {
            menus.insert(
                0,
                SubmenuTemplate::new(
                    app_name,
                    vec![
                        MenuEntry::native("Services", NativeRole::Services),
                        MenuEntry::Separator,
                        MenuEntry::native(format!("Hide {app_name}"), NativeRole::Hide),
                        MenuEntry::native("Hide Others", NativeRole::HideOthers),
                        MenuEntry::native("Show All", NativeRole::ShowAll),
                        MenuEntry::Separator,
                        quit_entry(Modifiers::META),
                    ],
                ),
            );
        }

        Self { platform, menus }
    }

    pub fn submenu(&self, label: &str) -> Option<&SubmenuTemplate> {
        self.menus.iter().find(|menu| menu.label == label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.menus.iter().map(|menu| menu.label.as_str()).collect()
    }

    /// Number of entries bound to `action` across all menus.
    pub fn count_action(&self, action: MenuAction) -> usize {
        self.menus.iter().map(|menu| menu.count_action(action)).sum()
    }

    /// Labels of the menus that contain `action`.
    pub fn menus_with_action(&self, action: MenuAction) -> Vec<&str> {
        self.menus
            .iter()
            .filter(|menu| menu.count_action(action) > 0)
            .map(|menu| menu.label.as_str())
            .collect()
    }
}

fn quit_entry(modifier: Modifiers) -> MenuEntry {
    MenuEntry::action(
        "quit",
        "Quit",
        Some(Accelerator::new(Some(modifier), Code::KeyQ)),
        MenuAction::Quit,
    )
}
