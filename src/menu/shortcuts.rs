//! Keyboard dispatch of menu accelerators.
//!
//! Where the menu bar is not attached to the window (winit windows on
//! Linux and the BSDs are not GTK windows), muda never sees key presses.
//! The window manager feeds winit key events through a [`ShortcutMatcher`]
//! and looks the result up in a [`ShortcutRegistry`] built from the same
//! [`MenuTemplate`], so every accelerator shown in the template still runs
//! its action.

use super::{MenuAction, MenuEntry, MenuTemplate};
use muda::accelerator::{Accelerator, Code, Modifiers};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

/// A key press normalised to muda's accelerator vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutMatcher {
    modifiers: Modifiers,
    key: Option<Code>,
}

impl ShortcutMatcher {
    pub fn new(modifiers: Modifiers, key: Option<Code>) -> Self {
        Self { modifiers, key }
    }

    /// Build a matcher from a winit key event. Releases and auto-repeats
    /// never match.
    pub fn from_event(event: &KeyEvent, modifiers: ModifiersState) -> Self {
        let key = match event.physical_key {
            PhysicalKey::Code(code) if event.state == ElementState::Pressed && !event.repeat => {
                accelerator_code(code)
            }
            _ => None,
        };
        Self::new(accelerator_modifiers(modifiers), key)
    }

    pub fn matches(&self, accelerator: &Accelerator) -> bool {
        self.key
            .is_some_and(|key| Accelerator::new(Some(self.modifiers), key) == *accelerator)
    }
}

/// Accelerator → action table for the shell's own menu items.
#[derive(Debug, Clone, Default)]
pub struct ShortcutRegistry {
    bindings: Vec<(Accelerator, MenuAction)>,
}

impl ShortcutRegistry {
    pub fn from_template(template: &MenuTemplate) -> Self {
        let bindings = template
            .menus
            .iter()
            .flat_map(|menu| &menu.entries)
            .filter_map(|entry| match entry {
                MenuEntry::Action {
                    accelerator: Some(accelerator),
                    action,
                    ..
                } => Some((accelerator.clone(), *action)),
                _ => None,
            })
            .collect();
        Self { bindings }
    }

    pub fn lookup(&self, matcher: &ShortcutMatcher) -> Option<MenuAction> {
        self.bindings
            .iter()
            .find(|(accelerator, _)| matcher.matches(accelerator))
            .map(|(_, action)| *action)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Map winit's modifier state onto accelerator modifiers. The logo key maps
/// to `META`, matching how Cmd shortcuts are written in the template.
pub fn accelerator_modifiers(state: ModifiersState) -> Modifiers {
    let mut modifiers = Modifiers::empty();
    if state.control_key() {
        modifiers |= Modifiers::CONTROL;
    }
    if state.shift_key() {
        modifiers |= Modifiers::SHIFT;
    }
    if state.alt_key() {
        modifiers |= Modifiers::ALT;
    }
    if state.super_key() {
        modifiers |= Modifiers::META;
    }
    modifiers
}

macro_rules! same_named_codes {
    ($code:expr; $($name:ident),* $(,)?) => {
        match $code {
            $(KeyCode::$name => Some(Code::$name),)*
            _ => None,
        }
    };
}

/// Physical key → accelerator key code, for keys an accelerator can name.
pub fn accelerator_code(code: KeyCode) -> Option<Code> {
    same_named_codes!(code;
        KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL, KeyM,
        KeyN, KeyO, KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
        Digit0, Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8, Digit9,
        F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
        Escape, Enter, Tab, Space, Backspace, Delete,
        ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
        Minus, Equal, Comma, Period, Slash,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    #[test]
    fn test_modifier_mapping() {
        assert_eq!(
            accelerator_modifiers(ModifiersState::CONTROL | ModifiersState::SHIFT),
            Modifiers::CONTROL | Modifiers::SHIFT
        );
        assert_eq!(accelerator_modifiers(ModifiersState::SUPER), Modifiers::META);
        assert_eq!(accelerator_modifiers(ModifiersState::empty()), Modifiers::empty());
    }

    #[test]
    fn test_key_code_mapping() {
        assert_eq!(accelerator_code(KeyCode::KeyN), Some(Code::KeyN));
        assert_eq!(accelerator_code(KeyCode::F4), Some(Code::F4));
        assert_eq!(accelerator_code(KeyCode::CapsLock), None);
    }

    #[test]
    fn test_matcher_without_key_never_matches() {
        let registry = ShortcutRegistry::from_template(&MenuTemplate::build(Platform::Other, "x"));
        assert_eq!(
            registry.lookup(&ShortcutMatcher::new(Modifiers::CONTROL, None)),
            None
        );
    }
}
