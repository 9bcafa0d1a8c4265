use muda::accelerator::{Code, Modifiers};
use webview_shell::app::WindowKey;
use webview_shell::menu::{
    MenuAction, MenuInstallation, MenuTemplate, ShortcutMatcher, ShortcutRegistry,
    accelerator_code, accelerator_modifiers,
};
use webview_shell::platform::Platform;
use winit::keyboard::{KeyCode, ModifiersState};

fn press(modifiers: ModifiersState, key: KeyCode) -> ShortcutMatcher {
    ShortcutMatcher::new(accelerator_modifiers(modifiers), accelerator_code(key))
}

fn other_registry() -> ShortcutRegistry {
    ShortcutRegistry::from_template(&MenuTemplate::build(Platform::Other, "webview-shell"))
}

#[test]
fn test_every_accelerated_action_is_reachable_from_keys() {
    let registry = other_registry();
    assert_eq!(registry.len(), 4);

    let cases = [
        (ModifiersState::CONTROL, KeyCode::KeyN, MenuAction::NewWindow),
        (ModifiersState::ALT, KeyCode::F4, MenuAction::CloseWindow),
        (ModifiersState::CONTROL, KeyCode::KeyQ, MenuAction::Quit),
        (ModifiersState::CONTROL, KeyCode::KeyR, MenuAction::Reload),
    ];
    for (modifiers, key, action) in cases {
        assert_eq!(
            registry.lookup(&press(modifiers, key)),
            Some(action),
            "{modifiers:?}+{key:?}"
        );
    }
}

#[test]
fn test_modifiers_must_match_exactly() {
    let registry = other_registry();
    assert_eq!(registry.lookup(&press(ModifiersState::empty(), KeyCode::KeyN)), None);
    assert_eq!(
        registry.lookup(&press(ModifiersState::CONTROL | ModifiersState::SHIFT, KeyCode::KeyN)),
        None
    );
    assert_eq!(registry.lookup(&press(ModifiersState::CONTROL, KeyCode::F4)), None);
    assert_eq!(registry.lookup(&press(ModifiersState::SUPER, KeyCode::KeyN)), None);
}

#[test]
fn test_unmapped_keys_do_not_match() {
    let registry = other_registry();
    assert_eq!(registry.lookup(&press(ModifiersState::CONTROL, KeyCode::CapsLock)), None);
    assert_eq!(
        registry.lookup(&ShortcutMatcher::new(Modifiers::CONTROL, Some(Code::KeyZ))),
        None
    );
}

#[test]
fn test_mac_shortcuts_use_command() {
    let registry =
        ShortcutRegistry::from_template(&MenuTemplate::build(Platform::Mac, "webview-shell"));
    assert_eq!(
        registry.lookup(&press(ModifiersState::SUPER, KeyCode::KeyW)),
        Some(MenuAction::CloseWindow)
    );
    assert_eq!(
        registry.lookup(&press(ModifiersState::SUPER, KeyCode::KeyQ)),
        Some(MenuAction::Quit)
    );
    assert_eq!(registry.lookup(&press(ModifiersState::CONTROL, KeyCode::KeyQ)), None);
}

#[test]
fn test_installation_is_recorded_once() {
    let mut installation = MenuInstallation::new();
    let installs = (0..3).filter(|_| installation.mark_installed()).count();
    assert_eq!(installs, 1);

    // Re-attaching to an already attached window is refused until it closes
    assert!(installation.mark_attached(WindowKey(7)));
    assert!(!installation.mark_attached(WindowKey(7)));
    installation.detach(WindowKey(7));
    assert!(installation.mark_attached(WindowKey(7)));
    assert_eq!(installation.attached_count(), 1);
}
