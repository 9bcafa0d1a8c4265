mod common;

use common::{permutations, registry_with};
use webview_shell::app::lifecycle::{check_all_windows_closed, handle_window_closed};
use webview_shell::app::{CloseOutcome, QuitGuard, QuitReason, WindowKey, WindowRegistry};

/// Count how many times the event loop would be told to exit.
fn drain_exits(quit: &mut QuitGuard) -> usize {
    usize::from(quit.take_exit())
}

#[test]
fn test_two_window_scenario() {
    let mut registry = WindowRegistry::new();
    let mut quit = QuitGuard::new();

    registry.register(WindowKey(7), "A");
    assert_eq!(registry.keys(), &[WindowKey(7)]);

    registry.register(WindowKey(9), "B");
    assert_eq!(registry.keys(), &[WindowKey(9), WindowKey(7)]);

    let outcome = handle_window_closed(&mut registry, &mut quit, WindowKey(7));
    assert_eq!(outcome, CloseOutcome::Remaining(1));
    assert_eq!(registry.keys(), &[WindowKey(9)]);
    assert_eq!(registry.get(WindowKey(9)), Some(&"B"));
    assert!(!registry.contains(WindowKey(7)));
    assert!(!quit.is_requested());

    let outcome = handle_window_closed(&mut registry, &mut quit, WindowKey(9));
    assert_eq!(outcome, CloseOutcome::LastWindowClosed);
    assert!(registry.is_empty());
    assert_eq!(quit.reason(), Some(QuitReason::LastWindowClosed));
}

#[test]
fn test_closing_all_windows_terminates_once() {
    for n in 1..=6u64 {
        let ids: Vec<u64> = (1..=n).collect();
        let mut registry = registry_with(&ids);
        let mut quit = QuitGuard::new();
        let mut exits = 0;

        for &id in &ids {
            handle_window_closed(&mut registry, &mut quit, WindowKey(id));
            // Both termination paths run after every close, as on the event loop
            check_all_windows_closed(&registry, &mut quit);
            exits += drain_exits(&mut quit);
        }

        assert!(registry.is_empty(), "registry not empty for n={n}");
        assert_eq!(registry.keys().len(), 0);
        assert_eq!(exits, 1, "expected exactly one exit for n={n}");
    }
}

#[test]
fn test_close_order_removes_only_the_closed_window() {
    let ids = [11, 22, 33, 44];
    for order in permutations(&ids) {
        let mut registry = registry_with(&ids);
        let mut quit = QuitGuard::new();
        let mut closed = Vec::new();

        for &id in &order {
            let before = registry.len();
            handle_window_closed(&mut registry, &mut quit, WindowKey(id));
            closed.push(id);

            assert_eq!(registry.len(), before - 1, "order {order:?}");
            for &other in &ids {
                let expected = !closed.contains(&other);
                assert_eq!(
                    registry.contains(WindowKey(other)),
                    expected,
                    "window {other} after closing {closed:?}"
                );
                assert_eq!(registry.keys().contains(&WindowKey(other)), expected);
            }
        }
        assert!(quit.is_requested());
    }
}

#[test]
fn test_remaining_windows_keep_newest_first_order() {
    let mut registry = registry_with(&[1, 2, 3, 4]);
    let mut quit = QuitGuard::new();
    handle_window_closed(&mut registry, &mut quit, WindowKey(3));
    assert_eq!(registry.keys(), &[WindowKey(4), WindowKey(2), WindowKey(1)]);
}

#[test]
fn test_safety_net_alone_terminates() {
    let mut registry = registry_with(&[5]);
    let mut quit = QuitGuard::new();

    // Record removed without going through the close handler
    let (outcome, handle) = registry.finish_close(WindowKey(5));
    assert_eq!(outcome, CloseOutcome::LastWindowClosed);
    assert_eq!(handle, Some(5));
    assert!(!quit.is_requested());

    check_all_windows_closed(&registry, &mut quit);
    assert_eq!(quit.reason(), Some(QuitReason::AllWindowsClosed));
    assert!(quit.take_exit());
    assert!(!quit.take_exit());
}

#[test]
fn test_menu_quit_then_closing_windows_exits_once() {
    let mut registry = registry_with(&[1, 2]);
    let mut quit = QuitGuard::new();

    assert!(quit.request(QuitReason::MenuQuit));
    for key in registry.keys().to_vec() {
        handle_window_closed(&mut registry, &mut quit, key);
    }
    check_all_windows_closed(&registry, &mut quit);

    assert_eq!(quit.reason(), Some(QuitReason::MenuQuit));
    assert_eq!(drain_exits(&mut quit) + drain_exits(&mut quit), 1);
}

#[test]
fn test_new_window_after_close_is_tracked() {
    let mut registry = registry_with(&[1, 2]);
    let mut quit = QuitGuard::new();
    handle_window_closed(&mut registry, &mut quit, WindowKey(1));
    assert!(registry.register(WindowKey(3), 3));
    assert_eq!(registry.keys(), &[WindowKey(3), WindowKey(2)]);
    assert!(!quit.is_requested());
}
