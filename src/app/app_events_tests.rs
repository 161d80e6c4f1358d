use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

use crate::lookup::LookupRequest;
use crate::test_utils::test_helpers::{key, key_with_mods, test_app};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_ctrl_c_quits() {
    let mut harness = test_app();
    harness
        .app
        .handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(harness.app.should_quit());
}

#[test]
fn test_esc_quits() {
    let mut harness = test_app();
    harness.app.handle_key_event(key(KeyCode::Esc));
    assert!(harness.app.should_quit());
}

#[test]
fn test_typed_characters_reach_controller() {
    let mut harness = test_app();
    harness.app.handle_event(Event::Key(key(KeyCode::Char('c'))));
    harness.app.handle_event(Event::Key(key(KeyCode::Char('a'))));

    assert_eq!(harness.app.word(), "ca");
    assert!(!harness.app.should_quit());
}

#[test]
fn test_key_release_is_ignored() {
    let mut harness = test_app();
    let release = KeyEvent {
        code: KeyCode::Char('x'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    harness.app.handle_event(Event::Key(release));

    assert_eq!(harness.app.word(), "");
}

#[test]
fn test_paste_event_reaches_controller() {
    let mut harness = test_app();
    harness
        .app
        .handle_event(Event::Paste("ice\ncream".to_string()));

    assert_eq!(harness.app.word(), "ice cream");
}

#[test]
fn test_page_keys_scroll_definitions() {
    let mut harness = test_app();

    harness.app.handle_key_event(key(KeyCode::PageDown));
    assert_eq!(harness.app.definitions_scroll, 10);

    harness.app.handle_key_event(key(KeyCode::PageUp));
    harness.app.handle_key_event(key(KeyCode::PageUp));
    assert_eq!(harness.app.definitions_scroll, 0);
}

#[test]
fn test_enter_resets_scroll_and_commits() {
    let mut harness = test_app();
    harness.app.controller.set_input("cat");
    harness.app.definitions_scroll = 20;

    harness.app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(harness.app.definitions_scroll, 0);
    assert!(harness.app.controller.is_defining());

    let mut defined = Vec::new();
    while let Ok(request) = harness.requests.try_recv() {
        if let LookupRequest::Define { word, .. } = request {
            defined.push(word);
        }
    }
    assert_eq!(defined, vec!["cat".to_string()]);
}

#[test]
fn test_wheel_scrolls_only_over_definitions() {
    let mut harness = test_app();
    harness.app.regions.input_field = Some(Rect::new(0, 0, 80, 3));
    harness.app.regions.definitions = Some(Rect::new(0, 3, 80, 20));

    harness
        .app
        .handle_mouse_event(mouse(MouseEventKind::ScrollDown, 10, 10));
    assert_eq!(harness.app.definitions_scroll, 3);

    harness
        .app
        .handle_mouse_event(mouse(MouseEventKind::ScrollDown, 10, 1));
    assert_eq!(harness.app.definitions_scroll, 3);

    harness
        .app
        .handle_mouse_event(mouse(MouseEventKind::ScrollUp, 10, 10));
    assert_eq!(harness.app.definitions_scroll, 0);
}

#[test]
fn test_left_click_outside_popup_does_nothing() {
    let mut harness = test_app();
    harness.app.regions.definitions = Some(Rect::new(0, 3, 80, 20));

    harness.app.handle_mouse_event(mouse(
        MouseEventKind::Down(MouseButton::Left),
        10,
        10,
    ));

    assert!(!harness.app.controller.is_defining());
    assert!(harness.requests.try_recv().is_err());
}
