use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use raycast_shooter::input::*;

const SURFACE: SurfaceArea = SurfaceArea { cols: 80, rows: 24 };

// ── Helpers ───────────────────────────────────────────────────────────────────

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn key(code: KeyCode, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn feed(input: &mut InputState, event: Event, frame: u64) -> InputOutcome {
    input.handle_event(&event, frame, SURFACE)
}

// ── Held keys ─────────────────────────────────────────────────────────────────

#[test]
fn press_is_held_within_the_window() {
    let mut input = InputState::new(0.02);
    feed(&mut input, press(KeyCode::Char('w')), 10);
    assert!(input.is_held(Action::Forward, 10));
    assert!(input.is_held(Action::Forward, 10 + HOLD_WINDOW));
    assert!(!input.is_held(Action::Forward, 11 + HOLD_WINDOW));
}

#[test]
fn repeat_refreshes_and_release_drops() {
    let mut input = InputState::new(0.02);
    feed(&mut input, press(KeyCode::Left), 1);
    feed(&mut input, key(KeyCode::Left, KeyEventKind::Repeat), 20);
    assert!(input.is_held(Action::RotateLeft, 22));

    feed(&mut input, key(KeyCode::Left, KeyEventKind::Release), 22);
    assert!(!input.is_held(Action::RotateLeft, 22));
}

#[test]
fn snapshot_maps_every_movement_key() {
    let mut input = InputState::new(0.02);
    for code in [
        KeyCode::Up,
        KeyCode::Char('s'),
        KeyCode::Char('a'),
        KeyCode::Char('D'),
        KeyCode::Left,
        KeyCode::Right,
    ] {
        feed(&mut input, press(code), 5);
    }
    let snap = input.snapshot(5);
    assert!(snap.forward && snap.back);
    assert!(snap.strafe_left && snap.strafe_right);
    assert!(snap.rotate_left && snap.rotate_right);
    assert!(!snap.fire);
}

#[test]
fn focus_loss_clears_held_keys() {
    let mut input = InputState::new(0.02);
    feed(&mut input, press(KeyCode::Char('w')), 1);
    feed(&mut input, Event::FocusLost, 1);
    assert!(!input.is_held(Action::Forward, 1));
}

// ── One-shot input ────────────────────────────────────────────────────────────

#[test]
fn fire_is_consumed_by_one_snapshot() {
    let mut input = InputState::new(0.02);
    feed(&mut input, press(KeyCode::Char(' ')), 1);
    assert!(input.snapshot(1).fire);
    assert!(!input.snapshot(2).fire);

    feed(&mut input, press(KeyCode::Char('f')), 3);
    assert!(input.snapshot(3).fire);
}

#[test]
fn fire_is_not_retriggered_by_repeat() {
    let mut input = InputState::new(0.02);
    feed(&mut input, key(KeyCode::Char(' '), KeyEventKind::Repeat), 1);
    assert!(!input.snapshot(1).fire);
}

#[test]
fn controls_come_out_in_press_order() {
    let mut input = InputState::new(0.02);
    feed(&mut input, press(KeyCode::Char('b')), 1);
    feed(&mut input, press(KeyCode::Enter), 1);
    feed(&mut input, press(KeyCode::Char('N')), 2);
    feed(&mut input, press(KeyCode::Char('r')), 2);

    assert_eq!(
        input.take_controls(),
        vec![Control::BuyAmmo, Control::Start, Control::NextLevel, Control::Restart]
    );
    assert!(input.take_controls().is_empty());
}

#[test]
fn quit_keys() {
    let mut input = InputState::new(0.02);
    assert_eq!(feed(&mut input, press(KeyCode::Char('q')), 1), InputOutcome::Quit);
    assert_eq!(feed(&mut input, press(KeyCode::Esc), 1), InputOutcome::Quit);

    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(feed(&mut input, ctrl_c, 1), InputOutcome::Quit);

    // Plain 'c' is not bound to anything.
    assert_eq!(
        feed(&mut input, press(KeyCode::Char('c')), 1),
        InputOutcome::Continue
    );
}

// ── Pointer ───────────────────────────────────────────────────────────────────

#[test]
fn click_inside_the_surface_captures_the_pointer() {
    let mut input = InputState::new(0.02);
    feed(&mut input, mouse(MouseEventKind::Down(MouseButton::Left), 90, 5), 1);
    assert!(!input.pointer_captured());

    feed(&mut input, mouse(MouseEventKind::Down(MouseButton::Left), 40, 5), 1);
    assert!(input.pointer_captured());
}

#[test]
fn pointer_motion_turns_only_while_captured() {
    let mut input = InputState::new(0.05);
    feed(&mut input, mouse(MouseEventKind::Moved, 50, 5), 1);
    assert_eq!(input.snapshot(1).pointer_turn, 0.0);

    feed(&mut input, mouse(MouseEventKind::Down(MouseButton::Left), 40, 5), 2);
    feed(&mut input, mouse(MouseEventKind::Moved, 44, 5), 2);
    feed(&mut input, mouse(MouseEventKind::Drag(MouseButton::Left), 46, 5), 2);
    let turn = input.snapshot(2).pointer_turn;
    assert!((turn - 6.0 * 0.05).abs() < 1e-6);

    // Accumulated motion resets every snapshot.
    assert_eq!(input.snapshot(3).pointer_turn, 0.0);

    feed(&mut input, mouse(MouseEventKind::Moved, 40, 5), 4);
    assert!(input.snapshot(4).pointer_turn < 0.0);
}

#[test]
fn escape_releases_the_pointer_before_quitting() {
    let mut input = InputState::new(0.02);
    feed(&mut input, mouse(MouseEventKind::Down(MouseButton::Left), 10, 10), 1);
    assert!(input.pointer_captured());

    assert_eq!(feed(&mut input, press(KeyCode::Esc), 1), InputOutcome::Continue);
    assert!(!input.pointer_captured());

    feed(&mut input, mouse(MouseEventKind::Moved, 30, 10), 2);
    assert_eq!(input.snapshot(2).pointer_turn, 0.0);

    assert_eq!(feed(&mut input, press(KeyCode::Esc), 3), InputOutcome::Quit);
}

#[test]
fn surface_area_bounds() {
    assert!(SURFACE.contains(0, 0));
    assert!(SURFACE.contains(79, 23));
    assert!(!SURFACE.contains(80, 0));
    assert!(!SURFACE.contains(0, 24));
}
