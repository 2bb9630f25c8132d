/// Input sampling.
///
/// Terminal events arrive whenever they like; the simulation must see one
/// consistent view per tick. `InputState` accumulates events between ticks
/// and `snapshot` freezes them into an `InputSnapshot` exactly once per
/// tick.
///
/// Held keys use the same model as a terminal shooter needs everywhere: the
/// frame number of the last press/repeat is recorded, and a key counts as
/// held while that frame is within `HOLD_WINDOW`. Terminals with keyboard
/// enhancement send releases and the key is dropped immediately; classic
/// terminals only send repeats, which refresh the entry.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// A key counts as held for this many frames after its last press/repeat.
pub const HOLD_WINDOW: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    RotateLeft,
    RotateRight,
}

/// Buttons driving the overlay state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Start,
    NextLevel,
    BuyAmmo,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}

/// Read-only view of the controls for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub fire: bool,
    /// Heading change from pointer motion, already scaled by sensitivity.
    pub pointer_turn: f32,
}

/// Terminal cells covered by the render surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceArea {
    pub cols: u16,
    pub rows: u16,
}

impl SurfaceArea {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column < self.cols && row < self.rows
    }
}

pub fn action_for(code: &KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Action::Forward),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Action::Back),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::StrafeLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::StrafeRight),
        KeyCode::Left => Some(Action::RotateLeft),
        KeyCode::Right => Some(Action::RotateRight),
        _ => None,
    }
}

pub fn control_for(code: &KeyCode) -> Option<Control> {
    match code {
        KeyCode::Enter => Some(Control::Start),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Control::NextLevel),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(Control::BuyAmmo),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Control::Restart),
        _ => None,
    }
}

pub fn is_fire(code: &KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Char('F')
    )
}

#[derive(Debug)]
pub struct InputState {
    /// Each held action → the frame it was last seen.
    held: HashMap<Action, u64>,
    fire_queued: bool,
    controls: Vec<Control>,
    captured: bool,
    last_pointer_column: Option<u16>,
    pointer_dx: f32,
    sensitivity: f32,
}

impl InputState {
    pub fn new(sensitivity: f32) -> Self {
        InputState {
            held: HashMap::new(),
            fire_queued: false,
            controls: Vec::new(),
            captured: false,
            last_pointer_column: None,
            pointer_dx: 0.0,
            sensitivity,
        }
    }

    pub fn pointer_captured(&self) -> bool {
        self.captured
    }

    pub fn is_held(&self, action: Action, frame: u64) -> bool {
        self.held
            .get(&action)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn handle_event(&mut self, event: &Event, frame: u64, surface: SurfaceArea) -> InputOutcome {
        match event {
            Event::Key(key) => self.handle_key(key, frame),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse, surface);
                InputOutcome::Continue
            }
            Event::FocusLost => {
                self.release_pointer();
                self.held.clear();
                InputOutcome::Continue
            }
            _ => InputOutcome::Continue,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, frame: u64) -> InputOutcome {
        match key.kind {
            KeyEventKind::Press => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return InputOutcome::Quit;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => return InputOutcome::Quit,
                    KeyCode::Esc if self.captured => {
                        self.release_pointer();
                        return InputOutcome::Continue;
                    }
                    KeyCode::Esc => return InputOutcome::Quit,
                    _ => {}
                }
                if let Some(action) = action_for(&key.code) {
                    self.held.insert(action, frame);
                }
                if let Some(control) = control_for(&key.code) {
                    self.controls.push(control);
                }
                if is_fire(&key.code) {
                    self.fire_queued = true;
                }
            }
            KeyEventKind::Repeat => {
                if let Some(action) = action_for(&key.code) {
                    self.held.insert(action, frame);
                }
            }
            KeyEventKind::Release => {
                if let Some(action) = action_for(&key.code) {
                    self.held.remove(&action);
                }
            }
        }
        InputOutcome::Continue
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, surface: SurfaceArea) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !self.captured && surface.contains(mouse.column, mouse.row) {
                    self.captured = true;
                    self.last_pointer_column = Some(mouse.column);
                }
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) if self.captured => {
                if let Some(last) = self.last_pointer_column {
                    self.pointer_dx += mouse.column as f32 - last as f32;
                }
                self.last_pointer_column = Some(mouse.column);
            }
            _ => {}
        }
    }

    fn release_pointer(&mut self) {
        self.captured = false;
        self.last_pointer_column = None;
        self.pointer_dx = 0.0;
    }

    /// Freeze the current input for one tick and reset the one-shot parts.
    pub fn snapshot(&mut self, frame: u64) -> InputSnapshot {
        let snapshot = InputSnapshot {
            forward: self.is_held(Action::Forward, frame),
            back: self.is_held(Action::Back, frame),
            strafe_left: self.is_held(Action::StrafeLeft, frame),
            strafe_right: self.is_held(Action::StrafeRight, frame),
            rotate_left: self.is_held(Action::RotateLeft, frame),
            rotate_right: self.is_held(Action::RotateRight, frame),
            fire: self.fire_queued,
            pointer_turn: self.pointer_dx * self.sensitivity,
        };
        self.fire_queued = false;
        self.pointer_dx = 0.0;
        snapshot
    }

    /// Control presses since the last call, oldest first.
    pub fn take_controls(&mut self) -> Vec<Control> {
        std::mem::take(&mut self.controls)
    }
}
