//! Per-frame input snapshot
//!
//! The driver owns an `InputState` and mutates it from key events; the
//! session reads it at one well-defined point per frame. Passing it in by
//! reference (instead of a process-wide latch) keeps the core deterministic
//! and lets tests feed synthetic input sequences.

/// Logical game actions, decoupled from physical key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    Shoot,
    Restart,
}

impl Action {
    /// Map a browser `KeyboardEvent.code` to an action
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Action::Left),
            "ArrowRight" | "KeyD" => Some(Action::Right),
            "ArrowUp" | "KeyW" => Some(Action::Up),
            "ArrowDown" | "KeyS" => Some(Action::Down),
            "Space" => Some(Action::Shoot),
            "KeyR" => Some(Action::Restart),
            _ => None,
        }
    }
}

/// Currently-held state for every action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub shoot: bool,
    pub restart: bool,
}

impl InputState {
    /// Update the held flag for one action (key down/up)
    pub fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::Left => self.left = held,
            Action::Right => self.right = held,
            Action::Up => self.up = held,
            Action::Down => self.down = held,
            Action::Shoot => self.shoot = held,
            Action::Restart => self.restart = held,
        }
    }

    /// Horizontal movement axis: -1 (left), 0, or +1 (right)
    pub fn axis_x(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }

    /// Depth movement axis: -1 (up/away), 0, or +1 (down/toward camera)
    pub fn axis_z(&self) -> f32 {
        (self.down as i8 - self.up as i8) as f32
    }
}
