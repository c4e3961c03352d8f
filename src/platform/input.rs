//! Keyboard tracking
//!
//! winit delivers press/release events; the simulation wants to know which
//! keys are down right now. `KeyboardState` bridges the two.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::sim::TickInput;

/// The four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Map a physical key to a movement direction (arrow keys only)
pub fn map_key(key_code: KeyCode) -> Option<Direction> {
    match key_code {
        KeyCode::ArrowUp => Some(Direction::Up),
        KeyCode::ArrowDown => Some(Direction::Down),
        KeyCode::ArrowLeft => Some(Direction::Left),
        KeyCode::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}

/// Which movement keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    held: TickInput,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event. Returns false for keys the game ignores.
    pub fn handle_key(&mut self, key_code: KeyCode, state: ElementState) -> bool {
        let Some(direction) = map_key(key_code) else {
            return false;
        };
        let pressed = state.is_pressed();
        match direction {
            Direction::Up => self.held.up = pressed,
            Direction::Down => self.held.down = pressed,
            Direction::Left => self.held.left = pressed,
            Direction::Right => self.held.right = pressed,
        }
        true
    }

    /// Forget everything, e.g. when the window loses focus and release
    /// events stop arriving.
    pub fn release_all(&mut self) {
        self.held = TickInput::default();
    }

    /// Keys held at this instant
    pub fn snapshot(&self) -> TickInput {
        self.held
    }
}
