use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    /// Start over; the play loop only honours it once a game has ended
    Restart,
    Quit,
    None,
}

/// Maps raw key events to game actions. Arrow keys and WASD steer.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Up => KeyAction::Turn(Direction::Up),
            KeyCode::Down => KeyAction::Turn(Direction::Down),
            KeyCode::Left => KeyAction::Turn(Direction::Left),
            KeyCode::Right => KeyAction::Turn(Direction::Right),
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(c) => Self::letter_action(c.to_ascii_lowercase()),
            _ => KeyAction::None,
        }
    }

    fn letter_action(c: char) -> KeyAction {
        match c {
            'w' => KeyAction::Turn(Direction::Up),
            's' => KeyAction::Turn(Direction::Down),
            'a' => KeyAction::Turn(Direction::Left),
            'd' => KeyAction::Turn(Direction::Right),
            ' ' | 'r' => KeyAction::Restart,
            'q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
