use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, InputEvent};

/// Maps terminal keys onto game input
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// `None` for keys the game does not care about
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<InputEvent> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(InputEvent::Quit);
        }

        let direction = match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Direction::Up,
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Direction::Down,
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Direction::Left,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Direction::Right,

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                return Some(InputEvent::Quit);
            }

            _ => return None,
        };

        Some(InputEvent::Key(direction))
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
