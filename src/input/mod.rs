//! Input sources polled once per tick

pub mod handler;
pub mod sources;

pub use handler::InputHandler;
pub use sources::{RandomInput, ScriptedInput, TerminalInput};

use anyhow::Result;

use crate::game::InputEvent;

/// Non-blocking producer of input events.
///
/// Each poll returns whatever arrived since the previous one, possibly nothing.
pub trait InputSource {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>>;
}
