use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::time::Duration;

use super::{InputHandler, InputSource};
use crate::game::{Direction, InputEvent};

/// Keyboard input from the crossterm event queue
pub struct TerminalInput {
    handler: InputHandler,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            handler: InputHandler::new(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO).context("Failed to poll terminal events")? {
            let Event::Key(key) = event::read().context("Failed to read terminal event")? else {
                continue;
            };
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(input) = self.handler.handle_key_event(key) {
                events.push(input);
            }
        }
        Ok(events)
    }
}

/// Replays a fixed batch of events per tick, then goes quiet
#[derive(Debug, Default)]
pub struct ScriptedInput {
    ticks: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(ticks: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            ticks: ticks.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.ticks.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        Ok(self.ticks.pop_front().unwrap_or_default())
    }
}

/// Presses a random arrow now and then. Drives the headless mode.
pub struct RandomInput {
    rng: StdRng,
    turn_chance: f64,
}

impl RandomInput {
    pub fn new(seed: Option<u64>, turn_chance: f64) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            turn_chance: turn_chance.clamp(0.0, 1.0),
        }
    }
}

impl InputSource for RandomInput {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        if self.rng.gen_bool(self.turn_chance) {
            Ok(vec![InputEvent::Key(Direction::random(&mut self.rng))])
        } else {
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_replays_then_empties() {
        let mut input = ScriptedInput::new([
            vec![InputEvent::Key(Direction::Up)],
            vec![],
            vec![InputEvent::Quit],
        ]);

        assert_eq!(input.poll_events().unwrap(), vec![InputEvent::Key(Direction::Up)]);
        assert!(input.poll_events().unwrap().is_empty());
        assert_eq!(input.poll_events().unwrap(), vec![InputEvent::Quit]);
        assert_eq!(input.remaining(), 0);
        assert!(input.poll_events().unwrap().is_empty());
    }

    #[test]
    fn test_random_input_bounds() {
        let mut never = RandomInput::new(Some(1), 0.0);
        let mut always = RandomInput::new(Some(1), 2.0);

        for _ in 0..50 {
            assert!(never.poll_events().unwrap().is_empty());
            let events = always.poll_events().unwrap();
            assert_eq!(events.len(), 1);
            assert!(matches!(events[0], InputEvent::Key(_)));
        }
    }
}
