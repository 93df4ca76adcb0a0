//! Runs the simulation without a terminal
//!
//! Input comes from [`RandomInput`] and frames go to an off-screen
//! [`BoardCanvas`]. Useful for soak runs and for checking the loop on
//! machines without a TTY.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::clock::{Clock, IntervalClock, Unthrottled};
use crate::game::{GameConfig, GameLoop, RunSummary, TickOutcome};
use crate::input::RandomInput;
use crate::render::BoardCanvas;

/// Probability of a random key press per tick
const TURN_CHANCE: f64 = 0.15;

pub struct HeadlessMode {
    game: GameLoop,
    canvas: BoardCanvas,
    input: RandomInput,
    max_ticks: u64,
    paced: bool,
}

impl HeadlessMode {
    /// `paced` keeps the configured tick rate, otherwise ticks run back to back
    pub fn new(config: GameConfig, max_ticks: u64, paced: bool) -> Result<Self> {
        let input = RandomInput::new(config.seed, TURN_CHANCE);
        let game = GameLoop::new(config).context("Invalid game configuration")?;
        let canvas = BoardCanvas::new(*game.grid(), game.config().palette.background);

        Ok(Self {
            game,
            canvas,
            input,
            max_ticks,
            paced,
        })
    }

    pub fn canvas(&self) -> &BoardCanvas {
        &self.canvas
    }

    pub async fn run(&mut self) -> Result<RunSummary> {
        let summary = if self.paced {
            let mut clock = IntervalClock::new(self.game.config().ticks_per_second);
            self.run_with(&mut clock).await?
        } else {
            self.run_with(&mut Unthrottled).await?
        };

        info!(
            ticks = summary.ticks,
            food_eaten = summary.food_eaten,
            resets = summary.resets,
            best_length = summary.best_length,
            "headless run completed"
        );
        Ok(summary)
    }

    async fn run_with<C: Clock>(&mut self, clock: &mut C) -> Result<RunSummary> {
        self.game
            .run(
                &mut self.canvas,
                &mut self.input,
                clock,
                Some(self.max_ticks),
                |_, game, outcome| {
                    match outcome {
                        TickOutcome::Ate { length } => {
                            debug!(length, tick = game.summary().ticks, "grew")
                        }
                        TickOutcome::Collided { final_length } => {
                            debug!(final_length, tick = game.summary().ticks, "reset")
                        }
                        TickOutcome::Moved | TickOutcome::Quit => {}
                    }
                    Ok(())
                },
            )
            .await
    }
}
