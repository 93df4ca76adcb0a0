use super::{
    action::InputEvent,
    config::{ConfigError, GameConfig},
    food::Food,
    grid::{Grid, Position},
    snake::Snake,
};
use crate::clock::Clock;
use crate::input::InputSource;
use crate::render::{self, RenderSink};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Quit was requested; nothing moved
    Quit,
    Moved,
    /// Head landed on the food
    Ate { length: usize },
    /// Head ran into the body; the snake has been reset
    Collided { final_length: usize },
}

impl TickOutcome {
    /// The board has to be repainted from scratch
    pub fn needs_full_redraw(&self) -> bool {
        matches!(self, TickOutcome::Collided { .. })
    }
}

/// Totals for one run of the loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub food_eaten: u64,
    pub resets: u64,
    pub best_length: usize,
}

/// Owns the snake and the food and advances them one tick at a time
pub struct GameLoop {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Food,
    rng: StdRng,
    summary: RunSummary,
}

impl GameLoop {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let grid = Grid::from_config(&config)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let snake = Snake::new(grid);
        let food = Food::spawn(&grid, &mut rng, &snake.occupied_cells());

        Ok(Self {
            config,
            grid,
            snake,
            food,
            rng,
            summary: RunSummary {
                best_length: 1,
                ..Default::default()
            },
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Move the food to a chosen cell
    pub fn place_food(&mut self, position: Position) {
        self.food.place_at(position);
    }

    /// Advance the simulation by one tick using the events gathered since
    /// the previous one.
    pub fn step(&mut self, events: &[InputEvent]) -> TickOutcome {
        for event in events {
            match *event {
                InputEvent::Quit => return TickOutcome::Quit,
                InputEvent::Key(direction) => self.snake.queue_direction(direction),
            }
        }

        self.snake.commit_direction();
        self.snake.move_forward();
        self.summary.ticks += 1;

        if self.snake.has_self_collision() {
            let final_length = self.snake.length();
            info!(final_length, ticks = self.summary.ticks, "snake ran into itself");

            self.snake.reset(&mut self.rng);
            self.food
                .relocate(&self.grid, &mut self.rng, &self.snake.occupied_cells());
            self.summary.resets += 1;
            return TickOutcome::Collided { final_length };
        }

        if self.snake.head() == self.food.position() {
            self.snake.grow();
            self.food
                .relocate(&self.grid, &mut self.rng, &self.snake.occupied_cells());

            let length = self.snake.length();
            self.summary.food_eaten += 1;
            self.summary.best_length = self.summary.best_length.max(length);
            debug!(length, food = ?self.food.position(), "food eaten");
            return TickOutcome::Ate { length };
        }

        TickOutcome::Moved
    }

    /// Paint the whole board
    pub fn render_initial<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        sink.clear();
        self.draw_entities(sink);
    }

    /// Paint the changes of the tick that produced `outcome`
    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S, outcome: &TickOutcome) {
        match outcome {
            TickOutcome::Quit => {}
            outcome if outcome.needs_full_redraw() => self.render_initial(sink),
            _ => {
                // Erase before drawing: the head or the food may sit on the
                // vacated cell
                if let Some(tail) = self.snake.last_tail() {
                    render::erase_cell(sink, tail, &self.config.palette);
                }
                self.draw_entities(sink);
            }
        }
    }

    fn draw_entities<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        let palette = &self.config.palette;
        render::draw_food(sink, self.food.position(), palette);
        render::draw_snake(sink, &self.snake, palette);
    }

    /// Drive the loop until quit, or until `max_ticks` ticks have run.
    ///
    /// `on_frame` is called after every rendered tick, e.g. to present the
    /// sink on screen.
    pub async fn run<S, I, C, F>(
        &mut self,
        sink: &mut S,
        input: &mut I,
        clock: &mut C,
        max_ticks: Option<u64>,
        mut on_frame: F,
    ) -> Result<RunSummary>
    where
        S: RenderSink,
        I: InputSource,
        C: Clock,
        F: FnMut(&S, &GameLoop, &TickOutcome) -> Result<()>,
    {
        self.render_initial(sink);
        on_frame(&*sink, &*self, &TickOutcome::Moved)?;

        let mut ticks_run = 0u64;
        loop {
            if max_ticks.is_some_and(|limit| ticks_run >= limit) {
                debug!(ticks_run, "tick limit reached");
                break;
            }

            clock.tick().await;
            let events = input.poll_events()?;

            let outcome = self.step(&events);
            if outcome == TickOutcome::Quit {
                info!(ticks_run, "quit requested");
                break;
            }
            ticks_run += 1;

            self.render(sink, &outcome);
            on_frame(&*sink, &*self, &outcome)?;
        }

        Ok(self.summary)
    }
}
