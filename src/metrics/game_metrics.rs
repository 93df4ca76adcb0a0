use std::time::{Duration, Instant};

use crate::game::TickOutcome;

/// In-memory session stats shown in the header.
///
/// The clock restarts with every snake, so `round_time` is the age of the
/// current one.
pub struct GameMetrics {
    round_started: Instant,
    pub round_time: Duration,
    pub length: usize,
    pub best_length: usize,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    fn started_at(round_started: Instant) -> Self {
        Self {
            round_started,
            round_time: Duration::ZERO,
            length: 1,
            best_length: 1,
            games_played: 0,
        }
    }

    /// Fold one tick into the stats
    pub fn record(&mut self, outcome: &TickOutcome) {
        self.record_at(outcome, Instant::now());
    }

    fn record_at(&mut self, outcome: &TickOutcome, now: Instant) {
        match *outcome {
            TickOutcome::Ate { length } => {
                self.length = length;
                self.best_length = self.best_length.max(length);
            }
            TickOutcome::Collided { final_length } => {
                self.games_played += 1;
                self.best_length = self.best_length.max(final_length);
                self.length = 1;
                self.round_started = now;
            }
            TickOutcome::Moved | TickOutcome::Quit => {}
        }
        self.round_time = now.saturating_duration_since(self.round_started);
    }

    /// `mm:ss` of the current round
    pub fn format_time(&self) -> String {
        let secs = self.round_time.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
