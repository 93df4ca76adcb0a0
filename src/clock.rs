//! Tick pacing

use std::future::Future;
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior, interval};

/// Paces the simulation. `tick` resolves when the next tick is due.
pub trait Clock {
    fn tick(&mut self) -> impl Future<Output = ()>;
}

/// Fixed ticks-per-second limiter.
///
/// A late tick pushes the schedule back instead of firing a burst to catch up.
/// Must be created inside a tokio runtime.
pub struct IntervalClock {
    interval: Interval,
}

impl IntervalClock {
    pub fn new(ticks_per_second: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / f64::from(ticks_per_second.max(1)));
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

impl Clock for IntervalClock {
    async fn tick(&mut self) {
        self.interval.tick().await;
    }
}

/// Never sleeps
#[derive(Debug, Default, Clone, Copy)]
pub struct Unthrottled;

impl Clock for Unthrottled {
    async fn tick(&mut self) {
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_interval_period() {
        let clock = IntervalClock::new(20);
        assert_eq!(clock.period(), Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_clock_paces_ticks() {
        let mut clock = IntervalClock::new(20);
        let start = tokio::time::Instant::now();

        // First tick is immediate
        clock.tick().await;
        for _ in 0..4 {
            clock.tick().await;
        }

        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test]
    async fn test_unthrottled_returns() {
        let mut clock = Unthrottled;
        for _ in 0..10 {
            clock.tick().await;
        }
    }
}
