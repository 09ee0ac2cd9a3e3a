//! Fixed-tick scheduler
//!
//! Wall-clock time goes in, whole ticks come out. Leftover time stays in the
//! accumulator for the next call.

use std::time::Duration;

use crate::core::types::Tick;

/// Convert a duration in seconds to ticks at `tick_rate`
///
/// Rounds to the nearest tick. Any positive duration lasts at least one
/// tick; zero or negative durations are zero ticks.
pub fn secs_to_ticks(secs: f32, tick_rate: u32) -> Tick {
    if !(secs > 0.0) {
        return 0;
    }
    ((secs * tick_rate as f32).round() as Tick).max(1)
}

#[derive(Debug, Clone)]
pub struct FixedTickScheduler {
    tick_rate: u32,
    tick_duration: Duration,
    accumulator: Duration,
    current_tick: Tick,
    /// Upper bound on ticks returned by one `advance`; excess time is dropped
    max_steps: u32,
}

impl FixedTickScheduler {
    /// Scheduler running at `tick_rate` ticks per second (0 is raised to 1)
    ///
    /// At most one second of ticks is released per `advance`.
    pub fn new(tick_rate: u32) -> Self {
        let tick_rate = tick_rate.max(1);
        Self {
            tick_rate,
            tick_duration: Duration::from_secs(1) / tick_rate,
            accumulator: Duration::ZERO,
            current_tick: 0,
            max_steps: tick_rate,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    pub fn secs_to_ticks(&self, secs: f32) -> Tick {
        secs_to_ticks(secs, self.tick_rate)
    }

    /// Add elapsed time and return how many ticks are now due
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= self.tick_duration {
            if steps == self.max_steps {
                tracing::warn!(
                    "Scheduler fell behind, dropping {:?} of simulation time",
                    self.accumulator
                );
                self.accumulator = Duration::ZERO;
                break;
            }
            self.accumulator -= self.tick_duration;
            steps += 1;
        }

        self.current_tick += steps as Tick;
        steps
    }
}
