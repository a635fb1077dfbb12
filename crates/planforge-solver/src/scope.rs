//! Per-run search scope.

use std::time::{Duration, Instant};

/// Clock and step counter of one engine run.
///
/// A step is one node expansion for A* and one rollout for Monte Carlo.
#[derive(Debug, Clone)]
pub struct SearchScope {
    start_time: Instant,
    step_count: u64,
}

impl SearchScope {
    /// Starts the clock.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            step_count: 0,
        }
    }

    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Increments and returns the step count.
    pub fn increment_step_count(&mut self) -> u64 {
        self.step_count += 1;
        self.step_count
    }
}

impl Default for SearchScope {
    fn default() -> Self {
        Self::new()
    }
}
