//! Search statistics.
//!
//! Plain counters owned by one engine run and returned with its report.

use std::time::Duration;

/// A* statistics.
///
/// # Example
///
/// ```
/// use planforge_solver::stats::AStarStats;
///
/// let mut stats = AStarStats::default();
/// stats.record_pop();
/// stats.record_expansion();
/// stats.record_generated();
/// stats.record_generated();
/// stats.record_closed_prune();
///
/// assert_eq!(stats.popped, 1);
/// assert_eq!(stats.explored, 1);
/// assert_eq!(stats.generated, 2);
/// assert_eq!(stats.branching_factor(), 2.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AStarStats {
    /// Nodes taken off the open list, including the goal node and stale pops.
    pub popped: u64,
    /// Nodes popped, goal-tested and expanded (stale pops excluded).
    pub explored: u64,
    /// Successor nodes pushed on the open list.
    pub generated: u64,
    /// Successors dropped because their state was already closed.
    pub closed_prunes: u64,
    /// Successors dropped by open-list duplicate suppression.
    pub open_prunes: u64,
    /// Popped nodes discarded because their state was already closed.
    pub stale_pops: u64,
    /// Largest open-list size.
    pub open_high_water: usize,
    /// Path cost of the goal node, if one was reached.
    pub goal_cost: Option<u32>,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl AStarStats {
    pub fn record_pop(&mut self) {
        self.popped += 1;
    }

    pub fn record_expansion(&mut self) {
        self.explored += 1;
    }

    pub fn record_generated(&mut self) {
        self.generated += 1;
    }

    pub fn record_closed_prune(&mut self) {
        self.closed_prunes += 1;
    }

    pub fn record_open_prune(&mut self) {
        self.open_prunes += 1;
    }

    pub fn record_stale_pop(&mut self) {
        self.stale_pops += 1;
    }

    /// Average number of successors pushed per expansion.
    pub fn branching_factor(&self) -> f64 {
        if self.explored == 0 {
            0.0
        } else {
            self.generated as f64 / self.explored as f64
        }
    }

    /// Expansions per second.
    pub fn nodes_per_second(&self) -> u64 {
        per_second(self.explored, self.elapsed)
    }
}

/// Why a single rollout ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloutEnd {
    /// The goal was satisfied.
    Goal,
    /// No action was applicable.
    DeadEnd,
    /// The depth bound was reached.
    DepthLimit,
    /// The time budget ran out mid-rollout.
    TimeLimit,
}

/// Monte Carlo statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonteCarloStats {
    /// Rollouts started.
    pub simulations: u64,
    /// Rollouts that reached the goal.
    pub successes: u64,
    pub dead_ends: u64,
    pub depth_aborts: u64,
    pub time_aborts: u64,
    /// `(simulation index, plan length)` each time the best plan improved.
    /// Lengths are strictly decreasing.
    pub improvements: Vec<(u64, usize)>,
    pub elapsed: Duration,
}

impl MonteCarloStats {
    pub fn record_rollout(&mut self, end: RolloutEnd) {
        self.simulations += 1;
        match end {
            RolloutEnd::Goal => self.successes += 1,
            RolloutEnd::DeadEnd => self.dead_ends += 1,
            RolloutEnd::DepthLimit => self.depth_aborts += 1,
            RolloutEnd::TimeLimit => self.time_aborts += 1,
        }
    }

    pub fn record_improvement(&mut self, simulation: u64, length: usize) {
        self.improvements.push((simulation, length));
    }

    /// Share of rollouts that reached the goal.
    pub fn success_rate(&self) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            self.successes as f64 / self.simulations as f64
        }
    }

    /// Rollouts per second.
    pub fn simulations_per_second(&self) -> u64 {
        per_second(self.simulations, self.elapsed)
    }
}

fn per_second(count: u64, elapsed: Duration) -> u64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        (count as f64 / secs) as u64
    } else {
        0
    }
}
