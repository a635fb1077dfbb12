//! Search engines and their reports.
//!
//! - [`AStarSearch`]: weighted A* over the full state space
//! - [`MonteCarloSearch`]: repeated uniform random rollouts

mod astar;
mod montecarlo;

use std::time::Duration;

use planforge_core::{Plan, PlanForgeError, Result};

use crate::stats::{AStarStats, MonteCarloStats};
use crate::termination::Termination;

pub use astar::AStarSearch;
pub use montecarlo::MonteCarloSearch;

/// Rejects a zero wall-clock limit before a run starts.
fn check_time_limit<T: Termination>(termination: &T) -> Result<()> {
    if termination.time_limit() == Some(Duration::ZERO) {
        return Err(PlanForgeError::InvalidConfiguration(
            "timeout must be > 0".to_string(),
        ));
    }
    Ok(())
}

/// How an A* run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A goal node was popped; carries the plan that reaches it.
    Succeeded(Plan),
    /// The open list ran empty: the goal is unreachable.
    Exhausted,
    /// The time budget ran out first.
    TimedOut,
}

impl SearchOutcome {
    pub fn plan(&self) -> Option<&Plan> {
        match self {
            SearchOutcome::Succeeded(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn into_plan(self) -> Option<Plan> {
        match self {
            SearchOutcome::Succeeded(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Succeeded(_))
    }

    /// Short lowercase label used in log events.
    pub fn label(&self) -> &'static str {
        match self {
            SearchOutcome::Succeeded(_) => "succeeded",
            SearchOutcome::Exhausted => "exhausted",
            SearchOutcome::TimedOut => "timed_out",
        }
    }
}

/// Result of an A* run.
#[derive(Debug, Clone)]
pub struct AStarReport {
    pub outcome: SearchOutcome,
    pub stats: AStarStats,
}

impl AStarReport {
    pub fn plan(&self) -> Option<&Plan> {
        self.outcome.plan()
    }

    pub fn into_plan(self) -> Option<Plan> {
        self.outcome.into_plan()
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

/// Result of a Monte Carlo run.
#[derive(Debug, Clone)]
pub struct MonteCarloReport {
    /// Shortest plan found by any rollout.
    pub plan: Option<Plan>,
    /// True if the time budget, not the rollout budget, ended the run.
    pub timed_out: bool,
    pub stats: MonteCarloStats,
}

impl MonteCarloReport {
    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    pub fn into_plan(self) -> Option<Plan> {
        self.plan
    }

    pub fn is_success(&self) -> bool {
        self.plan.is_some()
    }
}
