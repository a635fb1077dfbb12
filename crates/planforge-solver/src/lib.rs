//! PlanForge Solver - State-space search engines
//!
//! This crate provides:
//! - [`AStarSearch`]: weighted A* with open/closed bookkeeping
//! - [`MonteCarloSearch`]: random rollouts keeping the shortest plan
//! - Termination conditions and per-run statistics
//! - [`Planner`]: engines built from a [`PlannerConfig`](planforge_config::PlannerConfig)

pub mod frontier;
pub mod node;
pub mod planner;
pub mod scope;
pub mod search;
pub mod stats;
pub mod termination;

pub use frontier::{ClosedSet, OpenCosts, OpenList};
pub use node::SearchNode;
pub use planner::Planner;
pub use scope::SearchScope;
pub use search::{
    AStarReport, AStarSearch, MonteCarloReport, MonteCarloSearch, SearchOutcome,
};
pub use stats::{AStarStats, MonteCarloStats, RolloutEnd};
pub use termination::{OrTermination, StepCountTermination, Termination, TimeTermination};
