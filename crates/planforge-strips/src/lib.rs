//! PlanForge STRIPS - Ground propositional planning model
//!
//! A concrete model for the search engines in `planforge-solver`:
//! - [`FactState`]: bit-set world states
//! - [`Condition`] / [`Effect`]: literal conjunctions and add/delete lists
//! - [`GroundAction`] / [`GroundProblem`]: actions with conditional effects
//! - [`ProblemBuilder`] and [`ProblemFile`] for construction by fact name
//! - [`RelaxedHeuristic`]: delete-relaxation heuristics

pub mod file;
pub mod heuristic;
pub mod problem;
pub mod state;

pub use file::{load_problem, ActionSpec, ProblemFile, WhenSpec};
pub use heuristic::{RelaxedHeuristic, RelaxedKind};
pub use problem::{ActionBuilder, GroundAction, GroundProblem, ProblemBuilder, WhenBuilder};
pub use state::{Condition, Effect, FactId, FactState};
