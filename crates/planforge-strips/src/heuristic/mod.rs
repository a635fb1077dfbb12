//! Delete-relaxation heuristics.
//!
//! All heuristics here ignore delete lists and negative literals, then
//! estimate the goal cost from the relaxed reachability fixpoint.

mod relaxed;

pub use relaxed::{RelaxedHeuristic, RelaxedKind};
