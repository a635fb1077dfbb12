//! Domain traits for planning problems.
//!
//! The search engines never look inside a state, a condition or an effect.
//! They only ask the problem model three questions:
//! - does this state satisfy this condition?
//! - is this action applicable here?
//! - what state results from applying this action?
//!
//! Implementations live outside the core (see `planforge-strips`).

mod requirement;

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;
use crate::heuristic::{HeuristicName, StateHeuristic};

pub use requirement::{check_supported, RequireKey, UNSUPPORTED_REQUIREMENTS};

/// A world state.
///
/// Equality is structural: two states are equal iff they assign the same
/// values to the same facts. Search nodes rely on this for duplicate
/// detection, so `Hash` must agree with `Eq`.
pub trait PlanningState: Clone + Eq + Hash + Debug {
    /// Predicate over states (preconditions, effect guards, goals).
    type Condition: Debug;

    /// Change applied to a state.
    type Effect: Debug;

    /// Returns true if this state satisfies the condition.
    fn satisfies(&self, condition: &Self::Condition) -> bool;

    /// Applies an effect in place.
    ///
    /// Only ever called on a fresh copy; the state a node owns is never
    /// mutated after the node is created.
    fn apply(&mut self, effect: &Self::Effect);
}

/// An effect guarded by a condition.
///
/// The guard is evaluated against the state *before* the action is applied.
/// An unconditional effect has a guard every state satisfies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalEffect<C, E> {
    pub condition: C,
    pub effect: E,
}

impl<C, E> ConditionalEffect<C, E> {
    pub fn new(condition: C, effect: E) -> Self {
        Self { condition, effect }
    }
}

/// A ground action.
pub trait PlanningAction<S: PlanningState>: Debug {
    /// Human-readable action name used in plans and reports.
    fn name(&self) -> &str;

    /// Returns true if the action's precondition holds in `state`.
    fn is_applicable(&self, state: &S) -> bool;

    /// The ordered conditional effects of this action.
    fn conditional_effects(&self) -> &[ConditionalEffect<S::Condition, S::Effect>];

    /// Builds the successor of `state` under this action.
    ///
    /// Copies `state`, then applies every conditional effect whose guard is
    /// satisfied by the original `state`. Applicability is not checked here.
    fn successor(&self, state: &S) -> S {
        let mut next = state.clone();
        for ce in self.conditional_effects() {
            if state.satisfies(&ce.condition) {
                next.apply(&ce.effect);
            }
        }
        next
    }
}

/// A ground planning problem.
///
/// Associated types keep the engines monomorphized over the concrete model;
/// nothing in the search path goes through a trait object.
pub trait PlanningProblem {
    type State: PlanningState;
    type Action: PlanningAction<Self::State>;
    type Heuristic: StateHeuristic<Self::State>;

    /// The initial state.
    fn initial_state(&self) -> &Self::State;

    /// The goal condition.
    fn goal(&self) -> &<Self::State as PlanningState>::Condition;

    /// The ground actions, indexed `0..N`.
    fn actions(&self) -> &[Self::Action];

    /// Requirement flags declared by the problem.
    fn requirements(&self) -> &[RequireKey];

    /// Builds the heuristic registered under `name` for this problem.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the model cannot compute `name`.
    fn heuristic(&self, name: HeuristicName) -> Result<Self::Heuristic>;
}

#[cfg(test)]
mod tests;
