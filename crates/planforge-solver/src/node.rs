//! Search node representation.
//!
//! Each node pairs a state with the bookkeeping needed to rebuild the path
//! that reached it.

use std::hash::{Hash, Hasher};

use planforge_core::PlanningState;

/// A node in the search graph.
///
/// Each node holds:
/// - The state it represents (owned, never mutated)
/// - The index of its parent in the node arena (`None` for the root)
/// - The index of the action that produced it (`None` for the root)
/// - The path cost `g` (unit-cost action count)
/// - The heuristic estimate `h`, computed once at creation
///
/// Equality and hashing look at the state only.
#[derive(Debug, Clone)]
pub struct SearchNode<S: PlanningState> {
    state: S,
    parent: Option<usize>,
    action: Option<usize>,
    cost: u32,
    heuristic: f64,
}

impl<S: PlanningState> SearchNode<S> {
    /// Creates the root node.
    pub fn root(state: S, heuristic: f64) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            cost: 0,
            heuristic,
        }
    }

    /// Creates a child node reached from `parent` through `action`.
    pub fn new(state: S, parent: usize, action: usize, cost: u32, heuristic: f64) -> Self {
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
            cost,
            heuristic,
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    #[inline]
    pub fn action(&self) -> Option<usize> {
        self.action
    }

    #[inline]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    #[inline]
    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    /// Returns `weight * h + g`.
    ///
    /// # Example
    ///
    /// ```
    /// use planforge_solver::SearchNode;
    /// # #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    /// # struct S;
    /// # impl planforge_core::PlanningState for S {
    /// #     type Condition = ();
    /// #     type Effect = ();
    /// #     fn satisfies(&self, _: &()) -> bool { true }
    /// #     fn apply(&mut self, _: &()) {}
    /// # }
    ///
    /// let node = SearchNode::new(S, 0, 3, 4, 2.5);
    /// assert_eq!(node.priority(2.0), 9.0);
    /// ```
    #[inline]
    pub fn priority(&self, weight: f64) -> f64 {
        weight * self.heuristic + f64::from(self.cost)
    }

    /// Returns true if this is the root node.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl<S: PlanningState> PartialEq for SearchNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: PlanningState> Eq for SearchNode<S> {}

impl<S: PlanningState> Hash for SearchNode<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}
