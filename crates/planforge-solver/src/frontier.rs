//! Open and closed lists.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

/// Heap entry referring to a node in the arena.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the lowest `f`, then the
/// lowest `h`, then the earliest insertion.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    priority: f64,
    heuristic: f64,
    seq: u64,
    node: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.heuristic.total_cmp(&self.heuristic))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue of node indices keyed by `f = w*h + g`.
///
/// # Example
///
/// ```
/// use planforge_solver::OpenList;
///
/// let mut open = OpenList::new();
/// open.push(0, 5.0, 3.0);
/// open.push(1, 5.0, 1.0);
/// open.push(2, 4.0, 4.0);
///
/// assert_eq!(open.pop(), Some(2));
/// assert_eq!(open.pop(), Some(1)); // equal f, lower h first
/// assert_eq!(open.pop(), Some(0));
/// assert_eq!(open.high_water(), 3);
/// ```
#[derive(Debug, Default)]
pub struct OpenList {
    heap: BinaryHeap<OpenEntry>,
    next_seq: u64,
    high_water: usize,
}

impl OpenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes node `node` with priority `f` and heuristic `h`.
    pub fn push(&mut self, node: usize, priority: f64, heuristic: f64) {
        self.heap.push(OpenEntry {
            priority,
            heuristic,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Pops the index of the minimum-priority node.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the list ever reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

/// States already popped from the open list.
#[derive(Debug)]
pub struct ClosedSet<S> {
    states: HashSet<S>,
}

impl<S: Eq + Hash> ClosedSet<S> {
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
        }
    }

    /// Records `state`. Returns false if it was already closed.
    pub fn insert(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Eq + Hash> Default for ClosedSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheapest known path cost of every state pushed on the open list.
///
/// Only consulted when open-list duplicate suppression is enabled.
#[derive(Debug)]
pub struct OpenCosts<S> {
    costs: HashMap<S, u32>,
}

impl<S: Eq + Hash> OpenCosts<S> {
    pub fn new() -> Self {
        Self {
            costs: HashMap::new(),
        }
    }

    /// Records `cost` for `state` unless an entry at least as cheap exists.
    ///
    /// Returns true if the caller should push the state.
    pub fn offer(&mut self, state: &S, cost: u32) -> bool
    where
        S: Clone,
    {
        match self.costs.get_mut(state) {
            Some(known) if *known <= cost => false,
            Some(known) => {
                *known = cost;
                true
            }
            None => {
                self.costs.insert(state.clone(), cost);
                true
            }
        }
    }
}

impl<S: Eq + Hash> Default for OpenCosts<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_among_full_ties() {
        let mut open = OpenList::new();
        for node in 0..5 {
            open.push(node, 1.0, 1.0);
        }
        let order: Vec<_> = std::iter::from_fn(|| open.pop()).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_infinite_priority_pops_last() {
        let mut open = OpenList::new();
        open.push(0, f64::INFINITY, f64::INFINITY);
        open.push(1, 100.0, 99.0);
        assert_eq!(open.pop(), Some(1));
        assert_eq!(open.pop(), Some(0));
        assert!(open.is_empty());
    }

    #[test]
    fn test_high_water_survives_pops() {
        let mut open = OpenList::new();
        open.push(0, 1.0, 0.0);
        open.push(1, 2.0, 0.0);
        open.pop();
        open.pop();
        open.push(2, 3.0, 0.0);
        assert_eq!(open.len(), 1);
        assert_eq!(open.high_water(), 2);
    }

    #[test]
    fn test_closed_set_rejects_duplicates() {
        let mut closed = ClosedSet::new();
        assert!(closed.insert("s0"));
        assert!(!closed.insert("s0"));
        assert!(closed.contains(&"s0"));
        assert_eq!(closed.len(), 1);
    }

    #[test]
    fn test_open_costs_keep_cheapest() {
        let mut costs = OpenCosts::new();
        assert!(costs.offer(&"s", 5));
        assert!(!costs.offer(&"s", 5));
        assert!(!costs.offer(&"s", 6));
        assert!(costs.offer(&"s", 3));
        assert!(costs.offer(&"t", 4));
    }
}
