//! Weighted A* search.

use std::time::{Duration, Instant};

use planforge_core::{
    check_supported, HeuristicName, Plan, PlanForgeError, PlanningAction, PlanningProblem,
    PlanningState, Result, StateHeuristic,
};
use tracing::{debug, info, trace};

use super::{check_time_limit, AStarReport, SearchOutcome};
use crate::frontier::{ClosedSet, OpenCosts, OpenList};
use crate::node::SearchNode;
use crate::scope::SearchScope;
use crate::stats::AStarStats;
use crate::termination::{Termination, TimeTermination};

/// A* search ordered by `f = weight * h + g`.
///
/// Every action costs 1. Ties on `f` go to the lower `h`, then to the node
/// pushed first. A state is expanded at most once per run; nodes whose state
/// was closed after they were pushed are discarded when popped.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use planforge_core::HeuristicName;
/// use planforge_solver::AStarSearch;
///
/// let astar = AStarSearch::new(HeuristicName::Max, 1.0, Duration::from_secs(10))
///     .with_deduplicate_open(true);
/// assert_eq!(astar.weight(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct AStarSearch<T = TimeTermination> {
    heuristic: HeuristicName,
    weight: f64,
    deduplicate_open: bool,
    termination: T,
}

impl AStarSearch<TimeTermination> {
    pub fn new(heuristic: HeuristicName, weight: f64, timeout: Duration) -> Self {
        Self {
            heuristic,
            weight,
            deduplicate_open: false,
            termination: TimeTermination::new(timeout),
        }
    }
}

impl<T: Termination> AStarSearch<T> {
    /// Skips successors whose state is already on the open list at a path
    /// cost no greater than theirs.
    pub fn with_deduplicate_open(mut self, enabled: bool) -> Self {
        self.deduplicate_open = enabled;
        self
    }

    /// Replaces the termination condition.
    pub fn with_termination<U: Termination>(self, termination: U) -> AStarSearch<U> {
        AStarSearch {
            heuristic: self.heuristic,
            weight: self.weight,
            deduplicate_open: self.deduplicate_open,
            termination,
        }
    }

    pub fn heuristic(&self) -> HeuristicName {
        self.heuristic
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Searches for a plan.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedProblem` before any expansion if the problem
    /// declares an unsupported requirement, and `InvalidConfiguration` if the
    /// weight is not a positive finite number, the time limit is zero, or the
    /// heuristic cannot be built. Running out of nodes or time is not an error; see
    /// [`SearchOutcome`].
    pub fn search<P: PlanningProblem>(&self, problem: &P) -> Result<AStarReport> {
        check_supported(problem.requirements())?;
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(PlanForgeError::InvalidConfiguration(format!(
                "heuristic weight must be > 0, got {}",
                self.weight
            )));
        }
        check_time_limit(&self.termination)?;
        let heuristic = problem.heuristic(self.heuristic)?;

        let goal = problem.goal();
        let actions = problem.actions();
        let mut scope = SearchScope::new();
        let mut stats = AStarStats::default();

        info!(
            event = "search_start",
            algorithm = "A*",
            heuristic = %self.heuristic,
            weight = self.weight,
            actions = actions.len(),
        );

        let init = problem.initial_state().clone();
        let h0 = heuristic.estimate(&init, goal);
        let mut nodes = vec![SearchNode::root(init, h0)];
        let mut open = OpenList::new();
        let mut closed = ClosedSet::new();
        let mut open_costs = OpenCosts::new();
        open.push(0, nodes[0].priority(self.weight), h0);
        if self.deduplicate_open {
            open_costs.offer(nodes[0].state(), 0);
        }

        let mut last_progress_time = Instant::now();
        let mut last_progress_explored = 0u64;

        let outcome = loop {
            if self.termination.is_terminated(&scope) {
                break SearchOutcome::TimedOut;
            }
            let Some(index) = open.pop() else {
                break SearchOutcome::Exhausted;
            };
            stats.record_pop();

            let node = &nodes[index];
            if !closed.insert(node.state().clone()) {
                stats.record_stale_pop();
                trace!(event = "stale_pop", node = index, cost = node.cost());
                continue;
            }

            if node.state().satisfies(goal) {
                stats.goal_cost = Some(node.cost());
                break SearchOutcome::Succeeded(reconstruct_plan(&nodes, index));
            }

            scope.increment_step_count();
            stats.record_expansion();

            let cost = node.cost() + 1;
            let successors: Vec<(usize, P::State)> = actions
                .iter()
                .enumerate()
                .filter(|(_, action)| action.is_applicable(node.state()))
                .map(|(i, action)| (i, action.successor(node.state())))
                .collect();

            trace!(
                event = "expand",
                node = index,
                cost = cost - 1,
                h = node.heuristic(),
                successors = successors.len(),
            );

            for (action, state) in successors {
                if closed.contains(&state) {
                    stats.record_closed_prune();
                    continue;
                }
                if self.deduplicate_open && !open_costs.offer(&state, cost) {
                    stats.record_open_prune();
                    continue;
                }
                let h = heuristic.estimate(&state, goal);
                let child = SearchNode::new(state, index, action, cost, h);
                open.push(nodes.len(), child.priority(self.weight), h);
                nodes.push(child);
                stats.record_generated();
            }

            let now = Instant::now();
            if now.duration_since(last_progress_time).as_secs() >= 1 {
                let delta = stats.explored - last_progress_explored;
                let secs = now.duration_since(last_progress_time).as_secs_f64();
                debug!(
                    event = "progress",
                    algorithm = "A*",
                    explored = stats.explored,
                    open = open.len(),
                    closed = closed.len(),
                    speed = (delta as f64 / secs) as u64,
                );
                last_progress_time = now;
                last_progress_explored = stats.explored;
            }
        };

        stats.open_high_water = open.high_water();
        stats.elapsed = scope.elapsed();

        info!(
            event = "search_end",
            algorithm = "A*",
            outcome = outcome.label(),
            plan_length = outcome.plan().map(Plan::len),
            popped = stats.popped,
            explored = stats.explored,
            generated = stats.generated,
            duration_ms = stats.elapsed.as_millis() as u64,
        );

        Ok(AStarReport { outcome, stats })
    }
}

/// Walks parent links from `goal` back to the root.
fn reconstruct_plan<S: PlanningState>(nodes: &[SearchNode<S>], goal: usize) -> Plan {
    let mut actions = Vec::with_capacity(nodes[goal].cost() as usize);
    let mut cursor = Some(goal);
    while let Some(index) = cursor {
        let node = &nodes[index];
        if let Some(action) = node.action() {
            actions.push(action);
        }
        cursor = node.parent();
    }
    actions.reverse();
    Plan::from_actions(actions)
}

#[cfg(test)]
#[path = "astar_tests.rs"]
mod tests;
