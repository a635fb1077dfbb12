//! h_max, h_add and FF over the delete relaxation.

use planforge_core::{HeuristicName, PlanningAction, StateHeuristic};
use tracing::debug;

use crate::problem::GroundAction;
use crate::state::{Condition, FactId, FactState};

/// How relaxed fact costs are combined into a goal estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaxedKind {
    /// Most expensive precondition (admissible).
    Max,
    /// Sum of precondition costs.
    Additive,
    /// Number of actions in a relaxed plan extracted from h_add supporters.
    FastForward,
}

impl From<HeuristicName> for RelaxedKind {
    /// Mutex-based names fall back to the mutex-free estimate they refine.
    fn from(name: HeuristicName) -> Self {
        match name {
            HeuristicName::Max | HeuristicName::SetLevel => RelaxedKind::Max,
            HeuristicName::Sum
            | HeuristicName::SumMutex
            | HeuristicName::AjustedSum
            | HeuristicName::Combo => RelaxedKind::Additive,
            HeuristicName::FastForward
            | HeuristicName::AjustedSum2
            | HeuristicName::AjustedSum2M => RelaxedKind::FastForward,
        }
    }
}

/// One conditional effect of one action, with deletes dropped.
#[derive(Debug, Clone)]
struct RelaxedOperator {
    action: usize,
    pre: Vec<FactId>,
    add: Vec<FactId>,
}

/// Heuristic over the delete relaxation of a ground problem.
///
/// Goals that are unreachable even in the relaxation estimate `f64::INFINITY`.
#[derive(Debug, Clone)]
pub struct RelaxedHeuristic {
    name: HeuristicName,
    kind: RelaxedKind,
    num_facts: usize,
    operators: Vec<RelaxedOperator>,
}

impl RelaxedHeuristic {
    pub fn new(name: HeuristicName, num_facts: usize, actions: &[GroundAction]) -> Self {
        let mut operators = Vec::new();
        for (index, action) in actions.iter().enumerate() {
            for ce in action.conditional_effects() {
                if ce.effect.add.is_empty() {
                    continue;
                }
                let mut pre = action.precondition().positive.clone();
                pre.extend_from_slice(&ce.condition.positive);
                pre.sort_unstable();
                pre.dedup();
                operators.push(RelaxedOperator {
                    action: index,
                    pre,
                    add: ce.effect.add.clone(),
                });
            }
        }

        let kind = RelaxedKind::from(name);
        debug!(
            event = "heuristic_ready",
            heuristic = %name,
            kind = ?kind,
            operators = operators.len(),
        );

        Self {
            name,
            kind,
            num_facts,
            operators,
        }
    }

    pub fn name(&self) -> HeuristicName {
        self.name
    }

    pub fn kind(&self) -> RelaxedKind {
        self.kind
    }

    /// Runs the relaxed reachability fixpoint from `state`.
    ///
    /// Returns the cost of every fact and, for reached facts not already
    /// true, the operator that last lowered its cost.
    fn fact_costs(&self, state: &FactState) -> (Vec<f64>, Vec<Option<usize>>) {
        let mut cost = vec![f64::INFINITY; self.num_facts];
        let mut supporter = vec![None; self.num_facts];
        for fact in state.iter() {
            if let Some(c) = cost.get_mut(fact) {
                *c = 0.0;
            }
        }

        let additive = self.kind != RelaxedKind::Max;
        loop {
            let mut changed = false;
            for (op_index, op) in self.operators.iter().enumerate() {
                let pre_costs = op.pre.iter().map(|&p| cost[p]);
                let pre_cost = if additive {
                    pre_costs.sum::<f64>()
                } else {
                    pre_costs.fold(0.0, f64::max)
                };
                if !pre_cost.is_finite() {
                    continue;
                }
                let reached = pre_cost + 1.0;
                for &fact in &op.add {
                    if reached < cost[fact] {
                        cost[fact] = reached;
                        supporter[fact] = Some(op_index);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }

        (cost, supporter)
    }

    fn relaxed_plan_len(&self, goal: &[FactId], supporter: &[Option<usize>]) -> usize {
        let mut marked = vec![false; self.operators.len()];
        let mut visited = vec![false; self.num_facts];
        let mut actions = Vec::new();
        let mut open: Vec<FactId> = goal.to_vec();

        while let Some(fact) = open.pop() {
            if std::mem::replace(&mut visited[fact], true) {
                continue;
            }
            if let Some(op_index) = supporter[fact] {
                if !std::mem::replace(&mut marked[op_index], true) {
                    let op = &self.operators[op_index];
                    actions.push(op.action);
                    open.extend_from_slice(&op.pre);
                }
            }
        }

        actions.sort_unstable();
        actions.dedup();
        actions.len()
    }
}

impl StateHeuristic<FactState> for RelaxedHeuristic {
    fn estimate(&self, state: &FactState, goal: &Condition) -> f64 {
        if goal.positive.iter().all(|&g| state.contains(g)) {
            return 0.0;
        }
        if goal.positive.iter().any(|&g| g >= self.num_facts) {
            return f64::INFINITY;
        }

        let (cost, supporter) = self.fact_costs(state);
        let mut goal_costs = goal.positive.iter().map(|&g| cost[g]);
        match self.kind {
            RelaxedKind::Max => goal_costs.fold(0.0, f64::max),
            RelaxedKind::Additive => goal_costs.sum(),
            RelaxedKind::FastForward => {
                if goal_costs.any(f64::is_infinite) {
                    f64::INFINITY
                } else {
                    self.relaxed_plan_len(&goal.positive, &supporter) as f64
                }
            }
        }
    }
}
