//! Sequential plans.

use std::fmt;

use crate::domain::{PlanningAction, PlanningProblem, PlanningState};
use crate::error::{PlanForgeError, Result};

/// An ordered sequence of actions, index 0 executes first.
///
/// Actions are stored by their index in the problem's action list, so a plan
/// is only meaningful together with the problem that produced it.
///
/// # Example
///
/// ```
/// use planforge_core::Plan;
///
/// let plan = Plan::from_actions(vec![2, 0, 1]);
/// assert_eq!(plan.len(), 3);
/// assert_eq!(plan.action_indices(), &[2, 0, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Plan {
    actions: Vec<usize>,
}

impl Plan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plan from action indices in execution order.
    pub fn from_actions(actions: Vec<usize>) -> Self {
        Self { actions }
    }

    /// Appends an action at the end of the plan.
    pub fn push(&mut self, action: usize) {
        self.actions.push(action);
    }

    /// Number of actions in the plan.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if the plan has no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Action indices in execution order.
    pub fn action_indices(&self) -> &[usize] {
        &self.actions
    }

    /// Iterates over action indices in execution order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.actions.iter().copied()
    }

    /// Resolves the plan against an action list.
    ///
    /// Returns `None` if any index is out of range.
    pub fn resolve<'p, A>(&self, actions: &'p [A]) -> Option<Vec<&'p A>> {
        self.actions.iter().map(|&i| actions.get(i)).collect()
    }

    /// Action names in execution order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPlan` if an index is out of range for `problem`.
    pub fn action_names<P: PlanningProblem>(&self, problem: &P) -> Result<Vec<String>> {
        let resolved = self.resolve(problem.actions()).ok_or_else(|| {
            PlanForgeError::InvalidPlan("action index out of range".to_string())
        })?;
        Ok(resolved.iter().map(|a| a.name().to_string()).collect())
    }

    /// Executes the plan from the initial state and returns the final state.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPlan` if an index is out of range or an action is not
    /// applicable in the state it is applied to.
    pub fn simulate<P: PlanningProblem>(&self, problem: &P) -> Result<P::State> {
        let actions = problem.actions();
        let mut state = problem.initial_state().clone();
        for (step, &index) in self.actions.iter().enumerate() {
            let action = actions.get(index).ok_or_else(|| {
                PlanForgeError::InvalidPlan(format!(
                    "step {step}: action index {index} out of range ({} actions)",
                    actions.len()
                ))
            })?;
            if !action.is_applicable(&state) {
                return Err(PlanForgeError::InvalidPlan(format!(
                    "step {step}: action `{}` is not applicable",
                    action.name()
                )));
            }
            state = action.successor(&state);
        }
        Ok(state)
    }

    /// Checks that the plan is executable and reaches the goal.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPlan` describing the first violation.
    pub fn validate<P: PlanningProblem>(&self, problem: &P) -> Result<()> {
        let final_state = self.simulate(problem)?;
        if final_state.satisfies(problem.goal()) {
            Ok(())
        } else {
            Err(PlanForgeError::InvalidPlan(
                "final state does not satisfy the goal".to_string(),
            ))
        }
    }

    /// Returns a value that formats the plan one action per line.
    pub fn display<'a, P: PlanningProblem>(&'a self, problem: &'a P) -> PlanDisplay<'a, P> {
        PlanDisplay {
            plan: self,
            problem,
        }
    }
}

impl FromIterator<usize> for Plan {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

/// Formats a plan as `step: action-name` lines.
pub struct PlanDisplay<'a, P: PlanningProblem> {
    plan: &'a Plan,
    problem: &'a P,
}

impl<P: PlanningProblem> fmt::Display for PlanDisplay<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actions = self.problem.actions();
        let width = self.plan.len().saturating_sub(1).to_string().len();
        for (step, index) in self.plan.iter().enumerate() {
            match actions.get(index) {
                Some(action) => writeln!(f, "{step:>width$}: ({})", action.name())?,
                None => writeln!(f, "{step:>width$}: <unknown action {index}>")?,
            }
        }
        Ok(())
    }
}
