//! Plan validation helpers.

use planforge_core::{Plan, PlanningProblem};

/// Panics unless `plan` is executable from the initial state and reaches
/// the goal of `problem`.
#[track_caller]
pub fn assert_valid_plan<P: PlanningProblem>(problem: &P, plan: &Plan) {
    if let Err(err) = plan.validate(problem) {
        panic!("plan {:?} is not valid: {err}", plan.action_indices());
    }
}

/// Action names of `plan`, panicking on out-of-range indices.
#[track_caller]
pub fn plan_names<P: PlanningProblem>(problem: &P, plan: &Plan) -> Vec<String> {
    match plan.action_names(problem) {
        Ok(names) => names,
        Err(err) => panic!("plan {:?} does not resolve: {err}", plan.action_indices()),
    }
}
