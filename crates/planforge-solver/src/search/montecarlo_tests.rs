//! Tests for Monte Carlo search.

use planforge_core::PlanForgeError;
use planforge_strips::{ActionBuilder, ProblemBuilder};
use planforge_test::{
    assert_valid_plan, conditional_lamp, corridor, durative_move, gripper, move_a_to_b,
    plan_names, toggle_space, unreachable_goal,
};

use super::*;

fn seeded(max_simulations: u64, max_depth: usize) -> MonteCarloSearch {
    MonteCarloSearch::new(max_simulations, max_depth, Duration::from_secs(30)).with_seed(42)
}

#[test]
fn test_move_a_to_b() {
    let problem = move_a_to_b();

    let report = seeded(50, 100).search(&problem).unwrap();

    let plan = report.plan().expect("plan");
    assert_eq!(plan_names(&problem, plan), vec!["move_A_to_B"]);
    assert_eq!(report.stats.simulations, 50);
    assert_eq!(report.stats.successes, 50);
    assert_eq!(report.stats.improvements, vec![(1, 1)]);
    assert!(!report.timed_out);
}

#[test]
fn test_unreachable_goal_reports_no_plan() {
    let report = seeded(20, 100).search(&unreachable_goal()).unwrap();

    assert!(report.plan().is_none());
    assert_eq!(report.stats.simulations, 20);
    assert_eq!(report.stats.dead_ends, 20);
}

#[test]
fn test_unsupported_problem_rejected_before_rollouts() {
    let err = seeded(10, 10).search(&durative_move()).unwrap_err();
    assert!(matches!(err, PlanForgeError::UnsupportedProblem(_)));
}

#[test]
fn test_goal_at_root_returns_empty_plan() {
    let problem = ProblemBuilder::new("done")
        .with_facts(["g"])
        .with_init(["g"])
        .with_goal(["g"])
        .with_action(ActionBuilder::new("noop").with_add(["g"]))
        .build()
        .unwrap();

    let report = seeded(5, 10).search(&problem).unwrap();

    assert_eq!(report.plan(), Some(&Plan::new()));
    assert_eq!(report.stats.improvements, vec![(1, 0)]);
}

#[test]
fn test_best_length_only_improves() {
    let problem = corridor(4);

    let report = seeded(2_000, 100).search(&problem).unwrap();
    let plan = report.plan().expect("plan");

    assert_valid_plan(&problem, plan);
    assert_eq!(plan.len(), 4);

    let lengths: Vec<usize> = report.stats.improvements.iter().map(|&(_, l)| l).collect();
    assert!(lengths.windows(2).all(|w| w[1] < w[0]), "{lengths:?}");
    assert_eq!(lengths.last(), Some(&plan.len()));

    let sims: Vec<u64> = report.stats.improvements.iter().map(|&(s, _)| s).collect();
    assert!(sims.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_goal_reached_on_last_step_is_a_depth_abort() {
    // Every walk needs at least 3 actions; with a depth bound of 3 the goal
    // test never runs after the third action.
    let report = seeded(200, 3).search(&corridor(3)).unwrap();

    assert!(report.plan().is_none());
    assert_eq!(report.stats.depth_aborts, 200);

    let report = seeded(200, 4).search(&corridor(3)).unwrap();
    assert_eq!(report.plan().map(Plan::len), Some(3));
}

#[test]
fn test_conditional_effects() {
    let problem = conditional_lamp();

    let report = seeded(500, 20).search(&problem).unwrap();
    let plan = report.plan().expect("plan");

    assert_valid_plan(&problem, plan);
    assert_eq!(plan_names(&problem, plan), vec!["plug", "press"]);
}

#[test]
fn test_plans_are_valid_on_gripper() {
    let problem = gripper(2);

    let report = seeded(20_000, 100).search(&problem).unwrap();

    assert_valid_plan(&problem, report.plan().expect("plan"));
}

#[test]
fn test_same_seed_same_result() {
    let problem = corridor(6);
    let search = seeded(300, 50);

    let first = search.search(&problem).unwrap();
    let second = search.search(&problem).unwrap();

    assert_eq!(first.plan, second.plan);
    assert_eq!(first.stats.improvements, second.stats.improvements);
    assert_eq!(first.stats.depth_aborts, second.stats.depth_aborts);
}

#[test]
fn test_injected_rng() {
    let problem = corridor(5);
    let search = MonteCarloSearch::new(400, 60, Duration::from_secs(30));

    let mut a = ChaCha8Rng::seed_from_u64(9);
    let mut b = ChaCha8Rng::seed_from_u64(9);
    let first = search.search_with_rng(&problem, &mut a).unwrap();
    let second = search.search_with_rng(&problem, &mut b).unwrap();

    assert_eq!(first.plan, second.plan);
}

#[test]
fn test_timeout_on_huge_space() {
    let search = MonteCarloSearch::new(u64::MAX, 100, Duration::from_millis(100)).with_seed(1);

    let report = search.search(&toggle_space(40)).unwrap();

    assert!(report.plan().is_none());
    assert!(report.timed_out);
    assert!(report.stats.simulations > 0);
    assert!(report.stats.elapsed < Duration::from_secs(2));
}

#[test]
fn test_rejects_zero_depth() {
    let err = MonteCarloSearch::new(10, 0, Duration::from_secs(5))
        .search(&move_a_to_b())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid configuration: monte_carlo.max_depth must be > 0"
    );
}

#[test]
fn test_rejects_zero_budgets() {
    for search in [
        MonteCarloSearch::new(0, 10, Duration::from_secs(5)),
        MonteCarloSearch::new(10, 10, Duration::ZERO),
    ] {
        assert!(matches!(
            search.with_seed(1).search(&move_a_to_b()),
            Err(PlanForgeError::InvalidConfiguration(_))
        ));
    }
}
