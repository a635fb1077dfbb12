//! Tests for ground problems and their builders.

use planforge_core::Plan;

use super::*;

fn move_problem() -> GroundProblem {
    ProblemBuilder::new("move")
        .with_facts(["at_A", "at_B"])
        .with_init(["at_A"])
        .with_goal(["at_B"])
        .with_action(
            ActionBuilder::new("move_A_to_B")
                .with_precondition(["at_A"])
                .with_add(["at_B"])
                .with_delete(["at_A"]),
        )
        .build()
        .unwrap()
}

#[test]
fn test_builder_resolves_fact_names() {
    let problem = move_problem();

    assert_eq!(problem.name(), "move");
    assert_eq!(problem.num_facts(), 2);
    assert_eq!(problem.fact_id("at_B"), Some(1));
    assert_eq!(problem.fact_name(0), Some("at_A"));
    assert_eq!(problem.action_index("move_A_to_B"), Some(0));
    assert_eq!(problem.requirements(), &[RequireKey::Strips]);
}

#[test]
fn test_successor_deletes_and_adds() {
    let problem = move_problem();
    let action = &problem.actions()[0];
    let init = problem.initial_state();

    assert!(action.is_applicable(init));
    let next = action.successor(init);
    assert!(!next.contains(0));
    assert!(next.contains(1));
    assert!(next.satisfies(problem.goal()));
}

#[test]
fn test_unknown_fact_is_model_error() {
    let err = ProblemBuilder::new("bad")
        .with_facts(["p"])
        .with_init(["p"])
        .with_goal(["q"])
        .build()
        .unwrap_err();

    assert!(matches!(err, PlanForgeError::Model(_)));
    assert_eq!(err.to_string(), "Problem model error: unknown fact `q` in goal");
}

#[test]
fn test_unknown_fact_in_action_names_the_action() {
    let err = ProblemBuilder::new("bad")
        .with_facts(["p"])
        .with_action(ActionBuilder::new("go").with_precondition(["r"]))
        .build()
        .unwrap_err();

    assert!(err.to_string().contains("action `go`"));
}

#[test]
fn test_duplicate_action_names_rejected() {
    let err = ProblemBuilder::new("dup")
        .with_facts(["p"])
        .with_action(ActionBuilder::new("go").with_add(["p"]))
        .with_action(ActionBuilder::new("go").with_delete(["p"]))
        .build()
        .unwrap_err();

    assert!(err.to_string().contains("duplicate action `go`"));
}

#[test]
fn test_conditional_effect_fires_only_when_guard_holds() {
    let problem = ProblemBuilder::new("lamp")
        .with_facts(["power", "switch", "light"])
        .with_init(["switch"])
        .with_goal(["light"])
        .with_requirements([RequireKey::Strips, RequireKey::ConditionalEffects])
        .with_action(
            ActionBuilder::new("press").with_when(
                WhenBuilder::new()
                    .with_condition(["power"])
                    .with_add(["light"]),
            ),
        )
        .with_action(ActionBuilder::new("plug").with_add(["power"]))
        .build()
        .unwrap();

    let press = &problem.actions()[0];
    let unpowered = press.successor(problem.initial_state());
    assert!(!unpowered.satisfies(problem.goal()));

    let plan = Plan::from_actions(vec![1, 0]);
    assert!(plan.validate(&problem).is_ok());
}

#[test]
fn test_negative_precondition_blocks_action() {
    let problem = ProblemBuilder::new("neg")
        .with_facts(["locked", "open"])
        .with_init(["locked"])
        .with_goal(["open"])
        .with_action(
            ActionBuilder::new("open_door")
                .with_negative_precondition(["locked"])
                .with_add(["open"]),
        )
        .with_action(ActionBuilder::new("unlock").with_delete(["locked"]))
        .build()
        .unwrap();

    assert!(!problem.actions()[0].is_applicable(problem.initial_state()));
    assert!(Plan::from_actions(vec![1, 0]).validate(&problem).is_ok());
}

#[test]
fn test_negative_goal() {
    let problem = ProblemBuilder::new("clear")
        .with_facts(["dirty"])
        .with_init(["dirty"])
        .with_negative_goal(["dirty"])
        .with_action(ActionBuilder::new("clean").with_delete(["dirty"]))
        .build()
        .unwrap();

    assert!(!problem.initial_state().satisfies(problem.goal()));
    assert!(Plan::from_actions(vec![0]).validate(&problem).is_ok());
}

#[test]
fn test_heuristic_for_every_name() {
    let problem = move_problem();
    for name in HeuristicName::ALL {
        let heuristic = problem.heuristic(name).unwrap();
        assert_eq!(heuristic.name(), name);
    }
}
