//! Tiny hand-written problems.

use planforge_core::RequireKey;
use planforge_strips::{ActionBuilder, GroundProblem, ProblemBuilder, WhenBuilder};

/// `at_A` initially, goal `at_B`, single action `move_A_to_B`.
pub fn move_a_to_b() -> GroundProblem {
    move_builder().build().unwrap()
}

/// Same as [`move_a_to_b`] but declaring `:durative-actions`.
pub fn durative_move() -> GroundProblem {
    move_builder()
        .with_requirement(RequireKey::DurativeActions)
        .build()
        .unwrap()
}

fn move_builder() -> ProblemBuilder {
    ProblemBuilder::new("move")
        .with_facts(["at_A", "at_B"])
        .with_init(["at_A"])
        .with_goal(["at_B"])
        .with_requirement(RequireKey::Strips)
        .with_action(
            ActionBuilder::new("move_A_to_B")
                .with_precondition(["at_A"])
                .with_add(["at_B"])
                .with_delete(["at_A"]),
        )
}

/// The only action needs `at_C`, which never holds.
pub fn unreachable_goal() -> GroundProblem {
    ProblemBuilder::new("unreachable")
        .with_facts(["at_A", "at_B", "at_C"])
        .with_init(["at_A"])
        .with_goal(["at_B"])
        .with_action(
            ActionBuilder::new("move_C_to_B")
                .with_precondition(["at_C"])
                .with_add(["at_B"])
                .with_delete(["at_C"]),
        )
        .build()
        .unwrap()
}

/// `press` lights the lamp only once `plug` has provided power.
/// Shortest plan: `[plug, press]`.
pub fn conditional_lamp() -> GroundProblem {
    ProblemBuilder::new("lamp")
        .with_facts(["power", "light"])
        .with_goal(["light"])
        .with_requirements([RequireKey::Strips, RequireKey::ConditionalEffects])
        .with_action(
            ActionBuilder::new("press").with_when(
                WhenBuilder::new()
                    .with_condition(["power"])
                    .with_add(["light"]),
            ),
        )
        .with_action(
            ActionBuilder::new("plug")
                .with_negative_precondition(["power"])
                .with_add(["power"]),
        )
        .build()
        .unwrap()
}
