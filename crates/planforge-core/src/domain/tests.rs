//! Tests for domain traits, requirements and plan validation.

use super::*;
use crate::error::PlanForgeError;
use crate::plan::Plan;

// ============================================================================
// Bits - a tiny bit-vector model exercising the traits
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Bits(u32);

#[derive(Debug)]
struct Mask {
    on: u32,
    off: u32,
}

#[derive(Debug)]
struct Flip {
    set: u32,
    clear: u32,
}

impl PlanningState for Bits {
    type Condition = Mask;
    type Effect = Flip;

    fn satisfies(&self, condition: &Mask) -> bool {
        self.0 & condition.on == condition.on && self.0 & condition.off == 0
    }

    fn apply(&mut self, effect: &Flip) {
        self.0 = (self.0 & !effect.clear) | effect.set;
    }
}

#[derive(Debug)]
struct Toggle {
    name: &'static str,
    pre: Mask,
    effects: Vec<ConditionalEffect<Mask, Flip>>,
}

impl PlanningAction<Bits> for Toggle {
    fn name(&self) -> &str {
        self.name
    }

    fn is_applicable(&self, state: &Bits) -> bool {
        state.satisfies(&self.pre)
    }

    fn conditional_effects(&self) -> &[ConditionalEffect<Mask, Flip>] {
        &self.effects
    }
}

struct Zero;

impl StateHeuristic<Bits> for Zero {
    fn estimate(&self, _state: &Bits, _goal: &Mask) -> f64 {
        0.0
    }
}

struct Toy {
    init: Bits,
    goal: Mask,
    actions: Vec<Toggle>,
    requirements: Vec<RequireKey>,
}

impl PlanningProblem for Toy {
    type State = Bits;
    type Action = Toggle;
    type Heuristic = Zero;

    fn initial_state(&self) -> &Bits {
        &self.init
    }

    fn goal(&self) -> &Mask {
        &self.goal
    }

    fn actions(&self) -> &[Toggle] {
        &self.actions
    }

    fn requirements(&self) -> &[RequireKey] {
        &self.requirements
    }

    fn heuristic(&self, _name: HeuristicName) -> crate::error::Result<Zero> {
        Ok(Zero)
    }
}

fn always() -> Mask {
    Mask { on: 0, off: 0 }
}

fn set(bits: u32) -> Flip {
    Flip {
        set: bits,
        clear: 0,
    }
}

fn chain_problem() -> Toy {
    // bit0 -> bit1 -> bit2
    Toy {
        init: Bits(0b001),
        goal: Mask { on: 0b100, off: 0 },
        actions: vec![
            Toggle {
                name: "a",
                pre: Mask { on: 0b001, off: 0 },
                effects: vec![ConditionalEffect::new(always(), set(0b010))],
            },
            Toggle {
                name: "b",
                pre: Mask { on: 0b010, off: 0 },
                effects: vec![ConditionalEffect::new(always(), set(0b100))],
            },
        ],
        requirements: vec![RequireKey::Strips],
    }
}

#[test]
fn test_successor_evaluates_guards_on_original_state() {
    let action = Toggle {
        name: "cascade",
        pre: always(),
        effects: vec![
            ConditionalEffect::new(always(), set(0b01)),
            // Must not fire: bit0 is only set by the effect above.
            ConditionalEffect::new(Mask { on: 0b01, off: 0 }, set(0b10)),
        ],
    };

    let before = Bits(0);
    let after = action.successor(&before);

    assert_eq!(after, Bits(0b01));
    assert_eq!(before, Bits(0), "successor must not touch the source state");
}

#[test]
fn test_successor_applies_every_satisfied_guard() {
    let action = Toggle {
        name: "both",
        pre: always(),
        effects: vec![
            ConditionalEffect::new(always(), set(0b001)),
            ConditionalEffect::new(Mask { on: 0b100, off: 0 }, set(0b010)),
        ],
    };

    assert_eq!(action.successor(&Bits(0b100)), Bits(0b111));
}

#[test]
fn test_plan_validates_against_problem() {
    let problem = chain_problem();
    let plan = Plan::from_actions(vec![0, 1]);

    assert!(plan.validate(&problem).is_ok());
    assert_eq!(plan.simulate(&problem).unwrap(), Bits(0b111));
    assert_eq!(plan.action_names(&problem).unwrap(), vec!["a", "b"]);
}

#[test]
fn test_plan_rejects_inapplicable_step() {
    let problem = chain_problem();
    let plan = Plan::from_actions(vec![1]);

    let err = plan.validate(&problem).unwrap_err();
    assert!(matches!(err, PlanForgeError::InvalidPlan(_)));
    assert!(err.to_string().contains("`b` is not applicable"));
}

#[test]
fn test_plan_rejects_unreached_goal() {
    let problem = chain_problem();
    let plan = Plan::from_actions(vec![0]);

    let err = plan.validate(&problem).unwrap_err();
    assert!(err.to_string().contains("goal"));
}

#[test]
fn test_plan_rejects_out_of_range_index() {
    let problem = chain_problem();
    let plan = Plan::from_actions(vec![7]);

    assert!(plan.simulate(&problem).is_err());
    assert!(plan.resolve(problem.actions()).is_none());
}

#[test]
fn test_plan_display_lists_actions() {
    let problem = chain_problem();
    let plan = Plan::from_actions(vec![0, 1]);

    let text = plan.display(&problem).to_string();
    assert_eq!(text, "0: (a)\n1: (b)\n");
}

#[test]
fn test_empty_plan_is_valid_when_goal_holds_initially() {
    let mut problem = chain_problem();
    problem.goal = Mask { on: 0b001, off: 0 };

    assert!(Plan::new().validate(&problem).is_ok());
}

#[test]
fn test_requirement_keywords_round_trip() {
    for key in RequireKey::ALL {
        assert_eq!(key.keyword().parse::<RequireKey>().unwrap(), key);
        assert_eq!(key.to_string().parse::<RequireKey>().unwrap(), key);
    }
}

#[test]
fn test_unknown_requirement_is_model_error() {
    let err = ":teleportation".parse::<RequireKey>().unwrap_err();
    assert!(matches!(err, PlanForgeError::Model(_)));
}

#[test]
fn test_check_supported_accepts_adl() {
    let requirements = [
        RequireKey::Strips,
        RequireKey::Typing,
        RequireKey::NegativePreconditions,
        RequireKey::ConditionalEffects,
        RequireKey::Adl,
    ];
    assert!(check_supported(&requirements).is_ok());
}

#[test]
fn test_check_supported_lists_every_offender() {
    let requirements = [
        RequireKey::Strips,
        RequireKey::NumericFluents,
        RequireKey::DurativeActions,
        RequireKey::DurativeActions,
    ];

    match check_supported(&requirements) {
        Err(PlanForgeError::UnsupportedProblem(keys)) => {
            assert_eq!(
                keys,
                vec![RequireKey::DurativeActions, RequireKey::NumericFluents]
            );
        }
        other => panic!("expected UnsupportedProblem, got {other:?}"),
    }
}

#[test]
fn test_unsupported_error_message_uses_pddl_keywords() {
    let err = check_supported(&[RequireKey::DurativeActions]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Problem not supported: requires :durative-actions"
    );
}

#[test]
fn test_every_listed_requirement_is_unsupported() {
    for key in UNSUPPORTED_REQUIREMENTS {
        assert!(!key.is_supported(), "{key} should be unsupported");
    }
    assert_eq!(
        RequireKey::ALL.iter().filter(|k| k.is_supported()).count(),
        RequireKey::ALL.len() - UNSUPPORTED_REQUIREMENTS.len()
    );
}
