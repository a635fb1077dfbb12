//! PDDL requirement flags.

use std::fmt;
use std::str::FromStr;

use crate::error::{PlanForgeError, Result};

/// A requirement flag a problem may declare (`(:requirements ...)` in PDDL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RequireKey {
    Strips,
    Typing,
    NegativePreconditions,
    DisjunctivePreconditions,
    Equality,
    ExistentialPreconditions,
    UniversalPreconditions,
    QuantifiedPreconditions,
    ConditionalEffects,
    Adl,
    ActionCosts,
    Constraints,
    ContinuousEffects,
    DerivedPredicates,
    DurativeActions,
    DurationInequalities,
    Fluents,
    GoalUtilities,
    MethodConstraints,
    NumericFluents,
    ObjectFluents,
    Preferences,
    TimedInitialLiterals,
    Hierarchy,
}

/// Requirements the state-space planner refuses to search.
pub const UNSUPPORTED_REQUIREMENTS: [RequireKey; 14] = [
    RequireKey::ActionCosts,
    RequireKey::Constraints,
    RequireKey::ContinuousEffects,
    RequireKey::DerivedPredicates,
    RequireKey::DurativeActions,
    RequireKey::DurationInequalities,
    RequireKey::Fluents,
    RequireKey::GoalUtilities,
    RequireKey::MethodConstraints,
    RequireKey::NumericFluents,
    RequireKey::ObjectFluents,
    RequireKey::Preferences,
    RequireKey::TimedInitialLiterals,
    RequireKey::Hierarchy,
];

impl RequireKey {
    /// All requirement flags, in declaration order.
    pub const ALL: [RequireKey; 24] = [
        RequireKey::Strips,
        RequireKey::Typing,
        RequireKey::NegativePreconditions,
        RequireKey::DisjunctivePreconditions,
        RequireKey::Equality,
        RequireKey::ExistentialPreconditions,
        RequireKey::UniversalPreconditions,
        RequireKey::QuantifiedPreconditions,
        RequireKey::ConditionalEffects,
        RequireKey::Adl,
        RequireKey::ActionCosts,
        RequireKey::Constraints,
        RequireKey::ContinuousEffects,
        RequireKey::DerivedPredicates,
        RequireKey::DurativeActions,
        RequireKey::DurationInequalities,
        RequireKey::Fluents,
        RequireKey::GoalUtilities,
        RequireKey::MethodConstraints,
        RequireKey::NumericFluents,
        RequireKey::ObjectFluents,
        RequireKey::Preferences,
        RequireKey::TimedInitialLiterals,
        RequireKey::Hierarchy,
    ];

    /// The PDDL keyword without the leading colon.
    pub fn keyword(&self) -> &'static str {
        match self {
            RequireKey::Strips => "strips",
            RequireKey::Typing => "typing",
            RequireKey::NegativePreconditions => "negative-preconditions",
            RequireKey::DisjunctivePreconditions => "disjunctive-preconditions",
            RequireKey::Equality => "equality",
            RequireKey::ExistentialPreconditions => "existential-preconditions",
            RequireKey::UniversalPreconditions => "universal-preconditions",
            RequireKey::QuantifiedPreconditions => "quantified-preconditions",
            RequireKey::ConditionalEffects => "conditional-effects",
            RequireKey::Adl => "adl",
            RequireKey::ActionCosts => "action-costs",
            RequireKey::Constraints => "constraints",
            RequireKey::ContinuousEffects => "continuous-effects",
            RequireKey::DerivedPredicates => "derived-predicates",
            RequireKey::DurativeActions => "durative-actions",
            RequireKey::DurationInequalities => "duration-inequalities",
            RequireKey::Fluents => "fluents",
            RequireKey::GoalUtilities => "goal-utilities",
            RequireKey::MethodConstraints => "method-constraints",
            RequireKey::NumericFluents => "numeric-fluents",
            RequireKey::ObjectFluents => "object-fluents",
            RequireKey::Preferences => "preferences",
            RequireKey::TimedInitialLiterals => "timed-initial-literals",
            RequireKey::Hierarchy => "hierarchy",
        }
    }

    /// Returns true if the state-space planner can search problems with this flag.
    pub fn is_supported(&self) -> bool {
        !UNSUPPORTED_REQUIREMENTS.contains(self)
    }
}

impl fmt::Display for RequireKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.keyword())
    }
}

impl FromStr for RequireKey {
    type Err = PlanForgeError;

    /// Parses a PDDL keyword, with or without the leading colon.
    fn from_str(s: &str) -> Result<Self> {
        let keyword = s.trim().trim_start_matches(':');
        RequireKey::ALL
            .iter()
            .find(|k| k.keyword().eq_ignore_ascii_case(keyword))
            .copied()
            .ok_or_else(|| PlanForgeError::Model(format!("unknown requirement `{s}`")))
    }
}

/// Rejects a problem whose requirements intersect [`UNSUPPORTED_REQUIREMENTS`].
///
/// The offending flags are reported sorted and without duplicates.
///
/// # Errors
///
/// Returns `UnsupportedProblem` listing every unsupported flag present.
pub fn check_supported(requirements: &[RequireKey]) -> Result<()> {
    let mut unsupported: Vec<RequireKey> = requirements
        .iter()
        .copied()
        .filter(|k| !k.is_supported())
        .collect();
    if unsupported.is_empty() {
        return Ok(());
    }
    unsupported.sort();
    unsupported.dedup();
    Err(PlanForgeError::UnsupportedProblem(unsupported))
}
