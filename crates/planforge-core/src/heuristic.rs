//! Heuristic names and the state heuristic trait.

use std::fmt;
use std::str::FromStr;

use crate::domain::PlanningState;
use crate::error::{PlanForgeError, Result};

/// Estimates the remaining cost from a state to a goal.
pub trait StateHeuristic<S: PlanningState> {
    /// Returns a non-negative estimate; `f64::INFINITY` marks a state from
    /// which the goal is known to be unreachable.
    fn estimate(&self, state: &S, goal: &S::Condition) -> f64;
}

/// Name of a heuristic selectable by configuration.
///
/// The spelling of the `AJUSTED_*` variants is the planner's public
/// configuration vocabulary and is kept as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum HeuristicName {
    AjustedSum,
    AjustedSum2,
    AjustedSum2M,
    Combo,
    Max,
    #[default]
    FastForward,
    SetLevel,
    Sum,
    SumMutex,
}

impl HeuristicName {
    /// All heuristic names.
    pub const ALL: [HeuristicName; 9] = [
        HeuristicName::AjustedSum,
        HeuristicName::AjustedSum2,
        HeuristicName::AjustedSum2M,
        HeuristicName::Combo,
        HeuristicName::Max,
        HeuristicName::FastForward,
        HeuristicName::SetLevel,
        HeuristicName::Sum,
        HeuristicName::SumMutex,
    ];

    /// The configuration name, e.g. `FAST_FORWARD`.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeuristicName::AjustedSum => "AJUSTED_SUM",
            HeuristicName::AjustedSum2 => "AJUSTED_SUM2",
            HeuristicName::AjustedSum2M => "AJUSTED_SUM2M",
            HeuristicName::Combo => "COMBO",
            HeuristicName::Max => "MAX",
            HeuristicName::FastForward => "FAST_FORWARD",
            HeuristicName::SetLevel => "SET_LEVEL",
            HeuristicName::Sum => "SUM",
            HeuristicName::SumMutex => "SUM_MUTEX",
        }
    }
}

impl fmt::Display for HeuristicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeuristicName {
    type Err = PlanForgeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().replace('-', "_");
        HeuristicName::ALL
            .iter()
            .find(|h| h.as_str().eq_ignore_ascii_case(&wanted))
            .copied()
            .ok_or_else(|| {
                PlanForgeError::InvalidConfiguration(format!(
                    "unknown heuristic `{s}` (expected one of: {})",
                    HeuristicName::ALL
                        .iter()
                        .map(HeuristicName::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}
