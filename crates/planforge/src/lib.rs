//! PlanForge - Classical planning in Rust
//!
//! Weighted A* and Monte Carlo rollouts over ground propositional problems,
//! plus a harness that compares the two.
//!
//! # Example
//!
//! ```rust
//! use planforge::prelude::*;
//!
//! let problem = ProblemBuilder::new("move")
//!     .with_facts(["at_A", "at_B"])
//!     .with_init(["at_A"])
//!     .with_goal(["at_B"])
//!     .with_action(
//!         ActionBuilder::new("move_A_to_B")
//!             .with_precondition(["at_A"])
//!             .with_add(["at_B"])
//!             .with_delete(["at_A"]),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let planner = Planner::new(PlannerConfig::new()).unwrap();
//! let report = planner.solve_astar(&problem).unwrap();
//! let plan = report.plan().unwrap();
//!
//! assert_eq!(plan.action_names(&problem).unwrap(), vec!["move_A_to_B"]);
//! ```

// Domain traits and plan type
pub use planforge_core::{
    check_supported, ConditionalEffect, HeuristicName, Plan, PlanForgeError, PlanningAction,
    PlanningProblem, PlanningState, RequireKey, Result, StateHeuristic,
};

// Configuration
pub use planforge_config::{
    AStarConfig, ConfigError, MonteCarloConfig, PlannerConfig, ReportConfig, TerminationConfig,
};

// Ground problem model
pub use planforge_strips::{
    load_problem, ActionBuilder, Condition, Effect, FactState, GroundAction, GroundProblem,
    ProblemBuilder, ProblemFile, RelaxedHeuristic, WhenBuilder,
};

// Search engines
pub use planforge_solver::{
    AStarReport, AStarSearch, MonteCarloReport, MonteCarloSearch, Planner, SearchOutcome,
};

// Comparison harness
pub use planforge_benchmark::{
    Algorithm, AlgorithmRun, Comparison, ComparisonConfig, ComparisonResult, CsvExporter,
    MarkdownReport, WinnerAnalysis,
};

pub mod cli;

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        ActionBuilder, Comparison, ComparisonConfig, HeuristicName, Plan, Planner, PlannerConfig,
        PlanningProblem, ProblemBuilder, SearchOutcome, WhenBuilder,
    };
}
