//! A* versus Monte Carlo comparison harness.
//!
//! Runs both engines on one problem, collects timing and work counters,
//! and writes the results as a text table, CSV and Markdown.
//!
//! # Example
//!
//! ```
//! use planforge_benchmark::{Comparison, ComparisonConfig, CsvExporter};
//! use planforge_config::PlannerConfig;
//! use planforge_solver::Planner;
//!
//! let planner = Planner::new(PlannerConfig::new().with_random_seed(3).with_max_simulations(200)).unwrap();
//! let result = Comparison::new(ComparisonConfig::new("move"), planner)
//!     .run(&planforge_test::move_a_to_b());
//!
//! let csv = CsvExporter::to_string(&result);
//! assert_eq!(csv.lines().count(), 3);
//! ```

mod config;
mod report;
mod result;
mod runner;

pub use config::ComparisonConfig;
pub use report::{ComparisonTable, CsvExporter, MarkdownReport};
pub use result::{Algorithm, AlgorithmRun, ComparisonResult, WinnerAnalysis};
pub use runner::Comparison;
