//! Comparison runner.

use std::path::Path;
use std::time::Instant;

use planforge_core::{PlanForgeError, PlanningProblem};
use planforge_solver::Planner;
use tracing::{error, info};

use crate::config::ComparisonConfig;
use crate::report::{ComparisonTable, CsvExporter, MarkdownReport};
use crate::result::{Algorithm, AlgorithmRun, ComparisonResult};

/// Runs A* and then Monte Carlo on the same problem and reports the outcome.
///
/// An engine that rejects the problem is recorded as a failed row; the other
/// engine still runs. Report sinks that cannot be written are logged and
/// otherwise ignored.
///
/// # Example
///
/// ```
/// use planforge_benchmark::{Comparison, ComparisonConfig};
/// use planforge_config::PlannerConfig;
/// use planforge_solver::Planner;
///
/// let planner = Planner::new(PlannerConfig::new().with_random_seed(7)).unwrap();
/// let comparison = Comparison::new(ComparisonConfig::new("move"), planner);
///
/// let result = comparison.run(&planforge_test::move_a_to_b());
/// assert!(result.astar.success());
/// assert!(result.monte_carlo.success());
/// ```
#[derive(Debug, Clone)]
pub struct Comparison {
    config: ComparisonConfig,
    planner: Planner,
}

impl Comparison {
    pub fn new(config: ComparisonConfig, planner: Planner) -> Self {
        Self { config, planner }
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    /// Runs both engines, logs the summary and writes the configured reports.
    pub fn run<P: PlanningProblem>(&self, problem: &P) -> ComparisonResult {
        info!(
            event = "comparison_start",
            name = %self.config.name(),
            actions = problem.actions().len(),
        );

        let astar = self.run_astar(problem);
        let monte_carlo = self.run_monte_carlo(problem);
        let result = ComparisonResult::new(self.config.name(), astar, monte_carlo);

        for line in ComparisonTable::lines(&result)
            .into_iter()
            .chain(result.winner().lines())
        {
            info!(event = "comparison_summary", "{line}");
        }

        self.write_reports(&result);
        result
    }

    fn run_astar<P: PlanningProblem>(&self, problem: &P) -> AlgorithmRun {
        let start = Instant::now();
        match self.planner.solve_astar(problem) {
            Ok(report) => {
                let popped = report.stats.popped;
                AlgorithmRun::completed(
                    Algorithm::AStar,
                    report.into_plan(),
                    start.elapsed(),
                    popped,
                )
            }
            Err(e) => {
                error!(event = "engine_rejected", algorithm = %Algorithm::AStar, error = %e);
                AlgorithmRun::rejected(Algorithm::AStar, start.elapsed(), e)
            }
        }
    }

    fn run_monte_carlo<P: PlanningProblem>(&self, problem: &P) -> AlgorithmRun {
        let start = Instant::now();
        match self.planner.solve_monte_carlo(problem) {
            Ok(report) => {
                let simulations = report.stats.simulations;
                AlgorithmRun::completed(
                    Algorithm::MonteCarlo,
                    report.into_plan(),
                    start.elapsed(),
                    simulations,
                )
            }
            Err(e) => {
                error!(event = "engine_rejected", algorithm = %Algorithm::MonteCarlo, error = %e);
                AlgorithmRun::rejected(Algorithm::MonteCarlo, start.elapsed(), e)
            }
        }
    }

    fn write_reports(&self, result: &ComparisonResult) {
        if let Some(path) = self.config.csv_output_path() {
            report_outcome("csv", path, CsvExporter::to_file(result, path));
        }
        if let Some(path) = self.config.markdown_output_path() {
            report_outcome("markdown", path, MarkdownReport::to_file(result, path));
        }
    }
}

fn report_outcome(format: &str, path: &Path, outcome: std::io::Result<()>) {
    match outcome {
        Ok(()) => info!(event = "report_written", format, path = %path.display()),
        Err(source) => {
            let e = PlanForgeError::ReportSink {
                path: path.to_path_buf(),
                source,
            };
            error!(event = "report_failed", format, error = %e);
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
