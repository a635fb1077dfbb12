//! Report generation for comparison results.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::result::{AlgorithmRun, ComparisonResult};

/// CSV exporter for comparison results.
///
/// One header line, then one row per engine with columns algorithm, plan
/// length (0 on failure), time in seconds, popped nodes or rollouts, and
/// a 1/0 success flag.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use planforge_benchmark::{Algorithm, AlgorithmRun, ComparisonResult, CsvExporter};
/// use planforge_core::Plan;
///
/// let result = ComparisonResult::new(
///     "move",
///     AlgorithmRun::completed(
///         Algorithm::AStar,
///         Some(Plan::from_actions(vec![0])),
///         Duration::from_millis(1500),
///         2,
///     ),
///     AlgorithmRun::completed(Algorithm::MonteCarlo, None, Duration::from_millis(250), 100),
/// );
///
/// let csv = CsvExporter::to_string(&result);
/// assert_eq!(
///     csv,
///     "Algorithm,Plan_Length,Time_Seconds,Nodes_Simulations,Success\n\
///      A*,1,1.500,2,1\n\
///      Monte_Carlo,0,0.250,100,0\n"
/// );
/// ```
pub struct CsvExporter;

impl CsvExporter {
    pub const HEADER: &'static str = "Algorithm,Plan_Length,Time_Seconds,Nodes_Simulations,Success";

    /// Exports the result to a CSV string.
    pub fn to_string(result: &ComparisonResult) -> String {
        CsvDisplay(result).to_string()
    }

    /// Exports the result to a CSV file, replacing any existing file.
    pub fn to_file(result: &ComparisonResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes the result as CSV to a writer.
    pub fn write<W: Write>(result: &ComparisonResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

struct CsvDisplay<'a>(&'a ComparisonResult);

impl fmt::Display for CsvDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", CsvExporter::HEADER)?;
        for run in self.0.runs() {
            writeln!(
                f,
                "{},{},{:.3},{},{}",
                run.algorithm.csv_label(),
                run.plan_length(),
                run.time_seconds(),
                run.work,
                u8::from(run.success()),
            )?;
        }
        Ok(())
    }
}

/// Fixed-width text table of a comparison, one line per engine.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use planforge_benchmark::{Algorithm, AlgorithmRun, ComparisonResult, ComparisonTable};
///
/// let result = ComparisonResult::new(
///     "stuck",
///     AlgorithmRun::completed(Algorithm::AStar, None, Duration::from_millis(5), 1),
///     AlgorithmRun::completed(Algorithm::MonteCarlo, None, Duration::from_millis(9), 10),
/// );
///
/// let lines = ComparisonTable::lines(&result);
/// assert_eq!(lines.len(), 4);
/// assert!(lines[2].starts_with("A*                | FAILED  | N/A"));
/// ```
pub struct ComparisonTable;

impl ComparisonTable {
    pub fn lines(result: &ComparisonResult) -> Vec<String> {
        let mut lines = vec![
            "Algorithm         | Status  | Plan Length | Time (s) | Nodes/Simulations".to_string(),
            "------------------|---------|-------------|----------|------------------".to_string(),
        ];
        lines.extend(result.runs().into_iter().map(Self::row));
        lines
    }

    pub fn to_string(result: &ComparisonResult) -> String {
        let mut out = String::new();
        for line in Self::lines(result) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    fn row(run: &AlgorithmRun) -> String {
        format!(
            "{:<17} | {:<7} | {:<11} | {:<8.3} | {}",
            run.algorithm.to_string(),
            status(run),
            plan_cell(run),
            run.time_seconds(),
            run.work,
        )
    }
}

fn status(run: &AlgorithmRun) -> &'static str {
    if run.success() {
        "SUCCESS"
    } else {
        "FAILED"
    }
}

fn plan_cell(run: &AlgorithmRun) -> String {
    match &run.plan {
        Some(plan) => format!("{} actions", plan.len()),
        None => "N/A".to_string(),
    }
}

/// Markdown report generator.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use planforge_benchmark::{Algorithm, AlgorithmRun, ComparisonResult, MarkdownReport};
///
/// let result = ComparisonResult::new(
///     "stuck",
///     AlgorithmRun::completed(Algorithm::AStar, None, Duration::from_millis(5), 1),
///     AlgorithmRun::rejected(Algorithm::MonteCarlo, Duration::ZERO, "unsupported"),
/// );
///
/// let md = MarkdownReport::to_string(&result);
/// assert!(md.contains("# Comparison: stuck"));
/// assert!(md.contains("| Monte Carlo | FAILED | N/A |"));
/// assert!(md.contains("- **Monte Carlo**: unsupported"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    pub fn to_string(result: &ComparisonResult) -> String {
        MarkdownDisplay(result).to_string()
    }

    pub fn to_file(result: &ComparisonResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }
}

struct MarkdownDisplay<'a>(&'a ComparisonResult);

impl fmt::Display for MarkdownDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        writeln!(f, "# Comparison: {}", result.name)?;
        writeln!(f)?;

        writeln!(f, "## Results")?;
        writeln!(f)?;
        writeln!(
            f,
            "| Algorithm | Status | Plan Length | Time (s) | Nodes/Simulations |"
        )?;
        writeln!(
            f,
            "|-----------|--------|-------------|----------|-------------------|"
        )?;
        for run in result.runs() {
            writeln!(
                f,
                "| {} | {} | {} | {:.3} | {} |",
                run.algorithm,
                status(run),
                plan_cell(run),
                run.time_seconds(),
                run.work,
            )?;
        }
        writeln!(f)?;

        writeln!(f, "## Winner Analysis")?;
        writeln!(f)?;
        for line in result.winner().lines() {
            writeln!(f, "- {line}")?;
        }

        let errors: Vec<_> = result
            .runs()
            .into_iter()
            .filter_map(|run| run.error.as_ref().map(|e| (run.algorithm, e)))
            .collect();
        if !errors.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Errors")?;
            writeln!(f)?;
            for (algorithm, error) in errors {
                writeln!(f, "- **{algorithm}**: {error}")?;
            }
        }

        Ok(())
    }
}
