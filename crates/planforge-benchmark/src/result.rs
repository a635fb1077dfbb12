//! Comparison results and winner analysis.

use std::fmt;
use std::time::Duration;

use planforge_core::Plan;

/// The two compared engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    AStar,
    MonteCarlo,
}

impl Algorithm {
    /// Label used in CSV records.
    pub fn csv_label(&self) -> &'static str {
        match self {
            Algorithm::AStar => "A*",
            Algorithm::MonteCarlo => "Monte_Carlo",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::AStar => "A*",
            Algorithm::MonteCarlo => "Monte Carlo",
        })
    }
}

/// Outcome of one engine inside a comparison.
#[derive(Debug, Clone)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    /// Plan found, if any.
    pub plan: Option<Plan>,
    /// Wall-clock time of the engine call.
    pub time: Duration,
    /// Nodes popped from the open list (A*) or rollouts performed (Monte Carlo).
    pub work: u64,
    /// Error message if the engine refused to run.
    pub error: Option<String>,
}

impl AlgorithmRun {
    /// A run that produced a report.
    pub fn completed(algorithm: Algorithm, plan: Option<Plan>, time: Duration, work: u64) -> Self {
        Self {
            algorithm,
            plan,
            time,
            work,
            error: None,
        }
    }

    /// A run the engine rejected.
    pub fn rejected(algorithm: Algorithm, time: Duration, error: impl fmt::Display) -> Self {
        Self {
            algorithm,
            plan: None,
            time,
            work: 0,
            error: Some(error.to_string()),
        }
    }

    pub fn success(&self) -> bool {
        self.plan.is_some()
    }

    /// Plan length, or 0 when no plan was found.
    pub fn plan_length(&self) -> usize {
        self.plan.as_ref().map_or(0, Plan::len)
    }

    pub fn time_seconds(&self) -> f64 {
        self.time.as_secs_f64()
    }
}

/// Result of running both engines on one problem.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub name: String,
    pub astar: AlgorithmRun,
    pub monte_carlo: AlgorithmRun,
}

impl ComparisonResult {
    pub fn new(name: impl Into<String>, astar: AlgorithmRun, monte_carlo: AlgorithmRun) -> Self {
        Self {
            name: name.into(),
            astar,
            monte_carlo,
        }
    }

    /// Both runs, A* first.
    pub fn runs(&self) -> [&AlgorithmRun; 2] {
        [&self.astar, &self.monte_carlo]
    }

    /// The A* plan if there is one, otherwise the Monte Carlo plan.
    pub fn primary_plan(&self) -> Option<&Plan> {
        self.astar.plan.as_ref().or(self.monte_carlo.plan.as_ref())
    }

    pub fn into_primary_plan(self) -> Option<Plan> {
        self.astar.plan.or(self.monte_carlo.plan)
    }

    /// Compares the two runs.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use planforge_benchmark::{Algorithm, AlgorithmRun, ComparisonResult, WinnerAnalysis};
    /// use planforge_core::Plan;
    ///
    /// let astar = AlgorithmRun::completed(
    ///     Algorithm::AStar,
    ///     Some(Plan::from_actions(vec![0, 1])),
    ///     Duration::from_millis(30),
    ///     12,
    /// );
    /// let mc = AlgorithmRun::completed(Algorithm::MonteCarlo, None, Duration::from_millis(90), 500);
    /// let result = ComparisonResult::new("demo", astar, mc);
    ///
    /// assert_eq!(result.winner(), WinnerAnalysis::Only(Algorithm::AStar));
    /// ```
    pub fn winner(&self) -> WinnerAnalysis {
        match (&self.astar.plan, &self.monte_carlo.plan) {
            (Some(a), Some(m)) => {
                let (shortest, shortest_length) = if a.len() <= m.len() {
                    (Algorithm::AStar, a.len())
                } else {
                    (Algorithm::MonteCarlo, m.len())
                };
                let (fastest, fastest_time) = if self.astar.time <= self.monte_carlo.time {
                    (Algorithm::AStar, self.astar.time)
                } else {
                    (Algorithm::MonteCarlo, self.monte_carlo.time)
                };
                WinnerAnalysis::Both {
                    shortest,
                    shortest_length,
                    fastest,
                    fastest_time,
                    length_difference: a.len().abs_diff(m.len()),
                    time_difference: duration_diff(self.astar.time, self.monte_carlo.time),
                }
            }
            (Some(_), None) => WinnerAnalysis::Only(Algorithm::AStar),
            (None, Some(_)) => WinnerAnalysis::Only(Algorithm::MonteCarlo),
            (None, None) => WinnerAnalysis::Neither,
        }
    }
}

fn duration_diff(a: Duration, b: Duration) -> Duration {
    if a >= b {
        a - b
    } else {
        b - a
    }
}

/// Which engine did better.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WinnerAnalysis {
    /// Both found a plan. Ties go to A*.
    Both {
        shortest: Algorithm,
        shortest_length: usize,
        fastest: Algorithm,
        fastest_time: Duration,
        length_difference: usize,
        time_difference: Duration,
    },
    /// Only one engine found a plan.
    Only(Algorithm),
    /// Neither engine found a plan.
    Neither,
}

impl WinnerAnalysis {
    /// Human-readable summary lines.
    pub fn lines(&self) -> Vec<String> {
        match self {
            WinnerAnalysis::Both {
                shortest,
                shortest_length,
                fastest,
                fastest_time,
                length_difference,
                time_difference,
            } => vec![
                format!("Shortest plan: {shortest} ({shortest_length} actions)"),
                format!(
                    "Fastest search: {fastest} ({:.3}s)",
                    fastest_time.as_secs_f64()
                ),
                format!("Plan length difference: {length_difference} actions"),
                format!(
                    "Time difference: {:.3} seconds",
                    time_difference.as_secs_f64()
                ),
            ],
            WinnerAnalysis::Only(algorithm) => {
                vec![format!(
                    "Overall winner: {algorithm} (only successful algorithm)"
                )]
            }
            WinnerAnalysis::Neither => {
                vec!["Both algorithms failed to find a solution.".to_string()]
            }
        }
    }
}

impl fmt::Display for WinnerAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(algorithm: Algorithm, len: Option<usize>, millis: u64) -> AlgorithmRun {
        AlgorithmRun::completed(
            algorithm,
            len.map(|n| Plan::from_actions(vec![0; n])),
            Duration::from_millis(millis),
            10,
        )
    }

    #[test]
    fn test_both_succeed() {
        let result = ComparisonResult::new(
            "p",
            run(Algorithm::AStar, Some(4), 300),
            run(Algorithm::MonteCarlo, Some(6), 100),
        );

        assert_eq!(
            result.winner(),
            WinnerAnalysis::Both {
                shortest: Algorithm::AStar,
                shortest_length: 4,
                fastest: Algorithm::MonteCarlo,
                fastest_time: Duration::from_millis(100),
                length_difference: 2,
                time_difference: Duration::from_millis(200),
            }
        );
        assert_eq!(result.primary_plan().map(Plan::len), Some(4));
    }

    #[test]
    fn test_ties_go_to_astar() {
        let result = ComparisonResult::new(
            "p",
            run(Algorithm::AStar, Some(3), 50),
            run(Algorithm::MonteCarlo, Some(3), 50),
        );

        let lines = result.winner().lines();
        assert_eq!(lines[0], "Shortest plan: A* (3 actions)");
        assert_eq!(lines[1], "Fastest search: A* (0.050s)");
        assert_eq!(lines[2], "Plan length difference: 0 actions");
    }

    #[test]
    fn test_only_monte_carlo() {
        let result = ComparisonResult::new(
            "p",
            run(Algorithm::AStar, None, 50),
            run(Algorithm::MonteCarlo, Some(9), 50),
        );

        assert_eq!(result.winner(), WinnerAnalysis::Only(Algorithm::MonteCarlo));
        assert_eq!(
            result.winner().to_string(),
            "Overall winner: Monte Carlo (only successful algorithm)\n"
        );
        assert_eq!(result.into_primary_plan().map(|p| p.len()), Some(9));
    }

    #[test]
    fn test_neither() {
        let result = ComparisonResult::new(
            "p",
            run(Algorithm::AStar, None, 50),
            AlgorithmRun::rejected(Algorithm::MonteCarlo, Duration::ZERO, "nope"),
        );

        assert_eq!(result.winner(), WinnerAnalysis::Neither);
        assert!(result.primary_plan().is_none());
        assert_eq!(result.monte_carlo.plan_length(), 0);
        assert_eq!(result.monte_carlo.error.as_deref(), Some("nope"));
    }
}
