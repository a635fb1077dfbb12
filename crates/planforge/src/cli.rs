//! Command-line front end.
//!
//! Loads a problem file, layers command-line overrides on top of an
//! optional configuration file and runs the selected engine(s).

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use planforge_benchmark::{Comparison, ComparisonConfig};
use planforge_config::PlannerConfig;
use planforge_core::{check_supported, HeuristicName, Plan, PlanningProblem, Result};
use planforge_solver::Planner;
use planforge_strips::{load_problem, GroundProblem};

/// Which engine(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Run A* and Monte Carlo and write the comparison reports
    Compare,
    /// Run weighted A* only
    Astar,
    /// Run Monte Carlo rollouts only
    MonteCarlo,
}

#[derive(Debug, Parser)]
#[command(name = "planforge", version, about = "A* and Monte Carlo classical planner")]
pub struct Cli {
    /// Problem file (TOML, or YAML with a .yaml/.yml extension)
    pub problem: PathBuf,

    /// Heuristic weight in f = w*h + g
    #[arg(short = 'w', long)]
    pub weight: Option<f64>,

    /// Heuristic name (e.g. FAST_FORWARD, MAX, SUM)
    #[arg(short = 'e', long)]
    pub heuristic: Option<HeuristicName>,

    /// Time budget per engine, in seconds
    #[arg(short = 't', long)]
    pub timeout: Option<f64>,

    /// Seed for Monte Carlo rollouts
    #[arg(long)]
    pub seed: Option<u64>,

    /// Planner configuration file (TOML or YAML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// CSV report path
    #[arg(long, conflicts_with = "no_csv")]
    pub csv: Option<PathBuf>,

    /// Do not write a CSV report
    #[arg(long)]
    pub no_csv: bool,

    /// Markdown report path
    #[arg(long)]
    pub markdown: Option<PathBuf>,

    /// Number of Monte Carlo rollouts
    #[arg(long)]
    pub max_simulations: Option<usize>,

    /// Maximum rollout depth
    #[arg(long)]
    pub max_depth: Option<usize>,

    #[arg(long, value_enum, default_value_t = Mode::Compare)]
    pub algorithm: Mode,
}

impl Cli {
    /// Builds the planner configuration: file first, then flags.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the file cannot be loaded.
    pub fn planner_config(&self) -> Result<PlannerConfig> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::from_file(path)?,
            None => PlannerConfig::new(),
        };

        if let Some(weight) = self.weight {
            config = config.with_heuristic_weight(weight);
        }
        if let Some(heuristic) = self.heuristic {
            config = config.with_heuristic(heuristic);
        }
        if let Some(seconds) = self.timeout {
            config = config.with_termination_millis(seconds_to_millis(seconds));
        }
        if let Some(seed) = self.seed {
            config = config.with_random_seed(seed);
        }
        if let Some(max_simulations) = self.max_simulations {
            config = config.with_max_simulations(max_simulations);
        }
        if let Some(max_depth) = self.max_depth {
            config = config.with_max_depth(max_depth);
        }
        if let Some(path) = &self.csv {
            config = config.with_csv_output(path);
        }
        if self.no_csv {
            config = config.without_csv_output();
        }
        if let Some(path) = &self.markdown {
            config = config.with_markdown_output(path);
        }

        Ok(config)
    }
}

/// Non-positive and non-finite inputs map to zero, which validation rejects.
/// Positive inputs below one millisecond map to one.
fn seconds_to_millis(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        ((seconds * 1000.0).round() as u64).max(1)
    } else {
        0
    }
}

/// Runs the command and prints the plan found, if any.
///
/// Returns the plan: the A* plan in compare mode when there is one,
/// otherwise the Monte Carlo plan.
///
/// # Errors
///
/// Returns an error for invalid configuration, an unreadable or malformed
/// problem file, or a problem with unsupported requirements.
pub fn run(cli: &Cli) -> Result<Option<Plan>> {
    let config = cli.planner_config()?;
    let planner = Planner::new(config)?;
    let problem = load_problem(&cli.problem)?;
    check_supported(problem.requirements())?;

    let plan = match cli.algorithm {
        Mode::Astar => planner.solve_astar(&problem)?.into_plan(),
        Mode::MonteCarlo => planner.solve_monte_carlo(&problem)?.into_plan(),
        Mode::Compare => {
            let comparison = ComparisonConfig::from_report_config(
                problem_name(cli, &problem),
                &planner.config().report,
            );
            Comparison::new(comparison, planner)
                .run(&problem)
                .into_primary_plan()
        }
    };

    print_plan(&problem, plan.as_ref());
    Ok(plan)
}

fn problem_name(cli: &Cli, problem: &GroundProblem) -> String {
    if !problem.name().is_empty() {
        return problem.name().to_string();
    }
    cli.problem
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "problem".to_string())
}

fn print_plan(problem: &GroundProblem, plan: Option<&Plan>) {
    let mut stdout = io::stdout().lock();
    let _ = match plan {
        Some(plan) => write!(
            stdout,
            "Plan ({} actions):\n{}",
            plan.len(),
            plan.display(problem)
        ),
        None => writeln!(stdout, "No plan found."),
    };
    let _ = stdout.flush();
}
