//! Configured entry point for both engines.

use planforge_config::PlannerConfig;
use planforge_core::{PlanningProblem, Result};

use crate::search::{AStarReport, AStarSearch, MonteCarloReport, MonteCarloSearch};

/// Holds a validated configuration and builds engines from it.
///
/// # Example
///
/// ```
/// use planforge_config::PlannerConfig;
/// use planforge_solver::Planner;
///
/// let planner = Planner::new(PlannerConfig::new().with_max_simulations(100)).unwrap();
/// assert_eq!(planner.monte_carlo().max_simulations(), 100);
///
/// assert!(Planner::new(PlannerConfig::new().with_heuristic_weight(0.0)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Validates `config` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if validation fails.
    pub fn new(config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// The A* engine described by the configuration.
    pub fn astar(&self) -> AStarSearch {
        AStarSearch::new(
            self.config.heuristic,
            self.config.heuristic_weight,
            self.config.time_limit(),
        )
        .with_deduplicate_open(self.config.astar.deduplicate_open)
    }

    /// The Monte Carlo engine described by the configuration.
    pub fn monte_carlo(&self) -> MonteCarloSearch {
        let search = MonteCarloSearch::new(
            self.config.monte_carlo.max_simulations as u64,
            self.config.monte_carlo.max_depth,
            self.config.time_limit(),
        );
        match self.config.random_seed {
            Some(seed) => search.with_seed(seed),
            None => search,
        }
    }

    pub fn solve_astar<P: PlanningProblem>(&self, problem: &P) -> Result<AStarReport> {
        self.astar().search(problem)
    }

    pub fn solve_monte_carlo<P: PlanningProblem>(&self, problem: &P) -> Result<MonteCarloReport> {
        self.monte_carlo().search(problem)
    }
}
