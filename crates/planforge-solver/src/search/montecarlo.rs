//! Monte Carlo rollout search.

use std::time::Duration;

use planforge_core::{
    check_supported, Plan, PlanForgeError, PlanningAction, PlanningProblem, PlanningState, Result,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use super::{check_time_limit, MonteCarloReport};
use crate::scope::SearchScope;
use crate::stats::{MonteCarloStats, RolloutEnd};
use crate::termination::{OrTermination, StepCountTermination, Termination, TimeTermination};

/// Repeated random walks from the initial state, keeping the shortest walk
/// that reaches the goal.
///
/// Each rollout picks uniformly among the applicable actions until the goal
/// holds, no action applies, or `max_depth` actions have been taken. The
/// goal is tested before each step, so a walk that reaches the goal on its
/// `max_depth`-th action does not count.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use planforge_solver::MonteCarloSearch;
///
/// let mc = MonteCarloSearch::new(1_000, 50, Duration::from_secs(5)).with_seed(7);
/// assert_eq!(mc.max_depth(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct MonteCarloSearch<T = TimeTermination> {
    max_simulations: u64,
    max_depth: usize,
    seed: Option<u64>,
    termination: T,
}

impl MonteCarloSearch<TimeTermination> {
    pub fn new(max_simulations: u64, max_depth: usize, timeout: Duration) -> Self {
        Self {
            max_simulations,
            max_depth,
            seed: None,
            termination: TimeTermination::new(timeout),
        }
    }
}

impl<T: Termination> MonteCarloSearch<T> {
    /// Seeds the random source used by [`search`](Self::search).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the time termination.
    pub fn with_termination<U: Termination>(self, termination: U) -> MonteCarloSearch<U> {
        MonteCarloSearch {
            max_simulations: self.max_simulations,
            max_depth: self.max_depth,
            seed: self.seed,
            termination,
        }
    }

    pub fn max_simulations(&self) -> u64 {
        self.max_simulations
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Searches with a `ChaCha8Rng` seeded from the configured seed, or from
    /// the thread RNG when none is set.
    pub fn search<P: PlanningProblem>(&self, problem: &P) -> Result<MonteCarloReport> {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        self.search_with_rng(problem, &mut rng)
    }

    /// Searches drawing every random choice from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedProblem` before any rollout if the problem declares
    /// an unsupported requirement, and `InvalidConfiguration` if the rollout
    /// budget, the depth bound or the time limit is zero.
    pub fn search_with_rng<P, R>(&self, problem: &P, rng: &mut R) -> Result<MonteCarloReport>
    where
        P: PlanningProblem,
        R: Rng,
    {
        check_supported(problem.requirements())?;
        if self.max_simulations == 0 {
            return Err(PlanForgeError::InvalidConfiguration(
                "monte_carlo.max_simulations must be > 0".to_string(),
            ));
        }
        if self.max_depth == 0 {
            return Err(PlanForgeError::InvalidConfiguration(
                "monte_carlo.max_depth must be > 0".to_string(),
            ));
        }
        check_time_limit(&self.termination)?;

        let mut scope = SearchScope::new();
        let mut stats = MonteCarloStats::default();
        let mut best: Option<Plan> = None;
        let mut path = Vec::with_capacity(self.max_depth);
        let mut applicable = Vec::new();

        info!(
            event = "search_start",
            algorithm = "Monte Carlo",
            max_simulations = self.max_simulations,
            max_depth = self.max_depth,
            actions = problem.actions().len(),
        );

        let rollout_budget = StepCountTermination::new(self.max_simulations);
        let budget = OrTermination((&rollout_budget, &self.termination));

        while !budget.is_terminated(&scope) {
            let end = self.rollout(problem, rng, &scope, &mut path, &mut applicable);
            let simulation = scope.increment_step_count();
            stats.record_rollout(end);
            trace!(event = "rollout", simulation, end = ?end, depth = path.len());

            if end == RolloutEnd::Goal && best.as_ref().map_or(true, |b| path.len() < b.len()) {
                info!(
                    event = "rollout_improved",
                    simulation,
                    plan_length = path.len(),
                );
                stats.record_improvement(simulation, path.len());
                best = Some(Plan::from_actions(path.clone()));
            }

            if simulation % 10_000 == 0 {
                debug!(
                    event = "progress",
                    algorithm = "Monte Carlo",
                    simulations = simulation,
                    successes = stats.successes,
                    best = best.as_ref().map(Plan::len),
                );
            }
        }

        stats.elapsed = scope.elapsed();
        let timed_out = stats.time_aborts > 0 || scope.step_count() < self.max_simulations;

        info!(
            event = "search_end",
            algorithm = "Monte Carlo",
            outcome = if best.is_some() { "succeeded" } else { "no_plan" },
            plan_length = best.as_ref().map(Plan::len),
            simulations = stats.simulations,
            timed_out,
            duration_ms = stats.elapsed.as_millis() as u64,
        );

        Ok(MonteCarloReport {
            plan: best,
            timed_out,
            stats,
        })
    }

    /// Runs one random walk, leaving the chosen action indices in `path`.
    fn rollout<P, R>(
        &self,
        problem: &P,
        rng: &mut R,
        scope: &SearchScope,
        path: &mut Vec<usize>,
        applicable: &mut Vec<usize>,
    ) -> RolloutEnd
    where
        P: PlanningProblem,
        R: Rng,
    {
        let actions = problem.actions();
        let goal = problem.goal();
        let mut state = problem.initial_state().clone();
        path.clear();

        for _ in 0..self.max_depth {
            if self.termination.is_terminated(scope) {
                return RolloutEnd::TimeLimit;
            }
            if state.satisfies(goal) {
                return RolloutEnd::Goal;
            }

            applicable.clear();
            applicable.extend(
                actions
                    .iter()
                    .enumerate()
                    .filter(|(_, action)| action.is_applicable(&state))
                    .map(|(i, _)| i),
            );
            if applicable.is_empty() {
                return RolloutEnd::DeadEnd;
            }

            let chosen = applicable[rng.random_range(0..applicable.len())];
            state = actions[chosen].successor(&state);
            path.push(chosen);
        }

        RolloutEnd::DepthLimit
    }
}

#[cfg(test)]
#[path = "montecarlo_tests.rs"]
mod tests;
