//! Configuration system for PlanForge.
//!
//! Load planner configuration from TOML or YAML files to control the
//! heuristic, its weight, the time budget and the Monte Carlo budgets
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use planforge_config::PlannerConfig;
//! use planforge_core::HeuristicName;
//! use std::time::Duration;
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     heuristic = "MAX"
//!     heuristic_weight = 2.0
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!
//!     [monte_carlo]
//!     max_simulations = 5000
//! "#).unwrap();
//!
//! assert_eq!(config.heuristic, HeuristicName::Max);
//! assert_eq!(config.time_limit(), Duration::from_secs(30));
//! assert_eq!(config.monte_carlo.max_simulations, 5000);
//! assert_eq!(config.monte_carlo.max_depth, 100);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use planforge_config::PlannerConfig;
//!
//! let config = PlannerConfig::load("planner.toml").unwrap_or_default();
//! assert!(config.validate().is_ok());
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use planforge_core::{HeuristicName, PlanForgeError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default heuristic weight.
pub const DEFAULT_HEURISTIC_WEIGHT: f64 = 1.0;

/// Default time budget per engine, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Default number of Monte Carlo rollouts.
pub const DEFAULT_MAX_SIMULATIONS: usize = 100_000;

/// Default rollout depth bound.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Default CSV report path.
pub const DEFAULT_CSV_OUTPUT: &str = "comparison_results.csv";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for PlanForgeError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Invalid(msg) => PlanForgeError::InvalidConfiguration(msg),
            other => PlanForgeError::InvalidConfiguration(other.to_string()),
        }
    }
}

/// Main planner configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlannerConfig {
    /// Heuristic guiding A*.
    #[serde(default)]
    pub heuristic: HeuristicName,

    /// Weight applied to the heuristic in `f = w*h + g`.
    #[serde(default = "default_heuristic_weight")]
    pub heuristic_weight: f64,

    /// Random seed for reproducible Monte Carlo rollouts.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Time budget configuration.
    #[serde(default)]
    pub termination: TerminationConfig,

    /// A* specific settings.
    #[serde(default)]
    pub astar: AStarConfig,

    /// Monte Carlo specific settings.
    #[serde(default)]
    pub monte_carlo: MonteCarloConfig,

    /// Report sinks used by the comparison harness.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            heuristic: HeuristicName::default(),
            heuristic_weight: DEFAULT_HEURISTIC_WEIGHT,
            random_seed: None,
            termination: TerminationConfig::default(),
            astar: AStarConfig::default(),
            monte_carlo: MonteCarloConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

fn default_heuristic_weight() -> f64 {
    DEFAULT_HEURISTIC_WEIGHT
}

impl PlannerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a file, choosing YAML for `.yaml`/`.yml`
    /// extensions and TOML otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the heuristic.
    pub fn with_heuristic(mut self, heuristic: HeuristicName) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Sets the heuristic weight.
    pub fn with_heuristic_weight(mut self, weight: f64) -> Self {
        self.heuristic_weight = weight;
        self
    }

    /// Sets the time budget in whole seconds.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = TerminationConfig {
            seconds_spent_limit: Some(seconds),
            millis_spent_limit: None,
        };
        self
    }

    /// Sets the time budget in milliseconds.
    pub fn with_termination_millis(mut self, millis: u64) -> Self {
        self.termination = TerminationConfig {
            seconds_spent_limit: None,
            millis_spent_limit: Some(millis),
        };
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Enables or disables open-list duplicate suppression in A*.
    pub fn with_deduplicate_open(mut self, enabled: bool) -> Self {
        self.astar.deduplicate_open = enabled;
        self
    }

    /// Sets the number of Monte Carlo rollouts.
    pub fn with_max_simulations(mut self, max_simulations: usize) -> Self {
        self.monte_carlo.max_simulations = max_simulations;
        self
    }

    /// Sets the Monte Carlo rollout depth bound.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.monte_carlo.max_depth = max_depth;
        self
    }

    /// Sets the CSV report path.
    pub fn with_csv_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.report.csv_output = Some(path.into());
        self
    }

    /// Disables the CSV report.
    pub fn without_csv_output(mut self) -> Self {
        self.report.csv_output = None;
        self
    }

    /// Sets the Markdown report path.
    pub fn with_markdown_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.report.markdown_output = Some(path.into());
        self
    }

    /// Returns the time budget of each engine.
    ///
    /// Falls back to [`DEFAULT_TIMEOUT_SECS`] when no limit is configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use planforge_config::PlannerConfig;
    /// use std::time::Duration;
    ///
    /// let config = PlannerConfig::new().with_termination_millis(250);
    /// assert_eq!(config.time_limit(), Duration::from_millis(250));
    ///
    /// assert_eq!(PlannerConfig::new().time_limit(), Duration::from_secs(600));
    /// ```
    pub fn time_limit(&self) -> Duration {
        self.termination
            .time_limit()
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Checks that the configuration describes a runnable planner.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the heuristic weight is not a
    /// positive finite number, the time budget is zero, or a Monte Carlo
    /// budget is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.heuristic_weight.is_finite() && self.heuristic_weight > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "heuristic weight must be > 0, got {}",
                self.heuristic_weight
            )));
        }
        if self.time_limit().is_zero() {
            return Err(ConfigError::Invalid("timeout must be > 0".to_string()));
        }
        if self.monte_carlo.max_simulations == 0 {
            return Err(ConfigError::Invalid(
                "monte_carlo.max_simulations must be > 0".to_string(),
            ));
        }
        if self.monte_carlo.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "monte_carlo.max_depth must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Termination configuration.
///
/// Both limits add up; an explicit zero is kept as zero so validation can
/// reject it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend per engine.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend per engine.
    pub millis_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any limit is set.
    pub fn time_limit(&self) -> Option<Duration> {
        match (self.seconds_spent_limit, self.millis_spent_limit) {
            (None, None) => None,
            (secs, millis) => Some(
                Duration::from_secs(secs.unwrap_or(0))
                    + Duration::from_millis(millis.unwrap_or(0)),
            ),
        }
    }
}

/// A* configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AStarConfig {
    /// Skip pushing a successor when an open entry for the same state is
    /// already at least as cheap.
    #[serde(default)]
    pub deduplicate_open: bool,
}

/// Monte Carlo configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MonteCarloConfig {
    /// Maximum number of rollouts.
    #[serde(default = "default_max_simulations")]
    pub max_simulations: usize,

    /// Maximum number of actions in a single rollout.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            max_simulations: DEFAULT_MAX_SIMULATIONS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

fn default_max_simulations() -> usize {
    DEFAULT_MAX_SIMULATIONS
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// Report sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportConfig {
    /// CSV record path; `None` disables the CSV sink.
    #[serde(default = "default_csv_output")]
    pub csv_output: Option<PathBuf>,

    /// Markdown report path.
    #[serde(default)]
    pub markdown_output: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            csv_output: default_csv_output(),
            markdown_output: None,
        }
    }
}

fn default_csv_output() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_CSV_OUTPUT))
}

#[cfg(test)]
mod tests;
