//! Error types for PlanForge

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::RequireKey;

/// Main error type for PlanForge operations
#[derive(Debug, Error)]
pub enum PlanForgeError {
    /// The problem declares requirements the state-space planner cannot handle
    #[error("Problem not supported: requires {}", join_requirements(.0))]
    UnsupportedProblem(Vec<RequireKey>),

    /// Error in planner configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Error in the problem model (unknown fact, malformed action, ...)
    #[error("Problem model error: {0}")]
    Model(String),

    /// A plan failed validation against its problem
    #[error("Invalid plan: {0}")]
    InvalidPlan(String),

    /// A report could not be written to its sink
    #[error("Failed to write report to {}: {source}", .path.display())]
    ReportSink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn join_requirements(keys: &[RequireKey]) -> String {
    keys.iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for PlanForge operations
pub type Result<T> = std::result::Result<T, PlanForgeError>;
