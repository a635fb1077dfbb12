//! PlanForge Core - Core types and traits for classical planning
//!
//! This crate provides the fundamental abstractions shared by the planner:
//! - Domain traits describing states, actions and problems
//! - Requirement flags used to reject unsupported problems
//! - Heuristic names and the state heuristic trait
//! - The sequential plan type produced by the search engines

pub mod domain;
pub mod error;
pub mod heuristic;
pub mod plan;

pub use domain::{
    check_supported, ConditionalEffect, PlanningAction, PlanningProblem, PlanningState, RequireKey,
    UNSUPPORTED_REQUIREMENTS,
};
pub use error::{PlanForgeError, Result};
pub use heuristic::{HeuristicName, StateHeuristic};
pub use plan::Plan;
