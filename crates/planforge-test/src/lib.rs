//! Shared test fixtures for PlanForge crates.
//!
//! - [`basic`] - Tiny hand-written problems with known answers
//! - [`scaled`] - Parameterized families (corridor, grid, gripper, toggles)
//! - [`assert`] - Plan validation helpers
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! planforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use planforge_test::basic::move_a_to_b;
//! use planforge_test::assert_valid_plan;
//! ```

pub mod assert;
pub mod basic;
pub mod scaled;

pub use assert::{assert_valid_plan, plan_names};
pub use basic::{conditional_lamp, durative_move, move_a_to_b, unreachable_goal};
pub use scaled::{corridor, grid, gripper, toggle_space};
