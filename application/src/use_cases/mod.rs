//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod run_based_sum;
pub mod run_commands;
