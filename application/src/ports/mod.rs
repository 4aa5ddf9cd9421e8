//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod command_journal;
pub mod outcome_sink;
pub mod token_source;
