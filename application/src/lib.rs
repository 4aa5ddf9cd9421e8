//! Application layer for gradebook
//!
//! This crate contains the command handlers, the use cases that drive them,
//! and the port definitions adapters implement.
//! It depends only on the domain layer.

pub mod handlers;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use handlers::{ArgReader, HandlerError};
pub use ports::{
    command_journal::{CommandJournal, JournalEvent, NoCommandJournal},
    outcome_sink::{CollectingSink, OutcomeSink, SinkError},
    token_source::{MemoryTokenSource, SourceError, TokenSource},
};
pub use use_cases::run_based_sum::{RunBasedSumError, RunBasedSumUseCase};
pub use use_cases::run_commands::{RunCommandsError, RunCommandsUseCase, RunEnd, RunReport};
