//! Presentation layer for gradebook
//!
//! This crate contains the CLI definition, the output line formatter,
//! the line reporter that writes outcomes to the result file, and the
//! terminal run summary.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use output::line::LineFormatter;
pub use output::reporter::LineReporter;
pub use output::summary::SummaryFormatter;
