//! Infrastructure layer for gradebook
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the whitespace token reader, the output file,
//! the JSONL command journal, and configuration file loading.

pub mod config;
pub mod input;
pub mod logging;
pub mod output;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileIoConfig, FileJournalConfig,
    FileOutputConfig,
};
pub use input::{InputError, WhitespaceTokenReader};
pub use logging::JsonlCommandJournal;
pub use output::{OutputError, create_output};
