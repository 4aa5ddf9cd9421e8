//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section has defaults, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("io.input cannot be empty")]
    EmptyInputPath,

    #[error("io.output cannot be empty")]
    EmptyOutputPath,

    #[error("io.input and io.output must differ (both are '{0}')")]
    InputIsOutput(String),

    #[error("journal.path cannot be empty when the journal is enabled")]
    EmptyJournalPath,
}

/// Raw input/output file configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIoConfig {
    /// File the commands are read from
    pub input: PathBuf,
    /// File the result lines are written to (truncated at start)
    pub output: PathBuf,
}

impl Default for FileIoConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.txt"),
            output: PathBuf::from("output.txt"),
        }
    }
}

/// Raw command journal configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileJournalConfig {
    /// Write a JSONL journal of every command
    pub enabled: bool,
    /// Path of the journal file
    pub path: PathBuf,
}

impl Default for FileJournalConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: PathBuf::from("gradebook.journal.jsonl"),
        }
    }
}

/// Raw terminal output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Print a one-line run summary after processing
    pub summary: bool,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            summary: true,
            color: true,
        }
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Input/output paths
    pub io: FileIoConfig,
    /// Command journal settings
    pub journal: FileJournalConfig,
    /// Terminal output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.io.input.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyInputPath);
        }
        if self.io.output.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyOutputPath);
        }
        // Truncating the output would wipe the input before it is read
        if self.io.input == self.io.output {
            return Err(ConfigValidationError::InputIsOutput(
                self.io.input.display().to_string(),
            ));
        }
        if self.journal.enabled && self.journal.path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyJournalPath);
        }

        Ok(())
    }
}
