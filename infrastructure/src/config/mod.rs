//! Configuration file loading for gradebook
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `GRADEBOOK_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./gradebook.toml` or `./.gradebook.toml`
//! 4. Global: `<config dir>/gradebook/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileIoConfig, FileJournalConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
