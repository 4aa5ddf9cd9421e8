//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Batch mode to run
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Interpret student, exam and grade commands (default)
    #[default]
    Records,
    /// Sum numbers written in mixed bases
    BasedSum,
}

/// CLI arguments for gradebook
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(author, version, about = "Batch record store for students, exams and grades")]
#[command(long_about = r#"
Gradebook reads whitespace-separated commands from an input file and writes
one result line per command to an output file.

Commands:
  ADD_STUDENT <id> <name> <faculty>      SEARCH_STUDENT <id>
  ADD_EXAM <id> WRITTEN|DIGITAL <info>   UPDATE_EXAM <id> WRITTEN|DIGITAL <info>
  ADD_GRADE <exam> <student> <grade>     UPDATE_GRADE <exam> <student> <grade>
  SEARCH_GRADE <exam> <student>          DELETE_STUDENT <id>
  LIST_ALL_STUDENTS                      END

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./gradebook.toml         Project-level config
3. ~/.config/gradebook/config.toml   Global config

Example:
  gradebook --input input.txt --output output.txt
  gradebook based-sum -i numbers.txt -o sum.txt
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to read commands from
    #[arg(short, long, value_name = "PATH", global = true)]
    pub input: Option<PathBuf>,

    /// File to write results to (truncated at start)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub output: Option<PathBuf>,

    /// Write a JSONL journal of every command to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub journal: Option<PathBuf>,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the run summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

impl Cli {
    /// The selected mode, defaulting to the record store
    pub fn mode(&self) -> Command {
        self.command.unwrap_or_default()
    }

    /// Log filter directive for the verbosity count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
