//! CLI entrypoint for gradebook
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use gradebook_application::{RunBasedSumError, RunBasedSumUseCase, RunCommandsUseCase};
use gradebook_infrastructure::{
    ConfigLoader, FileConfig, JsonlCommandJournal, WhitespaceTokenReader, create_output,
};
use gradebook_presentation::{Cli, Command, LineFormatter, LineReporter, SummaryFormatter};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines reach the file
    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;
    let show_summary = !cli.quiet && config.output.summary;

    info!(mode = ?cli.mode(), "Starting gradebook");

    match cli.mode() {
        Command::Records => run_records(&config, show_summary),
        Command::BasedSum => run_based_sum(&config, show_summary),
    }
}

fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::new(cli.log_level());

    let Some(path) = &cli.log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

/// Load file/env configuration and apply command-line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| *e)
            .context("Failed to load configuration")?
    };

    if let Some(input) = &cli.input {
        config.io.input = input.clone();
    }
    if let Some(output) = &cli.output {
        config.io.output = output.clone();
    }
    if let Some(journal) = &cli.journal {
        config.journal.enabled = true;
        config.journal.path = journal.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn run_records(config: &FileConfig, show_summary: bool) -> Result<()> {
    // Output is cleared before any command runs
    let writer = create_output(&config.io.output)?;
    let mut reporter = LineReporter::new(writer);
    let mut source = WhitespaceTokenReader::open(&config.io.input)?;

    let mut use_case = RunCommandsUseCase::new();
    if config.journal.enabled
        && let Some(journal) = JsonlCommandJournal::new(&config.journal.path)
    {
        info!(path = %journal.path().display(), "Command journal enabled");
        use_case = use_case.with_journal(Arc::new(journal));
    }

    let report = use_case
        .execute(&mut source, &mut reporter)
        .with_context(|| format!("Failed to process {}", config.io.input.display()))?;
    reporter
        .flush()
        .with_context(|| format!("Failed to write {}", config.io.output.display()))?;

    if show_summary {
        println!(
            "{}",
            SummaryFormatter::new(config.output.color).format(
                &report,
                reporter.lines_written(),
                &config.io.output
            )
        );
    }

    Ok(())
}

fn run_based_sum(config: &FileConfig, show_summary: bool) -> Result<()> {
    let mut source = WhitespaceTokenReader::open(&config.io.input)?;

    let sum = match RunBasedSumUseCase::new().execute(&mut source) {
        Ok(sum) => Some(sum),
        Err(RunBasedSumError::Rejected(reason)) => {
            warn!("Based-sum input rejected: {}", reason);
            None
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read {}", config.io.input.display()));
        }
    };

    write_line(&config.io.output, &LineFormatter::based_sum(sum))?;

    if show_summary {
        println!(
            "{}",
            SummaryFormatter::new(config.output.color).format_based_sum(sum, &config.io.output)
        );
    }

    Ok(())
}

fn write_line(path: &Path, line: &str) -> Result<()> {
    let mut writer = create_output(path)?;
    writeln!(writer, "{}", line)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write {}", path.display()))
}
