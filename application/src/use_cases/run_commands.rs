//! Run Commands use case
//!
//! The command dispatcher: reads one command token at a time, hands the
//! token source to the matching handler, and forwards every outcome to the
//! sink before reading the next command.

use crate::handlers::{self, ArgReader, HandlerError};
use crate::ports::command_journal::{CommandJournal, JournalEvent, NoCommandJournal};
use crate::ports::outcome_sink::{OutcomeSink, SinkError};
use crate::ports::token_source::{SourceError, TokenSource};
use gradebook_domain::{CommandName, END_OF_INPUT, EntityStore, Outcome};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort a run. Validation failures never do.
#[derive(Error, Debug)]
pub enum RunCommandsError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// How the input stream ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunEnd {
    /// The `END` marker was read
    Marker,
    /// Physical end of stream
    #[default]
    EndOfStream,
    /// End of stream inside a command's argument list
    Truncated,
}

/// Totals for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Commands whose handler ran to completion
    pub handled: usize,
    /// Handled commands whose outcomes were all successes
    pub succeeded: usize,
    /// Handled commands with at least one validation failure
    pub rejected: usize,
    /// Unrecognised command tokens
    pub ignored: usize,
    /// Commands skipped because of malformed or missing arguments
    pub dropped: usize,
    /// Outcomes delivered to the sink
    pub outcomes: usize,
    pub end: RunEnd,
}

impl RunReport {
    fn record(&mut self, outcomes: &[Outcome]) {
        self.handled += 1;
        self.outcomes += outcomes.len();
        if outcomes.iter().all(Outcome::is_success) {
            self.succeeded += 1;
        } else {
            self.rejected += 1;
        }
    }
}

/// Use case for interpreting a command stream against an entity store
pub struct RunCommandsUseCase {
    journal: Arc<dyn CommandJournal>,
}

impl Default for RunCommandsUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl RunCommandsUseCase {
    pub fn new() -> Self {
        Self {
            journal: Arc::new(NoCommandJournal),
        }
    }

    pub fn with_journal(mut self, journal: Arc<dyn CommandJournal>) -> Self {
        self.journal = journal;
        self
    }

    /// Execute against a fresh store that lives for this run only
    pub fn execute(
        &self,
        source: &mut dyn TokenSource,
        sink: &mut dyn OutcomeSink,
    ) -> Result<RunReport, RunCommandsError> {
        let mut store = EntityStore::new();
        self.execute_on(&mut store, source, sink)
    }

    /// Execute against an existing store
    pub fn execute_on(
        &self,
        store: &mut EntityStore,
        source: &mut dyn TokenSource,
        sink: &mut dyn OutcomeSink,
    ) -> Result<RunReport, RunCommandsError> {
        let mut report = RunReport::default();

        while let Some(token) = source.next_token()? {
            if token == END_OF_INPUT {
                report.end = RunEnd::Marker;
                break;
            }

            let Ok(command) = token.parse::<CommandName>() else {
                debug!(token = %token, "Ignoring unrecognised command");
                report.ignored += 1;
                self.journal.record(JournalEvent::new(
                    "command_ignored",
                    json!({ "token": token }),
                ));
                continue;
            };

            let mut args = ArgReader::new(command, source);
            match handlers::handle(command, &mut args, store) {
                Ok(outcomes) => {
                    for outcome in &outcomes {
                        sink.emit(outcome)?;
                    }
                    self.on_handled(command, &outcomes);
                    report.record(&outcomes);
                }
                Err(HandlerError::Source(e)) => return Err(e.into()),
                Err(e @ HandlerError::Truncated { .. }) => {
                    warn!("{}", e);
                    report.dropped += 1;
                    report.end = RunEnd::Truncated;
                    self.on_dropped(command, &e);
                    break;
                }
                Err(e @ HandlerError::Malformed { .. }) => {
                    warn!("{}", e);
                    report.dropped += 1;
                    self.on_dropped(command, &e);
                }
            }
        }

        info!(
            handled = report.handled,
            succeeded = report.succeeded,
            rejected = report.rejected,
            ignored = report.ignored,
            dropped = report.dropped,
            "Command run finished"
        );
        self.journal.record(JournalEvent::new(
            "run_finished",
            serde_json::to_value(&report).unwrap_or_default(),
        ));

        Ok(report)
    }

    fn on_handled(&self, command: CommandName, outcomes: &[Outcome]) {
        let success = outcomes.iter().all(Outcome::is_success);
        let kinds: Vec<_> = outcomes.iter().map(Outcome::kind).collect();
        if success {
            debug!(%command, outcomes = outcomes.len(), "Command handled");
        } else {
            debug!(%command, ?kinds, "Command rejected");
        }

        // One outcome renders as one output line
        self.journal.record(JournalEvent::new(
            "command_handled",
            json!({
                "command": command,
                "success": success,
                "kinds": kinds,
                "lines": outcomes.len(),
                "outcomes": outcomes,
            }),
        ));
    }

    fn on_dropped(&self, command: CommandName, error: &HandlerError) {
        self.journal.record(JournalEvent::new(
            "command_dropped",
            json!({
                "command": command,
                "reason": error.to_string(),
            }),
        ));
    }
}
