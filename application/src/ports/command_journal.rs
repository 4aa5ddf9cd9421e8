//! Port for structured command journaling.
//!
//! Defines the [`CommandJournal`] trait for recording what happened to each
//! command (handled, ignored, dropped) in a machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while the journal keeps one record per
//! command for later inspection (JSONL).

use serde_json::Value;

/// A structured journal event.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. Adapters add the timestamp.
pub struct JournalEvent {
    /// Event type identifier (e.g., "command_handled", "command_ignored").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl JournalEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging journal events.
///
/// `record` is synchronous and non-fallible so the journal can never change
/// the outcome of a run; adapters swallow their own write failures.
pub trait CommandJournal {
    fn record(&self, event: JournalEvent);
}

/// No-op implementation for tests and when journaling is disabled.
pub struct NoCommandJournal;

impl CommandJournal for NoCommandJournal {
    fn record(&self, _event: JournalEvent) {}
}
