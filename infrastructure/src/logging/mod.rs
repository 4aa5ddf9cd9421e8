//! Command journal infrastructure.
//!
//! Provides [`JsonlCommandJournal`], a JSONL file writer that implements
//! the [`CommandJournal`](gradebook_application::CommandJournal) port.

mod jsonl_journal;

pub use jsonl_journal::JsonlCommandJournal;
