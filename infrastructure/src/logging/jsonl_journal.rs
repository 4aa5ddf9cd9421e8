//! JSONL file writer for command journal events.
//!
//! Each [`JournalEvent`] becomes one JSON line carrying its `type`, a
//! millisecond `timestamp` and a sequence number `seq`.

use gradebook_application::{CommandJournal, JournalEvent};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

struct JournalWriter {
    out: BufWriter<File>,
    seq: u64,
}

/// JSONL command journal that writes one JSON object per line.
///
/// The file is truncated when the journal is created. Flushes after every
/// line and on `Drop`.
pub struct JsonlCommandJournal {
    writer: Mutex<JournalWriter>,
    path: PathBuf,
}

impl JsonlCommandJournal {
    /// Create a journal writing to the given path.
    ///
    /// Creates parent directories as needed. Returns `None` (after a
    /// warning) if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create journal directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create journal file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(JournalWriter {
                out: BufWriter::new(file),
                seq: 0,
            }),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn build_record(event: JournalEvent, seq: u64) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert("timestamp".to_string(), Value::from(timestamp));
        map.insert("seq".to_string(), Value::from(seq));
        Value::Object(map)
    }
}

impl CommandJournal for JsonlCommandJournal {
    fn record(&self, event: JournalEvent) {
        let Ok(mut writer) = self.writer.lock() else {
            return;
        };

        writer.seq += 1;
        let record = Self::build_record(event, writer.seq);
        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Err(e) = writeln!(writer.out, "{}", line).and_then(|_| writer.out.flush()) {
            warn!("Could not write journal entry to {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlCommandJournal {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.out.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_journal_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.jsonl");
        let journal = JsonlCommandJournal::new(&path).unwrap();

        journal.record(JournalEvent::new(
            "command_handled",
            json!({ "command": "ADD_STUDENT", "success": true }),
        ));
        journal.record(JournalEvent::new(
            "command_ignored",
            json!({ "token": "HELLO" }),
        ));
        drop(journal);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "command_handled");
        assert_eq!(records[0]["command"], "ADD_STUDENT");
        assert_eq!(records[0]["seq"], 1);
        assert!(records[0]["timestamp"].is_string());
        assert_eq!(records[1]["type"], "command_ignored");
        assert_eq!(records[1]["token"], "HELLO");
        assert_eq!(records[1]["seq"], 2);
    }

    #[test]
    fn test_non_object_payload_goes_under_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.jsonl");
        let journal = JsonlCommandJournal::new(&path).unwrap();

        journal.record(JournalEvent::new("note", json!("just a string")));
        drop(journal);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "note");
        assert_eq!(records[0]["data"], "just a string");
    }

    #[test]
    fn test_creates_parent_directories_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("nested").join("run.jsonl");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale\n").unwrap();

        let journal = JsonlCommandJournal::new(&path).unwrap();
        assert_eq!(journal.path(), path.as_path());
        journal.record(JournalEvent::new("run_finished", json!({ "handled": 0 })));
        drop(journal);

        let records = read_lines(&path);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["type"], "run_finished");
    }

    #[test]
    fn test_directory_path_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlCommandJournal::new(dir.path()).is_none());
    }
}
