//! Append-only log of generated artifacts.

use std::sync::Mutex;

use linguatale_interface::{timestamp, GeneratedText};
use tracing::debug;

/// Append-only log of generated-artifact records.
///
/// Records keep their insertion order and have no identity beyond position.
/// The log never evicts; unbounded growth is an accepted limitation at this
/// scope.
#[derive(Debug, Default)]
pub struct HistoryLog {
    records: Mutex<Vec<GeneratedText>>,
}

impl HistoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, stamping the current time when it carries none.
    pub fn append(&self, mut record: GeneratedText) {
        if record.timestamp.is_none() {
            record.timestamp = Some(timestamp::now());
        }
        let mut records = self.records.lock().unwrap();
        records.push(record);
        debug!(total = records.len(), "Appended history record");
    }

    /// All records, in insertion order.
    pub fn list(&self) -> Vec<GeneratedText> {
        self.records.lock().unwrap().clone()
    }

    /// Empty the log.
    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Whether the log holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }

    /// Snapshot of all records, for session export.
    pub(crate) fn export(&self) -> Vec<GeneratedText> {
        self.list()
    }

    /// Replace all records, for session import.
    pub(crate) fn replace(&self, records: Vec<GeneratedText>) {
        *self.records.lock().unwrap() = records;
    }
}
