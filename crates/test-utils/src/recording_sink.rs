use std::sync::{Arc, Mutex};

use runners::roster::LogRecord;
use runners::sink::LogSink;

/// A sink that keeps every record so tests can inspect what the roster
/// manager would have logged.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Records rendered exactly as the log line text.
    pub fn lines(&self) -> Vec<String> {
        self.records().iter().map(|r| r.to_string()).collect()
    }

    /// Contents of the most recent PRINT block, between its markers.
    pub fn last_listing(&self) -> Option<Vec<String>> {
        let records = self.records();
        let end = records.iter().rposition(|r| *r == LogRecord::ListEnd)?;
        let start = records[..end]
            .iter()
            .rposition(|r| *r == LogRecord::ListStart)?;
        Some(
            records[start + 1..end]
                .iter()
                .map(|r| r.to_string())
                .collect(),
        )
    }

    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }
}

impl LogSink for RecordingSink {
    fn emit(&mut self, record: &LogRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}
