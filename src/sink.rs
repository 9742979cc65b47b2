// src/sink.rs

//! Where diagnostic records go.
//!
//! The engine hands every [`LogRecord`] to a `LogSink` while it still has
//! exclusive ownership of the roster, so records from one command are never
//! interleaved with another's.
//!
//! - [`TracingSink`] is the production sink: one `INFO` event per record,
//!   target `runners`.
//! - Tests plug in a recording sink to observe what would have been logged.

use tracing::info;

use crate::roster::LogRecord;

pub trait LogSink: Send {
    /// Emit one record. Must not block on anything but the log writer.
    fn emit(&mut self, record: &LogRecord);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&mut self, record: &LogRecord) {
        info!(target: "runners", "{record}");
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn emit(&mut self, record: &LogRecord) {
        (**self).emit(record);
    }
}
