// src/roster/record.rs

use std::fmt;

use crate::roster::runner::Runner;

/// A line on the diagnostic log. This is the only way roster contents are
/// ever observed from the outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogRecord {
    Added(Runner),
    Removed(Runner),
    ListStart,
    Listed(Runner),
    ListEnd,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogRecord::Added(runner) => write!(f, "Added Runner: {runner}"),
            LogRecord::Removed(runner) => write!(f, "Removed Runner: {runner}"),
            LogRecord::ListStart => f.write_str("Printing entire list of runners:"),
            LogRecord::Listed(runner) => write!(f, "{runner}"),
            LogRecord::ListEnd => f.write_str("End of list."),
        }
    }
}
