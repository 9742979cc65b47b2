// src/engine/core.rs

//! Pure core state machine.
//!
//! `RosterCore` consumes [`ManagerRequest`]s and produces the diagnostic
//! records to emit. It has no channels, no Tokio types and performs no IO,
//! which keeps the command semantics testable on their own.

use tracing::debug;

use crate::command::Command;
use crate::errors::Result;
use crate::roster::{LogRecord, Roster, Runner};

use super::{Ack, ManagerRequest};

/// Result of applying one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreStep {
    pub records: Vec<LogRecord>,
    pub ack: Ack,
    pub keep_running: bool,
}

impl CoreStep {
    fn applied(records: Vec<LogRecord>) -> Self {
        Self {
            records,
            ack: Ack::Applied,
            keep_running: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct RosterCore {
    roster: Roster,
}

impl RosterCore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn step(&mut self, request: ManagerRequest) -> Result<CoreStep> {
        match request {
            ManagerRequest::Apply(command) => self.apply(command),
            ManagerRequest::Shutdown => {
                let released = self.roster.drain();
                debug!(released, "roster drained");
                Ok(CoreStep {
                    records: Vec::new(),
                    ack: Ack::Drained(released),
                    keep_running: false,
                })
            }
        }
    }

    pub fn apply(&mut self, command: Command) -> Result<CoreStep> {
        match command {
            Command::Add(fields) => {
                let added = self.roster.push(Runner::from(fields))?;
                Ok(CoreStep::applied(vec![LogRecord::Added(added.clone())]))
            }
            Command::Remove { bib_number } => {
                // No match is a silent no-op.
                let records = match self.roster.remove_first(bib_number) {
                    Some(removed) => vec![LogRecord::Removed(removed)],
                    None => {
                        debug!(bib_number, "REMOVE matched no runner");
                        Vec::new()
                    }
                };
                Ok(CoreStep::applied(records))
            }
            Command::Print => {
                let mut records = Vec::with_capacity(self.roster.len() + 2);
                records.push(LogRecord::ListStart);
                records.extend(self.roster.iter().cloned().map(LogRecord::Listed));
                records.push(LogRecord::ListEnd);
                Ok(CoreStep::applied(records))
            }
        }
    }
}
