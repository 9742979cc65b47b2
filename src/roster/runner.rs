// src/roster/runner.rs

use std::fmt;

use crate::command::{BoundedText, FixedTime, RunnerFields};

/// One race participant as stored in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runner {
    pub lane: i32,
    pub bib_number: i32,
    pub name: BoundedText,
    pub school: BoundedText,
    pub qualifier_time: FixedTime,
    pub record_time: FixedTime,
}

impl From<RunnerFields> for Runner {
    fn from(fields: RunnerFields) -> Self {
        Self {
            lane: fields.lane,
            bib_number: fields.bib_number,
            name: fields.name,
            school: fields.school,
            qualifier_time: fields.qualifier_time,
            record_time: fields.record_time,
        }
    }
}

/// Renders the diagnostic line for this runner, e.g.
/// `Lane: 3 | Bib: 101 | Name: Ana | School: Lincoln | Qualifier Time: 12.34 | Personal Record: 11.00`.
impl fmt::Display for Runner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lane: {} | Bib: {} | Name: {} | School: {} | Qualifier Time: {} | Personal Record: {}",
            self.lane,
            self.bib_number,
            self.name,
            self.school,
            self.qualifier_time,
            self.record_time,
        )
    }
}
