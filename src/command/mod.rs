// src/command/mod.rs

//! Command parser.
//!
//! Turns one line received on the channel into a typed [`Command`]. The
//! parser knows nothing about the roster; the manager consumes its output.
//!
//! - [`fixed_time`] holds the `seconds.hundredths` encoding.
//! - [`text`] holds the byte-bounded string type used for names and schools.
//! - [`parser`] implements the line grammar.

pub mod fixed_time;
pub mod parser;
pub mod text;

use thiserror::Error;

pub use fixed_time::FixedTime;
pub use parser::{CommandParser, parse_line};
pub use text::BoundedText;

/// Everything `ADD` carries, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerFields {
    pub lane: i32,
    pub bib_number: i32,
    pub name: BoundedText,
    pub school: BoundedText,
    pub qualifier_time: FixedTime,
    pub record_time: FixedTime,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(RunnerFields),
    Remove { bib_number: i32 },
    Print,
}

impl Command {
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Add(_) => "ADD",
            Command::Remove { .. } => "REMOVE",
            Command::Print => "PRINT",
        }
    }
}

/// Why a line did not produce a [`Command`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command line")]
    Empty,

    #[error("command line is not valid UTF-8")]
    NotUtf8,

    #[error("unknown command keyword '{0}'")]
    UnknownKeyword(String),

    #[error("{keyword} takes {expected} field(s), got {got}")]
    WrongFieldCount {
        keyword: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("field '{field}' is not an integer: '{token}'")]
    InvalidInteger { field: &'static str, token: String },

    #[error("field '{field}' is not a <seconds>.<hundredths> time: '{token}'")]
    InvalidFixedTime { field: &'static str, token: String },

    #[error("field '{field}' is {len} bytes, limit is {max}")]
    TextTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}
