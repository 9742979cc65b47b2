// src/command/parser.rs

//! Line grammar.
//!
//! ```text
//! ADD <lane> <bib> <name> <school> <qual_s>.<qual_ms> <rec_s>.<rec_ms>
//! REMOVE <bib>
//! PRINT
//! ```
//!
//! The first whitespace-delimited token selects the command (case-sensitive).
//! Names and schools are single tokens, so they cannot contain spaces.

use tracing::trace;

use crate::command::fixed_time::FixedTime;
use crate::command::text::BoundedText;
use crate::command::{Command, ParseError, RunnerFields};
use crate::types::DEFAULT_MAX_TEXT_BYTES;

const ADD_FIELDS: usize = 6;
const REMOVE_FIELDS: usize = 1;
const PRINT_FIELDS: usize = 0;

/// Parser configured with the text bound for `name` and `school`.
#[derive(Debug, Clone, Copy)]
pub struct CommandParser {
    max_text_bytes: usize,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TEXT_BYTES)
    }
}

impl CommandParser {
    pub fn new(max_text_bytes: usize) -> Self {
        Self { max_text_bytes }
    }

    /// Parse raw channel bytes. Non-UTF-8 input is malformed.
    pub fn parse_bytes(&self, payload: &[u8]) -> Result<Command, ParseError> {
        let line = std::str::from_utf8(payload).map_err(|_| ParseError::NotUtf8)?;
        self.parse(line)
    }

    /// Parse one line. Leading/trailing whitespace (including the trailing
    /// newline the front end appends) is ignored.
    pub fn parse(&self, line: &str) -> Result<Command, ParseError> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or(ParseError::Empty)?;
        let fields: Vec<&str> = tokens.collect();

        trace!(keyword, fields = fields.len(), "parsing command line");

        match keyword {
            "ADD" => {
                expect_fields("ADD", ADD_FIELDS, &fields)?;
                self.parse_add(&fields).map(Command::Add)
            }
            "REMOVE" => {
                expect_fields("REMOVE", REMOVE_FIELDS, &fields)?;
                let bib_number = parse_int("bib", fields[0])?;
                Ok(Command::Remove { bib_number })
            }
            "PRINT" => {
                expect_fields("PRINT", PRINT_FIELDS, &fields)?;
                Ok(Command::Print)
            }
            other => Err(ParseError::UnknownKeyword(other.to_string())),
        }
    }

    fn parse_add(&self, fields: &[&str]) -> Result<RunnerFields, ParseError> {
        Ok(RunnerFields {
            lane: parse_int("lane", fields[0])?,
            bib_number: parse_int("bib", fields[1])?,
            name: self.parse_text("name", fields[2])?,
            school: self.parse_text("school", fields[3])?,
            qualifier_time: parse_time("qualifier_time", fields[4])?,
            record_time: parse_time("record_time", fields[5])?,
        })
    }

    fn parse_text(&self, field: &'static str, token: &str) -> Result<BoundedText, ParseError> {
        BoundedText::new(token, self.max_text_bytes).map_err(|len| ParseError::TextTooLong {
            field,
            len,
            max: self.max_text_bytes,
        })
    }
}

/// Parse one line with the default text bound.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    CommandParser::default().parse(line)
}

fn expect_fields(
    keyword: &'static str,
    expected: usize,
    fields: &[&str],
) -> Result<(), ParseError> {
    if fields.len() != expected {
        return Err(ParseError::WrongFieldCount {
            keyword,
            expected,
            got: fields.len(),
        });
    }
    Ok(())
}

fn parse_int(field: &'static str, token: &str) -> Result<i32, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidInteger {
        field,
        token: token.to_string(),
    })
}

fn parse_time(field: &'static str, token: &str) -> Result<FixedTime, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidFixedTime {
        field,
        token: token.to_string(),
    })
}
