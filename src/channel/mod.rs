// src/channel/mod.rs

//! The write-only command channel.
//!
//! The daemon serves a Unix-domain stream socket. One connection carries one
//! command line: the client writes it, shuts down its write half and reads a
//! single status line back, the equivalent of the `write(2)` return value.
//! The status never carries roster data.
//!
//! - [`server`] accepts connections and feeds payloads to a `RosterHandle`.
//! - [`client`] is the front end's side: build the line, write it once.

pub mod client;
pub mod server;

use std::fmt;
use std::str::FromStr;

use crate::errors::RunnersError;

pub use client::{join_command, send_line};
pub use server::{ChannelServer, serve};

/// Status line sent back to the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelReply {
    /// `OK <bytes>`
    Accepted(usize),
    /// `ERR <kind>: <message>`
    Rejected { kind: String, message: String },
}

impl ChannelReply {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ChannelReply::Accepted(_))
    }
}

impl From<&RunnersError> for ChannelReply {
    fn from(err: &RunnersError) -> Self {
        ChannelReply::Rejected {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ChannelReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelReply::Accepted(n) => write!(f, "OK {n}"),
            ChannelReply::Rejected { kind, message } => write!(f, "ERR {kind}: {message}"),
        }
    }
}

impl FromStr for ChannelReply {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(count) = s.strip_prefix("OK ") {
            return count
                .trim()
                .parse()
                .map(ChannelReply::Accepted)
                .map_err(|_| format!("bad byte count in status line: {s}"));
        }
        if let Some(rest) = s.strip_prefix("ERR ") {
            let (kind, message) = rest.split_once(':').unwrap_or((rest, ""));
            return Ok(ChannelReply::Rejected {
                kind: kind.trim().to_string(),
                message: message.trim().to_string(),
            });
        }
        Err(format!("unrecognised status line: {s}"))
    }
}
