// src/errors.rs

//! Crate-wide error type.
//!
//! Only channel-boundary conditions are meant to reach a caller of the
//! roster. Everything that happens after a command was parsed stays inside
//! the manager, with two documented exceptions: `ResourceExhausted` and, in
//! strict parsing mode, `MalformedCommand`.

use thiserror::Error;

use crate::command::ParseError;

#[derive(Error, Debug)]
pub enum RunnersError {
    #[error("payload of {len} bytes does not fit the {capacity}-byte channel buffer")]
    InvalidArgument { len: usize, capacity: usize },

    #[error("payload could not be read from the caller: {0}")]
    TransferFault(String),

    #[error("could not allocate storage for a new runner")]
    ResourceExhausted,

    #[error("malformed command: {0}")]
    MalformedCommand(#[from] ParseError),

    #[error("roster manager is not running")]
    ManagerStopped,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RunnersError {
    /// Short stable identifier used on the channel status line.
    pub fn kind(&self) -> &'static str {
        match self {
            RunnersError::InvalidArgument { .. } => "invalid-argument",
            RunnersError::TransferFault(_) => "transfer-fault",
            RunnersError::ResourceExhausted => "resource-exhausted",
            RunnersError::MalformedCommand(_) => "malformed-command",
            RunnersError::ManagerStopped => "manager-stopped",
            RunnersError::ConfigError(_) => "config",
            RunnersError::IoError(_) => "io",
            RunnersError::TomlError(_) => "toml",
            RunnersError::Other(_) => "other",
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, RunnersError>;
