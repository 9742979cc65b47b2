// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::types::{
    DEFAULT_MAX_LINE_BYTES, DEFAULT_MAX_TEXT_BYTES, DEFAULT_READ_TIMEOUT_MS, DEFAULT_SOCKET_PATH,
    ParseMode,
};

/// Configuration exactly as read from TOML, before validation.
///
/// ```toml
/// [channel]
/// socket_path = "/tmp/runners.sock"
/// max_line_bytes = 100
/// read_timeout_ms = 5000
///
/// [parser]
/// mode = "lenient"
///
/// [roster]
/// max_text_bytes = 100
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub channel: ChannelSection,

    #[serde(default)]
    pub parser: ParserSection,

    #[serde(default)]
    pub roster: RosterSection,
}

/// Validated configuration. Only obtainable through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub channel: ChannelSection,
    pub parser: ParserSection,
    pub roster: RosterSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        channel: ChannelSection,
        parser: ParserSection,
        roster: RosterSection,
    ) -> Self {
        Self {
            channel,
            parser,
            roster,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        let raw = RawConfigFile::default();
        Self::new_unchecked(raw.channel, raw.parser, raw.roster)
    }
}

/// `[channel]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelSection {
    /// Where the daemon listens and the front end connects.
    #[serde(default = "default_socket_path")]
    pub socket_path: PathBuf,

    /// Buffer capacity in bytes, terminator included. Payloads of this
    /// length or longer are rejected.
    #[serde(default = "default_max_line_bytes")]
    pub max_line_bytes: usize,

    /// How long a writer may take to deliver its payload.
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
}

impl ChannelSection {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

fn default_socket_path() -> PathBuf {
    PathBuf::from(DEFAULT_SOCKET_PATH)
}

fn default_max_line_bytes() -> usize {
    DEFAULT_MAX_LINE_BYTES
}

fn default_read_timeout_ms() -> u64 {
    DEFAULT_READ_TIMEOUT_MS
}

impl Default for ChannelSection {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
            max_line_bytes: default_max_line_bytes(),
            read_timeout_ms: default_read_timeout_ms(),
        }
    }
}

/// `[parser]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParserSection {
    /// `"lenient"` (silently drop malformed lines) or `"strict"`.
    #[serde(default)]
    pub mode: ParseMode,
}

/// `[roster]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterSection {
    /// Maximum byte length of `name` and `school`.
    #[serde(default = "default_max_text_bytes")]
    pub max_text_bytes: usize,
}

fn default_max_text_bytes() -> usize {
    DEFAULT_MAX_TEXT_BYTES
}

impl Default for RosterSection {
    fn default() -> Self {
        Self {
            max_text_bytes: default_max_text_bytes(),
        }
    }
}
