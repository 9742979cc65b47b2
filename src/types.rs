use std::str::FromStr;
use serde::Deserialize;

/// What happens to a line that reaches the manager but does not parse.
///
/// - `Lenient`: the line is accepted by the channel and silently dropped
///   (no roster mutation, no diagnostic record). This is the default.
/// - `Strict`: the line is rejected and the caller gets a
///   `MalformedCommand` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    Lenient,
    Strict,
}

impl Default for ParseMode {
    fn default() -> Self {
        ParseMode::Lenient
    }
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(ParseMode::Lenient),
            "strict" => Ok(ParseMode::Strict),
            other => Err(format!(
                "invalid parser mode: {other} (expected \"lenient\" or \"strict\")"
            )),
        }
    }
}

/// Channel buffer capacity in bytes. A payload must be strictly shorter.
pub const DEFAULT_MAX_LINE_BYTES: usize = 100;

/// Upper bound for `name` and `school`, in bytes.
pub const DEFAULT_MAX_TEXT_BYTES: usize = 100;

/// Deadline for one writer to deliver its payload, in milliseconds.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 5_000;

pub const DEFAULT_SOCKET_PATH: &str = "/tmp/runners.sock";
