// src/command/text.rs

use std::fmt;
use std::ops::Deref;

/// An owned string whose byte length was checked against a limit when it was
/// built. Values over the limit are refused, never truncated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundedText(String);

impl BoundedText {
    /// Returns the offending length if `value` is longer than `max_bytes`.
    pub fn new(value: impl Into<String>, max_bytes: usize) -> Result<Self, usize> {
        let value = value.into();
        if value.len() > max_bytes {
            return Err(value.len());
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for BoundedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoundedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
