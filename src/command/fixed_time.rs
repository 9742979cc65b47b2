// src/command/fixed_time.rs

use std::fmt;
use std::str::FromStr;

/// A time stored as an integer count of hundredths of a second.
///
/// `10.01` is stored as `1001`. The hundredths part of the textual form is
/// added as-is, so `10.150` becomes `1150` and renders back as `11.50`, and
/// `10.5` becomes `1005` (`10.05`). Negative values are not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedTime(i32);

impl FixedTime {
    pub const fn from_hundredths(hundredths: i32) -> Self {
        Self(hundredths)
    }

    /// `seconds * 100 + hundredths`, or `None` on `i32` overflow.
    pub fn from_parts(seconds: i32, hundredths: i32) -> Option<Self> {
        seconds
            .checked_mul(100)
            .and_then(|s| s.checked_add(hundredths))
            .map(Self)
    }

    pub const fn hundredths(self) -> i32 {
        self.0
    }

    pub const fn whole_seconds(self) -> i32 {
        self.0 / 100
    }

    pub const fn fraction(self) -> i32 {
        self.0 % 100
    }
}

impl fmt::Display for FixedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.whole_seconds(), self.fraction())
    }
}

/// Error for [`FixedTime::from_str`]; the parser attaches the field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidFixedTime;

impl FromStr for FixedTime {
    type Err = InvalidFixedTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (seconds, hundredths) = s.split_once('.').ok_or(InvalidFixedTime)?;
        let seconds: i32 = seconds.parse().map_err(|_| InvalidFixedTime)?;
        let hundredths: i32 = hundredths.parse().map_err(|_| InvalidFixedTime)?;
        Self::from_parts(seconds, hundredths).ok_or(InvalidFixedTime)
    }
}
