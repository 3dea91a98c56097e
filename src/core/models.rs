use std::fmt;
use std::str::FromStr;

use crate::core::KnError;

/// The user-selectable lookback window for a news request.
///
/// Exactly three choices exist, each bound to a fixed day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    OneDay,
    OneWeek,
    OneMonth,
}

impl Period {
    /// Number of days the window spans, counting back from today.
    pub const fn days(self) -> u32 {
        match self {
            Period::OneDay => 1,
            Period::OneWeek => 7,
            Period::OneMonth => 30,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::OneWeek => "1w",
            Period::OneMonth => "1mo",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = KnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1d" | "1day" | "1 day" => Ok(Period::OneDay),
            "1w" | "1wk" | "1week" | "1 week" => Ok(Period::OneWeek),
            "1mo" | "1month" | "1 month" => Ok(Period::OneMonth),
            other => Err(KnError::InvalidPeriod(other.to_string())),
        }
    }
}
