//! Calendar unit vocabulary.

use std::fmt;
use std::str::FromStr;

use crate::error::IntervalError;

/// A named calendar unit.
///
/// `Hour` is a wall-clock hour: it usually lasts 3600 seconds, but a UTC
/// offset change that is not a whole hour starts a new, shorter or longer
/// hour. `Day` and everything above it are civil date units: one day across
/// a DST change is still one day, even though it lasts 23 or 25 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Granularity {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Granularity {
    /// All granularities, finest first.
    pub const ALL: [Granularity; 5] = [
        Granularity::Hour,
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
        Granularity::Year,
    ];

    /// Lowercase name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Hour => "hour",
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Year => "year",
        }
    }

    /// Returns `true` for units measured in whole civil dates (day and up).
    pub fn is_calendar(self) -> bool {
        !matches!(self, Granularity::Hour)
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hour" => Ok(Granularity::Hour),
            "day" => Ok(Granularity::Day),
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            "year" => Ok(Granularity::Year),
            _ => Err(IntervalError::UnsupportedGranularity {
                value: s.to_string(),
            }),
        }
    }
}
