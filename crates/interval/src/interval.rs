//! Half-open intervals of zone-aware instants.

use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeDelta};
use chrono_tz::Tz;

use crate::error::IntervalError;

/// A zone-aware instant.
///
/// Comparison and equality are on the underlying instant; the zone only
/// determines which calendar fields (local date, weekday, hour) are read.
pub type TimePoint = DateTime<Tz>;

/// A half-open span `[start, end)` of instants.
///
/// The constructor guarantees `start <= end`. An interval whose endpoints
/// coincide is empty and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: TimePoint,
    end: TimePoint,
}

impl Interval {
    /// Creates a new interval `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidInterval`] if `start` is after `end`.
    pub fn new(start: TimePoint, end: TimePoint) -> Result<Self, IntervalError> {
        if start > end {
            return Err(IntervalError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the inclusive start.
    pub fn start(&self) -> TimePoint {
        self.start
    }

    /// Returns the exclusive end.
    pub fn end(&self) -> TimePoint {
        self.end
    }

    /// Zone of the start instant, in which calendar fields are interpreted.
    pub fn timezone(&self) -> Tz {
        self.start.timezone()
    }

    /// Returns `true` if `start <= x < end`, compared as instants.
    pub fn contains(&self, x: &TimePoint) -> bool {
        self.start <= *x && *x < self.end
    }

    /// Absolute elapsed time between start and end.
    pub fn duration(&self) -> TimeDelta {
        self.end.signed_duration_since(self.start)
    }

    /// Returns `true` if the interval contains no instant.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Interval {
    /// ISO 8601 interval notation: `start/end`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.start.to_rfc3339_opts(SecondsFormat::Secs, false),
            self.end.to_rfc3339_opts(SecondsFormat::Secs, false)
        )
    }
}
