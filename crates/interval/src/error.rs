//! Error types for the kairos-interval crate.

use chrono::NaiveDateTime;

use crate::interval::TimePoint;

/// Error type for all fallible operations in the kairos-interval crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntervalError {
    /// Returned when an interval would end before it starts.
    #[error("invalid interval: start {start} is after end {end}")]
    InvalidInterval {
        /// Requested start.
        start: TimePoint,
        /// Requested end.
        end: TimePoint,
    },

    /// Returned when a granularity name is not one of hour/day/week/month/year.
    #[error("unsupported granularity: {value:?}")]
    UnsupportedGranularity {
        /// The unrecognised input.
        value: String,
    },

    /// Returned when no instant could be found for a local wall time.
    #[error("local time {local} does not exist in {zone}")]
    NonexistentLocalTime {
        /// The wall time that could not be resolved.
        local: NaiveDateTime,
        /// IANA name of the zone.
        zone: &'static str,
    },

    /// Returned when calendar arithmetic leaves chrono's representable range.
    #[error("date arithmetic out of range")]
    OutOfRange,
}
