//! Error types for the kairos-calendar crate.

use kairos_interval::{Granularity, IntervalError, TimePoint};

/// Error type for all fallible operations in the kairos-calendar crate.
///
/// Every variant is a caller-contract violation; operations never repair
/// their input and never return partial results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// An error from the underlying interval primitives (inverted interval,
    /// unresolvable local time, out-of-range arithmetic).
    #[error(transparent)]
    Interval(#[from] IntervalError),

    /// Returned when an interval is not a whole number of `unit` steps.
    #[error("interval is not a whole number of {unit}s: {steps} whole steps fit, the next overshoots the end")]
    MisalignedInterval {
        /// The unit the interval was split by.
        unit: Granularity,
        /// Number of whole steps that fit before the overshoot.
        steps: i64,
    },

    /// Returned when an interval does not begin on a `unit` boundary.
    #[error("interval start {start} is not the start of a {unit}")]
    MisalignedStart {
        /// The unit the interval was split by.
        unit: Granularity,
        /// The offending start.
        start: TimePoint,
    },

    /// Returned when a split duration is zero or negative.
    #[error("split duration must be positive, got {seconds}s")]
    NonPositiveDuration {
        /// The rejected duration in whole seconds.
        seconds: i64,
    },

    /// Returned when a padding configuration field is out of range.
    #[error("invalid padding: {field} = {value} (must be {expected})")]
    InvalidPadding {
        /// Name of the offending field.
        field: &'static str,
        /// The invalid value.
        value: u32,
        /// Human-readable valid range.
        expected: &'static str,
    },

    /// Returned when the padded grid is too short to hold the whole month.
    #[error("padded grid of {available} days cannot hold the month ({required} days needed)")]
    PaddingTooSmall {
        /// Days from the grid start to the end of the month.
        required: i64,
        /// Days the padding configuration provides.
        available: u32,
    },

    /// Returned when an operation does not support the requested granularity.
    #[error("granularity {granularity} is not supported by {operation}")]
    UnsupportedGranularity {
        /// The rejected granularity.
        granularity: Granularity,
        /// Name of the operation that rejected it.
        operation: &'static str,
    },
}
