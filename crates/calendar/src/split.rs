//! Partitioning an interval into ordered sub-intervals.

use chrono::TimeDelta;
use tracing::debug;

use kairos_interval::{
    Granularity, Interval, IntervalError, TimePoint, add_units, first_of_month, first_of_year,
    start_of_local_day, top_of_hour,
};

use crate::error::CalendarError;

/// Splits `interval` into consecutive steps of one `unit`.
///
/// For `Day` and above the k-th boundary is `interval.start + k units`,
/// computed from the start's wall time rather than by chaining steps.
/// Calendar units keep their civil meaning: a day that spans a DST change
/// is one segment of 23 or 25 hours. `Hour` walks from one local hour
/// start to the next, so a 30-minute offset change yields a 30-minute
/// segment rather than a misaligned walk.
///
/// The start must begin a `unit`: the top of a local hour, a local midnight
/// for `Day` and `Week` (a week may begin on any weekday), the first of a
/// month, or January 1. An empty interval yields no segments.
///
/// # Errors
///
/// Returns [`CalendarError::MisalignedStart`] if the start is not a `unit`
/// boundary, and [`CalendarError::MisalignedInterval`] if the walk does not
/// land exactly on `interval.end`.
#[tracing::instrument(level = "trace", skip_all, fields(interval = %interval, unit = %unit))]
pub fn split_by_unit(interval: &Interval, unit: Granularity) -> Result<Vec<Interval>, CalendarError> {
    let start = interval.start();
    let end = interval.end();
    if unit_start(&start, unit)? != start {
        return Err(CalendarError::MisalignedStart { unit, start });
    }

    let mut segments = Vec::new();
    let mut lower = start;
    let mut steps: i64 = 0;
    while lower < end {
        let upper = if unit.is_calendar() {
            add_units(&start, unit, steps + 1)?
        } else {
            add_units(&lower, unit, 1)?
        };
        if upper > end || upper <= lower {
            return Err(CalendarError::MisalignedInterval { unit, steps });
        }
        segments.push(Interval::new(lower, upper)?);
        lower = upper;
        steps += 1;
    }
    Ok(segments)
}

fn unit_start(t: &TimePoint, unit: Granularity) -> Result<TimePoint, IntervalError> {
    match unit {
        Granularity::Hour => top_of_hour(t),
        Granularity::Day | Granularity::Week => start_of_local_day(t),
        Granularity::Month => first_of_month(t),
        Granularity::Year => first_of_year(t),
    }
}

/// Splits `interval` into consecutive segments of a fixed absolute `step`.
///
/// Boundaries are `start`, `start + step`, `start + 2 * step`, ... in
/// absolute time. If `step` does not divide the interval, the last segment
/// is shorter and ends exactly at `interval.end`.
///
/// The segment count of a calendar day is therefore not constant: a local
/// day that loses an hour to DST yields 46 half-hour segments and one that
/// gains an hour yields 50. That is the correct result for that day, and
/// callers that need a fixed-size grid must handle it themselves.
///
/// # Errors
///
/// Returns [`CalendarError::NonPositiveDuration`] if `step` is zero or
/// negative.
#[tracing::instrument(level = "trace", skip_all, fields(interval = %interval, step_secs = step.num_seconds()))]
pub fn split_by(interval: &Interval, step: TimeDelta) -> Result<Vec<Interval>, CalendarError> {
    if step <= TimeDelta::zero() {
        return Err(CalendarError::NonPositiveDuration {
            seconds: step.num_seconds(),
        });
    }

    let end = interval.end();
    let mut segments = Vec::new();
    let mut lower = interval.start();
    while lower < end {
        let upper = lower
            .checked_add_signed(step)
            .map_or(end, |next| next.min(end));
        segments.push(Interval::new(lower, upper)?);
        lower = upper;
    }

    if spans_one_calendar_day(interval) && interval.duration() != TimeDelta::days(1) {
        debug!(
            start = %interval.start(),
            elapsed_minutes = interval.duration().num_minutes(),
            n_segments = segments.len(),
            "day is not 24 hours long; segment count differs from nominal"
        );
    }

    Ok(segments)
}

fn spans_one_calendar_day(interval: &Interval) -> bool {
    matches!(add_units(&interval.start(), Granularity::Day, 1), Ok(next) if next == interval.end())
}
