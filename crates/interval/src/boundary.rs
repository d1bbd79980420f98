//! Calendar boundaries in an instant's local zone.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, Offset, TimeDelta, Timelike, Weekday,
};

use crate::error::IntervalError;
use crate::interval::TimePoint;
use crate::local::resolve_local;

fn midnight_of(t: &TimePoint, date: NaiveDate) -> Result<TimePoint, IntervalError> {
    resolve_local(t.timezone(), date.and_time(NaiveTime::MIN))
}

fn utc_offset(t: &TimePoint) -> FixedOffset {
    t.offset().fix()
}

/// First instant in `(from, to]` whose UTC offset differs from the offset at
/// `from`, if any.
///
/// Offset changes fall on whole seconds; at most one is expected in the span.
fn offset_change(from: &TimePoint, to: &TimePoint) -> Result<Option<TimePoint>, IntervalError> {
    let before = utc_offset(from);
    if utc_offset(to) == before {
        return Ok(None);
    }
    let tz = from.timezone();
    let at = |secs: i64| {
        DateTime::from_timestamp(secs, 0)
            .map(|utc| utc.with_timezone(&tz))
            .ok_or(IntervalError::OutOfRange)
    };
    // offset(lo) == before, offset(hi) != before
    let (mut lo, mut hi) = (from.timestamp(), to.timestamp());
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if utc_offset(&at(mid)?) == before {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    at(hi).map(Some)
}

fn elapsed_in_hour(t: &TimePoint) -> TimeDelta {
    TimeDelta::minutes(i64::from(t.minute()))
        + TimeDelta::seconds(i64::from(t.second()))
        + TimeDelta::nanoseconds(i64::from(t.nanosecond()))
}

/// Start of the local hour containing `t`.
///
/// Local hours begin where the wall clock reads `HH:00` and wherever the
/// zone's UTC offset changes. The result is the latest such instant not
/// after `t`. An offset change that is not a whole hour (Lord Howe Island
/// moves by 30 minutes) therefore starts a short hour of its own, and the
/// second `01:xx` of a fall-back night stays in its own hour.
pub fn top_of_hour(t: &TimePoint) -> Result<TimePoint, IntervalError> {
    let on_the_hour = t
        .checked_sub_signed(elapsed_in_hour(t))
        .ok_or(IntervalError::OutOfRange)?;
    Ok(offset_change(&on_the_hour, t)?.unwrap_or(on_the_hour))
}

/// Start of the local hour after the one containing `t`.
pub(crate) fn next_hour(t: &TimePoint) -> Result<TimePoint, IntervalError> {
    let on_the_hour = t
        .checked_add_signed(TimeDelta::hours(1) - elapsed_in_hour(t))
        .ok_or(IntervalError::OutOfRange)?;
    Ok(offset_change(t, &on_the_hour)?.unwrap_or(on_the_hour))
}

/// Latest local hour start strictly before `t`.
pub(crate) fn previous_hour(t: &TimePoint) -> Result<TimePoint, IntervalError> {
    let top = top_of_hour(t)?;
    if top < *t {
        return Ok(top);
    }
    let just_before = t
        .checked_sub_signed(TimeDelta::seconds(1))
        .ok_or(IntervalError::OutOfRange)?;
    top_of_hour(&just_before)
}

/// First instant of the local calendar day containing `t`.
pub fn start_of_local_day(t: &TimePoint) -> Result<TimePoint, IntervalError> {
    midnight_of(t, t.date_naive())
}

/// First instant of the week containing `t`, for weeks beginning on
/// `week_start`.
pub fn start_of_week(t: &TimePoint, week_start: Weekday) -> Result<TimePoint, IntervalError> {
    let date = t.date_naive();
    let back = (date.weekday().num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7;
    let first = date
        .checked_sub_signed(TimeDelta::days(i64::from(back)))
        .ok_or(IntervalError::OutOfRange)?;
    midnight_of(t, first)
}

/// First instant of the local month containing `t`.
pub fn first_of_month(t: &TimePoint) -> Result<TimePoint, IntervalError> {
    let first = t.date_naive().with_day(1).ok_or(IntervalError::OutOfRange)?;
    midnight_of(t, first)
}

/// First instant of January 1 of the local year containing `t`.
pub fn first_of_year(t: &TimePoint) -> Result<TimePoint, IntervalError> {
    let first = NaiveDate::from_ymd_opt(t.year(), 1, 1).ok_or(IntervalError::OutOfRange)?;
    midnight_of(t, first)
}
