//! Local wall-time resolution and calendar-unit stepping.

use chrono::offset::LocalResult;
use chrono::{Months, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use chrono_tz::Tz;

use crate::boundary::{next_hour, previous_hour, top_of_hour};
use crate::error::IntervalError;
use crate::granularity::Granularity;
use crate::interval::TimePoint;

/// Upper bound on how far past a nonexistent wall time to look for the end
/// of the gap. Real transitions skip at most a couple of hours; a whole day
/// covers zones that skipped a calendar date.
const MAX_GAP_MINUTES: i64 = 24 * 60 + 60;

/// Maps a local wall time in `tz` to an instant.
///
/// - Unique wall times map directly.
/// - Ambiguous wall times (clocks fall back) map to the earliest instant.
/// - Nonexistent wall times (clocks spring forward) map to the first
///   instant after the gap.
///
/// # Errors
///
/// Returns [`IntervalError::NonexistentLocalTime`] if no valid wall time
/// exists within a day of `local`.
pub fn resolve_local(tz: Tz, local: NaiveDateTime) -> Result<TimePoint, IntervalError> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(t) => Ok(t),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => {
            for minutes in 1..=MAX_GAP_MINUTES {
                let later = local
                    .checked_add_signed(TimeDelta::minutes(minutes))
                    .ok_or(IntervalError::OutOfRange)?;
                if let Some(t) = tz.from_local_datetime(&later).earliest() {
                    return Ok(t);
                }
            }
            Err(IntervalError::NonexistentLocalTime {
                local,
                zone: tz.name(),
            })
        }
    }
}

/// Wall time to step calendar units from.
///
/// An instant sitting on the start of its local day steps from that date's
/// midnight, even when midnight itself fell into a gap and the day actually
/// begins at 01:00. Otherwise the local wall time is used as-is.
fn calendar_wall_time(t: &TimePoint) -> Result<NaiveDateTime, IntervalError> {
    let midnight = t.date_naive().and_time(NaiveTime::MIN);
    if resolve_local(t.timezone(), midnight)? == *t {
        Ok(midnight)
    } else {
        Ok(t.naive_local())
    }
}

/// Adds `n` units of `unit` to `t` (negative `n` steps backwards).
///
/// `Hour` counts local hours: starting from the hour containing `t`, the
/// result moves across `n` hour starts (see [`top_of_hour`]) and keeps the
/// time `t` was into its hour. Across a whole-hour DST change this is
/// exactly `n * 3600` seconds; a 30-minute change adds a 30-minute hour.
/// `Day`, `Week`, `Month` and `Year` are civil: the date moves by the
/// requested amount and the wall time is kept, then re-resolved in the
/// instant's zone. Month and year steps clamp the day of month
/// (January 31 plus one month is February 28 or 29).
///
/// # Errors
///
/// Returns [`IntervalError::OutOfRange`] if the result is not representable,
/// or an error from [`resolve_local`].
pub fn add_units(t: &TimePoint, unit: Granularity, n: i64) -> Result<TimePoint, IntervalError> {
    let tz = t.timezone();
    match unit {
        Granularity::Hour => {
            let top = top_of_hour(t)?;
            let into_hour = t.signed_duration_since(top);
            let mut boundary = top;
            for _ in 0..n.unsigned_abs() {
                boundary = if n > 0 {
                    next_hour(&boundary)?
                } else {
                    previous_hour(&boundary)?
                };
            }
            boundary
                .checked_add_signed(into_hour)
                .ok_or(IntervalError::OutOfRange)
        }
        Granularity::Day | Granularity::Week => {
            let days = if unit == Granularity::Week {
                n.checked_mul(7).ok_or(IntervalError::OutOfRange)?
            } else {
                n
            };
            let delta = TimeDelta::try_days(days).ok_or(IntervalError::OutOfRange)?;
            let local = calendar_wall_time(t)?
                .checked_add_signed(delta)
                .ok_or(IntervalError::OutOfRange)?;
            resolve_local(tz, local)
        }
        Granularity::Month | Granularity::Year => {
            let months = if unit == Granularity::Year {
                n.checked_mul(12).ok_or(IntervalError::OutOfRange)?
            } else {
                n
            };
            let magnitude =
                u32::try_from(months.unsigned_abs()).map_err(|_| IntervalError::OutOfRange)?;
            let wall = calendar_wall_time(t)?;
            let local = if months >= 0 {
                wall.checked_add_months(Months::new(magnitude))
            } else {
                wall.checked_sub_months(Months::new(magnitude))
            }
            .ok_or(IntervalError::OutOfRange)?;
            resolve_local(tz, local)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use chrono_tz::America::{New_York, Santiago};
    use chrono_tz::Australia::Lord_Howe;
    use chrono_tz::Pacific::Apia;

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn resolve_unique() {
        let t = resolve_local(New_York, naive(2021, 6, 1, 9, 0)).unwrap();
        assert_eq!(t.naive_local(), naive(2021, 6, 1, 9, 0));
    }

    #[test]
    fn resolve_ambiguous_takes_earliest() {
        // 01:30 happens twice on 2021-11-07 in New York: EDT first, then EST.
        let t = resolve_local(New_York, naive(2021, 11, 7, 1, 30)).unwrap();
        assert_eq!(t.naive_utc(), naive(2021, 11, 7, 5, 30));
    }

    #[test]
    fn resolve_gap_moves_past_transition() {
        // 02:30 does not exist on 2021-03-14 in New York; clocks jump to 03:00.
        let t = resolve_local(New_York, naive(2021, 3, 14, 2, 30)).unwrap();
        assert_eq!(t.naive_local(), naive(2021, 3, 14, 3, 0));
    }

    #[test]
    fn resolve_midnight_gap() {
        // Chile springs forward at local midnight: 2021-09-05 00:00 does not exist.
        let t = resolve_local(Santiago, naive(2021, 9, 5, 0, 0)).unwrap();
        assert_eq!(t.naive_local(), naive(2021, 9, 5, 1, 0));
    }

    #[test]
    fn resolve_skipped_calendar_date() {
        // Samoa skipped 2011-12-30 entirely when it crossed the date line.
        let t = resolve_local(Apia, naive(2011, 12, 30, 12, 0)).unwrap();
        assert_eq!(t.date_naive(), NaiveDate::from_ymd_opt(2011, 12, 31).unwrap());
    }

    #[test]
    fn add_hour_across_spring_forward() {
        let start = resolve_local(New_York, naive(2021, 3, 14, 1, 0)).unwrap();
        let next = add_units(&start, Granularity::Hour, 1).unwrap();
        assert_eq!(next.naive_local(), naive(2021, 3, 14, 3, 0));
        assert_eq!((next - start).num_minutes(), 60);
    }

    #[test]
    fn add_hours_keeps_minutes_into_hour() {
        let start = resolve_local(New_York, naive(2021, 6, 1, 9, 41)).unwrap();
        let later = add_units(&start, Granularity::Hour, 3).unwrap();
        assert_eq!(later.naive_local(), naive(2021, 6, 1, 12, 41));
        let earlier = add_units(&start, Granularity::Hour, -2).unwrap();
        assert_eq!(earlier.naive_local(), naive(2021, 6, 1, 7, 41));
    }

    #[test]
    fn add_hours_across_half_hour_spring_forward() {
        // Lord Howe Island moves from +10:30 to +11:00 at 02:00 on 2021-10-03,
        // so the hour starting 02:30 lasts only 30 minutes.
        let one = resolve_local(Lord_Howe, naive(2021, 10, 3, 1, 0)).unwrap();
        let hours: Vec<_> = (1..=3)
            .map(|n| add_units(&one, Granularity::Hour, n).unwrap().naive_local())
            .collect();
        assert_eq!(
            hours,
            vec![
                naive(2021, 10, 3, 2, 30),
                naive(2021, 10, 3, 3, 0),
                naive(2021, 10, 3, 4, 0),
            ]
        );
        let back = add_units(&one, Granularity::Hour, 3).unwrap();
        assert_eq!(add_units(&back, Granularity::Hour, -3).unwrap(), one);
    }

    #[test]
    fn add_day_keeps_wall_time_across_dst() {
        let start = resolve_local(New_York, naive(2021, 3, 13, 9, 0)).unwrap();
        let next = add_units(&start, Granularity::Day, 1).unwrap();
        assert_eq!(next.naive_local(), naive(2021, 3, 14, 9, 0));
        assert_eq!((next - start).num_hours(), 23);
    }

    #[test]
    fn add_week() {
        let start = resolve_local(New_York, naive(2021, 11, 7, 0, 0)).unwrap();
        let next = add_units(&start, Granularity::Week, 1).unwrap();
        assert_eq!(next.naive_local(), naive(2021, 11, 14, 0, 0));
        assert_eq!((next - start).num_hours(), 7 * 24 + 1);
    }

    #[test]
    fn add_month_clamps_day() {
        let start = resolve_local(New_York, naive(2020, 1, 31, 0, 0)).unwrap();
        let next = add_units(&start, Granularity::Month, 1).unwrap();
        assert_eq!(next.naive_local(), naive(2020, 2, 29, 0, 0));
    }

    #[test]
    fn add_negative_months() {
        let start = resolve_local(New_York, naive(2021, 3, 1, 0, 0)).unwrap();
        let prev = add_units(&start, Granularity::Month, -1).unwrap();
        assert_eq!(prev.naive_local(), naive(2021, 2, 1, 0, 0));
    }

    #[test]
    fn add_year_from_leap_day() {
        let start = resolve_local(New_York, naive(2020, 2, 29, 0, 0)).unwrap();
        let next = add_units(&start, Granularity::Year, 1).unwrap();
        assert_eq!(next.naive_local(), naive(2021, 2, 28, 0, 0));
    }

    #[test]
    fn day_start_after_midnight_gap_steps_to_next_midnight() {
        // The day of 2021-09-05 in Santiago starts at 01:00; one day later is
        // the following midnight, not 01:00.
        let start = resolve_local(Santiago, naive(2021, 9, 5, 0, 0)).unwrap();
        assert_eq!(start.hour(), 1);
        let next = add_units(&start, Granularity::Day, 1).unwrap();
        assert_eq!(next.naive_local(), naive(2021, 9, 6, 0, 0));
    }

    #[test]
    fn add_zero_is_identity() {
        let start = resolve_local(New_York, naive(2021, 7, 4, 15, 45)).unwrap();
        for unit in Granularity::ALL {
            assert_eq!(add_units(&start, unit, 0).unwrap(), start);
        }
    }
}
