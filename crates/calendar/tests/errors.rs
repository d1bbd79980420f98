//! Integration tests for CalendarError variants.

use chrono::{TimeDelta, TimeZone, Weekday};
use chrono_tz::UTC;

use kairos_calendar::{
    CalendarConfig, CalendarError, Granularity, Interval, IntervalError, PaddingConfig,
    padded_month_of, split_by, split_by_unit, view_of_days,
};

#[test]
fn error_inverted_interval() {
    let a = UTC.with_ymd_and_hms(2021, 1, 2, 0, 0, 0).unwrap();
    let b = UTC.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
    assert!(matches!(
        Interval::new(a, b),
        Err(IntervalError::InvalidInterval { .. })
    ));
}

#[test]
fn error_unknown_granularity_name() {
    let parsed = "fortnight".parse::<Granularity>();
    let err: CalendarError = parsed.unwrap_err().into();
    assert!(matches!(
        err,
        CalendarError::Interval(IntervalError::UnsupportedGranularity { .. })
    ));
}

#[test]
fn error_misaligned_month_split() {
    // Jan 1 .. Mar 15 is two whole months plus a partial one.
    let span = Interval::new(
        UTC.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
        UTC.with_ymd_and_hms(2021, 3, 15, 0, 0, 0).unwrap(),
    )
    .unwrap();
    assert_eq!(
        split_by_unit(&span, Granularity::Month).unwrap_err(),
        CalendarError::MisalignedInterval {
            unit: Granularity::Month,
            steps: 2,
        }
    );
}

#[test]
fn error_split_start_off_boundary() {
    // Whole multiples of the unit, but not starting on one.
    let noon_to_noon = Interval::new(
        UTC.with_ymd_and_hms(2021, 1, 1, 12, 0, 0).unwrap(),
        UTC.with_ymd_and_hms(2021, 1, 3, 12, 0, 0).unwrap(),
    )
    .unwrap();
    assert_eq!(
        split_by_unit(&noon_to_noon, Granularity::Day).unwrap_err(),
        CalendarError::MisalignedStart {
            unit: Granularity::Day,
            start: noon_to_noon.start(),
        }
    );

    let mid_month = Interval::new(
        UTC.with_ymd_and_hms(2021, 1, 15, 0, 0, 0).unwrap(),
        UTC.with_ymd_and_hms(2021, 3, 15, 0, 0, 0).unwrap(),
    )
    .unwrap();
    assert!(matches!(
        split_by_unit(&mid_month, Granularity::Month),
        Err(CalendarError::MisalignedStart {
            unit: Granularity::Month,
            ..
        })
    ));

    let half_past = Interval::new(
        UTC.with_ymd_and_hms(2021, 1, 1, 0, 30, 0).unwrap(),
        UTC.with_ymd_and_hms(2021, 1, 1, 2, 30, 0).unwrap(),
    )
    .unwrap();
    assert!(matches!(
        split_by_unit(&half_past, Granularity::Hour),
        Err(CalendarError::MisalignedStart { .. })
    ));
}

#[test]
fn error_misaligned_hour_split() {
    let span = Interval::new(
        UTC.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
        UTC.with_ymd_and_hms(2021, 1, 1, 0, 30, 0).unwrap(),
    )
    .unwrap();
    assert!(matches!(
        split_by_unit(&span, Granularity::Hour),
        Err(CalendarError::MisalignedInterval { steps: 0, .. })
    ));
}

#[test]
fn error_non_positive_step() {
    let span = Interval::new(
        UTC.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
        UTC.with_ymd_and_hms(2021, 1, 2, 0, 0, 0).unwrap(),
    )
    .unwrap();
    assert!(matches!(
        split_by(&span, TimeDelta::seconds(-1)),
        Err(CalendarError::NonPositiveDuration { seconds: -1 })
    ));
}

#[test]
fn error_invalid_padding_in_config() {
    let anchor = UTC.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
    let config = CalendarConfig::new().with_padding(PaddingConfig::new(7, 0));
    assert!(matches!(
        view_of_days(&anchor, Granularity::Month, &config),
        Err(CalendarError::InvalidPadding {
            field: "weeks_per_month",
            ..
        })
    ));
}

#[test]
fn error_padding_too_small() {
    // January 2021 starts on a Friday: 5 leading days + 31 = 36 cells.
    let anchor = UTC.with_ymd_and_hms(2021, 1, 20, 0, 0, 0).unwrap();
    assert_eq!(
        padded_month_of(&anchor, &PaddingConfig::new(7, 4), Weekday::Sun).unwrap_err(),
        CalendarError::PaddingTooSmall {
            required: 36,
            available: 28,
        }
    );
}

#[test]
fn error_year_days_view() {
    let anchor = UTC.with_ymd_and_hms(2021, 1, 20, 0, 0, 0).unwrap();
    assert!(matches!(
        view_of_days(&anchor, Granularity::Year, &CalendarConfig::default()),
        Err(CalendarError::UnsupportedGranularity {
            granularity: Granularity::Year,
            ..
        })
    ));
}
