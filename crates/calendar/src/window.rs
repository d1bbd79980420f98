//! Canonical view windows for an anchor instant.

use kairos_interval::{
    Granularity, Interval, TimePoint, add_units, first_of_month, first_of_year,
    start_of_local_day, start_of_week, top_of_hour,
};

use crate::clock::Clock;
use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::pad::padded_month_of;
use crate::split::split_by_unit;

/// The calendar-aligned window of `granularity` containing `anchor`.
///
/// | Granularity | Window |
/// |-------------|--------|
/// | `Hour` | top of the local hour to the next local hour start |
/// | `Day` | local midnight to the next local midnight |
/// | `Week` | midnight of the configured week start, plus seven days |
/// | `Month` | first of the month to the first of the next month |
/// | `Year` | January 1 to the next January 1 |
///
/// Boundaries are computed in the anchor's zone. The window always contains
/// the anchor, and anchoring again at the window's start returns the same
/// window.
pub fn view_of_interval(
    anchor: &TimePoint,
    granularity: Granularity,
    config: &CalendarConfig,
) -> Result<Interval, CalendarError> {
    let start = match granularity {
        Granularity::Hour => top_of_hour(anchor)?,
        Granularity::Day => start_of_local_day(anchor)?,
        Granularity::Week => start_of_week(anchor, config.week_start())?,
        Granularity::Month => first_of_month(anchor)?,
        Granularity::Year => first_of_year(anchor)?,
    };
    let end = add_units(&start, granularity, 1)?;
    Ok(Interval::new(start, end)?)
}

/// The local calendar day containing `anchor`.
pub fn day_of(anchor: &TimePoint) -> Result<Interval, CalendarError> {
    view_of_interval(anchor, Granularity::Day, &CalendarConfig::default())
}

/// The week containing `anchor`, starting on the configured weekday.
pub fn week_of(anchor: &TimePoint, config: &CalendarConfig) -> Result<Interval, CalendarError> {
    view_of_interval(anchor, Granularity::Week, config)
}

/// The local calendar day containing the clock's current instant.
pub fn today<C: Clock + ?Sized>(clock: &C) -> Result<Interval, CalendarError> {
    day_of(&clock.now())
}

/// The one-day cells making up the view of `granularity` around `anchor`.
///
/// - `Day`: the single day.
/// - `Week`: seven consecutive days covering [`week_of`].
/// - `Month`: the padded month grid (42 days by default), including the
///   trailing days of the previous month and leading days of the next.
///
/// # Errors
///
/// `Hour` and `Year` return [`CalendarError::UnsupportedGranularity`]: an
/// hour is smaller than a day cell, and the year view is built from month
/// windows with [`view_of_months`].
#[tracing::instrument(level = "debug", skip(config), fields(week_start = %config.week_start()))]
pub fn view_of_days(
    anchor: &TimePoint,
    granularity: Granularity,
    config: &CalendarConfig,
) -> Result<Vec<Interval>, CalendarError> {
    match granularity {
        Granularity::Day => Ok(vec![day_of(anchor)?]),
        Granularity::Week => split_by_unit(&week_of(anchor, config)?, Granularity::Day),
        Granularity::Month => {
            let grid = padded_month_of(anchor, config.padding(), config.week_start())?;
            split_by_unit(&grid, Granularity::Day)
        }
        Granularity::Hour | Granularity::Year => Err(CalendarError::UnsupportedGranularity {
            granularity,
            operation: "view_of_days",
        }),
    }
}

/// The twelve month windows of the year containing `anchor`.
pub fn view_of_months(anchor: &TimePoint) -> Result<Vec<Interval>, CalendarError> {
    let year = view_of_interval(anchor, Granularity::Year, &CalendarConfig::default())?;
    split_by_unit(&year, Granularity::Month)
}
