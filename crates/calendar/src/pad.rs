//! Month grids padded to whole calendar weeks.

use chrono::Weekday;

use kairos_interval::{Granularity, Interval, TimePoint, add_units, first_of_month, start_of_week};

use crate::config::PaddingConfig;
use crate::error::CalendarError;

/// The padded grid interval for the month containing `anchor`.
///
/// The grid starts on the `week_start` on or before the first of the month
/// and spans exactly `weeks_per_month * days_per_week` calendar days, so
/// leading and trailing cells come from the adjacent months and every month
/// renders with the same number of rows.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidPadding`] if `padding` fails validation,
/// and [`CalendarError::PaddingTooSmall`] if the grid would end before the
/// month does.
#[tracing::instrument(level = "trace", skip(padding), fields(grid_days = padding.grid_days()))]
pub fn padded_month_of(
    anchor: &TimePoint,
    padding: &PaddingConfig,
    week_start: Weekday,
) -> Result<Interval, CalendarError> {
    padding.validate()?;

    let month_start = first_of_month(anchor)?;
    let month_end = add_units(&month_start, Granularity::Month, 1)?;
    let grid_start = start_of_week(&month_start, week_start)?;
    let grid_end = add_units(&grid_start, Granularity::Day, i64::from(padding.grid_days()))?;

    if grid_end < month_end {
        let required = (month_end.date_naive() - grid_start.date_naive()).num_days();
        return Err(CalendarError::PaddingTooSmall {
            required,
            available: padding.grid_days(),
        });
    }

    Ok(Interval::new(grid_start, grid_end)?)
}
