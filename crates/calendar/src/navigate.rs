//! Previous/next window navigation.

use kairos_interval::{Granularity, Interval, add_units};

use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::window::view_of_interval;

/// The window `n` steps of `granularity` away from `window`.
///
/// Negative `n` moves backwards. The result is re-aligned with
/// [`view_of_interval`], so navigating from a month window always lands on
/// a whole month even when the days-per-month differ.
pub fn shift_window(
    window: &Interval,
    granularity: Granularity,
    n: i32,
    config: &CalendarConfig,
) -> Result<Interval, CalendarError> {
    let anchor = add_units(&window.start(), granularity, i64::from(n))?;
    view_of_interval(&anchor, granularity, config)
}
