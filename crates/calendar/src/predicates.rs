//! Per-cell predicates.

use chrono::{Datelike, WeekdaySet};

use kairos_interval::TimePoint;

use crate::clock::Clock;

/// Returns `true` if `x` falls on the clock's current calendar date, read
/// in `x`'s own zone.
///
/// Dates are compared, not instants: 23:59 and 00:00 the same evening are
/// on different days.
pub fn is_today<C: Clock + ?Sized>(x: &TimePoint, clock: &C) -> bool {
    let now = clock.now().with_timezone(&x.timezone());
    now.date_naive() == x.date_naive()
}

/// Returns `true` if `x`'s local weekday is one of `weekend`.
pub fn is_weekend(x: &TimePoint, weekend: &WeekdaySet) -> bool {
    weekend.contains(x.weekday())
}
