//! Weekday-to-column mapping for week and month grids.

use chrono::Weekday;

/// 0-based grid column of `day` when the first column is `week_start`.
///
/// Sunday-first puts Sunday in column 0 and Saturday in column 6;
/// Monday-first puts Sunday in column 6.
pub fn grid_column(day: Weekday, week_start: Weekday) -> usize {
    ((day.num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7) as usize
}

/// Column headers in display order.
pub fn weekday_header(week_start: Weekday) -> [Weekday; 7] {
    let mut day = week_start;
    std::array::from_fn(|_| {
        let current = day;
        day = day.succ();
        current
    })
}
