//! Calendar conventions: week start, weekend days and month-grid padding.

use chrono::{Weekday, WeekdaySet};

use crate::error::CalendarError;

/// Default first day of the week.
///
/// Sunday-first matches a grid whose column 0 holds Sunday. Monday-first
/// (ISO 8601) is available through [`CalendarConfig::with_week_start`].
pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

/// Default weekend: Saturday and Sunday.
pub const WEEKEND: WeekdaySet = WeekdaySet::from_array([Weekday::Sat, Weekday::Sun]);

/// Shape of a padded month grid.
///
/// # Example
///
/// ```
/// use kairos_calendar::PaddingConfig;
///
/// let padding = PaddingConfig::default();
/// assert_eq!(padding.grid_days(), 42);
/// assert!(padding.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingConfig {
    /// Columns per grid row.
    days_per_week: u32,
    /// Rows in the grid.
    weeks_per_month: u32,
}

impl PaddingConfig {
    /// Creates a padding configuration. Call [`validate`](Self::validate)
    /// before use, or let [`padded_month_of`](crate::padded_month_of) do it.
    pub fn new(days_per_week: u32, weeks_per_month: u32) -> Self {
        Self {
            days_per_week,
            weeks_per_month,
        }
    }

    /// Returns the number of days per grid row.
    pub fn days_per_week(&self) -> u32 {
        self.days_per_week
    }

    /// Returns the number of grid rows.
    pub fn weeks_per_month(&self) -> u32 {
        self.weeks_per_month
    }

    /// Total number of day cells in the grid.
    pub fn grid_days(&self) -> u32 {
        self.days_per_week.saturating_mul(self.weeks_per_month)
    }

    /// Validates this configuration.
    ///
    /// `days_per_week` must be in 1..=7 and `weeks_per_month` at least 1.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if !(1..=7).contains(&self.days_per_week) {
            return Err(CalendarError::InvalidPadding {
                field: "days_per_week",
                value: self.days_per_week,
                expected: "1..=7",
            });
        }
        if self.weeks_per_month < 1 {
            return Err(CalendarError::InvalidPadding {
                field: "weeks_per_month",
                value: self.weeks_per_month,
                expected: ">= 1",
            });
        }
        Ok(())
    }
}

impl Default for PaddingConfig {
    fn default() -> Self {
        Self::new(7, 6)
    }
}

/// Calendar conventions shared by the view, padding and predicate functions.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use kairos_calendar::{CalendarConfig, PaddingConfig};
///
/// let config = CalendarConfig::new()
///     .with_week_start(Weekday::Mon)
///     .with_padding(PaddingConfig::new(7, 6));
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    week_start: Weekday,
    weekend: WeekdaySet,
    padding: PaddingConfig,
}

impl CalendarConfig {
    /// Creates a configuration with the defaults: weeks start on Sunday,
    /// the weekend is Saturday and Sunday, months pad to 6 rows of 7 days.
    pub fn new() -> Self {
        Self {
            week_start: DEFAULT_WEEK_START,
            weekend: WEEKEND,
            padding: PaddingConfig::default(),
        }
    }

    /// Sets the first day of the week.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Sets the weekend days.
    pub fn with_weekend(mut self, weekend: WeekdaySet) -> Self {
        self.weekend = weekend;
        self
    }

    /// Sets the month-grid padding.
    pub fn with_padding(mut self, padding: PaddingConfig) -> Self {
        self.padding = padding;
        self
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn weekend(&self) -> &WeekdaySet {
        &self.weekend
    }

    pub fn padding(&self) -> &PaddingConfig {
        &self.padding
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), CalendarError> {
        self.padding.validate()
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::new()
    }
}
