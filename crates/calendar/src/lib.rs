//! # kairos-calendar
//!
//! Calendar interval calculus for day/week/month/year views.
//!
//! Given an anchor instant and a granularity, computes the calendar-aligned
//! window around it, splits windows into ordered sub-windows (by calendar
//! unit or by fixed absolute duration), and pads month windows out to whole
//! weeks so every month renders with the same number of grid rows.
//!
//! All functions are pure. The current instant is injected through the
//! [`Clock`] trait instead of being read implicitly.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["anchor TimePoint"] -->|"view_of_interval()"| B["window Interval"]
//!     A -->|"padded_month_of()"| C["padded grid Interval"]
//!     B -->|"split_by_unit() / split_by()"| D["Vec of Interval"]
//!     C -->|"split_by_unit(Day)"| D
//!     B -->|"shift_window()"| B
//!     D -->|"is_today() / is_weekend() / grid_column()"| E["per-cell flags"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::{TimeDelta, TimeZone};
//! use chrono_tz::America::New_York;
//! use kairos_calendar::{CalendarConfig, Granularity, day_of, split_by, view_of_days};
//!
//! let config = CalendarConfig::default();
//! let anchor = New_York.with_ymd_and_hms(2021, 3, 14, 12, 0, 0).unwrap();
//!
//! // Month grid: 6 rows of 7 days, Sunday first.
//! let cells = view_of_days(&anchor, Granularity::Month, &config).unwrap();
//! assert_eq!(cells.len(), 42);
//!
//! // Half-hour slots on the spring-forward day: 23 hours, 46 slots.
//! let slots = split_by(&day_of(&anchor).unwrap(), TimeDelta::minutes(30)).unwrap();
//! assert_eq!(slots.len(), 46);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `window` | View windows, day lists and month lists for an anchor |
//! | `split` | Partitioning by calendar unit or absolute duration |
//! | `pad` | Month grids padded to whole weeks |
//! | `predicates` | `is_today` and `is_weekend` |
//! | `navigate` | Previous/next window |
//! | `grid` | Weekday-to-column mapping |
//! | `config` | Week start, weekend set and padding configuration |
//! | `clock` | Injectable source of the current instant |
//! | `error` | Error types |

mod clock;
mod config;
mod error;
mod grid;
mod navigate;
mod pad;
mod predicates;
mod split;
mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CalendarConfig, DEFAULT_WEEK_START, PaddingConfig, WEEKEND};
pub use error::CalendarError;
pub use grid::{grid_column, weekday_header};
pub use navigate::shift_window;
pub use pad::padded_month_of;
pub use predicates::{is_today, is_weekend};
pub use split::{split_by, split_by_unit};
pub use window::{day_of, today, view_of_days, view_of_interval, view_of_months, week_of};

// Re-export the primitives so callers need only this crate.
pub use chrono::WeekdaySet;
pub use kairos_interval::{Granularity, Interval, IntervalError, TimePoint, resolve_local};
