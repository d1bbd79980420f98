//! # kairos-interval
//!
//! Zone-aware time primitives for the kairos calendar calculus.
//!
//! Instants are `chrono::DateTime<chrono_tz::Tz>`; this crate adds the
//! half-open [`Interval`], the [`Granularity`] vocabulary, and the local-time
//! rules the calendar layer relies on: how a wall time that falls into a DST
//! gap or overlap maps to an instant, and how to step by calendar units
//! without losing wall-clock alignment.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDateTime + Tz"] -->|"resolve_local()"| B["TimePoint"]
//!     B -->|"start_of_local_day() / first_of_month() / ..."| C["aligned TimePoint"]
//!     C -->|"add_units()"| C
//!     C -->|"Interval::new()"| D["Interval [start, end)"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::TimeZone;
//! use chrono_tz::America::New_York;
//! use kairos_interval::{Granularity, Interval, add_units, start_of_local_day};
//!
//! let noon = New_York.with_ymd_and_hms(2021, 3, 14, 12, 0, 0).unwrap();
//! let midnight = start_of_local_day(&noon).unwrap();
//! let next = add_units(&midnight, Granularity::Day, 1).unwrap();
//!
//! let day = Interval::new(midnight, next).unwrap();
//! assert!(day.contains(&noon));
//! assert_eq!(day.duration().num_hours(), 23); // spring-forward day
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `interval` | `TimePoint` alias and half-open `Interval` |
//! | `granularity` | Calendar unit vocabulary and parsing |
//! | `local` | Wall-time resolution and calendar-unit stepping |
//! | `boundary` | Start of hour/day/week/month/year in the local zone |
//! | `error` | Error types |

mod boundary;
mod error;
mod granularity;
mod interval;
mod local;

pub use boundary::{first_of_month, first_of_year, start_of_local_day, start_of_week, top_of_hour};
pub use error::IntervalError;
pub use granularity::Granularity;
pub use interval::{Interval, TimePoint};
pub use local::{add_units, resolve_local};
