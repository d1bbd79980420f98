//! Injectable source of the current instant and default zone.

use chrono::Utc;
use chrono_tz::Tz;

use kairos_interval::TimePoint;

/// Supplies "now" in a default zone.
///
/// Functions that depend on the current date ([`today`](crate::today),
/// [`is_today`](crate::is_today)) take a clock instead of reading the
/// system clock, so they stay deterministic under test.
pub trait Clock {
    /// The current instant, expressed in the clock's default zone.
    fn now(&self) -> TimePoint;
}

/// Reads the system clock and expresses it in a fixed zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> TimePoint {
        Utc::now().with_timezone(&self.tz)
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: TimePoint,
}

impl FixedClock {
    pub fn new(instant: TimePoint) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> TimePoint {
        self.instant
    }
}
