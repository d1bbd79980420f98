//! Text and JSON output structures for command results.

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use serde::Serialize;

use kairos_calendar::{Interval, TimePoint};

/// One interval, with RFC 3339 endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct IntervalRow {
    pub start: String,
    pub end: String,
    /// Absolute length in minutes.
    pub minutes: i64,
}

impl From<&Interval> for IntervalRow {
    fn from(interval: &Interval) -> Self {
        Self {
            start: rfc3339(&interval.start()),
            end: rfc3339(&interval.end()),
            minutes: interval.duration().num_minutes(),
        }
    }
}

/// A list of intervals produced by `view`, `days`, `pad` or `split`.
#[derive(Debug, Serialize)]
pub struct IntervalList {
    pub zone: String,
    /// Granularity or split step the intervals were produced with.
    pub unit: String,
    pub count: usize,
    pub intervals: Vec<IntervalRow>,
}

impl IntervalList {
    pub fn new(unit: impl ToString, intervals: &[Interval]) -> Self {
        let zone = intervals
            .first()
            .map(|i| i.timezone().name().to_string())
            .unwrap_or_default();
        Self {
            zone,
            unit: unit.to_string(),
            count: intervals.len(),
            intervals: intervals.iter().map(IntervalRow::from).collect(),
        }
    }

    /// One `start/end` line per interval.
    pub fn to_text(&self) -> String {
        self.intervals
            .iter()
            .map(|row| format!("{}/{}", row.start, row.end))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Per-cell flags for the `check` subcommand.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub at: String,
    pub zone: String,
    pub weekday: String,
    pub is_today: bool,
    pub is_weekend: bool,
    /// Zero-based column under the configured week start.
    pub grid_column: usize,
    /// Weekday abbreviations in grid column order.
    pub columns: Vec<String>,
    pub day: IntervalRow,
}

impl CheckOutput {
    pub fn to_text(&self) -> String {
        format!(
            "at:          {}\nzone:        {}\nweekday:     {}\ntoday:       {}\nweekend:     {}\ngrid column: {} ({})\nday:         {}/{}",
            self.at,
            self.zone,
            self.weekday,
            self.is_today,
            self.is_weekend,
            self.grid_column,
            self.columns.join(" "),
            self.day.start,
            self.day.end,
        )
    }
}

pub fn rfc3339(t: &TimePoint) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Prints `value` as pretty JSON, or `text` otherwise.
pub fn emit<T: Serialize>(value: &T, json: bool, text: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(value).context("failed to serialise output as JSON")?;
        println!("{rendered}");
    } else {
        println!("{}", text(value));
    }
    Ok(())
}
