//! Check command: per-cell flags for a single instant.

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::{info, info_span};

use kairos_calendar::{
    CalendarConfig, Clock, SystemClock, TimePoint, day_of, grid_column, is_today, is_weekend,
    weekday_header,
};

use crate::cli::AnchorArgs;
use crate::config::KairosConfig;
use crate::convert;
use crate::output::{self, CheckOutput, IntervalRow};

/// Print whether the anchor is today, on a weekend, and its grid column.
pub fn run(args: AnchorArgs, config: &KairosConfig) -> Result<()> {
    let _cmd = info_span!("check").entered();
    let anchor = convert::build_anchor(&args, config)?;
    let calendar = convert::build_calendar_config(config)?;
    let clock = SystemClock::new(anchor.timezone());

    let report = check(&anchor, &calendar, &clock)?;
    info!(
        is_today = report.is_today,
        is_weekend = report.is_weekend,
        "instant checked"
    );
    output::emit(&report, args.json, CheckOutput::to_text)
}

fn check<C: Clock + ?Sized>(
    anchor: &TimePoint,
    calendar: &CalendarConfig,
    clock: &C,
) -> Result<CheckOutput> {
    let day = day_of(anchor).context("cannot compute the anchor's day")?;
    Ok(CheckOutput {
        at: output::rfc3339(anchor),
        zone: anchor.timezone().name().to_string(),
        weekday: anchor.weekday().to_string(),
        is_today: is_today(anchor, clock),
        is_weekend: is_weekend(anchor, calendar.weekend()),
        grid_column: grid_column(anchor.weekday(), calendar.week_start()),
        columns: weekday_header(calendar.week_start())
            .iter()
            .map(ToString::to_string)
            .collect(),
        day: IntervalRow::from(&day),
    })
}
