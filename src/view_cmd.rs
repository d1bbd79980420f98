//! View commands: the window, its day cells and the padded month grid.

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use kairos_calendar::{
    CalendarConfig, Granularity, Interval, TimePoint, padded_month_of, shift_window,
    view_of_days, view_of_interval,
};

use crate::cli::{AnchorArgs, WindowArgs};
use crate::config::KairosConfig;
use crate::convert;
use crate::output::{self, IntervalList};

/// Print the window of the requested granularity around the anchor.
pub fn run_view(args: WindowArgs, config: &KairosConfig) -> Result<()> {
    let _cmd = info_span!("view").entered();
    let (anchor, granularity, calendar) = prepare(&args, config)?;

    let window = window_at(&anchor, granularity, args.offset, &calendar)?;
    info!(%window, "view window");

    let list = IntervalList::new(granularity, &[window]);
    output::emit(&list, args.anchor.json, IntervalList::to_text)
}

/// Print the one-day cells of a day, week or month view.
pub fn run_days(args: WindowArgs, config: &KairosConfig) -> Result<()> {
    let _cmd = info_span!("days").entered();
    let (anchor, granularity, calendar) = prepare(&args, config)?;

    let window = window_at(&anchor, granularity, args.offset, &calendar)?;
    let days = view_of_days(&window.start(), granularity, &calendar)
        .with_context(|| format!("cannot list days for a {granularity} view"))?;
    info!(n_days = days.len(), "day cells computed");

    let list = IntervalList::new(Granularity::Day, &days);
    output::emit(&list, args.anchor.json, IntervalList::to_text)
}

/// Print the padded month grid around the anchor.
pub fn run_pad(args: AnchorArgs, config: &KairosConfig) -> Result<()> {
    let _cmd = info_span!("pad").entered();
    let anchor = convert::build_anchor(&args, config)?;
    let calendar = convert::build_calendar_config(config)?;

    let grid = padded_month_of(&anchor, calendar.padding(), calendar.week_start())
        .context("failed to pad month")?;
    info!(%grid, "padded month grid");

    let list = IntervalList::new(Granularity::Month, &[grid]);
    output::emit(&list, args.json, IntervalList::to_text)
}

fn prepare(
    args: &WindowArgs,
    config: &KairosConfig,
) -> Result<(TimePoint, Granularity, CalendarConfig)> {
    let anchor = convert::build_anchor(&args.anchor, config)?;
    let granularity = convert::parse_granularity(&args.granularity)?;
    let calendar = convert::build_calendar_config(config)?;
    debug!(anchor = %output::rfc3339(&anchor), %granularity, "resolved inputs");
    Ok((anchor, granularity, calendar))
}

/// The window containing `anchor`, moved `offset` steps.
pub(crate) fn window_at(
    anchor: &TimePoint,
    granularity: Granularity,
    offset: i32,
    calendar: &CalendarConfig,
) -> Result<Interval> {
    let window = view_of_interval(anchor, granularity, calendar)
        .with_context(|| format!("cannot compute {granularity} window"))?;
    if offset == 0 {
        return Ok(window);
    }
    shift_window(&window, granularity, offset, calendar)
        .with_context(|| format!("cannot move {granularity} window by {offset}"))
}
