//! Split command: partition a window by calendar unit or fixed duration.

use anyhow::{Context, Result, anyhow, bail};
use chrono::TimeDelta;
use tracing::{info, info_span};

use kairos_calendar::{Interval, split_by, split_by_unit, view_of_interval};

use crate::cli::SplitArgs;
use crate::config::KairosConfig;
use crate::convert;
use crate::output::{self, IntervalList};

/// How the window is partitioned.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Unit(kairos_calendar::Granularity),
    Every(TimeDelta),
}

/// Split the window around the anchor and print the segments.
pub fn run(args: SplitArgs, config: &KairosConfig) -> Result<()> {
    let _cmd = info_span!("split").entered();
    let anchor = convert::build_anchor(&args.anchor, config)?;
    let granularity = convert::parse_granularity(&args.granularity)?;
    let calendar = convert::build_calendar_config(config)?;
    let step = parse_step(args.unit.as_deref(), args.every)?;

    let window = view_of_interval(&anchor, granularity, &calendar)
        .with_context(|| format!("cannot compute {granularity} window"))?;
    let (label, segments) = split(&window, step)?;
    info!(%window, n_segments = segments.len(), "window split");

    let list = IntervalList::new(label, &segments);
    output::emit(&list, args.anchor.json, IntervalList::to_text)
}

fn parse_step(unit: Option<&str>, every: Option<i64>) -> Result<Step> {
    match (unit, every) {
        (Some(unit), None) => Ok(Step::Unit(convert::parse_granularity(unit)?)),
        (None, Some(minutes)) => {
            let delta = TimeDelta::try_minutes(minutes)
                .ok_or_else(|| anyhow!("--every {minutes} minutes is out of range"))?;
            Ok(Step::Every(delta))
        }
        _ => bail!("exactly one of --unit or --every is required"),
    }
}

fn split(window: &Interval, step: Step) -> Result<(String, Vec<Interval>)> {
    match step {
        Step::Unit(unit) => {
            let segments = split_by_unit(window, unit)
                .with_context(|| format!("cannot split {window} by {unit}"))?;
            Ok((unit.to_string(), segments))
        }
        Step::Every(delta) => {
            let segments = split_by(window, delta).with_context(|| {
                format!("cannot split {window} every {} minutes", delta.num_minutes())
            })?;
            Ok((format!("{}min", delta.num_minutes()), segments))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::New_York;
    use kairos_calendar::{CalendarConfig, Granularity};

    fn day(m: u32, d: u32) -> Interval {
        let anchor = New_York.with_ymd_and_hms(2021, m, d, 12, 0, 0).unwrap();
        view_of_interval(&anchor, Granularity::Day, &CalendarConfig::default()).unwrap()
    }

    #[test]
    fn step_from_flags() {
        assert_eq!(
            parse_step(Some("hour"), None).unwrap(),
            Step::Unit(Granularity::Hour)
        );
        assert_eq!(
            parse_step(None, Some(30)).unwrap(),
            Step::Every(TimeDelta::minutes(30))
        );
        assert!(parse_step(None, None).is_err());
        assert!(parse_step(Some("fortnight"), None).is_err());
    }

    #[test]
    fn half_hours_across_transitions() {
        let step = Step::Every(TimeDelta::minutes(30));
        let (label, spring) = split(&day(3, 14), step).unwrap();
        assert_eq!(label, "30min");
        assert_eq!(spring.len(), 46);
        let (_, fall) = split(&day(11, 7), step).unwrap();
        assert_eq!(fall.len(), 50);
    }

    #[test]
    fn non_positive_step_is_reported() {
        let err = split(&day(6, 1), Step::Every(TimeDelta::zero())).unwrap_err();
        assert!(format!("{err:#}").contains("cannot split"));
    }
}
