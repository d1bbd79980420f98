//! Pure conversion functions: TOML config and CLI strings -> crate API types.

use anyhow::{Context, Result, anyhow, bail};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use chrono_tz::Tz;

use kairos_calendar::{
    CalendarConfig, Clock, Granularity, PaddingConfig, SystemClock, TimePoint, WeekdaySet,
};

use crate::cli::AnchorArgs;
use crate::config::*;

/// Parses a weekday name (full or three-letter, any case).
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| anyhow!("unknown weekday: {s:?}"))
}

/// Parses an IANA time zone name.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| anyhow!("unknown time zone: {s:?}"))
}

/// Parses a granularity name.
pub fn parse_granularity(s: &str) -> Result<Granularity> {
    Ok(s.parse::<Granularity>()?)
}

/// Resolves the anchor instant for a command.
///
/// Accepts an RFC 3339 timestamp (converted into `tz`), a local date-time
/// `YYYY-MM-DDTHH:MM[:SS]`, or a date `YYYY-MM-DD` meaning local midnight.
/// Local wall times follow the calendar's gap/overlap rules. `None` means
/// the current instant.
pub fn parse_anchor(at: Option<&str>, tz: Tz) -> Result<TimePoint> {
    let Some(at) = at.map(str::trim) else {
        return Ok(SystemClock::new(tz).now());
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(at) {
        return Ok(dt.with_timezone(&tz));
    }
    let local = if let Ok(naive) = NaiveDateTime::parse_from_str(at, "%Y-%m-%dT%H:%M:%S") {
        naive
    } else if let Ok(naive) = NaiveDateTime::parse_from_str(at, "%Y-%m-%dT%H:%M") {
        naive
    } else if let Ok(date) = NaiveDate::parse_from_str(at, "%Y-%m-%d") {
        date.and_time(NaiveTime::MIN)
    } else {
        bail!("cannot parse instant {at:?}: expected RFC 3339, YYYY-MM-DDTHH:MM or YYYY-MM-DD");
    };
    kairos_calendar::resolve_local(tz, local)
        .with_context(|| format!("cannot place {at:?} in {}", tz.name()))
}

/// Resolves a command's anchor, using `--tz` over the configured zone.
pub fn build_anchor(args: &AnchorArgs, config: &KairosConfig) -> Result<TimePoint> {
    let tz = parse_timezone(args.tz.as_deref().unwrap_or(&config.timezone))?;
    parse_anchor(args.at.as_deref(), tz)
}

/// Builds a [`PaddingConfig`] from the TOML padding section.
pub fn build_padding_config(padding: &PaddingToml) -> Result<PaddingConfig> {
    let cfg = PaddingConfig::new(padding.days_per_week, padding.weeks_per_month);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`CalendarConfig`] from the full TOML configuration.
pub fn build_calendar_config(config: &KairosConfig) -> Result<CalendarConfig> {
    let week_start = parse_weekday(&config.calendar.week_start)?;
    let weekend = config
        .calendar
        .weekend
        .iter()
        .map(|d| parse_weekday(d))
        .collect::<Result<WeekdaySet>>()?;
    let padding = build_padding_config(&config.padding)?;

    let cfg = CalendarConfig::new()
        .with_week_start(week_start)
        .with_weekend(weekend)
        .with_padding(padding);
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use chrono_tz::America::New_York;

    #[test]
    fn weekday_names() {
        assert_eq!(parse_weekday("monday").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday("Sun").unwrap(), Weekday::Sun);
        assert!(parse_weekday("someday").is_err());
    }

    #[test]
    fn timezone_names() {
        assert_eq!(parse_timezone("America/New_York").unwrap(), New_York);
        assert!(parse_timezone("Mars/Olympus_Mons").is_err());
    }

    #[test]
    fn granularity_names() {
        assert_eq!(parse_granularity("week").unwrap(), Granularity::Week);
        let err = parse_granularity("decade").unwrap_err();
        assert!(err.to_string().contains("unsupported granularity"));
    }

    #[test]
    fn anchor_rfc3339_is_converted() {
        let t = parse_anchor(Some("2021-03-14T12:00:00Z"), New_York).unwrap();
        assert_eq!(t, New_York.with_ymd_and_hms(2021, 3, 14, 8, 0, 0).unwrap());
        assert_eq!(t.timezone(), New_York);
    }

    #[test]
    fn anchor_date_is_local_midnight() {
        let t = parse_anchor(Some("2021-11-07"), New_York).unwrap();
        assert_eq!(t, New_York.with_ymd_and_hms(2021, 11, 7, 0, 0, 0).unwrap());
    }

    #[test]
    fn anchor_local_time_in_gap() {
        let t = parse_anchor(Some("2021-03-14T02:30"), New_York).unwrap();
        assert_eq!(t.hour(), 3);
        assert_eq!(t.minute(), 0);
    }

    #[test]
    fn anchor_garbage_fails() {
        assert!(parse_anchor(Some("yesterday"), New_York).is_err());
    }

    #[test]
    fn anchor_defaults_to_now() {
        let t = parse_anchor(None, New_York).unwrap();
        assert_eq!(t.timezone(), New_York);
    }

    #[test]
    fn anchor_args_zone_overrides_config() {
        let args = AnchorArgs {
            at: Some("2021-07-04".to_string()),
            tz: Some("America/New_York".to_string()),
            json: false,
        };
        let t = build_anchor(&args, &KairosConfig::default()).unwrap();
        assert_eq!(t, New_York.with_ymd_and_hms(2021, 7, 4, 0, 0, 0).unwrap());

        let args = AnchorArgs { tz: None, ..args };
        let t = build_anchor(&args, &KairosConfig::default()).unwrap();
        assert_eq!(t.timezone(), chrono_tz::UTC);
    }

    #[test]
    fn calendar_config_from_defaults() {
        let cfg = build_calendar_config(&KairosConfig::default()).unwrap();
        assert_eq!(cfg, CalendarConfig::default());
    }

    #[test]
    fn calendar_config_custom() {
        let mut toml_cfg = KairosConfig::default();
        toml_cfg.calendar.week_start = "monday".to_string();
        toml_cfg.calendar.weekend = vec!["friday".to_string(), "saturday".to_string()];
        toml_cfg.padding.weeks_per_month = 5;
        let cfg = build_calendar_config(&toml_cfg).unwrap();
        assert_eq!(cfg.week_start(), Weekday::Mon);
        assert!(cfg.weekend().contains(Weekday::Fri));
        assert!(!cfg.weekend().contains(Weekday::Sun));
        assert_eq!(cfg.padding().grid_days(), 35);
    }

    #[test]
    fn calendar_config_rejects_bad_padding() {
        let mut toml_cfg = KairosConfig::default();
        toml_cfg.padding.days_per_week = 8;
        assert!(build_calendar_config(&toml_cfg).is_err());
    }
}
