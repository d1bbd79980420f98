use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level Kairos configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KairosConfig {
    /// Default IANA zone for anchors and "now".
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Week and weekend conventions.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Month grid shape.
    #[serde(default)]
    pub padding: PaddingToml,
}

impl Default for KairosConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            calendar: CalendarToml::default(),
            padding: PaddingToml::default(),
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_week_start")]
    pub week_start: String,
    #[serde(default = "default_weekend")]
    pub weekend: Vec<String>,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            week_start: default_week_start(),
            weekend: default_weekend(),
        }
    }
}

fn default_week_start() -> String {
    "sunday".to_string()
}
fn default_weekend() -> Vec<String> {
    vec!["saturday".to_string(), "sunday".to_string()]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaddingToml {
    #[serde(default = "default_days_per_week")]
    pub days_per_week: u32,
    #[serde(default = "default_weeks_per_month")]
    pub weeks_per_month: u32,
}

impl Default for PaddingToml {
    fn default() -> Self {
        Self {
            days_per_week: default_days_per_week(),
            weeks_per_month: default_weeks_per_month(),
        }
    }
}

fn default_days_per_week() -> u32 {
    7
}
fn default_weeks_per_month() -> u32 {
    6
}

/// Loads the configuration at `path`, or the defaults if the file does not exist.
pub fn load(path: &Path) -> Result<KairosConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(KairosConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
