use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kairos calendar window calculator.
#[derive(Parser)]
#[command(
    name = "kairos",
    version,
    about = "Calendar view windows, day grids and time slots"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults apply if absent).
    #[arg(short, long, global = true, default_value = "kairos.toml")]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the calendar window containing an instant.
    View(WindowArgs),
    /// Print the day cells of a day, week or month view.
    Days(WindowArgs),
    /// Print the padded month grid interval.
    Pad(AnchorArgs),
    /// Split a window by calendar unit or fixed duration.
    Split(SplitArgs),
    /// Show per-cell flags (today, weekend, grid column) for an instant.
    Check(AnchorArgs),
}

/// Instant selection shared by all subcommands.
#[derive(clap::Args)]
pub struct AnchorArgs {
    /// Anchor instant: RFC 3339 (`2021-03-14T12:00:00-04:00`), local
    /// date-time (`2021-03-14T12:00`) or date (`2021-03-14`). Defaults to now.
    #[arg(short, long)]
    pub at: Option<String>,

    /// IANA time zone; overrides `timezone` from the config file.
    #[arg(long)]
    pub tz: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `view` and `days` subcommands.
#[derive(clap::Args)]
pub struct WindowArgs {
    #[command(flatten)]
    pub anchor: AnchorArgs,

    /// Window granularity: hour, day, week, month or year.
    #[arg(short, long, default_value = "day")]
    pub granularity: String,

    /// Move the window this many steps (negative for earlier windows).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,
}

/// Arguments for the `split` subcommand.
#[derive(clap::Args)]
pub struct SplitArgs {
    #[command(flatten)]
    pub anchor: AnchorArgs,

    /// Granularity of the window to split.
    #[arg(short, long, default_value = "day")]
    pub granularity: String,

    /// Split by this calendar unit.
    #[arg(long, conflicts_with = "every", required_unless_present = "every")]
    pub unit: Option<String>,

    /// Split into fixed segments of this many minutes.
    #[arg(long)]
    pub every: Option<i64>,
}
