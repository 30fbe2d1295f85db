use std::path::PathBuf;

use clap::{Parser, Subcommand};

use liturgical_calendars::CalendarId;

/// Coptic, Samaritan and Yazidi calendar converter.
#[derive(Parser)]
#[command(
    name = "litcal",
    version,
    about = "Convert liturgical calendar dates and list their festivals"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file overriding the calendar constants.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a local date to the Gregorian calendar.
    Convert(ConvertArgs),
    /// Express a Gregorian date in a local calendar.
    ToLocal(ToLocalArgs),
    /// List the festivals of a Gregorian year.
    Festivals(FestivalsArgs),
    /// Show the Yazidi new year (Sere Sal) for consecutive years.
    NewYear(NewYearArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Calendar of the date (coptic, samaritan, yazidi or gregorian).
    pub calendar: CalendarId,
    /// Local year.
    #[arg(allow_hyphen_values = true)]
    pub year: String,
    /// Local month, starting at 1.
    #[arg(allow_hyphen_values = true)]
    pub month: String,
    /// Day of month, starting at 1.
    #[arg(allow_hyphen_values = true)]
    pub day: String,
}

/// Arguments for the `to-local` subcommand.
#[derive(clap::Args)]
pub struct ToLocalArgs {
    /// Target calendar.
    pub calendar: CalendarId,
    /// Gregorian date as YYYY-MM-DD.
    pub date: String,
}

/// Arguments for the `festivals` subcommand.
#[derive(clap::Args)]
pub struct FestivalsArgs {
    /// Calendar (samaritan or coptic).
    pub calendar: CalendarId,
    /// Gregorian year; defaults to the current year.
    pub year: Option<i32>,
}

/// Arguments for the `new-year` subcommand.
#[derive(clap::Args)]
pub struct NewYearArgs {
    /// First Gregorian year; defaults to the current year.
    pub year: Option<i32>,

    /// Number of consecutive years; defaults to `yazidi.lookahead` from config.
    #[arg(short = 'n', long)]
    pub count: Option<u32>,
}
