use clap::{Parser, Subcommand};
use kurdical::{Dialect, Epoch, GregorianDate};

/// Convert dates between the Gregorian and Kurdish calendars.
#[derive(Parser)]
#[command(
    name = "kurdical",
    version,
    about = "Convert dates between the Gregorian and Kurdish calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date (YYYY-MM-DD) to the Kurdish calendar.
    ToKurdish(ToKurdishArgs),
    /// Convert a Kurdish year, month and day to the Gregorian calendar.
    ToGregorian(ToGregorianArgs),
    /// Print one date under both epochs.
    Demo(DemoArgs),
}

/// Dialect and epoch shared by the conversion subcommands.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Dialect for month names (laki, hawrami, sorani, kalhuri, kurmanji).
    #[arg(short, long, default_value = "sorani")]
    pub dialect: Dialect,

    /// Year epoch (median-kingdom, fall-of-nineveh).
    #[arg(short, long, default_value = "median-kingdom")]
    pub epoch: Epoch,
}

/// Arguments for the `to-kurdish` subcommand.
#[derive(clap::Args)]
pub struct ToKurdishArgs {
    /// Gregorian date in YYYY-MM-DD form.
    pub date: GregorianDate,

    #[command(flatten)]
    pub calendar: CalendarArgs,

    /// Print the full date as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `to-gregorian` subcommand.
#[derive(clap::Args)]
pub struct ToGregorianArgs {
    /// Kurdish year.
    pub year: i32,

    /// Month (1-12).
    pub month: u8,

    /// Day of the month.
    pub day: u8,

    #[command(flatten)]
    pub calendar: CalendarArgs,
}

/// Arguments for the `demo` subcommand.
#[derive(clap::Args)]
pub struct DemoArgs {
    /// Gregorian date in YYYY-MM-DD form.
    #[arg(default_value = "2025-10-11")]
    pub date: GregorianDate,
}
