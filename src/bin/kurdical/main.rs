mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use kurdical::{Dialect, Epoch, KurdishDate, gregorian_to_kurdish, kurdish_ymd_to_gregorian};
use tracing::info;

use crate::cli::{Cli, Command, DemoArgs, ToGregorianArgs, ToKurdishArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::ToKurdish(args) => to_kurdish(&args),
        Command::ToGregorian(args) => to_gregorian(&args),
        Command::Demo(args) => {
            demo(&args);
            Ok(())
        }
    }
}

fn to_kurdish(args: &ToKurdishArgs) -> Result<()> {
    let kurdish = gregorian_to_kurdish(args.date, args.calendar.dialect, args.calendar.epoch);
    info!(date = %args.date, %kurdish, "converted to Kurdish");

    if args.json {
        let json = serde_json::to_string_pretty(&kurdish).context("failed to serialize date")?;
        println!("{json}");
    } else {
        println!("{}", describe(&kurdish));
    }
    Ok(())
}

fn to_gregorian(args: &ToGregorianArgs) -> Result<()> {
    let (year, month, day) = (args.year, args.month, args.day);
    let date = kurdish_ymd_to_gregorian(
        year,
        month,
        day,
        args.calendar.dialect,
        args.calendar.epoch,
    )
    .with_context(|| {
        format!(
            "cannot convert Kurdish date {year}-{month}-{day} ({})",
            args.calendar.epoch
        )
    })?;
    info!(year, month, day, %date, "converted to Gregorian");

    println!("{date}");
    Ok(())
}

fn demo(args: &DemoArgs) {
    println!("Gregorian: {}", args.date);
    for (dialect, epoch) in [
        (Dialect::Sorani, Epoch::MedianKingdom),
        (Dialect::Kurmanji, Epoch::FallOfNineveh),
    ] {
        let kurdish = gregorian_to_kurdish(args.date, dialect, epoch);
        println!("Kurdish ({epoch}, {dialect}): {}", describe(&kurdish));
    }
}

fn describe(date: &KurdishDate) -> String {
    format!("{date} ({}, day {} of the week)", date.weekday(), date.weekday().number())
}
