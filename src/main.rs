mod cli;
mod logging;
mod output;

use std::io;
use std::process;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use tracing::{debug, info};

use liturgical_calendars::{Date, Engine, EngineConfig};

use crate::cli::{Cli, Command};
use crate::output::Printer;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let engine = build_engine(&cli)?;
    let mut printer = Printer::new(io::stdout().lock(), cli.json);
    let today = today();

    match cli.command {
        Command::Convert(args) => {
            let result = engine.convert_input(args.calendar, &args.year, &args.month, &args.day)?;
            printer.conversion(&result)
        }
        Command::ToLocal(args) => {
            let date = Date::from_iso_gregorian(&args.date)
                .with_context(|| format!("invalid date {:?}, expected YYYY-MM-DD", args.date))?;
            let (y, m, d) = date.gregorian();
            let result = engine.to_local(args.calendar, y, m, d)?;
            printer.conversion(&result)
        }
        Command::Festivals(args) => {
            let year = args.year.unwrap_or(today.gregorian().0);
            let festivals = engine.festivals_for_year(args.calendar, year)?;
            info!(calendar = %args.calendar, year, n = festivals.len(), "festivals projected");
            printer.festivals(&festivals)
        }
        Command::NewYear(args) => {
            let year = args.year.unwrap_or(today.gregorian().0);
            let count = args.count.unwrap_or(engine.config().yazidi.lookahead);
            let next = engine.new_year(year, today)?;
            let series = engine.next_new_year(year, count)?;
            printer.new_year(&next, &series)
        }
    }
}

fn build_engine(cli: &Cli) -> Result<Engine> {
    let Some(path) = &cli.config else {
        return Ok(Engine::default());
    };
    let config = EngineConfig::load(path)
        .with_context(|| format!("failed to load config: {}", path.display()))?;
    info!(path = %path.display(), "config loaded");
    Engine::new(config).context("invalid config")
}

/// Today's date in the local time zone.
fn today() -> Date {
    let now = chrono::Local::now().date_naive();
    debug!(%now, "reference date");
    Date::from_gregorian(now.year(), now.month(), now.day())
}
