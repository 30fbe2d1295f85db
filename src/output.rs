//! Text and JSON rendering of engine results.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use liturgical_calendars::ConversionResult;
use liturgical_calendars::festival::{FeastKind, FestivalDate, Occurrence};

/// Where and how results are printed.
pub struct Printer<W> {
    out: W,
    json: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value).context("failed to encode JSON")?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn conversion(&mut self, result: &ConversionResult) -> Result<()> {
        if self.json {
            return self.write_json(result);
        }
        let leap = if result.is_leap_year { "leap" } else { "common" };
        match &result.local {
            Some(local) => writeln!(
                self.out,
                "{:<10} {} ({} year)\ngregorian  {} {}",
                result.calendar,
                local,
                leap,
                result.day_of_week,
                result.gregorian,
            )?,
            None => writeln!(
                self.out,
                "gregorian  {} {} ({} year)",
                result.day_of_week, result.gregorian, leap,
            )?,
        }
        if let Some(days) = result.days_until {
            writeln!(self.out, "{}", days_until(days))?;
        }
        Ok(())
    }

    pub fn festivals(&mut self, festivals: &[FestivalDate]) -> Result<()> {
        if self.json {
            return self.write_json(festivals);
        }
        let width = festivals.iter().map(|f| f.name.len()).max().unwrap_or(0);
        for f in festivals {
            let marker = match f.kind {
                FeastKind::Fixed => "",
                FeastKind::Movable => " *",
            };
            write!(
                self.out,
                "{:<width$}  {:<9} {}  {:<16}",
                f.name,
                f.day_of_week.name(),
                f.gregorian,
                f.local_label,
            )?;
            if f.last_day != f.gregorian {
                write!(self.out, " until {}", f.last_day)?;
            }
            writeln!(self.out, "{marker}")?;
        }
        Ok(())
    }

    pub fn occurrences(&mut self, occurrences: &[Occurrence]) -> Result<()> {
        if self.json {
            return self.write_json(occurrences);
        }
        for o in occurrences {
            writeln!(
                self.out,
                "{}  {:<9} {}  year {}",
                o.year,
                o.day_of_week.name(),
                o.gregorian,
                o.local_year,
            )?;
        }
        Ok(())
    }

    /// Prints the coming new year followed by the series it starts.
    pub fn new_year(&mut self, next: &ConversionResult, series: &[Occurrence]) -> Result<()> {
        if self.json {
            #[derive(Serialize)]
            struct NewYear<'a> {
                next: &'a ConversionResult,
                series: &'a [Occurrence],
            }
            return self.write_json(&NewYear { next, series });
        }
        self.conversion(next)?;
        if series.len() > 1 {
            writeln!(self.out)?;
            self.occurrences(series)?;
        }
        Ok(())
    }
}

fn days_until(days: i64) -> String {
    match days {
        0 => "today".to_owned(),
        1 => "tomorrow".to_owned(),
        d if d > 1 => format!("in {d} days"),
        d => format!("passed {} days ago", -d),
    }
}
