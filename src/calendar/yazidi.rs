//! Yazidi calendar.
//!
//! The anniversary that matters is Sere Sal (the New Year, also called
//! Charshema Sor), held on the first Wednesday on or after 13 April of the
//! Julian calendar. The Julian date is moved into the Gregorian calendar by
//! a constant lag (13 days, giving 26 April), which only holds between 1900
//! and 2100. Outside that span the result drifts by a day per skipped
//! Gregorian leap day.
//!
//! For day-by-day conversion the year is laid out solar-style from 14 April
//! (Gregorian): twelve months of 30 days and a closing month of 5 days, or 6
//! when the following Gregorian year is a leap year.
//!
//! Yazidi years run 4750 ahead of Gregorian years.

use std::ops::RangeInclusive;

use crate::config::YazidiConfig;
use crate::date::{Date, Weekday, YearType};

#[derive(Debug, Clone)]
pub struct Yazidi {
    epoch_offset: i32,
    julian_anchor: (u32, u32),
    julian_lag_days: i32,
    new_year_weekday: Weekday,
    year_start: (u32, u32),
    min_year: i32,
    max_year: i32,
}

impl Yazidi {
    pub fn new(config: &YazidiConfig, julian_lag_days: i32) -> Self {
        Self {
            epoch_offset: config.epoch_offset,
            julian_anchor: (config.julian_anchor_month, config.julian_anchor_day),
            julian_lag_days,
            new_year_weekday: config.new_year_weekday,
            year_start: (config.year_start_month, config.year_start_day),
            min_year: config.min_year,
            max_year: config.max_year,
        }
    }

    /// Yazidi year minus Gregorian year.
    pub fn epoch_offset(&self) -> i32 {
        self.epoch_offset
    }

    /// Yazidi year that begins in Gregorian year `gregorian_year`.
    pub fn year_of(&self, gregorian_year: i32) -> i32 {
        gregorian_year + self.epoch_offset
    }

    /// Accepted Gregorian years for anniversary queries.
    pub fn gregorian_years(&self) -> RangeInclusive<i32> {
        self.min_year..=self.max_year
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.year_of(self.min_year)..=self.year_of(self.max_year)
    }

    /// Date of Sere Sal in `gregorian_year`.
    ///
    /// # Example
    ///
    /// ```
    /// use liturgical_calendars::calendar::Yazidi;
    /// use liturgical_calendars::config::YazidiConfig;
    ///
    /// let yazidi = Yazidi::new(&YazidiConfig::default(), 13);
    /// assert_eq!("2024-05-01", yazidi.sere_sal(2024).iso_gregorian());
    /// ```
    pub fn sere_sal(&self, gregorian_year: i32) -> Date {
        let (m, d) = self.julian_anchor;
        let anchor = Date::from_gregorian(gregorian_year, m, d) + self.julian_lag_days;
        anchor.next_or_same(self.new_year_weekday)
    }

    /// Whether the closing month of `year` has 6 days.
    pub fn is_leap(&self, year: i32) -> bool {
        YearType::from_gregorian(year - self.epoch_offset + 1).is_leap()
    }

    pub fn month_lengths(&self, year: i32) -> Vec<u32> {
        let mut lengths = vec![30; 12];
        lengths.push(if self.is_leap(year) { 6 } else { 5 });
        lengths
    }

    /// First day of `year` in the day-by-day layout.
    pub fn new_year(&self, year: i32) -> Date {
        let (m, d) = self.year_start;
        Date::from_gregorian(year - self.epoch_offset, m, d)
    }

    pub fn to_date(&self, year: i32, month: u32, day: u32) -> Date {
        self.new_year(year) + ((month as i32 - 1) * 30 + day as i32 - 1)
    }

    pub fn from_date(&self, date: Date) -> (i32, u32, u32) {
        let mut year = self.year_of(date.gregorian().0);
        if date < self.new_year(year) {
            year -= 1;
        }
        // Consecutive years tile exactly, so every offset past the twelfth
        // month lands in the closing one.
        let offset = date - self.new_year(year);
        let month = (offset / 30).min(12) as u32 + 1;
        let day = (offset - i64::from(month - 1) * 30) as u32 + 1;
        (year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yazidi() -> Yazidi {
        Yazidi::new(&YazidiConfig::default(), 13)
    }

    #[test]
    fn sere_sal_dates() {
        let y = yazidi();
        for (year, std) in [
            (2023, "2023-04-26"),
            (2024, "2024-05-01"),
            (2025, "2025-04-30"),
            (2026, "2026-04-29"),
        ] {
            assert_eq!(std, y.sere_sal(year).iso_gregorian(), "{year}");
        }
    }

    #[test]
    fn sere_sal_is_wednesday_in_window() {
        let y = yazidi();
        for year in 1900..=2100 {
            let date = y.sere_sal(year);
            assert_eq!(Weekday::Wednesday, date.day_of_week(), "{year}");
            let earliest = Date::from_gregorian(year, 4, 26);
            let latest = Date::from_gregorian(year, 5, 2);
            assert!((earliest..=latest).contains(&date), "{year}: {date}");
        }
    }

    #[test]
    fn years_tile() {
        let y = yazidi();
        for year in 6650..=6850 {
            let len: u32 = y.month_lengths(year).iter().sum();
            assert_eq!(i64::from(len), y.new_year(year + 1) - y.new_year(year), "{year}");
        }
    }

    #[test]
    fn round_trip_every_day() {
        let y = yazidi();
        for year in 6650..=6850 {
            for (month, len) in (1..).zip(y.month_lengths(year)) {
                for day in 1..=len {
                    assert_eq!((year, month, day), y.from_date(y.to_date(year, month, day)));
                }
            }
        }
    }

    #[test]
    fn from_gregorian() {
        let y = yazidi();
        for ((gy, gm, gd), std) in [
            ((2024, 4, 14), (6774, 1, 1)),
            ((2024, 5, 1), (6774, 1, 18)),
            ((2024, 4, 13), (6773, 13, 6)),
            ((2023, 4, 13), (6772, 13, 5)),
        ] {
            assert_eq!(std, y.from_date(Date::from_gregorian(gy, gm, gd)));
        }
    }
}
