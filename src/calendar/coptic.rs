//! Coptic calendar.
//!
//! Twelve months of 30 days followed by the epagomenal month of 5 days, 6
//! in a leap year. Leap years follow the Julian four-year cycle, falling on
//! the years before those divisible by four.

use std::ops::RangeInclusive;

use crate::config::CopticConfig;
use crate::date::Date;

#[derive(Debug, Clone)]
pub struct Coptic {
    epoch: Date,
    gregorian_offset: i32,
    min_year: i32,
    max_year: i32,
}

impl Coptic {
    pub fn new(config: &CopticConfig) -> Self {
        Self {
            epoch: Date::from_jdn(config.epoch_jdn),
            gregorian_offset: config.gregorian_offset,
            min_year: config.min_year,
            max_year: config.max_year,
        }
    }

    /// Coptic year whose holy days are listed under `gregorian_year`. It
    /// starts in September of the previous Gregorian year.
    pub fn year_for_gregorian(&self, gregorian_year: i32) -> i32 {
        gregorian_year - self.gregorian_offset
    }

    /// Gregorian years accepted by holy-day queries.
    pub fn gregorian_years(&self) -> RangeInclusive<i32> {
        self.min_year + self.gregorian_offset..=self.max_year + self.gregorian_offset
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.min_year..=self.max_year
    }

    /// # Example
    ///
    /// ```
    /// use liturgical_calendars::calendar::Coptic;
    ///
    /// assert!(Coptic::is_leap(1739));
    /// assert!(!Coptic::is_leap(1740));
    /// ```
    pub fn is_leap(year: i32) -> bool {
        year.rem_euclid(4) == 3
    }

    pub fn month_lengths(year: i32) -> Vec<u32> {
        let mut lengths = vec![30; 12];
        lengths.push(if Self::is_leap(year) { 6 } else { 5 });
        lengths
    }

    /// First day (1 Thout) of `year`.
    pub fn new_year(&self, year: i32) -> Date {
        let y = i64::from(year);
        Date::from_jdn(self.epoch.jdn() + (y - 1) * 365 + y.div_euclid(4))
    }

    pub fn to_date(&self, year: i32, month: u32, day: u32) -> Date {
        self.new_year(year) + ((month as i32 - 1) * 30 + day as i32 - 1)
    }

    /// Inverse of [`to_date`](Self::to_date), by estimating the year from
    /// the mean year length and stepping until the enclosing 1 Thout is
    /// found.
    pub fn from_date(&self, date: Date) -> (i32, u32, u32) {
        let mut year = (4 * (date - self.epoch) + 1463).div_euclid(1461) as i32;
        while self.new_year(year + 1) <= date {
            year += 1;
        }
        while self.new_year(year) > date {
            year -= 1;
        }
        let offset = date - self.new_year(year);
        let month = (offset / 30) as u32 + 1;
        let day = (offset % 30) as u32 + 1;
        (year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coptic() -> Coptic {
        Coptic::new(&CopticConfig::default())
    }

    #[test]
    fn to_gregorian() {
        let c = coptic();
        for ((y, m, d), std) in [
            ((1700, 1, 1), "1983-09-11"),
            ((1, 1, 1), "0284-08-28"),
            ((1740, 4, 29), "2024-01-07"),
            ((1740, 5, 11), "2024-01-19"),
            ((1739, 13, 6), "2023-09-10"),
        ] {
            assert_eq!(std, c.to_date(y, m, d).iso_gregorian(), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn leap_only_changes_last_month() {
        for year in 1..=400 {
            let lengths = Coptic::month_lengths(year);
            assert_eq!(13, lengths.len());
            assert!(lengths[..12].iter().all(|&l| l == 30));
            assert_eq!(Coptic::is_leap(year), lengths[12] == 6, "year {year}");
            assert_eq!(year % 4 == 3, Coptic::is_leap(year));
        }
    }

    #[test]
    fn years_are_contiguous() {
        let c = coptic();
        for year in 1..9999 {
            let len: u32 = Coptic::month_lengths(year).iter().sum();
            assert_eq!(i64::from(len), c.new_year(year + 1) - c.new_year(year));
        }
    }

    #[test]
    fn round_trip_every_day() {
        let c = coptic();
        for year in 1..=9999 {
            for (month, len) in (1..).zip(Coptic::month_lengths(year)) {
                for day in 1..=len {
                    let date = c.to_date(year, month, day);
                    assert_eq!((year, month, day), c.from_date(date));
                }
            }
        }
    }
}
