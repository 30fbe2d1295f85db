//! Samaritan calendar.
//!
//! Lunisolar: twelve months alternating 30 and 29 days, with a thirteenth
//! month of 29 days intercalated on a fixed 19-year schedule.
//!
//! Note: the year is anchored to a fixed Gregorian date (21 March by
//! default) instead of an observed new moon. This is an approximation, not
//! the computation used by the Samaritan community. Since a lunar year is
//! 354 or 383 days long, consecutive anchored years leave a gap after a
//! common year and overlap after a leap year.

use std::ops::RangeInclusive;

use crate::calendar::month_day_of;
use crate::config::SamaritanConfig;
use crate::date::Date;

/// Positions within the 19-year cycle that hold an extra month.
pub const LEAP_POSITIONS: [i32; 7] = [3, 6, 8, 11, 14, 17, 19];

#[derive(Debug, Clone)]
pub struct Samaritan {
    epoch_offset: i32,
    new_year_month: u32,
    new_year_day: u32,
    min_year: i32,
    max_year: i32,
}

impl Samaritan {
    pub fn new(config: &SamaritanConfig) -> Self {
        Self {
            epoch_offset: config.epoch_offset,
            new_year_month: config.new_year_month,
            new_year_day: config.new_year_day,
            min_year: config.min_year,
            max_year: config.max_year,
        }
    }

    /// Samaritan year minus Gregorian year.
    pub fn epoch_offset(&self) -> i32 {
        self.epoch_offset
    }

    /// Gregorian years accepted by festival queries.
    pub fn gregorian_years(&self) -> RangeInclusive<i32> {
        self.min_year..=self.max_year
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.min_year + self.epoch_offset..=self.max_year + self.epoch_offset
    }

    /// Position of `year` in the 19-year cycle, `1..=19`.
    pub fn cycle_position(year: i32) -> i32 {
        (year - 1).rem_euclid(19) + 1
    }

    /// # Example
    ///
    /// ```
    /// use liturgical_calendars::calendar::Samaritan;
    ///
    /// assert!(Samaritan::is_leap(5660));
    /// assert!(!Samaritan::is_leap(5661));
    /// ```
    pub fn is_leap(year: i32) -> bool {
        LEAP_POSITIONS.contains(&Self::cycle_position(year))
    }

    pub fn month_lengths(year: i32) -> Vec<u32> {
        let mut lengths: Vec<u32> = (0..12).map(|i| if i % 2 == 0 { 30 } else { 29 }).collect();
        if Self::is_leap(year) {
            lengths.push(29);
        }
        lengths
    }

    /// First day of `year`, i.e. the anchor date of its Gregorian year.
    pub fn new_year(&self, year: i32) -> Date {
        Date::from_gregorian(
            year - self.epoch_offset,
            self.new_year_month,
            self.new_year_day,
        )
    }

    pub fn to_date(&self, year: i32, month: u32, day: u32) -> Date {
        let before: u32 = Self::month_lengths(year)[..month as usize - 1].iter().sum();
        self.new_year(year) + (before + day - 1) as i32
    }

    /// Expresses `date` in the year whose anchor most recently precedes it.
    ///
    /// Returns `None` if `date` falls after the last month of that year but
    /// before the next anchor.
    pub fn from_date(&self, date: Date) -> Option<(i32, u32, u32)> {
        let mut year = date.gregorian().0 + self.epoch_offset;
        if date < self.new_year(year) {
            year -= 1;
        }
        let (month, day) = month_day_of(&Self::month_lengths(year), date - self.new_year(year))?;
        Some((year, month, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samaritan() -> Samaritan {
        Samaritan::new(&SamaritanConfig::default())
    }

    #[test]
    fn seven_leap_years_per_cycle() {
        for start in 5500..5600 {
            let leaps: Vec<i32> = (start..start + 19)
                .filter(|&y| Samaritan::is_leap(y))
                .map(Samaritan::cycle_position)
                .collect();
            assert_eq!(7, leaps.len(), "cycle starting {start}");
            let mut sorted = leaps.clone();
            sorted.sort();
            assert_eq!(LEAP_POSITIONS.to_vec(), sorted);
        }
    }

    #[test]
    fn month_tables() {
        let common = Samaritan::month_lengths(5661);
        assert_eq!(12, common.len());
        assert_eq!(354, common.iter().sum::<u32>());
        let leap = Samaritan::month_lengths(5660);
        assert_eq!(13, leap.len());
        assert_eq!(383, leap.iter().sum::<u32>());
        assert_eq!(29, leap[12]);
    }

    #[test]
    fn to_gregorian() {
        let s = samaritan();
        for ((y, m, d), std) in [
            ((5660, 1, 1), "2024-03-21"),
            ((5660, 1, 14), "2024-04-03"),
            ((5660, 3, 6), "2024-05-24"),
            ((5660, 7, 1), "2024-09-14"),
            ((5660, 13, 29), "2025-04-07"),
        ] {
            assert_eq!(std, s.to_date(y, m, d).iso_gregorian(), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn from_gregorian() {
        let s = samaritan();
        for ((y, m, d), std) in [
            ((2024, 3, 21), Some((5660, 1, 1))),
            ((2024, 4, 3), Some((5660, 1, 14))),
            ((2024, 3, 8), Some((5659, 12, 29))),
            ((2024, 3, 20), None),
            ((2025, 3, 20), Some((5660, 13, 11))),
            ((2025, 3, 21), Some((5661, 1, 1))),
            // 5661 is a common year: its 354 days end on 2026-03-09.
            ((2026, 3, 9), Some((5661, 12, 29))),
            ((2026, 3, 10), None),
            ((2026, 3, 20), None),
        ] {
            assert_eq!(std, s.from_date(Date::from_gregorian(y, m, d)), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn round_trip_within_anchored_span() {
        let s = samaritan();
        for year in 5536..=5736 {
            let next = s.new_year(year + 1);
            for (month, len) in (1..).zip(Samaritan::month_lengths(year)) {
                for day in 1..=len {
                    let date = s.to_date(year, month, day);
                    if date < next {
                        assert_eq!(Some((year, month, day)), s.from_date(date));
                    }
                }
            }
        }
    }
}
