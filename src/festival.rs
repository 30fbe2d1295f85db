//! Festival and anniversary projection.
//!
//! Festivals are fixed `(month, day)` positions inside a local year; projecting
//! one means converting that position of the right local year into a
//! Gregorian [`Date`]. Coptic movable feasts hang off Easter instead, which is
//! computed with the Julian computus.

use serde::Serialize;

use crate::calendar::{CalendarId, CalendarModel, Coptic, LocalDate, Samaritan, Yazidi, fmt};
use crate::date::{Date, SUPPORTED_YEARS, Weekday};

/// A festival defined by its position inside the local year.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Festival {
    pub name: &'static str,
    pub month: u32,
    pub day: u32,
    pub duration_days: u32,
}

const fn festival(name: &'static str, month: u32, day: u32, duration_days: u32) -> Festival {
    Festival {
        name,
        month,
        day,
        duration_days,
    }
}

/// The seven Samaritan pilgrimage and holy days.
pub const SAMARITAN_FESTIVALS: [Festival; 7] = [
    festival("Passover", 1, 14, 1),
    festival("Unleavened Bread", 1, 15, 7),
    festival("Shavuot", 3, 6, 1),
    festival("Rosh Hashanah", 7, 1, 1),
    festival("Yom Kippur", 7, 10, 1),
    festival("Sukkot", 7, 15, 7),
    festival("Shemini Atzeret", 7, 22, 1),
];

/// Coptic feasts with a fixed date.
pub const COPTIC_FIXED_FEASTS: [Festival; 11] = [
    festival("Nayrouz", 1, 1, 1),
    festival("Finding of the True Cross", 1, 17, 1),
    festival("Nativity of the Virgin Mary", 2, 1, 1),
    festival("Nativity", 4, 29, 1),
    festival("Theophany", 5, 11, 1),
    festival("Presentation of Christ", 6, 8, 1),
    festival("Annunciation", 7, 29, 1),
    festival("Entry into Egypt", 9, 24, 1),
    festival("Apostles' Fast", 10, 16, 1),
    festival("Transfiguration", 12, 13, 1),
    festival("Assumption of the Virgin", 12, 16, 1),
];

/// Coptic feasts placed relative to Easter, as `(name, days after Easter)`.
pub const COPTIC_MOVABLE_FEASTS: [(&str, i32); 6] = [
    ("Great Lent", -55),
    ("Palm Sunday", -7),
    ("Good Friday", -2),
    ("Easter", 0),
    ("Ascension", 39),
    ("Pentecost", 49),
];

/// Whether a festival has a fixed local date or follows Easter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeastKind {
    Fixed,
    Movable,
}

/// A festival projected onto one Gregorian date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FestivalDate {
    pub name: &'static str,
    /// Local date of the first day, e.g. `"15-21 Nisan"` for a week-long feast.
    pub local_label: String,
    pub local_year: i32,
    pub gregorian: Date,
    /// Last day, equal to `gregorian` for one-day festivals.
    pub last_day: Date,
    pub day_of_week: Weekday,
    pub kind: FeastKind,
}

/// One year's occurrence of a recurring anniversary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// Gregorian year.
    pub year: i32,
    pub local_year: i32,
    pub gregorian: Date,
    pub day_of_week: Weekday,
}

/// Date of Easter by the Julian computus, moved into the Gregorian calendar
/// by adding `julian_lag_days`.
///
/// # Example
///
/// ```
/// use liturgical_calendars::festival::julian_easter;
///
/// assert_eq!("2024-05-05", julian_easter(2024, 13).iso_gregorian());
/// ```
pub fn julian_easter(year: i32, julian_lag_days: i32) -> Date {
    let a = year.rem_euclid(4);
    let b = year.rem_euclid(7);
    let c = year.rem_euclid(19);
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34).rem_euclid(7);
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;
    Date::from_gregorian(year, month as u32, day as u32) + julian_lag_days
}

/// Projects calendar-relative festivals onto Gregorian dates.
#[derive(Debug, Clone, Copy)]
pub struct FestivalProjector<'a> {
    model: &'a CalendarModel,
    julian_lag_days: i32,
}

impl<'a> FestivalProjector<'a> {
    pub fn new(model: &'a CalendarModel, julian_lag_days: i32) -> Self {
        Self {
            model,
            julian_lag_days,
        }
    }

    /// Projects `festivals` as they fall in `local_year`.
    pub fn project(&self, local_year: i32, festivals: &[Festival]) -> Vec<FestivalDate> {
        let calendar = self.model.id();
        festivals
            .iter()
            .map(|f| {
                let first = self.model.to_date(&LocalDate {
                    calendar,
                    year: local_year,
                    month: f.month,
                    day: f.day,
                });
                FestivalDate {
                    name: f.name,
                    local_label: fmt::span(calendar, f.month, f.day, f.duration_days),
                    local_year,
                    gregorian: first,
                    last_day: first + (f.duration_days.max(1) as i32 - 1),
                    day_of_week: first.day_of_week(),
                    kind: FeastKind::Fixed,
                }
            })
            .collect()
    }

    /// Festivals of the local year that is labelled `gregorian_year`.
    ///
    /// Returns `None` for calendars without a festival table.
    pub fn festivals(&self, gregorian_year: i32) -> Option<Vec<FestivalDate>> {
        match self.model {
            CalendarModel::Samaritan(s) => Some(self.samaritan(s, gregorian_year)),
            CalendarModel::Coptic(c) => Some(self.coptic(c, gregorian_year)),
            CalendarModel::Yazidi(_) => None,
        }
    }

    /// The calendar's new-year anniversary for `count` consecutive Gregorian
    /// years starting at `gregorian_year`, stopping after 9999.
    ///
    /// Returns `None` for calendars without such an anniversary.
    pub fn occurrences(&self, gregorian_year: i32, count: u32) -> Option<Vec<Occurrence>> {
        match self.model {
            CalendarModel::Yazidi(y) => Some(sere_sal(y, gregorian_year, count)),
            CalendarModel::Coptic(_) | CalendarModel::Samaritan(_) => None,
        }
    }

    fn samaritan(&self, samaritan: &Samaritan, gregorian_year: i32) -> Vec<FestivalDate> {
        let local_year = gregorian_year + samaritan.epoch_offset();
        tracing::trace!(gregorian_year, local_year, "projecting samaritan festivals");
        self.project(local_year, &SAMARITAN_FESTIVALS)
    }

    // Fixed feasts of the Coptic year labelled `gregorian_year`, plus the
    // movable ones around that Gregorian year's Easter, sorted by date.
    fn coptic(&self, coptic: &Coptic, gregorian_year: i32) -> Vec<FestivalDate> {
        let coptic_year = coptic.year_for_gregorian(gregorian_year);
        let mut feasts = self.project(coptic_year, &COPTIC_FIXED_FEASTS);
        let easter = julian_easter(gregorian_year, self.julian_lag_days);
        tracing::trace!(coptic_year, %easter, "projecting coptic feasts");
        feasts.extend(COPTIC_MOVABLE_FEASTS.iter().map(|&(name, offset)| {
            let date = easter + offset;
            let (year, month, day) = coptic.from_date(date);
            FestivalDate {
                name,
                local_label: fmt::day_month(CalendarId::Coptic, month, day),
                local_year: year,
                gregorian: date,
                last_day: date,
                day_of_week: date.day_of_week(),
                kind: FeastKind::Movable,
            }
        }));
        feasts.sort_by_key(|f| f.gregorian);
        feasts
    }
}

// Each year is computed on its own since the weekday rule does not repeat
// with a fixed period. The series stops at the last supported year.
fn sere_sal(yazidi: &Yazidi, gregorian_year: i32, count: u32) -> Vec<Occurrence> {
    (gregorian_year..=*SUPPORTED_YEARS.end())
        .take(count as usize)
        .map(|year| {
            let date = yazidi.sere_sal(year);
            Occurrence {
                year,
                local_year: yazidi.year_of(year),
                gregorian: date,
                day_of_week: date.day_of_week(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    #[test]
    fn easter_dates() {
        for (year, std) in [
            (2023, "2023-04-16"),
            (2024, "2024-05-05"),
            (2025, "2025-04-20"),
        ] {
            assert_eq!(std, julian_easter(year, 13).iso_gregorian(), "{year}");
            assert_eq!(Weekday::Sunday, julian_easter(year, 13).day_of_week());
        }
    }

    #[test]
    fn samaritan_2024() {
        let config = EngineConfig::default();
        let model = CalendarModel::Samaritan(Samaritan::new(&config.samaritan));
        let projector = FestivalProjector::new(&model, 13);
        let feasts = projector.festivals(2024).unwrap();
        let got: Vec<_> = feasts
            .iter()
            .map(|f| (f.name, f.local_label.as_str(), f.gregorian.iso_gregorian()))
            .collect();
        assert_eq!(
            vec![
                ("Passover", "14 Nisan", "2024-04-03".to_owned()),
                ("Unleavened Bread", "15-21 Nisan", "2024-04-04".to_owned()),
                ("Shavuot", "6 Sivan", "2024-05-24".to_owned()),
                ("Rosh Hashanah", "1 Tishrei", "2024-09-14".to_owned()),
                ("Yom Kippur", "10 Tishrei", "2024-09-23".to_owned()),
                ("Sukkot", "15-21 Tishrei", "2024-09-28".to_owned()),
                ("Shemini Atzeret", "22 Tishrei", "2024-10-05".to_owned()),
            ],
            got
        );
        assert_eq!("2024-04-10", feasts[1].last_day.iso_gregorian());
        assert!(feasts.iter().all(|f| f.local_year == 5660));
    }

    #[test]
    fn coptic_2024() {
        let config = EngineConfig::default();
        let model = CalendarModel::Coptic(Coptic::new(&config.coptic));
        let projector = FestivalProjector::new(&model, 13);
        let feasts = projector.festivals(2024).unwrap();
        assert_eq!(17, feasts.len());
        assert!(feasts.windows(2).all(|w| w[0].gregorian <= w[1].gregorian));

        let find = |name: &str| feasts.iter().find(|f| f.name == name).unwrap();
        assert_eq!("2023-09-11", find("Nayrouz").gregorian.iso_gregorian());
        assert_eq!("2024-01-07", find("Nativity").gregorian.iso_gregorian());
        let easter = find("Easter");
        assert_eq!("2024-05-05", easter.gregorian.iso_gregorian());
        assert_eq!(FeastKind::Movable, easter.kind);
        assert_eq!("2024-03-11", find("Great Lent").gregorian.iso_gregorian());
        assert_eq!("2024-06-23", find("Pentecost").gregorian.iso_gregorian());
    }

    #[test]
    fn sere_sal_series() {
        let config = EngineConfig::default();
        let model = CalendarModel::Yazidi(Yazidi::new(&config.yazidi, 13));
        let projector = FestivalProjector::new(&model, 13);
        assert_eq!(None, projector.festivals(2024));
        assert_eq!(2, projector.occurrences(9998, u32::MAX).unwrap().len());
        let series = projector.occurrences(2024, 3).unwrap();
        let got: Vec<_> = series
            .iter()
            .map(|o| (o.year, o.local_year, o.gregorian.iso_gregorian()))
            .collect();
        assert_eq!(
            vec![
                (2024, 6774, "2024-05-01".to_owned()),
                (2025, 6775, "2025-04-30".to_owned()),
                (2026, 6776, "2026-04-29".to_owned()),
            ],
            got
        );
    }
}
