//! Calendar models.
//!
//! Each supported calendar converts its own `(year, month, day)` to and from
//! a [`Date`]; no calendar converts to another except through `Date`.
//! [`CalendarModel`] is the closed set of models, dispatched by
//! [`CalendarId`].

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Serialize;

use crate::date::Date;
use crate::error::CalendarError;

pub mod coptic;
pub mod fmt;
pub mod samaritan;
pub mod yazidi;

pub use coptic::Coptic;
pub use samaritan::Samaritan;
pub use yazidi::Yazidi;

/// Identifies one of the supported calendars.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarId {
    Coptic,
    Samaritan,
    Yazidi,
    Gregorian,
}

impl CalendarId {
    /// Every identifier, in declaration order.
    pub const ALL: [CalendarId; 4] = [
        CalendarId::Coptic,
        CalendarId::Samaritan,
        CalendarId::Yazidi,
        CalendarId::Gregorian,
    ];

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            CalendarId::Coptic => "coptic",
            CalendarId::Samaritan => "samaritan",
            CalendarId::Yazidi => "yazidi",
            CalendarId::Gregorian => "gregorian",
        }
    }
}

impl std::fmt::Display for CalendarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when parsing an unknown calendar name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown calendar {0:?} (expected coptic, samaritan, yazidi or gregorian)")]
pub struct UnknownCalendar(pub String);

impl FromStr for CalendarId {
    type Err = UnknownCalendar;

    /// # Example
    ///
    /// ```
    /// use liturgical_calendars::CalendarId;
    ///
    /// assert_eq!(Ok(CalendarId::Coptic), "Coptic".parse());
    /// assert!("julian".parse::<CalendarId>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.name() == lower)
            .ok_or_else(|| UnknownCalendar(s.to_owned()))
    }
}

/// A date expressed in one calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct LocalDate {
    pub calendar: CalendarId,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl LocalDate {
    /// Human-readable form, e.g. `"14 Nisan 5660"`.
    pub fn label(&self) -> String {
        format!(
            "{} {}",
            fmt::day_month(self.calendar, self.month, self.day),
            self.year
        )
    }
}

impl std::fmt::Display for LocalDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.label())
    }
}

/// One calendar's rules. Built once from the configuration and never
/// modified afterwards.
#[derive(Debug, Clone)]
pub enum CalendarModel {
    Coptic(Coptic),
    Samaritan(Samaritan),
    Yazidi(Yazidi),
}

impl CalendarModel {
    pub fn id(&self) -> CalendarId {
        match self {
            CalendarModel::Coptic(_) => CalendarId::Coptic,
            CalendarModel::Samaritan(_) => CalendarId::Samaritan,
            CalendarModel::Yazidi(_) => CalendarId::Yazidi,
        }
    }

    /// Local years accepted by [`validate`](Self::validate).
    pub fn years(&self) -> RangeInclusive<i32> {
        match self {
            CalendarModel::Coptic(c) => c.years(),
            CalendarModel::Samaritan(s) => s.years(),
            CalendarModel::Yazidi(y) => y.years(),
        }
    }

    /// Gregorian years accepted by festival and anniversary queries.
    pub fn gregorian_years(&self) -> RangeInclusive<i32> {
        match self {
            CalendarModel::Coptic(c) => c.gregorian_years(),
            CalendarModel::Samaritan(s) => s.gregorian_years(),
            CalendarModel::Yazidi(y) => y.gregorian_years(),
        }
    }

    pub fn is_leap(&self, year: i32) -> bool {
        match self {
            CalendarModel::Coptic(_) => Coptic::is_leap(year),
            CalendarModel::Samaritan(_) => Samaritan::is_leap(year),
            CalendarModel::Yazidi(y) => y.is_leap(year),
        }
    }

    /// Lengths of the months of `year`, in order.
    pub fn month_lengths(&self, year: i32) -> Vec<u32> {
        match self {
            CalendarModel::Coptic(_) => Coptic::month_lengths(year),
            CalendarModel::Samaritan(_) => Samaritan::month_lengths(year),
            CalendarModel::Yazidi(y) => y.month_lengths(year),
        }
    }

    /// Checks that `(year, month, day)` is a date of this calendar within the
    /// supported years.
    ///
    /// Takes wide integers so that any parsed input can be judged; the checks
    /// run year, then month, then day.
    pub fn validate(&self, year: i64, month: i64, day: i64) -> Result<LocalDate, CalendarError> {
        let calendar = self.id();
        let year = check_year(calendar, self.years(), year)?;
        let lengths = self.month_lengths(year);
        let max = lengths.len() as u32;
        if !(1..=i64::from(max)).contains(&month) {
            return Err(CalendarError::MonthOutOfRange {
                calendar,
                year,
                month,
                max,
            });
        }
        let month = month as u32;
        let max = lengths[month as usize - 1];
        if !(1..=i64::from(max)).contains(&day) {
            return Err(CalendarError::DayOutOfRange {
                calendar,
                year,
                month,
                day,
                max,
            });
        }
        Ok(LocalDate {
            calendar,
            year,
            month,
            day: day as u32,
        })
    }

    /// Converts a local date, which must have passed
    /// [`validate`](Self::validate), to a [`Date`].
    pub fn to_date(&self, local: &LocalDate) -> Date {
        let LocalDate {
            year, month, day, ..
        } = *local;
        match self {
            CalendarModel::Coptic(c) => c.to_date(year, month, day),
            CalendarModel::Samaritan(s) => s.to_date(year, month, day),
            CalendarModel::Yazidi(y) => y.to_date(year, month, day),
        }
    }

    /// Expresses `date` in this calendar.
    ///
    /// Fails with [`CalendarError::NoLocalDate`] where the calendar leaves a
    /// gap (Samaritan), and with [`CalendarError::YearOutOfRange`] if the
    /// local year is not supported.
    pub fn from_date(&self, date: Date) -> Result<LocalDate, CalendarError> {
        let calendar = self.id();
        let (year, month, day) = match self {
            CalendarModel::Coptic(c) => Some(c.from_date(date)),
            CalendarModel::Samaritan(s) => s.from_date(date),
            CalendarModel::Yazidi(y) => Some(y.from_date(date)),
        }
        .ok_or_else(|| CalendarError::NoLocalDate {
            calendar,
            date: date.iso_gregorian(),
        })?;
        let year = check_year(calendar, self.years(), i64::from(year))?;
        Ok(LocalDate {
            calendar,
            year,
            month,
            day,
        })
    }
}

/// Narrows `year` to `i32` if it lies in `years`.
pub(crate) fn check_year(
    calendar: CalendarId,
    years: RangeInclusive<i32>,
    year: i64,
) -> Result<i32, CalendarError> {
    match i32::try_from(year) {
        Ok(y) if years.contains(&y) => Ok(y),
        _ => Err(CalendarError::YearOutOfRange {
            calendar,
            year,
            min: *years.start(),
            max: *years.end(),
        }),
    }
}

/// Splits a day offset from the start of a year into `(month, day)` using the
/// month table. Returns `None` if the offset lies past the last month.
pub(crate) fn month_day_of(lengths: &[u32], offset: i64) -> Option<(u32, u32)> {
    if offset < 0 {
        return None;
    }
    let mut rest = offset;
    for (idx, &len) in (1u32..).zip(lengths) {
        if rest < i64::from(len) {
            return Some((idx, rest as u32 + 1));
        }
        rest -= i64::from(len);
    }
    None
}
