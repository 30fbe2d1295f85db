//! Calendar-independent day count shared by every calendar.

use std::fmt;
use std::ops::{Add, RangeInclusive, Sub};

use serde::{Deserialize, Serialize, Serializer};

/// A calendar-independent date, i.e. a day count shared by every calendar in
/// this crate.
///
/// Internally this is a Julian day number (JDN), the integer day whose noon
/// the astronomical Julian date names. It is signed, so any proleptic
/// Gregorian year is representable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: i64,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: i64) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i64 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc. The month and day are not checked; see
    /// [`days_in_month`] for that.
    ///
    /// # Example
    ///
    /// ```
    /// use liturgical_calendars::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1);
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Self {
        let (mut y, mut m) = (i64::from(year), i64::from(month));
        if m <= 2 {
            y -= 1;
            m += 12;
        }
        let a = y.div_euclid(100);
        let b = 2 - a + a.div_euclid(4);
        Self::from_jdn(
            (1461 * (y + 4716)).div_euclid(4) + (306 * (m + 1)).div_euclid(10) + i64::from(day)
                + b
                - 1524,
        )
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use liturgical_calendars::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, u32, u32) {
        let z = self.jdn;
        let alpha = (4 * z - 7468865).div_euclid(146097);
        let a = z + 1 + alpha - alpha.div_euclid(4);
        let b = a + 1524;
        let c = (20 * b - 2442).div_euclid(7305);
        let d = (1461 * c).div_euclid(4);
        let e = ((b - d) * 10000).div_euclid(306001);
        let day = b - d - (306001 * e).div_euclid(10000);
        let month = if e < 14 { e - 1 } else { e - 13 };
        let year = if month > 2 { c - 4716 } else { c - 4715 };
        (year as i32, month as u32, day as u32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use liturgical_calendars::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1);
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }
    /// Parses a `YYYY-MM-DD` Gregorian date, checking month and day ranges.
    ///
    /// Returns `None` if the text is malformed or the date does not exist.
    pub fn from_iso_gregorian(text: &str) -> Option<Self> {
        let mut it = text.trim().splitn(3, '-');
        let y: i32 = it.next()?.parse().ok()?;
        let m: u32 = it.next()?.parse().ok()?;
        let d: u32 = it.next()?.parse().ok()?;
        if !(1..=12).contains(&m) || d < 1 || d > days_in_month(y, m) {
            return None;
        }
        Some(Self::from_gregorian(y, m, d))
    }

    /// Returns the day of week of the date.
    ///
    /// # Example
    ///
    /// ```
    /// use liturgical_calendars::{Date, Weekday};
    ///
    /// let date = Date::from_gregorian(2000, 1, 1);
    /// assert_eq!(Weekday::Saturday, date.day_of_week());
    /// ```
    pub fn day_of_week(&self) -> Weekday {
        Weekday::from_iso(self.jdn.rem_euclid(7) as u32 + 1)
    }
    /// Returns the first date on or after `self` falling on `weekday`.
    pub fn next_or_same(&self, weekday: Weekday) -> Date {
        let ahead = (i64::from(weekday.iso()) - i64::from(self.day_of_week().iso())).rem_euclid(7);
        Date::from_jdn(self.jdn + ahead)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.iso_gregorian())
    }
}

/// Serialized as the ISO 8601 Gregorian date.
impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.iso_gregorian())
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn + i64::from(rhs))
    }
}
impl Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

/// Day of week, numbered the ISO-8601 way (`1..=7` for Monday through Sunday).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Maps an ISO-8601 weekday number onto a `Weekday`, wrapping modulo 7.
    pub fn from_iso(num: u32) -> Self {
        Self::ALL[((num + 6) % 7) as usize]
    }
    /// Returns the ISO-8601 number of the weekday (Monday is `1`).
    pub fn iso(&self) -> u32 {
        *self as u32 + 1
    }
    /// Returns the English name of the weekday.
    pub fn name(&self) -> &'static str {
        const NAMES: &[&str] = &[
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ];
        NAMES[*self as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

impl From<bool> for YearType {
    fn from(leap: bool) -> Self {
        if leap { Self::Leap } else { Self::Common }
    }
}

/// Gregorian years the crate works in, both as input and as the reach of
/// any projection.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// Number of days in a Gregorian month. `month` must be in `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if YearType::from_gregorian(year).is_leap() => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
