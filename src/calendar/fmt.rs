//! Month names and date labels.

use std::borrow::Cow;

use super::CalendarId;

/// Coptic month names, Thout to the epagomenal month.
pub const COPTIC_MONTHS: [&str; 13] = [
    "Thout",
    "Paopi",
    "Hathor",
    "Koiak",
    "Tobi",
    "Meshir",
    "Paremhat",
    "Parmouti",
    "Pashons",
    "Paoni",
    "Epip",
    "Mesori",
    "Pi Kogi Enavot",
];

/// Samaritan month names, counted from the spring month. The thirteenth is
/// the intercalary month.
pub const SAMARITAN_MONTHS: [&str; 13] = [
    "Nisan", "Iyar", "Sivan", "Tammuz", "Av", "Elul", "Tishrei", "Heshvan", "Kislev", "Tevet",
    "Shevat", "Adar", "Adar II",
];

const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of `month` in `calendar`. Yazidi months have no fixed names and are
/// numbered.
///
/// # Example
///
/// ```
/// use liturgical_calendars::CalendarId;
/// use liturgical_calendars::calendar::fmt;
///
/// assert_eq!("Nisan", fmt::month(CalendarId::Samaritan, 1));
/// assert_eq!("Month 3", fmt::month(CalendarId::Yazidi, 3));
/// ```
///
/// # Panics
///
/// Panics if `month` is not a month of that calendar.
pub fn month(calendar: CalendarId, month: u32) -> Cow<'static, str> {
    let idx = month as usize - 1;
    match calendar {
        CalendarId::Coptic => COPTIC_MONTHS[idx].into(),
        CalendarId::Samaritan => SAMARITAN_MONTHS[idx].into(),
        CalendarId::Gregorian => GREGORIAN_MONTHS[idx].into(),
        CalendarId::Yazidi => {
            assert!((1..=13).contains(&month), "month {} not in 1..=13", month);
            format!("Month {month}").into()
        }
    }
}

/// Day and month, e.g. `"14 Nisan"`.
pub fn day_month(calendar: CalendarId, m: u32, d: u32) -> String {
    format!("{d} {}", month(calendar, m))
}

/// Label for an event lasting `duration` days from `d`, e.g. `"15-21 Nisan"`.
/// Single-day events are labelled as by [`day_month`].
pub fn span(calendar: CalendarId, m: u32, d: u32, duration: u32) -> String {
    if duration <= 1 {
        return day_month(calendar, m, d);
    }
    format!("{d}-{} {}", d + duration - 1, month(calendar, m))
}
