//! Conversion engine.
//!
//! [`Engine`] is the single entry point for callers: it owns one
//! [`CalendarModel`] per calendar, validates every request before computing
//! anything, and builds a fresh [`ConversionResult`] (or festival list) per
//! call. It holds no mutable state, so one instance can be shared freely
//! between threads.

use std::sync::LazyLock;

use serde::Serialize;
use tracing::instrument;

use crate::calendar::{CalendarId, CalendarModel, Coptic, LocalDate, Samaritan, Yazidi, check_year};
use crate::config::EngineConfig;
use crate::date::{Date, SUPPORTED_YEARS, Weekday, YearType, days_in_month};
use crate::error::{CalendarError, ConfigError, Field};
use crate::festival::{FestivalDate, FestivalProjector, Occurrence};

/// Outcome of a single-date request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    /// Calendar the request was made in.
    pub calendar: CalendarId,
    pub gregorian: Date,
    /// The date in `calendar`, or `None` when `calendar` is Gregorian.
    pub local: Option<LocalDate>,
    pub day_of_week: Weekday,
    /// Whether the year of `local` (or the Gregorian year) is a leap year of
    /// its calendar.
    pub is_leap_year: bool,
    /// Days from the reference date to `gregorian`; negative once passed.
    /// Only set by [`Engine::new_year`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until: Option<i64>,
}

/// Validating front end over the calendar models.
///
/// # Example
///
/// ```
/// use liturgical_calendars::{CalendarId, Engine};
///
/// let engine = Engine::global();
/// let result = engine.convert(CalendarId::Coptic, 1700, 1, 1).unwrap();
/// assert_eq!("1983-09-11", result.gregorian.iso_gregorian());
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    coptic: CalendarModel,
    samaritan: CalendarModel,
    yazidi: CalendarModel,
}

static GLOBAL: LazyLock<Engine> = LazyLock::new(|| Engine::build(EngineConfig::default()));

impl Engine {
    /// Builds an engine after checking `config`.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Shared engine with the default configuration.
    pub fn global() -> &'static Engine {
        &GLOBAL
    }

    fn build(config: EngineConfig) -> Self {
        Self {
            coptic: CalendarModel::Coptic(Coptic::new(&config.coptic)),
            samaritan: CalendarModel::Samaritan(Samaritan::new(&config.samaritan)),
            yazidi: CalendarModel::Yazidi(Yazidi::new(&config.yazidi, config.julian_lag_days)),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Model for `calendar`, or `None` for Gregorian, which has none.
    pub fn model(&self, calendar: CalendarId) -> Option<&CalendarModel> {
        match calendar {
            CalendarId::Coptic => Some(&self.coptic),
            CalendarId::Samaritan => Some(&self.samaritan),
            CalendarId::Yazidi => Some(&self.yazidi),
            CalendarId::Gregorian => None,
        }
    }

    fn model_for(
        &self,
        calendar: CalendarId,
        operation: &'static str,
    ) -> Result<&CalendarModel, CalendarError> {
        self.model(calendar)
            .ok_or(CalendarError::Unsupported {
                calendar,
                operation,
            })
    }

    fn projector<'a>(&self, model: &'a CalendarModel) -> FestivalProjector<'a> {
        FestivalProjector::new(model, self.config.julian_lag_days)
    }

    /// Converts a local date to Gregorian.
    ///
    /// Gregorian input is validated and echoed back.
    pub fn convert(
        &self,
        calendar: CalendarId,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<ConversionResult, CalendarError> {
        self.convert_wide(calendar, year.into(), month.into(), day.into())
    }

    /// Like [`convert`](Self::convert), with the fields given as text.
    ///
    /// # Example
    ///
    /// ```
    /// use liturgical_calendars::{CalendarId, Engine, ErrorKind};
    ///
    /// let err = Engine::global()
    ///     .convert_input(CalendarId::Coptic, "1700", "one", "1")
    ///     .unwrap_err();
    /// assert_eq!(ErrorKind::InvalidNumber, err.kind());
    /// ```
    pub fn convert_input(
        &self,
        calendar: CalendarId,
        year: &str,
        month: &str,
        day: &str,
    ) -> Result<ConversionResult, CalendarError> {
        let year = parse_field(Field::Year, year)?;
        let month = parse_field(Field::Month, month)?;
        let day = parse_field(Field::Day, day)?;
        self.convert_wide(calendar, year, month, day)
    }

    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    fn convert_wide(
        &self,
        calendar: CalendarId,
        year: i64,
        month: i64,
        day: i64,
    ) -> Result<ConversionResult, CalendarError> {
        let Some(model) = self.model(calendar) else {
            let gregorian = validate_gregorian(year, month, day)?;
            let (y, _, _) = gregorian.gregorian();
            return Ok(ConversionResult {
                calendar,
                gregorian,
                local: None,
                day_of_week: gregorian.day_of_week(),
                is_leap_year: YearType::from_gregorian(y).is_leap(),
                days_until: None,
            });
        };
        let local = model.validate(year, month, day)?;
        let gregorian = model.to_date(&local);
        Ok(ConversionResult {
            calendar,
            gregorian,
            local: Some(local),
            day_of_week: gregorian.day_of_week(),
            is_leap_year: model.is_leap(local.year),
            days_until: None,
        })
    }

    /// Expresses a Gregorian date in `calendar`.
    ///
    /// # Example
    ///
    /// ```
    /// use liturgical_calendars::{CalendarId, Engine};
    ///
    /// let result = Engine::global()
    ///     .to_local(CalendarId::Coptic, 2024, 1, 7)
    ///     .unwrap();
    /// assert_eq!("29 Koiak 1740", result.local.unwrap().label());
    /// ```
    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn to_local(
        &self,
        calendar: CalendarId,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<ConversionResult, CalendarError> {
        let gregorian = validate_gregorian(year.into(), month.into(), day.into())?;
        let Some(model) = self.model(calendar) else {
            return self.convert(calendar, year, month, day);
        };
        let local = model.from_date(gregorian)?;
        Ok(ConversionResult {
            calendar,
            gregorian,
            local: Some(local),
            day_of_week: gregorian.day_of_week(),
            is_leap_year: model.is_leap(local.year),
            days_until: None,
        })
    }

    /// Festivals of `calendar` for `gregorian_year`, in date order.
    ///
    /// Supported for Samaritan and Coptic.
    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn festivals_for_year(
        &self,
        calendar: CalendarId,
        gregorian_year: i32,
    ) -> Result<Vec<FestivalDate>, CalendarError> {
        const OPERATION: &str = "festivals";
        let model = self.model_for(calendar, OPERATION)?;
        check_year(calendar, model.gregorian_years(), gregorian_year.into())?;
        self.projector(model)
            .festivals(gregorian_year)
            .ok_or(CalendarError::Unsupported {
                calendar,
                operation: OPERATION,
            })
    }

    /// The seven Samaritan festivals of `year`.
    ///
    /// # Example
    ///
    /// ```
    /// use liturgical_calendars::Engine;
    ///
    /// let festivals = Engine::global().festivals(2024).unwrap();
    /// assert_eq!("Passover", festivals[0].name);
    /// assert_eq!("14 Nisan", festivals[0].local_label);
    /// ```
    pub fn festivals(&self, year: i32) -> Result<Vec<FestivalDate>, CalendarError> {
        self.festivals_for_year(CalendarId::Samaritan, year)
    }

    /// The new-year anniversary of `calendar` for `count` consecutive
    /// Gregorian years from `gregorian_year`.
    ///
    /// Supported for Yazidi. Years past the calendar's span are still
    /// projected with the same rule, but the last one may not pass 9999.
    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn next_occurrence(
        &self,
        calendar: CalendarId,
        gregorian_year: i32,
        count: u32,
    ) -> Result<Vec<Occurrence>, CalendarError> {
        const OPERATION: &str = "new-year projection";
        let model = self.model_for(calendar, OPERATION)?;
        check_year(calendar, model.gregorian_years(), gregorian_year.into())?;
        let max = SUPPORTED_YEARS
            .end()
            .saturating_sub(gregorian_year)
            .saturating_add(1)
            .max(0) as u32;
        if !(1..=max).contains(&count) {
            return Err(CalendarError::InvalidCount { count, max });
        }
        self.projector(model)
            .occurrences(gregorian_year, count)
            .ok_or(CalendarError::Unsupported {
                calendar,
                operation: OPERATION,
            })
    }

    /// Sere Sal for `count` years from `year`.
    pub fn next_new_year(&self, year: i32, count: u32) -> Result<Vec<Occurrence>, CalendarError> {
        self.next_occurrence(CalendarId::Yazidi, year, count)
    }

    /// Sere Sal of `gregorian_year`, with the number of days left from
    /// `today`.
    ///
    /// # Example
    ///
    /// ```
    /// use liturgical_calendars::{Date, Engine};
    ///
    /// let today = Date::from_gregorian(2024, 4, 20);
    /// let result = Engine::global().new_year(2024, today).unwrap();
    /// assert_eq!("2024-05-01", result.gregorian.iso_gregorian());
    /// assert_eq!(Some(11), result.days_until);
    /// ```
    #[instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn new_year(
        &self,
        gregorian_year: i32,
        today: Date,
    ) -> Result<ConversionResult, CalendarError> {
        let occurrence = self
            .next_new_year(gregorian_year, 1)?
            .into_iter()
            .next()
            .ok_or(CalendarError::InvalidCount { count: 1, max: 0 })?;
        let gregorian = occurrence.gregorian;
        let local = self.yazidi.from_date(gregorian)?;
        Ok(ConversionResult {
            calendar: CalendarId::Yazidi,
            gregorian,
            local: Some(local),
            day_of_week: occurrence.day_of_week,
            is_leap_year: self.yazidi.is_leap(local.year),
            days_until: Some(gregorian - today),
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::build(EngineConfig::default())
    }
}

fn parse_field(field: Field, input: &str) -> Result<i64, CalendarError> {
    input
        .trim()
        .parse()
        .map_err(|_| CalendarError::InvalidNumber {
            field,
            input: input.to_owned(),
        })
}

fn validate_gregorian(year: i64, month: i64, day: i64) -> Result<Date, CalendarError> {
    let calendar = CalendarId::Gregorian;
    let year = check_year(calendar, SUPPORTED_YEARS, year)?;
    if !(1..=12).contains(&month) {
        return Err(CalendarError::MonthOutOfRange {
            calendar,
            year,
            month,
            max: 12,
        });
    }
    let month = month as u32;
    let max = days_in_month(year, month);
    if !(1..=i64::from(max)).contains(&day) {
        return Err(CalendarError::DayOutOfRange {
            calendar,
            year,
            month,
            day,
            max,
        });
    }
    Ok(Date::from_gregorian(year, month, day as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn engine() -> Engine {
        Engine::default()
    }

    #[test]
    fn convert_to_gregorian() {
        let e = engine();
        for ((calendar, y, m, d), std) in [
            ((CalendarId::Coptic, 1700, 1, 1), "1983-09-11"),
            ((CalendarId::Coptic, 1740, 4, 29), "2024-01-07"),
            ((CalendarId::Samaritan, 5660, 1, 14), "2024-04-03"),
            ((CalendarId::Samaritan, 5660, 13, 1), "2025-03-10"),
            ((CalendarId::Yazidi, 6774, 1, 1), "2024-04-14"),
            ((CalendarId::Gregorian, 2024, 2, 29), "2024-02-29"),
        ] {
            let result = e.convert(calendar, y, m, d).unwrap();
            assert_eq!(std, result.gregorian.iso_gregorian(), "{calendar} {y}-{m}-{d}");
            assert_eq!(result.gregorian.day_of_week(), result.day_of_week);
            assert_eq!(None, result.days_until);
        }
    }

    #[test]
    fn convert_reports_leap_years() {
        let e = engine();
        for ((calendar, y, m, d), leap) in [
            ((CalendarId::Coptic, 1739, 13, 6), true),
            ((CalendarId::Coptic, 1740, 1, 1), false),
            ((CalendarId::Samaritan, 5660, 13, 1), true),
            ((CalendarId::Samaritan, 5659, 1, 1), false),
            ((CalendarId::Gregorian, 2000, 1, 1), true),
            ((CalendarId::Gregorian, 1900, 1, 1), false),
        ] {
            assert_eq!(leap, e.convert(calendar, y, m, d).unwrap().is_leap_year);
        }
    }

    #[test]
    fn convert_rejects() {
        let e = engine();
        for ((calendar, y, m, d), kind) in [
            ((CalendarId::Coptic, 0, 1, 1), ErrorKind::YearOutOfRange),
            ((CalendarId::Coptic, 10000, 1, 1), ErrorKind::YearOutOfRange),
            ((CalendarId::Coptic, 1700, 14, 1), ErrorKind::MonthOutOfRange),
            ((CalendarId::Coptic, 1700, 0, 1), ErrorKind::MonthOutOfRange),
            ((CalendarId::Coptic, 1700, 13, 6), ErrorKind::DayOutOfRange),
            ((CalendarId::Coptic, 1700, 1, 31), ErrorKind::DayOutOfRange),
            ((CalendarId::Samaritan, 5535, 1, 1), ErrorKind::YearOutOfRange),
            ((CalendarId::Samaritan, 5659, 13, 1), ErrorKind::MonthOutOfRange),
            ((CalendarId::Samaritan, 5660, 2, 30), ErrorKind::DayOutOfRange),
            ((CalendarId::Yazidi, 6649, 1, 1), ErrorKind::YearOutOfRange),
            ((CalendarId::Gregorian, 2023, 2, 29), ErrorKind::DayOutOfRange),
            ((CalendarId::Gregorian, 0, 1, 1), ErrorKind::YearOutOfRange),
        ] {
            let err = e.convert(calendar, y, m, d).unwrap_err();
            assert_eq!(kind, err.kind(), "{calendar} {y}-{m}-{d}: {err}");
        }
    }

    #[test]
    fn convert_text_input() {
        let e = engine();
        let result = e
            .convert_input(CalendarId::Coptic, " 1700 ", "1", "1")
            .unwrap();
        assert_eq!("1983-09-11", result.gregorian.iso_gregorian());

        for ((y, m, d), std) in [
            (("1700", "1", "x"), Ok(Field::Day)),
            (("", "1", "1"), Ok(Field::Year)),
            (("1700", "1.5", "1"), Ok(Field::Month)),
            (("1700", "-3", "1"), Err(ErrorKind::MonthOutOfRange)),
            (("99999999999", "1", "1"), Err(ErrorKind::YearOutOfRange)),
        ] {
            let err = e.convert_input(CalendarId::Coptic, y, m, d).unwrap_err();
            match (std, err) {
                (Ok(field), CalendarError::InvalidNumber { field: got, .. }) => {
                    assert_eq!(field, got)
                }
                (Err(kind), err) => assert_eq!(kind, err.kind()),
                (std, err) => panic!("expected {std:?}, got {err:?}"),
            }
        }
    }

    #[test]
    fn to_local_round_trips() {
        let e = engine();
        for calendar in [CalendarId::Coptic, CalendarId::Yazidi, CalendarId::Samaritan] {
            let date = Date::from_gregorian(2024, 5, 1);
            let (y, m, d) = date.gregorian();
            let result = e.to_local(calendar, y, m, d).unwrap();
            let local = result.local.unwrap();
            let back = e.convert(calendar, local.year, local.month, local.day).unwrap();
            assert_eq!(date, back.gregorian, "{calendar}");
        }
    }

    #[test]
    fn to_local_gap() {
        let err = engine()
            .to_local(CalendarId::Samaritan, 2024, 3, 20)
            .unwrap_err();
        assert_eq!(ErrorKind::NoLocalDate, err.kind());
    }

    #[test]
    fn festival_requests() {
        let e = engine();
        assert_eq!(7, e.festivals(2024).unwrap().len());
        assert_eq!(
            17,
            e.festivals_for_year(CalendarId::Coptic, 2024).unwrap().len()
        );
        for ((calendar, year), kind) in [
            ((CalendarId::Samaritan, 1899), ErrorKind::YearOutOfRange),
            ((CalendarId::Samaritan, 2101), ErrorKind::YearOutOfRange),
            ((CalendarId::Coptic, 284), ErrorKind::YearOutOfRange),
            ((CalendarId::Yazidi, 2024), ErrorKind::Unsupported),
            ((CalendarId::Gregorian, 2024), ErrorKind::Unsupported),
        ] {
            let err = e.festivals_for_year(calendar, year).unwrap_err();
            assert_eq!(kind, err.kind(), "{calendar} {year}");
        }
    }

    #[test]
    fn new_year_requests() {
        let e = engine();
        let series = e.next_new_year(2100, 3).unwrap();
        assert_eq!(vec![2100, 2101, 2102], series.iter().map(|o| o.year).collect::<Vec<_>>());

        for ((calendar, year, count), kind) in [
            ((CalendarId::Yazidi, 2024, 0), ErrorKind::InvalidCount),
            ((CalendarId::Yazidi, 2024, 7977), ErrorKind::InvalidCount),
            ((CalendarId::Yazidi, 2024, u32::MAX), ErrorKind::InvalidCount),
            ((CalendarId::Yazidi, 1899, 1), ErrorKind::YearOutOfRange),
            ((CalendarId::Samaritan, 2024, 1), ErrorKind::Unsupported),
            ((CalendarId::Gregorian, 2024, 1), ErrorKind::Unsupported),
        ] {
            let err = e.next_occurrence(calendar, year, count).unwrap_err();
            assert_eq!(kind, err.kind(), "{calendar} {year} {count}");
        }
    }

    #[test]
    fn new_year_count_stops_at_9999() {
        let e = engine();
        let series = e.next_new_year(2024, 7976).unwrap();
        assert_eq!(Some(9999), series.last().map(|o| o.year));
        assert_eq!(
            Err(CalendarError::InvalidCount {
                count: u32::MAX,
                max: 7976
            }),
            e.next_new_year(2024, u32::MAX)
        );
    }

    #[test]
    fn new_year_days_until() {
        let e = engine();
        let result = e.new_year(2024, Date::from_gregorian(2024, 6, 1)).unwrap();
        assert_eq!(Some(-31), result.days_until);
        assert_eq!(Weekday::Wednesday, result.day_of_week);
        let local = result.local.unwrap();
        assert_eq!((6774, 1, 18), (local.year, local.month, local.day));
    }

    #[test]
    fn rejects_bad_config() {
        let mut config = EngineConfig::default();
        config.yazidi.lookahead = 0;
        assert!(Engine::new(config).is_err());
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Engine>();
    }
}
