//! Error types for conversion requests.

use serde::Serialize;

use crate::calendar::CalendarId;

/// Which part of a date an [`CalendarError::InvalidNumber`] refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Year,
    Month,
    Day,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
        })
    }
}

/// Error type for every fallible request handled by the [`Engine`](crate::Engine).
///
/// All of them are raised before any date is computed. Each variant carries
/// the accepted range so that a caller can render its own message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A field is not an integer.
    #[error("{field} is not a valid integer: {input:?}")]
    InvalidNumber {
        /// The offending field.
        field: Field,
        /// The text that failed to parse.
        input: String,
    },

    /// The year lies outside the span supported for the calendar.
    #[error("{calendar} year {year} out of range (must be {min}..={max})")]
    YearOutOfRange {
        calendar: CalendarId,
        year: i64,
        min: i32,
        max: i32,
    },

    /// The month does not exist in that year.
    #[error("{calendar} month {month} out of range for year {year} (must be 1..={max})")]
    MonthOutOfRange {
        calendar: CalendarId,
        year: i32,
        month: i64,
        max: u32,
    },

    /// The day does not exist in that month.
    #[error("{calendar} day {day} out of range for {year}-{month} (must be 1..={max})")]
    DayOutOfRange {
        calendar: CalendarId,
        year: i32,
        month: u32,
        day: i64,
        max: u32,
    },

    /// The Gregorian date falls between two local years and has no local
    /// equivalent.
    #[error("{date} has no {calendar} equivalent")]
    NoLocalDate { calendar: CalendarId, date: String },

    /// A projection was asked for no entries, or for entries past the last
    /// supported year.
    #[error("count {count} out of range (must be 1..={max})")]
    InvalidCount { count: u32, max: u32 },

    /// The calendar does not provide the requested projection.
    #[error("{calendar} calendar does not support {operation}")]
    Unsupported {
        calendar: CalendarId,
        operation: &'static str,
    },
}

/// Fieldless discriminant of [`CalendarError`], for callers that map errors
/// onto their own messages.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidNumber,
    YearOutOfRange,
    MonthOutOfRange,
    DayOutOfRange,
    NoLocalDate,
    InvalidCount,
    Unsupported,
}

impl CalendarError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalendarError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            CalendarError::YearOutOfRange { .. } => ErrorKind::YearOutOfRange,
            CalendarError::MonthOutOfRange { .. } => ErrorKind::MonthOutOfRange,
            CalendarError::DayOutOfRange { .. } => ErrorKind::DayOutOfRange,
            CalendarError::NoLocalDate { .. } => ErrorKind::NoLocalDate,
            CalendarError::InvalidCount { .. } => ErrorKind::InvalidCount,
            CalendarError::Unsupported { .. } => ErrorKind::Unsupported,
        }
    }
}

/// Error raised while loading or checking an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
