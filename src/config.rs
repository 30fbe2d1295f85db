//! Engine configuration.
//!
//! Every constant the calendar models rely on lives here, so that the models
//! themselves carry no magic numbers. The defaults reproduce the published
//! behaviour exactly; a TOML file only needs to name what it overrides.
//!
//! ```toml
//! julian_lag_days = 13
//!
//! [samaritan]
//! new_year_month = 3
//! new_year_day = 21
//!
//! [yazidi]
//! lookahead = 10
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::date::{Date, SUPPORTED_YEARS, Weekday, days_in_month};
use crate::error::ConfigError;

/// Top-level configuration, one section per calendar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EngineConfig {
    /// Days by which the Julian calendar trails the Gregorian one. Taken as
    /// constant over the whole supported range.
    pub julian_lag_days: i32,
    pub coptic: CopticConfig,
    pub samaritan: SamaritanConfig,
    pub yazidi: YazidiConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            julian_lag_days: 13,
            coptic: CopticConfig::default(),
            samaritan: SamaritanConfig::default(),
            yazidi: YazidiConfig::default(),
        }
    }
}

/// Coptic calendar constants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CopticConfig {
    /// Day count of 1 Thout of year 1 (29 August 284, Julian).
    pub epoch_jdn: i64,
    /// Coptic year `y` is labelled Gregorian year `y + gregorian_offset` in
    /// holy-day queries.
    pub gregorian_offset: i32,
    /// Smallest accepted Coptic year.
    pub min_year: i32,
    /// Largest accepted Coptic year.
    pub max_year: i32,
}

impl Default for CopticConfig {
    fn default() -> Self {
        Self {
            epoch_jdn: 1825029,
            gregorian_offset: 284,
            min_year: 1,
            max_year: 9999,
        }
    }
}

/// Samaritan calendar constants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SamaritanConfig {
    /// Samaritan year minus Gregorian year.
    pub epoch_offset: i32,
    /// Gregorian month of the new-year anchor.
    pub new_year_month: u32,
    /// Gregorian day of the new-year anchor.
    pub new_year_day: u32,
    /// Smallest accepted year, in Gregorian numbering.
    pub min_year: i32,
    /// Largest accepted year, in Gregorian numbering.
    pub max_year: i32,
}

impl Default for SamaritanConfig {
    fn default() -> Self {
        Self {
            epoch_offset: 3636,
            new_year_month: 3,
            new_year_day: 21,
            min_year: 1900,
            max_year: 2100,
        }
    }
}

/// Yazidi calendar constants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct YazidiConfig {
    /// Yazidi year minus Gregorian year.
    pub epoch_offset: i32,
    /// Julian month of the new-year anchor.
    pub julian_anchor_month: u32,
    /// Julian day of the new-year anchor.
    pub julian_anchor_day: u32,
    /// Weekday the new year is moved forward to.
    pub new_year_weekday: Weekday,
    /// Gregorian month on which the day-by-day calendar starts its year.
    pub year_start_month: u32,
    /// Gregorian day on which the day-by-day calendar starts its year.
    pub year_start_day: u32,
    /// Smallest accepted year, in Gregorian numbering.
    pub min_year: i32,
    /// Largest accepted year, in Gregorian numbering.
    pub max_year: i32,
    /// Default number of years listed by new-year projections.
    pub lookahead: u32,
}

impl Default for YazidiConfig {
    fn default() -> Self {
        Self {
            epoch_offset: 4750,
            julian_anchor_month: 4,
            julian_anchor_day: 13,
            new_year_weekday: Weekday::Wednesday,
            year_start_month: 4,
            year_start_day: 14,
            min_year: 1900,
            max_year: 2100,
            lookahead: 5,
        }
    }
}

impl EngineConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or unknown keys, and
    /// [`ConfigError::Invalid`] if a value fails [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks that every value is usable by the calendar models.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=30).contains(&self.julian_lag_days) {
            return Err(invalid("julian_lag_days", "must be in 0..=30"));
        }

        let c = &self.coptic;
        let last_day = Date::from_gregorian(*SUPPORTED_YEARS.end(), 12, 31).jdn();
        if !(0..=last_day).contains(&c.epoch_jdn) {
            return Err(invalid("coptic.epoch_jdn", format!("must be in 0..={last_day}")));
        }
        check_offset("coptic.gregorian_offset", c.gregorian_offset)?;
        check_year("coptic.min_year", c.min_year)?;
        check_year("coptic.max_year", c.max_year)?;
        check_span("coptic.max_year", c.min_year, c.max_year)?;

        let s = &self.samaritan;
        check_offset("samaritan.epoch_offset", s.epoch_offset)?;
        check_anchor("samaritan.new_year", s.new_year_month, s.new_year_day)?;
        check_year("samaritan.min_year", s.min_year)?;
        check_year("samaritan.max_year", s.max_year)?;
        check_span("samaritan.max_year", s.min_year, s.max_year)?;

        let y = &self.yazidi;
        check_offset("yazidi.epoch_offset", y.epoch_offset)?;
        check_anchor("yazidi.julian_anchor", y.julian_anchor_month, y.julian_anchor_day)?;
        check_anchor("yazidi.year_start", y.year_start_month, y.year_start_day)?;
        check_year("yazidi.min_year", y.min_year)?;
        check_year("yazidi.max_year", y.max_year)?;
        check_span("yazidi.max_year", y.min_year, y.max_year)?;
        if y.lookahead < 1 {
            return Err(invalid("yazidi.lookahead", "must be >= 1"));
        }
        Ok(())
    }
}

fn invalid(key: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        reason: reason.into(),
    }
}

fn check_year(key: &'static str, year: i32) -> Result<(), ConfigError> {
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(invalid(key, format!("{year} is not in 1..=9999")));
    }
    Ok(())
}

// Local years are Gregorian years shifted by the offset, in both directions,
// so shifting any supported year has to stay in `i32` with room to spare.
fn check_offset(key: &'static str, offset: i32) -> Result<(), ConfigError> {
    let limit = i32::MAX / 2;
    let fits = |year: i32| year.checked_add(offset).is_some_and(|y| y.abs() <= limit);
    if !(fits(*SUPPORTED_YEARS.start()) && fits(*SUPPORTED_YEARS.end())) {
        return Err(invalid(key, format!("{offset} is too large")));
    }
    Ok(())
}

fn check_span(key: &'static str, min: i32, max: i32) -> Result<(), ConfigError> {
    if min > max {
        return Err(invalid(key, format!("{max} is below min_year {min}")));
    }
    Ok(())
}

// An anchor has to exist in every year, so 29 February is refused.
fn check_anchor(key: &'static str, month: u32, day: u32) -> Result<(), ConfigError> {
    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(1, month) {
        return Err(invalid(key, format!("{month}-{day} is not a date in every year")));
    }
    Ok(())
}
