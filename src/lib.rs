//! Utilities for converting between dates in different liturgical calendars.
//!
//! Currently, this crate supports the Coptic, Samaritan and Yazidi calendars,
//! converting to and from the Gregorian calendar, and projecting each
//! calendar's festivals onto Gregorian dates. Every calendar goes through a
//! shared day count ([`Date`]), never directly to another calendar.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use liturgical_calendars::{Date, Weekday};
//!
//! let date = Date::from_gregorian(2000, 1, 1);
//!
//! assert_eq!(Weekday::Saturday, date.day_of_week());
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Converting a local date through the [`Engine`]:
//!
//! ```
//! use liturgical_calendars::{CalendarId, Engine};
//!
//! let engine = Engine::global();
//! let result = engine.convert(CalendarId::Coptic, 1700, 1, 1).unwrap();
//!
//! assert_eq!("1983-09-11", result.gregorian.iso_gregorian());
//! assert_eq!("1 Thout 1700", result.local.unwrap().label());
//! ```
//!
//! Festivals and the Yazidi new year:
//!
//! ```
//! use liturgical_calendars::{Engine, Weekday};
//!
//! let engine = Engine::global();
//! let passover = &engine.festivals(2024).unwrap()[0];
//! assert_eq!("2024-04-03", passover.gregorian.iso_gregorian());
//!
//! let sere_sal = &engine.next_new_year(2024, 1).unwrap()[0];
//! assert_eq!(Weekday::Wednesday, sere_sal.day_of_week);
//! assert_eq!(6774, sere_sal.local_year);
//! ```
//!
//! # Accuracy
//!
//! The Samaritan calendar is reconstructed arithmetically from a fixed spring
//! anchor; it approximates, and does not reproduce, the calendar published by
//! the community. The Julian-to-Gregorian lag is taken as a constant 13 days,
//! which only holds between 1900 and 2100.

pub mod calendar;
pub mod config;
pub mod date;
pub mod engine;
pub mod error;
pub mod festival;

pub use calendar::{CalendarId, CalendarModel, LocalDate};
pub use config::EngineConfig;
pub use date::{Date, Weekday, YearType};
pub use engine::{ConversionResult, Engine};
pub use error::{CalendarError, ConfigError, ErrorKind, Field};
