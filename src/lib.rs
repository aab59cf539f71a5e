//! Conversion between the Gregorian calendar and the Kurdish calendar.
//!
//! The Kurdish calendar shares its months and days with the Solar Hijri
//! calendar. Its year is the Solar Hijri year plus a fixed offset chosen by
//! the [`Epoch`], and each [`Dialect`] has its own month names.
//!
//! ```
//! use kurdical::{Dialect, Epoch, GregorianDate, gregorian_to_kurdish, kurdish_to_gregorian};
//!
//! let newroz = GregorianDate::new(2023, 3, 21)?;
//! let kurdish = gregorian_to_kurdish(newroz, Dialect::Sorani, Epoch::MedianKingdom);
//! assert_eq!((kurdish.year(), kurdish.month(), kurdish.day()), (2723, 1, 1));
//! assert_eq!(kurdish.weekday().number(), 4);
//! assert_eq!(kurdish_to_gregorian(&kurdish)?, newroz);
//! # Ok::<(), kurdical::CalendarError>(())
//! ```
//!
//! Conversions pivot through Julian Day Numbers. Gregorian years are limited
//! to `MIN_YEAR..=MAX_YEAR`, and within that range both directions are exact
//! inverses.

mod consts;
mod jdn;
mod kurdish;
mod names;
mod prelude;
pub mod solar_hijri;
mod types;

pub use consts::*;
pub use kurdish::{
    Dialect, Epoch, KurdishDate, gregorian_to_kurdish, gregorian_ymd_to_kurdish,
    kurdish_to_gregorian, kurdish_ymd_to_gregorian,
};
pub use solar_hijri::SolarHijriDate;
pub use types::{GregorianDate, Weekday};

/// The month names of `dialect`, first month first.
pub const fn month_names(dialect: Dialect) -> &'static [&'static str; 12] {
    names::month_names(dialect)
}

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A year outside the supported Gregorian range, or a Kurdish year that
    /// resolves outside it.
    #[error("Invalid year: {year} (Gregorian dates must fall in {}-{})", MIN_YEAR, MAX_YEAR)]
    InvalidYear { year: i32 },

    #[error("Invalid month: {month} (must be 1-{})", MAX_MONTH)]
    InvalidMonth { month: u8 },

    /// A day outside the leap-aware length of a Solar Hijri month.
    #[error("Invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay { day: u8, month: u8, max_day: u8 },

    /// A day that does not exist in the given Gregorian month.
    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    /// Text that is not a date, dialect or epoch.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
