//! Solar Hijri calendar arithmetic.
//!
//! Years follow the simplified leap rule `(year + 1) % 4 == 0`, so every
//! fourth year (3, 7, 11, ...) has a 30-day twelfth month. The rule is a
//! fixed approximation and is not corrected against the astronomical
//! calendar; all month lengths and conversions depend on it.
//!
//! Years before 1 are proleptic: Gregorian dates before the year 622 map to
//! Solar Hijri years of zero or below.

use crate::consts::{
    MAX_MONTH, MIN_DAY, SOLAR_HIJRI_COMMON_YEAR_DAYS, SOLAR_HIJRI_CYCLE_DAYS,
    SOLAR_HIJRI_EPOCH_JDN, SOLAR_HIJRI_LEAP_LAST_MONTH_DAYS, SOLAR_HIJRI_MONTH_DAYS,
};
use crate::jdn::JulianDayNumber;
use crate::prelude::*;
use crate::{CalendarError, GregorianDate};
use serde::Serialize;

/// Returns `true` when `year` has 366 days.
pub const fn is_leap_year(year: i32) -> bool {
    // Same as `(year + 1) % 4 == 0` without overflowing at `i32::MAX`
    year.rem_euclid(4) == 3
}

/// Month lengths for `year`, with the last month extended in leap years.
pub const fn month_lengths(year: i32) -> [u8; 12] {
    let mut lengths = SOLAR_HIJRI_MONTH_DAYS;
    if is_leap_year(year) {
        lengths[11] = SOLAR_HIJRI_LEAP_LAST_MONTH_DAYS;
    }
    lengths
}

/// Number of days in `month` of `year`, or `None` if `month` is outside 1..=12.
pub const fn days_in_month(year: i32, month: u8) -> Option<u8> {
    if month == 0 || month > MAX_MONTH {
        return None;
    }
    Some(month_lengths(year)[(month - 1) as usize])
}

/// Number of days in `year`.
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Days from 1 Farvardin of year 1 to 1 Farvardin of `year`. Negative for
/// years before 1.
const fn days_before_year(year: i64) -> i64 {
    // Leap years below `year` are the ones congruent to 3 mod 4
    (year - 1) * SOLAR_HIJRI_COMMON_YEAR_DAYS + year.div_euclid(4)
}

/// A validated Solar Hijri date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{}-{:02}-{:02}", year, month, day)]
pub struct SolarHijriDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl SolarHijriDate {
    /// Creates a new date, validating the month and the leap-aware day
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the month is outside 1..=12 and
    /// `CalendarError::InvalidDay` if the day exceeds the month's length in `year`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let Some(max_day) = days_in_month(year, month) else {
            return Err(CalendarError::InvalidMonth { month });
        };
        if day < MIN_DAY || day > max_day {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Converts a Gregorian date. Always succeeds.
    pub fn from_gregorian(date: GregorianDate) -> Self {
        Self::from_jdn(date.to_jdn())
    }

    /// Converts to the Gregorian calendar
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the result falls outside the
    /// supported Gregorian years.
    pub fn to_gregorian(self) -> Result<GregorianDate, CalendarError> {
        GregorianDate::from_jdn(self.to_jdn())
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns `true` if this date lies in a leap year
    pub const fn is_leap_year(self) -> bool {
        is_leap_year(self.year)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn from_jdn(jdn: JulianDayNumber) -> Self {
        let days = jdn.get() - SOLAR_HIJRI_EPOCH_JDN;

        // Jump whole leap cycles, then walk the at most three remaining years.
        let mut year = 4 * days.div_euclid(SOLAR_HIJRI_CYCLE_DAYS) + 1;
        let mut remaining = days.rem_euclid(SOLAR_HIJRI_CYCLE_DAYS);
        while remaining >= i64::from(days_in_year(year as i32)) {
            remaining -= i64::from(days_in_year(year as i32));
            year += 1;
        }
        let year = year as i32;

        let lengths = month_lengths(year);
        let mut month = 0;
        while remaining >= i64::from(lengths[month]) {
            remaining -= i64::from(lengths[month]);
            month += 1;
        }

        Self {
            year,
            month: month as u8 + 1,
            day: remaining as u8 + 1,
        }
    }

    pub(crate) fn to_jdn(self) -> JulianDayNumber {
        let lengths = month_lengths(self.year);
        let before_month: i64 = lengths[..usize::from(self.month - 1)]
            .iter()
            .map(|&days| i64::from(days))
            .sum();

        JulianDayNumber::from(
            SOLAR_HIJRI_EPOCH_JDN
                + days_before_year(i64::from(self.year))
                + before_month
                + i64::from(self.day)
                - 1,
        )
    }
}
