use crate::CalendarError;
use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::jdn::JulianDayNumber;
use crate::kurdish::{Dialect, Epoch, KurdishDate};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A proleptic Gregorian date with the year in `MIN_YEAR..=MAX_YEAR` (1..=9999).
///
/// Construction validates the month and the day against the Gregorian leap
/// rule, so every value converts to the Kurdish calendar without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a new date, validating every component
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the year is outside `MIN_YEAR..=MAX_YEAR`,
    /// `CalendarError::InvalidMonth` if the month is outside 1..=12 and
    /// `CalendarError::InvalidDate` if the day does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidYear { year });
        }
        if month == 0 || month > MAX_MONTH {
            return Err(CalendarError::InvalidMonth { month });
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
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

    /// Returns the day of the week
    pub fn weekday(self) -> Weekday {
        Weekday::from_sunday_index(self.to_jdn().sunday_based_weekday())
    }

    /// Returns the following day, or `None` past the end of `MAX_YEAR`.
    pub fn next_day(self) -> Option<Self> {
        Self::from_jdn(JulianDayNumber::from(self.to_jdn().get() + 1)).ok()
    }

    /// Converts this date to the Kurdish calendar
    pub fn to_kurdish(self, dialect: Dialect, epoch: Epoch) -> KurdishDate {
        crate::kurdish::gregorian_to_kurdish(self, dialect, epoch)
    }

    pub(crate) fn to_jdn(self) -> JulianDayNumber {
        JulianDayNumber::from_gregorian(self.year, self.month, self.day)
    }

    pub(crate) fn from_jdn(jdn: JulianDayNumber) -> Result<Self, CalendarError> {
        let (year, month, day) = jdn.to_gregorian();
        let year = i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX });
        Self::new(year, month, day)
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    /// Parses the ISO form `YYYY-MM-DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let &[year, month, day] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed:?}"
            )));
        };

        let parse_err = |part: &str| CalendarError::InvalidFormat(part.to_owned());
        let year = year.parse::<i32>().map_err(|_| parse_err(year))?;
        let month = month.parse::<u8>().map_err(|_| parse_err(month))?;
        let day = day.parse::<u8>().map_err(|_| parse_err(day))?;

        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for GregorianDate {
    type Error = CalendarError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<GregorianDate> for (i32, u8, u8) {
    fn from(date: GregorianDate) -> Self {
        (date.year, date.month, date.day)
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Day of the week in Kurdish numbering: 1 = Saturday through 7 = Friday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Weekday {
    Saturday = 1,
    Sunday = 2,
    Monday = 3,
    Tuesday = 4,
    Wednesday = 5,
    Thursday = 6,
    Friday = 7,
}

impl Weekday {
    /// All weekdays in Kurdish order, starting with Saturday
    pub const ALL: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Maps a Gregorian weekday index (0 = Sunday .. 6 = Saturday).
    /// Indices of 7 and above wrap around.
    pub const fn from_sunday_index(index: u8) -> Self {
        Self::ALL[((index % 7 + 1) % 7) as usize]
    }

    /// Returns the Gregorian weekday index (0 = Sunday .. 6 = Saturday)
    pub const fn sunday_index(self) -> u8 {
        (self as u8 + 5) % 7
    }

    /// Returns the Kurdish weekday number (1 = Saturday .. 7 = Friday)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Looks up a weekday by its Kurdish number
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=7 => Some(Self::ALL[(number - 1) as usize]),
            _ => None,
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
