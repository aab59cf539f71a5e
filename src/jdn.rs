//! Proleptic Gregorian dates to and from Julian Day Numbers.

use crate::consts::{DAYS_PER_400_YEARS, JDN_CORRECTION, JDN_INVERSE_SHIFT, JDN_YEAR_SHIFT};
use crate::prelude::*;

/// Days in a week, used for weekday arithmetic.
const DAYS_PER_WEEK: i64 = 7;

/// A continuous integer day count used as the pivot between calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub(crate) struct JulianDayNumber(i64);

impl JulianDayNumber {
    /// Computes the JDN of a proleptic Gregorian date.
    ///
    /// Every division floors, so the result stays correct when the shifted
    /// year goes negative.
    pub(crate) fn from_gregorian(year: i32, month: u8, day: u8) -> Self {
        let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));

        let a = (14 - month).div_euclid(12);
        let y = year + JDN_YEAR_SHIFT - a;
        let m = month + 12 * a - 3;

        Self(
            day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
                + y.div_euclid(400)
                - JDN_CORRECTION,
        )
    }

    /// Converts back to a proleptic Gregorian `(year, month, day)`.
    ///
    /// The year is left as `i64`: day numbers far from the present can land
    /// outside the `i32` range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn to_gregorian(self) -> (i64, u8, u8) {
        let mut l = self.0 + JDN_INVERSE_SHIFT;
        let n = (4 * l).div_euclid(DAYS_PER_400_YEARS);
        l -= (DAYS_PER_400_YEARS * n + 3).div_euclid(4);
        let i = (4000 * (l + 1)).div_euclid(1_461_001);
        l = l - (1461 * i).div_euclid(4) + 31;
        let j = (80 * l).div_euclid(2447);
        let day = l - (2447 * j).div_euclid(80);
        l = j.div_euclid(11);
        let month = j + 2 - 12 * l;
        let year = 100 * (n - 49) + i + l;

        // month is always 1..=12 and day 1..=31
        (year, month as u8, day as u8)
    }

    /// Day of the week with 0 = Sunday through 6 = Saturday.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) const fn sunday_based_weekday(self) -> u8 {
        (self.0 + 1).rem_euclid(DAYS_PER_WEEK) as u8
    }

    /// Returns the day count
    #[inline]
    pub(crate) const fn get(self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_day_numbers() {
        struct TestCase {
            date: (i32, u8, u8),
            jdn: i64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date: (2000, 1, 1),
                jdn: 2_451_545,
                description: "J2000 epoch",
            },
            TestCase {
                date: (1858, 11, 17),
                jdn: 2_400_001,
                description: "modified Julian date epoch",
            },
            TestCase {
                date: (1970, 1, 1),
                jdn: 2_440_588,
                description: "Unix epoch",
            },
            TestCase {
                date: (1, 1, 1),
                jdn: 1_721_426,
                description: "first day of the common era",
            },
            TestCase {
                date: (2023, 3, 21),
                jdn: 2_460_025,
                description: "Newroz 2023",
            },
            TestCase {
                date: (9999, 12, 31),
                jdn: 5_373_484,
                description: "last supported day",
            },
        ];

        for case in &cases {
            let (year, month, day) = case.date;
            let jdn = JulianDayNumber::from_gregorian(year, month, day);
            assert_eq!(jdn.get(), case.jdn, "{}", case.description);
            assert_eq!(
                jdn.to_gregorian(),
                (i64::from(year), month, day),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_consecutive_days_across_leap_february() {
        let feb28 = JulianDayNumber::from_gregorian(2024, 2, 28).get();
        let feb29 = JulianDayNumber::from_gregorian(2024, 2, 29).get();
        let mar1 = JulianDayNumber::from_gregorian(2024, 3, 1).get();
        assert_eq!(feb29 - feb28, 1);
        assert_eq!(mar1 - feb29, 1);

        // 1900 is not a leap year
        let feb28 = JulianDayNumber::from_gregorian(1900, 2, 28).get();
        let mar1 = JulianDayNumber::from_gregorian(1900, 3, 1).get();
        assert_eq!(mar1 - feb28, 1);
    }

    #[test]
    fn test_year_boundary() {
        let dec31 = JulianDayNumber::from_gregorian(1999, 12, 31);
        let next = JulianDayNumber::from(dec31.get() + 1);
        assert_eq!(next.to_gregorian(), (2000, 1, 1));
    }

    #[test]
    fn test_floor_division_before_year_one() {
        // Year 0 is the proleptic leap year 1 BC
        let jdn = JulianDayNumber::from_gregorian(0, 2, 29);
        assert_eq!(jdn.to_gregorian(), (0, 2, 29));
        let jan1 = JulianDayNumber::from_gregorian(1, 1, 1).get();
        let dec31 = JulianDayNumber::from_gregorian(0, 12, 31).get();
        assert_eq!(jan1 - dec31, 1);
    }

    #[test]
    fn test_year_beyond_i32_range() {
        let jdn = JulianDayNumber::from(i64::from(i32::MAX) * 366);
        let (year, _, _) = jdn.to_gregorian();
        assert!(year > i64::from(i32::MAX), "{year}");
    }

    #[test]
    fn test_sunday_based_weekday() {
        // 2000-01-01 was a Saturday
        assert_eq!(
            JulianDayNumber::from_gregorian(2000, 1, 1).sunday_based_weekday(),
            6
        );
        // 2023-01-01 was a Sunday
        assert_eq!(
            JulianDayNumber::from_gregorian(2023, 1, 1).sunday_based_weekday(),
            0
        );
        // 2023-03-21 was a Tuesday
        assert_eq!(
            JulianDayNumber::from_gregorian(2023, 3, 21).sunday_based_weekday(),
            2
        );
    }

    #[test]
    fn test_into_i64() {
        let value: i64 = JulianDayNumber::from(2_451_545).into();
        assert_eq!(value, 2_451_545);
    }
}
