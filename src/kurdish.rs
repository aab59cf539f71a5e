//! The Kurdish calendar: Solar Hijri months and days under an epoch-shifted year.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::consts::{FALL_OF_NINEVEH_OFFSET, MAX_MONTH, MEDIAN_KINGDOM_OFFSET};
use crate::prelude::*;
use crate::solar_hijri::SolarHijriDate;
use crate::{CalendarError, GregorianDate, Weekday, names};

/// Kurdish dialect used for month names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Dialect {
    Laki,
    Hawrami,
    Sorani,
    Kalhuri,
    Kurmanji,
}

impl Dialect {
    pub const ALL: [Self; 5] = [
        Self::Laki,
        Self::Hawrami,
        Self::Sorani,
        Self::Kalhuri,
        Self::Kurmanji,
    ];

    /// All twelve month names, first month first
    pub const fn month_names(self) -> &'static [&'static str; 12] {
        names::month_names(self)
    }

    /// Name of `month` (1..=12), or `None` for any other month number
    pub const fn month_name(self, month: u8) -> Option<&'static str> {
        if month == 0 || month > MAX_MONTH {
            return None;
        }
        Some(self.month_names()[(month - 1) as usize])
    }
}

impl FromStr for Dialect {
    type Err = CalendarError;

    /// Accepts the English name in any case, e.g. `sorani` or `Sorani`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL)
    }
}

/// Historical origin of the Kurdish year count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Epoch {
    /// Founding of the Median kingdom by Deioces
    MedianKingdom,
    /// Fall of Nineveh to Cyaxares
    FallOfNineveh,
}

impl Epoch {
    pub const ALL: [Self; 2] = [Self::MedianKingdom, Self::FallOfNineveh];

    /// Years added to the Solar Hijri year to get the Kurdish year
    pub const fn offset(self) -> i32 {
        match self {
            Self::MedianKingdom => MEDIAN_KINGDOM_OFFSET,
            Self::FallOfNineveh => FALL_OF_NINEVEH_OFFSET,
        }
    }
}

impl FromStr for Epoch {
    type Err = CalendarError;

    /// Accepts the English name in any case, with or without separators,
    /// e.g. `median-kingdom` or `FallOfNineveh`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL)
    }
}

fn parse_variant<T: Copy + std::fmt::Display>(s: &str, variants: &[T]) -> Result<T, CalendarError> {
    let wanted: String = s.chars().filter(char::is_ascii_alphanumeric).collect();
    variants
        .iter()
        .copied()
        .find(|variant| variant.to_string().eq_ignore_ascii_case(&wanted))
        .ok_or_else(|| CalendarError::InvalidFormat(s.to_owned()))
}

/// A date in the Kurdish calendar.
///
/// Month and day are the Solar Hijri month and day; only the year is
/// shifted by the epoch. Every value is valid: construction rejects months
/// outside 1..=12 and days past the end of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{}-{}-{} {}", year, month, day, month_name)]
pub struct KurdishDate {
    year:       i32,
    month:      u8,
    day:        u8,
    weekday:    Weekday,
    month_name: &'static str,
    dialect:    Dialect,
    epoch:      Epoch,
}

impl KurdishDate {
    /// Creates a Kurdish date from its components
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the month is outside 1..=12,
    /// `CalendarError::InvalidDay` if the day is not in that month of the
    /// resolved Solar Hijri year, and `CalendarError::InvalidYear` if the
    /// date lies outside the supported Gregorian years.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        dialect: Dialect,
        epoch: Epoch,
    ) -> Result<Self, CalendarError> {
        let (solar, gregorian) = resolve(year, month, day, epoch)?;
        Ok(Self::assemble(solar, gregorian.weekday(), dialect, epoch))
    }

    /// Converts this date back to the Gregorian calendar
    ///
    /// # Errors
    /// See [`kurdish_to_gregorian`].
    pub fn to_gregorian(&self) -> Result<GregorianDate, CalendarError> {
        kurdish_to_gregorian(self)
    }

    /// Returns the epoch-shifted year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31)
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the month name in this date's dialect
    #[inline]
    pub const fn month_name(&self) -> &'static str {
        self.month_name
    }

    #[inline]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    #[inline]
    pub const fn epoch(&self) -> Epoch {
        self.epoch
    }

    fn assemble(solar: SolarHijriDate, weekday: Weekday, dialect: Dialect, epoch: Epoch) -> Self {
        let month = solar.month();
        Self {
            year: solar.year() + epoch.offset(),
            month,
            day: solar.day(),
            weekday,
            month_name: dialect.month_names()[usize::from(month - 1)],
            dialect,
            epoch,
        }
    }
}

/// Validates Kurdish components and resolves them to Solar Hijri and Gregorian dates.
fn resolve(
    year: i32,
    month: u8,
    day: u8,
    epoch: Epoch,
) -> Result<(SolarHijriDate, GregorianDate), CalendarError> {
    if month == 0 || month > MAX_MONTH {
        return Err(CalendarError::InvalidMonth { month });
    }
    let solar_year = year
        .checked_sub(epoch.offset())
        .ok_or(CalendarError::InvalidYear { year })?;
    let solar = SolarHijriDate::new(solar_year, month, day)?;
    let gregorian = solar
        .to_gregorian()
        .map_err(|_| CalendarError::InvalidYear { year })?;
    Ok((solar, gregorian))
}

/// Converts a Gregorian date to the Kurdish calendar. Always succeeds.
pub fn gregorian_to_kurdish(date: GregorianDate, dialect: Dialect, epoch: Epoch) -> KurdishDate {
    let solar = SolarHijriDate::from_gregorian(date);
    let kurdish = KurdishDate::assemble(solar, date.weekday(), dialect, epoch);
    trace!(%date, %solar, %kurdish, "converted Gregorian date to Kurdish");
    kurdish
}

/// Converts a Kurdish date to the Gregorian calendar.
///
/// # Errors
/// Returns `CalendarError::InvalidYear` if the date lies outside the
/// supported Gregorian years. Month and day were validated when the
/// `KurdishDate` was built.
pub fn kurdish_to_gregorian(date: &KurdishDate) -> Result<GregorianDate, CalendarError> {
    kurdish_ymd_to_gregorian(date.year, date.month, date.day, date.dialect, date.epoch)
}

/// Converts raw Gregorian components to the Kurdish calendar.
///
/// # Errors
/// Returns an error only if the components do not form a valid
/// [`GregorianDate`].
pub fn gregorian_ymd_to_kurdish(
    year: i32,
    month: u8,
    day: u8,
    dialect: Dialect,
    epoch: Epoch,
) -> Result<KurdishDate, CalendarError> {
    let date = GregorianDate::new(year, month, day)?;
    Ok(gregorian_to_kurdish(date, dialect, epoch))
}

/// Converts raw Kurdish components to the Gregorian calendar.
///
/// The month is checked first, then the day against the leap-aware length
/// of that month in the Solar Hijri year `year - epoch.offset()`.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth`, `CalendarError::InvalidDay` or
/// `CalendarError::InvalidYear` as described for [`KurdishDate::new`].
pub fn kurdish_ymd_to_gregorian(
    year: i32,
    month: u8,
    day: u8,
    dialect: Dialect,
    epoch: Epoch,
) -> Result<GregorianDate, CalendarError> {
    let (solar, gregorian) = resolve(year, month, day, epoch).inspect_err(|err| {
        debug!(year, month, day, %dialect, %epoch, %err, "rejected Kurdish date");
    })?;
    trace!(%solar, %gregorian, "converted Kurdish date to Gregorian");
    Ok(gregorian)
}

#[derive(Deserialize)]
struct KurdishDateFields {
    year:    i32,
    month:   u8,
    day:     u8,
    dialect: Dialect,
    epoch:   Epoch,
}

impl<'de> Deserialize<'de> for KurdishDate {
    /// Reads the components and rebuilds the date, so the weekday and month
    /// name always agree with year, month, day and dialect.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let fields = KurdishDateFields::deserialize(deserializer)?;
        Self::new(
            fields.year,
            fields.month,
            fields.day,
            fields.dialect,
            fields.epoch,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gregorian(year: i32, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_epoch_offsets() {
        assert_eq!(Epoch::MedianKingdom.offset(), 1321);
        assert_eq!(Epoch::FallOfNineveh.offset(), 1233);
    }

    #[test]
    fn test_newroz_2023() {
        let date = gregorian_to_kurdish(
            gregorian(2023, 3, 21),
            Dialect::Sorani,
            Epoch::MedianKingdom,
        );
        assert_eq!(date.year(), 2723);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
        assert_eq!(date.weekday().number(), 4);
        assert_eq!(date.month_name(), Dialect::Sorani.month_names()[0]);
        assert_eq!(date.dialect(), Dialect::Sorani);
        assert_eq!(date.epoch(), Epoch::MedianKingdom);
    }

    #[test]
    fn test_new_year_and_month_shift_only() {
        let date = gregorian(2023, 1, 1);
        let median = gregorian_to_kurdish(date, Dialect::Sorani, Epoch::MedianKingdom);
        let nineveh = gregorian_to_kurdish(date, Dialect::Sorani, Epoch::FallOfNineveh);
        assert_eq!(median.year() - nineveh.year(), 1321 - 1233);
        assert_eq!((median.month(), median.day()), (nineveh.month(), nineveh.day()));
        assert_eq!((median.year(), median.month(), median.day()), (2722, 10, 11));
    }

    #[test]
    fn test_new_matches_forward_conversion() {
        let forward = gregorian_to_kurdish(
            gregorian(2025, 10, 11),
            Dialect::Kurmanji,
            Epoch::FallOfNineveh,
        );
        let built = KurdishDate::new(
            forward.year(),
            forward.month(),
            forward.day(),
            Dialect::Kurmanji,
            Epoch::FallOfNineveh,
        )
        .unwrap();
        assert_eq!(forward, built);
    }

    #[test]
    fn test_invalid_month() {
        for month in [0, 13, 255] {
            assert_eq!(
                KurdishDate::new(2725, month, 1, Dialect::Sorani, Epoch::MedianKingdom),
                Err(CalendarError::InvalidMonth { month })
            );
        }
    }

    #[test]
    fn test_invalid_day() {
        assert_eq!(
            KurdishDate::new(2725, 1, 32, Dialect::Sorani, Epoch::MedianKingdom),
            Err(CalendarError::InvalidDay {
                day: 32,
                month: 1,
                max_day: 31
            })
        );
        assert!(matches!(
            KurdishDate::new(2725, 1, 0, Dialect::Sorani, Epoch::MedianKingdom),
            Err(CalendarError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_last_month_follows_leap_rule() {
        // 2723 - 1321 = 1402, a common year
        assert!(matches!(
            KurdishDate::new(2723, 12, 30, Dialect::Sorani, Epoch::MedianKingdom),
            Err(CalendarError::InvalidDay { max_day: 29, .. })
        ));
        // 2724 - 1321 = 1403, a leap year
        let date = KurdishDate::new(2724, 12, 30, Dialect::Sorani, Epoch::MedianKingdom).unwrap();
        assert_eq!(date.to_gregorian(), Ok(gregorian(2025, 3, 20)));
    }

    #[test]
    fn test_day_29_of_last_month_is_always_valid() {
        for epoch in Epoch::ALL {
            for year in 2000..2100 {
                assert!(
                    KurdishDate::new(year, 12, 29, Dialect::Sorani, epoch).is_ok(),
                    "{year} {epoch}"
                );
            }
        }
    }

    #[test]
    fn test_year_outside_gregorian_range() {
        assert_eq!(
            kurdish_ymd_to_gregorian(1, 1, 1, Dialect::Sorani, Epoch::MedianKingdom),
            Err(CalendarError::InvalidYear { year: 1 })
        );
        assert_eq!(
            kurdish_ymd_to_gregorian(i32::MIN, 1, 1, Dialect::Sorani, Epoch::MedianKingdom),
            Err(CalendarError::InvalidYear { year: i32::MIN })
        );
    }

    #[test]
    fn test_gregorian_ymd_to_kurdish() {
        let date =
            gregorian_ymd_to_kurdish(2023, 12, 31, Dialect::Sorani, Epoch::MedianKingdom).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2723, 10, 10));
        assert_eq!(date.weekday(), Weekday::Sunday);

        assert_eq!(
            gregorian_ymd_to_kurdish(2023, 2, 29, Dialect::Sorani, Epoch::MedianKingdom),
            Err(CalendarError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
    }

    #[test]
    fn test_month_name_lookup() {
        assert_eq!(Dialect::Kurmanji.month_name(1), Some("نیسان"));
        assert_eq!(Dialect::Kurmanji.month_name(0), None);
        assert_eq!(Dialect::Kurmanji.month_name(13), None);
    }

    #[test]
    fn test_display() {
        let date = KurdishDate::new(2723, 10, 10, Dialect::Sorani, Epoch::MedianKingdom).unwrap();
        assert_eq!(date.to_string(), "2723-10-10 به\u{200c}فرانبار");
        assert_eq!(Dialect::Hawrami.to_string(), "Hawrami");
        assert_eq!(Epoch::FallOfNineveh.to_string(), "FallOfNineveh");
    }

    #[test]
    fn test_parse_dialect_and_epoch() {
        assert_eq!("sorani".parse::<Dialect>(), Ok(Dialect::Sorani));
        assert_eq!("KURMANJI".parse::<Dialect>(), Ok(Dialect::Kurmanji));
        assert_eq!("median-kingdom".parse::<Epoch>(), Ok(Epoch::MedianKingdom));
        assert_eq!("Fall_Of_Nineveh".parse::<Epoch>(), Ok(Epoch::FallOfNineveh));
        assert!(matches!(
            "zazaki".parse::<Dialect>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "".parse::<Epoch>(),
            Err(CalendarError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_serde() {
        let date = KurdishDate::new(2723, 1, 1, Dialect::Sorani, Epoch::MedianKingdom).unwrap();
        let json = serde_json::to_value(date).unwrap();
        assert_eq!(json["year"], 2723);
        assert_eq!(json["weekday"], "Tuesday");
        assert_eq!(json["dialect"], "Sorani");
        assert_eq!(json["epoch"], "MedianKingdom");

        let parsed: KurdishDate = serde_json::from_value(json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_rebuilds_derived_fields() {
        let json = r#"{"year":2723,"month":1,"day":1,"weekday":"Friday","month_name":"x","dialect":"Laki","epoch":"MedianKingdom"}"#;
        let parsed: KurdishDate = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.weekday(), Weekday::Tuesday);
        assert_eq!(parsed.month_name(), Dialect::Laki.month_names()[0]);
    }

    #[test]
    fn test_serde_validation() {
        let json = r#"{"year":2725,"month":13,"day":1,"dialect":"Sorani","epoch":"MedianKingdom"}"#;
        let result: Result<KurdishDate, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let json = r#"{"year":2723,"month":12,"day":30,"dialect":"Sorani","epoch":"MedianKingdom"}"#;
        let result: Result<KurdishDate, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
