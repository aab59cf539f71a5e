/// Minimum valid Gregorian year (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month, shared by the Gregorian and Solar Hijri calendars
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Solar Hijri month lengths in a common year. Index 0 is the first month.
pub const SOLAR_HIJRI_MONTH_DAYS: [u8; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Length of the last Solar Hijri month in a leap year
pub const SOLAR_HIJRI_LEAP_LAST_MONTH_DAYS: u8 = 30;

/// Days in a common Solar Hijri year
pub(crate) const SOLAR_HIJRI_COMMON_YEAR_DAYS: i64 = 365;

/// Days in one full Solar Hijri leap cycle (three common years and one leap year)
pub(crate) const SOLAR_HIJRI_CYCLE_DAYS: i64 = 4 * SOLAR_HIJRI_COMMON_YEAR_DAYS + 1;

/// Julian Day Number of 1 Farvardin, year 1 of the Solar Hijri calendar under the
/// `(year + 1) % 4 == 0` leap rule. Day counts relative to it are zero-based.
pub const SOLAR_HIJRI_EPOCH_JDN: i64 = 1_948_310;

/// Gregorian JDN algorithm constants (Fliegel and Van Flandern)
pub(crate) const JDN_YEAR_SHIFT: i64 = 4800;
pub(crate) const JDN_CORRECTION: i64 = 32045;
pub(crate) const JDN_INVERSE_SHIFT: i64 = 68569;
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;

/// Year offsets added to the Solar Hijri year for each epoch
pub const MEDIAN_KINGDOM_OFFSET: i32 = 1321;
pub const FALL_OF_NINEVEH_OFFSET: i32 = 1233;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
