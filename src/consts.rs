/// Minimum valid Jalali year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid Jalali year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for Mehr, the first 30-day month
pub const MEHR: u8 = 7;
/// Month number for Esfand, the month that carries the leap day
pub const ESFAND: u8 = 12;

/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by the leap rule)
];

/// Days elapsed in the first half of the year, before Mehr 1
pub(crate) const DAYS_BEFORE_MEHR: u16 = 186;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: i64 = 365;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Last year in which the residue table still uses the early-cycle leap residues
pub(crate) const RESIDUE_SWITCH_YEAR: u32 = 473;

/// Proleptic Gregorian date of Farvardin 1, year 1: (year, month, day)
pub const EPOCH_ANCHOR: (i32, u32, u32) = (622, 3, 22);

/// `EPOCH_ANCHOR` expressed as days from the common era (0001-01-01 is day 1)
pub(crate) const EPOCH_ANCHOR_DAYS_FROM_CE: i32 = 226_896;

/// Iran Standard Time (+03:30), the wall clock Jalali fields are read on
pub const IRAN_STANDARD_OFFSET_SECONDS: i32 = 3 * 3600 + 30 * 60;

/// Date component separator
pub const DATE_SEPARATOR: char = '-';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Separator between the date and the time
pub const DATE_TIME_SEPARATOR: char = ' ';
