use crate::JalaliError;
use crate::consts::{DAYS_IN_MONTH, ESFAND, ESFAND_DAYS_LEAP, MAX_MONTH, MAX_YEAR, MIN_DAY};
use crate::leap::LeapRule;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A Jalali year guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `JalaliError::YearOutOfRange` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, JalaliError> {
        let non_zero = NonZeroU16::new(value).ok_or(JalaliError::YearOutOfRange(i64::from(value)))?;
        if value > MAX_YEAR {
            return Err(JalaliError::YearOutOfRange(i64::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Returns whether this year has a 30-day Esfand
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = JalaliError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (Farvardin..=Esfand)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `JalaliError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, JalaliError> {
        let non_zero = NonZeroU8::new(value).ok_or(JalaliError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(JalaliError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = JalaliError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `JalaliError::InvalidMonth` if the month is invalid, or
    /// `JalaliError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, JalaliError> {
        Month::new(month)?;
        let max = days_in_month(year, month);
        let invalid = JalaliError::InvalidDay {
            year,
            month,
            day: value,
            max,
        };

        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > max {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = JalaliError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so only the longest month bounds it
        if value < MIN_DAY || value > DAYS_IN_MONTH[1] {
            return Err(JalaliError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
                max: DAYS_IN_MONTH[1],
            });
        }
        NonZeroU8::new(value).map(Self).ok_or(JalaliError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
            max: DAYS_IN_MONTH[1],
        })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

/// Day of the week. The Jalali week starts on Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Friday,
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl Weekday {
    /// All weekdays in week order, starting from Friday.
    pub const ALL: [Self; 7] = [
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
    ];

    /// Weekday of a day counted from Farvardin 1, year 1 (a Friday).
    pub const fn from_elapsed_days(days: i64) -> Self {
        Self::ALL[days.rem_euclid(7) as usize]
    }

    /// Position in the week, 0 for Friday through 6 for Thursday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Day after this one.
    pub const fn succ(self) -> Self {
        Self::ALL[(self.index() as usize + 1) % 7]
    }

    /// Day before this one.
    pub const fn pred(self) -> Self {
        Self::ALL[(self.index() as usize + 6) % 7]
    }
}

/// Leap-year test with the canonical residue table.
pub const fn is_leap_year(year: u16) -> bool {
    LeapRule::Residue128.is_leap_year(year as u32)
}

/// Number of days in `month` of `year` with the canonical leap rule.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    days_in_month_with(LeapRule::Residue128, year as u32, month)
}

/// Number of days in `month` of `year` under `rule`.
pub(crate) const fn days_in_month_with(rule: LeapRule, year: u32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == ESFAND && rule.is_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
