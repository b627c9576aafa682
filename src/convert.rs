//! Conversion between elapsed seconds and Jalali fields, and the bridge to
//! chrono's Gregorian calendar.
//!
//! Elapsed seconds count from Farvardin 1, year 1, 00:00:00, which falls on
//! the proleptic Gregorian date [`EPOCH_ANCHOR`]. Jalali fields are wall-clock
//! time in Iran Standard Time; the fixed `+03:30` offset is only applied when
//! an absolute instant ([`DateTime`]) crosses the bridge.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::trace;

use crate::JalaliError;
use crate::consts::{
    DATE_SEPARATOR, DATE_TIME_SEPARATOR, DAYS_BEFORE_MEHR, DAYS_IN_MONTH, EPOCH_ANCHOR, EPOCH_ANCHOR_DAYS_FROM_CE,
    IRAN_STANDARD_OFFSET_SECONDS, MAX_YEAR, MEHR, MIN_DAY, MIN_YEAR, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE, TIME_SEPARATOR,
};
use crate::leap::LeapRule;
use crate::locale::delocalize_digits;
use crate::prelude::*;
use crate::types::{Month, days_in_month_with};

/// A raw Jalali field set, as produced by [`Converter::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(
    fmt = "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
    year,
    month,
    day,
    hour,
    minute,
    second
)]
pub struct Fields {
    pub year:   u16,
    pub month:  u8,
    pub day:    u8,
    pub hour:   u8,
    pub minute: u8,
    pub second: u8,
}

impl Fields {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given day.
    pub const fn date(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Seconds since midnight.
    pub fn seconds_of_day(&self) -> i64 {
        i64::from(self.hour) * SECONDS_PER_HOUR
            + i64::from(self.minute) * SECONDS_PER_MINUTE
            + i64::from(self.second)
    }
}

impl FromStr for Fields {
    type Err = JalaliError;

    /// Reads `YYYY-MM-DD[ HH:MM[:SS]]`, with `T` also accepted between date and
    /// time. Persian and Arabic-Indic digits are read as ASCII.
    ///
    /// Only the shape is checked here; calendar validity is up to the
    /// [`Converter`] that consumes the fields.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(JalaliError::EmptyInput);
        }
        let ascii = delocalize_digits(trimmed);

        let (date, time) = match ascii.split_once([DATE_TIME_SEPARATOR, 'T']) {
            Some((date, time)) => (date, Some(time.trim())),
            None => (ascii.as_str(), None),
        };
        let (year, month, day) = parse_date(date)?;
        let (hour, minute, second) = time.map_or(Ok((0, 0, 0)), parse_time)?;
        Ok(Self::new(year, month, day, hour, minute, second))
    }
}

fn parse_number<T: FromStr>(s: &str) -> Result<T, JalaliError> {
    s.parse::<T>()
        .map_err(|_| JalaliError::InvalidFormat(s.to_owned()))
}

fn parse_date(s: &str) -> Result<(u16, u8, u8), JalaliError> {
    let parts: Vec<&str> = s.split(DATE_SEPARATOR).map(str::trim).collect();
    match parts.as_slice() {
        [year, month, day] => Ok((parse_number(year)?, parse_number(month)?, parse_number(day)?)),
        _ => Err(JalaliError::InvalidFormat(format!(
            "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {s}",
            parts.len()
        ))),
    }
}

fn parse_time(s: &str) -> Result<(u8, u8, u8), JalaliError> {
    let parts: Vec<&str> = s.split(TIME_SEPARATOR).map(str::trim).collect();
    match parts.as_slice() {
        [hour, minute] => Ok((parse_number(hour)?, parse_number(minute)?, 0)),
        [hour, minute, second] => Ok((parse_number(hour)?, parse_number(minute)?, parse_number(second)?)),
        _ => Err(JalaliError::InvalidFormat(format!(
            "Expected HH{TIME_SEPARATOR}MM[{TIME_SEPARATOR}SS], found {} component(s): {s}",
            parts.len()
        ))),
    }
}

/// Jalali calendar engine bound to one leap-year rule.
///
/// Encode and decode always go through the same rule, so values produced by
/// one converter round-trip only through that converter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Converter {
    pub leap_rule: LeapRule,
}

impl Converter {
    /// The converter behind [`JalaliDateTime`](crate::JalaliDateTime).
    pub const CANONICAL: Self = Self::new(LeapRule::Residue128);

    pub const fn new(leap_rule: LeapRule) -> Self {
        Self { leap_rule }
    }

    pub const fn is_leap_year(&self, year: u16) -> bool {
        self.leap_rule.is_leap_year(year as u32)
    }

    /// Number of days in `month` of `year`.
    ///
    /// # Errors
    /// Returns `JalaliError::InvalidMonth` if the month is not in `1..=12`.
    pub fn days_in_month(&self, year: u16, month: u8) -> Result<u8, JalaliError> {
        Month::new(month)?;
        Ok(days_in_month_with(self.leap_rule, u32::from(year), month))
    }

    /// Elapsed seconds of the last supported instant, 9999-12-end 23:59:59.
    pub fn max_elapsed_seconds(&self) -> i64 {
        self.leap_rule.days_before_year(u32::from(MAX_YEAR) + 1) * SECONDS_PER_DAY - 1
    }

    /// Checks every field against the calendar.
    ///
    /// # Errors
    /// Returns the first invalid field as `YearOutOfRange`, `InvalidMonth`,
    /// `InvalidDay` or `InvalidTime`.
    pub fn validate(&self, fields: &Fields) -> Result<(), JalaliError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&fields.year) {
            return Err(JalaliError::YearOutOfRange(i64::from(fields.year)));
        }
        let max = self.days_in_month(fields.year, fields.month)?;
        if fields.day < MIN_DAY || fields.day > max {
            return Err(JalaliError::InvalidDay {
                year: fields.year,
                month: fields.month,
                day: fields.day,
                max,
            });
        }
        if fields.hour >= 24 || fields.minute >= 60 || fields.second >= 60 {
            return Err(JalaliError::InvalidTime {
                hour:   fields.hour,
                minute: fields.minute,
                second: fields.second,
            });
        }
        Ok(())
    }

    /// Elapsed seconds since Farvardin 1, year 1 for a valid field set.
    ///
    /// # Errors
    /// Returns an invalid-field or range error if `fields` fails [`Self::validate`].
    pub fn encode(&self, fields: &Fields) -> Result<i64, JalaliError> {
        self.validate(fields)?;
        let days = self.leap_rule.days_before_year(u32::from(fields.year))
            + days_before_month(fields.month)
            + i64::from(fields.day - 1);
        let seconds = days * SECONDS_PER_DAY + fields.seconds_of_day();
        trace!(%fields, seconds, rule = %self.leap_rule, "encoded");
        Ok(seconds)
    }

    /// Encodes a field set whose day may run past either end of the month.
    ///
    /// Only the year and month are checked; the day offset is carried into
    /// neighbouring months by the arithmetic itself.
    pub(crate) fn encode_lenient(
        &self,
        year: i64,
        month: u8,
        day: i64,
        seconds_of_day: i64,
    ) -> Result<i64, JalaliError> {
        let year = u32::try_from(year)
            .ok()
            .filter(|y| (u32::from(MIN_YEAR)..=u32::from(MAX_YEAR)).contains(y))
            .ok_or(JalaliError::YearOutOfRange(year))?;
        Month::new(month)?;
        let days = self.leap_rule.days_before_year(year) + days_before_month(month) + day - 1;
        Ok(days * SECONDS_PER_DAY + seconds_of_day)
    }

    /// Jalali fields for `seconds` elapsed since Farvardin 1, year 1.
    ///
    /// # Errors
    /// Returns `JalaliError::SecondsOutOfRange` if `seconds` is negative or
    /// past [`Self::max_elapsed_seconds`].
    pub fn decode(&self, seconds: i64) -> Result<Fields, JalaliError> {
        if !(0..=self.max_elapsed_seconds()).contains(&seconds) {
            return Err(JalaliError::SecondsOutOfRange(seconds));
        }
        let days = seconds.div_euclid(SECONDS_PER_DAY);
        let time = seconds.rem_euclid(SECONDS_PER_DAY);

        let year = self.leap_rule.year_of_day(days);
        let (month, day) = month_day_of_ordinal(days - self.leap_rule.days_before_year(year));
        let (hour, minute, second) = split_time_of_day(time);

        let fields = Fields {
            year: u16::try_from(year).map_err(|_| JalaliError::YearOutOfRange(i64::from(year)))?,
            month,
            day,
            hour,
            minute,
            second,
        };
        trace!(seconds, %fields, rule = %self.leap_rule, "decoded");
        Ok(fields)
    }

    /// Jalali wall-clock fields for a Gregorian wall-clock time.
    ///
    /// Sub-second precision is dropped.
    ///
    /// # Errors
    /// Returns `JalaliError::SecondsOutOfRange` for dates before the epoch
    /// anchor or past the last supported Jalali year.
    pub fn from_naive(&self, datetime: &NaiveDateTime) -> Result<Fields, JalaliError> {
        let days = i64::from(datetime.date().num_days_from_ce()) - i64::from(EPOCH_ANCHOR_DAYS_FROM_CE);
        let seconds = days * SECONDS_PER_DAY + i64::from(datetime.time().num_seconds_from_midnight());
        self.decode(seconds)
    }

    /// Gregorian wall-clock time for Jalali wall-clock fields.
    ///
    /// # Errors
    /// Returns an invalid-field error if `fields` is not a valid date, or
    /// `JalaliError::GregorianOutOfRange` if chrono cannot hold the result.
    pub fn to_naive(&self, fields: &Fields) -> Result<NaiveDateTime, JalaliError> {
        let seconds = self.encode(fields)?;
        let days = seconds.div_euclid(SECONDS_PER_DAY) + i64::from(EPOCH_ANCHOR_DAYS_FROM_CE);
        let date = i32::try_from(days)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or_else(|| JalaliError::GregorianOutOfRange(fields.to_string()))?;
        let (hour, minute, second) = (fields.hour, fields.minute, fields.second);
        let time = NaiveTime::from_hms_opt(u32::from(hour), u32::from(minute), u32::from(second))
            .ok_or(JalaliError::InvalidTime { hour, minute, second })?;
        Ok(date.and_time(time))
    }

    /// Jalali fields, on Iran Standard Time, for an instant in any time zone.
    ///
    /// # Errors
    /// Returns `JalaliError::SecondsOutOfRange` if the instant is outside the
    /// supported Jalali range.
    pub fn from_gregorian<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> Result<Fields, JalaliError> {
        let utc = datetime.naive_utc();
        let local = utc
            .checked_add_signed(iran_standard_offset())
            .ok_or_else(|| JalaliError::GregorianOutOfRange(utc.to_string()))?;
        self.from_naive(&local)
    }

    /// The UTC instant of Jalali fields read on Iran Standard Time.
    ///
    /// # Errors
    /// Same as [`Self::to_naive`].
    pub fn to_gregorian(&self, fields: &Fields) -> Result<DateTime<Utc>, JalaliError> {
        let local = self.to_naive(fields)?;
        local
            .checked_sub_signed(iran_standard_offset())
            .map(|utc| utc.and_utc())
            .ok_or_else(|| JalaliError::GregorianOutOfRange(local.to_string()))
    }
}

/// The Gregorian date of the epoch anchor.
pub fn epoch_anchor() -> Option<NaiveDate> {
    let (year, month, day) = EPOCH_ANCHOR;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn iran_standard_offset() -> TimeDelta {
    TimeDelta::seconds(i64::from(IRAN_STANDARD_OFFSET_SECONDS))
}

/// Days in the months of a year before `month`, leap day excluded.
pub(crate) fn days_before_month(month: u8) -> i64 {
    DAYS_IN_MONTH[1..usize::from(month)]
        .iter()
        .map(|&d| i64::from(d))
        .sum()
}

/// Month and day for a zero-based day of the year.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn month_day_of_ordinal(ordinal: i64) -> (u8, u8) {
    let first_half = i64::from(DAYS_BEFORE_MEHR);
    if ordinal < first_half {
        ((ordinal / 31 + 1) as u8, (ordinal % 31 + 1) as u8)
    } else {
        let rest = ordinal - first_half;
        ((rest / 30) as u8 + MEHR, (rest % 30 + 1) as u8)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn split_time_of_day(seconds: i64) -> (u8, u8, u8) {
    (
        (seconds / SECONDS_PER_HOUR) as u8,
        (seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8,
        (seconds % SECONDS_PER_MINUTE) as u8,
    )
}
