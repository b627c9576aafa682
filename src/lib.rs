mod consts;
mod convert;
mod error;
mod leap;
mod locale;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use convert::{Converter, Fields, epoch_anchor};
pub use error::JalaliError;
pub use leap::{LeapRule, UnknownLeapRule};
pub use locale::{Locale, LocaleTable, delocalize_digits};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::convert::days_before_month;

/// A Jalali date and time of day, read on Iran Standard Time.
///
/// Values are always valid calendar positions and are never mutated in
/// place: arithmetic and locale changes return a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JalaliDateTime {
    year:   Year,
    month:  Month,
    day:    Day,
    hour:   u8,
    minute: u8,
    second: u8,
    locale: Locale,
}

/// The current Jalali date and time.
///
/// # Errors
/// Returns a range error if the system clock is outside the supported years.
pub fn now() -> Result<JalaliDateTime, JalaliError> {
    JalaliDateTime::now()
}

/// The Jalali date and time exactly one day before now.
///
/// # Errors
/// Same as [`now`].
pub fn yesterday() -> Result<JalaliDateTime, JalaliError> {
    JalaliDateTime::from_gregorian(&(Utc::now() - TimeDelta::days(1)))
}

/// The Jalali date and time exactly one day after now.
///
/// # Errors
/// Same as [`now`].
pub fn tomorrow() -> Result<JalaliDateTime, JalaliError> {
    JalaliDateTime::from_gregorian(&(Utc::now() + TimeDelta::days(1)))
}

impl JalaliDateTime {
    /// Creates a validated datetime in the default locale.
    ///
    /// # Errors
    /// Returns `YearOutOfRange`, `InvalidMonth`, `InvalidDay` or `InvalidTime`
    /// for the first field that does not fit the calendar.
    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Result<Self, JalaliError> {
        let year_typed = Year::new(year)?;
        let month_typed = Month::new(month)?;
        let day_typed = Day::new(day, year, month)?;
        if hour >= 24 || minute >= 60 || second >= 60 {
            return Err(JalaliError::InvalidTime { hour, minute, second });
        }
        Ok(Self {
            year: year_typed,
            month: month_typed,
            day: day_typed,
            hour,
            minute,
            second,
            locale: Locale::default(),
        })
    }

    /// Midnight at the start of the given day.
    ///
    /// # Errors
    /// Same as [`Self::new`].
    pub fn from_date(year: u16, month: u8, day: u8) -> Result<Self, JalaliError> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Creates a datetime from a raw field set.
    ///
    /// # Errors
    /// Same as [`Self::new`].
    pub fn from_fields(fields: Fields) -> Result<Self, JalaliError> {
        Self::new(fields.year, fields.month, fields.day, fields.hour, fields.minute, fields.second)
    }

    /// The current date and time on the wall clock.
    ///
    /// # Errors
    /// Returns a range error if the system clock is outside the supported years.
    pub fn now() -> Result<Self, JalaliError> {
        let now = Self::from_gregorian(&Utc::now())?;
        debug!(%now, "read wall clock");
        Ok(now)
    }

    /// Converts an instant in any time zone to Jalali on Iran Standard Time.
    ///
    /// # Errors
    /// Returns `SecondsOutOfRange` for instants before Farvardin 1, year 1 or
    /// past the end of year 9999.
    pub fn from_gregorian<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<Self, JalaliError> {
        Self::from_fields(Converter::CANONICAL.from_gregorian(datetime)?)
    }

    /// The UTC instant of this value.
    ///
    /// # Errors
    /// Returns `GregorianOutOfRange` if chrono cannot represent the instant.
    pub fn to_gregorian(&self) -> Result<DateTime<Utc>, JalaliError> {
        Converter::CANONICAL.to_gregorian(&self.fields())
    }

    /// Converts a Gregorian wall-clock time, with no time-zone shift.
    ///
    /// # Errors
    /// Same as [`Self::from_gregorian`].
    pub fn from_naive(datetime: &NaiveDateTime) -> Result<Self, JalaliError> {
        Self::from_fields(Converter::CANONICAL.from_naive(datetime)?)
    }

    /// The Gregorian wall-clock time with the same time of day.
    ///
    /// # Errors
    /// Same as [`Self::to_gregorian`].
    pub fn to_naive(&self) -> Result<NaiveDateTime, JalaliError> {
        Converter::CANONICAL.to_naive(&self.fields())
    }

    /// Decodes seconds elapsed since Farvardin 1, year 1, 00:00:00.
    ///
    /// # Errors
    /// Returns `SecondsOutOfRange` if `seconds` is negative or past the end of year 9999.
    pub fn from_elapsed_seconds(seconds: i64) -> Result<Self, JalaliError> {
        Self::from_fields(Converter::CANONICAL.decode(seconds)?)
    }

    /// Seconds elapsed since Farvardin 1, year 1, 00:00:00.
    pub fn elapsed_seconds(&self) -> i64 {
        self.elapsed_days() * SECONDS_PER_DAY + self.seconds_of_day()
    }

    /// Returns a copy of this value that formats in `locale`.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Adds a signed duration; sub-second parts are dropped.
    ///
    /// # Errors
    /// Returns `SecondsOutOfRange` if the result leaves the supported range.
    pub fn checked_add(&self, duration: TimeDelta) -> Result<Self, JalaliError> {
        let seconds = self
            .elapsed_seconds()
            .checked_add(duration.num_seconds())
            .ok_or(JalaliError::SecondsOutOfRange(i64::MAX))?;
        Ok(Self::from_elapsed_seconds(seconds)?.with_locale(self.locale))
    }

    /// Subtracts a signed duration; sub-second parts are dropped.
    ///
    /// # Errors
    /// Same as [`Self::checked_add`].
    pub fn checked_sub(&self, duration: TimeDelta) -> Result<Self, JalaliError> {
        let seconds = self
            .elapsed_seconds()
            .checked_sub(duration.num_seconds())
            .ok_or(JalaliError::SecondsOutOfRange(i64::MIN))?;
        Ok(Self::from_elapsed_seconds(seconds)?.with_locale(self.locale))
    }

    /// Adds calendar years, months and days.
    ///
    /// Months carry into years in both directions. A day that no longer fits
    /// its month rolls forward, so `1402-06-31` plus one month is `1402-08-01`.
    ///
    /// # Errors
    /// Returns a range error if the shifted year or the result is out of range.
    pub fn add_date(&self, years: i32, months: i32, days: i32) -> Result<Self, JalaliError> {
        let month_index = i64::from(self.month()) - 1 + i64::from(months);
        let year = i64::from(self.year()) + i64::from(years) + month_index.div_euclid(12);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = (month_index.rem_euclid(12) + 1) as u8;

        let seconds = Converter::CANONICAL.encode_lenient(
            year,
            month,
            i64::from(self.day()) + i64::from(days),
            self.seconds_of_day(),
        )?;
        Ok(Self::from_elapsed_seconds(seconds)?.with_locale(self.locale))
    }

    /// The same time of day, one day earlier.
    ///
    /// # Errors
    /// Returns a range error on Farvardin 1, year 1.
    pub fn yesterday(&self) -> Result<Self, JalaliError> {
        self.shift_days_through_gregorian(-1)
    }

    /// The same time of day, one day later.
    ///
    /// # Errors
    /// Returns a range error on the last day of year 9999.
    pub fn tomorrow(&self) -> Result<Self, JalaliError> {
        self.shift_days_through_gregorian(1)
    }

    fn shift_days_through_gregorian(&self, days: i64) -> Result<Self, JalaliError> {
        let instant = self.to_gregorian()?;
        let shifted = instant
            .checked_add_signed(TimeDelta::days(days))
            .ok_or_else(|| JalaliError::GregorianOutOfRange(instant.to_string()))?;
        Ok(Self::from_gregorian(&shifted)?.with_locale(self.locale))
    }

    /// Returns the year
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// The raw field set of this value.
    pub const fn fields(&self) -> Fields {
        Fields::new(self.year(), self.month(), self.day(), self.hour, self.minute, self.second)
    }

    /// Position in the week, 0 for Friday through 6 for Thursday.
    pub fn day_of_week(&self) -> u8 {
        self.weekday().index()
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_elapsed_days(self.elapsed_days())
    }

    /// One-based day of the year, 1 for Farvardin 1.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn day_of_year(&self) -> u16 {
        (days_before_month(self.month()) + i64::from(self.day())) as u16
    }

    pub const fn day_of_month(&self) -> u8 {
        self.day()
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Number of days in this value's month.
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    /// Localized name of the month.
    pub fn month_name(&self) -> &'static str {
        self.locale.month_name(i64::from(self.month()) - 1)
    }

    /// Localized name of the weekday.
    pub fn weekday_name(&self) -> &'static str {
        self.locale.weekday(self.weekday())
    }

    fn elapsed_days(&self) -> i64 {
        Converter::CANONICAL.leap_rule.days_before_year(u32::from(self.year()))
            + days_before_month(self.month())
            + i64::from(self.day())
            - 1
    }

    fn seconds_of_day(&self) -> i64 {
        self.fields().seconds_of_day()
    }
}

impl FromStr for JalaliDateTime {
    type Err = JalaliError;

    /// Parses `YYYY-MM-DD`, `YYYY-MM-DD HH:MM` or `YYYY-MM-DD HH:MM:SS`.
    ///
    /// Persian or Arabic-Indic digits are accepted and select the Persian locale.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Fields = s.parse()?;
        let locale = if Locale::has_native_digits(s) {
            Locale::Persian
        } else {
            Locale::English
        };
        Ok(Self::from_fields(fields)?.with_locale(locale))
    }
}

impl fmt::Display for JalaliDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.locale.localize_digits(&self.fields().to_string()))
    }
}

impl PartialOrd for JalaliDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JalaliDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        // Calendar position first, locale only breaks ties
        match self.fields().cmp(&other.fields()) {
            Ordering::Equal => self.locale.cmp(&other.locale),
            ord => ord,
        }
    }
}

impl TryFrom<Fields> for JalaliDateTime {
    type Error = JalaliError;

    fn try_from(fields: Fields) -> Result<Self, Self::Error> {
        Self::from_fields(fields)
    }
}

impl TryFrom<(u16, u8, u8, u8, u8, u8)> for JalaliDateTime {
    type Error = JalaliError;

    fn try_from(value: (u16, u8, u8, u8, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2, value.3, value.4, value.5)
    }
}

impl From<JalaliDateTime> for Fields {
    fn from(datetime: JalaliDateTime) -> Self {
        datetime.fields()
    }
}

impl serde::Serialize for JalaliDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
