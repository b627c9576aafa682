use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_YEAR};

/// Error type for Jalali construction, conversion and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JalaliError {
    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day is zero or past the end of the month for that year.
    #[error("Invalid day {day} for month {year}-{month:02} (max {max})")]
    InvalidDay { year: u16, month: u8, day: u8, max: u8 },

    /// Hour, minute or second outside the 24/60/60 clock.
    #[error("Invalid time of day: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u8, minute: u8, second: u8 },

    /// Year outside the supported range.
    #[error("Year {0} is outside the supported range {min}-{max}", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(i64),

    /// Elapsed seconds that do not fall between the epoch and the last supported instant.
    #[error("Elapsed seconds {0} are outside the supported range")]
    SecondsOutOfRange(i64),

    /// The Gregorian side of a conversion cannot be represented.
    #[error("Gregorian date is not representable: {0}")]
    GregorianOutOfRange(String),

    /// Input string does not follow `YYYY-MM-DD[ HH:MM:SS]`.
    #[error("Invalid datetime format: {0}")]
    InvalidFormat(String),

    /// Empty input string.
    #[error("Empty datetime string")]
    EmptyInput,
}

impl JalaliError {
    /// True for the errors raised by a field that is out of its valid range.
    pub const fn is_invalid_field(&self) -> bool {
        matches!(
            self,
            Self::InvalidMonth(_) | Self::InvalidDay { .. } | Self::InvalidTime { .. }
        )
    }

    /// True for the errors raised by a value outside the supported calendar range.
    pub const fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::YearOutOfRange(_) | Self::SecondsOutOfRange(_) | Self::GregorianOutOfRange(_)
        )
    }
}
