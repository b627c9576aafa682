//! Weekday names, month names and digit glyphs for the supported locales.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prelude::*;
use crate::types::Weekday;

/// Output language of a [`JalaliDateTime`](crate::JalaliDateTime).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Locale {
    /// Latin transliterations and ASCII digits.
    #[default]
    #[display(fmt = "en")]
    #[serde(rename = "en")]
    English,
    /// Persian script and Persian digits.
    #[display(fmt = "fa")]
    #[serde(rename = "fa")]
    Persian,
}

/// Static name and glyph tables for one locale.
#[derive(Debug)]
pub struct LocaleTable {
    /// Weekday names, starting from Friday.
    pub weekdays: [&'static str; 7],
    /// Month names, Farvardin first.
    pub months:   [&'static str; 12],
    /// Glyphs for the digits 0 through 9.
    pub digits:   [char; 10],
}

static ENGLISH: LocaleTable = LocaleTable {
    weekdays: ["Friday", "Saturday", "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"],
    months:   [
        "Farvardin",
        "Ordibehesht",
        "Khordad",
        "Tir",
        "Mordad",
        "Shahrivar",
        "Mehr",
        "Aban",
        "Azar",
        "Dey",
        "Bahman",
        "Esfand",
    ],
    digits:   ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
};

static PERSIAN: LocaleTable = LocaleTable {
    weekdays: ["جمعه", "شنبه", "یکشنبه", "دوشنبه", "سه شنبه", "چهارشنبه", "پنجشنبه"],
    months:   [
        "فروردین",
        "اردیبهشت",
        "خرداد",
        "تیر",
        "مرداد",
        "شهریور",
        "مهر",
        "آبان",
        "آذر",
        "دی",
        "بهمن",
        "اسفند",
    ],
    digits:   ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'],
};

impl Locale {
    /// Resolves a locale tag such as `en`, `fa`, `fa-IR` or `persian`.
    ///
    /// Unrecognized tags fall back to the default locale.
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.trim().to_ascii_lowercase();
        let language = normalized.split(['-', '_']).next().unwrap_or_default();
        match language {
            "fa" | "per" | "fas" | "persian" | "farsi" => Self::Persian,
            "en" | "eng" | "english" => Self::English,
            _ => {
                debug!(tag, fallback = %Self::default(), "unknown locale tag");
                Self::default()
            },
        }
    }

    /// The static tables for this locale.
    pub fn table(self) -> &'static LocaleTable {
        match self {
            Self::English => &ENGLISH,
            Self::Persian => &PERSIAN,
        }
    }

    /// Name of the weekday at `index` (0 is Friday); out-of-range indices give Friday.
    pub fn weekday_name(self, index: i64) -> &'static str {
        let weekdays = &self.table().weekdays;
        usize::try_from(index)
            .ok()
            .and_then(|i| weekdays.get(i))
            .copied()
            .unwrap_or(weekdays[0])
    }

    /// Name of `weekday`.
    pub fn weekday(self, weekday: Weekday) -> &'static str {
        self.table().weekdays[weekday.index() as usize]
    }

    /// Name of the month at zero-based `index` (0 is Farvardin); out-of-range indices give Farvardin.
    pub fn month_name(self, index: i64) -> &'static str {
        let months = &self.table().months;
        usize::try_from(index)
            .ok()
            .and_then(|i| months.get(i))
            .copied()
            .unwrap_or(months[0])
    }

    /// Replaces every ASCII digit in `text` with this locale's glyph.
    pub fn localize_digits(self, text: &str) -> String {
        let digits = &self.table().digits;
        text.chars()
            .map(|c| c.to_digit(10).map_or(c, |d| digits[d as usize]))
            .collect()
    }

    /// Whether `text` contains any Persian or Arabic-Indic digit.
    pub fn has_native_digits(text: &str) -> bool {
        text.chars().any(|c| native_digit_value(c).is_some())
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

/// Replaces Persian (U+06F0..U+06F9) and Arabic-Indic (U+0660..U+0669) digits with ASCII digits.
pub fn delocalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| native_digit_value(c).map_or(c, |d| char::from(b'0' + d)))
        .collect()
}

fn native_digit_value(c: char) -> Option<u8> {
    match c {
        '\u{06F0}'..='\u{06F9}' => u8::try_from(u32::from(c) - 0x06F0).ok(),
        '\u{0660}'..='\u{0669}' => u8::try_from(u32::from(c) - 0x0660).ok(),
        _ => None,
    }
}
