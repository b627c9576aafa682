//! Leap-year rules for the Jalali calendar.
//!
//! Jalali leap years follow the vernal equinox, so every rule here is an
//! arithmetic approximation. [`LeapRule::Residue128`] is the canonical one and
//! the only rule [`JalaliDateTime`](crate::JalaliDateTime) uses; the other two
//! are cruder and must be selected explicitly through a
//! [`Converter`](crate::Converter).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_IN_COMMON_YEAR, RESIDUE_SWITCH_YEAR};
use crate::prelude::*;

/// Residues of `year % 128` that are always leap.
const ALWAYS_LEAP_RESIDUES: [u32; 27] = [
    0, 4, 8, 12, 16, 20, 29, 33, 37, 41, 45, 49, 53, 62, 66, 70, 74, 78, 82, 86, 95, 99, 103, 107,
    111, 115, 124,
];

/// Residues that are leap only after `RESIDUE_SWITCH_YEAR`.
const LATE_LEAP_RESIDUES: [u32; 4] = [24, 57, 90, 119];

/// Residues that are leap only up to and including `RESIDUE_SWITCH_YEAR`.
const EARLY_LEAP_RESIDUES: [u32; 4] = [25, 58, 91, 120];

/// A leap-year oracle.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LeapRule {
    /// 128-year residue table with the year-473 cycle discontinuity.
    #[default]
    #[display(fmt = "residue128")]
    Residue128,
    /// 33-year arithmetic cycle: leap iff `(25 * year + 11) % 33 < 8`.
    #[display(fmt = "cycle33")]
    Cycle33,
    /// Every fourth year: leap iff `year % 4 == 3`.
    #[display(fmt = "quadrennial")]
    Quadrennial,
}

/// Error returned when a leap rule name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown leap rule: {0} (expected residue128, cycle33 or quadrennial)")]
pub struct UnknownLeapRule(pub String);

impl LeapRule {
    /// All rules, canonical first.
    pub const ALL: [Self; 3] = [Self::Residue128, Self::Cycle33, Self::Quadrennial];

    /// Returns whether `year` has a 30-day Esfand under this rule.
    pub const fn is_leap_year(self, year: u32) -> bool {
        match self {
            Self::Residue128 => residue128_is_leap(year),
            Self::Cycle33 => (25 * (year as u64) + 11) % 33 < 8,
            Self::Quadrennial => year % 4 == 3,
        }
    }

    /// Length in years of the repeating cycle and the number of leap years in it.
    ///
    /// Every aligned block `[k * len, (k + 1) * len)` holds exactly `leaps` leap years.
    pub const fn cycle(self) -> (u32, u32) {
        match self {
            Self::Residue128 => (128, 31),
            Self::Cycle33 => (33, 8),
            Self::Quadrennial => (4, 1),
        }
    }

    /// Number of leap years in `1..year`.
    pub fn leap_years_before(self, year: u32) -> u32 {
        if year <= 1 {
            return 0;
        }
        let (len, leaps) = self.cycle();
        let base = year / len * len;
        let partial = (base..year).filter(|&y| self.is_leap_year(y)).count() as u32;
        // counted from year 0, which is not part of the calendar
        year / len * leaps + partial - u32::from(self.is_leap_year(0))
    }

    /// Days from Farvardin 1, year 1 to Farvardin 1 of `year`.
    pub fn days_before_year(self, year: u32) -> i64 {
        if year <= 1 {
            return 0;
        }
        i64::from(year - 1) * DAYS_IN_COMMON_YEAR + i64::from(self.leap_years_before(year))
    }

    /// Number of days in `year` (365 or 366).
    pub const fn days_in_year(self, year: u32) -> i64 {
        if self.is_leap_year(year) {
            DAYS_IN_COMMON_YEAR + 1
        } else {
            DAYS_IN_COMMON_YEAR
        }
    }

    /// Year containing the zero-based day count `days` since Farvardin 1, year 1.
    pub fn year_of_day(self, days: i64) -> u32 {
        let (len, leaps) = self.cycle();
        let cycle_days = i64::from(len) * DAYS_IN_COMMON_YEAR + i64::from(leaps);
        let estimate = (days.max(0) * i64::from(len) / cycle_days + 1).clamp(1, i64::from(u32::MAX));
        let mut year = u32::try_from(estimate).unwrap_or(u32::MAX);

        while year > 1 && self.days_before_year(year) > days {
            year -= 1;
        }
        while self.days_before_year(year + 1) <= days {
            year += 1;
        }
        year
    }
}

const fn residue128_is_leap(year: u32) -> bool {
    let r = year % 128;
    if contains(&ALWAYS_LEAP_RESIDUES, r) {
        true
    } else if contains(&LATE_LEAP_RESIDUES, r) {
        year > RESIDUE_SWITCH_YEAR
    } else if contains(&EARLY_LEAP_RESIDUES, r) {
        year <= RESIDUE_SWITCH_YEAR
    } else {
        false
    }
}

const fn contains(table: &[u32], value: u32) -> bool {
    let mut i = 0;
    while i < table.len() {
        if table[i] == value {
            return true;
        }
        i += 1;
    }
    false
}

impl FromStr for LeapRule {
    type Err = UnknownLeapRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "residue128" | "residue" | "128" => Ok(Self::Residue128),
            "cycle33" | "33" => Ok(Self::Cycle33),
            "quadrennial" | "4" => Ok(Self::Quadrennial),
            _ => Err(UnknownLeapRule(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residue128_cases() {
        struct TestCase {
            year:        u32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        1402,
                is_leap:     false,
                description: "residue 122",
            },
            TestCase {
                year:        1403,
                is_leap:     false,
                description: "residue 123",
            },
            TestCase {
                year:        1404,
                is_leap:     true,
                description: "residue 124",
            },
            TestCase {
                year:        1399,
                is_leap:     true,
                description: "residue 119, after the switch year",
            },
            TestCase {
                year:        408,
                is_leap:     false,
                description: "late residue 24 before the switch year",
            },
            TestCase {
                year:        409,
                is_leap:     true,
                description: "early residue 25 before the switch year",
            },
            TestCase {
                year:        473,
                is_leap:     false,
                description: "switch year itself, residue 89",
            },
            TestCase {
                year:        474,
                is_leap:     true,
                description: "late residue 90 after the switch year",
            },
            TestCase {
                year:        475,
                is_leap:     false,
                description: "early residue 91 after the switch year",
            },
            TestCase {
                year:        128,
                is_leap:     true,
                description: "residue 0",
            },
        ];

        for case in &cases {
            assert_eq!(
                LeapRule::Residue128.is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_alternative_rules() {
        assert!(LeapRule::Cycle33.is_leap_year(1399));
        assert!(!LeapRule::Cycle33.is_leap_year(1402));
        assert!(LeapRule::Cycle33.is_leap_year(1403));
        assert!(!LeapRule::Cycle33.is_leap_year(1404));
        assert!(LeapRule::Cycle33.is_leap_year(1408));

        assert!(!LeapRule::Quadrennial.is_leap_year(1402));
        assert!(LeapRule::Quadrennial.is_leap_year(1403));
        assert!(!LeapRule::Quadrennial.is_leap_year(1404));
    }

    #[test]
    fn test_cycle_counts_match_rule() {
        for rule in LeapRule::ALL {
            let (len, leaps) = rule.cycle();
            for block in 0..10 {
                let count = (block * len..(block + 1) * len)
                    .filter(|&y| rule.is_leap_year(y))
                    .count() as u32;
                assert_eq!(count, leaps, "{rule} block {block}");
            }
        }
    }

    #[test]
    fn test_leap_years_before_matches_scan() {
        for rule in LeapRule::ALL {
            let mut scanned = 0;
            for year in 1..2000 {
                assert_eq!(rule.leap_years_before(year), scanned, "{rule} year {year}");
                if rule.is_leap_year(year) {
                    scanned += 1;
                }
            }
        }
    }

    #[test]
    fn test_days_before_year() {
        assert_eq!(LeapRule::Residue128.days_before_year(1), 0);
        assert_eq!(LeapRule::Residue128.days_before_year(2), 365);
        for rule in LeapRule::ALL {
            for year in 1..600 {
                assert_eq!(
                    rule.days_before_year(year + 1) - rule.days_before_year(year),
                    rule.days_in_year(year),
                    "{rule} year {year}"
                );
            }
        }
    }

    #[test]
    fn test_year_of_day() {
        for rule in LeapRule::ALL {
            for year in (1..9999).step_by(37) {
                let first = rule.days_before_year(year);
                let last = first + rule.days_in_year(year) - 1;
                assert_eq!(rule.year_of_day(first), year, "{rule} first day of {year}");
                assert_eq!(rule.year_of_day(last), year, "{rule} last day of {year}");
            }
        }
    }

    #[test]
    fn test_from_str_and_display() {
        for rule in LeapRule::ALL {
            assert_eq!(rule.to_string().parse::<LeapRule>(), Ok(rule));
        }
        assert!("gregorian".parse::<LeapRule>().is_err());
        assert_eq!(LeapRule::default(), LeapRule::Residue128);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&LeapRule::Cycle33).unwrap();
        assert_eq!(json, r#""cycle33""#);
        let parsed: LeapRule = serde_json::from_str(r#""residue128""#).unwrap();
        assert_eq!(parsed, LeapRule::Residue128);
    }
}
