//! Shared constructors for unit tests.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::JalaliDateTime;

pub fn jalali(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> JalaliDateTime {
    JalaliDateTime::new(year, month, day, hour, minute, second)
        .unwrap_or_else(|e| panic!("invalid test datetime {year}-{month}-{day}: {e}"))
}

pub fn jalali_date(year: u16, month: u8, day: u8) -> JalaliDateTime {
    jalali(year, month, day, 0, 0, 0)
}

pub fn naive(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .unwrap_or_else(|| panic!("invalid test gregorian {year}-{month}-{day}"))
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(&naive(year, month, day, hour, minute, second))
}
