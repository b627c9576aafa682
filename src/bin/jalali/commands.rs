//! Subcommand bodies. Each returns the text to print.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use jalali::{Converter, Fields, JalaliDateTime, LeapRule, Locale};
use tracing::info;

const GREGORIAN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now(leap_rule: LeapRule, locale: Locale) -> Result<String> {
    let fields = Converter::new(leap_rule).from_gregorian(&Utc::now())?;
    Ok(render(fields, locale))
}

pub fn from_gregorian(leap_rule: LeapRule, locale: Locale, input: &str) -> Result<String> {
    let converter = Converter::new(leap_rule);
    let input = input.trim();
    let fields = match DateTime::parse_from_rfc3339(input) {
        Ok(instant) => converter.from_gregorian(&instant)?,
        Err(_) => converter.from_naive(&parse_wall_clock(input)?)?,
    };
    info!(input, %fields, rule = %leap_rule, "converted to jalali");
    Ok(render(fields, locale))
}

pub fn to_gregorian(leap_rule: LeapRule, input: &str, utc: bool) -> Result<String> {
    let converter = Converter::new(leap_rule);
    let fields: Fields = input
        .parse()
        .with_context(|| format!("reading Jalali datetime {input:?}"))?;
    let output = if utc {
        converter
            .to_gregorian(&fields)?
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    } else {
        converter.to_naive(&fields)?.format(GREGORIAN_FORMAT).to_string()
    };
    info!(%fields, %output, rule = %leap_rule, "converted to gregorian");
    Ok(output)
}

pub fn info(locale: Locale, input: Option<&str>) -> Result<String> {
    let datetime = match input {
        Some(input) => input
            .parse::<JalaliDateTime>()
            .with_context(|| format!("reading Jalali datetime {input:?}"))?,
        None => JalaliDateTime::now()?,
    }
    .with_locale(locale);

    let mut out = String::new();
    writeln!(out, "date:            {datetime}")?;
    writeln!(out, "weekday:         {}", datetime.weekday_name())?;
    writeln!(out, "month:           {}", datetime.month_name())?;
    writeln!(out, "day of year:     {}", datetime.day_of_year())?;
    writeln!(out, "days in month:   {}", datetime.days_in_month())?;
    writeln!(out, "leap year:       {}", datetime.is_leap_year())?;
    writeln!(out, "elapsed seconds: {}", datetime.elapsed_seconds())?;
    write!(
        out,
        "gregorian (UTC): {}",
        datetime.to_gregorian()?.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    Ok(out)
}

fn render(fields: Fields, locale: Locale) -> String {
    locale.localize_digits(&fields.to_string())
}

fn parse_wall_clock(input: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, GREGORIAN_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDate::parse_from_str(input, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN)))
        .with_context(|| format!("{input:?} is not a Gregorian date, wall-clock time or RFC 3339 instant"))
}
