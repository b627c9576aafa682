use clap::{Parser, Subcommand};
use jalali::{LeapRule, Locale};

/// Jalali calendar converter.
#[derive(Parser)]
#[command(
    name = "jalali",
    version,
    about = "Convert datetimes between the Gregorian and Jalali (Persian) calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output locale tag (`en`, `fa`, `fa-IR`, ...).
    #[arg(short, long, global = true, default_value = "en", value_parser = parse_locale)]
    pub locale: Locale,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the current Jalali date and time on Iran Standard Time.
    Now(RuleArgs),
    /// Convert a Gregorian date, wall-clock time or RFC 3339 instant to Jalali.
    FromGregorian(FromGregorianArgs),
    /// Convert a Jalali date or datetime to Gregorian.
    ToGregorian(ToGregorianArgs),
    /// Describe a Jalali date: weekday, month name, day of year and more.
    Info(InfoArgs),
}

/// Leap-year rule selection shared by the converting subcommands.
#[derive(clap::Args)]
pub struct RuleArgs {
    /// Leap-year rule (`residue128`, `cycle33` or `quadrennial`).
    #[arg(long = "leap-rule", default_value_t = LeapRule::default())]
    pub leap_rule: LeapRule,
}

/// Arguments for the `from-gregorian` subcommand.
#[derive(clap::Args)]
pub struct FromGregorianArgs {
    /// `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` (Iran wall clock) or an RFC 3339 instant.
    pub input: String,

    #[command(flatten)]
    pub rule: RuleArgs,
}

/// Arguments for the `to-gregorian` subcommand.
#[derive(clap::Args)]
pub struct ToGregorianArgs {
    /// `YYYY-MM-DD[ HH:MM[:SS]]`, in ASCII or Persian digits.
    pub input: String,

    /// Print the UTC instant instead of the Gregorian wall-clock time.
    #[arg(long)]
    pub utc: bool,

    #[command(flatten)]
    pub rule: RuleArgs,
}

/// Arguments for the `info` subcommand.
#[derive(clap::Args)]
pub struct InfoArgs {
    /// `YYYY-MM-DD[ HH:MM[:SS]]`; defaults to now.
    pub input: Option<String>,
}

#[allow(clippy::unnecessary_wraps)]
fn parse_locale(tag: &str) -> Result<Locale, std::convert::Infallible> {
    Ok(Locale::from_tag(tag))
}
