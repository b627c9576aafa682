mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        },
    }
}

fn run(cli: Cli) -> Result<String> {
    let locale = cli.locale;
    match cli.command {
        Command::Now(args) => commands::now(args.leap_rule, locale),
        Command::FromGregorian(args) => commands::from_gregorian(args.rule.leap_rule, locale, &args.input),
        Command::ToGregorian(args) => commands::to_gregorian(args.rule.leap_rule, &args.input, args.utc),
        Command::Info(args) => commands::info(locale, args.input.as_deref()),
    }
}
