//! Dirmap CLI Binary
//!
//! Builds path resolvers from a directory map file and prints them.

use anyhow::Context;
use clap::Parser;
use dirmap::logging::init_logging;
use dirmap::tooling::cli::{Cli, CliContext};
use std::process;

fn run(cli: &Cli) -> anyhow::Result<String> {
    let logging = cli.logging_config().context("Error reading log flags")?;
    init_logging(Some(&logging)).context("Error initializing logging")?;
    let context = CliContext::new(cli).context("Error loading options")?;
    Ok(context.execute(&cli.command)?)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
