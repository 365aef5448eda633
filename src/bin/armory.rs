//! Armory CLI Binary
//!
//! Command-line interface for skill and subagent discovery.

use anyhow::Context;
use armory::logging::init_logging;
use armory::tooling::cli::{Cli, CliContext};
use clap::Parser;
use std::process;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let context = CliContext::new(cli.workspace.clone(), cli.config.clone())
        .context("Error initializing workspace")?;

    let logging = cli.logging_config(&context.config().logging);
    init_logging(Some(&logging)).context("Error initializing logging")?;

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
