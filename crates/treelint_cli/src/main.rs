//! treelint CLI
//!
//! Runs the built-in inspections over template and rule files and applies
//! their quick fixes.

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod fix;
mod input;
mod output;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match &cli.command {
        Commands::Check {
            paths,
            format,
            fix,
            dry_run,
        } => commands::check::run_check(&cli, paths, *format, *fix, *dry_run),
        Commands::Dump { file } => commands::dump::run_dump(file).map(|_| false),
        Commands::Rules => commands::rules::run_rules(&cli).map(|_| false),
    }
}
