//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// treelint - inspections and quick fixes over syntax trees
#[derive(Parser)]
#[command(name = "treelint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect files and directories
    Check {
        /// Files or directories to inspect
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Apply the preferred fix of every diagnostic
        #[arg(long)]
        fix: bool,

        /// Preview fixes without writing files
        #[arg(long, requires = "fix")]
        dry_run: bool,
    },

    /// Print the syntax tree of a file as JSON
    Dump {
        /// File to parse
        file: PathBuf,
    },

    /// List available inspections
    Rules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
