//! Subcommand implementations

pub mod check;
pub mod dump;
pub mod rules;

use std::env;

use miette::{IntoDiagnostic, Result};
use tracing::info;
use treelint_core::{Inspector, InspectorConfig};

use crate::cli::Cli;

/// Loads the configuration named on the command line, or the nearest
/// configuration file above the working directory.
pub fn load_config(cli: &Cli) -> Result<InspectorConfig> {
    if let Some(ref path) = cli.config {
        info!("Using config: {}", path.display());
        return InspectorConfig::from_file(path).into_diagnostic();
    }

    let cwd = env::current_dir().into_diagnostic()?;
    match InspectorConfig::discover(&cwd) {
        Some(path) => {
            info!("Using config: {}", path.display());
            InspectorConfig::from_file(&path).into_diagnostic()
        }
        None => {
            info!("No config file found, using defaults");
            Ok(InspectorConfig::default())
        }
    }
}

/// Builds the inspector described by `config`.
pub fn build_inspector(config: &InspectorConfig) -> Result<Inspector> {
    Inspector::from_config(config).into_diagnostic()
}
