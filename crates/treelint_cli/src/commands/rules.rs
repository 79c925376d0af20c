//! `treelint rules`

use miette::Result;
use treelint_ast::Language;
use treelint_core::Severity;

use super::{build_inspector, load_config};
use crate::cli::Cli;

/// Lists the inspections that the current configuration enables.
pub fn run_rules(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let inspector = build_inspector(&config)?;

    for (inspection, severity) in inspector.inspections() {
        println!(
            "{:<40} {:<8} {:<9} {}",
            inspection.id(),
            severity_name(severity),
            language_name(inspection.language()),
            inspection.description()
        );
    }
    Ok(())
}

fn severity_name(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    }
}

fn language_name(language: Language) -> &'static str {
    match language {
        Language::Template => "template",
        Language::Rules => "rules",
        Language::Common => "common",
    }
}
