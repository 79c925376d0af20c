//! Output formatting module

mod json;
mod text;

use miette::Result;
use treelint_core::Severity;

use crate::cli::OutputFormat;
use crate::commands::check::FileReport;

/// Prints the reports and returns whether any error-severity diagnostic
/// remains.
pub fn output_results(reports: &[FileReport], format: OutputFormat) -> Result<bool> {
    let has_errors = reports.iter().any(|report| {
        report
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    });

    match format {
        OutputFormat::Json => json::output_json(reports)?,
        OutputFormat::Text => text::output_text(reports),
    }

    Ok(has_errors)
}
