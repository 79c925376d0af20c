//! Text output formatter

use treelint_core::{Diagnostic, QuickFix, Severity};

use crate::commands::check::FileReport;

pub fn output_text(reports: &[FileReport]) {
    for report in reports {
        if report.diagnostics.is_empty() {
            continue;
        }

        println!("\n{}:", report.path.display());
        for diag in &report.diagnostics {
            println!("  {}", format_diagnostic(diag));
            for fix in &diag.fixes {
                println!("      fix: {}", fix.display_name());
            }
        }
    }

    let total_issues: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
    println!();
    println!(
        "Checked {} files, found {} issues",
        reports.len(),
        total_issues
    );
}

fn format_diagnostic(diag: &Diagnostic) -> String {
    let severity = match diag.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    };
    let position = match diag.loc {
        Some(loc) => format!("{}:{}", loc.start.line, loc.start.column + 1),
        None => format!("{}:{}", diag.span().start, diag.span().end),
    };
    format!(
        "{} {} [{}]: {}",
        position, severity, diag.inspection_id, diag.message
    )
}
