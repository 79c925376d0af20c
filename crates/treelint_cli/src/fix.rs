//! Fix summary reporting

use std::path::PathBuf;

use crate::commands::check::FileReport;

/// Summary of applied fixes.
pub struct FixSummary {
    pub total_fixes: usize,
    pub files_fixed: usize,
    pub fixes_by_file: Vec<(PathBuf, usize)>,
}

impl FixSummary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let fixes_by_file: Vec<(PathBuf, usize)> = reports
            .iter()
            .filter(|report| report.fixes_applied > 0)
            .map(|report| (report.path.clone(), report.fixes_applied))
            .collect();
        Self {
            total_fixes: fixes_by_file.iter().map(|(_, count)| count).sum(),
            files_fixed: fixes_by_file.len(),
            fixes_by_file,
        }
    }
}

/// Outputs the fix summary.
pub fn output_fix_summary(summary: &FixSummary, dry_run: bool) {
    if summary.total_fixes == 0 {
        println!("No fixable issues found.");
        return;
    }

    let action = if dry_run { "Would fix" } else { "Fixed" };
    println!(
        "\n{} {} issues in {} files:",
        action, summary.total_fixes, summary.files_fixed
    );
    for (path, count) in &summary.fixes_by_file {
        println!("  {}: {} fixes", path.display(), count);
    }

    if dry_run {
        println!("\nRun without --dry-run to apply fixes.");
    }
}
