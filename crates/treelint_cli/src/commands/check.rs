//! `treelint check`

use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result};
use rayon::prelude::*;
use tracing::{debug, error, warn};
use treelint_core::{
    Diagnostic, FixCoordinator, FixExecutor, FixResult, Inspector, WhitespaceFormatter,
};

use super::{build_inspector, load_config};
use crate::cli::{Cli, OutputFormat};
use crate::fix::{FixSummary, output_fix_summary};
use crate::input::{FileFinder, InputError, SourceFile};
use crate::output::output_results;

/// Diagnostics for one file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    /// Fixes applied to the in-memory tree.
    pub fixes_applied: usize,
}

/// Options for fixing during a check.
#[derive(Debug, Clone, Copy)]
struct FixMode {
    dry_run: bool,
    max_iterations: usize,
}

pub fn run_check(
    cli: &Cli,
    paths: &[PathBuf],
    format: OutputFormat,
    fix: bool,
    dry_run: bool,
) -> Result<bool> {
    let config = load_config(cli)?;
    let inspector = build_inspector(&config)?;
    let finder = FileFinder::new(&config.exclude, config.base_dir.as_deref()).into_diagnostic()?;
    let files = finder.discover(paths);

    let fix_mode = fix.then_some(FixMode {
        dry_run,
        max_iterations: config.max_fix_iterations,
    });

    let outcomes: Vec<(PathBuf, Result<FileReport, InputError>)> = files
        .par_iter()
        .map(|path| (path.clone(), check_file(&inspector, path, fix_mode)))
        .collect();

    let mut reports = Vec::with_capacity(outcomes.len());
    let mut failures = 0;
    for (path, outcome) in outcomes {
        match outcome {
            Ok(report) => reports.push(report),
            Err(e) => {
                error!("{}: {}", path.display(), e);
                failures += 1;
            }
        }
    }

    if let (Some(mode), OutputFormat::Text) = (fix_mode, format) {
        output_fix_summary(&FixSummary::from_reports(&reports), mode.dry_run);
    }

    let has_errors = output_results(&reports, format)?;
    Ok(has_errors || failures > 0)
}

fn check_file(
    inspector: &Inspector,
    path: &Path,
    fix_mode: Option<FixMode>,
) -> Result<FileReport, InputError> {
    let mut file = SourceFile::load(path)?;
    let diagnostics = inspector.run(&file);

    let Some(mode) = fix_mode else {
        return Ok(FileReport {
            path: file.path,
            diagnostics,
            fixes_applied: 0,
        });
    };

    let mut executor = FixExecutor::new(WhitespaceFormatter);
    let report = FixCoordinator::new()
        .with_max_iterations(mode.max_iterations)
        .fix_all(inspector, &mut executor, &mut file.tree);
    match report.outcome {
        FixResult::Converged { iterations } => {
            debug!("{}: converged after {} round(s)", path.display(), iterations)
        }
        FixResult::MaxIterationsReached { remaining } => warn!(
            "{}: {} fixable issue(s) remain after the round limit",
            path.display(),
            remaining
        ),
        FixResult::CycleDetected { cycle_length } => warn!(
            "{}: fixes cycle with length {}",
            path.display(),
            cycle_length
        ),
    }

    if mode.dry_run || report.fixes_applied == 0 {
        return Ok(FileReport {
            path: file.path,
            diagnostics,
            fixes_applied: report.fixes_applied,
        });
    }

    file.save()?;
    Ok(FileReport {
        diagnostics: inspector.run(&file),
        path: file.path,
        fixes_applied: report.fixes_applied,
    })
}
