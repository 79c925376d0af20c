//! `treelint dump`

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use treelint_ast::RawDocument;

use crate::input::SourceFile;

/// Prints the tree of `file` as a raw tree document.
pub fn run_dump(file: &Path) -> Result<()> {
    let source = SourceFile::load(file).into_diagnostic()?;
    let document = RawDocument::from_tree(&source.tree);
    println!(
        "{}",
        serde_json::to_string_pretty(&document).into_diagnostic()?
    );
    Ok(())
}
