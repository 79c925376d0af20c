//! Finding, loading and saving input files.

use std::fs;
use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use thiserror::Error;
use tracing::{debug, info};
use treelint_ast::{RawDocument, SyntaxTree, TreeError, TreeProvider};
use treelint_parser::{ParseError, Parser, TemplateParser};
use walkdir::WalkDir;

/// Suffix of files holding raw parse output.
const RAW_TREE_SUFFIX: &str = ".tree.json";

/// Errors that can occur while reading or writing an input file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid tree: {0}")]
    Tree(#[from] TreeError),

    #[error("Invalid tree JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported file type: {}", .0.display())]
    Unsupported(PathBuf),

    #[error("Invalid exclude pattern: {0}")]
    Pattern(#[from] globset::Error),
}

/// How a file turns into a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Markup parsed by the template parser.
    Template,
    /// A `*.tree.json` document with source text and raw parse output.
    RawTree,
}

impl InputKind {
    /// Detects the kind of `path` from its name.
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name.ends_with(RAW_TREE_SUFFIX) {
            return Some(InputKind::RawTree);
        }
        let extension = path.extension()?.to_str()?;
        TemplateParser::new()
            .can_parse(extension)
            .then_some(InputKind::Template)
    }
}

/// A loaded input file.
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub kind: InputKind,
    pub tree: SyntaxTree,
}

impl SourceFile {
    /// Reads and parses `path`.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let kind = InputKind::detect(path).ok_or_else(|| InputError::Unsupported(path.into()))?;
        let content = fs::read_to_string(path)?;
        let tree = match kind {
            InputKind::Template => TemplateParser::new().parse(&content)?,
            InputKind::RawTree => serde_json::from_str::<RawDocument>(&content)?.into_tree()?,
        };
        debug!("Loaded {} ({} nodes)", path.display(), tree.node_count());
        Ok(Self {
            path: path.to_path_buf(),
            kind,
            tree,
        })
    }

    /// Renders the current tree in the file's own format.
    pub fn render(&self) -> Result<String, InputError> {
        match self.kind {
            InputKind::Template => Ok(self.tree.source().to_string()),
            InputKind::RawTree => {
                let document = RawDocument::from_tree(&self.tree);
                Ok(serde_json::to_string_pretty(&document)? + "\n")
            }
        }
    }

    /// Writes the current tree back to disk.
    pub fn save(&self) -> Result<(), InputError> {
        fs::write(&self.path, self.render()?)?;
        Ok(())
    }
}

impl TreeProvider for SourceFile {
    fn tree(&self) -> &SyntaxTree {
        &self.tree
    }
}

/// Expands the given paths into the list of supported files.
///
/// Directories are walked recursively. Explicit file paths are kept even if
/// their type is unsupported so the caller can report them. Paths matching
/// an exclude pattern are skipped.
pub struct FileFinder {
    exclude: Option<GlobSet>,
    /// Directory exclude patterns are relative to.
    root: Option<PathBuf>,
}

impl FileFinder {
    /// Builds a finder whose exclude patterns match paths as given and, when
    /// `root` is set, paths relative to `root`.
    pub fn new(exclude: &[String], root: Option<&Path>) -> Result<Self, InputError> {
        if exclude.is_empty() {
            return Ok(Self {
                exclude: None,
                root: None,
            });
        }
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude {
            builder.add(Glob::new(pattern)?);
        }
        let root = match root {
            Some(root) => Some(normalize(&std::path::absolute(root)?)),
            None => None,
        };
        Ok(Self {
            exclude: Some(builder.build()?),
            root,
        })
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let Some(set) = &self.exclude else {
            return false;
        };
        if set.is_match(path) || path.strip_prefix("./").is_ok_and(|p| set.is_match(p)) {
            return true;
        }
        let Some(root) = &self.root else {
            return false;
        };
        std::path::absolute(path)
            .map(|absolute| normalize(&absolute))
            .is_ok_and(|absolute| {
                absolute
                    .strip_prefix(root)
                    .is_ok_and(|relative| set.is_match(relative))
            })
    }

    pub fn discover(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for path in paths {
            if path.is_dir() {
                for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
                    let candidate = entry.path();
                    if entry.file_type().is_file()
                        && InputKind::detect(candidate).is_some()
                        && !self.is_excluded(candidate)
                    {
                        files.push(candidate.to_path_buf());
                    }
                }
            } else if path.is_file() && !self.is_excluded(path) {
                files.push(path.clone());
            }
        }

        files.sort();
        files.dedup();

        info!("Discovered {} files to inspect", files.len());
        files
    }
}

/// Drops `.` and folds `..` without touching the file system.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
