//! # treelint_core
//!
//! Inspection and fix engine for treelint.
//!
//! This crate provides:
//! - The `Inspector` that runs inspections over a syntax tree
//! - Diagnostics with anchors that stay checkable after edits
//! - Quick fixes applied through a `FixExecutor` with a formatting hook
//! - Configuration loading
//!
//! ## Example
//!
//! ```rust
//! use treelint_core::{FixExecutor, Inspector, NoopFormatter};
//! use treelint_parser::{Parser, TemplateParser};
//!
//! let mut tree = TemplateParser::new().parse(r#"<div @fade="state"></div>"#).unwrap();
//! let inspector = Inspector::with_defaults();
//!
//! let diagnostics = inspector.run(&tree);
//! assert_eq!(diagnostics.len(), 1);
//!
//! let mut executor = FixExecutor::new(NoopFormatter);
//! let diagnostic = &diagnostics[0];
//! executor
//!     .apply_fix(&mut tree, &diagnostic.fixes[0], &diagnostic.anchor)
//!     .unwrap();
//! assert_eq!(tree.source(), r#"<div [@fade]="state"></div>"#);
//! ```

mod collector;
mod config;
mod diagnostic;
mod error;
mod fix;
mod fixer;
mod format;
mod inspection;
pub mod inspections;
mod inspector;
mod quick_fix;

pub use collector::{ProblemCollector, ProblemsHolder};
pub use config::{CONFIG_FILE_NAME, InspectionOption, InspectorConfig};
pub use diagnostic::{Anchor, Diagnostic, Severity};
pub use error::{FixError, InspectError};
pub use fix::{FixCoordinator, FixReport, FixResult};
pub use fixer::{FixExecutor, FormatSession};
pub use format::{Formatter, NoopFormatter, WhitespaceFormatter};
pub use inspection::{Inspection, InspectionContext, PassState, PassStats};
pub use inspector::{InspectionSummary, Inspector};
pub use quick_fix::{Fix, FixContext, FixKind, FixOutcome, QuickFix, resolve_target};
