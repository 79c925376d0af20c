//! Engine error types.

use thiserror::Error;
use treelint_ast::{MalformedTreeError, Span, TreeError};

/// Errors raised while applying a fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixError {
    /// The anchor's target no longer resolves to a live attribute of the
    /// tree the diagnostic was produced for.
    #[error("Stale anchor at {}..{}: the fix target no longer exists", span.start, span.end)]
    StaleAnchor {
        /// Span of the anchor node at diagnosis time.
        span: Span,
    },

    /// The edit itself was rejected.
    #[error("Tree edit failed: {0}")]
    Tree(#[from] TreeError),

    /// The target is missing a child its grammar guarantees.
    #[error(transparent)]
    Malformed(#[from] MalformedTreeError),
}

/// Errors that can occur while setting up or feeding an inspection pass.
#[derive(Debug, Error)]
pub enum InspectError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configuration names an inspection that is not registered.
    #[error("Unknown inspection: {0}")]
    UnknownInspection(String),
}

impl InspectError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
