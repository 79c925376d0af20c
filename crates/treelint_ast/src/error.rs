//! Tree error types.

use thiserror::Error;

use crate::{NodeKind, Span};

/// A child the grammar guarantees is missing.
///
/// This points at a defect in the producer of the tree, not at user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed tree: {parent} at {}..{} has no {expected} child", span.start, span.end)]
pub struct MalformedTreeError {
    /// Kind of the node whose child is missing.
    pub parent: NodeKind,
    /// Kind of the missing child.
    pub expected: NodeKind,
    /// Span of the parent node.
    pub span: Span,
}

impl MalformedTreeError {
    /// Creates a new malformed tree error.
    pub fn new(parent: NodeKind, expected: NodeKind, span: Span) -> Self {
        Self {
            parent,
            expected,
            span,
        }
    }
}

/// Errors raised while building or editing a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A node's range violates the containment/ordering invariant or the
    /// source bounds.
    #[error("Invalid range for {kind} at {}..{}: {message}", span.start, span.end)]
    InvalidRange {
        kind: NodeKind,
        span: Span,
        message: String,
    },

    /// Builder events did not form exactly one balanced root.
    #[error("Unbalanced tree: {0}")]
    Unbalanced(String),

    /// The node id does not resolve to a live node.
    #[error("Node does not resolve to a live node")]
    UnknownNode,

    /// The edit is not applicable to the addressed nodes.
    #[error("Invalid edit: {0}")]
    InvalidEdit(String),

    /// A required child is missing.
    #[error(transparent)]
    Malformed(#[from] MalformedTreeError),
}

impl TreeError {
    /// Creates an invalid range error.
    pub fn invalid_range(kind: NodeKind, span: Span, message: impl Into<String>) -> Self {
        Self::InvalidRange {
            kind,
            span,
            message: message.into(),
        }
    }

    /// Creates an unbalanced tree error.
    pub fn unbalanced(message: impl Into<String>) -> Self {
        Self::Unbalanced(message.into())
    }

    /// Creates an invalid edit error.
    pub fn invalid_edit(message: impl Into<String>) -> Self {
        Self::InvalidEdit(message.into())
    }
}
