//! Parse error types.

use thiserror::Error;
use treelint_ast::TreeError;

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source text cannot be turned into a tree.
    #[error("Invalid source at byte {offset}: {message}")]
    InvalidSource {
        /// Error message.
        message: String,
        /// Byte offset where the offending construct starts.
        offset: usize,
    },

    /// The parser produced events that do not form a valid tree.
    #[error("Internal parser error: {0}")]
    Internal(#[from] TreeError),
}

impl ParseError {
    /// Creates an invalid source error at `offset`.
    pub fn invalid_source_at(message: impl Into<String>, offset: usize) -> Self {
        Self::InvalidSource {
            message: message.into(),
            offset,
        }
    }

    /// Returns the byte offset of an invalid source error.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::InvalidSource { offset, .. } => Some(*offset),
            Self::Internal(_) => None,
        }
    }
}
