//! Parser trait definition.

use treelint_ast::SyntaxTree;

use crate::ParseError;

/// Turns source text into a [`SyntaxTree`].
///
/// # Example
///
/// ```rust
/// use treelint_ast::{NodeKind, SyntaxTree, TreeBuilder};
/// use treelint_parser::{ParseError, Parser};
///
/// struct WholeText;
///
/// impl Parser for WholeText {
///     fn name(&self) -> &str {
///         "whole-text"
///     }
///
///     fn extensions(&self) -> &[&str] {
///         &["txt"]
///     }
///
///     fn parse(&self, source: &str) -> Result<SyntaxTree, ParseError> {
///         let mut builder = TreeBuilder::new();
///         builder.start_node(NodeKind::Document);
///         builder.token(NodeKind::Text, source);
///         builder.finish_node();
///         Ok(builder.finish()?)
///     }
/// }
///
/// assert!(WholeText.can_parse("TXT"));
/// ```
pub trait Parser: Send + Sync {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles, without the dot.
    fn extensions(&self) -> &[&str];

    /// Parses the source text into a tree that owns a copy of it.
    fn parse(&self, source: &str) -> Result<SyntaxTree, ParseError>;

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
