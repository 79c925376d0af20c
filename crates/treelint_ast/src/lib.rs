//! # treelint_ast
//!
//! Syntax tree model for treelint.
//!
//! This crate provides the tree that every other treelint crate works on:
//! one arena-backed [`SyntaxTree`] type for all grammars, tagged with a
//! [`NodeKind`] per node, plus typed views, visitors, queries and in-place
//! edits.
//!
//! ## Architecture
//!
//! - Nodes live in a `Vec` inside the tree and are addressed by [`NodeId`]
//! - Children are owned by their parent; the parent link is an index
//! - Removed nodes are marked dead and their ids never resolve again
//! - Every tree has a process-unique [`TreeId`], so ids can be checked
//!   against the tree they came from
//!
//! ## Example
//!
//! ```rust
//! use treelint_ast::typed::template::PropertyBinding;
//! use treelint_ast::{NodeKind, TreeBuilder};
//!
//! let mut builder = TreeBuilder::new();
//! builder.start_node(NodeKind::PropertyBinding);
//! builder.token(NodeKind::AttributeName, "[@fade]");
//! builder.finish_node();
//! let tree = builder.finish().unwrap();
//!
//! let binding = PropertyBinding::cast(tree.root()).unwrap();
//! assert_eq!(binding.property_name().unwrap(), "fade");
//! ```

pub mod accessor;
mod builder;
mod edit;
mod error;
mod kind;
mod node;
pub mod query;
mod raw;
mod span;
mod tree;
pub mod typed;
pub mod visitor;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use builder::TreeBuilder;
pub use error::{MalformedTreeError, TreeError};
pub use kind::{Language, NodeKind};
pub use node::{NodeRef, Preorder};
pub use raw::{RawDocument, RawNode};
pub use span::{Location, Position, Span};
pub use tree::{NodeId, SyntaxTree, TreeId, TreeProvider};

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor};
