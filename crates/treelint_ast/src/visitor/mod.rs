//! Visitor pattern for syntax tree traversal.
//!
//! # Overview
//!
//! - [`Visitor`] - read-only traversal trait with one method per composite
//!   kind, a generic fallback, and a grammar capability check (`handles`)
//! - [`walk_node`] - the dispatch function
//! - [`walk_children`] - traverse all children of a node
//!
//! Traversal is depth-first pre-order. Returning `ControlFlow::Break(())`
//! from any method stops the walk.

mod visit;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use walk::{walk_children, walk_node};
