//! Visitor trait for traversing syntax trees.
//!
//! Each `visit_*` method handles one composite kind and by default forwards
//! to [`Visitor::visit_other`], which walks the children. Override only the
//! kinds you care about.
//!
//! # Example
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use treelint_ast::visitor::{VisitResult, Visitor, walk_children, walk_node};
//! use treelint_ast::{NodeKind, NodeRef, TreeBuilder};
//!
//! struct EnumNames<'t> {
//!     names: Vec<&'t str>,
//! }
//!
//! impl<'t> Visitor<'t> for EnumNames<'t> {
//!     fn visit_qualified_name(&mut self, node: NodeRef<'t>) -> VisitResult {
//!         self.names.push(node.text());
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let mut b = TreeBuilder::new();
//! b.start_node(NodeKind::CompilationUnit);
//! b.start_node(NodeKind::EnumDeclaration);
//! b.token(NodeKind::Keyword, "declare enum ");
//! b.start_node(NodeKind::QualifiedName);
//! b.token(NodeKind::Identifier, "Color");
//! b.finish_node();
//! b.finish_node();
//! b.finish_node();
//! let tree = b.finish().unwrap();
//!
//! let mut visitor = EnumNames { names: Vec::new() };
//! walk_node(&mut visitor, tree.root());
//! assert_eq!(visitor.names, vec!["Color"]);
//! ```

use std::ops::ControlFlow;

use crate::{Language, NodeRef};

use super::walk::walk_children;

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue visiting
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Read-only visitor over a [`SyntaxTree`](crate::SyntaxTree).
///
/// The trait is object safe so hosts can hold `Box<dyn Visitor>`.
///
/// # Capability
///
/// [`Visitor::handles`] tells the walker which grammars this visitor has
/// kind-specific handlers for. Composite nodes of any other grammar go to
/// [`Visitor::visit_other`] instead of their `visit_*` method.
pub trait Visitor<'t> {
    /// Returns true if the kind-specific methods apply to `language`.
    #[inline]
    fn handles(&self, _language: Language) -> bool {
        true
    }

    /// Called before a node is dispatched.
    #[inline]
    fn enter_node(&mut self, _node: NodeRef<'t>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after a node and all of its children were visited.
    #[inline]
    fn exit_node(&mut self, _node: NodeRef<'t>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Generic fallback for composite nodes. Walks the children.
    fn visit_other(&mut self, node: NodeRef<'t>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visits a leaf token.
    #[inline]
    fn visit_token(&mut self, _node: NodeRef<'t>) -> VisitResult {
        ControlFlow::Continue(())
    }

    // === Template ===

    fn visit_document(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }

    fn visit_element(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }

    fn visit_start_tag(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }

    fn visit_end_tag(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }

    fn visit_attribute(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }

    fn visit_property_binding(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }

    fn visit_event_binding(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }

    fn visit_attribute_value(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }

    // === Rules ===

    fn visit_compilation_unit(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }

    fn visit_enum_declaration(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }

    fn visit_qualified_name(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }

    fn visit_annotation(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }

    fn visit_enumerative(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }

    fn visit_field(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }

    fn visit_lhs_named_consequence(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }

    fn visit_consequence_id(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }

    fn visit_expression(&mut self, node: NodeRef<'t>) -> VisitResult {
        self.visit_other(node)
    }
}
