//! Walk functions for tree traversal.
//!
//! [`walk_node`] is the only place that maps a node kind to a visitor
//! method.

use std::ops::ControlFlow;

use crate::{NodeKind, NodeRef};

use super::visit::{VisitResult, Visitor};

/// Walks a node by dispatching to the matching visitor method.
///
/// This function:
/// 1. Calls `enter_node` on the visitor
/// 2. Dispatches tokens to `visit_token`, composites of a grammar the visitor
///    handles to their `visit_*` method, and all other composites to
///    `visit_other`
/// 3. Calls `exit_node` on the visitor
pub fn walk_node<'t, V>(visitor: &mut V, node: NodeRef<'t>) -> VisitResult
where
    V: Visitor<'t> + ?Sized,
{
    visitor.enter_node(node)?;

    let kind = node.kind();
    let result = if kind.is_token() {
        visitor.visit_token(node)
    } else if !visitor.handles(node.language()) {
        visitor.visit_other(node)
    } else {
        match kind {
            NodeKind::Document => visitor.visit_document(node),
            NodeKind::Element => visitor.visit_element(node),
            NodeKind::StartTag => visitor.visit_start_tag(node),
            NodeKind::EndTag => visitor.visit_end_tag(node),
            NodeKind::Attribute => visitor.visit_attribute(node),
            NodeKind::PropertyBinding => visitor.visit_property_binding(node),
            NodeKind::EventBinding => visitor.visit_event_binding(node),
            NodeKind::AttributeValue => visitor.visit_attribute_value(node),

            NodeKind::CompilationUnit => visitor.visit_compilation_unit(node),
            NodeKind::EnumDeclaration => visitor.visit_enum_declaration(node),
            NodeKind::QualifiedName => visitor.visit_qualified_name(node),
            NodeKind::Annotation => visitor.visit_annotation(node),
            NodeKind::Enumerative => visitor.visit_enumerative(node),
            NodeKind::Field => visitor.visit_field(node),
            NodeKind::LhsNamedConsequence => visitor.visit_lhs_named_consequence(node),
            NodeKind::ConsequenceId => visitor.visit_consequence_id(node),
            NodeKind::Expression => visitor.visit_expression(node),

            // Token kinds never reach this arm; a composite built from one
            // still gets a generic walk.
            _ => visitor.visit_other(node),
        }
    };

    result?;

    visitor.exit_node(node)
}

/// Walks all children of a node, stopping at the first `Break`.
#[inline]
pub fn walk_children<'t, V>(visitor: &mut V, node: NodeRef<'t>) -> VisitResult
where
    V: Visitor<'t> + ?Sized,
{
    for child in node.children() {
        walk_node(visitor, child)?;
    }
    ControlFlow::Continue(())
}
