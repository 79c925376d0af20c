//! Child accessors shared by the typed views.
//!
//! The grammar decides whether a child is required, optional, or repeated;
//! these helpers express each case against the live tree.

use crate::{MalformedTreeError, NodeKind, NodeRef};

/// Returns the first child of `kind`, or an error if the grammar guaranteed
/// one and it is missing.
pub fn required_child<'t>(
    node: NodeRef<'t>,
    kind: NodeKind,
) -> Result<NodeRef<'t>, MalformedTreeError> {
    optional_child(node, kind)
        .ok_or_else(|| MalformedTreeError::new(node.kind(), kind, node.span()))
}

/// Returns the first child of `kind`, if any.
pub fn optional_child(node: NodeRef<'_>, kind: NodeKind) -> Option<NodeRef<'_>> {
    node.children().find(|child| child.kind() == kind)
}

/// Returns all children of `kind` in source order. Never fails; an absent
/// repetition is an empty list.
pub fn child_list(node: NodeRef<'_>, kind: NodeKind) -> Vec<NodeRef<'_>> {
    node.children().filter(|child| child.kind() == kind).collect()
}
