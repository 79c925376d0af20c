//! Tree queries.
//!
//! All queries are pure reads over the live tree and return nodes in source
//! order.

use crate::{NodeKind, NodeRef, SyntaxTree};

/// Returns the immediate children of `node` with the given kind.
pub fn children_of_kind(node: NodeRef<'_>, kind: NodeKind) -> impl Iterator<Item = NodeRef<'_>> {
    node.children().filter(move |child| child.kind() == kind)
}

/// Returns the first immediate child of `node` with the given kind.
pub fn first_child_of_kind(node: NodeRef<'_>, kind: NodeKind) -> Option<NodeRef<'_>> {
    children_of_kind(node, kind).next()
}

/// Returns the first descendant of `node` with the given kind in pre-order.
///
/// `node` itself is not a candidate.
pub fn first_descendant_of_kind(node: NodeRef<'_>, kind: NodeKind) -> Option<NodeRef<'_>> {
    node.preorder().skip(1).find(|n| n.kind() == kind)
}

/// Returns every descendant of `node` with the given kind in pre-order,
/// excluding `node` itself.
pub fn descendants_of_kind(node: NodeRef<'_>, kind: NodeKind) -> Vec<NodeRef<'_>> {
    node.preorder().skip(1).filter(|n| n.kind() == kind).collect()
}

/// Returns the deepest node whose span contains `offset`.
///
/// An offset at the very end of the source resolves to the root.
pub fn find_covering_node(tree: &SyntaxTree, offset: u32) -> Option<NodeRef<'_>> {
    let root = tree.root();
    let span = root.span();
    if offset < span.start || offset > span.end {
        return None;
    }
    let mut current = root;
    while let Some(child) = current
        .children()
        .find(|child| child.span().contains(offset))
    {
        current = child;
    }
    Some(current)
}
