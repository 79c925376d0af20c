//! Borrowed node handles.

use std::fmt;

use serde::Serialize;

use crate::{Language, NodeId, NodeKind, Span, SyntaxTree};

/// A live node of a [`SyntaxTree`].
///
/// `NodeRef` is a `Copy` handle pairing the tree with a node id. Everything it
/// returns is read from the tree on each call, so values never go stale while
/// the handle exists; the shared borrow of the tree rules out edits for the
/// handle's lifetime.
///
/// # Example
///
/// ```rust
/// use treelint_ast::{NodeKind, TreeBuilder};
///
/// let mut builder = TreeBuilder::new();
/// builder.start_node(NodeKind::Document);
/// builder.token(NodeKind::Text, "hello");
/// builder.finish_node();
/// let tree = builder.finish().unwrap();
///
/// let text = tree.root().first_child().unwrap();
/// assert_eq!(text.kind(), NodeKind::Text);
/// assert_eq!(text.text(), "hello");
/// assert_eq!(text.parent(), Some(tree.root()));
/// ```
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    #[inline]
    pub(crate) fn new(tree: &'t SyntaxTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// Returns the id of this node.
    #[inline]
    pub fn id(self) -> NodeId {
        self.id
    }

    /// Returns the tree this node belongs to.
    #[inline]
    pub fn tree(self) -> &'t SyntaxTree {
        self.tree
    }

    /// Returns the kind of this node.
    #[inline]
    pub fn kind(self) -> NodeKind {
        self.tree.slot(self.id).kind
    }

    /// Returns the grammar of this node's kind.
    #[inline]
    pub fn language(self) -> Language {
        self.kind().language()
    }

    /// Returns the byte span of this node.
    #[inline]
    pub fn span(self) -> Span {
        self.tree.slot(self.id).span
    }

    /// Returns the source text covered by this node.
    pub fn text(self) -> &'t str {
        self.tree.source().get(self.span().range()).unwrap_or_default()
    }

    /// Returns true if this node has no children.
    #[inline]
    pub fn is_leaf(self) -> bool {
        self.tree.slot(self.id).children.is_empty()
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(self) -> usize {
        self.tree.slot(self.id).children.len()
    }

    /// Iterates over the immediate children in source order.
    pub fn children(self) -> impl DoubleEndedIterator<Item = NodeRef<'t>> + ExactSizeIterator {
        let tree = self.tree;
        tree.slot(self.id)
            .children
            .iter()
            .map(move |&id| NodeRef::new(tree, id))
    }

    /// Returns the first child.
    pub fn first_child(self) -> Option<NodeRef<'t>> {
        self.children().next()
    }

    /// Returns the last child.
    pub fn last_child(self) -> Option<NodeRef<'t>> {
        self.children().next_back()
    }

    /// Returns the parent node, or `None` for the root.
    pub fn parent(self) -> Option<NodeRef<'t>> {
        self.tree
            .slot(self.id)
            .parent
            .map(|id| NodeRef::new(self.tree, id))
    }

    /// Iterates over the ancestors of this node, nearest first.
    pub fn ancestors(self) -> impl Iterator<Item = NodeRef<'t>> {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    /// Returns this node's position among its parent's children.
    pub fn index_in_parent(self) -> Option<usize> {
        let parent = self.tree.slot(self.id).parent?;
        self.tree
            .slot(parent)
            .children
            .iter()
            .position(|&id| id == self.id)
    }

    /// Returns the sibling following this node.
    pub fn next_sibling(self) -> Option<NodeRef<'t>> {
        let parent = self.parent()?;
        let index = self.index_in_parent()?;
        parent.children().nth(index + 1)
    }

    /// Returns the sibling preceding this node.
    pub fn prev_sibling(self) -> Option<NodeRef<'t>> {
        let parent = self.parent()?;
        let index = self.index_in_parent()?;
        index.checked_sub(1).and_then(|i| parent.children().nth(i))
    }

    /// Iterates over this node and all of its descendants in pre-order.
    pub fn preorder(self) -> Preorder<'t> {
        Preorder { stack: vec![self] }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.span();
        write!(f, "{}@{}..{}", self.kind(), span.start, span.end)
    }
}

/// Pre-order iterator returned by [`NodeRef::preorder`].
pub struct Preorder<'t> {
    stack: Vec<NodeRef<'t>>,
}

impl<'t> Iterator for Preorder<'t> {
    type Item = NodeRef<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().rev());
        Some(node)
    }
}

impl Serialize for NodeRef<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let kind = self.kind();
        let composite = !kind.is_token() || !self.is_leaf();

        let mut state = serializer.serialize_struct("Node", 3)?;
        state.serialize_field("type", &kind)?;
        state.serialize_field("range", &[self.span().start, self.span().end])?;
        if composite {
            let children: Vec<NodeRef<'_>> = self.children().collect();
            state.serialize_field("children", &children)?;
        } else {
            state.serialize_field("value", self.text())?;
        }
        state.end()
    }
}

impl Serialize for SyntaxTree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.root().serialize(serializer)
    }
}
