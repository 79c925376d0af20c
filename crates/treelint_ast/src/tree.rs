//! The syntax tree arena.
//!
//! A [`SyntaxTree`] owns its source text and a vector of node slots. Nodes
//! are addressed by [`NodeId`]; each slot owns its ordered children and keeps
//! a non-owning parent index for navigation. Removed nodes stay in the vector
//! marked dead, so an id never resolves to a different node later.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::{Language, Location, NodeKind, NodeRef, Span, TreeError};

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a tree.
///
/// Ids of one tree never resolve in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TreeId(u64);

impl TreeId {
    fn fresh() -> Self {
        Self(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Index of a node inside its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Returns the slot index of this id.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NodeSlot {
    pub(crate) kind: NodeKind,
    pub(crate) span: Span,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) alive: bool,
}

impl NodeSlot {
    pub(crate) fn new(kind: NodeKind, span: Span, children: Vec<NodeId>) -> Self {
        Self {
            kind,
            span,
            parent: None,
            children,
            alive: true,
        }
    }
}

/// Read access to the tree a host currently holds.
pub trait TreeProvider {
    /// Returns the current tree.
    fn tree(&self) -> &SyntaxTree;
}

/// A syntax tree over an owned source text.
///
/// A clone is a separate tree with its own [`TreeId`], so node ids and
/// anchors taken from one copy never resolve in the other.
#[derive(Debug)]
pub struct SyntaxTree {
    id: TreeId,
    source: String,
    pub(crate) slots: Vec<NodeSlot>,
    root: NodeId,
}

impl Clone for SyntaxTree {
    fn clone(&self) -> Self {
        Self {
            id: TreeId::fresh(),
            source: self.source.clone(),
            slots: self.slots.clone(),
            root: self.root,
        }
    }
}

impl TreeProvider for SyntaxTree {
    fn tree(&self) -> &SyntaxTree {
        self
    }
}

impl SyntaxTree {
    /// Assembles a tree from slots whose children lists are filled in.
    ///
    /// Parent links are derived here; the range invariant is checked before
    /// the tree is handed out.
    pub(crate) fn from_parts(
        source: String,
        mut slots: Vec<NodeSlot>,
        root: NodeId,
    ) -> Result<Self, TreeError> {
        for index in 0..slots.len() {
            let children = std::mem::take(&mut slots[index].children);
            for child in &children {
                let slot = slots
                    .get_mut(child.index())
                    .ok_or(TreeError::UnknownNode)?;
                if slot.parent.is_some() {
                    return Err(TreeError::unbalanced(format!(
                        "{} at {}..{} has more than one parent",
                        slot.kind, slot.span.start, slot.span.end
                    )));
                }
                slot.parent = Some(NodeId::from_index(index));
            }
            slots[index].children = children;
        }

        let tree = Self {
            id: TreeId::fresh(),
            source,
            slots,
            root,
        };
        tree.validate()?;
        Ok(tree)
    }

    /// Returns the identity of this tree.
    #[inline]
    pub fn id(&self) -> TreeId {
        self.id
    }

    /// Returns the current source text.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub(crate) fn source_mut(&mut self) -> &mut String {
        &mut self.source
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, self.root)
    }

    /// Returns the id of the root node.
    #[inline]
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Returns the grammar of the root node.
    pub fn language(&self) -> Language {
        self.slot(self.root).kind.language()
    }

    /// Resolves `id` to a live node.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.is_alive(id).then(|| NodeRef::new(self, id))
    }

    /// Returns true if `id` addresses a live node of this tree.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.slots.get(id.index()).is_some_and(|slot| slot.alive)
    }

    /// Returns the number of live nodes.
    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.alive).count()
    }

    /// Computes the line/column location of a span.
    pub fn location(&self, span: Span) -> Location {
        Location::of_span(&self.source, span)
    }

    #[inline]
    pub(crate) fn slot(&self, id: NodeId) -> &NodeSlot {
        &self.slots[id.index()]
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, id: NodeId) -> &mut NodeSlot {
        &mut self.slots[id.index()]
    }

    /// Checks that every live node's span lies inside its parent's span,
    /// that siblings are ordered and non-overlapping, and that all spans are
    /// valid slices of the source.
    pub fn validate(&self) -> Result<(), TreeError> {
        let root = self.slots.get(self.root.index()).ok_or(TreeError::UnknownNode)?;
        if !root.alive || root.parent.is_some() {
            return Err(TreeError::unbalanced("root must be a live node without parent"));
        }

        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let slot = self.slot(id);
            self.check_bounds(slot)?;

            let mut cursor = slot.span.start;
            for &child_id in &slot.children {
                let child = self
                    .slots
                    .get(child_id.index())
                    .filter(|child| child.alive)
                    .ok_or(TreeError::UnknownNode)?;
                if child.parent != Some(id) {
                    return Err(TreeError::invalid_range(
                        child.kind,
                        child.span,
                        "parent link does not match owner",
                    ));
                }
                if child.span.start < cursor {
                    return Err(TreeError::invalid_range(
                        child.kind,
                        child.span,
                        "overlaps previous sibling or starts before parent",
                    ));
                }
                if child.span.end > slot.span.end {
                    return Err(TreeError::invalid_range(
                        child.kind,
                        child.span,
                        format!("extends past parent {} end {}", slot.kind, slot.span.end),
                    ));
                }
                cursor = child.span.end;
                stack.push(child_id);
            }
        }
        Ok(())
    }

    fn check_bounds(&self, slot: &NodeSlot) -> Result<(), TreeError> {
        let span = slot.span;
        if span.start > span.end {
            return Err(TreeError::invalid_range(slot.kind, span, "start after end"));
        }
        if span.end as usize > self.source.len() {
            return Err(TreeError::invalid_range(
                slot.kind,
                span,
                format!("past end of source ({} bytes)", self.source.len()),
            ));
        }
        if !self.source.is_char_boundary(span.start as usize)
            || !self.source.is_char_boundary(span.end as usize)
        {
            return Err(TreeError::invalid_range(
                slot.kind,
                span,
                "not on a character boundary",
            ));
        }
        Ok(())
    }
}
