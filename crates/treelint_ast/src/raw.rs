//! Raw parse output exchanged with external grammar producers.
//!
//! A generated parser hands over its output as nested `{ type, range,
//! children }` records over a source text. [`SyntaxTree::from_raw`] turns
//! that into a checked tree; [`SyntaxTree::to_raw`] goes the other way.

use serde::{Deserialize, Serialize};

use crate::tree::NodeSlot;
use crate::{NodeId, NodeKind, NodeRef, Span, SyntaxTree, TreeError};

/// One node of raw parse output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNode {
    /// Grammar production of the node.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// `[start, end)` byte offsets into the source.
    pub range: [u32; 2],
    /// Children in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawNode>,
}

impl RawNode {
    /// Creates a leaf node.
    pub fn leaf(kind: NodeKind, start: u32, end: u32) -> Self {
        Self {
            kind,
            range: [start, end],
            children: Vec::new(),
        }
    }

    /// Creates a composite node.
    pub fn composite(kind: NodeKind, start: u32, end: u32, children: Vec<RawNode>) -> Self {
        Self {
            kind,
            range: [start, end],
            children,
        }
    }

    fn span(&self) -> Span {
        Span::new(self.range[0], self.range[1])
    }
}

/// A source text together with its raw tree, as stored in `.tree.json` files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    /// Full source text.
    pub source: String,
    /// Root of the raw tree.
    pub tree: RawNode,
}

impl RawDocument {
    /// Converts the document into a checked tree.
    pub fn into_tree(self) -> Result<SyntaxTree, TreeError> {
        SyntaxTree::from_raw(self.source, &self.tree)
    }

    /// Captures the current state of a tree.
    pub fn from_tree(tree: &SyntaxTree) -> Self {
        Self {
            source: tree.source().to_string(),
            tree: tree.to_raw(),
        }
    }
}

impl SyntaxTree {
    /// Builds a tree from raw parse output over `source`.
    ///
    /// Fails with [`TreeError::InvalidRange`] if any range lies outside the
    /// source, outside its parent, or overlaps a sibling.
    pub fn from_raw(source: impl Into<String>, raw: &RawNode) -> Result<Self, TreeError> {
        let mut slots = Vec::new();
        let root = push_raw(&mut slots, raw);
        SyntaxTree::from_parts(source.into(), slots, root)
    }

    /// Converts the live tree back into raw parse output.
    pub fn to_raw(&self) -> RawNode {
        to_raw_node(self.root())
    }
}

fn push_raw(slots: &mut Vec<NodeSlot>, raw: &RawNode) -> NodeId {
    let children = raw
        .children
        .iter()
        .map(|child| push_raw(slots, child))
        .collect();
    let id = NodeId::from_index(slots.len());
    slots.push(NodeSlot::new(raw.kind, raw.span(), children));
    id
}

fn to_raw_node(node: NodeRef<'_>) -> RawNode {
    let span = node.span();
    RawNode::composite(
        node.kind(),
        span.start,
        span.end,
        node.children().map(to_raw_node).collect(),
    )
}
