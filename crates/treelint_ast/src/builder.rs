//! Event-based tree construction.
//!
//! Producers (parsers, generated grammars, test fixtures) describe the tree
//! as a sequence of `start_node` / `token` / `finish_node` events. The
//! builder concatenates token text into the source and derives every span
//! from it, so the resulting tree satisfies the range invariant by
//! construction.

use crate::tree::NodeSlot;
use crate::{NodeId, NodeKind, Span, SyntaxTree, TreeError};

struct OpenNode {
    kind: NodeKind,
    start: u32,
    children: Vec<NodeId>,
}

/// Builds a [`SyntaxTree`] from construction events.
///
/// # Example
///
/// ```rust
/// use treelint_ast::{NodeKind, TreeBuilder};
///
/// let mut builder = TreeBuilder::new();
/// builder.start_node(NodeKind::CompilationUnit);
/// builder.start_node(NodeKind::EnumDeclaration);
/// builder.token(NodeKind::Keyword, "declare enum");
/// builder.token(NodeKind::Whitespace, " ");
/// builder.start_node(NodeKind::QualifiedName);
/// builder.token(NodeKind::Identifier, "Color");
/// builder.finish_node();
/// builder.finish_node();
/// builder.finish_node();
///
/// let tree = builder.finish().unwrap();
/// assert_eq!(tree.source(), "declare enum Color");
/// ```
#[derive(Default)]
pub struct TreeBuilder {
    source: String,
    slots: Vec<NodeSlot>,
    stack: Vec<OpenNode>,
    root: Option<NodeId>,
    error: Option<TreeError>,
}

impl TreeBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a composite node; subsequent events become its children.
    pub fn start_node(&mut self, kind: NodeKind) {
        if self.root.is_some() {
            self.fail(format!("{kind} started after the root was finished"));
            return;
        }
        self.stack.push(OpenNode {
            kind,
            start: self.offset(),
            children: Vec::new(),
        });
    }

    /// Appends a leaf node covering `text`.
    pub fn token(&mut self, kind: NodeKind, text: &str) {
        let start = self.offset();
        self.source.push_str(text);
        let span = Span::new(start, self.offset());
        let id = self.push_slot(NodeSlot::new(kind, span, Vec::new()));
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(id),
            None => self.fail(format!("{kind} token outside of any node")),
        }
    }

    /// Closes the most recently opened node.
    pub fn finish_node(&mut self) {
        let Some(open) = self.stack.pop() else {
            self.fail("finish_node without matching start_node");
            return;
        };
        let span = Span::new(open.start, self.offset());
        let id = self.push_slot(NodeSlot::new(open.kind, span, open.children));
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(id),
            None => self.root = Some(id),
        }
    }

    /// Returns the current end offset of the source.
    pub fn offset(&self) -> u32 {
        self.source.len() as u32
    }

    /// Returns how many nodes are currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Consumes the builder and returns the tree.
    pub fn finish(self) -> Result<SyntaxTree, TreeError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if let Some(open) = self.stack.last() {
            return Err(TreeError::unbalanced(format!(
                "{} node left open ({} open nodes)",
                open.kind,
                self.stack.len()
            )));
        }
        let root = self
            .root
            .ok_or_else(|| TreeError::unbalanced("no root node"))?;
        SyntaxTree::from_parts(self.source, self.slots, root)
    }

    fn push_slot(&mut self, slot: NodeSlot) -> NodeId {
        let id = NodeId::from_index(self.slots.len());
        self.slots.push(slot);
        id
    }

    fn fail(&mut self, message: impl Into<String>) {
        if self.error.is_none() {
            self.error = Some(TreeError::unbalanced(message));
        }
    }
}
