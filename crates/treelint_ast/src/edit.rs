//! In-place tree edits.
//!
//! Every edit rewrites the source text and the spans in one step: the edited
//! node and its ancestors grow or shrink, everything after the edit moves by
//! the same delta, and removed subtrees are marked dead.

use crate::tree::NodeSlot;
use crate::{NodeId, Span, SyntaxTree, TreeError};

impl SyntaxTree {
    /// Replaces the text of a leaf node.
    ///
    /// Returns the new span of the node.
    pub fn replace_token_text(&mut self, id: NodeId, text: &str) -> Result<Span, TreeError> {
        let slot = self.live_slot(id)?;
        if !slot.children.is_empty() {
            return Err(TreeError::invalid_edit(format!(
                "{} at {}..{} is not a leaf",
                slot.kind, slot.span.start, slot.span.end
            )));
        }
        let old = slot.span;
        let parent = slot.parent;
        let new_len = self.checked_len(old, text.len())?;

        self.source_mut().replace_range(old.range(), text);
        let delta = i64::from(new_len) - i64::from(old.len());
        let span = Span::new(old.start, old.start + new_len);
        self.slot_mut(id).span = span;
        if let Some(parent) = parent {
            let index = self.child_index(parent, id)?;
            self.shift_following(parent, index + 1, delta);
        }

        debug_assert!(self.validate().is_ok());
        Ok(span)
    }

    /// Removes the children of `parent` from `first` through `last`,
    /// inclusive, together with the source text they cover.
    ///
    /// Returns the removed span as it was before the edit.
    pub fn delete_child_range(
        &mut self,
        parent: NodeId,
        first: NodeId,
        last: NodeId,
    ) -> Result<Span, TreeError> {
        self.live_slot(parent)?;
        self.live_slot(first)?;
        self.live_slot(last)?;
        let from = self.child_index(parent, first)?;
        let to = self.child_index(parent, last)?;
        if from > to {
            return Err(TreeError::invalid_edit("first child comes after last child"));
        }

        let removed = Span::new(self.slot(first).span.start, self.slot(last).span.end);
        self.source_mut().replace_range(removed.range(), "");

        let doomed: Vec<NodeId> = self.slot_mut(parent).children.drain(from..=to).collect();
        for id in doomed {
            self.kill_subtree(id);
        }
        self.shift_following(parent, from, -i64::from(removed.len()));

        debug_assert!(self.validate().is_ok());
        Ok(removed)
    }

    fn live_slot(&self, id: NodeId) -> Result<&NodeSlot, TreeError> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.alive)
            .ok_or(TreeError::UnknownNode)
    }

    fn child_index(&self, parent: NodeId, child: NodeId) -> Result<usize, TreeError> {
        self.slot(parent)
            .children
            .iter()
            .position(|&id| id == child)
            .ok_or_else(|| {
                let slot = self.slot(parent);
                TreeError::invalid_edit(format!(
                    "node is not a child of {} at {}..{}",
                    slot.kind, slot.span.start, slot.span.end
                ))
            })
    }

    fn checked_len(&self, replaced: Span, new_len: usize) -> Result<u32, TreeError> {
        let total = self.source().len() - replaced.len() as usize + new_len;
        if total > u32::MAX as usize {
            return Err(TreeError::invalid_edit("source would exceed 4 GiB"));
        }
        Ok(new_len as u32)
    }

    /// Moves the children of `parent` from `from_index` on by `delta`, then
    /// resizes `parent` and repeats the same for each ancestor.
    fn shift_following(&mut self, parent: NodeId, from_index: usize, delta: i64) {
        if delta == 0 {
            return;
        }
        let mut owner = parent;
        let mut index = from_index;
        loop {
            let later: Vec<NodeId> = self.slot(owner).children[index..].to_vec();
            for sibling in later {
                self.shift_subtree(sibling, delta);
            }
            let slot = self.slot_mut(owner);
            slot.span.end = shifted(slot.span.end, delta);

            let Some(next) = self.slot(owner).parent else {
                break;
            };
            index = self
                .slot(next)
                .children
                .iter()
                .position(|&id| id == owner)
                .map_or(0, |i| i + 1);
            owner = next;
        }
    }

    fn shift_subtree(&mut self, id: NodeId, delta: i64) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let slot = self.slot_mut(id);
            slot.span = Span::new(shifted(slot.span.start, delta), shifted(slot.span.end, delta));
            stack.extend(slot.children.iter().copied());
        }
    }

    fn kill_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let slot = self.slot_mut(id);
            slot.alive = false;
            stack.extend(slot.children.iter().copied());
        }
    }
}

fn shifted(offset: u32, delta: i64) -> u32 {
    (i64::from(offset) + delta).clamp(0, i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodeKind, TreeBuilder};
    use pretty_assertions::assert_eq;

    // <a @open="x" id="y">
    fn element() -> SyntaxTree {
        let mut b = TreeBuilder::new();
        b.start_node(NodeKind::Element);
        b.start_node(NodeKind::StartTag);
        b.token(NodeKind::TagOpen, "<");
        b.token(NodeKind::TagName, "a");
        b.token(NodeKind::Whitespace, " ");
        b.start_node(NodeKind::PropertyBinding);
        b.token(NodeKind::AttributeName, "@open");
        b.token(NodeKind::Equals, "=");
        b.start_node(NodeKind::AttributeValue);
        b.token(NodeKind::Quote, "\"");
        b.token(NodeKind::ValueText, "x");
        b.token(NodeKind::Quote, "\"");
        b.finish_node();
        b.finish_node();
        b.token(NodeKind::Whitespace, " ");
        b.start_node(NodeKind::Attribute);
        b.token(NodeKind::AttributeName, "id");
        b.token(NodeKind::Equals, "=");
        b.start_node(NodeKind::AttributeValue);
        b.token(NodeKind::Quote, "\"");
        b.token(NodeKind::ValueText, "y");
        b.token(NodeKind::Quote, "\"");
        b.finish_node();
        b.finish_node();
        b.token(NodeKind::TagClose, ">");
        b.finish_node();
        b.finish_node();
        b.finish().unwrap()
    }

    fn find(tree: &SyntaxTree, kind: NodeKind, nth: usize) -> NodeId {
        tree.root()
            .preorder()
            .filter(|n| n.kind() == kind)
            .nth(nth)
            .unwrap()
            .id()
    }

    #[test]
    fn test_replace_grows_ancestors_and_shifts_followers() {
        let mut tree = element();
        let name = find(&tree, NodeKind::AttributeName, 0);
        let span = tree.replace_token_text(name, "[@open]").unwrap();

        assert_eq!(span, Span::new(3, 10));
        assert_eq!(tree.source(), "<a [@open]=\"x\" id=\"y\">");
        let binding = find(&tree, NodeKind::PropertyBinding, 0);
        assert_eq!(tree.node(binding).unwrap().text(), "[@open]=\"x\"");
        let id_attr = find(&tree, NodeKind::Attribute, 0);
        assert_eq!(tree.node(id_attr).unwrap().text(), "id=\"y\"");
        assert_eq!(tree.root().span(), Span::new(0, 22));
        tree.validate().unwrap();
    }

    #[test]
    fn test_replace_with_shorter_text() {
        let mut tree = element();
        let value = find(&tree, NodeKind::ValueText, 1);
        tree.replace_token_text(value, "").unwrap();
        assert_eq!(tree.source(), "<a @open=\"x\" id=\"\">");
        let tag_close = find(&tree, NodeKind::TagClose, 0);
        assert_eq!(tree.node(tag_close).unwrap().text(), ">");
        tree.validate().unwrap();
    }

    #[test]
    fn test_replace_rejects_composite() {
        let mut tree = element();
        let binding = find(&tree, NodeKind::PropertyBinding, 0);
        let before = tree.source().to_string();
        assert!(matches!(
            tree.replace_token_text(binding, "x"),
            Err(TreeError::InvalidEdit(_))
        ));
        assert_eq!(tree.source(), before);
    }

    #[test]
    fn test_delete_range_marks_nodes_dead() {
        let mut tree = element();
        let binding = find(&tree, NodeKind::PropertyBinding, 0);
        let equals = find(&tree, NodeKind::Equals, 0);
        let value = find(&tree, NodeKind::AttributeValue, 0);
        let value_text = find(&tree, NodeKind::ValueText, 0);

        let removed = tree.delete_child_range(binding, equals, value).unwrap();

        assert_eq!(removed, Span::new(8, 12));
        assert_eq!(tree.source(), "<a @open id=\"y\">");
        assert!(!tree.is_alive(value));
        assert!(!tree.is_alive(value_text));
        assert_eq!(tree.node(binding).unwrap().child_count(), 1);
        let id_attr = find(&tree, NodeKind::Attribute, 0);
        assert_eq!(tree.node(id_attr).unwrap().span(), Span::new(9, 15));
        tree.validate().unwrap();
    }

    #[test]
    fn test_delete_rejects_reversed_range() {
        let mut tree = element();
        let binding = find(&tree, NodeKind::PropertyBinding, 0);
        let name = find(&tree, NodeKind::AttributeName, 0);
        let value = find(&tree, NodeKind::AttributeValue, 0);
        assert!(tree.delete_child_range(binding, value, name).is_err());
    }

    #[test]
    fn test_delete_rejects_foreign_child() {
        let mut tree = element();
        let binding = find(&tree, NodeKind::PropertyBinding, 0);
        let other = find(&tree, NodeKind::Equals, 1);
        assert!(matches!(
            tree.delete_child_range(binding, other, other),
            Err(TreeError::InvalidEdit(_))
        ));
    }

    #[test]
    fn test_edits_on_dead_nodes_fail() {
        let mut tree = element();
        let binding = find(&tree, NodeKind::PropertyBinding, 0);
        let value = find(&tree, NodeKind::AttributeValue, 0);
        let quote = find(&tree, NodeKind::Quote, 0);
        tree.delete_child_range(binding, value, value).unwrap();
        assert_eq!(
            tree.replace_token_text(quote, "'"),
            Err(TreeError::UnknownNode)
        );
    }
}
