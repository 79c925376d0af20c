//! Formatting seam used after fixes.

use tracing::{debug, warn};
use treelint_ast::{NodeId, NodeKind, Span, SyntaxTree};

/// Re-normalizes a region of the tree after an edit.
///
/// `range` comes from the fix that just ran and may be slightly off or
/// point past the end of the source; implementations must clamp rather
/// than fail.
pub trait Formatter {
    /// Reformats the nodes inside `range`.
    fn reformat(&mut self, tree: &mut SyntaxTree, range: Span);
}

/// Leaves the tree untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFormatter;

impl Formatter for NoopFormatter {
    fn reformat(&mut self, _tree: &mut SyntaxTree, _range: Span) {}
}

/// Collapses single-line whitespace tokens inside the range to one space.
///
/// Whitespace containing a line break is left alone so layout survives.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceFormatter;

impl Formatter for WhitespaceFormatter {
    fn reformat(&mut self, tree: &mut SyntaxTree, range: Span) {
        let range = range.clamp_to(tree.source().len() as u32);
        let targets: Vec<NodeId> = tree
            .root()
            .preorder()
            .filter(|node| {
                node.kind() == NodeKind::Whitespace
                    && range.contains_span(&node.span())
                    && node.text() != " "
                    && !node.text().contains(['\n', '\r'])
            })
            .map(|node| node.id())
            .collect();

        debug!(
            start = range.start,
            end = range.end,
            tokens = targets.len(),
            "Normalizing whitespace"
        );
        for id in targets {
            if let Err(e) = tree.replace_token_text(id, " ") {
                warn!("Skipping whitespace token: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use treelint_ast::TreeBuilder;

    fn spaced() -> SyntaxTree {
        let mut b = TreeBuilder::new();
        b.start_node(NodeKind::StartTag);
        b.token(NodeKind::TagOpen, "<");
        b.token(NodeKind::TagName, "a");
        b.token(NodeKind::Whitespace, "   ");
        b.start_node(NodeKind::Attribute);
        b.token(NodeKind::AttributeName, "x");
        b.finish_node();
        b.token(NodeKind::Whitespace, "\n  ");
        b.start_node(NodeKind::Attribute);
        b.token(NodeKind::AttributeName, "y");
        b.finish_node();
        b.token(NodeKind::Whitespace, "\t");
        b.token(NodeKind::TagClose, ">");
        b.finish_node();
        b.finish().unwrap()
    }

    #[test]
    fn test_collapses_inline_whitespace() {
        let mut tree = spaced();
        let full = tree.root().span();
        WhitespaceFormatter.reformat(&mut tree, full);
        assert_eq!(tree.source(), "<a x\n  y >");
        tree.validate().unwrap();
    }

    #[test]
    fn test_only_touches_range() {
        let mut tree = spaced();
        WhitespaceFormatter.reformat(&mut tree, Span::new(0, 6));
        assert_eq!(tree.source(), "<a x\n  y\t>");
    }

    #[test]
    fn test_tolerates_out_of_bounds_range() {
        let mut tree = spaced();
        WhitespaceFormatter.reformat(&mut tree, Span::new(5, 500));
        assert_eq!(tree.source(), "<a   x\n  y >");
    }

    #[test]
    fn test_noop_formatter() {
        let mut tree = spaced();
        let before = tree.source().to_string();
        NoopFormatter.reformat(&mut tree, Span::new(0, 100));
        assert_eq!(tree.source(), before);
    }
}
