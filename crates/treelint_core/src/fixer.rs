//! Applying fixes to a live tree.

use std::ops::{Deref, DerefMut};

use tracing::debug;
use treelint_ast::{NodeId, Span, SyntaxTree};

use crate::{Anchor, Fix, FixContext, FixError, FixOutcome, Formatter, NoopFormatter, QuickFix};

/// Exclusive access to a tree for the duration of one fix.
///
/// Dereferences to the tree. When the session is dropped, on success or on
/// an early error return, the formatter reformats the fix target's current
/// span. If the target is gone by then, the span it had when the session
/// opened is used instead, clamped to the source.
pub struct FormatSession<'a> {
    tree: &'a mut SyntaxTree,
    formatter: &'a mut dyn Formatter,
    target: NodeId,
    fallback: Span,
}

impl<'a> FormatSession<'a> {
    /// Opens a session that reformats around `target` when it closes.
    pub fn new(tree: &'a mut SyntaxTree, formatter: &'a mut dyn Formatter, target: NodeId) -> Self {
        let fallback = tree
            .node(target)
            .map_or_else(|| tree.root().span(), |node| node.span());
        Self {
            tree,
            formatter,
            target,
            fallback,
        }
    }
}

impl Deref for FormatSession<'_> {
    type Target = SyntaxTree;

    fn deref(&self) -> &SyntaxTree {
        &*self.tree
    }
}

impl DerefMut for FormatSession<'_> {
    fn deref_mut(&mut self) -> &mut SyntaxTree {
        &mut *self.tree
    }
}

impl Drop for FormatSession<'_> {
    fn drop(&mut self) {
        let range = match self.tree.node(self.target) {
            Some(node) => node.span(),
            None => self.fallback.clamp_to(self.tree.source().len() as u32),
        };
        debug!(start = range.start, end = range.end, "Reformatting after fix");
        self.formatter.reformat(self.tree, range);
    }
}

/// Applies fixes one at a time with a fixed formatter.
#[derive(Debug, Default)]
pub struct FixExecutor<F: Formatter = NoopFormatter> {
    formatter: F,
}

impl<F: Formatter> FixExecutor<F> {
    /// Creates an executor that reformats with `formatter` after each edit.
    pub fn new(formatter: F) -> Self {
        Self { formatter }
    }

    /// Returns the formatter.
    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Applies `fix` at `anchor`.
    ///
    /// A stale anchor is logged and returned; the tree is left untouched.
    pub fn apply_fix(
        &mut self,
        tree: &mut SyntaxTree,
        fix: &Fix,
        anchor: &Anchor,
    ) -> Result<FixOutcome, FixError> {
        let mut ctx = FixContext {
            tree,
            formatter: &mut self.formatter,
        };
        match fix.apply(&mut ctx, anchor) {
            Ok(outcome) => {
                debug!("Applied fix {}: {:?}", fix.id(), outcome);
                Ok(outcome)
            }
            Err(e @ FixError::StaleAnchor { .. }) => {
                debug!("Skipping fix {}: {}", fix.id(), e);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
