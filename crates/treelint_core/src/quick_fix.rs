//! Quick fixes attached to diagnostics.
//!
//! A [`Fix`] is plain data: it names what to do, and [`QuickFix::apply`]
//! does it against whatever the live tree looks like at apply time. Nothing
//! computed at diagnosis time besides the [`Anchor`] is trusted.

use serde::{Deserialize, Serialize};
use treelint_ast::accessor::{optional_child, required_child};
use treelint_ast::{NodeId, NodeKind, NodeRef, Span, SyntaxTree, TreeError};

use crate::{Anchor, FixError, FormatSession, Formatter};

/// What a fix does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FixKind {
    /// Rewrites the attribute name to `[@trigger]`.
    RenameToBindingForm { trigger: String },
    /// Drops the `=` and the value, leaving the bare attribute name.
    RemoveValueRange,
}

/// A fix offered with a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fix {
    #[serde(flatten)]
    pub kind: FixKind,
}

impl Fix {
    /// Creates a fix that turns `@trigger="..."` into `[@trigger]="..."`.
    pub fn rename_to_binding_form(trigger: impl Into<String>) -> Self {
        Self {
            kind: FixKind::RenameToBindingForm {
                trigger: trigger.into(),
            },
        }
    }

    /// Creates a fix that removes the attribute value.
    pub fn remove_value_range() -> Self {
        Self {
            kind: FixKind::RemoveValueRange,
        }
    }

    /// Returns a stable identifier for the fix kind.
    pub fn id(&self) -> &'static str {
        match self.kind {
            FixKind::RenameToBindingForm { .. } => "rename-to-binding-form",
            FixKind::RemoveValueRange => "remove-value-range",
        }
    }
}

/// Result of a fix that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    /// The tree changed; `changed` is the edited region after the edit.
    Applied { changed: Span },
    /// The tree already had the desired shape.
    NoChange,
}

/// Everything a fix may touch while it runs.
pub struct FixContext<'a> {
    pub tree: &'a mut SyntaxTree,
    pub formatter: &'a mut dyn Formatter,
}

/// Host-facing fix capability.
pub trait QuickFix {
    /// Text shown to the user for this particular fix.
    fn display_name(&self) -> String;

    /// Name shared by related fixes, used to group them in a UI.
    fn family_name(&self) -> &str;

    /// Applies the fix at `anchor`.
    ///
    /// Fails with [`FixError::StaleAnchor`] without touching the tree if the
    /// anchor no longer resolves to a live attribute.
    fn apply(&self, ctx: &mut FixContext<'_>, anchor: &Anchor) -> Result<FixOutcome, FixError>;
}

impl QuickFix for Fix {
    fn display_name(&self) -> String {
        match &self.kind {
            FixKind::RenameToBindingForm { trigger } => format!("Bind to property [@{trigger}]"),
            FixKind::RemoveValueRange => "Remove attribute value".to_string(),
        }
    }

    fn family_name(&self) -> &str {
        "Angular"
    }

    fn apply(&self, ctx: &mut FixContext<'_>, anchor: &Anchor) -> Result<FixOutcome, FixError> {
        let target = resolve_target(ctx.tree, anchor)?;
        match &self.kind {
            FixKind::RenameToBindingForm { trigger } => rename_to_binding_form(ctx, target, trigger),
            FixKind::RemoveValueRange => remove_value_range(ctx, target),
        }
    }
}

/// Resolves the node a fix may mutate.
///
/// Uses the recorded target, or the anchor node's parent when none was
/// recorded. The result must belong to the same tree, be alive, and be an
/// attribute-like node.
pub fn resolve_target(tree: &SyntaxTree, anchor: &Anchor) -> Result<NodeId, FixError> {
    let stale = || FixError::StaleAnchor { span: anchor.span };
    if anchor.tree != tree.id() {
        return Err(stale());
    }
    let target = match anchor.target {
        Some(id) => tree.node(id),
        None => tree.node(anchor.node).and_then(NodeRef::parent),
    };
    target
        .filter(|node| node.kind().is_attribute())
        .map(NodeRef::id)
        .ok_or_else(stale)
}

fn rename_to_binding_form(
    ctx: &mut FixContext<'_>,
    target: NodeId,
    trigger: &str,
) -> Result<FixOutcome, FixError> {
    let replacement = format!("[@{trigger}]");
    let name = {
        let node = live(ctx.tree, target)?;
        let name = required_child(node, NodeKind::AttributeName)?;
        if name.text() == replacement {
            return Ok(FixOutcome::NoChange);
        }
        name.id()
    };

    let mut session = FormatSession::new(ctx.tree, ctx.formatter, target);
    let changed = session.replace_token_text(name, &replacement)?;
    Ok(FixOutcome::Applied { changed })
}

fn remove_value_range(ctx: &mut FixContext<'_>, target: NodeId) -> Result<FixOutcome, FixError> {
    let (first, last) = {
        let node = live(ctx.tree, target)?;
        let Some(value) = optional_child(node, NodeKind::AttributeValue) else {
            return Ok(FixOutcome::NoChange);
        };
        let name = required_child(node, NodeKind::AttributeName)?;
        let first = name.next_sibling().unwrap_or(value);
        (first.id(), value.id())
    };

    let mut session = FormatSession::new(ctx.tree, ctx.formatter, target);
    let removed = session.delete_child_range(target, first, last)?;
    Ok(FixOutcome::Applied {
        changed: Span::empty(removed.start),
    })
}

fn live(tree: &SyntaxTree, id: NodeId) -> Result<NodeRef<'_>, FixError> {
    tree.node(id).ok_or(FixError::Tree(TreeError::UnknownNode))
}
