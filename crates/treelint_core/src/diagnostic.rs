//! Diagnostic types produced by inspections.

use serde::{Deserialize, Serialize};
use treelint_ast::{Location, NodeId, NodeKind, NodeRef, Span, TreeId};

use crate::Fix;

/// Severity level for diagnostics.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    #[default]
    Error,
    /// Warning - should be reviewed.
    Warning,
    /// Info - informational message.
    Info,
}

impl Severity {
    /// Parses a configuration severity name. `"off"` and unknown names give
    /// `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

/// The node a diagnostic is attached to.
///
/// `node` is what the host highlights. `target` is the node fixes are
/// allowed to mutate; for template inspections it is the attribute that owns
/// the highlighted value. Both ids belong to `tree` and are checked against
/// the live tree before any fix runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchor {
    pub tree: TreeId,
    pub node: NodeId,
    pub kind: NodeKind,
    /// Span of `node` when the diagnostic was produced.
    pub span: Span,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<NodeId>,
}

impl Anchor {
    /// Anchors at `node` and lets fixes target its parent.
    pub fn new(node: NodeRef<'_>) -> Self {
        Self {
            tree: node.tree().id(),
            node: node.id(),
            kind: node.kind(),
            span: node.span(),
            target: node.parent().map(NodeRef::id),
        }
    }

    /// Overrides the fix target.
    pub fn with_target(mut self, target: Option<NodeId>) -> Self {
        self.target = target;
        self
    }
}

/// One detected issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The inspection that produced this diagnostic.
    pub inspection_id: String,

    /// The diagnostic message.
    pub message: String,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,

    /// Where the issue is.
    pub anchor: Anchor,

    /// Line/column location of the anchor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,

    /// Candidate fixes, most preferred first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fixes: Vec<Fix>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(inspection_id: impl Into<String>, message: impl Into<String>, anchor: Anchor) -> Self {
        Self {
            inspection_id: inspection_id.into(),
            message: message.into(),
            severity: Severity::Error,
            anchor,
            loc: None,
            fixes: Vec::new(),
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, loc: Location) -> Self {
        self.loc = Some(loc);
        self
    }

    /// Appends a fix.
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fixes.push(fix);
        self
    }

    /// Returns the span of the anchor node at diagnosis time.
    pub fn span(&self) -> Span {
        self.anchor.span
    }
}
