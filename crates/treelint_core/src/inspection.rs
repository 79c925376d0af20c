//! The inspection abstraction.
//!
//! An inspection is a stateless rule. For every pass it builds a
//! [`Visitor`] that owns an [`InspectionContext`]; the visitor reports
//! problems through the context while the inspector walks the tree.

use tracing::warn;
use treelint_ast::{Language, MalformedTreeError, NodeRef, Visitor};

use crate::{Anchor, Diagnostic, Fix, ProblemCollector, Severity};

/// A registered rule.
///
/// Implementations hold no per-pass state and may be shared between threads.
pub trait Inspection: Send + Sync {
    /// Stable identifier used in configuration and output.
    fn id(&self) -> &'static str;

    /// One-line description for listings.
    fn description(&self) -> &'static str;

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// The grammar this inspection applies to. Trees of other grammars are
    /// skipped without building a visitor.
    fn language(&self) -> Language;

    /// Builds the visitor for one pass.
    fn build_visitor<'a, 't>(&'a self, ctx: InspectionContext<'a>) -> Box<dyn Visitor<'t> + 'a>;
}

/// Where a pass currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PassState {
    #[default]
    Idle,
    /// Walking the tree.
    Visiting,
    /// Handing a diagnostic to the collector.
    Emitting,
}

/// Counters and state shared by every inspection of one pass.
#[derive(Debug, Default)]
pub struct PassStats {
    pub reported: usize,
    pub malformed: usize,
    pub state: PassState,
}

/// Reporting handle given to an inspection's visitor.
pub struct InspectionContext<'a> {
    id: &'static str,
    severity: Severity,
    collector: &'a mut dyn ProblemCollector,
    stats: &'a mut PassStats,
}

impl<'a> InspectionContext<'a> {
    pub fn new(
        id: &'static str,
        severity: Severity,
        collector: &'a mut dyn ProblemCollector,
        stats: &'a mut PassStats,
    ) -> Self {
        Self {
            id,
            severity,
            collector,
            stats,
        }
    }

    /// The id diagnostics are reported under.
    pub fn inspection_id(&self) -> &'static str {
        self.id
    }

    /// Runs `check` for `node`, containing a malformed-tree failure.
    ///
    /// The failure is logged and counted; the pass continues with the next
    /// node. Diagnostics reported before the failure are kept.
    pub fn check<F>(&mut self, node: NodeRef<'_>, check: F)
    where
        F: FnOnce(&mut Self) -> Result<(), MalformedTreeError>,
    {
        if let Err(e) = check(self) {
            let span = node.span();
            warn!(
                inspection = self.id,
                "Skipping {} at {}..{}: {}",
                node.kind(),
                span.start,
                span.end,
                e
            );
            self.stats.malformed += 1;
        }
    }

    /// Reports a problem anchored at `node`.
    pub fn report(&mut self, node: NodeRef<'_>, message: impl Into<String>, fixes: Vec<Fix>) {
        let mut diagnostic = Diagnostic::new(self.id, message, Anchor::new(node))
            .with_severity(self.severity)
            .with_location(node.tree().location(node.span()));
        diagnostic.fixes = fixes;

        self.stats.state = PassState::Emitting;
        self.collector.register_problem(diagnostic);
        self.stats.reported += 1;
        self.stats.state = PassState::Visiting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use treelint_ast::NodeKind;
    use treelint_ast::test_utils::rules_unit;

    #[test]
    fn test_report_fills_diagnostic() {
        let tree = rules_unit(&[(Some("Color"), &[])]);
        let name = tree
            .root()
            .preorder()
            .find(|n| n.kind() == NodeKind::QualifiedName)
            .unwrap();
        let mut sink: Vec<Diagnostic> = Vec::new();
        let mut stats = PassStats::default();

        let mut ctx = InspectionContext::new("rule", Severity::Warning, &mut sink, &mut stats);
        ctx.report(name, "message", vec![]);

        assert_eq!(stats.reported, 1);
        assert_eq!(sink[0].severity, Severity::Warning);
        assert_eq!(sink[0].inspection_id, "rule");
        let loc = sink[0].loc.unwrap();
        assert_eq!((loc.start.line, loc.start.column), (1, 13));
    }

    #[test]
    fn test_check_contains_malformed() {
        let tree = rules_unit(&[(None, &[])]);
        let declaration = tree.root().first_child().unwrap();
        let mut sink: Vec<Diagnostic> = Vec::new();
        let mut stats = PassStats::default();

        let mut ctx = InspectionContext::new("rule", Severity::Error, &mut sink, &mut stats);
        ctx.check(declaration, |ctx| {
            ctx.report(declaration, "before failure", vec![]);
            Err(MalformedTreeError::new(
                NodeKind::EnumDeclaration,
                NodeKind::QualifiedName,
                declaration.span(),
            ))
        });

        assert_eq!(stats.malformed, 1);
        assert_eq!(stats.reported, 1);
        assert_eq!(sink.len(), 1);
    }
}
