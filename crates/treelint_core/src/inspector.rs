//! Runs registered inspections over a tree.

use tracing::{debug, info};
use treelint_ast::visitor::walk_node;
use treelint_ast::{NodeRef, SyntaxTree, TreeProvider};

use crate::inspections::builtin;
use crate::{
    Diagnostic, InspectError, Inspection, InspectionContext, InspectorConfig, PassState, PassStats,
    ProblemCollector, ProblemsHolder, Severity,
};

/// Totals for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InspectionSummary {
    /// Inspections whose grammar matched the tree.
    pub inspections: usize,
    /// Nodes in the walked subtree.
    pub visited: usize,
    pub reported: usize,
    /// Nodes skipped because a required child was missing.
    pub malformed: usize,
}

struct Registered {
    inspection: Box<dyn Inspection>,
    severity: Severity,
}

/// The diagnostic engine.
///
/// Holds stateless inspections, so one inspector can serve passes over
/// different trees from several threads.
#[derive(Default)]
pub struct Inspector {
    registered: Vec<Registered>,
}

impl Inspector {
    /// Creates an inspector with no inspections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an inspector with every built-in inspection at its default
    /// severity.
    pub fn with_defaults() -> Self {
        let mut inspector = Self::new();
        for inspection in builtin() {
            inspector.register(inspection);
        }
        inspector
    }

    /// Creates an inspector from configuration.
    ///
    /// Built-in inspections are enabled unless the configuration turns them
    /// off; a severity string overrides the default severity. Ids that name
    /// no built-in inspection are rejected.
    pub fn from_config(config: &InspectorConfig) -> Result<Self, InspectError> {
        let available = builtin();
        if let Some(unknown) = config
            .inspections
            .keys()
            .find(|id| !available.iter().any(|i| i.id() == id.as_str()))
        {
            return Err(InspectError::UnknownInspection(unknown.clone()));
        }

        let mut inspector = Self::new();
        for inspection in available {
            let option = config.inspections.get(inspection.id());
            if option.is_some_and(|option| !option.is_enabled()) {
                debug!("Inspection {} disabled by configuration", inspection.id());
                continue;
            }
            let severity = option
                .and_then(|option| option.severity())
                .unwrap_or_else(|| inspection.default_severity());
            inspector.register_with_severity(inspection, severity);
        }
        Ok(inspector)
    }

    /// Registers an inspection at its default severity.
    pub fn register(&mut self, inspection: Box<dyn Inspection>) {
        let severity = inspection.default_severity();
        self.register_with_severity(inspection, severity);
    }

    /// Registers an inspection with an explicit severity.
    pub fn register_with_severity(&mut self, inspection: Box<dyn Inspection>, severity: Severity) {
        debug!("Registered inspection: {} ({:?})", inspection.id(), severity);
        self.registered.push(Registered {
            inspection,
            severity,
        });
    }

    /// Returns the registered inspections with their effective severity.
    pub fn inspections(&self) -> impl Iterator<Item = (&dyn Inspection, Severity)> {
        self.registered
            .iter()
            .map(|entry| (entry.inspection.as_ref(), entry.severity))
    }

    /// Inspects the whole tree.
    pub fn inspect(
        &self,
        tree: &SyntaxTree,
        collector: &mut dyn ProblemCollector,
    ) -> InspectionSummary {
        self.inspect_subtree(tree.root(), collector)
    }

    /// Inspects `root` and its descendants.
    ///
    /// Inspections for a grammar other than `root`'s are skipped. Each
    /// remaining inspection walks the subtree depth-first in pre-order.
    pub fn inspect_subtree(
        &self,
        root: NodeRef<'_>,
        collector: &mut dyn ProblemCollector,
    ) -> InspectionSummary {
        let language = root.language();
        let mut stats = PassStats {
            state: PassState::Visiting,
            ..PassStats::default()
        };
        let mut summary = InspectionSummary {
            visited: root.preorder().count(),
            ..InspectionSummary::default()
        };

        for entry in &self.registered {
            let inspection = entry.inspection.as_ref();
            if inspection.language() != language {
                continue;
            }
            debug!("Running inspection {} from {}", inspection.id(), root.kind());
            summary.inspections += 1;

            let ctx = InspectionContext::new(inspection.id(), entry.severity, &mut *collector, &mut stats);
            let mut visitor = inspection.build_visitor(ctx);
            // A visitor stopping early only ends its own walk.
            let _ = walk_node(visitor.as_mut(), root);
        }

        stats.state = PassState::Idle;
        summary.reported = stats.reported;
        summary.malformed = stats.malformed;
        if summary.malformed > 0 {
            info!(
                "Inspection pass skipped {} malformed node(s)",
                summary.malformed
            );
        }
        summary
    }

    /// Inspects the provider's current tree and returns the diagnostics
    /// sorted by position.
    pub fn run<P: TreeProvider + ?Sized>(&self, provider: &P) -> Vec<Diagnostic> {
        let mut holder = ProblemsHolder::new();
        self.inspect(provider.tree(), &mut holder);
        holder.into_diagnostics()
    }
}

impl std::fmt::Debug for Inspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.registered.iter().map(|entry| entry.inspection.id()))
            .finish()
    }
}
