//! Sinks for diagnostics produced during a pass.

use crate::Diagnostic;

/// Receives diagnostics as an inspection reports them.
pub trait ProblemCollector {
    fn register_problem(&mut self, diagnostic: Diagnostic);
}

impl ProblemCollector for Vec<Diagnostic> {
    fn register_problem(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Holds diagnostics in registration order.
#[derive(Debug, Default, Clone)]
pub struct ProblemsHolder {
    diagnostics: Vec<Diagnostic>,
}

impl ProblemsHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns the diagnostics in registration order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns the diagnostics sorted by anchor span, then inspection id.
    ///
    /// The sort is stable, so diagnostics at the same place from the same
    /// inspection keep their registration order.
    pub fn into_diagnostics(mut self) -> Vec<Diagnostic> {
        self.diagnostics.sort_by(|a, b| {
            a.span()
                .start
                .cmp(&b.span().start)
                .then(a.span().end.cmp(&b.span().end))
                .then_with(|| a.inspection_id.cmp(&b.inspection_id))
        });
        self.diagnostics
    }
}

impl ProblemCollector for ProblemsHolder {
    fn register_problem(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
