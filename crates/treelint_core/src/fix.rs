//! Iterative fixing until the tree stops changing.

use blake3::Hash;
use tracing::{debug, warn};
use treelint_ast::SyntaxTree;

use crate::{FixError, FixExecutor, FixOutcome, Formatter, Inspector};

/// How an iterative fix run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixResult {
    /// A round applied no fix.
    Converged { iterations: usize },
    /// Rounds kept changing the tree until the limit.
    MaxIterationsReached { remaining: usize },
    /// The tree returned to an earlier state.
    CycleDetected { cycle_length: usize },
}

/// Summary of an iterative fix run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixReport {
    pub outcome: FixResult,
    pub fixes_applied: usize,
}

/// Repeats inspect, fix, re-inspect.
///
/// Each round applies the first fix of every diagnostic, in position order.
/// Fixes whose anchor went stale earlier in the same round are skipped.
#[derive(Debug, Clone)]
pub struct FixCoordinator {
    max_iterations: usize,
}

impl FixCoordinator {
    pub fn new() -> Self {
        Self { max_iterations: 3 }
    }

    /// Sets the round limit. Zero is treated as one.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    /// Fixes `tree` in rounds until a round changes nothing.
    pub fn fix_all<F: Formatter>(
        &self,
        inspector: &Inspector,
        executor: &mut FixExecutor<F>,
        tree: &mut SyntaxTree,
    ) -> FixReport {
        let mut fixes_applied = 0;
        let finished = self.iterate(tree, |tree| {
            let mut applied = 0;
            for diagnostic in inspector.run(&*tree) {
                let Some(fix) = diagnostic.fixes.first() else {
                    continue;
                };
                match executor.apply_fix(tree, fix, &diagnostic.anchor) {
                    Ok(FixOutcome::Applied { .. }) => applied += 1,
                    Ok(FixOutcome::NoChange) | Err(FixError::StaleAnchor { .. }) => {}
                    Err(e) => warn!("Fix {} failed: {}", fix.id(), e),
                }
            }
            fixes_applied += applied;
            applied
        });

        let outcome = finished.unwrap_or_else(|| {
            let remaining = inspector
                .run(&*tree)
                .iter()
                .filter(|d| !d.fixes.is_empty())
                .count();
            if remaining == 0 {
                FixResult::Converged {
                    iterations: self.max_iterations,
                }
            } else {
                FixResult::MaxIterationsReached { remaining }
            }
        });
        FixReport {
            outcome,
            fixes_applied,
        }
    }

    /// Runs `round` until it reports no change or the tree repeats an
    /// earlier state. Returns `None` when the round limit is hit first.
    fn iterate<R>(&self, tree: &mut SyntaxTree, mut round: R) -> Option<FixResult>
    where
        R: FnMut(&mut SyntaxTree) -> usize,
    {
        let mut history: Vec<Hash> = vec![self.hash_content(tree.source())];
        let mut iterations = 0;

        while iterations < self.max_iterations {
            iterations += 1;

            let applied = round(tree);
            debug!("Fix round {}: {} fix(es) applied", iterations, applied);
            if applied == 0 {
                return Some(FixResult::Converged { iterations });
            }

            let current_hash = self.hash_content(tree.source());
            if let Some(prev_idx) = history.iter().position(|h| *h == current_hash) {
                return Some(FixResult::CycleDetected {
                    cycle_length: history.len() - prev_idx,
                });
            }
            history.push(current_hash);
        }

        None
    }

    fn hash_content(&self, content: &str) -> Hash {
        blake3::hash(content.as_bytes())
    }
}

impl Default for FixCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NoopFormatter, WhitespaceFormatter};
    use pretty_assertions::assert_eq;
    use treelint_ast::test_utils::template_document;

    #[test]
    fn test_convergence() {
        let mut tree = template_document(&[
            ("div", &[(Some("@a"), Some("x")), (Some("@b"), Some("y"))]),
            ("p", &[(Some("@c"), Some("z"))]),
        ]);
        let inspector = Inspector::with_defaults();
        let mut executor = FixExecutor::new(WhitespaceFormatter);

        let report = FixCoordinator::new().fix_all(&inspector, &mut executor, &mut tree);

        assert_eq!(
            report,
            FixReport {
                outcome: FixResult::Converged { iterations: 2 },
                fixes_applied: 3,
            }
        );
        assert_eq!(
            tree.source(),
            "<div [@a]=\"x\" [@b]=\"y\"></div>\n<p [@c]=\"z\"></p>"
        );
        assert!(inspector.run(&tree).is_empty());
    }

    #[test]
    fn test_clean_tree_converges_immediately() {
        let mut tree = template_document(&[("div", &[(Some("[@a]"), Some("x"))])]);
        let mut executor = FixExecutor::new(NoopFormatter);

        let report =
            FixCoordinator::new().fix_all(&Inspector::with_defaults(), &mut executor, &mut tree);

        assert_eq!(report.outcome, FixResult::Converged { iterations: 1 });
        assert_eq!(report.fixes_applied, 0);
    }

    #[test]
    fn test_cycle_detection() {
        let mut tree = template_document(&[("a", &[])]);
        let name = tree
            .root()
            .preorder()
            .find(|n| n.kind() == treelint_ast::NodeKind::TagName)
            .unwrap()
            .id();
        let mut call_count = 0;

        let result = FixCoordinator::new().iterate(&mut tree, |tree| {
            call_count += 1;
            let text = if call_count % 2 == 1 { "b" } else { "a" };
            tree.replace_token_text(name, text).unwrap();
            1
        });

        assert_eq!(result, Some(FixResult::CycleDetected { cycle_length: 2 }));
    }

    #[test]
    fn test_iteration_limit() {
        let mut tree = template_document(&[("div", &[(Some("@a"), Some("x"))])]);
        let mut executor = FixExecutor::new(NoopFormatter);

        let report = FixCoordinator::new().with_max_iterations(0).fix_all(
            &Inspector::with_defaults(),
            &mut executor,
            &mut tree,
        );

        assert_eq!(report.outcome, FixResult::Converged { iterations: 1 });
        assert_eq!(report.fixes_applied, 1);
    }
}
