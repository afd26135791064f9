//! Depth-first traversal of a `ValidationTree`.
//!
//! Pre-order, declaration order, parent-gated: a check's children are
//! visited only when the check passed. Grouping nodes are not reported and
//! always descend. Siblings are independent of each other.

use crate::analyzer::chartlint::tree::{NodeId, ValidationTree};
use crate::analyzer::chartlint::types::CheckEvent;

impl ValidationTree {
    /// Walk the tree, reporting every evaluated check to `report`, and
    /// return the aggregate verdict.
    ///
    /// The verdict is the AND of every visited error-level check. Failed
    /// warnings are reported but don't change it, and pruned checks are
    /// neither evaluated nor reported.
    pub fn validate<F>(&self, mut report: F) -> bool
    where
        F: FnMut(&CheckEvent<'_>),
    {
        let mut valid = true;
        for &child in self.node(self.root()).children() {
            self.visit(child, 0, &mut valid, &mut report);
        }
        log::debug!(
            "Chart [{}] traversal finished: valid={}, manifests read={}",
            self.chart_name(),
            valid,
            self.context().manifests_read()
        );
        valid
    }

    /// Walk the tree without observing individual checks.
    pub fn is_valid(&self) -> bool {
        self.validate(|_| {})
    }

    fn visit<F>(&self, id: NodeId, depth: usize, valid: &mut bool, report: &mut F)
    where
        F: FnMut(&CheckEvent<'_>),
    {
        let node = self.node(id);

        if node.is_group() {
            for &child in node.children() {
                self.visit(child, depth, valid, report);
            }
            return;
        }

        let passed = node.evaluate(self.context());
        if !passed && node.severity().affects_verdict() {
            *valid = false;
        }

        report(&CheckEvent {
            message: node.message(),
            severity: node.severity(),
            passed,
            valid_so_far: *valid,
            depth,
        });

        if passed {
            for &child in node.children() {
                self.visit(child, depth + 1, valid, report);
            }
        } else if !node.children().is_empty() {
            log::debug!(
                "'{}' failed, skipping {} dependent check(s)",
                node.message(),
                node.children().len()
            );
        }
    }
}
