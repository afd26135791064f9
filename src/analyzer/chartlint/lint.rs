//! Main linting entry points for chartlint.
//!
//! Builds the standard check tree for a chart, walks it, and collects the
//! outcome into a `LintResult`.

use std::path::{Path, PathBuf};

use crate::analyzer::chartlint::checks::{standard_tree, standard_tree_with_reader};
use crate::analyzer::chartlint::parser::ManifestReader;
use crate::analyzer::chartlint::tree::ValidationTree;
use crate::analyzer::chartlint::types::{CheckEvent, CheckOutcome, Severity};

/// Result of linting one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintResult {
    /// Path to the chart root.
    pub chart_path: PathBuf,
    /// Display name (last path component).
    pub chart_name: String,
    /// Every evaluated check, in traversal order.
    pub outcomes: Vec<CheckOutcome>,
    /// Aggregate verdict.
    pub valid: bool,
    /// Number of failed error-level checks.
    pub error_count: usize,
    /// Number of failed warning-level checks.
    pub warning_count: usize,
}

impl LintResult {
    /// Create a new empty result.
    pub fn new(chart_path: impl Into<PathBuf>, chart_name: impl Into<String>) -> Self {
        Self {
            chart_path: chart_path.into(),
            chart_name: chart_name.into(),
            outcomes: Vec::new(),
            valid: true,
            error_count: 0,
            warning_count: 0,
        }
    }

    fn record(&mut self, event: &CheckEvent<'_>) {
        if !event.passed {
            match event.severity {
                Severity::Error => self.error_count += 1,
                Severity::Warning => self.warning_count += 1,
            }
        }
        self.outcomes.push(event.to_outcome());
    }

    /// Failed checks of either severity.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// The closing line printed for a chart.
    pub fn summary_line(&self) -> String {
        summary_line(&self.chart_name, self.valid)
    }
}

/// Summary wording for a finished chart.
pub fn summary_line(chart_name: &str, valid: bool) -> String {
    if valid {
        format!("Chart [{}] has passed all necessary checks", chart_name)
    } else {
        format!("Chart [{}] is not completely valid", chart_name)
    }
}

/// Lint a chart directory, forwarding each evaluated check to `on_check`.
pub fn lint_chart<F>(path: &Path, on_check: F) -> LintResult
where
    F: FnMut(&CheckEvent<'_>),
{
    run(standard_tree(path), on_check)
}

/// Lint a chart directory with a custom manifest reader.
pub fn lint_chart_with_reader<F>(
    path: &Path,
    reader: Box<dyn ManifestReader>,
    on_check: F,
) -> LintResult
where
    F: FnMut(&CheckEvent<'_>),
{
    run(standard_tree_with_reader(path, reader), on_check)
}

/// Lint several charts, one fresh tree each.
///
/// `on_check` receives the chart path with each event so a caller can label
/// output per chart, and `on_result` sees each chart's result as soon as its
/// tree has been walked. A failing chart never stops the batch.
pub fn lint_all<F, G>(paths: &[PathBuf], mut on_check: F, mut on_result: G) -> Vec<LintResult>
where
    F: FnMut(&Path, &CheckEvent<'_>),
    G: FnMut(&LintResult),
{
    paths
        .iter()
        .map(|path| {
            log::info!("Linting chart {}", path.display());
            let result = lint_chart(path, |event| on_check(path.as_path(), event));
            on_result(&result);
            result
        })
        .collect()
}

fn run<F>(tree: ValidationTree, mut on_check: F) -> LintResult
where
    F: FnMut(&CheckEvent<'_>),
{
    let mut result = LintResult::new(tree.path(), tree.chart_name());
    let valid = tree.validate(|event| {
        result.record(event);
        on_check(event);
    });
    result.valid = valid;
    result
}
