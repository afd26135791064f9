//! Output formatters for chartlint results.
//!
//! - Stylish: one line per check, coloured by outcome
//! - Compact: failures only, one line each
//! - JSON: machine-readable

pub mod json;
pub mod stylish;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analyzer::chartlint::lint::LintResult;
use crate::error::Result;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format with colors
    #[default]
    Stylish,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

impl OutputFormat {
    /// Whether check lines are printed while the tree is walked.
    pub fn streams_checks(&self) -> bool {
        matches!(self, Self::Stylish)
    }
}

/// Format a lint result to a string.
pub fn format_result_to_string(
    result: &LintResult,
    format: OutputFormat,
    color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(result),
        OutputFormat::Stylish => Ok(stylish::format(result, color)),
        OutputFormat::Compact => Ok(compact_format(result)),
    }
}

/// Compact format: one line per failed check, then the summary.
fn compact_format(result: &LintResult) -> String {
    let mut lines: Vec<String> = result
        .failures()
        .map(|failure| {
            format!(
                "{}: {}: {}",
                result.chart_path.display(),
                failure.severity,
                failure.message
            )
        })
        .collect();
    lines.push(result.summary_line());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::chartlint::types::{CheckOutcome, Severity};

    #[test]
    fn test_only_stylish_streams_checks() {
        assert!(OutputFormat::Stylish.streams_checks());
        assert!(!OutputFormat::Compact.streams_checks());
        assert!(!OutputFormat::Json.streams_checks());
    }

    #[test]
    fn test_compact_lists_failures_only() {
        let mut result = LintResult::new("charts/web", "web");
        result.outcomes.push(CheckOutcome {
            message: "Directory exists".to_string(),
            severity: Severity::Error,
            passed: true,
            depth: 0,
        });
        result.outcomes.push(CheckOutcome {
            message: "README.md is present".to_string(),
            severity: Severity::Warning,
            passed: false,
            depth: 1,
        });

        let output = format_result_to_string(&result, OutputFormat::Compact, false).unwrap();

        assert_eq!(
            output,
            "charts/web: warning: README.md is present\nChart [web] has passed all necessary checks"
        );
    }
}
