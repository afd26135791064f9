//! Stylish formatter for chartlint results.
//!
//! One line per evaluated check, indented by depth:
//!
//! ```text
//! Directory exists : true
//!   Chart.yaml is present : true
//!     Has name : true
//!     Has description : false
//! Chart [web] has passed all necessary checks
//! ```

use colored::Colorize;

use crate::analyzer::chartlint::lint::LintResult;
use crate::analyzer::chartlint::types::{CheckEvent, Severity};

const INDENT: &str = "  ";

/// Format one check line.
pub fn format_check(
    message: &str,
    severity: Severity,
    passed: bool,
    depth: usize,
    color: bool,
) -> String {
    let line = format!("{}{} : {}", INDENT.repeat(depth), message, passed);
    if !color {
        return line;
    }

    match (passed, severity) {
        (true, _) => line.green().to_string(),
        (false, Severity::Error) => line.red().to_string(),
        (false, Severity::Warning) => line.yellow().to_string(),
    }
}

/// Format a check as it is reported during traversal.
pub fn format_event(event: &CheckEvent<'_>, color: bool) -> String {
    format_check(event.message, event.severity, event.passed, event.depth, color)
}

/// Format the closing line for a chart.
pub fn format_summary(result: &LintResult, color: bool) -> String {
    let line = result.summary_line();
    if !color {
        return line;
    }

    if result.valid {
        line.bold().to_string()
    } else {
        line.bold().red().to_string()
    }
}

/// Format a whole result: every check, then the summary.
pub fn format(result: &LintResult, color: bool) -> String {
    let mut output = String::new();
    for outcome in &result.outcomes {
        output.push_str(&format_check(
            &outcome.message,
            outcome.severity,
            outcome.passed,
            outcome.depth,
            color,
        ));
        output.push('\n');
    }
    output.push_str(&format_summary(result, color));
    output
}
