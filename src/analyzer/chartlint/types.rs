//! Core types for the chart linter.
//!
//! - `Severity` - The two check levels (error, warning)
//! - `CheckEvent` - What the traversal reports for one evaluated check
//! - `CheckOutcome` - Owned copy of an event, kept in lint results

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a check.
///
/// Failed error-level checks make a chart invalid. Failed warning-level
/// checks are reported but leave the verdict untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// Whether a failure at this level counts against the chart.
    pub fn affects_verdict(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single evaluated check, as seen by the reporting callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckEvent<'a> {
    /// The check's message, used verbatim in reports.
    pub message: &'a str,
    /// The check's declared severity.
    pub severity: Severity,
    /// Whether the predicate passed.
    pub passed: bool,
    /// Aggregate verdict including this check.
    pub valid_so_far: bool,
    /// Distance from the root; top-level checks are at depth 0.
    pub depth: usize,
}

impl CheckEvent<'_> {
    pub fn to_outcome(&self) -> CheckOutcome {
        CheckOutcome {
            message: self.message.to_string(),
            severity: self.severity,
            passed: self.passed,
            depth: self.depth,
        }
    }
}

/// Owned record of an evaluated check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub message: String,
    pub severity: Severity,
    pub passed: bool,
    pub depth: usize,
}

impl From<&CheckEvent<'_>> for CheckOutcome {
    fn from(event: &CheckEvent<'_>) -> Self {
        event.to_outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_errors_affect_verdict() {
        assert!(Severity::Error.affects_verdict());
        assert!(!Severity::Warning.affects_verdict());
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn test_outcome_copies_event() {
        let event = CheckEvent {
            message: "Has name",
            severity: Severity::Warning,
            passed: false,
            valid_so_far: true,
            depth: 2,
        };
        let outcome = CheckOutcome::from(&event);
        assert_eq!(outcome.message, "Has name");
        assert_eq!(outcome.severity, Severity::Warning);
        assert!(!outcome.passed);
        assert_eq!(outcome.depth, 2);
    }
}
