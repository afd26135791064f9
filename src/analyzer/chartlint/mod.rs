//! Chartlint: parent-gated chart validation
//!
//! A chart is a directory holding a `Chart.yaml` manifest and its resources.
//! It is checked against a fixed tree of named checks. A check's children
//! run only when the check passed, so a missing manifest is reported once
//! instead of once per manifest field.
//!
//! # Example
//!
//! ```rust,no_run
//! use chartlint::analyzer::chartlint::lint_chart;
//! use std::path::Path;
//!
//! let result = lint_chart(Path::new("./my-chart"), |event| {
//!     println!("{} : {}", event.message, event.passed);
//! });
//! println!("{}", result.summary_line());
//! ```
//!
//! # Checks
//!
//! | Check                          | Severity | Runs when             |
//! |--------------------------------|----------|-----------------------|
//! | Directory exists               | error    | always                |
//! | Chart.yaml is present          | error    | directory exists      |
//! | Has name / Has version         | error    | Chart.yaml is present |
//! | Has description                | warning  | Chart.yaml is present |
//! | Has maintainers                | warning  | Chart.yaml is present |
//! | README.md is present           | warning  | directory exists      |
//! | manifests directory is present | error    | directory exists      |

pub mod checks;
pub mod formatter;
pub mod lint;
pub mod parser;
pub mod tree;
pub mod types;
pub mod walk;
pub mod workspace;

// Re-export main types and functions
pub use checks::{build_chart_tree, standard_tree, standard_tree_with_reader};
pub use formatter::{OutputFormat, format_result_to_string};
pub use lint::{LintResult, lint_all, lint_chart, lint_chart_with_reader, summary_line};
pub use parser::{Chartfile, FsManifestReader, ManifestError, ManifestReader};
pub use tree::{ChartContext, CheckNode, NodeId, Predicate, ValidationTree};
pub use types::{CheckEvent, CheckOutcome, Severity};
pub use workspace::{discover_charts, resolve_chart};
