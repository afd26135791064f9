//! # chartlint
//!
//! A Rust-based command-line tool that validates chart directories. A chart
//! is a directory holding a `Chart.yaml` manifest, a `README.md` and a
//! `manifests/` directory. Each chart is checked against a fixed tree of
//! named checks where a check only runs if the check it depends on passed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chartlint::analyzer::chartlint::{ValidationTree, Severity};
//!
//! let mut tree = ValidationTree::new("./charts/web");
//! let dir = tree.add_error(tree.root(), "Directory exists", |ctx| ctx.path().is_dir());
//! tree.add_warning(dir, "Has description", |ctx| {
//!     ctx.chartfile().is_ok_and(|c| c.has_description())
//! });
//!
//! let valid = tree.validate(|event| {
//!     let level = if event.severity == Severity::Error { "error" } else { "warning" };
//!     println!("[{}] {} : {}", level, event.message, event.passed);
//! });
//! println!("valid: {}", valid);
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;

// Re-export commonly used types and functions
pub use analyzer::chartlint::{LintResult, Severity, ValidationTree, lint_chart};
pub use error::{ChartlintError, Result};
use cli::Commands;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run_command(command: Commands, config: &config::Config) -> Result<()> {
    match command {
        Commands::Lint {
            chart,
            all,
            home,
            format,
            no_color,
            strict,
        } => handlers::handle_lint(
            handlers::LintOptions {
                chart,
                all,
                home,
                format,
                no_color,
                strict,
            },
            config,
        ),
    }
}
