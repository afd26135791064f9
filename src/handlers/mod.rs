// Handler modules
pub mod lint;

// Re-export all handler functions
pub use lint::{LintOptions, handle_lint};
