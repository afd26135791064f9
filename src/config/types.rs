use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analyzer::chartlint::OutputFormat;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub workspace: WorkspaceConfig,
    pub output: OutputConfig,
    pub lint: LintConfig,
}

/// Where workspace charts live
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Chart home; charts are read from `<home>/workspace/charts`.
    pub home: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Stylish,
            color: true,
        }
    }
}

/// Lint behaviour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Exit non-zero when any chart fails an error-level check.
    pub fail_on_error: bool,
}
