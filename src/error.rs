//! Error types for chartlint.
//!
//! Check failures are never errors: they are reported as failed checks.
//! These variants cover the environment around linting.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can stop a chartlint command.
#[derive(Debug, Error)]
pub enum ChartlintError {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The workspace chart directory could not be enumerated
    #[error("Cannot enumerate charts in {pattern:?}: {source}")]
    Workspace {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// No home directory to resolve the workspace from
    #[error("Could not determine the chart home directory; pass --home or set HELM_HOME")]
    NoHome,

    /// JSON rendering failed
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// One or more charts failed error-level checks and strict mode is on
    #[error("{count} chart(s) failed error-level checks")]
    ChartsInvalid { count: usize },
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type alias for chartlint operations
pub type Result<T> = std::result::Result<T, ChartlintError>;
