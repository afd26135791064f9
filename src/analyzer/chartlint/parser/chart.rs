//! Chart.yaml parser.
//!
//! Parses chart metadata from Chart.yaml files. Only the fields the checks
//! look at are kept; unknown keys are ignored.

use std::path::{Path, PathBuf};

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chart maintainer entry.
///
/// Older charts list maintainers as plain strings (`"Jane <jane@example.com>"`),
/// newer ones as mappings. Only the presence of the list is checked, so an
/// entry of any other shape is kept as-is instead of rejecting the manifest.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Maintainer {
    Name(String),
    Detailed {
        #[serde(default)]
        name: String,
        #[serde(default)]
        email: Option<String>,
        #[serde(default)]
        url: Option<String>,
    },
    Other(serde_yaml::Value),
}

impl Maintainer {
    /// The maintainer's name, empty when the entry has none.
    pub fn name(&self) -> &str {
        match self {
            Maintainer::Name(name) => name,
            Maintainer::Detailed { name, .. } => name,
            Maintainer::Other(_) => "",
        }
    }
}

/// Parsed Chart.yaml metadata.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Chartfile {
    /// The name of the chart
    #[serde(deserialize_with = "scalar_string")]
    pub name: String,

    /// The chart version
    #[serde(deserialize_with = "scalar_string")]
    pub version: String,

    /// A single-sentence description of this chart
    #[serde(deserialize_with = "scalar_string")]
    pub description: String,

    /// `None` when the key is absent, `Some(vec![])` when declared empty.
    pub maintainers: Option<Vec<Maintainer>>,
}

impl Chartfile {
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn has_version(&self) -> bool {
        !self.version.is_empty()
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }

    /// Presence of the field, not a non-empty list.
    pub fn has_maintainers(&self) -> bool {
        self.maintainers.is_some()
    }
}

/// Accept any YAML scalar for a string field. `version: 1.0` is common in
/// hand-written charts.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_yaml::Value>::deserialize(deserializer)? {
        None | Some(serde_yaml::Value::Null) => Ok(String::new()),
        Some(serde_yaml::Value::String(s)) => Ok(s),
        Some(serde_yaml::Value::Number(n)) => Ok(n.to_string()),
        Some(serde_yaml::Value::Bool(b)) => Ok(b.to_string()),
        Some(_) => Err(de::Error::custom("expected a scalar value")),
    }
}

/// Failure to obtain a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The file is missing or unreadable.
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a YAML mapping of the expected shape.
    #[error("malformed Chart.yaml: {message}")]
    Malformed { message: String, line: Option<u32> },
}

/// Parse Chart.yaml content.
pub fn parse_chart_yaml(content: &str) -> Result<Chartfile, ManifestError> {
    if content.trim().is_empty() {
        return Ok(Chartfile::default());
    }

    serde_yaml::from_str(content).map_err(|e| {
        let line = e.location().map(|l| l.line() as u32);
        ManifestError::Malformed {
            message: e.to_string(),
            line,
        }
    })
}

/// Parse Chart.yaml from a file path.
pub fn parse_chart_yaml_file(path: &Path) -> Result<Chartfile, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_chart_yaml(&content)
}

/// Source of parsed manifests.
///
/// The linter only ever asks for one thing: the record stored at a path.
pub trait ManifestReader {
    fn read(&self, path: &Path) -> Result<Chartfile, ManifestError>;
}

/// Reads Chart.yaml files from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsManifestReader;

impl ManifestReader for FsManifestReader {
    fn read(&self, path: &Path) -> Result<Chartfile, ManifestError> {
        log::debug!("Reading manifest {}", path.display());
        parse_chart_yaml_file(path)
    }
}
