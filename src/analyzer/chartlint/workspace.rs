//! Chart discovery inside a workspace.
//!
//! Charts live at `<home>/workspace/charts/<name>`.

use std::path::{Path, PathBuf};

use crate::error::{ChartlintError, Result};

/// Default chart home, relative to the user's home directory.
pub const DEFAULT_HOME_DIR: &str = ".helm";

/// `~/.helm`, if a home directory exists.
pub fn default_home() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(DEFAULT_HOME_DIR))
}

/// Directory holding every workspace chart.
pub fn workspace_charts_dir(home: &Path) -> PathBuf {
    home.join("workspace").join("charts")
}

/// Directory of one named workspace chart.
pub fn workspace_chart_dir(home: &Path, name: &str) -> PathBuf {
    workspace_charts_dir(home).join(name)
}

/// Find every chart directory in the workspace, sorted by path.
///
/// Fails only when the workspace cannot be enumerated at all. An empty
/// workspace is an empty list.
pub fn discover_charts(home: &Path) -> Result<Vec<PathBuf>> {
    let dir = workspace_charts_dir(home);
    let pattern = format!(
        "{}/*",
        glob::Pattern::escape(&dir.to_string_lossy())
    );

    let entries = glob::glob(&pattern).map_err(|source| ChartlintError::Workspace {
        pattern: pattern.clone(),
        source,
    })?;

    let mut charts = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_dir() => charts.push(path),
            Ok(path) => log::debug!("Skipping non-directory {}", path.display()),
            Err(e) => log::warn!("Skipping unreadable workspace entry: {}", e),
        }
    }
    charts.sort();

    log::debug!("Found {} chart(s) in {}", charts.len(), dir.display());
    Ok(charts)
}

/// Resolve a chart argument.
///
/// Existing paths and multi-component paths are used as given. A bare name
/// that doesn't exist locally is looked up in the workspace.
pub fn resolve_chart(arg: &Path, home: Option<&Path>) -> PathBuf {
    if arg.exists() || arg.components().count() != 1 {
        return arg.to_path_buf();
    }

    match (home, arg.to_str()) {
        (Some(home), Some(name)) => {
            let candidate = workspace_chart_dir(home, name);
            if !candidate.exists() {
                log::warn!("Chart {} not found in workspace {}", name, home.display());
            }
            candidate
        }
        _ => arg.to_path_buf(),
    }
}
