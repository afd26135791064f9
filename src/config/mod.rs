pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub use types::Config;

const CONFIG_FILE_NAME: &str = ".chartlint.toml";

/// Get the global config file path (~/.chartlint.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (dir/.chartlint.toml)
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Read and parse one config file.
pub fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(config)
}

/// Load configuration from file or use defaults.
///
/// An explicit file must exist and parse. Otherwise the local config in the
/// current directory is tried first, then the global one.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        log::debug!("Loading config from {}", path.display());
        return read_config(path);
    }

    let candidates = std::env::current_dir()
        .ok()
        .map(|cwd| local_config_path(&cwd))
        .into_iter()
        .chain(global_config_path());

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match read_config(&candidate) {
            Ok(config) => {
                log::debug!("Loaded config from {}", candidate.display());
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring config: {}", e),
        }
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::chartlint::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Stylish);
        assert!(config.output.color);
        assert!(!config.lint.fail_on_error);
        assert!(config.workspace.home.is_none());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[output]\nformat = \"json\"\n\n[lint]\nfail_on_error = true\n").unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.color);
        assert!(config.lint.fail_on_error);
    }

    #[test]
    fn test_workspace_home() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[workspace]\nhome = \"/srv/helm\"\n").unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.workspace.home, Some(PathBuf::from("/srv/helm")));
    }

    #[test]
    fn test_explicit_config_must_parse() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[output\n").unwrap();

        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load_config(Some(&temp_dir.path().join("missing.toml"))).is_err());
    }
}
