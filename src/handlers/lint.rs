//! `chartlint lint` handler.
//!
//! Resolves which charts to lint, streams check lines while each tree is
//! walked, prints one summary line per chart, and applies the exit policy.

use std::path::PathBuf;

use log::Level;

use crate::analyzer::chartlint::formatter::{self, OutputFormat, stylish};
use crate::analyzer::chartlint::workspace::{
    default_home, discover_charts, resolve_chart, workspace_charts_dir,
};
use crate::analyzer::chartlint::{CheckEvent, LintResult, Severity, lint_all};
use crate::cli::CHECK_LOG_TARGET;
use crate::config::Config;
use crate::error::{ChartlintError, Result};

/// Options for one `lint` invocation, after CLI parsing.
#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    pub chart: Option<PathBuf>,
    pub all: bool,
    pub home: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
    pub strict: bool,
}

/// Effective settings once CLI flags are layered over the config file.
struct Settings {
    format: OutputFormat,
    color: bool,
    strict: bool,
    batch: bool,
    home: Option<PathBuf>,
}

impl Settings {
    fn resolve(options: &LintOptions, config: &Config) -> Self {
        Self {
            format: options.format.unwrap_or(config.output.format),
            color: config.output.color && !options.no_color,
            strict: options.strict || config.lint.fail_on_error,
            batch: options.all,
            home: options
                .home
                .clone()
                .or_else(|| config.workspace.home.clone())
                .or_else(default_home),
        }
    }
}

pub fn handle_lint(options: LintOptions, config: &Config) -> Result<()> {
    let settings = Settings::resolve(&options, config);

    let charts = if options.all {
        let home = settings.home.as_deref().ok_or(ChartlintError::NoHome)?;
        let charts = discover_charts(home)?;
        if charts.is_empty() {
            log::warn!(
                "Could not find any charts in {:?}",
                workspace_charts_dir(home).display().to_string()
            );
            return Ok(());
        }
        charts
    } else {
        match &options.chart {
            Some(chart) => vec![resolve_chart(chart, settings.home.as_deref())],
            None => Vec::new(),
        }
    };

    let results = lint_charts(&charts, &settings)?;

    let invalid = results.iter().filter(|r| !r.valid).count();
    if settings.strict && invalid > 0 {
        return Err(ChartlintError::ChartsInvalid { count: invalid });
    }
    Ok(())
}

fn lint_charts(charts: &[PathBuf], settings: &Settings) -> Result<Vec<LintResult>> {
    let mut current: Option<PathBuf> = None;
    let mut render_error = None;

    let results = lint_all(
        charts,
        |path, event| {
            log_check(event);
            if !settings.format.streams_checks() {
                return;
            }
            if current.as_deref() != Some(path) {
                if current.is_some() {
                    println!();
                }
                current = Some(path.to_path_buf());
            }
            println!("{}", stylish::format_event(event, settings.color));
        },
        |result| match settings.format {
            OutputFormat::Stylish => {
                println!("{}", stylish::format_summary(result, settings.color))
            }
            OutputFormat::Compact => {
                match formatter::format_result_to_string(result, settings.format, settings.color) {
                    Ok(output) => println!("{}", output),
                    Err(e) => render_error = Some(e),
                }
            }
            OutputFormat::Json => {}
        },
    );

    if let Some(e) = render_error {
        return Err(e);
    }
    if settings.format == OutputFormat::Json {
        println!("{}", render_json(&results, settings.batch)?);
    }

    Ok(results)
}

/// `--all` always renders an array, a single chart an object.
fn render_json(results: &[LintResult], batch: bool) -> Result<String> {
    match results {
        [single] if !batch => formatter::json::format(single),
        _ => formatter::json::format_many(results),
    }
}

/// Mirror a check to the log at a level matching its outcome.
fn log_check(event: &CheckEvent<'_>) {
    let level = match (event.passed, event.severity) {
        (true, _) => Level::Info,
        (false, Severity::Error) => Level::Error,
        (false, Severity::Warning) => Level::Warn,
    };
    log::log!(target: CHECK_LOG_TARGET, level, "{} : {}", event.message, event.passed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{LintConfig, OutputConfig, WorkspaceConfig};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn chart(dir: &Path, valid: bool) {
        fs::create_dir_all(dir.join("manifests")).unwrap();
        fs::write(dir.join("README.md"), "# chart\n").unwrap();
        if valid {
            fs::write(dir.join("Chart.yaml"), "name: c\nversion: 1.0.0\n").unwrap();
        }
    }

    fn config_with_home(home: &Path) -> Config {
        Config {
            workspace: WorkspaceConfig {
                home: Some(home.to_path_buf()),
            },
            output: OutputConfig {
                format: OutputFormat::Compact,
                color: false,
            },
            lint: LintConfig::default(),
        }
    }

    #[test]
    fn test_cli_flags_override_config() {
        let config = Config {
            lint: LintConfig {
                fail_on_error: false,
            },
            ..Config::default()
        };
        let options = LintOptions {
            format: Some(OutputFormat::Json),
            no_color: true,
            strict: true,
            home: Some(PathBuf::from("/srv/helm")),
            ..LintOptions::default()
        };

        let settings = Settings::resolve(&options, &config);

        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.color);
        assert!(settings.strict);
        assert_eq!(settings.home, Some(PathBuf::from("/srv/helm")));
    }

    #[test]
    fn test_json_shape_follows_batch_mode() {
        let temp_dir = TempDir::new().unwrap();
        let only = temp_dir.path().join("only");
        chart(&only, true);
        let results = lint_all(&[only], |_, _| {}, |_| {});

        let single: serde_json::Value =
            serde_json::from_str(&render_json(&results, false).unwrap()).unwrap();
        assert_eq!(single["chart"], "only");

        let batch: serde_json::Value =
            serde_json::from_str(&render_json(&results, true).unwrap()).unwrap();
        assert_eq!(batch.as_array().map(Vec::len), Some(1));
        assert_eq!(batch[0]["chart"], "only");
    }

    #[test]
    fn test_empty_workspace_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let options = LintOptions {
            all: true,
            strict: true,
            ..LintOptions::default()
        };

        assert!(handle_lint(options, &config_with_home(temp_dir.path())).is_ok());
    }

    #[test]
    fn test_invalid_chart_only_fails_in_strict_mode() {
        let temp_dir = TempDir::new().unwrap();
        let bad = temp_dir.path().join("bad");
        chart(&bad, false);
        let config = config_with_home(temp_dir.path());

        let lenient = LintOptions {
            chart: Some(bad.clone()),
            ..LintOptions::default()
        };
        assert!(handle_lint(lenient, &config).is_ok());

        let strict = LintOptions {
            chart: Some(bad),
            strict: true,
            ..LintOptions::default()
        };
        assert!(matches!(
            handle_lint(strict, &config),
            Err(ChartlintError::ChartsInvalid { count: 1 })
        ));
    }

    #[test]
    fn test_lint_all_counts_every_invalid_chart() {
        let temp_dir = TempDir::new().unwrap();
        let charts = workspace_charts_dir(temp_dir.path());
        chart(&charts.join("a"), false);
        chart(&charts.join("b"), true);
        chart(&charts.join("c"), false);

        let options = LintOptions {
            all: true,
            strict: true,
            ..LintOptions::default()
        };
        assert!(matches!(
            handle_lint(options, &config_with_home(temp_dir.path())),
            Err(ChartlintError::ChartsInvalid { count: 2 })
        ));
    }
}
