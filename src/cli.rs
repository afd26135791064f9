use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::analyzer::chartlint::OutputFormat;

/// Log target used for the per-check mirror of console output.
pub const CHECK_LOG_TARGET: &str = "chartlint::check";

#[derive(Parser)]
#[command(name = "chartlint")]
#[command(version = crate::VERSION)]
#[command(about = "Validate chart directories against a tree of checks")]
#[command(long_about = "Checks a chart directory (a Chart.yaml manifest plus its resources) against a fixed tree of checks. A check only runs when the check it depends on passed, so one missing file is reported once.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint a chart, or every chart in the workspace
    Lint {
        /// Chart directory, or the name of a workspace chart
        #[arg(value_name = "CHART", required_unless_present = "all", conflicts_with = "all")]
        chart: Option<PathBuf>,

        /// Lint every chart in the workspace
        #[arg(long)]
        all: bool,

        /// Chart home holding workspace/charts
        #[arg(long, env = "HELM_HOME", value_name = "DIR")]
        home: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Exit with an error when a chart fails an error-level check
        #[arg(long)]
        strict: bool,
    },
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        let mut builder = env_logger::Builder::from_default_env();
        builder.filter_level(level);
        // Check results already go to stdout; only mirror them when asked.
        if self.verbose == 0 {
            builder.filter_module(CHECK_LOG_TARGET, log::LevelFilter::Off);
        }
        builder.init();
    }
}
