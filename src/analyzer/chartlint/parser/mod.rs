//! Parsers for chart components.
//!
//! - Chart.yaml metadata
//! - The per-tree manifest cache

pub mod cache;
pub mod chart;

pub use cache::{ManifestCache, ManifestOutcome};
pub use chart::{
    Chartfile, FsManifestReader, Maintainer, ManifestError, ManifestReader, parse_chart_yaml,
    parse_chart_yaml_file,
};
