//! The standard chart check tree.
//!
//! | Check                          | Severity | Depends on            |
//! |--------------------------------|----------|-----------------------|
//! | Directory exists               | error    |                       |
//! | Chart.yaml is present          | error    | Directory exists      |
//! | Has name                       | error    | Chart.yaml is present |
//! | Has description                | warning  | Chart.yaml is present |
//! | Has maintainers                | warning  | Chart.yaml is present |
//! | Has version                    | error    | Chart.yaml is present |
//! | README.md is present           | warning  | Directory exists      |
//! | manifests directory is present | error    | Directory exists      |

use std::path::PathBuf;

use crate::analyzer::chartlint::parser::{Chartfile, ManifestReader};
use crate::analyzer::chartlint::tree::{ChartContext, NodeId, ValidationTree};

pub const DIRECTORY_EXISTS: &str = "Directory exists";
pub const CHART_YAML_PRESENT: &str = "Chart.yaml is present";
pub const HAS_NAME: &str = "Has name";
pub const HAS_DESCRIPTION: &str = "Has description";
pub const HAS_MAINTAINERS: &str = "Has maintainers";
pub const HAS_VERSION: &str = "Has version";
pub const README_PRESENT: &str = "README.md is present";
pub const MANIFESTS_DIR_PRESENT: &str = "manifests directory is present";

pub const README_FILE: &str = "README.md";
pub const MANIFESTS_DIR: &str = "manifests";

/// Build the standard tree for the chart at `path`, reading manifests from disk.
pub fn standard_tree(path: impl Into<PathBuf>) -> ValidationTree {
    let mut tree = ValidationTree::new(path);
    build_chart_tree(&mut tree);
    tree
}

/// Build the standard tree with a custom manifest reader.
pub fn standard_tree_with_reader(
    path: impl Into<PathBuf>,
    reader: Box<dyn ManifestReader>,
) -> ValidationTree {
    let mut tree = ValidationTree::with_reader(path, reader);
    build_chart_tree(&mut tree);
    tree
}

/// Attach the standard checks under the tree's root.
pub fn build_chart_tree(tree: &mut ValidationTree) {
    let directory = tree.add_error(tree.root(), DIRECTORY_EXISTS, |ctx| ctx.path().is_dir());

    add_manifest_checks(tree, directory);

    tree.add_warning(directory, README_PRESENT, |ctx| ctx.path().join(README_FILE).is_file());
    tree.add_error(directory, MANIFESTS_DIR_PRESENT, |ctx| ctx.path().join(MANIFESTS_DIR).is_dir());
}

fn add_manifest_checks(tree: &mut ValidationTree, directory: NodeId) {
    let chart_yaml = tree.add_error(directory, CHART_YAML_PRESENT, |ctx| {
        ctx.chart_yaml_path().is_file()
    });

    tree.add_error(chart_yaml, HAS_NAME, |ctx| manifest_field(ctx, |c| c.has_name()));
    tree.add_warning(chart_yaml, HAS_DESCRIPTION, |ctx| {
        manifest_field(ctx, |c| c.has_description())
    });
    tree.add_warning(chart_yaml, HAS_MAINTAINERS, |ctx| {
        manifest_field(ctx, |c| c.has_maintainers())
    });
    tree.add_error(chart_yaml, HAS_VERSION, |ctx| manifest_field(ctx, |c| c.has_version()));
}

/// A read or parse failure fails the field check.
fn manifest_field<F>(ctx: &ChartContext, check: F) -> bool
where
    F: FnOnce(&Chartfile) -> bool,
{
    ctx.chartfile().is_ok_and(|chartfile| check(chartfile.as_ref()))
}
