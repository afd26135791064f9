//! Check tree data model.
//!
//! A `ValidationTree` owns every check for one chart path. Nodes are stored
//! in an arena and addressed by `NodeId`; children are attached after their
//! parent, so a dependency chain is built one call at a time:
//!
//! ```rust,ignore
//! let mut tree = ValidationTree::new("charts/web");
//! let dir = tree.add_error(tree.root(), "Directory exists", |ctx| ctx.path().is_dir());
//! let yaml = tree.add_error(dir, "Chart.yaml is present", |ctx| ctx.chart_yaml_path().is_file());
//! tree.add_error(yaml, "Has name", |ctx| ctx.chartfile().is_ok_and(|c| c.has_name()));
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use crate::analyzer::chartlint::parser::{
    FsManifestReader, ManifestCache, ManifestOutcome, ManifestReader,
};
use crate::analyzer::chartlint::types::Severity;

/// Name of the manifest file inside a chart.
pub const CHART_YAML: &str = "Chart.yaml";

/// A check predicate. Returns a boolean only; all output is the
/// reporting callback's job.
pub type Predicate = Box<dyn Fn(&ChartContext) -> bool>;

/// Handle to a node inside a `ValidationTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Shared, read-only state every predicate sees: the chart path and the
/// manifest cache.
#[derive(Debug)]
pub struct ChartContext {
    path: PathBuf,
    manifests: ManifestCache,
}

impl ChartContext {
    pub fn new(path: impl Into<PathBuf>, reader: Box<dyn ManifestReader>) -> Self {
        Self {
            path: path.into(),
            manifests: ManifestCache::new(reader),
        }
    }

    /// The chart root directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path to Chart.yaml.
    pub fn chart_yaml_path(&self) -> PathBuf {
        self.path.join(CHART_YAML)
    }

    /// The parsed manifest, read on first use and cached for the life of
    /// the tree.
    pub fn chartfile(&self) -> ManifestOutcome {
        self.manifests.get(&self.chart_yaml_path())
    }

    /// Display name derived from the last path component.
    pub fn chart_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Number of distinct manifests read through this context.
    pub fn manifests_read(&self) -> usize {
        self.manifests.read_count()
    }
}

/// One named check.
pub struct CheckNode {
    message: String,
    severity: Severity,
    predicate: Option<Predicate>,
    children: Vec<NodeId>,
}

impl CheckNode {
    fn new(message: impl Into<String>, severity: Severity, predicate: Option<Predicate>) -> Self {
        Self {
            message: message.into(),
            severity,
            predicate,
            children: Vec::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Grouping nodes have no predicate: they are never reported and their
    /// children are always visited.
    pub fn is_group(&self) -> bool {
        self.predicate.is_none()
    }

    /// Evaluate the predicate. Grouping nodes always pass.
    pub fn evaluate(&self, ctx: &ChartContext) -> bool {
        self.predicate.as_ref().is_none_or(|predicate| predicate(ctx))
    }
}

impl fmt::Debug for CheckNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckNode")
            .field("message", &self.message)
            .field("severity", &self.severity)
            .field("group", &self.is_group())
            .field("children", &self.children)
            .finish()
    }
}

/// The check tree for one chart.
///
/// Built fresh per chart, traversed once, then dropped.
#[derive(Debug)]
pub struct ValidationTree {
    context: ChartContext,
    nodes: Vec<CheckNode>,
}

impl ValidationTree {
    /// Create an empty tree that reads manifests from disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_reader(path, Box::new(FsManifestReader))
    }

    /// Create an empty tree with a custom manifest reader.
    pub fn with_reader(path: impl Into<PathBuf>, reader: Box<dyn ManifestReader>) -> Self {
        let root = CheckNode::new(String::new(), Severity::Error, None);
        Self {
            context: ChartContext::new(path, reader),
            nodes: vec![root],
        }
    }

    /// The predicate-less root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn context(&self) -> &ChartContext {
        &self.context
    }

    pub fn path(&self) -> &Path {
        self.context.path()
    }

    pub fn chart_name(&self) -> String {
        self.context.chart_name()
    }

    pub fn node(&self, id: NodeId) -> &CheckNode {
        &self.nodes[id.0]
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing but the root exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Attach an error-level check under `parent`.
    pub fn add_error<F>(
        &mut self,
        parent: NodeId,
        message: impl Into<String>,
        predicate: F,
    ) -> NodeId
    where
        F: Fn(&ChartContext) -> bool + 'static,
    {
        self.add_check(parent, Severity::Error, message, predicate)
    }

    /// Attach a warning-level check under `parent`.
    pub fn add_warning<F>(
        &mut self,
        parent: NodeId,
        message: impl Into<String>,
        predicate: F,
    ) -> NodeId
    where
        F: Fn(&ChartContext) -> bool + 'static,
    {
        self.add_check(parent, Severity::Warning, message, predicate)
    }

    /// Attach a check of any severity under `parent` and return its handle.
    pub fn add_check<F>(
        &mut self,
        parent: NodeId,
        severity: Severity,
        message: impl Into<String>,
        predicate: F,
    ) -> NodeId
    where
        F: Fn(&ChartContext) -> bool + 'static,
    {
        self.push(parent, CheckNode::new(message, severity, Some(Box::new(predicate))))
    }

    /// Attach a grouping node with no predicate.
    pub fn add_group(&mut self, parent: NodeId, message: impl Into<String>) -> NodeId {
        self.push(parent, CheckNode::new(message, Severity::Error, None))
    }

    fn push(&mut self, parent: NodeId, node: CheckNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }
}
