use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::coordinate::{Coordinate, ModuleId};

/// A build-wide export of resolved dependency graphs, as produced by a
/// build tool after resolution (one JSON document per build or per project).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencySnapshot {
    pub projects: Vec<ProjectGraph>,
}

/// One project of the build and its resolved configurations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectGraph {
    pub name: String,

    #[serde(default)]
    pub configurations: Vec<ConfigurationGraph>,
}

/// A named, independently resolved set of dependencies within a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationGraph {
    pub name: String,

    /// Whether the build tool was able to resolve this configuration at all.
    #[serde(default = "default_true")]
    pub resolvable: bool,

    #[serde(default)]
    pub dependencies: Vec<DependencyNode>,
}

/// A node in a resolved dependency tree.
///
/// Supports both shorthand (`"group:artifact:version"`, always a resolved
/// leaf) and detailed forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencyNode {
    Short(String),
    Detailed(DetailedNode),
}

/// A resolution result with explicit fields.
///
/// Any coordinate part may be absent; results the build tool failed to
/// resolve carry `resolved: false` and no selected module at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedNode {
    #[serde(default = "default_true")]
    pub resolved: bool,

    #[serde(default)]
    pub group: Option<String>,

    #[serde(default)]
    pub artifact: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    /// What was asked for, kept for diagnostics on unresolved results.
    #[serde(default)]
    pub requested: Option<String>,

    #[serde(default)]
    pub dependencies: Vec<DependencyNode>,
}

fn default_true() -> bool {
    true
}

impl DependencyNode {
    /// Whether the build tool resolved this node to a concrete result.
    pub fn is_resolved(&self) -> bool {
        match self {
            DependencyNode::Short(_) => true,
            DependencyNode::Detailed(node) => node.resolved,
        }
    }

    /// The node's full coordinate, if every part is present and non-empty.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            DependencyNode::Short(s) => Coordinate::parse(s),
            DependencyNode::Detailed(node) => node.coordinate(),
        }
    }

    /// Child resolution results. Shorthand nodes are leaves.
    pub fn children(&self) -> &[DependencyNode] {
        match self {
            DependencyNode::Short(_) => &[],
            DependencyNode::Detailed(node) => &node.dependencies,
        }
    }
}

impl DetailedNode {
    /// The selected coordinate, if group, artifact, and version are all
    /// present and non-empty.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let group = self.group.as_deref().filter(|s| !s.is_empty())?;
        let artifact = self.artifact.as_deref().filter(|s| !s.is_empty())?;
        let version = self.version.as_deref().filter(|s| !s.is_empty())?;
        Some(Coordinate::new(ModuleId::new(group, artifact), version))
    }
}

/// Accepted top-level shapes of a snapshot file: a whole build with a
/// `projects` array, or a single bare project object.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Build(DependencySnapshot),
    Single(ProjectGraph),
}

impl DependencySnapshot {
    /// Parse a snapshot from JSON text.
    pub fn parse_json(content: &str) -> miette::Result<Self> {
        let file: SnapshotFile = serde_json::from_str(content).map_err(|e| {
            depcheck_util::errors::DepcheckError::Snapshot {
                message: format!("Failed to parse snapshot: {e}"),
            }
        })?;
        Ok(match file {
            SnapshotFile::Build(snapshot) => snapshot,
            SnapshotFile::Single(project) => DependencySnapshot {
                projects: vec![project],
            },
        })
    }

    /// Load and parse a snapshot file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            depcheck_util::errors::DepcheckError::Snapshot {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;
        Self::parse_json(&content)
    }

    /// Load several snapshot files and merge them into one build-wide
    /// snapshot, preserving file order.
    pub fn from_paths(paths: &[PathBuf]) -> miette::Result<Self> {
        let mut merged = DependencySnapshot::default();
        for path in paths {
            let snapshot = Self::from_path(path)?;
            tracing::debug!(
                "loaded {} project(s) from {}",
                snapshot.projects.len(),
                path.display()
            );
            merged.projects.extend(snapshot.projects);
        }
        Ok(merged)
    }
}
