//! Operation: display the resolved dependency trees from a snapshot.

use std::collections::HashSet;
use std::path::PathBuf;

use depcheck_core::coordinate::Coordinate;
use depcheck_core::resolution::{DependencyNode, DependencySnapshot};

/// Options for `depcheck tree`.
#[derive(Debug, Default)]
pub struct TreeOptions {
    /// Only show this project.
    pub project: Option<String>,
    /// Only show this configuration (within every shown project).
    pub configuration: Option<String>,
}

/// Display the dependency trees contained in the given snapshot files.
pub fn tree(inputs: &[PathBuf], opts: &TreeOptions) -> miette::Result<()> {
    let snapshot = DependencySnapshot::from_paths(inputs)?;

    let projects: Vec<_> = snapshot
        .projects
        .iter()
        .filter(|p| match &opts.project {
            Some(name) => *name == p.name,
            None => true,
        })
        .collect();

    if projects.is_empty() {
        match &opts.project {
            Some(name) => println!("Project '{name}' not found in the snapshot."),
            None => println!("No projects in the snapshot."),
        }
        return Ok(());
    }

    for project in projects {
        println!("{}", project.name);
        for configuration in &project.configurations {
            if let Some(ref only) = opts.configuration {
                if *only != configuration.name {
                    continue;
                }
            }
            let marker = if configuration.resolvable {
                ""
            } else {
                " (not resolvable)"
            };
            println!("[{}]{marker}", configuration.name);
            print!("{}", render_roots(&configuration.dependencies));
        }
        println!();
    }
    Ok(())
}

fn render_roots(roots: &[DependencyNode]) -> String {
    let mut output = String::new();
    let mut visited = HashSet::new();
    let count = roots.len();
    for (i, node) in roots.iter().enumerate() {
        render_node(&mut output, node, "", i == count - 1, &mut visited);
    }
    output
}

fn render_node(
    output: &mut String,
    node: &DependencyNode,
    prefix: &str,
    is_last: bool,
    visited: &mut HashSet<Coordinate>,
) {
    let connector = if is_last { "└── " } else { "├── " };

    if !node.is_resolved() {
        output.push_str(&format!("{prefix}{connector}{}\n", node_label(node)));
        return;
    }

    // A coordinate already printed in this configuration is not expanded
    // again; repeats with children get a `(*)` marker.
    let repeated = match node.coordinate() {
        Some(coordinate) => !visited.insert(coordinate),
        None => false,
    };
    let marker = if repeated && !node.children().is_empty() {
        " (*)"
    } else {
        ""
    };
    output.push_str(&format!("{prefix}{connector}{}{marker}\n", node_label(node)));
    if repeated {
        return;
    }

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    let children = node.children();
    let count = children.len();
    for (i, child) in children.iter().enumerate() {
        render_node(output, child, &child_prefix, i == count - 1, visited);
    }
}

fn node_label(node: &DependencyNode) -> String {
    match node {
        DependencyNode::Short(coordinate) => coordinate.clone(),
        DependencyNode::Detailed(detailed) => {
            if !detailed.resolved {
                let requested = detailed.requested.as_deref().unwrap_or("?");
                return format!("{requested} (unresolved)");
            }
            match detailed.coordinate() {
                Some(coordinate) => coordinate.to_string(),
                None => {
                    let parts: Vec<&str> = [
                        detailed.group.as_deref(),
                        detailed.artifact.as_deref(),
                        detailed.version.as_deref(),
                    ]
                    .into_iter()
                    .flatten()
                    .collect();
                    if parts.is_empty() {
                        "?".to_string()
                    } else {
                        parts.join(":")
                    }
                }
            }
        }
    }
}
