//! Depth-first traversal of resolved dependency trees, feeding sightings
//! into the conflict detector.

use std::collections::HashSet;

use depcheck_core::coordinate::Coordinate;
use depcheck_core::resolution::DependencyNode;

use crate::detect::ConflictDetector;
use crate::report::VersionConflict;

/// Placeholder version some build tools assign to modules without a real
/// version (matched case-insensitively). Never counted as a version.
pub const PLACEHOLDER_VERSION: &str = "unspecified";

/// Tracks which coordinates have been expanded during one walk, bounding
/// the work on graphs with heavily shared subtrees and guarding against
/// cycles in malformed input.
#[derive(Debug, Default)]
pub struct VisitedSet {
    visited: HashSet<Coordinate>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a coordinate as visited. Returns `false` if already visited.
    pub fn visit(&mut self, coordinate: &Coordinate) -> bool {
        self.visited.insert(coordinate.clone())
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.visited.contains(coordinate)
    }
}

/// Walk one configuration's resolved dependency trees depth-first,
/// recording every eligible `(library, version, consumer)` sighting into
/// the detector.
///
/// `project` names the consuming project and prefixes every consumer
/// label. Returns the conflicts newly detected during this walk, in
/// detection order.
pub fn walk(
    detector: &mut ConflictDetector,
    project: &str,
    roots: &[DependencyNode],
) -> Vec<VersionConflict> {
    let mut visited = VisitedSet::new();
    let mut found = Vec::new();
    for node in roots {
        visit(detector, project, node, &mut visited, &mut found);
    }
    found
}

fn visit(
    detector: &mut ConflictDetector,
    project: &str,
    node: &DependencyNode,
    visited: &mut VisitedSet,
    found: &mut Vec<VersionConflict>,
) {
    if !node.is_resolved() {
        tracing::debug!("skipping unresolved dependency in {}", project);
        return;
    }

    if let Some(coordinate) = node.coordinate() {
        if !visited.visit(&coordinate) {
            return;
        }
        if coordinate.version.eq_ignore_ascii_case(PLACEHOLDER_VERSION) {
            tracing::trace!("ignoring placeholder version for {}", coordinate.module);
        } else {
            let consumer = format!("{project}:{coordinate}");
            if let Some(conflict) =
                detector.record(&coordinate.module, &coordinate.version, &consumer)
            {
                found.push(conflict);
            }
        }
    }

    for child in node.children() {
        visit(detector, project, child, visited, found);
    }
}
