//! Conflict report types and their text rendering.

use std::fmt;

use depcheck_core::coordinate::ModuleId;
use serde::Serialize;

use crate::table::VersionEntry;

/// A report of all version conflicts surfaced during a check run.
#[derive(Debug, Default, Serialize)]
pub struct ConflictReport {
    pub conflicts: Vec<VersionConflict>,
}

/// A single library that resolved to more than one distinct version,
/// with every version and its consumers in first-seen order.
#[derive(Debug, Clone, Serialize)]
pub struct VersionConflict {
    pub module: ModuleId,
    pub versions: Vec<VersionEntry>,
}

impl ConflictReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, conflict: VersionConflict) {
        self.conflicts.push(conflict);
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conflicts.is_empty() {
            return write!(f, "No version conflicts.");
        }
        writeln!(f, "Version conflicts ({}):", self.conflicts.len())?;
        for conflict in &self.conflicts {
            write!(f, "{conflict}")?;
        }
        Ok(())
    }
}

impl fmt::Display for VersionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.module)?;
        for entry in &self.versions {
            writeln!(f, "\t version: {}", entry.version)?;
            for consumer in &entry.consumers {
                writeln!(f, "\t\tfound: {consumer}")?;
            }
        }
        Ok(())
    }
}
