//! Cumulative accounting of which versions of which libraries were seen,
//! and who consumed them.

use std::collections::HashMap;

use depcheck_core::coordinate::ModuleId;
use serde::Serialize;

use crate::report::VersionConflict;

/// One version of a library and every consumer that pulled it in,
/// in first-seen order.
#[derive(Debug, Clone, Serialize)]
pub struct VersionEntry {
    pub version: String,
    pub consumers: Vec<String>,
}

/// Every version seen so far for one library, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct VersionOccurrences {
    entries: Vec<VersionEntry>,
}

impl VersionOccurrences {
    /// Record one sighting. Repeat sightings of the same consumer for the
    /// same version are absorbed without effect.
    fn note(&mut self, version: &str, consumer: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.version == version) {
            if !entry.consumers.iter().any(|c| c == consumer) {
                entry.consumers.push(consumer.to_string());
            }
        } else {
            self.entries.push(VersionEntry {
                version: version.to_string(),
                consumers: vec![consumer.to_string()],
            });
        }
    }

    /// Number of distinct version strings seen so far.
    pub fn distinct_versions(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[VersionEntry] {
        &self.entries
    }
}

/// Accumulated sightings for one whole check run: library, then version,
/// then the consumers that pulled that version in.
///
/// Constructed fresh per run and never shared between runs, so repeated
/// checks in one process cannot bleed state into each other.
#[derive(Debug, Default)]
pub struct ConflictTable {
    modules: HashMap<ModuleId, VersionOccurrences>,
}

impl ConflictTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sighting and report whether the library now resolves to
    /// more than one distinct version.
    pub fn record(&mut self, module: &ModuleId, version: &str, consumer: &str) -> bool {
        let occurrences = self.modules.entry(module.clone()).or_default();
        occurrences.note(version, consumer);
        occurrences.distinct_versions() > 1
    }

    /// Whether this library has been seen with more than one version.
    pub fn is_conflicting(&self, module: &ModuleId) -> bool {
        self.modules
            .get(module)
            .is_some_and(|o| o.distinct_versions() > 1)
    }

    pub fn occurrences(&self, module: &ModuleId) -> Option<&VersionOccurrences> {
        self.modules.get(module)
    }

    /// A point-in-time view of one library's accumulated versions and
    /// consumers. Later sightings do not alter a snapshot already taken.
    pub fn snapshot(&self, module: &ModuleId) -> Option<VersionConflict> {
        let occurrences = self.modules.get(module)?;
        Some(VersionConflict {
            module: module.clone(),
            versions: occurrences.entries.clone(),
        })
    }

    /// Number of distinct libraries seen.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
