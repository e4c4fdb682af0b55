//! Per-run conflict detection on top of the accounting table.

use depcheck_core::coordinate::ModuleId;

use crate::report::{ConflictReport, VersionConflict};
use crate::table::ConflictTable;

/// Detects version conflicts across one whole check run.
///
/// Owns the cumulative [`ConflictTable`] plus the record of libraries
/// already surfaced, so each conflicting library is reported exactly once
/// per run no matter how many configurations it appears in.
#[derive(Debug, Default)]
pub struct ConflictDetector {
    table: ConflictTable,
    reported: Vec<ModuleId>,
}

impl ConflictDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one `(library, version, consumer)` sighting.
    ///
    /// Returns a snapshot of the conflict the first time the library flips
    /// to conflicting. Every other call returns `None`, including later
    /// sightings that add further versions to an already-reported library.
    pub fn record(
        &mut self,
        module: &ModuleId,
        version: &str,
        consumer: &str,
    ) -> Option<VersionConflict> {
        if self.table.record(module, version, consumer) {
            self.maybe_report(module)
        } else {
            None
        }
    }

    /// Snapshot a conflicting library, at most once per run.
    ///
    /// Returns `None` when the library is not conflicting or has already
    /// been surfaced.
    pub fn maybe_report(&mut self, module: &ModuleId) -> Option<VersionConflict> {
        if !self.table.is_conflicting(module) || self.reported.contains(module) {
            return None;
        }
        self.reported.push(module.clone());
        self.table.snapshot(module)
    }

    /// Whether this library has already been surfaced in this run.
    pub fn is_reported(&self, module: &ModuleId) -> bool {
        self.reported.contains(module)
    }

    /// The end-of-run report: every conflicting library in detection order,
    /// rendered from the final table state so versions and consumers that
    /// arrived after first detection are included.
    pub fn report(&self) -> ConflictReport {
        let mut report = ConflictReport::new();
        for module in &self.reported {
            if let Some(conflict) = self.table.snapshot(module) {
                report.add(conflict);
            }
        }
        report
    }

    pub fn table(&self) -> &ConflictTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lib(artifact: &str) -> ModuleId {
        ModuleId::new("org.example", artifact)
    }

    #[test]
    fn first_flip_yields_a_conflict() {
        let mut detector = ConflictDetector::new();
        assert!(detector
            .record(&lib("a"), "1.0", "app:org.example:a:1.0")
            .is_none());

        let conflict = detector
            .record(&lib("a"), "2.0", "app-test:org.example:a:2.0")
            .unwrap();
        assert_eq!(conflict.module, lib("a"));
        assert_eq!(conflict.versions.len(), 2);
        assert_eq!(conflict.versions[0].version, "1.0");
        assert_eq!(conflict.versions[0].consumers, ["app:org.example:a:1.0"]);
        assert_eq!(conflict.versions[1].version, "2.0");
        assert_eq!(
            conflict.versions[1].consumers,
            ["app-test:org.example:a:2.0"]
        );
    }

    #[test]
    fn each_library_surfaces_once() {
        let mut detector = ConflictDetector::new();
        detector.record(&lib("a"), "1.0", "app:org.example:a:1.0");
        assert!(detector
            .record(&lib("a"), "2.0", "app2:org.example:a:2.0")
            .is_some());
        // A third version still lands in the table but yields no new report.
        assert!(detector
            .record(&lib("a"), "3.0", "app3:org.example:a:3.0")
            .is_none());
        assert!(detector.is_reported(&lib("a")));
        assert_eq!(
            detector
                .table()
                .occurrences(&lib("a"))
                .unwrap()
                .distinct_versions(),
            3
        );
    }

    #[test]
    fn detection_snapshot_excludes_later_sightings() {
        let mut detector = ConflictDetector::new();
        detector.record(&lib("a"), "1.0", "app:org.example:a:1.0");
        let conflict = detector
            .record(&lib("a"), "1.2", "app-image:org.example:a:1.2")
            .unwrap();

        detector.record(&lib("a"), "1.0", "late:org.example:a:1.0");
        detector.record(&lib("a"), "1.5", "later:org.example:a:1.5");

        assert_eq!(conflict.versions.len(), 2);
        assert_eq!(conflict.versions[0].consumers, ["app:org.example:a:1.0"]);
    }

    #[test]
    fn maybe_report_requires_a_conflict() {
        let mut detector = ConflictDetector::new();
        detector.record(&lib("a"), "1.0", "app:org.example:a:1.0");
        assert!(detector.maybe_report(&lib("a")).is_none());
        assert!(detector.maybe_report(&lib("ghost")).is_none());
    }

    #[test]
    fn final_report_includes_late_versions() {
        let mut detector = ConflictDetector::new();
        detector.record(&lib("x"), "1.0", "app:org.example:x:1.0");
        detector.record(&lib("x"), "1.0", "app-test:org.example:x:1.0");
        detector.record(&lib("x"), "1.2", "app-image:org.example:x:1.2");
        detector.record(&lib("x"), "1.5", "app-extra:org.example:x:1.5");

        let report = detector.report();
        assert_eq!(report.len(), 1);

        let conflict = &report.conflicts[0];
        let versions: Vec<&str> = conflict
            .versions
            .iter()
            .map(|e| e.version.as_str())
            .collect();
        assert_eq!(versions, ["1.0", "1.2", "1.5"]);
        assert_eq!(
            conflict.versions[0].consumers,
            ["app:org.example:x:1.0", "app-test:org.example:x:1.0"]
        );
    }

    #[test]
    fn report_keeps_detection_order() {
        let mut detector = ConflictDetector::new();
        detector.record(&lib("b"), "1.0", "app:org.example:b:1.0");
        detector.record(&lib("c"), "1.0", "app:org.example:c:1.0");
        detector.record(&lib("b"), "2.0", "app2:org.example:b:2.0");
        detector.record(&lib("c"), "2.0", "app2:org.example:c:2.0");

        let report = detector.report();
        let order: Vec<String> = report
            .conflicts
            .iter()
            .map(|c| c.module.to_string())
            .collect();
        assert_eq!(order, ["org.example:b", "org.example:c"]);
    }

    #[test]
    fn clean_run_produces_empty_report() {
        let mut detector = ConflictDetector::new();
        detector.record(&lib("a"), "1.0", "app:org.example:a:1.0");
        detector.record(&lib("b"), "2.0", "app:org.example:b:2.0");
        assert!(detector.report().is_empty());
    }
}
