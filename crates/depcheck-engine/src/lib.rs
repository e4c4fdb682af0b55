//! Dependency version conflict detection engine.
//!
//! The engine accumulates `(library, version, consumer)` sightings across
//! an entire check run, walks resolved dependency trees depth-first, and
//! renders deterministic conflict reports. All state lives in a
//! per-run [`detect::ConflictDetector`]; nothing is shared between runs.

pub mod detect;
pub mod report;
pub mod table;
pub mod walk;
