//! Shared utilities for the depcheck tool.
//!
//! This crate provides cross-cutting concerns used by the other depcheck
//! crates: the unified error type and terminal status output.

pub mod errors;
pub mod progress;
