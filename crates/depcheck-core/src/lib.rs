//! Core data types for the depcheck tool.
//!
//! This crate defines the types a check run consumes: library coordinates,
//! the resolved-dependency snapshot model exported from a build, and check
//! configuration.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod config;
pub mod coordinate;
pub mod resolution;
