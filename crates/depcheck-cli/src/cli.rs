//! CLI argument definitions for depcheck.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "depcheck",
    version,
    about = "Detect conflicting dependency versions across a build",
    long_about = "Depcheck reads resolved dependency graphs exported from a build and \
                  reports every library that resolves to more than one distinct version, \
                  listing the consumers that pulled in each version."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check resolved dependency graphs for version conflicts
    Check {
        /// Snapshot files to check (JSON)
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Exit with a failure when conflicts are found
        #[arg(long)]
        deny: bool,
        /// With --deny, report every conflict instead of stopping at the first
        #[arg(long)]
        no_fail_fast: bool,
        /// Configuration names to skip (glob patterns allowed, repeatable)
        #[arg(long)]
        exclude: Vec<String>,
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
        /// Path to a Depcheck.toml (defaults to ./Depcheck.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the resolved dependency trees from a snapshot
    Tree {
        /// Snapshot files to read (JSON)
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Only show this project
        #[arg(long)]
        project: Option<String>,
        /// Only show this configuration
        #[arg(long)]
        configuration: Option<String>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
