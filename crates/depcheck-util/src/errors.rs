use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all depcheck operations.
#[derive(Debug, Error, Diagnostic)]
pub enum DepcheckError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed dependency snapshot file.
    #[error("Snapshot error: {message}")]
    #[diagnostic(help("Check that the snapshot file is valid JSON exported by your build"))]
    Snapshot { message: String },

    /// Invalid or malformed configuration (e.g. Depcheck.toml).
    #[error("Config error: {message}")]
    #[diagnostic(help("Check your Depcheck.toml for syntax errors"))]
    Config { message: String },

    /// One or more libraries resolved to multiple distinct versions.
    #[error("Version conflict: {message}")]
    Conflict { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type DepcheckResult<T> = miette::Result<T>;
