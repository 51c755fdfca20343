//! Error handling for the starc driver.
//!
//! Structured errors via `thiserror`; the binary edge wraps them in
//! `anyhow` for display.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the starc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A source file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path of the file that failed to load.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// Writing the emission stream failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a token dump failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Strict mode: the input produced lexical diagnostics.
    #[error("input produced {errors} lexical error(s)")]
    Strict {
        /// Number of errors the handler collected.
        errors: usize,
    },
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
