//! Runtime adapter errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving a runtime or running its hooks.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// No adapter is registered under this identifier.
    #[error("unrecognized runtime {0:?}")]
    Unrecognized(String),

    /// The source directory matches no known runtime layout.
    #[error("unable to detect runtime in {}", .0.display())]
    Undetected(PathBuf),

    /// The compile step failed; no archive should be produced.
    #[error("compiling {runtime}: {reason}")]
    BuildFailed { runtime: String, reason: String },

    /// Removing build outputs failed.
    #[error("cleaning {runtime}: {source}")]
    CleanFailed {
        runtime: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
