//! Artifact assembly errors.

use std::path::PathBuf;

use fnctl_runtime::RuntimeError;
use thiserror::Error;

/// Errors that can occur while building or cleaning an artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The runtime's compile step failed; nothing was packaged.
    #[error("build failed: {0}")]
    Build(#[source] RuntimeError),

    /// The runtime's clean step failed.
    #[error("clean failed: {0}")]
    Clean(#[source] RuntimeError),

    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walking source directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("writing archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("encoding environment bundle: {0}")]
    Environment(#[from] serde_json::Error),

    /// A shim script was not embedded at compile time.
    #[error("missing shim asset {0}")]
    MissingShimAsset(&'static str),
}

/// Result type for artifact operations.
pub type ArtifactResult<T> = Result<T, ArtifactError>;
