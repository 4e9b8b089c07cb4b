//! Function lifecycle errors.
//!
//! Remote failures pass through unchanged as [`FunctionError::Remote`]. The
//! one exception is "function not found" during a code deploy, which selects
//! the create path and never reaches the caller.

use fnctl_artifact::ArtifactError;
use fnctl_remote::RemoteError;
use fnctl_types::{InvokeError, ValidationError, Version};
use thiserror::Error;

/// Why a rollback was refused before anything was written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollbackPrecondition {
    #[error("only one version deployed")]
    OnlyOneVersion,

    #[error("specified version {0} currently deployed")]
    AlreadyDeployed(Version),
}

/// Errors returned by [`Function`](crate::Function) operations.
#[derive(Debug, Error)]
pub enum FunctionError {
    /// The merged configuration is invalid.
    #[error("error opening function {function}: {source}")]
    Validation {
        function: String,
        #[source]
        source: ValidationError,
    },

    /// `function.json` could not be read or merged.
    #[error("loading function config: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The deployed function ran and failed.
    #[error("function error: {0}")]
    Invocation(#[from] InvokeError),

    #[error("can't rollback: {0}")]
    Rollback(#[from] RollbackPrecondition),

    #[error("encoding {what}: {source}")]
    Encode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The remote flagged a function error but the payload was not an error document.
    #[error("decoding function error payload: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("decoding log tail: {0}")]
    LogTail(#[from] base64::DecodeError),
}

impl FunctionError {
    /// The invocation failure, if the function itself failed.
    pub fn as_invocation(&self) -> Option<&InvokeError> {
        match self {
            Self::Invocation(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for function operations.
pub type FunctionResult<T> = Result<T, FunctionError>;
