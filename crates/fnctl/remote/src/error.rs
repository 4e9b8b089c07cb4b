//! Remote call failures.

use thiserror::Error;

/// A remote call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The addressed function, alias or version does not exist.
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Any other failure reported by the service or its transport.
    #[error("{code}: {message}")]
    Service { code: String, message: String },
}

impl RemoteError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for remote calls.
pub type RemoteResult<T> = Result<T, RemoteError>;
