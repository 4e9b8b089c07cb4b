//! Configuration validation errors.

use thiserror::Error;

/// A function configuration field is missing or out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No runtime was configured or detected.
    #[error("runtime is required")]
    MissingRuntime,

    /// The runtime identifier does not resolve to a known adapter.
    #[error("unrecognized runtime {0:?}")]
    UnknownRuntime(String),

    /// Memory must be a positive number of megabytes.
    #[error("memory must be greater than zero, got {0}")]
    InvalidMemory(i64),

    /// Timeout must be a positive number of seconds.
    #[error("timeout must be greater than zero, got {0}")]
    InvalidTimeout(i64),

    /// The execution role is empty.
    #[error("role is required")]
    MissingRole,
}

/// Result type for validation.
pub type ValidationResult<T> = Result<T, ValidationError>;
