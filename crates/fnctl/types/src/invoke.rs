//! Invocation kinds and function-level failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How an invocation request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvocationType {
    /// Wait for the result.
    RequestResponse,
    /// Fire and forget; no payload or logs come back.
    Event,
    /// Validate parameters and permissions without running the function.
    DryRun,
}

impl InvocationType {
    /// Wire name of the invocation type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequestResponse => "RequestResponse",
            Self::Event => "Event",
            Self::DryRun => "DryRun",
        }
    }
}

impl std::fmt::Display for InvocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The deployed function itself failed.
///
/// Decoded from the `{errorMessage, errorType, stackTrace}` payload the
/// remote returns alongside its function-error marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct InvokeError {
    #[serde(rename = "errorMessage", default)]
    pub message: String,

    #[serde(rename = "errorType", default)]
    pub kind: String,

    #[serde(rename = "stackTrace", default)]
    pub stack: Vec<String>,

    /// Whether the function reported the error itself rather than crashing.
    #[serde(skip)]
    pub handled: bool,
}
