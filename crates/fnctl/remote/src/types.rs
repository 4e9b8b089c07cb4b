//! Request and reply shapes exchanged with the remote service.
//!
//! Field names serialize in the service's PascalCase so transport
//! implementations can pass these types straight through.

use fnctl_types::{InvocationType, Version};
use serde::{Deserialize, Serialize};

// ── Functions ──────────────────────────────────────────────────────────

/// Remote view of a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionInfo {
    pub function_name: String,
    /// Base64 SHA-256 of the deployed archive.
    pub code_sha256: String,
    #[serde(default)]
    pub code_size: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub handler: String,
    #[serde(default)]
    pub memory_size: i64,
    #[serde(default)]
    pub timeout: i64,
    #[serde(default)]
    pub role: String,
    pub version: Version,
}

/// A version published by a create or code update call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionVersion {
    pub version: Version,
    pub code_sha256: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFunctionRequest<'a> {
    pub function_name: &'a str,
    pub description: &'a str,
    pub memory_size: i64,
    pub timeout: i64,
    pub runtime: &'a str,
    pub handler: &'a str,
    pub role: &'a str,
    pub publish: bool,
    #[serde(skip)]
    pub zip_file: &'a [u8],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCodeRequest<'a> {
    pub function_name: &'a str,
    pub publish: bool,
    #[serde(skip)]
    pub zip_file: &'a [u8],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateConfigRequest<'a> {
    pub function_name: &'a str,
    pub memory_size: i64,
    pub timeout: i64,
    pub description: &'a str,
    pub role: &'a str,
    pub handler: &'a str,
}

// ── Aliases and versions ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AliasInfo {
    pub name: String,
    pub function_version: Version,
}

/// Create or repoint an alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AliasRequest<'a> {
    pub function_name: &'a str,
    pub name: &'a str,
    pub function_version: &'a Version,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionInfo {
    pub version: Version,
    #[serde(default)]
    pub code_sha256: String,
    #[serde(default)]
    pub description: String,
}

impl VersionInfo {
    pub fn new(version: impl Into<Version>) -> Self {
        Self {
            version: version.into(),
            code_sha256: String::new(),
            description: String::new(),
        }
    }
}

// ── Invocation ─────────────────────────────────────────────────────────

/// Whether the reply should carry the tail of the execution log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogType {
    None,
    Tail,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvokeRequest<'a> {
    pub function_name: &'a str,
    /// Version or alias the call is pinned to.
    pub qualifier: &'a str,
    pub invocation_type: InvocationType,
    pub log_type: LogType,
    /// Base64 JSON client context.
    pub client_context: &'a str,
    #[serde(skip)]
    pub payload: &'a [u8],
}

/// Out-of-band marker set when the function itself failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionFault {
    /// The function returned an error.
    Handled,
    /// The runtime caught a crash, timeout or similar.
    Unhandled,
}

impl FunctionFault {
    /// Parse the marker string carried by the service reply.
    pub fn from_marker(marker: &str) -> Self {
        if marker == "Handled" {
            Self::Handled
        } else {
            Self::Unhandled
        }
    }

    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokeResponse {
    pub payload: Vec<u8>,
    pub function_error: Option<FunctionFault>,
    /// Base64 tail of the execution log, when requested.
    pub log_result: Option<String>,
}
