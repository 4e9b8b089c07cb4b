//! # fnctl-remote
//!
//! The capability surface fnctl needs from the remote function service.
//!
//! Transport and authentication live behind [`FunctionService`]; this crate
//! only fixes the shapes of requests and replies and how failures are
//! classified. "Function not found" is reported as [`RemoteError::NotFound`]
//! by the implementation so callers never inspect vendor error codes.
//!
//! ```text
//! FunctionService
//!     │─── get_function / delete_function
//!     │─── create_function / update_function_code   → FunctionVersion
//!     │─── update_function_configuration
//!     │─── get_alias / create_alias / update_alias
//!     │─── list_versions                            → [$LATEST, v1, v2, ...]
//!     └─── invoke                                   → InvokeResponse
//! ```

#![deny(unsafe_code)]

pub mod error;
pub mod service;
pub mod types;

pub use error::{RemoteError, RemoteResult};
pub use service::FunctionService;
pub use types::{
    AliasInfo, AliasRequest, CreateFunctionRequest, FunctionFault, FunctionInfo, FunctionVersion,
    InvokeRequest, InvokeResponse, LogType, UpdateCodeRequest, UpdateConfigRequest, VersionInfo,
};
