//! # fnctl-types
//!
//! Shared vocabulary for the fnctl workspace: the validated
//! [`FunctionConfig`], published [`Version`] identifiers and the `current`
//! alias, the environment bundle shipped inside artifacts, and the typed
//! result of a failed invocation.

#![deny(unsafe_code)]

pub mod config;
pub mod environment;
pub mod error;
pub mod invoke;
pub mod version;

pub use config::FunctionConfig;
pub use environment::Environment;
pub use error::{ValidationError, ValidationResult};
pub use invoke::{InvocationType, InvokeError};
pub use version::{Version, CURRENT_ALIAS};
