//! # fnctl-runtime
//!
//! Runtime adapters describe how a function's source directory maps onto a
//! runtime offered by the remote service.
//!
//! Each adapter exposes its optional capabilities explicitly:
//!
//! - [`BuildHook`]: the source must be compiled before packaging
//! - [`CleanHook`]: build outputs can be removed again
//! - shimmed: two bootstrap scripts must be injected into the archive
//!
//! Callers query [`Runtime::build_hook`], [`Runtime::clean_hook`] and
//! [`Runtime::shimmed`] instead of inspecting concrete adapter types.

#![deny(unsafe_code)]

pub mod adapter;
pub mod builtin;
pub mod detect;
pub mod error;
pub mod registry;

pub use adapter::{BuildHook, Capabilities, CleanHook, Runtime};
pub use builtin::{Golang, NodeJs, Python};
pub use detect::detect;
pub use error::{RuntimeError, RuntimeResult};
pub use registry::RuntimeRegistry;
