//! # fnctl-artifact
//!
//! Assembles the deployable archive for a function.
//!
//! ```text
//! source dir + Environment + Runtime
//!     │
//!     ▼
//! ArtifactBuilder::build
//!     │─── build hook (compiled runtimes), abort on failure
//!     │─── .env.json        (only when the environment is non-empty)
//!     │─── index.js, byline.js (only for shimmed runtimes)
//!     │─── every source file, sorted by relative path
//!     ▼
//! Artifact { zip bytes, base64 SHA-256 }
//! ```
//!
//! Entries carry a fixed timestamp and permission bits, so identical inputs
//! produce identical bytes and the content hash can be compared against the
//! hash the remote service reports for the deployed code.

#![deny(unsafe_code)]

pub mod artifact;
pub mod builder;
pub mod error;
pub mod shim;

pub use artifact::Artifact;
pub use builder::{ArtifactBuilder, ENV_ENTRY};
pub use error::{ArtifactError, ArtifactResult};
pub use shim::SHIM_ENTRIES;
