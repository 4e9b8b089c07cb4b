//! # fnctl-function
//!
//! Lifecycle operations for a single serverless function.
//!
//! ```text
//!  function dir ──► Function::open (function.json + defaults, runtime detection)
//!                        │
//!      ┌─────────────────┼──────────────────┬───────────────────┐
//!      ▼                 ▼                  ▼                   ▼
//!   deploy          rollback /          invoke             build / clean
//!   ├ deploy_code   rollback_version    (qualifier          info / delete
//!   │ create│update current_version      "current")
//!   └ deploy_config
//!      │                 │                  │
//!      └─────────────────┴──────────────────┴──► FunctionService (remote)
//! ```
//!
//! Every deploy and rollback converges on repointing the `current` alias.
//! Operations are synchronous, issue their remote calls in order, and stop at
//! the first failure without undoing earlier steps. Re-running an operation
//! is the recovery path.

#![deny(unsafe_code)]

pub mod alias;
pub mod config;
pub mod deploy;
pub mod error;
pub mod function;
pub mod invoke;

#[cfg(test)]
mod testing;

pub use alias::select_rollback_target;
pub use config::{FunctionDefaults, CONFIG_FILE};
pub use deploy::DeployOutcome;
pub use error::{FunctionError, FunctionResult, RollbackPrecondition};
pub use function::{qualified_name, Function, OpenOptions};
pub use invoke::InvokeOutput;
