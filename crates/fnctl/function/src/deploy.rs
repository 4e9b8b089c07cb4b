//! Deployment: create, update, or leave alone.
//!
//! ```text
//!   build ──► get_function ──┬── not found ──────────► create + create_alias
//!                            ├── same code hash ─────► (nothing)
//!                            └── different hash ─────► update + update_alias
//! ```
//!
//! The remote's reported code hash is the only state consulted. Nothing is
//! cached between calls and nothing is rolled back when a later step fails.

use std::fmt;

use fnctl_artifact::Artifact;
use fnctl_remote::{AliasRequest, CreateFunctionRequest, UpdateCodeRequest, UpdateConfigRequest};
use fnctl_types::{Version, CURRENT_ALIAS};
use tracing::{debug, info, instrument};

use crate::error::FunctionResult;
use crate::function::Function;

/// What a code deploy did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// The function did not exist and was created at this version.
    Created(Version),
    /// New code was published at this version.
    Updated(Version),
    /// The remote already runs this exact artifact.
    Unchanged,
}

impl DeployOutcome {
    /// The version the alias now points at, when one was published.
    pub fn version(&self) -> Option<&Version> {
        match self {
            Self::Created(v) | Self::Updated(v) => Some(v),
            Self::Unchanged => None,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

impl fmt::Display for DeployOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created(v) => write!(f, "created version {}", v),
            Self::Updated(v) => write!(f, "updated to version {}", v),
            Self::Unchanged => f.write_str("unchanged"),
        }
    }
}

impl Function {
    /// Deploy code, then push configuration.
    ///
    /// Configuration is not pushed when the code deploy fails.
    #[instrument(skip(self), fields(function = %self.name))]
    pub fn deploy(&self) -> FunctionResult<DeployOutcome> {
        info!("deploying");
        let outcome = self.deploy_code()?;
        self.deploy_config()?;
        Ok(outcome)
    }

    /// Build the artifact and publish it if the remote code differs.
    #[instrument(skip(self), fields(function = %self.name))]
    pub fn deploy_code(&self) -> FunctionResult<DeployOutcome> {
        let artifact = self.build()?;

        debug!("fetching config");
        let remote = match self.service.get_function(&self.function_name) {
            Ok(remote) => remote,
            Err(e) if e.is_not_found() => return Ok(DeployOutcome::Created(self.create(&artifact)?)),
            Err(e) => return Err(e.into()),
        };

        debug!(local = artifact.hash(), remote = %remote.code_sha256, "comparing code hashes");
        if remote.code_sha256 == artifact.hash() {
            info!("unchanged");
            return Ok(DeployOutcome::Unchanged);
        }

        Ok(DeployOutcome::Updated(self.update(&artifact)?))
    }

    /// Push memory, timeout, description, role and handler.
    #[instrument(skip(self), fields(function = %self.name))]
    pub fn deploy_config(&self) -> FunctionResult<()> {
        info!("deploying config");
        self.service.update_function_configuration(&UpdateConfigRequest {
            function_name: &self.function_name,
            memory_size: self.config.memory,
            timeout: self.config.timeout,
            description: &self.config.description,
            role: &self.config.role,
            handler: self.runtime.handler(),
        })?;
        Ok(())
    }

    /// Create and publish the function, then point the alias at it.
    pub(crate) fn create(&self, artifact: &Artifact) -> FunctionResult<Version> {
        info!(function = %self.name, "creating function");
        let created = self.service.create_function(&CreateFunctionRequest {
            function_name: &self.function_name,
            description: &self.config.description,
            memory_size: self.config.memory,
            timeout: self.config.timeout,
            runtime: self.runtime.name(),
            handler: self.runtime.handler(),
            role: &self.config.role,
            publish: true,
            zip_file: artifact.as_bytes(),
        })?;

        info!(function = %self.name, version = %created.version, "creating alias");
        self.service.create_alias(&AliasRequest {
            function_name: &self.function_name,
            name: CURRENT_ALIAS,
            function_version: &created.version,
        })?;
        Ok(created.version)
    }

    /// Publish new code, then move the alias to it.
    pub(crate) fn update(&self, artifact: &Artifact) -> FunctionResult<Version> {
        info!(function = %self.name, "updating function");
        let updated = self.service.update_function_code(&UpdateCodeRequest {
            function_name: &self.function_name,
            publish: true,
            zip_file: artifact.as_bytes(),
        })?;

        info!(function = %self.name, version = %updated.version, "updating alias");
        self.service.update_alias(&AliasRequest {
            function_name: &self.function_name,
            name: CURRENT_ALIAS,
            function_version: &updated.version,
        })?;
        Ok(updated.version)
    }
}
