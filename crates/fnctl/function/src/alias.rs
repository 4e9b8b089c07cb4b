//! The `current` alias and rollback.

use fnctl_remote::{AliasRequest, VersionInfo};
use fnctl_types::{Version, CURRENT_ALIAS};
use tracing::{info, instrument};

use crate::error::{FunctionResult, RollbackPrecondition};
use crate::function::Function;

/// Pick the version a plain rollback moves to.
///
/// Only the two newest published versions are considered: the newest one,
/// or the one before it when the alias already points at the newest. A
/// leading `$LATEST` entry is skipped.
pub fn select_rollback_target(
    current: &Version,
    versions: &[VersionInfo],
) -> Result<Version, RollbackPrecondition> {
    let published = match versions.split_first() {
        Some((head, rest)) if head.version.is_latest() => rest,
        _ => versions,
    };

    match published {
        [.., prev, latest] => {
            if &latest.version == current {
                Ok(prev.version.clone())
            } else {
                Ok(latest.version.clone())
            }
        }
        _ => Err(RollbackPrecondition::OnlyOneVersion),
    }
}

impl Function {
    /// The version the `current` alias points at.
    #[instrument(skip(self), fields(function = %self.name))]
    pub fn current_version(&self) -> FunctionResult<Version> {
        let alias = self.service.get_alias(&self.function_name, CURRENT_ALIAS)?;
        Ok(alias.function_version)
    }

    /// Move the alias to the previous version, or forward to the newest.
    #[instrument(skip(self), fields(function = %self.name))]
    pub fn rollback(&self) -> FunctionResult<Version> {
        info!("rolling back");

        let current = self.current_version()?;
        info!(version = %current, "current version");

        let versions = self.service.list_versions(&self.function_name)?;
        let target = select_rollback_target(&current, &versions)?;

        info!(version = %target, "rollback to version");
        self.point_alias(&target)?;
        Ok(target)
    }

    /// Move the alias to `version`.
    ///
    /// The version is not looked up first; the remote rejects unknown ones.
    #[instrument(skip(self), fields(function = %self.name))]
    pub fn rollback_version(&self, version: &Version) -> FunctionResult<()> {
        info!("rolling back");

        let current = self.current_version()?;
        info!(version = %current, "current version");

        if &current == version {
            return Err(RollbackPrecondition::AlreadyDeployed(current).into());
        }

        info!(%version, "rollback to version");
        self.point_alias(version)
    }

    fn point_alias(&self, version: &Version) -> FunctionResult<()> {
        self.service.update_alias(&AliasRequest {
            function_name: &self.function_name,
            name: CURRENT_ALIAS,
            function_version: version,
        })?;
        Ok(())
    }
}
