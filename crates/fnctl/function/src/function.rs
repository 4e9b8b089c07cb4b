//! The function handle.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fnctl_artifact::{Artifact, ArtifactBuilder};
use fnctl_remote::{FunctionInfo, FunctionService};
use fnctl_runtime::{Runtime, RuntimeRegistry};
use fnctl_types::{Environment, FunctionConfig, ValidationError};
use indicatif::HumanBytes;
use tracing::{debug, info, instrument};

use crate::config::{self, FunctionDefaults};
use crate::error::{FunctionError, FunctionResult};

/// Remote name for `function` inside `project`.
pub fn qualified_name(project: &str, function: &str) -> String {
    format!("{}_{}", project, function)
}

/// Everything needed to open a function directory.
#[derive(Debug, Clone)]
pub struct OpenOptions {
    /// Local name, used in logs.
    pub name: String,
    /// Name of the function on the remote service; defaults to `name`.
    pub function_name: Option<String>,
    /// Source directory.
    pub path: PathBuf,
    pub defaults: FunctionDefaults,
    /// Variables bundled into every artifact built for this function.
    pub environment: Environment,
    pub runtimes: RuntimeRegistry,
}

impl OpenOptions {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            function_name: None,
            path: path.into(),
            defaults: FunctionDefaults::default(),
            environment: Environment::new(),
            runtimes: RuntimeRegistry::builtin(),
        }
    }

    pub fn with_function_name(mut self, function_name: impl Into<String>) -> Self {
        self.function_name = Some(function_name.into());
        self
    }

    pub fn with_defaults(mut self, defaults: FunctionDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_runtimes(mut self, runtimes: RuntimeRegistry) -> Self {
        self.runtimes = runtimes;
        self
    }
}

/// A function directory bound to its remote counterpart.
///
/// Configuration, runtime and environment are fixed when the function is
/// opened. Remote state is never cached; every operation reads what it
/// needs from the service.
pub struct Function {
    pub(crate) name: String,
    pub(crate) function_name: String,
    pub(crate) path: PathBuf,
    pub(crate) config: FunctionConfig,
    pub(crate) environment: Environment,
    pub(crate) runtime: Arc<dyn Runtime>,
    pub(crate) service: Arc<dyn FunctionService>,
}

impl Function {
    /// Load, merge and validate the configuration for `options.path`.
    ///
    /// An unset runtime is detected from the directory layout.
    pub fn open(options: OpenOptions, service: Arc<dyn FunctionService>) -> FunctionResult<Self> {
        let OpenOptions {
            name,
            function_name,
            path,
            defaults,
            environment,
            runtimes,
        } = options;

        let mut config = config::load(&path, &defaults)?;

        if config.runtime.trim().is_empty() {
            if let Ok(id) = fnctl_runtime::detect(&path) {
                debug!(function = %name, runtime = id, "detected runtime");
                config.runtime = id.to_string();
            }
        }

        let invalid = |source| FunctionError::Validation {
            function: name.clone(),
            source,
        };

        config.validate().map_err(invalid)?;
        let runtime = runtimes
            .resolve(&config.runtime)
            .map_err(|_| invalid(ValidationError::UnknownRuntime(config.runtime.clone())))?;

        Ok(Self {
            function_name: function_name.unwrap_or_else(|| name.clone()),
            name,
            path,
            config,
            environment,
            runtime,
            service,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &FunctionConfig {
        &self.config
    }

    pub fn runtime(&self) -> &dyn Runtime {
        self.runtime.as_ref()
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Package the function directory.
    #[instrument(skip(self), fields(function = %self.name))]
    pub fn build(&self) -> FunctionResult<Artifact> {
        debug!("creating archive");
        let artifact =
            ArtifactBuilder::new(self.runtime.as_ref()).build(&self.path, &self.environment)?;
        info!(
            hash = artifact.hash(),
            "created archive ({})",
            HumanBytes(artifact.len() as u64)
        );
        Ok(artifact)
    }

    /// Remove build outputs left by compiled runtimes.
    #[instrument(skip(self), fields(function = %self.name))]
    pub fn clean(&self) -> FunctionResult<()> {
        ArtifactBuilder::new(self.runtime.as_ref()).clean(&self.path)?;
        Ok(())
    }

    /// Fetch the remote view of the function.
    #[instrument(skip(self), fields(function = %self.name))]
    pub fn info(&self) -> FunctionResult<FunctionInfo> {
        debug!("fetching config");
        Ok(self.service.get_function(&self.function_name)?)
    }

    /// Delete the function and all of its versions.
    #[instrument(skip(self), fields(function = %self.name))]
    pub fn delete(&self) -> FunctionResult<()> {
        info!("deleting");
        self.service.delete_function(&self.function_name)?;
        Ok(())
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("function_name", &self.function_name)
            .field("path", &self.path)
            .field("config", &self.config)
            .field("runtime", &self.runtime.id())
            .field("service", &self.service.name())
            .finish()
    }
}
