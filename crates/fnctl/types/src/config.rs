//! Function configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// Configuration of a single remote function.
///
/// Built from declarative config merged with the detected runtime, checked
/// once with [`FunctionConfig::validate`] when a function is opened, and
/// treated as immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionConfig {
    /// Free-form description pushed to the remote configuration.
    #[serde(default)]
    pub description: String,

    /// Runtime identifier, e.g. `nodejs` or `golang`.
    #[serde(default)]
    pub runtime: String,

    /// Memory size in megabytes.
    #[serde(default)]
    pub memory: i64,

    /// Timeout in seconds.
    #[serde(default)]
    pub timeout: i64,

    /// Execution role identifier.
    #[serde(default)]
    pub role: String,
}

impl FunctionConfig {
    /// Check the field-level invariants.
    ///
    /// Whether `runtime` resolves to a known adapter is checked by the caller
    /// holding the runtime registry.
    pub fn validate(&self) -> ValidationResult<()> {
        if self.runtime.trim().is_empty() {
            return Err(ValidationError::MissingRuntime);
        }
        if self.memory <= 0 {
            return Err(ValidationError::InvalidMemory(self.memory));
        }
        if self.timeout <= 0 {
            return Err(ValidationError::InvalidTimeout(self.timeout));
        }
        if self.role.trim().is_empty() {
            return Err(ValidationError::MissingRole);
        }
        Ok(())
    }
}
