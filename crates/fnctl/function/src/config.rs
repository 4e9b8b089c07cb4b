//! Loading a function's configuration from disk.
//!
//! Sources are layered: caller-supplied [`FunctionDefaults`] first, then the
//! optional `function.json` in the function directory. A missing file is
//! fine; a malformed one is an error.

use std::path::Path;

use fnctl_types::FunctionConfig;
use serde::{Deserialize, Serialize};

use crate::error::FunctionResult;

/// Name of the per-function configuration file.
pub const CONFIG_FILE: &str = "function.json";

/// Project-level defaults applied beneath `function.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefaults {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub runtime: String,

    #[serde(default = "default_memory")]
    pub memory: i64,

    #[serde(default = "default_timeout")]
    pub timeout: i64,

    #[serde(default)]
    pub role: String,
}

impl Default for FunctionDefaults {
    fn default() -> Self {
        Self {
            description: String::new(),
            runtime: String::new(),
            memory: default_memory(),
            timeout: default_timeout(),
            role: String::new(),
        }
    }
}

impl FunctionDefaults {
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }
}

fn default_memory() -> i64 {
    128
}

fn default_timeout() -> i64 {
    5
}

/// Merge `defaults` with `<dir>/function.json`.
///
/// The result is not validated and may still lack a runtime.
pub fn load(dir: &Path, defaults: &FunctionDefaults) -> FunctionResult<FunctionConfig> {
    let settings = config::Config::builder()
        .add_source(config::Config::try_from(defaults)?)
        .add_source(
            config::File::from(dir.join(CONFIG_FILE))
                .format(config::FileFormat::Json)
                .required(false),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
