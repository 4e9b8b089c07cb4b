//! The runtime adapter trait and its optional capability hooks.

use std::path::Path;

use crate::error::RuntimeResult;

/// Compiles a source directory in place before it is packaged.
pub trait BuildHook: Send + Sync {
    fn build(&self, dir: &Path) -> RuntimeResult<()>;
}

/// Removes the outputs a [`BuildHook`] left in the source directory.
pub trait CleanHook: Send + Sync {
    fn clean(&self, dir: &Path) -> RuntimeResult<()>;
}

/// Summary of what an adapter supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub buildable: bool,
    pub cleanable: bool,
    pub shimmed: bool,
}

/// A runtime the remote service can execute.
pub trait Runtime: Send + Sync {
    /// Identifier used in function configuration (`golang`, `nodejs`, ...).
    fn id(&self) -> &str;

    /// Runtime name sent to the remote service.
    fn name(&self) -> &str;

    /// Handler string sent to the remote service.
    fn handler(&self) -> &str;

    /// Whether the bootstrap shim must be injected into the archive.
    fn shimmed(&self) -> bool {
        false
    }

    fn build_hook(&self) -> Option<&dyn BuildHook> {
        None
    }

    fn clean_hook(&self) -> Option<&dyn CleanHook> {
        None
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            buildable: self.build_hook().is_some(),
            cleanable: self.clean_hook().is_some(),
            shimmed: self.shimmed(),
        }
    }
}

impl std::fmt::Debug for dyn Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("id", &self.id())
            .field("name", &self.name())
            .field("handler", &self.handler())
            .field("capabilities", &self.capabilities())
            .finish()
    }
}
