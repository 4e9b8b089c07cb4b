//! Lookup of runtime adapters by identifier.

use std::collections::HashMap;
use std::sync::Arc;

use crate::adapter::Runtime;
use crate::builtin::{Golang, NodeJs, Python};
use crate::error::{RuntimeError, RuntimeResult};

/// Runtime adapters keyed by their configuration identifier.
#[derive(Clone)]
pub struct RuntimeRegistry {
    runtimes: HashMap<String, Arc<dyn Runtime>>,
}

impl RuntimeRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self {
            runtimes: HashMap::new(),
        }
    }

    /// A registry holding the built-in adapters.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(NodeJs));
        registry.register(Arc::new(Python));
        registry.register(Arc::new(Golang));
        registry
    }

    /// Register an adapter, replacing any previous one with the same id.
    pub fn register(&mut self, runtime: Arc<dyn Runtime>) {
        self.runtimes.insert(runtime.id().to_string(), runtime);
    }

    pub fn resolve(&self, id: &str) -> RuntimeResult<Arc<dyn Runtime>> {
        self.runtimes
            .get(id)
            .cloned()
            .ok_or_else(|| RuntimeError::Unrecognized(id.to_string()))
    }

    /// Registered identifiers, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.runtimes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for RuntimeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for RuntimeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeRegistry")
            .field("runtimes", &self.ids())
            .finish()
    }
}
