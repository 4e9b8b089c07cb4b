//! Built-in runtime adapters.

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::adapter::{BuildHook, CleanHook, Runtime};
use crate::error::{RuntimeError, RuntimeResult};

/// Node.js functions, run natively.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeJs;

impl Runtime for NodeJs {
    fn id(&self) -> &str {
        "nodejs"
    }

    fn name(&self) -> &str {
        "nodejs"
    }

    fn handler(&self) -> &str {
        "index.handle"
    }
}

/// Python functions, run natively.
#[derive(Debug, Clone, Copy, Default)]
pub struct Python;

impl Runtime for Python {
    fn id(&self) -> &str {
        "python"
    }

    fn name(&self) -> &str {
        "python2.7"
    }

    fn handler(&self) -> &str {
        "main.handle"
    }
}

/// Go functions, compiled to a linux binary and run behind the Node.js shim.
#[derive(Debug, Clone, Copy, Default)]
pub struct Golang;

impl Golang {
    /// Name of the binary produced next to `main.go`.
    pub const BINARY: &'static str = "main";
}

impl Runtime for Golang {
    fn id(&self) -> &str {
        "golang"
    }

    fn name(&self) -> &str {
        "nodejs"
    }

    fn handler(&self) -> &str {
        "index.handle"
    }

    fn shimmed(&self) -> bool {
        true
    }

    fn build_hook(&self) -> Option<&dyn BuildHook> {
        Some(self)
    }

    fn clean_hook(&self) -> Option<&dyn CleanHook> {
        Some(self)
    }
}

impl BuildHook for Golang {
    fn build(&self, dir: &Path) -> RuntimeResult<()> {
        debug!(dir = %dir.display(), "go build");
        let output = Command::new("go")
            .args(["build", "-o", Self::BINARY, "main.go"])
            .env("GOOS", "linux")
            .env("GOARCH", "amd64")
            .current_dir(dir)
            .output()
            .map_err(|e| RuntimeError::BuildFailed {
                runtime: self.id().to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(RuntimeError::BuildFailed {
                runtime: self.id().to_string(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl CleanHook for Golang {
    fn clean(&self, dir: &Path) -> RuntimeResult<()> {
        match std::fs::remove_file(dir.join(Self::BINARY)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(RuntimeError::CleanFailed {
                runtime: self.id().to_string(),
                source,
            }),
        }
    }
}
