//! Archive assembly.

use std::collections::HashSet;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use fnctl_runtime::Runtime;
use fnctl_types::Environment;
use tracing::{debug, warn};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::artifact::Artifact;
use crate::error::{ArtifactError, ArtifactResult};
use crate::shim::{self, SHIM_ENTRIES};

/// Archive entry holding the serialized environment.
pub const ENV_ENTRY: &str = ".env.json";

const FILE_MODE: u32 = 0o644;
const EXEC_MODE: u32 = 0o755;

/// Builds artifacts for one runtime.
pub struct ArtifactBuilder<'a> {
    runtime: &'a dyn Runtime,
}

impl<'a> ArtifactBuilder<'a> {
    pub fn new(runtime: &'a dyn Runtime) -> Self {
        Self { runtime }
    }

    /// Package `source_dir` into a zip archive.
    ///
    /// Compiled runtimes are built first and a failure aborts before any
    /// archive bytes exist. Source files whose path collides with an
    /// injected entry are skipped in favour of the injected one.
    pub fn build(&self, source_dir: &Path, env: &Environment) -> ArtifactResult<Artifact> {
        if let Some(hook) = self.runtime.build_hook() {
            debug!(runtime = self.runtime.id(), "compiling");
            hook.build(source_dir).map_err(ArtifactError::Build)?;
        }

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let mut injected = HashSet::new();

        if !env.is_empty() {
            debug!(vars = env.len(), "adding {}", ENV_ENTRY);
            write_entry(&mut zip, ENV_ENTRY, &env.to_json()?, FILE_MODE)?;
            injected.insert(ENV_ENTRY.to_string());
        }

        if self.runtime.shimmed() {
            debug!(runtime = self.runtime.id(), "adding shim");
            for name in SHIM_ENTRIES {
                write_entry(&mut zip, name, &shim::asset(name)?, FILE_MODE)?;
                injected.insert(name.to_string());
            }
        }

        for (name, path) in source_files(source_dir)? {
            if injected.contains(&name) {
                warn!(entry = %name, "source file shadowed by generated entry");
                continue;
            }
            let data = std::fs::read(&path).map_err(|source| ArtifactError::Io {
                path: path.clone(),
                source,
            })?;
            write_entry(&mut zip, &name, &data, file_mode(&path)?)?;
        }

        let bytes = zip.finish()?.into_inner();
        Ok(Artifact::from_bytes(bytes))
    }

    /// Remove build outputs; a no-op for runtimes without a clean hook.
    pub fn clean(&self, source_dir: &Path) -> ArtifactResult<()> {
        match self.runtime.clean_hook() {
            Some(hook) => hook.clean(source_dir).map_err(ArtifactError::Clean),
            None => Ok(()),
        }
    }
}

fn write_entry(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    name: &str,
    data: &[u8],
    mode: u32,
) -> ArtifactResult<()> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(mode);
    zip.start_file(name, options)?;
    zip.write_all(data).map_err(|e| ArtifactError::Archive(e.into()))?;
    Ok(())
}

/// Regular files under `root` as (archive name, path), sorted by name.
///
/// Symlinks are followed and archived under the link's own path. Files
/// whose path is not valid UTF-8 are skipped.
fn source_files(root: &Path) -> ArtifactResult<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let Some(parts) = relative
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()
        else {
            warn!(path = %entry.path().display(), "skipping file with non UTF-8 name");
            continue;
        };
        files.push((parts.join("/"), entry.into_path()));
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

#[cfg(unix)]
fn file_mode(path: &Path) -> ArtifactResult<u32> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(if metadata.permissions().mode() & 0o111 != 0 {
        EXEC_MODE
    } else {
        FILE_MODE
    })
}

#[cfg(not(unix))]
fn file_mode(_path: &Path) -> ArtifactResult<u32> {
    Ok(FILE_MODE)
}
