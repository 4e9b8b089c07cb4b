//! Runtime detection from a source directory layout.

use std::path::Path;

use crate::error::{RuntimeError, RuntimeResult};

/// Marker files checked in order; the first present one wins.
const MARKERS: &[(&str, &str)] = &[
    ("main.go", "golang"),
    ("main.py", "python"),
    ("index.js", "nodejs"),
];

/// Detect the runtime identifier for the function rooted at `dir`.
pub fn detect(dir: &Path) -> RuntimeResult<&'static str> {
    MARKERS
        .iter()
        .find(|(marker, _)| dir.join(marker).is_file())
        .map(|(_, id)| *id)
        .ok_or_else(|| RuntimeError::Undetected(dir.to_path_buf()))
}
