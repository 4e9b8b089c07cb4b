//! Published versions and the `current` alias.

use serde::{Deserialize, Serialize};

/// Name of the alias every deploy and rollback repoints.
pub const CURRENT_ALIAS: &str = "current";

/// Identifier of a published function snapshot.
///
/// The remote service also reports a mutable `$LATEST` pseudo-version at the
/// head of every listing; it is never a rollback target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(pub String);

impl Version {
    /// The mutable sentinel version.
    pub const LATEST: &'static str = "$LATEST";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the `$LATEST` sentinel.
    pub fn is_latest(&self) -> bool {
        self.0 == Self::LATEST
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Version {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Version {
    fn from(id: String) -> Self {
        Self(id)
    }
}
