//! Bootstrap scripts injected for shimmed runtimes.

use std::borrow::Cow;

use rust_embed::RustEmbed;

use crate::error::{ArtifactError, ArtifactResult};

/// Archive-root entries added for shimmed runtimes, in archive order.
pub const SHIM_ENTRIES: [&str; 2] = ["index.js", "byline.js"];

#[derive(RustEmbed)]
#[folder = "shim/"]
struct ShimAssets;

/// Contents of the shim script `name`.
pub fn asset(name: &'static str) -> ArtifactResult<Cow<'static, [u8]>> {
    ShimAssets::get(name)
        .map(|file| file.data)
        .ok_or(ArtifactError::MissingShimAsset(name))
}
