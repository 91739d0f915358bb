//! Discovers installed rule and filter rule packages.

use crate::manifest::DependencyManifest;
use crate::package_name::{is_filter_rule, is_rule, RULE_HELPER_PACKAGE};
use std::path::Path;
use tracing::debug;

/// Returns the names of rule and filter rule packages installed in `dir`.
///
/// Reads `dir/package.json` and merges its `dependencies` and
/// `devDependencies`. A missing or malformed manifest yields an empty list.
/// Names keep the order of the merged manifest.
pub async fn scan(dir: &Path) -> Vec<String> {
    let manifest = match DependencyManifest::read(dir).await {
        Ok(manifest) => manifest,
        Err(e) => {
            debug!("No usable manifest, assuming no dependencies: {e}");
            return Vec::new();
        }
    };

    manifest
        .merged()
        .into_iter()
        .map(|(name, _)| name)
        .filter(|name| name != RULE_HELPER_PACKAGE && (is_filter_rule(name) || is_rule(name)))
        .collect()
}
