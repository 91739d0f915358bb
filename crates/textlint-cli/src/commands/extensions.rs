//! Extensions command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use textlint_core::plugin_names;
use textlint_plugin::{load_available_extensions, PluginRegistry};

use crate::config_resolver;
use crate::OutputFormat;

/// Prints the file extensions handled by the configured plugins.
pub fn run(dir: &Path, explicit: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = config_resolver::resolve(dir, explicit).load()?;
    let names = plugin_names(&config);
    let registry = PluginRegistry::with_builtins();

    tracing::debug!("Discovering extensions for {} plugin(s)", names.len());

    let extensions = load_available_extensions(&names, &registry, &registry)
        .context("Failed to load plugins")?;

    super::output::print_extensions(&extensions, format)
}
