//! `.textlintrc` lookup.
//!
//! Priority order:
//!
//! 1. `--config` flag
//! 2. `{dir}/.textlintrc`, then `{dir}/.textlintrc.json`
//! 3. `config.json` in the global directory (`$TEXTLINT_CONFIG_DIR` or `~/.textlint/`)
//! 4. Nothing found → empty configuration

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use textlint_core::{rc_file_name, RawConfig};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Loads the raw configuration. [`ConfigSource::Default`] loads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self) -> Result<RawConfig> {
        let Some(path) = self.path() else {
            tracing::debug!("No {} found, using empty configuration", rc_file_name());
            return Ok(RawConfig::new());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }
        RawConfig::from_file(path).with_context(|| format!("Failed to load {}", path.display()))
    }
}

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.json";

fn project_candidates(dir: &Path) -> [PathBuf; 2] {
    let rc = rc_file_name();
    [dir.join(&rc), dir.join(format!("{rc}.json"))]
}

/// Resolves the configuration for `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with_global(project_dir, explicit, global_config_dir().as_deref())
}

/// Same as [`resolve`] with the global directory passed in, so tests need no env vars.
fn resolve_with_global(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<&Path>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = project_candidates(project_dir)
        .into_iter()
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

/// Returns the global config directory: `$TEXTLINT_CONFIG_DIR` or `~/.textlint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os("TEXTLINT_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".textlint")))
}
