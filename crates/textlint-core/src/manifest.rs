//! `package.json` dependency manifest.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// File name of the dependency manifest inside a project directory.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Dependency sections of a `package.json`.
///
/// Only `dependencies` and `devDependencies` are kept. Both preserve the key
/// order of the document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DependencyManifest {
    /// Runtime dependencies (`name -> version`).
    #[serde(default, deserialize_with = "nullable_map")]
    pub dependencies: Map<String, Value>,

    /// Development dependencies (`name -> version`).
    #[serde(rename = "devDependencies", default, deserialize_with = "nullable_map")]
    pub dev_dependencies: Map<String, Value>,
}

fn nullable_map<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl DependencyManifest {
    /// Reads `package.json` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid manifest.
    pub async fn read(dir: &Path) -> Result<Self, ManifestError> {
        let path = dir.join(MANIFEST_FILE_NAME);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ManifestError::Io {
                path: path.clone(),
                source: e,
            })?;
        Self::parse(&content).map_err(|e| match e {
            ManifestError::Parse { message, .. } => ManifestError::Parse { path, message },
            other => other,
        })
    }

    /// Parses a manifest from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or the dependency sections
    /// are not objects.
    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(content).map_err(|e| ManifestError::Parse {
            path: PathBuf::from(MANIFEST_FILE_NAME),
            message: e.to_string(),
        })
    }

    /// Merges both sections, `devDependencies` over `dependencies`.
    ///
    /// A name present in both sections keeps its position from
    /// `dependencies` and takes its version from `devDependencies`.
    #[must_use]
    pub fn merged(&self) -> Map<String, Value> {
        let mut merged = self.dependencies.clone();
        for (name, version) in &self.dev_dependencies {
            merged.insert(name.clone(), version.clone());
        }
        merged
    }

    /// Returns the merged version string declared for `name`.
    #[must_use]
    pub fn version(&self, name: &str) -> Option<&str> {
        self.dev_dependencies
            .get(name)
            .or_else(|| self.dependencies.get(name))
            .and_then(Value::as_str)
    }
}

/// Errors reading a dependency manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// IO error reading the manifest.
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The manifest is not valid JSON or has malformed sections.
    #[error("Failed to parse manifest {path}: {message}")]
    Parse {
        /// Path of the manifest.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },
}
