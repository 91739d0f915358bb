//! `.textlintrc` generation from installed packages.

use crate::config::rc_file_name;
use crate::logger::Logger;
use crate::package_name::{bare_name, is_filter_rule, is_rule, PackageNamePrefix};
use crate::scanner::scan;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Options for [`create_config_file`].
#[derive(Debug, Clone)]
pub struct CreateConfigFileOptions {
    /// Directory that receives the `.textlintrc`.
    pub dir: PathBuf,
    /// Log a confirmation after writing.
    pub verbose: bool,
}

impl CreateConfigFileOptions {
    /// Creates options for `dir` with verbose output disabled.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            verbose: false,
        }
    }

    /// Enables or disables the confirmation message.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Generated configuration with every installed filter and rule enabled.
///
/// Both sections are name → `true` maps in insertion order. A name that
/// occurs twice keeps its first position and is written once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DefaultRcDocument {
    /// Filter rule names.
    pub filters: Map<String, Value>,
    /// Rule names.
    pub rules: Map<String, Value>,
}

impl DefaultRcDocument {
    /// Builds the document from installed package names.
    ///
    /// A name is placed in `filters` and `rules` independently, so a name
    /// matching both prefixes appears in both.
    #[must_use]
    pub fn from_package_names(names: &[String]) -> Self {
        let filters = enabled(
            names
                .iter()
                .filter(|name| is_filter_rule(name))
                .map(|name| bare_name(PackageNamePrefix::FILTER_RULE, name)),
        );
        let rules = enabled(
            names
                .iter()
                .filter(|name| is_rule(name))
                .map(|name| bare_name(PackageNamePrefix::RULE, name)),
        );
        Self { filters, rules }
    }

    /// Renders the document as JSON with 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn enabled(names: impl Iterator<Item = String>) -> Map<String, Value> {
    let mut map = Map::new();
    for name in names {
        map.insert(name, Value::Bool(true));
    }
    map
}

/// Returns the `.textlintrc` path inside `dir`.
#[must_use]
pub fn rc_file_path(dir: &Path) -> PathBuf {
    dir.join(rc_file_name())
}

/// Creates a `.textlintrc` in `options.dir` enabling every installed rule
/// and filter rule.
///
/// Returns the process exit code: `0` when the file was written, `1` when a
/// `.textlintrc` already exists. An existing file is never overwritten.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized or written.
pub async fn create_config_file(
    options: &CreateConfigFileOptions,
    logger: &dyn Logger,
) -> Result<i32, InitError> {
    let package_names = scan(&options.dir).await;
    let rc_file = rc_file_name();
    let file_path = rc_file_path(&options.dir);

    if is_file(&file_path).await {
        logger.error(&format!("{rc_file} is already existed."));
        return Ok(1);
    }

    let document = DefaultRcDocument::from_package_names(&package_names);
    let output = document.to_json_pretty().map_err(InitError::Serialize)?;
    tokio::fs::write(&file_path, output)
        .await
        .map_err(|e| InitError::Write {
            path: file_path.clone(),
            source: e,
        })?;

    if options.verbose {
        logger.log(&format!("{rc_file} is created."));
    }
    Ok(0)
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .is_ok_and(|metadata| metadata.is_file())
}

/// Errors creating a configuration file.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum InitError {
    /// The document could not be serialized.
    #[error("Failed to serialize config: {0}")]
    #[diagnostic(code(textlint::init::serialize))]
    Serialize(#[source] serde_json::Error),

    /// The file could not be written.
    #[error("Failed to write {path}: {source}")]
    #[diagnostic(code(textlint::init::write))]
    Write {
        /// Target path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}
