//! Raw `.textlintrc` configuration as written by users.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Base name of the configuration file. The rc file is `.textlintrc`.
pub const CONFIG_FILE_NAME: &str = "textlint";

/// Returns the rc file name, `.textlintrc`.
#[must_use]
pub fn rc_file_name() -> String {
    format!(".{CONFIG_FILE_NAME}rc")
}

/// The `plugins` field of a raw configuration.
///
/// Users may list plugin names or map each name to its options. Both shapes
/// are accepted here and nowhere else; see [`crate::plugin_config`] for the
/// canonical form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PluginDeclaration {
    /// `"plugins": ["markdown", "html"]`
    List(Vec<String>),
    /// `"plugins": { "markdown": {}, "html": true }`
    Map(Map<String, Value>),
}

/// Loaded but not yet interpreted configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// Plugin declaration. Falsy values (`null`, `false`, `0`, `""`) count as absent.
    #[serde(default, deserialize_with = "plugin_declaration")]
    pub plugins: Option<PluginDeclaration>,

    /// Rule settings, kept as written.
    #[serde(default)]
    pub rules: Map<String, Value>,

    /// Filter rule settings, kept as written.
    #[serde(default)]
    pub filters: Map<String, Value>,
}

impl RawConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a JSON rc file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or `plugins` has an
    /// unsupported shape.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Sets the plugin declaration.
    #[must_use]
    pub fn with_plugins(mut self, plugins: PluginDeclaration) -> Self {
        self.plugins = Some(plugins);
        self
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn plugin_declaration<'de, D>(deserializer: D) -> Result<Option<PluginDeclaration>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = Value::deserialize(deserializer)?;
    if is_falsy(&value) {
        return Ok(None);
    }
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(name) => Ok(name),
                other => Err(D::Error::custom(format!(
                    "plugin names must be strings, found `{other}`"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|names| Some(PluginDeclaration::List(names))),
        Value::Object(map) => Ok(Some(PluginDeclaration::Map(map))),
        other => Err(D::Error::custom(format!(
            "`plugins` must be an array or an object, found `{other}`"
        ))),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(textlint::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(
        code(textlint::config::parse),
        help("`plugins` accepts a list of names or an object of name to options")
    )]
    Parse {
        /// Parse error message.
        message: String,
    },
}
