//! Canonical plugin configuration.
//!
//! A raw `plugins` field is either a list of names or an object of name to
//! options. Both normalize to a [`PluginConfig`]:
//!
//! ```json
//! "plugins": ["markdown", "html"]
//! ```
//!
//! becomes `{ "markdown": true, "html": true }`, while the object form is
//! passed through unchanged.

use crate::config::{PluginDeclaration, RawConfig};
use serde::Serialize;
use serde_json::{Map, Value};

/// Plugin name to `true` or its options, in declaration order.
///
/// `null` stands for a plugin declared without options. Only an explicit
/// `false` disables a plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PluginConfig(Map<String, Value>);

impl PluginConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the declared plugin names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the setting declared for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns `true` if `name` is declared and not set to `false`.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(|v| v != &Value::Bool(false))
    }

    /// Returns the names of enabled plugins.
    #[must_use]
    pub fn enabled_names(&self) -> Vec<&str> {
        self.names().filter(|name| self.is_enabled(name)).collect()
    }

    /// Returns the options object declared for `name`, if any.
    #[must_use]
    pub fn options(&self, name: &str) -> Option<&Map<String, Value>> {
        self.0.get(name).and_then(Value::as_object)
    }

    /// Number of declared plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no plugin is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the configuration, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for PluginConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Returns the plugin names declared in `config`.
///
/// List declarations are returned verbatim, duplicates included. Object
/// declarations yield their keys.
#[must_use]
pub fn plugin_names(config: &RawConfig) -> Vec<String> {
    match &config.plugins {
        None => Vec::new(),
        Some(PluginDeclaration::List(names)) => names.clone(),
        Some(PluginDeclaration::Map(map)) => map.keys().cloned().collect(),
    }
}

/// Returns the canonical plugin configuration declared in `config`.
///
/// Every listed name maps to `true`. Object declarations pass through
/// without validating their options.
#[must_use]
pub fn plugin_config(config: &RawConfig) -> PluginConfig {
    match &config.plugins {
        None => PluginConfig::new(),
        Some(PluginDeclaration::List(names)) => PluginConfig(
            names
                .iter()
                .map(|name| (name.clone(), Value::Bool(true)))
                .collect(),
        ),
        Some(PluginDeclaration::Map(map)) => PluginConfig(map.clone()),
    }
}
