//! In-process plugin table.
//!
//! [`PluginRegistry`] plays both collaborator roles for plugins linked into
//! the binary: it resolves configured names to registered package names and
//! loads the registered module for a package. Names are resolved the way
//! packages are looked up on disk, trying the `textlint-plugin-` expansion
//! first and the name as written second.

use std::collections::HashMap;

use textlint_core::package_name::{full_package_name, PackageNamePrefix};
use tracing::debug;

use crate::builtin;
use crate::plugin::{PluginDescriptor, PluginExport};
use crate::resolver::{LoadError, ModuleLoader, ModuleResolver, ResolveError};

/// Produces a fresh module export for a registered package.
pub type ModuleFactory = fn() -> PluginExport;

/// Registry of plugins available without touching the file system.
///
/// # Example
///
/// ```
/// use textlint_plugin::{ModuleResolver, PluginRegistry};
///
/// let registry = PluginRegistry::with_builtins();
/// let package = registry.resolve_plugin_package_name("markdown").unwrap();
/// assert_eq!(package, "textlint-plugin-markdown");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    modules: HashMap<String, ModuleFactory>,
    order: Vec<String>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in plugins.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (package, factory) in builtin::modules() {
            if let Err(e) = registry.register(package, factory) {
                debug!("Skipping built-in plugin: {e}");
            }
        }
        registry
    }

    /// Registers a module under its full package name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if `package` is already registered.
    pub fn register(
        &mut self,
        package: impl Into<String>,
        factory: ModuleFactory,
    ) -> Result<(), RegistryError> {
        let package = package.into();
        if self.modules.contains_key(&package) {
            return Err(RegistryError::Duplicate { package });
        }
        self.order.push(package.clone());
        self.modules.insert(package, factory);
        Ok(())
    }

    /// Returns `true` if `package` is registered.
    #[must_use]
    pub fn contains(&self, package: &str) -> bool {
        self.modules.contains_key(package)
    }

    /// Returns registered package names in registration order.
    #[must_use]
    pub fn packages(&self) -> &[String] {
        &self.order
    }

    /// Loads every registered plugin, in registration order.
    #[must_use]
    pub fn descriptors(&self) -> Vec<PluginDescriptor> {
        self.order
            .iter()
            .filter_map(|package| self.modules.get(package))
            .map(|factory| crate::plugin::module_interop(factory()))
            .collect()
    }

    /// Number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` when no plugins are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl ModuleResolver for PluginRegistry {
    fn resolve_plugin_package_name(&self, name: &str) -> Result<String, ResolveError> {
        let mut tried = vec![full_package_name(PackageNamePrefix::PLUGIN, name)];
        if tried[0] != name {
            tried.push(name.to_string());
        }

        match tried.iter().find(|candidate| self.contains(candidate)) {
            Some(package) => {
                debug!("Resolved plugin {name} to {package}");
                Ok(package.clone())
            }
            None => Err(ResolveError::NotInstalled {
                name: name.to_string(),
                tried,
            }),
        }
    }
}

impl ModuleLoader for PluginRegistry {
    fn load(&self, package: &str) -> Result<PluginExport, LoadError> {
        self.modules
            .get(package)
            .map(|factory| factory())
            .ok_or_else(|| LoadError::Module {
                package: package.to_string(),
                message: "not registered".to_string(),
            })
    }
}

/// Registry errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A module with the same package name already exists.
    #[error("plugin '{package}' is already registered")]
    Duplicate {
        /// Package name.
        package: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom() -> PluginExport {
        PluginDescriptor::new("@acme/textlint-plugin-docs").into()
    }

    fn bare() -> PluginExport {
        PluginDescriptor::new("my-plugin").into()
    }

    #[test]
    fn builtins_are_registered() {
        let registry = PluginRegistry::with_builtins();
        assert!(registry.contains("textlint-plugin-markdown"));
        assert!(registry.contains("textlint-plugin-text"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn resolves_bare_and_full_names() {
        let registry = PluginRegistry::with_builtins();
        assert_eq!(
            registry.resolve_plugin_package_name("text").unwrap(),
            "textlint-plugin-text"
        );
        assert_eq!(
            registry
                .resolve_plugin_package_name("textlint-plugin-text")
                .unwrap(),
            "textlint-plugin-text"
        );
    }

    #[test]
    fn resolves_scoped_names() {
        let mut registry = PluginRegistry::new();
        registry
            .register("@acme/textlint-plugin-docs", custom)
            .unwrap();
        assert_eq!(
            registry.resolve_plugin_package_name("@acme/docs").unwrap(),
            "@acme/textlint-plugin-docs"
        );
    }

    #[test]
    fn falls_back_to_name_as_written() {
        let mut registry = PluginRegistry::new();
        registry.register("my-plugin", bare).unwrap();
        assert_eq!(
            registry.resolve_plugin_package_name("my-plugin").unwrap(),
            "my-plugin"
        );
    }

    #[test]
    fn unknown_plugin_reports_candidates() {
        let registry = PluginRegistry::with_builtins();
        let err = registry.resolve_plugin_package_name("html").unwrap_err();
        let ResolveError::NotInstalled { name, tried } = &err;
        assert_eq!(name, "html");
        assert_eq!(tried, &vec!["textlint-plugin-html".to_string(), "html".to_string()]);
        assert!(err.to_string().contains("\"html\" is not found"));
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut registry = PluginRegistry::new();
        registry.register("my-plugin", bare).unwrap();
        let err = registry.register("my-plugin", bare).unwrap_err();
        assert!(err.to_string().contains("already registered"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn load_unregistered_package_fails() {
        let registry = PluginRegistry::new();
        assert!(registry.load("textlint-plugin-html").is_err());
    }

    #[test]
    fn descriptors_follow_registration_order() {
        let registry = PluginRegistry::with_builtins();
        let names: Vec<String> = registry
            .descriptors()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, registry.packages());
    }
}
