//! Module resolution and loading seams.

use crate::plugin::PluginExport;

/// Turns a plugin name from configuration into an installed package name.
pub trait ModuleResolver {
    /// Resolves `name` (e.g., `"markdown"`) to the package that provides it
    /// (e.g., `"textlint-plugin-markdown"`).
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotInstalled`] if no candidate package is installed.
    fn resolve_plugin_package_name(&self, name: &str) -> Result<String, ResolveError>;
}

/// Loads a resolved package.
pub trait ModuleLoader {
    /// Loads the module for `package`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the package cannot be loaded.
    fn load(&self, package: &str) -> Result<PluginExport, LoadError>;
}

/// Plugin resolution failures.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ResolveError {
    /// No package provides the plugin.
    #[error("Failed to load textlint's plugin module: \"{name}\" is not found (tried: {})", .tried.join(", "))]
    #[diagnostic(
        code(textlint::plugin::not_installed),
        help("install the plugin package or remove it from `plugins`")
    )]
    NotInstalled {
        /// Plugin name as written in configuration.
        name: String,
        /// Package names that were tried.
        tried: Vec<String>,
    },
}

/// Module loading failures.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum LoadError {
    /// The package resolved but has no module to load.
    #[error("Module \"{package}\" could not be loaded: {message}")]
    #[diagnostic(code(textlint::plugin::load))]
    Module {
        /// Package name.
        package: String,
        /// Failure description.
        message: String,
    },
}
