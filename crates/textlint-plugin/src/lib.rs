//! # textlint-plugin
//!
//! Plugin resolution and processor extension discovery for textlint.
//!
//! This crate builds on `textlint-core` configuration and adds:
//!
//! - [`Processor`] trait and [`Capability`] for how a plugin reports file extensions
//! - [`ModuleResolver`] / [`ModuleLoader`] seams for finding and loading plugins
//! - [`PluginRegistry`] for plugins linked into the binary
//! - [`load_available_extensions`] for collecting extensions across configured plugins
//!
//! ## Example
//!
//! ```
//! use textlint_core::{plugin_names, RawConfig};
//! use textlint_plugin::{load_available_extensions, PluginRegistry};
//!
//! let config = RawConfig::parse(r#"{ "plugins": ["markdown"] }"#).unwrap();
//! let registry = PluginRegistry::with_builtins();
//! let extensions =
//!     load_available_extensions(&plugin_names(&config), &registry, &registry).unwrap();
//! assert_eq!(extensions, vec![".md", ".markdown"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod builtin;
pub mod discover;
pub mod plugin;
pub mod processor;
pub mod registry;
pub mod resolver;

pub use builtin::{MarkdownProcessor, TextProcessor};
pub use discover::{load_available_extensions, processor_extensions, DiscoverError};
pub use plugin::{module_interop, PluginDescriptor, PluginExport};
pub use processor::{Capability, Processor};
pub use registry::{PluginRegistry, RegistryError};
pub use resolver::{LoadError, ModuleLoader, ModuleResolver, ResolveError};
