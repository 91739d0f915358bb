//! # textlint-core
//!
//! Configuration core for textlint.
//!
//! This crate turns what a project has installed and what a user wrote in
//! `.textlintrc` into a consistent model. It includes:
//!
//! - [`package_name`] conventions that tell rules, filter rules, and plugins apart
//! - [`scan`] for finding installed rule packages in `package.json`
//! - [`plugin_names`] / [`plugin_config`] for normalizing `plugins` declarations
//! - [`create_config_file`] for generating a default `.textlintrc`
//!
//! ## Example
//!
//! ```ignore
//! use textlint_core::{create_config_file, CreateConfigFileOptions, TracingLogger};
//!
//! let options = CreateConfigFileOptions::new("./my-project").verbose(true);
//! let exit_code = create_config_file(&options, &TracingLogger).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod init;
mod logger;
mod manifest;
mod plugin_config;
mod scanner;

pub mod package_name;

pub use config::{rc_file_name, ConfigError, PluginDeclaration, RawConfig, CONFIG_FILE_NAME};
pub use init::{
    create_config_file, rc_file_path, CreateConfigFileOptions, DefaultRcDocument, InitError,
};
pub use logger::{Logger, MemoryLogger, TracingLogger};
pub use manifest::{DependencyManifest, ManifestError, MANIFEST_FILE_NAME};
pub use package_name::{PackageKind, PackageNamePrefix};
pub use plugin_config::{plugin_config, plugin_names, PluginConfig};
pub use scanner::scan;
