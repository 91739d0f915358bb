//! Subcommand implementations.

pub mod extensions;
pub mod init;
pub mod list_plugins;
pub mod output;
