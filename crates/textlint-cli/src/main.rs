//! textlint CLI tool.
//!
//! Usage:
//! ```bash
//! textlint init [DIR]
//! textlint extensions [OPTIONS] [DIR]
//! textlint list-plugins
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Configuration and plugin tooling for textlint
#[derive(Parser)]
#[command(name = "textlint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to .textlintrc
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a .textlintrc enabling every installed rule and filter rule
    Init {
        /// Project directory containing package.json
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Print file extensions handled by the configured plugins
    Extensions {
        /// Project directory to look up .textlintrc in
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List built-in plugins
    ListPlugins,
}

/// Output format for command results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One entry per line.
    #[default]
    Text,
    /// JSON output.
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init { dir } => {
            let code = commands::init::run(&dir, cli.verbose).await?;
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Commands::Extensions { dir, format } => {
            commands::extensions::run(&dir, cli.config.as_deref(), format)
        }
        Commands::ListPlugins => {
            commands::list_plugins::run();
            Ok(())
        }
    }
}
