//! Init command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use textlint_core::{create_config_file, CreateConfigFileOptions, TracingLogger};

/// Runs the init command, returning the process exit code.
pub async fn run(dir: &Path, verbose: bool) -> Result<i32> {
    let options = CreateConfigFileOptions::new(dir).verbose(verbose);
    let code = create_config_file(&options, &TracingLogger)
        .await
        .with_context(|| format!("Failed to initialize {}", dir.display()))?;

    if code == 0 {
        println!("\nNext steps:");
        println!("  1. Edit .textlintrc to configure rules and plugins");
        println!("  2. Run: textlint extensions");
    }

    Ok(code)
}
