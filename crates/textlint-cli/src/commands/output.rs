//! Shared output formatting.

use anyhow::Result;

use crate::OutputFormat;

/// Print discovered extensions in the specified format.
pub fn print_extensions(extensions: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(extensions),
        OutputFormat::Json => return print_json(extensions),
    }
    Ok(())
}

fn print_text(extensions: &[String]) {
    if extensions.is_empty() {
        println!("No plugin declares a processor.");
        return;
    }
    for extension in extensions {
        println!("{extension}");
    }
}

fn print_json(extensions: &[String]) -> Result<()> {
    let json = serde_json::to_string_pretty(extensions)?;
    println!("{json}");
    Ok(())
}
