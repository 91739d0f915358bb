//! List plugins command implementation.

use textlint_core::package_name::{bare_name, PackageNamePrefix};
use textlint_plugin::{processor_extensions, Capability, PluginRegistry};

/// Runs the list-plugins command.
pub fn run() {
    let registry = PluginRegistry::with_builtins();

    println!("Available plugins:\n");
    println!("{:<12} {:<28} {:<10} Extensions", "Name", "Package", "Processor");
    println!("{}", "-".repeat(72));

    for plugin in registry.descriptors() {
        let capability = plugin.capability();
        println!(
            "{:<12} {:<28} {:<10} {}",
            bare_name(PackageNamePrefix::PLUGIN, plugin.name()),
            plugin.name(),
            capability.label(),
            extensions_column(plugin.name(), capability)
        );
    }

    println!("\nEnable plugins in .textlintrc, e.g.:");
    println!("  {{ \"plugins\": [\"markdown\"] }}");
}

fn extensions_column(plugin_name: &str, capability: Capability) -> String {
    match processor_extensions(plugin_name, capability) {
        Ok(extensions) => extensions.unwrap_or_default().join(", "),
        Err(e) => {
            tracing::warn!("{e}");
            "contract violation".to_string()
        }
    }
}
