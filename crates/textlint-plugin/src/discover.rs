//! File extension discovery across configured plugins.

use tracing::debug;

use crate::plugin::module_interop;
use crate::processor::Capability;
use crate::resolver::{LoadError, ModuleLoader, ModuleResolver, ResolveError};

/// Collects the file extensions claimed by the processors of `plugin_names`.
///
/// Plugins are visited in order. Plugins without a processor contribute
/// nothing. Extensions are appended as reported, without deduplication.
///
/// # Errors
///
/// Fails on the first plugin that cannot be resolved or loaded, or whose
/// processor does not report its extensions. No partial list is returned.
pub fn load_available_extensions<R, L>(
    plugin_names: &[String],
    resolver: &R,
    loader: &L,
) -> Result<Vec<String>, DiscoverError>
where
    R: ModuleResolver + ?Sized,
    L: ModuleLoader + ?Sized,
{
    let mut available_extensions = Vec::new();

    for plugin_name in plugin_names {
        let package = resolver.resolve_plugin_package_name(plugin_name)?;
        let plugin = module_interop(loader.load(&package)?);

        if let Some(extensions) = processor_extensions(plugin_name, plugin.capability())? {
            available_extensions.extend(extensions);
        }
    }

    Ok(available_extensions)
}

/// Asks one plugin's processor for its extensions.
///
/// Returns `Ok(None)` when the plugin has no processor.
///
/// # Errors
///
/// Returns [`DiscoverError::ContractViolation`] when a processor instance
/// does not report its extensions.
pub fn processor_extensions(
    plugin_name: &str,
    capability: Capability,
) -> Result<Option<Vec<String>>, DiscoverError> {
    match capability {
        Capability::NoProcessor => Ok(None),
        Capability::StaticExtensions(extensions) => {
            debug!("{plugin_name} has Processor");
            Ok(Some(extensions()))
        }
        Capability::InstanceExtensions(create) => {
            debug!("{plugin_name} has Processor");
            create()
                .available_extensions()
                .map(Some)
                .ok_or_else(|| DiscoverError::ContractViolation {
                    plugin: plugin_name.to_string(),
                })
        }
    }
}

/// Errors during extension discovery.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum DiscoverError {
    /// A configured plugin is not installed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),

    /// A resolved plugin could not be loaded.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    /// The plugin has a processor that does not report its extensions.
    #[error("Processor.availableExtensions() should be implemented (plugin: {plugin})")]
    #[diagnostic(
        code(textlint::plugin::contract),
        help("the plugin is broken; report it to its author")
    )]
    ContractViolation {
        /// Plugin name as written in configuration.
        plugin: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::{PluginDescriptor, PluginExport};
    use crate::processor::Processor;
    use crate::registry::PluginRegistry;

    struct Broken;

    impl Processor for Broken {
        fn processor_id(&self) -> &'static str {
            "broken"
        }

        fn available_extensions(&self) -> Option<Vec<String>> {
            None
        }
    }

    fn md_only() -> Vec<String> {
        vec![".md".to_string()]
    }

    fn md_a() -> PluginExport {
        PluginDescriptor::new("textlint-plugin-md-a")
            .with_capability(Capability::StaticExtensions(md_only))
            .into()
    }

    fn md_b() -> PluginExport {
        PluginDescriptor::new("textlint-plugin-md-b")
            .with_capability(Capability::StaticExtensions(md_only))
            .into()
    }

    fn rules_only() -> PluginExport {
        PluginDescriptor::new("textlint-plugin-rules-only").into()
    }

    fn broken() -> PluginExport {
        PluginDescriptor::new("textlint-plugin-broken")
            .with_capability(Capability::InstanceExtensions(|| -> Box<dyn Processor> {
                Box::new(Broken)
            }))
            .into()
    }

    fn registry() -> PluginRegistry {
        let mut registry = PluginRegistry::with_builtins();
        registry.register("textlint-plugin-md-a", md_a).unwrap();
        registry.register("textlint-plugin-md-b", md_b).unwrap();
        registry
            .register("textlint-plugin-rules-only", rules_only)
            .unwrap();
        registry.register("textlint-plugin-broken", broken).unwrap();
        registry
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn discover(list: &[&str]) -> Result<Vec<String>, DiscoverError> {
        let registry = registry();
        load_available_extensions(&names(list), &registry, &registry)
    }

    #[test]
    fn static_and_instance_extensions_in_order() {
        let extensions = discover(&["text", "markdown"]).unwrap();
        assert_eq!(extensions, vec![".txt", ".text", ".md", ".markdown"]);
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(discover(&["md-a", "md-b"]).unwrap(), vec![".md", ".md"]);
    }

    #[test]
    fn plugins_without_processor_are_skipped() {
        assert_eq!(
            discover(&["rules-only", "md-a"]).unwrap(),
            vec![".md"]
        );
    }

    #[test]
    fn no_plugins_no_extensions() {
        assert!(discover(&[]).unwrap().is_empty());
    }

    #[test]
    fn unresolved_plugin_aborts() {
        let err = discover(&["markdown", "html"]).unwrap_err();
        assert!(matches!(err, DiscoverError::Resolve(_)));
    }

    #[test]
    fn contract_violation_aborts() {
        let err = discover(&["markdown", "broken", "text"]).unwrap_err();
        let DiscoverError::ContractViolation { plugin } = &err else {
            panic!("expected contract violation, got {err:?}");
        };
        assert_eq!(plugin, "broken");
    }

    #[test]
    fn single_capability_lookup() {
        assert_eq!(
            processor_extensions("md-a", Capability::StaticExtensions(md_only)).unwrap(),
            Some(vec![".md".to_string()])
        );
        assert_eq!(
            processor_extensions("rules-only", Capability::NoProcessor).unwrap(),
            None
        );

        let plugin = module_interop(broken());
        let err = processor_extensions("broken", plugin.capability()).unwrap_err();
        assert!(matches!(
            err,
            DiscoverError::ContractViolation { ref plugin } if plugin == "broken"
        ));
    }

    #[test]
    fn works_through_trait_objects() {
        let registry = registry();
        let resolver: &dyn ModuleResolver = &registry;
        let loader: &dyn ModuleLoader = &registry;
        let extensions = load_available_extensions(&names(&["markdown"]), resolver, loader)
            .unwrap();
        assert_eq!(extensions, vec![".md", ".markdown"]);
    }
}
