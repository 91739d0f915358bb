//! Plugin descriptors and the shapes loaded modules export them in.

use crate::processor::Capability;

/// What textlint knows about a loaded plugin.
#[derive(Debug, Clone)]
pub struct PluginDescriptor {
    name: String,
    capability: Capability,
}

impl PluginDescriptor {
    /// Creates a descriptor for a plugin without a processor.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capability: Capability::NoProcessor,
        }
    }

    /// Sets the processor capability.
    #[must_use]
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capability = capability;
        self
    }

    /// Package name of the plugin.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Processor capability of the plugin.
    #[must_use]
    pub fn capability(&self) -> Capability {
        self.capability
    }
}

/// A module as returned by a [`crate::ModuleLoader`].
///
/// Some modules export the plugin directly, others wrap it in a `default`
/// export, possibly more than once.
#[derive(Debug, Clone)]
pub enum PluginExport {
    /// The module is the plugin.
    Descriptor(PluginDescriptor),
    /// The plugin sits behind a `default` export.
    Default(Box<PluginExport>),
}

impl PluginExport {
    /// Wraps `self` in a `default` export.
    #[must_use]
    pub fn into_default(self) -> Self {
        Self::Default(Box::new(self))
    }
}

impl From<PluginDescriptor> for PluginExport {
    fn from(descriptor: PluginDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}

/// Unwraps `default` exports down to the plugin descriptor.
#[must_use]
pub fn module_interop(export: PluginExport) -> PluginDescriptor {
    let mut current = export;
    loop {
        match current {
            PluginExport::Descriptor(descriptor) => return descriptor,
            PluginExport::Default(inner) => current = *inner,
        }
    }
}
