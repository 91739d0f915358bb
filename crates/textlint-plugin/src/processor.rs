//! Processor capability of a plugin.
//!
//! A processor teaches textlint to read a file type. What matters for
//! configuration is the set of file extensions it claims. A processor can
//! report them without being constructed ([`Capability::StaticExtensions`])
//! or only from an instance ([`Capability::InstanceExtensions`]).

use std::fmt;

/// A constructed processor.
pub trait Processor: Send + Sync {
    /// Processor identifier (e.g., `"markdown"`).
    fn processor_id(&self) -> &'static str;

    /// File extensions this processor handles (e.g., `[".md", ".markdown"]`).
    ///
    /// `None` means the processor does not declare any, which breaks the
    /// plugin contract.
    fn available_extensions(&self) -> Option<Vec<String>>;
}

/// Lists extensions without constructing a processor.
pub type ExtensionsFn = fn() -> Vec<String>;

/// Constructs a processor.
pub type ProcessorFactory = fn() -> Box<dyn Processor>;

/// How a plugin exposes file extensions. Decided once, when the plugin is loaded.
#[derive(Clone, Copy)]
pub enum Capability {
    /// The plugin has no processor.
    NoProcessor,
    /// Extensions are known without constructing the processor.
    StaticExtensions(ExtensionsFn),
    /// Extensions are only known from a processor instance.
    InstanceExtensions(ProcessorFactory),
}

impl Capability {
    /// Returns `true` unless this is [`Capability::NoProcessor`].
    #[must_use]
    pub fn has_processor(&self) -> bool {
        !matches!(self, Self::NoProcessor)
    }

    /// Short label used in listings.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoProcessor => "none",
            Self::StaticExtensions(_) => "static",
            Self::InstanceExtensions(_) => "instance",
        }
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Capability::{}", self.label())
    }
}
