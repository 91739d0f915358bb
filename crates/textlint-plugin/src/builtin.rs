//! Built-in plugins: Markdown and plain text.

use crate::plugin::{PluginDescriptor, PluginExport};
use crate::processor::{Capability, Processor};
use crate::registry::ModuleFactory;

/// Package name of the built-in Markdown plugin.
pub const MARKDOWN_PLUGIN: &str = "textlint-plugin-markdown";

/// Package name of the built-in plain text plugin.
pub const TEXT_PLUGIN: &str = "textlint-plugin-text";

/// Markdown processor. Its extensions are known up front.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownProcessor;

impl MarkdownProcessor {
    /// Creates a new Markdown processor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extensions handled by every Markdown processor.
    #[must_use]
    pub fn extensions() -> Vec<String> {
        vec![".md".to_string(), ".markdown".to_string()]
    }
}

impl Processor for MarkdownProcessor {
    fn processor_id(&self) -> &'static str {
        "markdown"
    }

    fn available_extensions(&self) -> Option<Vec<String>> {
        Some(Self::extensions())
    }
}

/// Plain text processor. Reports its extensions once constructed.
#[derive(Debug, Clone)]
pub struct TextProcessor {
    extensions: Vec<String>,
}

impl TextProcessor {
    /// Creates a new plain text processor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extensions: vec![".txt".to_string(), ".text".to_string()],
        }
    }
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for TextProcessor {
    fn processor_id(&self) -> &'static str {
        "text"
    }

    fn available_extensions(&self) -> Option<Vec<String>> {
        Some(self.extensions.clone())
    }
}

fn new_text_processor() -> Box<dyn Processor> {
    Box::new(TextProcessor::new())
}

fn markdown_module() -> PluginExport {
    PluginDescriptor::new(MARKDOWN_PLUGIN)
        .with_capability(Capability::StaticExtensions(MarkdownProcessor::extensions))
        .into()
}

fn text_module() -> PluginExport {
    PluginExport::from(
        PluginDescriptor::new(TEXT_PLUGIN)
            .with_capability(Capability::InstanceExtensions(new_text_processor)),
    )
    .into_default()
}

/// Package names and module factories of the built-in plugins.
pub(crate) fn modules() -> [(&'static str, ModuleFactory); 2] {
    [(MARKDOWN_PLUGIN, markdown_module), (TEXT_PLUGIN, text_module)]
}
