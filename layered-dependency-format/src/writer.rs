//! Column-format writer.

use layered_dependency::DepTree;

use crate::FormatConfig;

/// Writes sentences in a [`FormatConfig`]'s layout, one row per word in id order.
#[derive(Debug, Clone, Default)]
pub struct ColumnWriter {
    config: FormatConfig,
}

impl ColumnWriter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn write_sentence(&self, tree: &DepTree) -> String {
        tree.display(self.config.layout)
            .with_style(self.config.style.clone())
            .to_string()
    }

    /// Sentences are separated by a blank line.
    pub fn write_sentences(&self, trees: &[DepTree]) -> String {
        tracing::debug!(sentences = trees.len(), layout = ?self.config.layout, "write sentences");
        trees
            .iter()
            .map(|tree| self.write_sentence(tree))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
