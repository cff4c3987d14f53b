//! News document formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use newsfile_core::config::NewsConfig;

use crate::types::NewsDocument;

/// Trait for news document formatters
pub trait NewsFormatter: Send + Sync {
    /// Format a news document to string
    fn format(&self, document: &NewsDocument, config: &NewsConfig) -> String;
}
