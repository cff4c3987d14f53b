//! Markdown news formatter

use newsfile_core::config::NewsConfig;
use tracing::{debug, instrument};

use super::NewsFormatter;
use crate::credits::wrap_names;
use crate::types::{CategoryBlock, Fragment, NewsDocument};

/// Placeholder block the release manager fills in by hand
pub const HIGHLIGHTS_BLOCK: &str =
    "## Highlights\n\n<Fill this block manually from the blocks below>\n\n";

/// Continuation lines of an entry are indented to sit under the bullet text
const ENTRY_INDENT: &str = "   ";

/// Markdown news formatter
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    /// Version line underlined with `=` of the same length
    pub fn header(&self, version: &str) -> String {
        format!("{}\n{}\n\n", version, "=".repeat(version.chars().count()))
    }

    /// One bulleted entry with its pull request link
    pub fn entry(&self, fragment: &Fragment, config: &NewsConfig) -> String {
        let entry = format!(
            " * {}\n([#{}]({}))",
            fragment.body.trim_end(),
            fragment.id,
            config.format_pr_url(&fragment.id)
        );
        let mut entry = entry.replace('\n', &format!("\n{}", ENTRY_INDENT));
        entry.push('\n');
        entry
    }

    /// `## <name>` heading followed by its entries
    pub fn block(&self, block: &CategoryBlock, config: &NewsConfig) -> String {
        let mut output = format!("## {}\n\n", block.name);
        for fragment in &block.fragments {
            output.push_str(&self.entry(fragment, config));
        }
        output.push('\n');
        output
    }

    /// Credits heading, preamble and the wrapped contributor list
    pub fn credits(&self, contributors: &[String], config: &NewsConfig) -> String {
        let project = &config.project_name;
        format!(
            "## Credits\n\
             \n\
             {project} is developed as a community project, and as such it relies\n\
             on volunteers, to do the work necessarily to produce {project}.\n\
             \n\
             Reporting bugs, testing changes, writing code or simply providing\n\
             feedback are all important contributions, so please if you are a user\n\
             of {project}, contribute.\n\
             \n\
             We would like to thank the following people for their contribution:\n\
             \n\
             {names}\n",
            project = project,
            names = wrap_names(contributors, config.wrap_width),
        )
    }
}

impl NewsFormatter for MarkdownFormatter {
    #[instrument(skip(self, document, config), fields(version = %document.version, block_count = document.blocks.len()))]
    fn format(&self, document: &NewsDocument, config: &NewsConfig) -> String {
        let mut output = self.header(&document.version);
        output.push_str(HIGHLIGHTS_BLOCK);

        for block in &document.blocks {
            if block.is_empty() {
                continue;
            }
            output.push_str(&self.block(block, config));
        }

        output.push_str(&self.credits(&document.contributors, config));

        debug!(output_len = output.len(), "markdown news formatted");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(name: &str, id: &str, body: &str) -> Fragment {
        Fragment::new(format!("news/{}", name), id, body)
    }

    #[test]
    fn test_header_underline_matches_length() {
        let formatter = MarkdownFormatter::new();
        assert_eq!(formatter.header("4.1.0"), "4.1.0\n=====\n\n");
        assert_eq!(formatter.header("4.10.0"), "4.10.0\n======\n\n");
    }

    #[test]
    fn test_single_line_entry() {
        let formatter = MarkdownFormatter::new();
        let config = NewsConfig::default();

        let entry = formatter.entry(&fragment("feature-42.md", "42", "Added X.\n"), &config);
        assert_eq!(
            entry,
            " * Added X.\n   ([#42](https://github.com/syslog-ng/syslog-ng/pull/42))\n"
        );
    }

    #[test]
    fn test_multi_line_entry_is_indented() {
        let formatter = MarkdownFormatter::new();
        let config = NewsConfig::default();

        let entry = formatter.entry(
            &fragment("bugfix-17-2.md", "17", "Fixed Y.\nDetail line.\n\n"),
            &config,
        );
        assert_eq!(
            entry,
            " * Fixed Y.\n   Detail line.\n   ([#17](https://github.com/syslog-ng/syslog-ng/pull/17))\n"
        );
    }

    #[test]
    fn test_block() {
        let formatter = MarkdownFormatter::new();
        let config = NewsConfig::default();

        let mut block = CategoryBlock::new("Packaging");
        block.add_fragment(fragment("packaging-1.md", "1", "Debian."));
        block.add_fragment(fragment("packaging-2.md", "2", "RPM."));

        let output = formatter.block(&block, &config);
        assert!(output.starts_with("## Packaging\n\n * Debian.\n"));
        assert!(output.ends_with("pull/2))\n\n"));
    }

    #[test]
    fn test_credits_uses_project_name() {
        let formatter = MarkdownFormatter::new();
        let config = NewsConfig {
            project_name: "demo".to_string(),
            ..NewsConfig::default()
        };

        let output = formatter.credits(&["Alice".to_string(), "Bob".to_string()], &config);
        assert!(output.starts_with("## Credits\n\ndemo is developed as a community project"));
        assert!(output.contains("of demo, contribute.\n"));
        assert!(output.ends_with("contribution:\n\nAlice, Bob\n"));
    }

    #[test]
    fn test_format_skips_empty_blocks() {
        let formatter = MarkdownFormatter::new();
        let config = NewsConfig::default();

        let mut document = NewsDocument::new("4.1.0");
        document.blocks.push(CategoryBlock::new("Features"));
        let mut other = CategoryBlock::new("Other changes");
        other.add_fragment(fragment("other-9.md", "9", "Cleanup."));
        document.add_block(other);

        let output = formatter.format(&document, &config);
        assert!(!output.contains("## Features"));
        assert!(output.contains("## Other changes"));
        assert!(output.starts_with("4.1.0\n=====\n\n## Highlights\n"));
    }
}
