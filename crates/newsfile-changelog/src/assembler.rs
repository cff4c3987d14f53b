//! News file assembly

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use newsfile_core::config::NewsConfig;
use newsfile_core::error::Result;
use newsfile_git::VersionControl;

use crate::credits::collect_contributors;
use crate::formatter::{MarkdownFormatter, NewsFormatter};
use crate::fragments::collect_blocks;
use crate::types::NewsDocument;
use crate::version::{read_manifest, resolve_next_version, version_from_document};

/// Revision the previous news file and the credits range end are read from
pub const HEAD: &str = "HEAD";

/// Builds the news file for the next release and retires its fragments
pub struct NewsAssembler<'a, V: VersionControl> {
    vcs: &'a V,
    config: &'a NewsConfig,
    formatter: Box<dyn NewsFormatter>,
}

impl<'a, V: VersionControl> NewsAssembler<'a, V> {
    /// Create a new assembler with the markdown formatter
    pub fn new(vcs: &'a V, config: &'a NewsConfig) -> Self {
        Self {
            vcs,
            config,
            formatter: Box::new(MarkdownFormatter::new()),
        }
    }

    /// Use a custom formatter
    pub fn with_formatter<F: NewsFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Absolute path of the generated document
    pub fn output_path(&self) -> PathBuf {
        self.vcs.root().join(&self.config.output_file)
    }

    /// Version recorded on the first line of the committed news file.
    ///
    /// `None` when no news file is committed yet (first release).
    pub fn last_version(&self) -> Result<Option<String>> {
        let previous = self
            .vcs
            .file_at_revision(HEAD, &self.config.output_file)?;
        previous
            .as_deref()
            .map(|document| {
                version_from_document(&self.config.output_file, document).map(str::to_string)
            })
            .transpose()
    }

    /// Build the full document without touching the working tree.
    ///
    /// Fails before anything is written when the version was not bumped or a
    /// fragment name carries no identifier.
    #[instrument(skip(self))]
    pub fn build(&self) -> Result<NewsDocument> {
        let root = self.vcs.root();

        let manifest = read_manifest(&root.join(&self.config.version_file))?;
        let last = self.last_version()?;
        let version = resolve_next_version(&manifest, last.as_deref())?;

        let mut document = NewsDocument::new(&version);
        for block in collect_blocks(&root.join(&self.config.news_dir), &self.config.categories)? {
            document.add_block(block);
        }

        let since = last.as_deref().map(|v| self.config.format_tag(v));
        let authors = self.vcs.authors_in_range(since.as_deref(), HEAD)?;
        let contributors = collect_contributors(&authors, &self.config.team_members);

        info!(
            version = %document.version,
            block_count = document.blocks.len(),
            contributor_count = contributors.len(),
            "news document built"
        );
        Ok(document.with_contributors(contributors))
    }

    /// Render a document to text
    pub fn render(&self, document: &NewsDocument) -> String {
        self.formatter.format(document, self.config)
    }

    /// Overwrite the output file, returning its absolute path
    #[instrument(skip(self, content), fields(content_len = content.len()))]
    pub fn write(&self, content: &str) -> Result<PathBuf> {
        let path = self.output_path();
        std::fs::write(&path, content)?;
        let path = path.canonicalize()?;
        info!(path = %path.display(), "news file written");
        Ok(path)
    }

    /// Remove the fragments consumed by `document` from version control
    #[instrument(skip(self, document))]
    pub fn cleanup(&self, document: &NewsDocument) -> Result<Vec<PathBuf>> {
        let paths = document.fragment_paths();
        debug!(count = paths.len(), "removing consumed fragments");
        self.vcs.remove_paths(&paths)?;
        Ok(paths)
    }
}
