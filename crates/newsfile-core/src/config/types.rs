//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// Project name used in the credits preamble
    pub project_name: String,

    /// Directory holding the fragment files, relative to the repository root
    pub news_dir: PathBuf,

    /// Generated document, relative to the repository root
    pub output_file: PathBuf,

    /// Manifest holding the next version, relative to the repository root
    pub version_file: PathBuf,

    /// Release tag format (e.g., "syslog-ng-{version}")
    pub tag_format: String,

    /// Pull request link template, `{id}` is replaced by the fragment id
    pub pr_url_template: String,

    /// Column width of the credits list
    pub wrap_width: usize,

    /// Contributors always credited, regardless of history
    pub team_members: Vec<String>,

    /// Ordered category table
    pub categories: Vec<Category>,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            project_name: defaults::DEFAULT_PROJECT_NAME.to_string(),
            news_dir: PathBuf::from(defaults::DEFAULT_NEWS_DIR),
            output_file: PathBuf::from(defaults::DEFAULT_OUTPUT_FILE),
            version_file: PathBuf::from(defaults::DEFAULT_VERSION_FILE),
            tag_format: defaults::DEFAULT_TAG_FORMAT.to_string(),
            pr_url_template: defaults::DEFAULT_PR_URL_TEMPLATE.to_string(),
            wrap_width: defaults::DEFAULT_WRAP_WIDTH,
            team_members: defaults::default_team_members(),
            categories: defaults::default_categories(),
        }
    }
}

impl NewsConfig {
    /// Format the release tag for a version
    pub fn format_tag(&self, version: &str) -> String {
        self.tag_format.replace("{version}", version)
    }

    /// Format the pull request link for a fragment id
    pub fn format_pr_url(&self, id: &str) -> String {
        self.pr_url_template.replace("{id}", id)
    }
}

/// A changelog category: its heading and the fragment glob feeding it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Heading rendered as `## <name>`
    pub name: String,

    /// Glob matched inside the news directory (e.g., "feature-*.md")
    pub pattern: String,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}
