//! Default configuration values

use super::types::Category;

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "newsfile.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "newsfile.yaml";

/// Default project name
pub const DEFAULT_PROJECT_NAME: &str = "syslog-ng";

/// Default fragment directory
pub const DEFAULT_NEWS_DIR: &str = "news";

/// Default generated document
pub const DEFAULT_OUTPUT_FILE: &str = "NEWS.md";

/// Default version manifest
pub const DEFAULT_VERSION_FILE: &str = "VERSION";

/// Default release tag format
pub const DEFAULT_TAG_FORMAT: &str = "syslog-ng-{version}";

/// Default pull request link template
pub const DEFAULT_PR_URL_TEMPLATE: &str = "https://github.com/syslog-ng/syslog-ng/pull/{id}";

/// Default credits column width
pub const DEFAULT_WRAP_WIDTH: usize = 70;

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".newsfile.toml",
        ".newsfile.yaml",
    ]
}

/// Contributors credited in every release
pub fn default_team_members() -> Vec<String> {
    [
        "Andras Mitzki",
        "Antal Nemes",
        "Attila Szakacs",
        "Balazs Scheidler",
        "Gabor Nagy",
        "Laszlo Budai",
        "Laszlo Szemere",
        "László Várady",
        "Norbert Takacs",
        "Zoltan Pallagi",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// The five release note categories, in rendering order
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Features", "feature-*.md"),
        Category::new("Bugfixes", "bugfix-*.md"),
        Category::new("Packaging", "packaging-*.md"),
        Category::new("Notes to developers", "developer-note-*.md"),
        Category::new("Other changes", "other-*.md"),
    ]
}
