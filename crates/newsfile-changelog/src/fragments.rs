//! Fragment discovery

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, instrument};

use newsfile_core::config::Category;
use newsfile_core::error::{FragmentError, Result};

use crate::types::{CategoryBlock, Fragment};

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)(-\d+)?\.md$").expect("valid fragment id regex"))
}

/// Pull request identifier encoded at the tail of a fragment file name.
///
/// `feature-123.md` and `feature-123-4.md` both yield `123`.
pub fn extract_id(file_name: &str) -> Option<&str> {
    id_pattern()
        .captures(file_name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Read a single fragment file
pub fn read_fragment(path: &Path) -> Result<Fragment> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let id = extract_id(&file_name)
        .ok_or_else(|| FragmentError::InvalidFilename(file_name.clone()))?
        .to_string();

    let body = std::fs::read_to_string(path)?;
    Ok(Fragment::new(path, id, body))
}

/// Collect the fragments of one category
#[instrument(skip(news_dir), fields(category = %category.name))]
pub fn collect_category(news_dir: &Path, category: &Category) -> Result<CategoryBlock> {
    let pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&news_dir.to_string_lossy()),
        category.pattern
    );

    let paths = glob::glob(&pattern).map_err(|e| FragmentError::InvalidPattern {
        pattern: category.pattern.clone(),
        reason: e.to_string(),
    })?;

    let mut block = CategoryBlock::new(&category.name);
    for path in paths {
        let path = path.map_err(|e| e.into_error())?;
        if !path.is_file() {
            continue;
        }
        block.add_fragment(read_fragment(&path)?);
    }

    debug!(count = block.fragments.len(), "collected fragments");
    Ok(block)
}

/// Collect every category in order, dropping the empty ones
#[instrument(skip(categories), fields(news_dir = %news_dir.display()))]
pub fn collect_blocks(news_dir: &Path, categories: &[Category]) -> Result<Vec<CategoryBlock>> {
    if !news_dir.is_dir() {
        return Err(FragmentError::DirectoryNotFound(news_dir.to_path_buf()).into());
    }

    let mut blocks = Vec::new();
    for category in categories {
        let block = collect_category(news_dir, category)?;
        if !block.is_empty() {
            blocks.push(block);
        }
    }

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsfile_core::config::default_categories;
    use newsfile_core::error::NewsfileError;
    use tempfile::TempDir;

    #[test]
    fn test_extract_id() {
        assert_eq!(extract_id("feature-123.md"), Some("123"));
        assert_eq!(extract_id("bugfix-123-4.md"), Some("123"));
        assert_eq!(extract_id("developer-note-7.md"), Some("7"));
        assert_eq!(extract_id("feature-abc.md"), None);
        assert_eq!(extract_id("feature-123.txt"), None);
        assert_eq!(extract_id("feature-123xmd"), None);
    }

    #[test]
    fn test_read_fragment() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bugfix-17-2.md");
        std::fs::write(&path, "Fixed Y.\n").unwrap();

        let fragment = read_fragment(&path).unwrap();
        assert_eq!(fragment.id, "17");
        assert_eq!(fragment.body, "Fixed Y.\n");
    }

    #[test]
    fn test_collect_blocks_order_and_skip_empty() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("other-5.md"), "Misc.").unwrap();
        std::fs::write(temp.path().join("feature-42.md"), "Added X.").unwrap();
        std::fs::write(temp.path().join("README.md"), "not a fragment").unwrap();

        let blocks = collect_blocks(temp.path(), &default_categories()).unwrap();
        let names: Vec<_> = blocks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Features", "Other changes"]);
        assert_eq!(blocks[0].fragments[0].id, "42");
    }

    #[test]
    fn test_collect_blocks_invalid_filename() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("feature-42.md"), "Added X.").unwrap();
        std::fs::write(temp.path().join("bugfix-oops.md"), "Broken.").unwrap();

        let err = collect_blocks(temp.path(), &default_categories()).unwrap_err();
        assert!(matches!(
            err,
            NewsfileError::Fragment(FragmentError::InvalidFilename(ref name)) if name == "bugfix-oops.md"
        ));
    }

    #[test]
    fn test_collect_blocks_missing_dir() {
        let temp = TempDir::new().unwrap();
        let err = collect_blocks(&temp.path().join("news"), &default_categories()).unwrap_err();
        assert!(matches!(
            err,
            NewsfileError::Fragment(FragmentError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_directories_are_ignored() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("feature-1.md")).unwrap();

        let blocks = collect_blocks(temp.path(), &default_categories()).unwrap();
        assert!(blocks.is_empty());
    }
}
