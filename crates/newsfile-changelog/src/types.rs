//! News document types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single change entry read from the news directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Location of the fragment file
    pub path: PathBuf,
    /// Pull request identifier taken from the file name
    pub id: String,
    /// Free-form description
    pub body: String,
}

impl Fragment {
    /// Create a new fragment
    pub fn new(path: impl Into<PathBuf>, id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            id: id.into(),
            body: body.into(),
        }
    }
}

/// A category heading with the fragments filed under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBlock {
    /// Category heading
    pub name: String,
    /// Fragments in enumeration order
    pub fragments: Vec<Fragment>,
}

impl CategoryBlock {
    /// Create a new block
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fragments: Vec::new(),
        }
    }

    /// Add a fragment to the block
    pub fn add_fragment(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Check if block is empty
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Everything that goes into one release's news file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsDocument {
    /// Version being released
    pub version: String,
    /// Non-empty category blocks in rendering order
    pub blocks: Vec<CategoryBlock>,
    /// Sorted, deduplicated contributor names
    pub contributors: Vec<String>,
}

impl NewsDocument {
    /// Create a new document
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            blocks: Vec::new(),
            contributors: Vec::new(),
        }
    }

    /// Add a block; empty blocks are dropped
    pub fn add_block(&mut self, block: CategoryBlock) {
        if !block.is_empty() {
            self.blocks.push(block);
        }
    }

    /// Set the contributor list
    pub fn with_contributors(mut self, contributors: Vec<String>) -> Self {
        self.contributors = contributors;
        self
    }

    /// Paths of every fragment consumed by this document
    pub fn fragment_paths(&self) -> Vec<PathBuf> {
        self.blocks
            .iter()
            .flat_map(|b| b.fragments.iter().map(|f| f.path.clone()))
            .collect()
    }
}
