//! Version-control collaborator trait

use std::path::{Path, PathBuf};

use crate::repository::{GitRepo, Result};

/// Operations the assembler needs from version control.
///
/// The assembler only talks to this trait, so it can run against an
/// in-memory history in tests.
pub trait VersionControl {
    /// Root of the working tree; relative paths are resolved against it
    fn root(&self) -> &Path;

    /// Contents of `path` (relative to the root) at `revision`, if present
    fn file_at_revision(&self, revision: &str, path: &Path) -> Result<Option<String>>;

    /// Author names of non-merge commits in `from..to`.
    /// `None` for `from` means the whole history up to `to`.
    fn authors_in_range(&self, from: Option<&str>, to: &str) -> Result<Vec<String>>;

    /// Stop tracking `paths` and delete them from the working tree
    fn remove_paths(&self, paths: &[PathBuf]) -> Result<()>;
}

impl VersionControl for GitRepo {
    fn root(&self) -> &Path {
        self.workdir()
    }

    fn file_at_revision(&self, revision: &str, path: &Path) -> Result<Option<String>> {
        self.show_file(revision, path)
    }

    fn authors_in_range(&self, from: Option<&str>, to: &str) -> Result<Vec<String>> {
        self.commit_authors(from, to)
    }

    fn remove_paths(&self, paths: &[PathBuf]) -> Result<()> {
        self.remove_files(paths)
    }
}
