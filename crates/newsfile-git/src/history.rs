//! Revision history queries

use std::path::Path;

use git2::Sort;
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use newsfile_core::error::GitError;

impl GitRepo {
    /// Read a file as it existed at `revision`.
    ///
    /// `path` is relative to the repository root. Returns `None` when the
    /// file is not part of that revision's tree.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn show_file(&self, revision: &str, path: &Path) -> Result<Option<String>> {
        let commit = self.resolve_commit(revision)?;
        let tree = commit.tree()?;

        let entry = match tree.get_path(path) {
            Ok(entry) => entry,
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                debug!(revision, "file not present at revision");
                return Ok(None);
            }
            Err(e) => return Err(GitError::Git2(e)),
        };

        let blob = entry.to_object(&self.repo)?.peel_to_blob()?;
        Ok(Some(String::from_utf8_lossy(blob.content()).into_owned()))
    }

    /// Author names of the non-merge commits reachable from `to` but not
    /// from `from`, newest first. Names go through the repository mailmap.
    #[instrument(skip(self))]
    pub fn commit_authors(&self, from: Option<&str>, to: &str) -> Result<Vec<String>> {
        let head = self.resolve_commit(to)?;
        let mailmap = self.repo.mailmap()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;

        if let Some(from) = from {
            let base = self.resolve_commit(from)?;
            revwalk.hide(base.id())?;
        }

        let mut authors = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            if commit.parent_count() > 1 {
                continue;
            }

            let author = commit.author_with_mailmap(&mailmap)?;
            authors.push(author.name().unwrap_or("Unknown").to_string());
        }

        debug!(count = authors.len(), "collected commit authors");
        Ok(authors)
    }
}
