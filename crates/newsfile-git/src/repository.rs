//! Git repository operations

use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::{info, instrument};

use newsfile_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// Git repository wrapper
pub struct GitRepo {
    pub(crate) repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at the given path
    #[instrument(fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "opening git repository");
        let repo = Repository::open(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::NotARepository(path.to_path_buf())
            } else {
                GitError::OpenFailed(e.to_string())
            }
        })?;

        let path = repo
            .workdir()
            .ok_or(GitError::BareRepository)?
            .to_path_buf();

        Ok(Self { repo, path })
    }

    /// Discover and open a repository by searching parent directories
    #[instrument(fields(start_path = %start_path.display()))]
    pub fn discover(start_path: &Path) -> Result<Self> {
        info!(start_path = %start_path.display(), "discovering git repository");
        let repo = Repository::discover(start_path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::NotARepository(start_path.to_path_buf())
            } else {
                GitError::OpenFailed(e.to_string())
            }
        })?;

        let path = repo
            .workdir()
            .ok_or(GitError::BareRepository)?
            .to_path_buf();

        Ok(Self { repo, path })
    }

    /// Root of the working tree
    pub fn workdir(&self) -> &Path {
        &self.path
    }

    /// Resolve a revision (branch, tag, `HEAD`, hash) to its commit
    pub(crate) fn resolve_commit(&self, revision: &str) -> Result<git2::Commit<'_>> {
        let object = self.repo.revparse_single(revision).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::UnknownRevision(revision.to_string())
            } else {
                GitError::Git2(e)
            }
        })?;
        object.peel_to_commit().map_err(GitError::Git2)
    }
}
