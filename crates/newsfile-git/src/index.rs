//! Index operations

use std::path::PathBuf;
use std::process::Command;

use tracing::{info, instrument};

use crate::repository::{GitRepo, Result};
use newsfile_core::error::GitError;

impl GitRepo {
    /// Remove files from the index and the working tree with `git rm`.
    ///
    /// All paths go to a single invocation. Files with staged
    /// modifications make `git rm` refuse, which surfaces as an error.
    #[instrument(skip(self, paths), fields(count = paths.len()))]
    pub fn remove_files(&self, paths: &[PathBuf]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let output = Command::new("git")
            .current_dir(self.workdir())
            .args(["rm", "--quiet", "--"])
            .args(paths)
            .output()
            .map_err(|e| GitError::CommandFailed {
                command: "git rm".to_string(),
                reason: format!("Failed to run git: {}", e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::CommandFailed {
                command: "git rm".to_string(),
                reason: stderr.trim().to_string(),
            });
        }

        info!(count = paths.len(), "removed files from git");
        Ok(())
    }
}
