//! Git repository operations

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use git2::{Repository, Status, StatusOptions};
use tracing::debug;

use crate::error::GuideError;
use crate::git::Vcs;

/// Index-side status flags that count as a staged change.
const STAGED: Status = Status::INDEX_NEW
    .union(Status::INDEX_MODIFIED)
    .union(Status::INDEX_DELETED)
    .union(Status::INDEX_RENAMED)
    .union(Status::INDEX_TYPECHANGE);

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
    workdir: PathBuf,
}

impl GitRepository {
    /// Open the repository containing the specified path
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path).context("Not in a git repository")?;
        let workdir = repo
            .workdir()
            .map_or_else(|| path.to_path_buf(), Path::to_path_buf);

        Ok(Self { repo, workdir })
    }

    /// Get workdir path
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// List paths with staged changes
    pub fn staged_files(&self) -> Result<Vec<String>> {
        let mut options = StatusOptions::new();
        options.include_untracked(false).include_ignored(false);

        let statuses = self
            .repo
            .statuses(Some(&mut options))
            .context("Failed to get repository status")?;

        Ok(statuses
            .iter()
            .filter(|entry| entry.status().intersects(STAGED))
            .filter_map(|entry| entry.path().map(str::to_string))
            .collect())
    }
}

impl Vcs for GitRepository {
    fn has_staged_changes(&self) -> Result<bool> {
        let staged = self.staged_files()?;
        debug!(count = staged.len(), "Staged files");
        Ok(!staged.is_empty())
    }

    fn current_branch(&self) -> Option<String> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) => {
                debug!("No readable HEAD: {e}");
                return None;
            }
        };

        if !head.is_branch() {
            return None;
        }
        head.shorthand().map(str::to_string)
    }

    fn commit(&self, message: &str) -> Result<String> {
        // Shell out so hooks, signing and user config apply as with a plain `git commit`.
        let output = Command::new("git")
            .args(["commit", "-m", message])
            .current_dir(&self.workdir)
            .output()
            .context("Failed to execute git commit")?;

        let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
        captured.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(GuideError::CommitFailed(captured.trim_end().to_string()).into());
        }

        Ok(captured)
    }
}
