//! Version control boundary.

use anyhow::Result;

pub mod repository;

pub use repository::GitRepository;

/// Operations the session needs from version control.
pub trait Vcs {
    /// Returns true if the index holds changes relative to HEAD.
    fn has_staged_changes(&self) -> Result<bool>;

    /// Returns the current branch name, `None` when detached or unborn.
    fn current_branch(&self) -> Option<String>;

    /// Records the staged changes with `message`.
    ///
    /// Returns the captured command output on success; fails with
    /// [`GuideError::CommitFailed`](crate::GuideError::CommitFailed) carrying
    /// that output otherwise.
    fn commit(&self, message: &str) -> Result<String>;
}
