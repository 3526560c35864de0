//! Session-level errors.

use thiserror::Error;

/// Failures that end a guided commit session.
#[derive(Error, Debug)]
pub enum GuideError {
    /// Nothing is staged, so there is nothing to commit.
    #[error("No staged changes. Use 'git add' to stage files first")]
    NoStagedChanges,

    /// `git commit` exited unsuccessfully; carries its captured output.
    #[error("Commit failed: {0}")]
    CommitFailed(String),
}
