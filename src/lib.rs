//! # git-guide
//!
//! Interactive builder for conventional commit messages.
//!
//! A session checks that something is staged, walks the user through the
//! message fields (work item, type, scope, description, body, breaking
//! change, issue reference), validates each one, assembles the message, and
//! commits it with git. The last answers are remembered per project in
//! `.git-guide/.git-commit.json` and offered as defaults next time.
//!
//! ## Quick Start
//!
//! ```rust
//! use git_guide::commit::{assemble, CommitDraft, COMMIT_TYPES};
//!
//! let draft = CommitDraft {
//!     work_item: "bcds-42".to_string(),
//!     commit_type: COMMIT_TYPES[0],
//!     commit_type_index: 1,
//!     scope: "api".to_string(),
//!     description: "add endpoint".to_string(),
//!     body: String::new(),
//!     breaking_change: String::new(),
//!     issue_ref: String::new(),
//! };
//! assert_eq!(assemble(&draft), "feat(api): add endpoint\n\nRefs bcds-42");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod collect;
pub mod commit;
pub mod error;
pub mod git;
pub mod prefs;
pub mod session;
pub mod ui;

pub use crate::cli::Cli;
pub use crate::error::GuideError;
