//! Commit message domain: type catalog, field grammars, and message assembly.

pub mod branch;
pub mod catalog;
pub mod message;
pub mod validate;

pub use branch::work_item_hint;
pub use catalog::{CommitType, COMMIT_TYPES};
pub use message::{assemble, CommitDraft};
pub use validate::{valid_short_description, valid_work_item, MAX_DESCRIPTION_LEN};
