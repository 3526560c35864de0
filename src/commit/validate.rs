//! Field grammars for work items and short descriptions.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum length of the header description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 50;

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static WORK_ITEM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^bcds-\d+(-[a-z0-9]+)*$").unwrap());

/// Returns true if `work_item` is a well-formed work item identifier.
///
/// The grammar is lowercase only; callers lowercase user input first.
pub fn valid_work_item(work_item: &str) -> bool {
    WORK_ITEM_PATTERN.is_match(work_item)
}

/// Returns true if `description` is an acceptable header description.
///
/// After trimming it must be 1 to [`MAX_DESCRIPTION_LEN`] characters, start
/// with a lowercase letter, and not end with a period.
pub fn valid_short_description(description: &str) -> bool {
    let description = description.trim();
    // Characters, not bytes.
    let len = description.chars().count();
    if len == 0 || len > MAX_DESCRIPTION_LEN {
        return false;
    }

    let starts_lowercase = description
        .chars()
        .next()
        .is_some_and(char::is_lowercase);

    starts_lowercase && !description.ends_with('.')
}
