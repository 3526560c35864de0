//! Work item suggestions derived from the current branch name.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static BRANCH_WORK_ITEM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"bcds-\d+(?:-[a-z0-9]+)*").unwrap());

/// Suggests a default work item from a branch name.
///
/// Returns the first work item embedded in the lowercased branch name, or the
/// lowercased branch name itself when none is found. The result is only ever
/// offered as a default and is not guaranteed to be a valid work item.
pub fn work_item_hint(branch: &str) -> String {
    let lower = branch.to_lowercase();
    match BRANCH_WORK_ITEM_PATTERN.find(&lower) {
        Some(found) => found.as_str().to_string(),
        None => lower,
    }
}
