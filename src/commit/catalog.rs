//! The fixed, ordered catalog of conventional commit types.

use std::fmt;

/// A conventional commit type offered in the selection menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitType {
    /// Type code written into the message header (e.g. `feat`).
    pub code: &'static str,
    /// One-line explanation shown next to the code.
    pub description: &'static str,
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

/// All commit types, in menu order (menu number = position + 1).
pub const COMMIT_TYPES: [CommitType; 10] = [
    CommitType {
        code: "feat",
        description: "A new feature",
    },
    CommitType {
        code: "fix",
        description: "A bug fix",
    },
    CommitType {
        code: "docs",
        description: "Documentation only changes",
    },
    CommitType {
        code: "style",
        description: "Changes that do not affect code meaning",
    },
    CommitType {
        code: "refactor",
        description: "Neither fixes a bug nor adds a feature",
    },
    CommitType {
        code: "perf",
        description: "A code change that improves performance",
    },
    CommitType {
        code: "test",
        description: "Adding or correcting tests",
    },
    CommitType {
        code: "build",
        description: "Affects the build system or dependencies",
    },
    CommitType {
        code: "ci",
        description: "Changes to CI configuration files",
    },
    CommitType {
        code: "chore",
        description: "Other changes",
    },
];

impl CommitType {
    /// Resolves a 1-based menu number to its commit type.
    pub fn by_index(index: usize) -> Option<&'static Self> {
        index.checked_sub(1).and_then(|i| COMMIT_TYPES.get(i))
    }

    /// Returns true if `index` is a selectable menu number.
    pub fn is_valid_index(index: usize) -> bool {
        Self::by_index(index).is_some()
    }

    /// Renders the numbered menu, one entry per line.
    pub fn menu() -> Vec<String> {
        COMMIT_TYPES
            .iter()
            .enumerate()
            .map(|(i, ct)| format!("   {}. {:<8} {}", i + 1, ct.code, ct.description))
            .collect()
    }
}
