//! Commit draft and conventional commit message assembly.

use crate::commit::CommitType;

/// Fully collected answers for one commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDraft {
    /// Work item identifier, already lowercased and validated.
    pub work_item: String,
    /// Selected commit type.
    pub commit_type: CommitType,
    /// 1-based menu number the commit type was chosen with.
    pub commit_type_index: usize,
    /// Optional scope placed in the header parentheses.
    pub scope: String,
    /// Header description.
    pub description: String,
    /// Optional free-form body paragraph.
    pub body: String,
    /// Optional breaking change note.
    pub breaking_change: String,
    /// Optional raw issue reference footer (e.g. `Closes #123`).
    pub issue_ref: String,
}

impl CommitDraft {
    /// Returns the message header line.
    pub fn header(&self) -> String {
        let description = self.description.trim();
        if self.scope.is_empty() {
            format!("{}: {description}", self.commit_type.code)
        } else {
            format!("{}({}): {description}", self.commit_type.code, self.scope)
        }
    }

    /// Returns the footer lines in their fixed order.
    pub fn footers(&self) -> Vec<String> {
        let mut footers = Vec::new();
        if !self.breaking_change.is_empty() {
            footers.push(format!("BREAKING CHANGE: {}", self.breaking_change));
        }
        if !self.issue_ref.is_empty() {
            footers.push(self.issue_ref.clone());
        }
        if !self.work_item.is_empty() {
            footers.push(format!("Refs {}", self.work_item));
        }
        footers
    }
}

/// Assembles the final commit message from a draft.
///
/// Paragraphs (header, optional body, optional footer block) are separated by
/// a single blank line.
pub fn assemble(draft: &CommitDraft) -> String {
    let mut sections = vec![draft.header()];

    if !draft.body.is_empty() {
        sections.push(draft.body.clone());
    }

    let footers = draft.footers();
    if !footers.is_empty() {
        sections.push(footers.join("\n"));
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::COMMIT_TYPES;

    fn draft() -> CommitDraft {
        CommitDraft {
            work_item: "bcds-42".to_string(),
            commit_type: COMMIT_TYPES[0],
            commit_type_index: 1,
            scope: "api".to_string(),
            description: "add endpoint".to_string(),
            body: String::new(),
            breaking_change: String::new(),
            issue_ref: String::new(),
        }
    }

    #[test]
    fn minimal_message_with_scope() {
        assert_eq!(assemble(&draft()), "feat(api): add endpoint\n\nRefs bcds-42");
    }

    #[test]
    fn header_without_scope() {
        let d = CommitDraft {
            scope: String::new(),
            ..draft()
        };
        insta::assert_snapshot!(d.header(), @"feat: add endpoint");
    }

    #[test]
    fn header_trims_description() {
        let d = CommitDraft {
            description: "  add endpoint  ".to_string(),
            ..draft()
        };
        assert_eq!(d.header(), "feat(api): add endpoint");
    }

    #[test]
    fn full_message_orders_sections_and_footers() {
        let d = CommitDraft {
            commit_type: COMMIT_TYPES[1],
            commit_type_index: 2,
            body: "first line\nsecond line".to_string(),
            breaking_change: "drops v1 routes".to_string(),
            issue_ref: "Closes #123".to_string(),
            ..draft()
        };
        insta::assert_snapshot!(assemble(&d), @r"
fix(api): add endpoint

first line
second line

BREAKING CHANGE: drops v1 routes
Closes #123
Refs bcds-42
");
    }

    #[test]
    fn body_without_footers() {
        let d = CommitDraft {
            work_item: String::new(),
            body: "why it changed".to_string(),
            ..draft()
        };
        assert_eq!(assemble(&d), "feat(api): add endpoint\n\nwhy it changed");
    }

    #[test]
    fn header_only_when_everything_optional_is_empty() {
        let d = CommitDraft {
            work_item: String::new(),
            scope: String::new(),
            ..draft()
        };
        assert_eq!(assemble(&d), "feat: add endpoint");
    }

    #[test]
    fn issue_ref_is_not_reformatted() {
        let d = CommitDraft {
            issue_ref: "fixes   #9".to_string(),
            ..draft()
        };
        assert_eq!(
            assemble(&d),
            "feat(api): add endpoint\n\nfixes   #9\nRefs bcds-42"
        );
    }

    #[test]
    fn multiline_breaking_change_is_kept_verbatim() {
        let d = CommitDraft {
            work_item: String::new(),
            breaking_change: "config moved\nrun migrate".to_string(),
            ..draft()
        };
        assert_eq!(
            assemble(&d),
            "feat(api): add endpoint\n\nBREAKING CHANGE: config moved\nrun migrate"
        );
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn assembly_is_deterministic(body in "[a-z ]{0,20}", issue in "[a-z#0-9 ]{0,10}") {
                let d = CommitDraft { body, issue_ref: issue, ..draft() };
                prop_assert_eq!(assemble(&d), assemble(&d));
            }

            #[test]
            fn message_starts_with_header(index in 1_usize..=10, scope in "[a-z]{0,6}") {
                let d = CommitDraft {
                    commit_type: COMMIT_TYPES[index - 1],
                    commit_type_index: index,
                    scope,
                    ..draft()
                };
                let message = assemble(&d);
                prop_assert!(message.starts_with(&d.header()));
                prop_assert!(message.ends_with("Refs bcds-42"));
            }
        }
    }
}
