//! Step-by-step collection of commit message fields.
//!
//! Each [`Step`] prompts until its answer is accepted, then hands over to
//! [`Step::next`]. There is no way back to an earlier step.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::commit::{
    valid_short_description, valid_work_item, CommitDraft, CommitType, COMMIT_TYPES,
    MAX_DESCRIPTION_LEN,
};
use crate::prefs::PreferenceRecord;
use crate::ui::{Color, Prompter};

/// One field of the commit message, in collection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Work item identifier.
    WorkItem,
    /// Commit type menu choice.
    CommitType,
    /// Optional scope.
    Scope,
    /// Header description.
    Description,
    /// Optional body paragraph.
    Body,
    /// Optional breaking change note.
    BreakingChange,
    /// Optional issue reference.
    IssueRef,
}

impl Step {
    /// The step a session starts with.
    pub const FIRST: Self = Self::WorkItem;

    /// The step that follows this one, `None` after the last.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::WorkItem => Some(Self::CommitType),
            Self::CommitType => Some(Self::Scope),
            Self::Scope => Some(Self::Description),
            Self::Description => Some(Self::Body),
            Self::Body => Some(Self::BreakingChange),
            Self::BreakingChange => Some(Self::IssueRef),
            Self::IssueRef => None,
        }
    }

    /// Predicate an answer must satisfy before moving on, if any.
    pub fn validator(self) -> Option<fn(&str) -> bool> {
        match self {
            Self::WorkItem => Some(valid_work_item),
            Self::CommitType => Some(valid_type_choice),
            Self::Description => Some(valid_short_description),
            Self::Scope | Self::Body | Self::BreakingChange | Self::IssueRef => None,
        }
    }

    /// Iterates over all steps in order.
    pub fn sequence() -> impl Iterator<Item = Self> {
        std::iter::successors(Some(Self::FIRST), |step| step.next())
    }
}

fn valid_type_choice(input: &str) -> bool {
    parse_type_choice(input).is_some()
}

/// Parses a commit type menu choice into its 1-based index.
pub fn parse_type_choice(input: &str) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&index| CommitType::is_valid_index(index))
}

#[derive(Debug, Default)]
struct Answers {
    work_item: String,
    commit_type_index: Option<usize>,
    scope: String,
    description: String,
    body: String,
    breaking_change: String,
    issue_ref: String,
}

impl Answers {
    fn into_draft(self) -> Result<CommitDraft> {
        let commit_type_index = self
            .commit_type_index
            .context("Commit type was not chosen")?;
        let commit_type = *CommitType::by_index(commit_type_index)
            .with_context(|| format!("Invalid commit type index: {commit_type_index}"))?;

        Ok(CommitDraft {
            work_item: self.work_item,
            commit_type,
            commit_type_index,
            scope: self.scope,
            description: self.description,
            body: self.body,
            breaking_change: self.breaking_change,
            issue_ref: self.issue_ref,
        })
    }
}

/// Drives the prompts for every [`Step`], seeded with remembered answers.
pub struct InputCollector<'a, R, W> {
    prompter: &'a mut Prompter<R, W>,
    prior: &'a PreferenceRecord,
    branch_hint: String,
}

impl<'a, R: BufRead, W: Write> InputCollector<'a, R, W> {
    /// Creates a collector.
    ///
    /// `branch_hint` is the work item default used when no prior work item
    /// was remembered.
    pub fn new(
        prompter: &'a mut Prompter<R, W>,
        prior: &'a PreferenceRecord,
        branch_hint: String,
    ) -> Self {
        Self {
            prompter,
            prior,
            branch_hint,
        }
    }

    /// Runs every step and returns the completed draft.
    pub fn collect(mut self) -> Result<CommitDraft> {
        let mut answers = Answers::default();
        for step in Step::sequence() {
            debug!(?step, "Collecting field");
            self.run_step(step, &mut answers)?;
        }
        answers.into_draft()
    }

    fn run_step(&mut self, step: Step, answers: &mut Answers) -> Result<()> {
        match step {
            Step::WorkItem => answers.work_item = self.work_item(step)?,
            Step::CommitType => answers.commit_type_index = Some(self.commit_type()?),
            Step::Scope => answers.scope = self.scope()?,
            Step::Description => answers.description = self.description(step)?,
            Step::Body => {
                answers.body = self.optional_block(
                    "\nAdd a detailed body?",
                    "Enter the body, keep lines within 72 characters",
                )?;
            }
            Step::BreakingChange => {
                answers.breaking_change = self.optional_block(
                    "\nDoes this introduce a breaking change?",
                    "Describe the breaking change",
                )?;
            }
            Step::IssueRef => answers.issue_ref = self.issue_ref()?,
        }
        Ok(())
    }

    fn accepts(step: Step, answer: &str) -> bool {
        match step.validator() {
            Some(validate) => validate(answer),
            None => true,
        }
    }

    fn work_item(&mut self, step: Step) -> Result<String> {
        let default = if self.prior.work_item.is_empty() {
            self.branch_hint.clone()
        } else {
            self.prior.work_item.clone()
        };
        let prompt = self.prompter.palette().paint(
            Color::Yellow,
            "1. Work item (bcds-<number> or bcds-<number>-xxx): ",
        );

        loop {
            let answer = self
                .prompter
                .ask_with_default(&prompt, &default)?
                .to_lowercase();
            if Self::accepts(step, &answer) {
                return Ok(answer);
            }
            self.prompter
                .say_colored(Color::Red, "Invalid work item format, please try again.")?;
        }
    }

    fn commit_type(&mut self) -> Result<usize> {
        self.prompter.say("")?;
        self.prompter
            .say_colored(Color::Yellow, "2. Select the commit type:")?;
        for line in CommitType::menu() {
            self.prompter.say(&line)?;
        }

        let count = COMMIT_TYPES.len();
        let default = self
            .prior
            .commit_type_default()
            .map(|index| index.to_string())
            .unwrap_or_default();
        let prompt = format!("   Enter a number (1-{count}): ");

        loop {
            let answer = self.prompter.ask_with_default(&prompt, &default)?;
            if let Some(index) = parse_type_choice(&answer) {
                return Ok(index);
            }
            self.prompter.say_colored(
                Color::Red,
                &format!("Please enter a valid number (1-{count})"),
            )?;
        }
    }

    fn scope(&mut self) -> Result<String> {
        let prompt = self.prompter.palette().paint(
            Color::Yellow,
            "3. Scope (optional, e.g. api or payment; Enter to skip): ",
        );
        let answer = self
            .prompter
            .ask_optional(&format!("\n{prompt}"), &self.prior.scope)?;
        Ok(answer.trim().to_string())
    }

    fn description(&mut self, step: Step) -> Result<String> {
        self.prompter.say("")?;
        self.prompter.say_colored(
            Color::Yellow,
            &format!(
                "4. Short description (at most {MAX_DESCRIPTION_LEN} characters, lowercase first letter, no trailing period):"
            ),
        )?;

        loop {
            let answer = self
                .prompter
                .ask_with_default("   Description: ", &self.prior.description)?;
            if Self::accepts(step, &answer) {
                return Ok(answer);
            }
            self.prompter.say_colored(
                Color::Red,
                "Description does not follow the rules, please try again.",
            )?;
        }
    }

    fn optional_block(&mut self, question: &str, prompt: &str) -> Result<String> {
        if self.prompter.ask_yes_no(question)? {
            Ok(self.prompter.ask_multiline(prompt)?)
        } else {
            Ok(String::new())
        }
    }

    fn issue_ref(&mut self) -> Result<String> {
        let answer = self.prompter.ask_optional(
            "\nLink an issue? Enter it directly (e.g. Closes #123; Enter to skip): ",
            &self.prior.issue_ref,
        )?;
        Ok(answer.trim().to_string())
    }
}
