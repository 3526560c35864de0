//! One guided commit, from the staged-changes check to the commit itself.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::collect::InputCollector;
use crate::commit::{assemble, work_item_hint};
use crate::error::GuideError;
use crate::git::Vcs;
use crate::prefs::{PreferenceRecord, PreferenceStore};
use crate::ui::{Color, Prompter};

const RULE: &str = "--------------------------------------------------";

/// How a session ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The message was committed.
    Committed {
        /// The assembled message.
        message: String,
    },
    /// The user declined the final confirmation.
    Cancelled {
        /// The assembled message.
        message: String,
    },
    /// Dry run: the message was shown but not committed.
    Previewed {
        /// The assembled message.
        message: String,
    },
}

impl Outcome {
    /// The assembled commit message.
    pub fn message(&self) -> &str {
        match self {
            Self::Committed { message }
            | Self::Cancelled { message }
            | Self::Previewed { message } => message,
        }
    }
}

/// A guided commit session over a version control backend.
pub struct Session<'a, V: Vcs + ?Sized> {
    vcs: &'a V,
    store: &'a PreferenceStore,
    dry_run: bool,
}

impl<'a, V: Vcs + ?Sized> Session<'a, V> {
    /// Creates a session that commits through `vcs` and remembers answers in `store`.
    pub fn new(vcs: &'a V, store: &'a PreferenceStore) -> Self {
        Self {
            vcs,
            store,
            dry_run: false,
        }
    }

    /// Stops after showing the message instead of confirming and committing.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs the session to completion.
    pub fn run<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<Outcome> {
        if !self.vcs.has_staged_changes()? {
            return Err(GuideError::NoStagedChanges.into());
        }

        prompter.say_colored(Color::Cyan, "=== git-guide: guided commit ===")?;

        let prior = self.store.load();
        let hint = self
            .vcs
            .current_branch()
            .map(|branch| work_item_hint(&branch))
            .unwrap_or_default();
        debug!(%hint, "Work item hint from branch");

        let draft = InputCollector::new(prompter, &prior, hint).collect()?;
        let message = assemble(&draft);

        // Saved before the confirmation, so a cancelled session still replaces the last answers.
        self.store.save(&PreferenceRecord::from(&draft));

        prompter.say("")?;
        prompter.say_colored(Color::Green, "Generated commit message:")?;
        prompter.say(RULE)?;
        prompter.say(&message)?;
        prompter.say(RULE)?;

        if self.dry_run {
            return Ok(Outcome::Previewed { message });
        }

        if !prompter.confirm("Commit with this message?")? {
            prompter.say_colored(Color::Red, "Commit cancelled.")?;
            return Ok(Outcome::Cancelled { message });
        }

        let output = self.vcs.commit(&message)?;
        info!(output = %output.trim_end(), "Commit recorded");

        prompter.say("")?;
        prompter.say_colored(Color::Green, "=== Commit succeeded ===")?;
        prompter.say(&format!("Commit message:\n{message}"))?;
        prompter.say("Run 'git push' to publish the changes.")?;

        Ok(Outcome::Committed { message })
    }
}
