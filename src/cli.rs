//! CLI interface for git-guide.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::git::GitRepository;
use crate::prefs::PreferenceStore;
use crate::session::{Outcome, Session};
use crate::ui::{Palette, Prompter};

/// git-guide: builds a conventional commit message for the staged changes.
#[derive(Parser, Debug)]
#[command(name = "git-guide")]
#[command(
    about = "Guides you through a conventional commit message and commits the staged changes",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Run as if started in this directory.
    #[arg(short = 'C', long = "directory", value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Show the assembled message without committing.
    #[arg(long)]
    pub dry_run: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Executes the guided commit on the real terminal.
    pub fn execute(self) -> Result<Outcome> {
        let workdir = match self.directory {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to get current directory")?,
        };
        debug!(workdir = %workdir.display(), "Starting session");

        let repo = GitRepository::open_at(&workdir)?;
        let store = PreferenceStore::for_dir(&workdir);

        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout(), Palette::detect(self.no_color));

        Session::new(&repo, &store)
            .dry_run(self.dry_run)
            .run(&mut prompter)
    }
}
