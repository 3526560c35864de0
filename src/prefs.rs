//! Per-project memory of the last answers given.
//!
//! The record lives at `<working-directory>/.git-guide/.git-commit.json` and
//! is purely a convenience: reading never fails and writing never blocks the
//! session.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::commit::{CommitDraft, CommitType};

/// Directory holding git-guide state inside the working directory.
pub const STATE_DIR: &str = ".git-guide";

/// File name of the last-answers record.
pub const PREFERENCES_FILE: &str = ".git-commit.json";

/// Last-used answers, reused as defaults on the next run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceRecord {
    /// Last work item.
    pub work_item: String,
    /// Last chosen commit type menu number, 0 when unset.
    pub commit_type_index: usize,
    /// Last scope.
    pub scope: String,
    /// Last header description.
    pub description: String,
    /// Last issue reference.
    pub issue_ref: String,
}

impl PreferenceRecord {
    /// Returns the remembered commit type index if it is still selectable.
    pub fn commit_type_default(&self) -> Option<usize> {
        CommitType::is_valid_index(self.commit_type_index).then_some(self.commit_type_index)
    }

    fn sanitized(mut self) -> Self {
        if !CommitType::is_valid_index(self.commit_type_index) {
            self.commit_type_index = 0;
        }
        self
    }
}

impl From<&CommitDraft> for PreferenceRecord {
    fn from(draft: &CommitDraft) -> Self {
        Self {
            work_item: draft.work_item.clone(),
            commit_type_index: draft.commit_type_index,
            scope: draft.scope.clone(),
            description: draft.description.clone(),
            issue_ref: draft.issue_ref.clone(),
        }
    }
}

/// Reads and writes the preference record for one working directory.
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Creates a store rooted at the given working directory.
    pub fn for_dir<P: AsRef<Path>>(workdir: P) -> Self {
        Self {
            path: workdir.as_ref().join(STATE_DIR).join(PREFERENCES_FILE),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the record, falling back to an empty one on any failure.
    pub fn load(&self) -> PreferenceRecord {
        match self.try_load() {
            Ok(record) => record.sanitized(),
            Err(e) => {
                debug!("Ignoring unreadable preferences: {e:#}");
                PreferenceRecord::default()
            }
        }
    }

    /// Saves the record, overwriting any previous one. Failures are logged and ignored.
    pub fn save(&self, record: &PreferenceRecord) {
        if let Err(e) = self.try_save(record) {
            debug!("Failed to save preferences: {e:#}");
        }
    }

    fn try_load(&self) -> Result<PreferenceRecord> {
        if !self.path.exists() {
            return Ok(PreferenceRecord::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences: {}", self.path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse preferences: {}", self.path.display()))
    }

    fn try_save(&self, record: &PreferenceRecord) -> Result<()> {
        let dir = self
            .path
            .parent()
            .context("Preferences path has no parent directory")?;
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create state directory: {}", dir.display()))?;

        let content =
            serde_json::to_string_pretty(record).context("Failed to serialize preferences")?;

        // Write beside the target and rename so a crash never leaves a torn file.
        let mut tmp = NamedTempFile::new_in(dir).context("Failed to create temporary file")?;
        tmp.write_all(content.as_bytes())
            .context("Failed to write preferences")?;
        // Temp files are created 0600; match a plainly written file.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))
                .context("Failed to set preferences permissions")?;
        }
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to replace preferences: {}", self.path.display()))?;

        Ok(())
    }
}
