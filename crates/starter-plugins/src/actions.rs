//! File actions exposed to plugins.
//!
//! `FileActions` is the only surface a plugin has for touching the
//! generated project: create a file unless it already exists, or patch
//! an existing file through the injector. Every call is recorded so the
//! caller can present what happened per file.

use std::path::{Path, PathBuf};

use starter_inject::{Directive, Injector};
use tracing::debug;

use crate::error::Result;

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// File was written for the first time.
    Created,
    /// Existing file content changed.
    Updated,
    /// Nothing to do: target already exists, or no directive applied.
    Skipped,
    /// Update target missing.
    Error,
}

/// Per-file record of an action taken by a plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub outcome: ActionOutcome,
    /// Project-relative path the action targeted.
    pub path: String,
    /// Extra detail for `Error` outcomes.
    pub detail: Option<String>,
}

/// Orchestrates file creation and patching inside a project root.
pub struct FileActions {
    project_root: PathBuf,
    injector: Injector,
    reports: Vec<ActionReport>,
}

impl FileActions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            injector: Injector::new(),
            reports: Vec::new(),
        }
    }

    /// The project root relative paths resolve against.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Reports recorded so far, in call order.
    pub fn reports(&self) -> &[ActionReport] {
        &self.reports
    }

    /// Drain the recorded reports (e.g. between plugins).
    pub fn take_reports(&mut self) -> Vec<ActionReport> {
        std::mem::take(&mut self.reports)
    }

    /// Create a file unless it already exists.
    ///
    /// Never overwrites: the user may have edited a previously generated
    /// file, so an existing target is reported as skipped.
    pub fn create_file(&mut self, relative: &str, content: &str) -> Result<ActionOutcome> {
        let target = self.project_root.join(relative);

        if target.exists() {
            return Ok(self.record(ActionOutcome::Skipped, relative, None));
        }

        starter_fs::io::write_text(&target, content)?;
        Ok(self.record(ActionOutcome::Created, relative, None))
    }

    /// Patch an existing file with the given directives.
    ///
    /// A missing target is an `Error` outcome, not a hard failure: the
    /// remaining actions of the batch still run. The file is written back
    /// only when a directive actually changed it.
    pub fn update_file(&mut self, relative: &str, directives: &[Directive]) -> Result<ActionOutcome> {
        let target = self.project_root.join(relative);

        if !target.is_file() {
            return Ok(self.record(ActionOutcome::Error, relative, Some("not found".into())));
        }

        let content = starter_fs::io::read_text(&target)?;
        let outcome = self.injector.apply(&content, directives);

        if outcome.changed {
            starter_fs::io::write_text(&target, &outcome.content)?;
            Ok(self.record(ActionOutcome::Updated, relative, None))
        } else {
            Ok(self.record(ActionOutcome::Skipped, relative, None))
        }
    }

    fn record(
        &mut self,
        outcome: ActionOutcome,
        relative: &str,
        detail: Option<String>,
    ) -> ActionOutcome {
        debug!("{outcome:?} {relative}");
        self.reports.push(ActionReport {
            outcome,
            path: relative.to_string(),
            detail,
        });
        outcome
    }
}
