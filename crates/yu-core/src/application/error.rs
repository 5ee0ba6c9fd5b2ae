//! Application layer errors.
//!
//! These errors represent failures while orchestrating commands and files.
//! Rule violations on values are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;
use crate::error::ErrorCategory;

/// Errors that occur while running a workflow.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A command exited non-zero and its policy was to abort.
    #[error("Command failed: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The shell itself could not be started.
    #[error("Could not start command '{command}': {reason}")]
    SpawnFailed { command: String, reason: String },

    /// At least one service's tests failed (all were run).
    #[error("Tests failed for: {}", failed.join(", "))]
    TestsFailed { failed: Vec<String> },

    /// Scaffold targets that already exist; nothing was written.
    #[error("The following services already exist in the project: {}", names.join(", "))]
    ServicesExist { names: Vec<String> },

    /// A `doctor` check failed.
    #[error("{hint}")]
    CheckFailed { check: &'static str, hint: String },

    /// Wrong number or shape of arguments.
    #[error("{0}")]
    InvalidInput(String),

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A marked template file could not be rendered.
    #[error("Failed to render {path}: {source}")]
    RenderFailed {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CommandFailed { code, .. } => {
                let mut hints = vec!["Check the command output above for details".into()];
                if *code == Some(127) {
                    hints.push("The program was not found; is it installed and on PATH?".into());
                }
                hints.push("Re-run with -v to echo every command".into());
                hints
            }
            Self::SpawnFailed { .. } => vec![
                "yu runs commands through 'sh -c'; ensure a POSIX shell is available".into(),
            ],
            Self::TestsFailed { failed } => failed
                .first()
                .map(|svc| format!("Re-run a single service: yu test {svc}"))
                .into_iter()
                .collect(),
            Self::ServicesExist { .. } => vec![
                "Choose different service names".into(),
                "No files were written".into(),
            ],
            Self::CheckFailed { check, .. } => vec![format!("Failed check: {check}")],
            Self::InvalidInput(_) => vec!["Use --help for usage information".into()],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::RenderFailed { source, .. } => source.suggestions(),
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CommandFailed { .. } | Self::SpawnFailed { .. } | Self::TestsFailed { .. } => {
                ErrorCategory::Command
            }
            Self::ServicesExist { .. } => ErrorCategory::Conflict,
            Self::CheckFailed { .. } => ErrorCategory::Environment,
            Self::InvalidInput(_) => ErrorCategory::Validation,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::RenderFailed { .. } => ErrorCategory::Template,
        }
    }
}
