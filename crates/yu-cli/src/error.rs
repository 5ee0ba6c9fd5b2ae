//! Error handling for the yu CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//!
//! Every failure exits with status 1.  Argument-parse errors never reach
//! this module; clap reports them itself with status 2.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use yu_core::error::YuError;

// Re-export so callers only need `use crate::error::*`.
pub use yu_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input detected by the CLI itself.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `yu-core`.
    ///
    /// Displayed unchanged: the core messages are already user-facing.
    #[error("{0}")]
    Core(#[from] YuError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec!["Use --help for usage information".into()],

            Self::ConfigError { .. } => {
                let mut hints = vec![format!(
                    "Check {} in the project directory, or the file passed with --config",
                    crate::config::PROJECT_CONFIG_FILE
                )];
                if let Some(path) = crate::config::AppConfig::config_path() {
                    hints.push(format!("Check your user config at {}", path.display()));
                }
                hints.push("Check YU_* environment variables".into());
                hints
            }

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { .. } => vec!["Check file permissions".into()],
        }
    }

    /// Get the error category for styling and logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict | CoreCategory::Template => {
                    ErrorCategory::UserError
                }
                CoreCategory::Command => ErrorCategory::Command,
                CoreCategory::Environment => ErrorCategory::Environment,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        // Main error message
        output.push_str(&format!("  {}\n", self.to_string().red()));

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        // Suggestions
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Command => tracing::warn!("Command error: {}", self),
            ErrorCategory::Environment => tracing::warn!("Environment check failed: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments, name conflicts, template problems.
    UserError,
    /// A subprocess failed or could not start.
    Command,
    /// `doctor` found the host not ready.
    Environment,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for anyhow::Result<T> {
    /// Bootstrap failures (configuration loading) become
    /// [`CliError::ConfigError`] with the full context chain as message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: format!("{}: {e:#}", f().into()),
            source: Some(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use yu_core::application::ApplicationError;

    fn core(err: ApplicationError) -> CliError {
        CliError::Core(err.into())
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn core_suggestions_pass_through() {
        let err = core(ApplicationError::ServicesExist {
            names: vec!["web".into()],
        });
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("No files were written"))
        );
    }

    #[test]
    fn config_error_mentions_project_file() {
        let err = CliError::ConfigError {
            message: "bad".into(),
            source: None,
        };
        assert!(err.suggestions().iter().any(|s| s.contains("yu.toml")));
    }

    // ── display ───────────────────────────────────────────────────────────

    #[test]
    fn core_errors_display_unchanged() {
        let err = core(ApplicationError::InvalidInput("One at a time please!".into()));
        assert_eq!(err.to_string(), "One at a time please!");
    }

    #[test]
    fn command_failure_names_the_command() {
        let err = core(ApplicationError::CommandFailed {
            command: "docker-compose kill".into(),
            code: Some(1),
        });
        assert_eq!(err.to_string(), "Command failed: docker-compose kill");
        assert_eq!(err.category(), ErrorCategory::Command);
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn every_failure_exits_one() {
        let errors = [
            CliError::InvalidInput {
                message: "x".into(),
            },
            CliError::ConfigError {
                message: "x".into(),
                source: None,
            },
            core(ApplicationError::TestsFailed {
                failed: vec!["b".into()],
            }),
            CliError::from(io::Error::other("disk")),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn doctor_failures_are_environment_errors() {
        let err = core(ApplicationError::CheckFailed {
            check: "container runtime",
            hint: "Please ensure you have docker working".into(),
        });
        assert_eq!(err.category(), ErrorCategory::Environment);
    }

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn plain_format_has_no_ansi() {
        let err = core(ApplicationError::InvalidInput("Please provide service".into()));
        let out = err.format_plain(false);
        assert!(out.contains("Error: Please provide service"));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn verbose_plain_format_shows_cause() {
        let err = CliError::IoError {
            message: "write output".into(),
            source: io::Error::other("broken pipe"),
        };
        assert!(err.format_plain(true).contains("Caused by: broken pipe"));
        assert!(!err.format_plain(false).contains("Caused by"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn io_context_is_attached() {
        let result: io::Result<()> = Err(io::Error::other("denied"));
        let err = result.with_cli_context(|| "write completions").unwrap_err();
        assert_eq!(err.to_string(), "I/O error: write completions");
    }

    #[test]
    fn anyhow_becomes_config_error() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("missing field"));
        let err = result.with_cli_context(|| "load config").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().contains("missing field"));
    }
}
