//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `yu-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{Completion, TemplateFile};
use crate::error::YuResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `yu_adapters::filesystem::LocalFilesystem` (production)
/// - `yu_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Check if path is a file with an executable bit set.
    fn is_executable(&self, path: &Path) -> bool;

    /// Names of the immediate subdirectories of `path`, symlinked
    /// directories included.
    fn subdirectories(&self, path: &Path) -> YuResult<Vec<String>>;

    /// Every file below `root`, recursively, hidden files included.
    fn walk_files(&self, root: &Path) -> YuResult<Vec<PathBuf>>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> YuResult<()>;

    fn read_to_string(&self, path: &Path) -> YuResult<String>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &[u8]) -> YuResult<()>;

    /// Append content to a file, creating it if missing.
    fn append_file(&self, path: &Path, content: &[u8]) -> YuResult<()>;

    /// Set or clear the executable bit.
    fn set_permissions(&self, path: &Path, executable: bool) -> YuResult<()>;

    fn remove_file(&self, path: &Path) -> YuResult<()>;
}

/// Port for running shell command lines.
///
/// Implemented by:
/// - `yu_adapters::runner::ShellRunner` (production, `sh -c`)
/// - `yu_adapters::runner::RecordingRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `command` to completion.
    ///
    /// With `show_output` false the child's stdout and stderr are discarded.
    /// Returns `Err` only when the command could not be started; a non-zero
    /// exit is a normal [`Completion`].
    fn run(&self, command: &str, show_output: bool) -> YuResult<Completion>;

    /// Replace the current process with `command`.
    ///
    /// On success the production implementation never returns.
    fn take_over(&self, command: &str) -> YuResult<()>;
}

/// Port for scaffold templates.
///
/// Implemented by:
/// - `yu_adapters::template::InlineTemplate` (built-in `ruby_base`)
/// - `yu_adapters::template::DirectoryTemplate` (a template directory on disk)
pub trait TemplateSource: Send + Sync {
    /// Human-readable name for logs.
    fn name(&self) -> &str;

    /// Every file of the template, paths relative to its root.
    fn files(&self) -> YuResult<Vec<TemplateFile>>;
}

/// Port for user-facing progress output.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter {
    /// A step is starting or a command is about to run.
    fn progress(&self, message: &str);

    /// The workflow finished successfully.
    fn success(&self, message: &str);
}
