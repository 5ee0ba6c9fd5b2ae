//! Template source backed by a directory on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;
use yu_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::TemplateFile,
    error::YuResult,
};

/// A scaffold template read from `root` each time it is used.
///
/// Every regular file below `root` is part of the template, hidden files
/// included.  Symlinks and other special files are skipped.
#[derive(Debug, Clone)]
pub struct DirectoryTemplate {
    root: PathBuf,
    name: String,
}

impl DirectoryTemplate {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = root.display().to_string();
        Self { root, name }
    }
}

impl TemplateSource for DirectoryTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn files(&self) -> YuResult<Vec<TemplateFile>> {
        if !self.root.is_dir() {
            return Err(ApplicationError::FilesystemError {
                path: self.root.clone(),
                reason: "Template directory does not exist".into(),
            }
            .into());
        }

        let mut files = Vec::new();

        // ── Walk the template tree ───────────────────────────────────────
        for entry in WalkDir::new(&self.root).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: self.root.clone(),
                reason: format!("directory walk error: {e}"),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let abs_path = entry.path();
            let rel_path = abs_path.strip_prefix(&self.root).map_err(|_| {
                ApplicationError::FilesystemError {
                    path: abs_path.to_path_buf(),
                    reason: format!("not below '{}'", self.root.display()),
                }
            })?;

            let contents = fs::read(abs_path).map_err(|e| ApplicationError::FilesystemError {
                path: abs_path.to_path_buf(),
                reason: format!("Failed to read template file: {e}"),
            })?;

            files.push(TemplateFile::new(
                rel_path,
                contents,
                is_executable(abs_path),
            )?);
        }

        debug!(count = files.len(), "loaded template files");
        Ok(files)
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    false
}
