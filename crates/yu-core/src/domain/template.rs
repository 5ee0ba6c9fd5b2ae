use std::path::{Component, Path, PathBuf};

use super::DomainError;

/// One file of a scaffold template.
///
/// Invariant: `path` is relative and never climbs out of the template root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    path: PathBuf,
    contents: Vec<u8>,
    executable: bool,
}

impl TemplateFile {
    pub fn new(
        path: impl Into<PathBuf>,
        contents: impl Into<Vec<u8>>,
        executable: bool,
    ) -> Result<Self, DomainError> {
        let path = path.into();
        let escapes = path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if path.as_os_str().is_empty() || escapes {
            return Err(DomainError::InvalidTemplatePath {
                path: path.display().to_string(),
            });
        }

        Ok(Self {
            path,
            contents: contents.into(),
            executable,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn is_executable(&self) -> bool {
        self.executable
    }
}

/// If `path`'s file name ends in `suffix`, the path with the suffix removed.
///
/// A file named exactly `suffix` is not a render target.
pub fn strip_marker(path: &Path, suffix: &str) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(suffix)?;
    if stem.is_empty() {
        return None;
    }
    Some(path.with_file_name(stem))
}
