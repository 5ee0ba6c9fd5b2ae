//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use yu_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{YuError, YuResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_executable(&self, path: &Path) -> bool {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::metadata(path)
                .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
                .unwrap_or(false)
        }
        #[cfg(not(unix))]
        {
            path.is_file()
        }
    }

    fn subdirectories(&self, path: &Path) -> YuResult<Vec<String>> {
        let entries = fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "list directory"))?;
            // Follows symlinks: a linked service directory is still a service.
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn walk_files(&self, root: &Path) -> YuResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: root.to_path_buf(),
                reason: format!("Failed to walk directory: {e}"),
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn create_dir_all(&self, path: &Path) -> YuResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn read_to_string(&self, path: &Path) -> YuResult<String> {
        fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> YuResult<()> {
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn append_file(&self, path: &Path, content: &[u8]) -> YuResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "open file for append"))?;
        file.write_all(content)
            .map_err(|e| map_io_error(path, e, "append to file"))
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> YuResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
            let mut perms = metadata.permissions();
            let mode = perms.mode();
            perms.set_mode(if executable { mode | 0o111 } else { mode & !0o111 });
            fs::set_permissions(path, perms)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(not(unix))]
        {
            let _ = (path, executable);
        }
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> YuResult<()> {
        fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> YuError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn subdirectories_lists_only_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("web")).unwrap();
        fs::create_dir(tmp.path().join("api")).unwrap();
        fs::write(tmp.path().join("docker-compose.yml"), "").unwrap();

        let dirs = LocalFilesystem.subdirectories(tmp.path()).unwrap();
        assert_eq!(dirs, ["api", "web"]);
    }

    #[cfg(unix)]
    #[test]
    fn subdirectories_follow_symlinks() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("linked")).unwrap();
        fs::write(tmp.path().join("notes.txt"), "").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("notes.txt"), tmp.path().join("notes")).unwrap();

        let dirs = LocalFilesystem.subdirectories(tmp.path()).unwrap();
        assert_eq!(dirs, ["linked", "real"]);
    }

    #[test]
    fn walk_files_includes_hidden_and_nested() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("bin")).unwrap();
        fs::write(tmp.path().join(".dockerignore.erb"), "").unwrap();
        fs::write(tmp.path().join("bin/test"), "").unwrap();

        let files = LocalFilesystem.walk_files(tmp.path()).unwrap();
        assert!(files.contains(&tmp.path().join(".dockerignore.erb")));
        assert!(files.contains(&tmp.path().join("bin/test")));
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn append_creates_missing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("docker-compose.yml");

        LocalFilesystem.append_file(&path, b"a:\n").unwrap();
        LocalFilesystem.append_file(&path, b"b:\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a:\nb:\n");
    }

    #[cfg(unix)]
    #[test]
    fn set_permissions_toggles_executable_bit() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("seed");
        fs::write(&path, "#!/bin/sh\n").unwrap();

        assert!(!LocalFilesystem.is_executable(&path));
        LocalFilesystem.set_permissions(&path, true).unwrap();
        assert!(LocalFilesystem.is_executable(&path));
        LocalFilesystem.set_permissions(&path, false).unwrap();
        assert!(!LocalFilesystem.is_executable(&path));
    }

    #[test]
    fn read_missing_file_is_filesystem_error() {
        let tmp = TempDir::new().unwrap();
        let err = LocalFilesystem
            .read_to_string(&tmp.path().join("nope"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
