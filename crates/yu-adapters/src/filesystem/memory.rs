//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use yu_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{YuError, YuResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle while a service owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    executables: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_parents(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        if let Some(parent) = path.parent() {
            for component in parent.components() {
                current.push(component);
                self.directories.insert(current.clone());
            }
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories (builder style).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        self.insert(path.as_ref(), content.as_ref(), false);
        self
    }

    /// Add an executable file, creating its parent directories.
    pub fn with_executable(self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        self.insert(path.as_ref(), content.as_ref(), true);
        self
    }

    /// Add an empty directory.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        {
            let mut inner = self.write_lock();
            let path = path.as_ref();
            inner.add_parents(path);
            inner.directories.insert(path.to_path_buf());
        }
        self
    }

    /// Read a file's content as UTF-8 (testing helper).
    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.read_lock();
        inner
            .files
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read_lock().files.keys().cloned().collect()
    }

    fn insert(&self, path: &Path, content: &[u8], executable: bool) {
        let mut inner = self.write_lock();
        inner.add_parents(path);
        inner.files.insert(path.to_path_buf(), content.to_vec());
        if executable {
            inner.executables.insert(path.to_path_buf());
        }
    }

    // A poisoned lock only follows a panic in another test thread.
    fn read_lock(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.read_lock();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.read_lock().files.contains_key(path)
    }

    fn is_executable(&self, path: &Path) -> bool {
        let inner = self.read_lock();
        inner.files.contains_key(path) && inner.executables.contains(path)
    }

    fn subdirectories(&self, path: &Path) -> YuResult<Vec<String>> {
        let inner = self.read_lock();
        if !path.as_os_str().is_empty() && !inner.directories.contains(path) {
            return Err(not_found(path));
        }

        Ok(inner
            .directories
            .iter()
            .filter(|dir| dir.parent() == Some(path))
            .filter_map(|dir| dir.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    fn walk_files(&self, root: &Path) -> YuResult<Vec<PathBuf>> {
        let inner = self.read_lock();
        if !inner.directories.contains(root) {
            return Err(not_found(root));
        }

        Ok(inner
            .files
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect())
    }

    fn create_dir_all(&self, path: &Path) -> YuResult<()> {
        let mut inner = self.write_lock();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> YuResult<String> {
        let inner = self.read_lock();
        let bytes = inner.files.get(path).ok_or_else(|| not_found(path))?;
        String::from_utf8(bytes.clone()).map_err(|_| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File is not valid UTF-8".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> YuResult<()> {
        let mut inner = self.write_lock();

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn append_file(&self, path: &Path, content: &[u8]) -> YuResult<()> {
        let mut inner = self.write_lock();
        inner
            .files
            .entry(path.to_path_buf())
            .or_default()
            .extend_from_slice(content);
        Ok(())
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> YuResult<()> {
        let mut inner = self.write_lock();
        if !inner.files.contains_key(path) {
            return Err(not_found(path));
        }

        if executable {
            inner.executables.insert(path.to_path_buf());
        } else {
            inner.executables.remove(path);
        }
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> YuResult<()> {
        let mut inner = self.write_lock();
        inner.files.remove(path).ok_or_else(|| not_found(path))?;
        inner.executables.remove(path);
        Ok(())
    }
}

fn not_found(path: &Path) -> YuError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "No such file or directory".into(),
    }
    .into()
}
