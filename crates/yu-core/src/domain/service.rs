//! Services and the markers that classify them.

use std::fmt;
use std::path::Path;

use super::DomainError;

/// Name of a service, which is also the name of its directory.
///
/// Invariant: a single, non-empty path component (never `.` or `..`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceName(String);

impl ServiceName {
    /// Create a service name from a bare directory name.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("name cannot be empty")
        } else if name == "." || name == ".." {
            Some("name cannot be a relative directory reference")
        } else if name.contains('/') || name.contains('\\') {
            Some("name cannot contain path separators")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidServiceName {
                name,
                reason: reason.into(),
            }),
            None => Ok(Self(name)),
        }
    }

    /// Normalise a command-line argument to a service name.
    ///
    /// Accepts either a bare name or a relative/absolute path to the service
    /// directory; only the final path component is kept, so `./services/foo`
    /// and `foo/` both become `foo`.
    pub fn from_arg(arg: &str) -> Result<Self, DomainError> {
        let base = Path::new(arg)
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DomainError::InvalidServiceName {
                name: arg.into(),
                reason: "cannot extract a directory name".into(),
            })?;
        Self::new(base)
    }

    /// Normalise every argument, failing on the first invalid one.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<Self>, DomainError> {
        args.iter().map(|a| Self::from_arg(a.as_ref())).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for ServiceName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file whose presence inside a service directory makes the service
/// eligible for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Dependency manifest (e.g. `Gemfile`): the service can be packaged.
    DependencyManifest,
    /// Test entrypoint (e.g. `bin/test`): the service can be tested.
    TestEntrypoint,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DependencyManifest => write!(f, "dependency manifest"),
            Self::TestEntrypoint => write!(f, "test entrypoint"),
        }
    }
}

/// A discovered service and the markers found in its directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub name: ServiceName,
    pub has_manifest: bool,
    pub has_test_entrypoint: bool,
}

impl Service {
    pub fn has(&self, marker: Marker) -> bool {
        match marker {
            Marker::DependencyManifest => self.has_manifest,
            Marker::TestEntrypoint => self.has_test_entrypoint,
        }
    }
}
