//! Infrastructure adapters for yu.
//!
//! This crate implements the ports defined in `yu-core::application::ports`.
//! It contains all process and disk I/O.

pub mod filesystem;
pub mod runner;
pub mod template;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use runner::{RecordedCall, RecordingRunner, ShellRunner};
pub use template::{DirectoryTemplate, InlineFile, InlineTemplate};
