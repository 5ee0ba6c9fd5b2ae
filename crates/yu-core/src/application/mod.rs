//! Application layer for yu.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ComposeService, ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences commands and file operations; the values
//! it works with and their rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ComposeService, Executor, ScaffoldService, ServiceDiscovery};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, Filesystem, Reporter, TemplateSource};

pub use error::ApplicationError;
