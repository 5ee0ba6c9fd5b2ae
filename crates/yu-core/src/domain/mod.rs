//! Core domain layer for yu.
//!
//! Pure logic only: service names and markers, command lines, template
//! rendering and the project settings that parameterise them.  Anything that
//! touches processes or the disk goes through the ports in
//! `crate::application::ports`.
//!
//! - **No I/O**: no filesystem, process or terminal access
//! - **No external crates**: only std + thiserror
//! - **Value objects validate on construction** (`ServiceName`, `TemplateFile`)

pub mod compose;
pub mod error;
pub mod invocation;
pub mod render;
pub mod service;
pub mod settings;
pub mod template;

pub use compose::{CommandLine, Compose};
pub use error::{DomainError, ErrorCategory};
pub use invocation::{Completion, FailurePolicy, Invocation};
pub use render::RenderContext;
pub use service::{Marker, Service, ServiceName};
pub use settings::ProjectSettings;
pub use template::{TemplateFile, strip_marker};
