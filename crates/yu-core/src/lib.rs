//! yu Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for `yu`, a
//! container framework based on docker-compose, following hexagonal (ports
//! and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              yu-cli (CLI)               │
//! │      (Parses flags, picks adapters)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ComposeService, ScaffoldService)     │
//! │     Executor, ServiceDiscovery          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, CommandRunner, Template)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      yu-adapters (Infrastructure)       │
//! │ (LocalFilesystem, ShellRunner, etc)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use yu_core::prelude::*;
//!
//! let service = ComposeService::new(runner, filesystem, reporter, ProjectSettings::default(), ".");
//! service.test(&["web"])?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComposeService, ScaffoldService,
        ports::{CommandRunner, Filesystem, Reporter, TemplateSource},
    };
    pub use crate::domain::{
        Completion, Invocation, Marker, ProjectSettings, RenderContext, ServiceName, TemplateFile,
    };
    pub use crate::error::{YuError, YuResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
