//! Unified error handling for yu core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for yu core operations.
#[derive(Debug, Error, Clone)]
pub enum YuError {
    /// Errors from the domain layer (invalid names, template syntax).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (commands, files, checks).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl YuError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Template => ErrorCategory::Template,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments or names.
    Validation,
    /// Scaffold target already exists.
    Conflict,
    /// A template could not be rendered.
    Template,
    /// A subprocess failed or could not start.
    Command,
    /// The host is not ready (doctor).
    Environment,
    /// A filesystem operation failed.
    Internal,
}

/// Convenient result type alias.
pub type YuResult<T> = Result<T, YuError>;
