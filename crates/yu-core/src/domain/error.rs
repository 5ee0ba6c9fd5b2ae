// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so they can be wrapped with file context later)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },

    #[error("Template path must be relative and stay inside the template: {path}")]
    InvalidTemplatePath { path: String },

    // ========================================================================
    // Rendering Errors
    // ========================================================================
    #[error("Unknown template variable '{name}'")]
    UnknownTemplateVariable { name: String },

    #[error("Unsupported template tag '<%{tag}%>'")]
    UnsupportedTemplateTag { tag: String },

    #[error("Unterminated template tag starting at byte {offset}")]
    UnterminatedTemplateTag { offset: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidServiceName { name, .. } => vec![
                format!("'{name}' does not name a directory"),
                "Pass a service name (web) or a path to it (./services/web)".into(),
            ],
            Self::UnknownTemplateVariable { name } => vec![
                format!("Templates can only use <%= service_name %>, found '{name}'"),
            ],
            Self::UnsupportedTemplateTag { .. } => vec![
                "Only output tags like <%= service_name %> are rendered".into(),
                "Write '<%%' for a literal '<%'".into(),
            ],
            Self::UnterminatedTemplateTag { .. } => {
                vec!["Close every '<%' tag with '%>'".into()]
            }
            Self::InvalidTemplatePath { .. } => {
                vec!["Template files must live below the template root".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidServiceName { .. } => ErrorCategory::Validation,
            Self::InvalidTemplatePath { .. }
            | Self::UnknownTemplateVariable { .. }
            | Self::UnsupportedTemplateTag { .. }
            | Self::UnterminatedTemplateTag { .. } => ErrorCategory::Template,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
}
