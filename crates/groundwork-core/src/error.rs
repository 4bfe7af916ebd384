//! Unified error handling for Groundwork Core.
//!
//! This module provides a unified error type that wraps domain and pipeline
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::PipelineError;
use crate::domain::DomainError;

/// Root error type for Groundwork Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// groundwork-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GroundworkError {
    /// Errors from the domain layer (validation failures).
    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the pipeline layer (external tools, filesystem).
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

impl GroundworkError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Pipeline(e) => e.suggestions(),
        }
    }

    /// Get error category for display/exit-code purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Pipeline(e) => match e {
                PipelineError::DependencyMissing { .. }
                | PipelineError::ProgramNotFound { .. } => ErrorCategory::MissingDependency,
                PipelineError::CommandFailed { .. } | PipelineError::ProgramError { .. } => {
                    ErrorCategory::External
                }
                PipelineError::Io { .. } => ErrorCategory::Io,
            },
        }
    }
}

/// Error categories for UI display and exit-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input caught by a pure check, before external side effects.
    Validation,
    /// A required external program is not installed.
    MissingDependency,
    /// An external program ran but misbehaved.
    External,
    /// File read/write failure.
    Io,
}

/// Convenient result type alias.
pub type GroundworkResult<T> = Result<T, GroundworkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_errors_categorize_as_validation() {
        let err = GroundworkError::from(DomainError::EmptyModuleName);
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn pipeline_errors_categorize_by_variant() {
        let missing = GroundworkError::from(PipelineError::DependencyMissing {
            program: "gh".into(),
            install_hint: "https://cli.github.com/".into(),
        });
        assert_eq!(missing.category(), ErrorCategory::MissingDependency);

        let failed = GroundworkError::from(PipelineError::CommandFailed {
            command: "git init".into(),
            code: Some(1),
        });
        assert_eq!(failed.category(), ErrorCategory::External);

        let io = GroundworkError::from(PipelineError::Io {
            path: PathBuf::from("pyproject.toml"),
            reason: "not found".into(),
        });
        assert_eq!(io.category(), ErrorCategory::Io);
    }

    #[test]
    fn suggestions_pass_through_from_inner_error() {
        let err = GroundworkError::from(PipelineError::DependencyMissing {
            program: "direnv".into(),
            install_hint: "pixi global install direnv".into(),
        });
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("pixi global install direnv"))
        );
    }
}
