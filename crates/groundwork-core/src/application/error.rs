//! Application layer errors.
//!
//! These errors represent failures while driving external tools and the
//! filesystem, not validation of user input. Validation errors are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that occur while the pipeline talks to the outside world.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    /// A required external program is not installed; carries the install hint.
    #[error("{program} is not installed; install with `{install_hint}`")]
    DependencyMissing {
        program: String,
        install_hint: String,
    },

    /// An executable could not be launched (not found on PATH).
    ///
    /// Raised by the process runner; the availability checker upgrades this
    /// to [`Self::DependencyMissing`] when it knows an install hint.
    #[error("executable not found: {program}")]
    ProgramNotFound { program: String },

    /// An external program ran but exited nonzero with exit-check enabled.
    #[error("command failed: `{command}`{}", .code.map(|c| format!(" (exit code {c})")).unwrap_or_default())]
    CommandFailed { command: String, code: Option<i32> },

    /// A checked program is installed but misbehaving.
    #[error("issue with {program} encountered")]
    ProgramError { program: String },

    /// File read/write error during transformation or copying.
    #[error("I/O error at {path}: {reason}")]
    Io { path: PathBuf, reason: String },
}

impl PipelineError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DependencyMissing {
                program,
                install_hint,
            } => vec![
                format!("'{program}' was not found on your PATH"),
                format!("Install with: {install_hint}"),
            ],
            Self::ProgramNotFound { program } => vec![
                format!("'{program}' was not found on your PATH"),
                "Ensure the program is installed and PATH is up to date".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("The command `{command}` reported an error"),
                "Check the command output above for details".into(),
            ],
            Self::ProgramError { program } => vec![
                format!("'{program}' is installed but did not run cleanly"),
                format!("Try running `{program}` by hand to diagnose"),
            ],
            Self::Io { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the project tree was fully rendered".into(),
                "Check file permissions".into(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_missing_embeds_hint_verbatim() {
        let err = PipelineError::DependencyMissing {
            program: "direnv".into(),
            install_hint: "pixi global install direnv".into(),
        };
        assert_eq!(
            err.to_string(),
            "direnv is not installed; install with `pixi global install direnv`"
        );
    }

    #[test]
    fn command_failed_formats_exit_code() {
        let err = PipelineError::CommandFailed {
            command: "git commit -m Setup".into(),
            code: Some(128),
        };
        assert!(err.to_string().contains("exit code 128"));

        let killed = PipelineError::CommandFailed {
            command: "git init".into(),
            code: None,
        };
        assert!(!killed.to_string().contains("exit code"));
    }
}
