use thiserror::Error;

/// Root domain error type.
///
/// Every variant is a validation failure: bad input caught by a pure check,
/// raised before any external side effect for the step concerned.
///
/// All errors are:
/// - Cloneable (callers may report and re-wrap)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // License selection
    // ========================================================================
    #[error("license '{requested}' is not available; select from: {available:?}")]
    LicenseNotAvailable {
        requested: String,
        available: Vec<String>, // populated from the catalog scan, sorted
    },

    // ========================================================================
    // Coding agent selection
    // ========================================================================
    #[error("unsupported coding agent '{0}'")]
    UnsupportedAgent(String),

    // ========================================================================
    // Remote configuration
    // ========================================================================
    #[error("visibility '{requested}' is not one of {options:?}")]
    InvalidVisibility {
        requested: String,
        options: &'static [&'static str],
    },

    #[error("unsupported remote protocol '{0}'")]
    UnsupportedProtocol(String),

    #[error("cannot parse remote url '{url}': {reason}")]
    InvalidRemoteUrl { url: String, reason: String },

    // ========================================================================
    // Module name (pre-generation check)
    // ========================================================================
    #[error("module name cannot be empty")]
    EmptyModuleName,

    #[error("'{0}' is a Python keyword and cannot be used as a module name")]
    KeywordModuleName(String),

    #[error("'{0}' is not a valid Python module name")]
    InvalidModuleName(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LicenseNotAvailable { available, .. } => {
                let mut s = vec!["Available licenses:".into()];
                for lic in available {
                    s.push(format!("  \u{2022} {lic}"));
                }
                s.push("Or pass 'None' to skip license installation".into());
                s
            }
            Self::UnsupportedAgent(_) => vec![
                "Supported coding agents:".into(),
                "  \u{2022} claude".into(),
                "  \u{2022} codex".into(),
                "  \u{2022} none   - skip agent setup".into(),
            ],
            Self::InvalidVisibility { options, .. } => vec![
                format!("Choose one of: {}", options.join(", ")),
                "Or omit --visibility and pass --project-url instead".into(),
            ],
            Self::UnsupportedProtocol(_) => {
                vec!["Supported protocols: git, https".into()]
            }
            Self::InvalidRemoteUrl { .. } => vec![
                "Expected a url of the form https://host/owner/repo.git".into(),
            ],
            Self::EmptyModuleName => vec!["Provide a non-empty module name".into()],
            Self::KeywordModuleName(_) => vec![
                "Python keywords cannot be used as module names".into(),
                "Append a suffix, e.g. 'class_' instead of 'class'".into(),
            ],
            Self::InvalidModuleName(_) => vec![
                "Module names must start with a letter".into(),
                "and contain only letters, digits, and underscores".into(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn license_error_lists_catalog() {
        let err = DomainError::LicenseNotAvailable {
            requested: "Nonexistent".into(),
            available: vec!["Apache-2.0".into(), "MIT".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Apache-2.0"));
        assert!(msg.contains("MIT"));
        assert!(err.suggestions().iter().any(|s| s.contains("MIT")));
    }

    #[test]
    fn agent_error_suggests_supported_agents() {
        let err = DomainError::UnsupportedAgent("copilot".into());
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("claude")));
        assert!(suggestions.iter().any(|s| s.contains("codex")));
    }
}
