//! The fully-resolved input to one finalization run.
//!
//! Every value here was produced by the outer template generator and has
//! already crossed its parse boundary: free-form strings (agent identity,
//! visibility, protocol, license) became domain enums in the CLI layer. The
//! request is constructed once and consumed by [`super::FinalizeService`].

use crate::domain::{AgentChoice, LicenseRequest, RemoteSettings};

/// Resolved configuration for a single pipeline run.
///
/// All fields are transient; nothing outlives the run.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizeRequest {
    /// Language version to pin in the manifest and CI workflow, e.g. `3.12`.
    pub language_version: String,
    /// License selection (or the skip sentinel).
    pub license: LicenseRequest,
    /// Whitespace-separated runtime dependency requirements.
    pub dependencies: String,
    /// Whitespace-separated development dependency requirements.
    pub dev_dependencies: String,
    /// Coding-agent selection.
    pub agent: AgentChoice,
    /// Package name, used when creating the hosted repository.
    pub package_name: String,
    /// Remote name, default branch, and hosting/url target.
    pub remote: RemoteSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Protocol, RemoteTarget};

    #[test]
    fn request_is_plain_data() {
        let request = FinalizeRequest {
            language_version: "3.12".into(),
            license: LicenseRequest::Named("MIT".into()),
            dependencies: "pytest".into(),
            dev_dependencies: String::new(),
            agent: AgentChoice::Skip,
            package_name: "my_package".into(),
            remote: RemoteSettings {
                name: "origin".into(),
                default_branch: "master".into(),
                target: RemoteTarget::Url {
                    url: "https://github.com/user/repo.git".into(),
                    protocol: Protocol::Git,
                },
            },
        };
        assert_eq!(request.clone(), request);
    }
}
