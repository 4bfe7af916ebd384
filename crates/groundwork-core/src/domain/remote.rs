//! Remote-repository configuration: visibility, transport protocol, and the
//! url rewrite applied when the native git protocol is selected.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visibility levels accepted by the hosting CLI.
pub const VISIBILITY_OPTIONS: &[&str] = &["private", "internal", "public"];

// ── Visibility ────────────────────────────────────────────────────────────────

/// Access level of a hosted repository.
///
/// Validated at the parse boundary, before any external call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    Internal,
    Public,
}

impl Visibility {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Internal => "internal",
            Self::Public => "public",
        }
    }

    /// The hosting CLI flag form, e.g. `--private`.
    pub fn as_flag(&self) -> String {
        format!("--{}", self.as_str())
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private" => Ok(Self::Private),
            "internal" => Ok(Self::Internal),
            "public" => Ok(Self::Public),
            other => Err(DomainError::InvalidVisibility {
                requested: other.to_string(),
                options: VISIBILITY_OPTIONS,
            }),
        }
    }
}

// ── Protocol ──────────────────────────────────────────────────────────────────

/// Transport protocol for an existing remote url.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Native git transport; the url is rewritten to `git@host:path` form.
    #[default]
    Git,
    /// Web transport; the url is attached unchanged.
    Https,
}

impl Protocol {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "git" => Ok(Self::Git),
            "https" => Ok(Self::Https),
            other => Err(DomainError::UnsupportedProtocol(other.to_string())),
        }
    }
}

// ── RemoteTarget ──────────────────────────────────────────────────────────────

/// What to do about the remote end of the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteTarget {
    /// Create a new hosted repository with the given visibility and attach it.
    Host { visibility: Visibility },
    /// Attach an existing remote url (rewritten per protocol).
    Url { url: String, protocol: Protocol },
}

/// Names the pipeline attaches to the remote end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSettings {
    /// Remote name, e.g. `origin`.
    pub name: String,
    /// Default branch for upstream tracking, e.g. `master`.
    pub default_branch: String,
    pub target: RemoteTarget,
}

// ── url rewriting ─────────────────────────────────────────────────────────────

/// Rewrite a web url into its native-transport form.
///
/// `https://github.com/user/repo.git` becomes `git@github.com:user/repo.git`.
/// With [`Protocol::Https`] the url is returned unchanged.
pub fn rewrite_remote_url(url: &str, protocol: Protocol) -> Result<String, DomainError> {
    if protocol == Protocol::Https {
        return Ok(url.to_string());
    }

    // scheme: // host / path  — split into at most four '/'-separated pieces.
    let mut parts = url.splitn(4, '/');
    let scheme = parts.next().unwrap_or_default();
    let empty = parts.next();
    let host = parts.next();
    let path = parts.next();

    match (empty, host, path) {
        (Some(""), Some(host), Some(path))
            if scheme.ends_with(':') && !host.is_empty() && !path.is_empty() =>
        {
            Ok(format!("git@{host}:{path}"))
        }
        _ => Err(DomainError::InvalidRemoteUrl {
            url: url.to_string(),
            reason: "expected <scheme>://<host>/<path>".into(),
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
