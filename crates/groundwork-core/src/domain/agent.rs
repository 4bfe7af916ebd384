//! Coding-agent identity and selection.
//!
//! # Design
//!
//! Agent identity arrives from the generator as a free-form string. It is
//! parsed exactly once, at the [`AgentChoice::from_str`] boundary; past that
//! point only the closed enum circulates. The `"none"` sentinel is a
//! deliberate early-exit, not an error.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── CodingAgent ───────────────────────────────────────────────────────────────

/// A supported coding agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodingAgent {
    Claude,
    Codex,
}

impl CodingAgent {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Codex => "codex",
        }
    }

    /// Destination filename the shared agent README is copied to.
    pub const fn readme_destination(&self) -> &'static str {
        match self {
            Self::Claude => "CLAUDE.md",
            Self::Codex => "AGENTS.md",
        }
    }
}

impl fmt::Display for CodingAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AgentChoice ───────────────────────────────────────────────────────────────

/// The user's agent selection, including the "none" early-exit sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentChoice {
    /// No agent configured; both setup phases are no-ops.
    Skip,
    Agent(CodingAgent),
}

impl AgentChoice {
    pub const fn agent(&self) -> Option<CodingAgent> {
        match self {
            Self::Skip => None,
            Self::Agent(a) => Some(*a),
        }
    }
}

impl FromStr for AgentChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::Skip),
            "claude" => Ok(Self::Agent(CodingAgent::Claude)),
            "codex" => Ok(Self::Agent(CodingAgent::Codex)),
            other => Err(DomainError::UnsupportedAgent(other.to_string())),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "Claude".parse::<AgentChoice>().unwrap(),
            AgentChoice::Agent(CodingAgent::Claude)
        );
        assert_eq!(
            "CODEX".parse::<AgentChoice>().unwrap(),
            AgentChoice::Agent(CodingAgent::Codex)
        );
        assert_eq!("NONE".parse::<AgentChoice>().unwrap(), AgentChoice::Skip);
    }

    #[test]
    fn unknown_agent_is_a_validation_error() {
        assert!(matches!(
            "copilot".parse::<AgentChoice>(),
            Err(DomainError::UnsupportedAgent(_))
        ));
    }

    #[test]
    fn readme_destinations() {
        assert_eq!(CodingAgent::Claude.readme_destination(), "CLAUDE.md");
        assert_eq!(CodingAgent::Codex.readme_destination(), "AGENTS.md");
    }
}
