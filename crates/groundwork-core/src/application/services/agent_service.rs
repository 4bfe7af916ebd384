//! Coding-agent setup: file materialization and environment initialization.
//!
//! The two phases are separate entry points invoked at different points in
//! the pipeline: file materialization reads from the `data/` scaffolding and
//! must run before that directory is removed; environment initialization runs
//! the agent executable afterwards. Callers invoke them in that order.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::application::error::PipelineError;
use crate::application::ports::{ExternalCommand, Filesystem, OutputMode, ProcessRunner};
use crate::domain::{AgentChoice, CodingAgent};
use crate::error::GroundworkResult;

/// Shared agent README inside the rendered scaffolding.
const AGENT_README_SOURCE: &str = "data/AGENTS_README.md";
/// Agent configuration directory inside the rendered scaffolding.
const CLAUDE_CONFIG_SOURCE: &str = "data/.claude";
const CLAUDE_CONFIG_DESTINATION: &str = ".claude";

const CLAUDE_INSTALL_HINT: &str = "npm install -g @anthropic-ai/claude-code";
const CODEX_INSTALL_HINT: &str = "npm install -g @openai/codex";

/// Per-agent file and process setup.
pub struct AgentSetup<'a> {
    runner: &'a dyn ProcessRunner,
    fs: &'a dyn Filesystem,
}

impl<'a> AgentSetup<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, fs: &'a dyn Filesystem) -> Self {
        Self { runner, fs }
    }

    /// File-materialization phase.
    ///
    /// Copies the shared README to the agent's destination filename, and for
    /// claude additionally the `.claude` configuration directory. Reads from
    /// the scaffolding, so it must run before scaffolding removal.
    pub fn materialize_files(&self, choice: AgentChoice) -> GroundworkResult<()> {
        let Some(agent) = choice.agent() else {
            return Ok(());
        };
        info!(%agent, "setting up coding agent files");

        let source = Path::new(AGENT_README_SOURCE);
        let destination = Path::new(agent.readme_destination());
        self.fs.copy_file(source, destination)?;
        info!(
            "copied {} to {}",
            source.display(),
            destination.display()
        );

        if agent == CodingAgent::Claude {
            self.fs.copy_dir(
                Path::new(CLAUDE_CONFIG_SOURCE),
                Path::new(CLAUDE_CONFIG_DESTINATION),
            )?;
        }

        Ok(())
    }

    /// Environment-initialization phase.
    ///
    /// Runs the agent executable interactively. A launch failure surfaces as
    /// a dependency error carrying the agent's install hint.
    pub fn initialize_environment(&self, choice: AgentChoice) -> GroundworkResult<()> {
        let Some(agent) = choice.agent() else {
            return Ok(());
        };
        info!(%agent, "initializing coding agent environment");

        match agent {
            CodingAgent::Claude => {
                info!("type /init in claude to finish setup and then exit");
                let exe = claude_executable();
                self.run_agent(
                    ExternalCommand::new(exe.to_string_lossy()),
                    agent,
                    CLAUDE_INSTALL_HINT,
                )
            }
            CodingAgent::Codex => {
                self.run_agent(ExternalCommand::new("codex"), agent, CODEX_INSTALL_HINT)
            }
        }
    }

    fn run_agent(
        &self,
        command: ExternalCommand,
        agent: CodingAgent,
        install_hint: &str,
    ) -> GroundworkResult<()> {
        match self.runner.run(&command, OutputMode::Inherit, true) {
            Ok(_) => Ok(()),
            Err(PipelineError::ProgramNotFound { .. }) => {
                Err(PipelineError::DependencyMissing {
                    program: agent.as_str().to_string(),
                    install_hint: install_hint.to_string(),
                }
                .into())
            }
            Err(other) => Err(other.into()),
        }
    }
}

/// Claude installs a local launcher under the user's home directory.
fn claude_executable() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(".claude/local/claude")
}

// ── tests ─────────────────────────────────────────────────────────────────────
