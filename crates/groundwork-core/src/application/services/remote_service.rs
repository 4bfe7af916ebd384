//! Remote registration: hosted-repository creation or plain remote attach.

use tracing::{error, info};

use crate::application::error::PipelineError;
use crate::application::ports::{ExternalCommand, OutputMode, ProcessRunner};
use crate::application::services::ensure_installed;
use crate::domain::{Protocol, RemoteSettings, RemoteTarget, Visibility, rewrite_remote_url};
use crate::error::GroundworkResult;

const HOSTING_CLI: &str = "gh";
const HOSTING_CLI_INSTALL_HINT: &str = "https://cli.github.com/";

/// Decides between creating a hosted repository and attaching a literal url.
pub struct RemoteSetup<'a> {
    runner: &'a dyn ProcessRunner,
}

impl<'a> RemoteSetup<'a> {
    pub fn new(runner: &'a dyn ProcessRunner) -> Self {
        Self { runner }
    }

    pub fn configure(&self, package_name: &str, settings: &RemoteSettings) -> GroundworkResult<()> {
        match &settings.target {
            RemoteTarget::Host { visibility } => {
                self.create_hosted_repository(package_name, *visibility, settings)
            }
            RemoteTarget::Url { url, protocol } => {
                self.add_remote(&settings.name, url, *protocol)
            }
        }
    }

    /// Create a repository on the hosting service and point upstream at it.
    ///
    /// Creation failure and upstream-configuration failure are recorded but
    /// do not abort the pipeline; a missing hosting CLI does.
    fn create_hosted_repository(
        &self,
        package_name: &str,
        visibility: Visibility,
        settings: &RemoteSettings,
    ) -> GroundworkResult<()> {
        ensure_installed(self.runner, HOSTING_CLI, HOSTING_CLI_INSTALL_HINT)?;

        info!(package = package_name, %visibility, "creating hosted repository");
        let create = ExternalCommand::new(HOSTING_CLI)
            .args(["repo", "create", package_name])
            .arg(visibility.as_flag())
            .args(["--remote", &settings.name])
            .args(["--source", "."]);
        match self.runner.run(&create, OutputMode::Inherit, true) {
            Ok(_) => {}
            Err(err @ PipelineError::CommandFailed { .. }) => {
                error!("error creating hosted repository, likely already exists: {err}");
            }
            Err(other) => return Err(other.into()),
        }

        let branch = &settings.default_branch;
        let upstream = [
            ExternalCommand::new("git").args([
                "config",
                &format!("branch.{branch}.remote"),
                &settings.name,
            ]),
            ExternalCommand::new("git").args([
                "config",
                &format!("branch.{branch}.merge"),
                &format!("refs/heads/{branch}"),
            ]),
        ];
        for command in upstream {
            match self.runner.run(&command, OutputMode::Inherit, true) {
                Ok(_) => {}
                Err(err @ PipelineError::CommandFailed { .. }) => {
                    error!("error setting upstream to {branch}: {err}");
                    break;
                }
                Err(other) => return Err(other.into()),
            }
        }

        Ok(())
    }

    /// Attach `url` as the named remote, rewriting it for the git protocol.
    pub fn add_remote(&self, remote: &str, url: &str, protocol: Protocol) -> GroundworkResult<()> {
        let url = rewrite_remote_url(url, protocol)?;
        info!(remote, url, "adding remote");
        self.runner.run(
            &ExternalCommand::new("git").args(["remote", "add", remote, &url]),
            OutputMode::Inherit,
            true,
        )?;
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{CommandResult, MockProcessRunner};
    use crate::domain::DomainError;
    use crate::error::GroundworkError;

    fn host_settings(visibility: Visibility) -> RemoteSettings {
        RemoteSettings {
            name: "origin".into(),
            default_branch: "master".into(),
            target: RemoteTarget::Host { visibility },
        }
    }

    #[test]
    fn add_remote_rewrites_git_protocol_urls() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|cmd, _, _| {
                cmd.program() == "git"
                    && cmd.argv()
                        == ["remote", "add", "origin", "git@github.com:user/repo.git"]
            })
            .times(1)
            .returning(|_, _, _| Ok(CommandResult::from_code(0)));

        RemoteSetup::new(&runner)
            .add_remote("origin", "https://github.com/user/repo.git", Protocol::Git)
            .unwrap();
    }

    #[test]
    fn add_remote_keeps_https_urls_unchanged() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|cmd, _, _| {
                cmd.argv()
                    == [
                        "remote",
                        "add",
                        "origin",
                        "https://github.com/user/repo.git",
                    ]
            })
            .times(1)
            .returning(|_, _, _| Ok(CommandResult::from_code(0)));

        RemoteSetup::new(&runner)
            .add_remote(
                "origin",
                "https://github.com/user/repo.git",
                Protocol::Https,
            )
            .unwrap();
    }

    #[test]
    fn malformed_url_fails_before_any_external_call() {
        let runner = MockProcessRunner::new(); // panics on any call

        let err = RemoteSetup::new(&runner)
            .add_remote("origin", "not-a-url", Protocol::Git)
            .unwrap_err();
        assert!(matches!(
            err,
            GroundworkError::Domain(DomainError::InvalidRemoteUrl { .. })
        ));
    }

    #[test]
    fn repo_creation_failure_does_not_abort_upstream_config() {
        let mut runner = MockProcessRunner::new();
        // Availability probe succeeds.
        runner
            .expect_run()
            .withf(|cmd, _, _| cmd.program() == "gh" && cmd.argv().is_empty())
            .times(1)
            .returning(|_, _, _| Ok(CommandResult::from_code(0)));
        // Creation fails nonzero (e.g. repository already exists).
        runner
            .expect_run()
            .withf(|cmd, _, _| cmd.program() == "gh" && cmd.argv().first().map(String::as_str) == Some("repo"))
            .times(1)
            .returning(|cmd, _, _| {
                Err(PipelineError::CommandFailed {
                    command: cmd.to_string(),
                    code: Some(1),
                })
            });
        // Both upstream config calls still execute.
        runner
            .expect_run()
            .withf(|cmd, _, _| cmd.program() == "git")
            .times(2)
            .returning(|_, _, _| Ok(CommandResult::from_code(0)));

        RemoteSetup::new(&runner)
            .configure("my_package", &host_settings(Visibility::Private))
            .unwrap();
    }

    #[test]
    fn upstream_failure_skips_second_config_call_but_succeeds() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|cmd, _, _| cmd.program() == "gh")
            .returning(|_, _, _| Ok(CommandResult::from_code(0)));
        // First git config fails; the merge config must not run.
        runner
            .expect_run()
            .withf(|cmd, _, _| cmd.program() == "git")
            .times(1)
            .returning(|cmd, _, _| {
                Err(PipelineError::CommandFailed {
                    command: cmd.to_string(),
                    code: Some(128),
                })
            });

        RemoteSetup::new(&runner)
            .configure("my_package", &host_settings(Visibility::Public))
            .unwrap();
    }

    #[test]
    fn missing_hosting_cli_is_fatal() {
        let mut runner = MockProcessRunner::new();
        runner.expect_run().returning(|cmd, _, _| {
            Err(PipelineError::ProgramNotFound {
                program: cmd.program().to_string(),
            })
        });

        let err = RemoteSetup::new(&runner)
            .configure("my_package", &host_settings(Visibility::Internal))
            .unwrap_err();
        assert!(matches!(
            err,
            GroundworkError::Pipeline(PipelineError::DependencyMissing { .. })
        ));
    }

    #[test]
    fn create_command_carries_visibility_flag() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|cmd, _, _| cmd.program() == "gh" && cmd.argv().is_empty())
            .returning(|_, _, _| Ok(CommandResult::from_code(0)));
        runner
            .expect_run()
            .withf(|cmd, _, _| {
                cmd.program() == "gh"
                    && cmd.argv()
                        == [
                            "repo",
                            "create",
                            "my_package",
                            "--internal",
                            "--remote",
                            "origin",
                            "--source",
                            ".",
                        ]
            })
            .times(1)
            .returning(|_, _, _| Ok(CommandResult::from_code(0)));
        runner
            .expect_run()
            .withf(|cmd, _, _| cmd.program() == "git")
            .returning(|_, _, _| Ok(CommandResult::from_code(0)));

        RemoteSetup::new(&runner)
            .configure("my_package", &host_settings(Visibility::Internal))
            .unwrap();
    }
}
