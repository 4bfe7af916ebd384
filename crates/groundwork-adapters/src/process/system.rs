//! Process runner backed by `std::process::Command`.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use groundwork_core::application::{
    PipelineError,
    ports::{CommandResult, ExternalCommand, OutputMode, ProcessRunner},
};

/// Production process runner.
///
/// Commands execute in the current working directory with the inherited
/// environment. No shell is involved: the argument vector is passed through
/// verbatim.
#[derive(Debug, Clone, Copy)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(
        &self,
        command: &ExternalCommand,
        output: OutputMode,
        check: bool,
    ) -> Result<CommandResult, PipelineError> {
        debug!(%command, "running external command");

        let mut child = Command::new(command.program());
        child.args(command.argv());

        let result = match output {
            OutputMode::Inherit => child
                .status()
                .map(|status| CommandResult {
                    code: status.code(),
                    ..CommandResult::default()
                }),
            OutputMode::Suppress => child
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map(|status| CommandResult {
                    code: status.code(),
                    ..CommandResult::default()
                }),
            OutputMode::Capture => child.output().map(|out| CommandResult {
                code: out.status.code(),
                stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            }),
        };

        let result = result.map_err(|e| map_spawn_error(command, e))?;
        if check && !result.success() {
            return Err(PipelineError::CommandFailed {
                command: command.to_string(),
                code: result.code,
            });
        }
        Ok(result)
    }
}

/// "Executable not found" must stay distinguishable from "ran and failed".
fn map_spawn_error(command: &ExternalCommand, e: io::Error) -> PipelineError {
    if e.kind() == io::ErrorKind::NotFound {
        PipelineError::ProgramNotFound {
            program: command.program().to_string(),
        }
    } else {
        PipelineError::Io {
            path: PathBuf::from(command.program()),
            reason: format!("Failed to spawn: {e}"),
        }
    }
}
