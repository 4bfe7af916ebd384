//! Pipeline services.
//!
//! [`FinalizeService`] is the orchestrator; [`LicenseInstaller`],
//! [`AgentSetup`], and [`RemoteSetup`] are the sub-components it drives.
//! All of them reach the outside world only through the ports.

pub mod agent_service;
pub mod finalize_service;
pub mod license_service;
pub mod remote_service;

pub use agent_service::AgentSetup;
pub use finalize_service::FinalizeService;
pub use license_service::LicenseInstaller;
pub use remote_service::RemoteSetup;

use crate::application::error::PipelineError;
use crate::application::ports::{ExternalCommand, OutputMode, ProcessRunner};

/// Verify that a named external tool is installed and runnable.
///
/// Invokes the bare program with output suppressed. A launch failure becomes
/// [`PipelineError::DependencyMissing`] embedding `install_hint` verbatim; a
/// nonzero exit becomes the generic [`PipelineError::ProgramError`].
///
/// Called before every step whose absence would otherwise produce a confusing
/// downstream failure.
pub fn ensure_installed(
    runner: &dyn ProcessRunner,
    program: &str,
    install_hint: &str,
) -> Result<(), PipelineError> {
    match runner.run(&ExternalCommand::new(program), OutputMode::Suppress, true) {
        Ok(_) => Ok(()),
        Err(PipelineError::ProgramNotFound { .. }) => Err(PipelineError::DependencyMissing {
            program: program.to_string(),
            install_hint: install_hint.to_string(),
        }),
        Err(PipelineError::CommandFailed { .. }) => Err(PipelineError::ProgramError {
            program: program.to_string(),
        }),
        Err(other) => Err(other),
    }
}
