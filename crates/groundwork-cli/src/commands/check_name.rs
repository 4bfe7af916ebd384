//! Implementation of the `groundwork check-name` command.
//!
//! The pre-generation gate: validates a module name before the template
//! engine renders anything. Exit code 0 means the name is usable; a
//! validation failure exits 2 with the specific reason.

use tracing::instrument;

use groundwork_core::domain::validate_module_name;
use groundwork_core::error::GroundworkError;

use crate::{
    cli::CheckNameArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `groundwork check-name` command.
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(args: CheckNameArgs, output: OutputManager) -> CliResult<()> {
    validate_module_name(&args.name)
        .map_err(|e| CliError::Core(GroundworkError::from(e)))?;

    output.success(&format!("'{}' is a valid module name", args.name))?;
    Ok(())
}
