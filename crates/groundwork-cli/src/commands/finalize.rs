//! Implementation of the `groundwork finalize` command.
//!
//! Responsibility: translate CLI arguments into a `FinalizeRequest`, call the
//! core pipeline service, and display results. No pipeline logic lives here.

use std::path::Path;

use tracing::{debug, info, instrument};

use groundwork_adapters::{LocalFilesystem, SystemProcessRunner};
use groundwork_core::{
    application::{FinalizeRequest, FinalizeService},
    domain::{
        AgentChoice, LicenseRequest, Protocol, RemoteSettings, RemoteTarget, Visibility,
    },
    error::GroundworkError,
};

use crate::{
    cli::{FinalizeArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

/// Execute the `groundwork finalize` command.
///
/// Dispatch sequence:
/// 1. Parse the free-form values through the core domain boundaries
/// 2. Resolve remote defaults (flag > config file > built-in)
/// 3. Early-exit if `--dry-run`
/// 4. Enter the project directory and run the pipeline
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(package = %args.package_name))]
pub fn execute(
    args: FinalizeArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validation boundaries: the raw strings never travel further.
    let request = build_request(&args, &config)?;

    debug!(
        language_version = %request.language_version,
        agent = ?request.agent,
        remote = %request.remote.name,
        "request resolved"
    );

    // 2. Dry run: describe but do not touch anything.
    if args.dry_run {
        show_plan(&request, &args, &output)?;
        return Ok(());
    }

    // 3. The pipeline operates on the current working directory, exactly the
    //    way the external tools it shells out to do.
    if args.project_dir != Path::new(".") {
        std::env::set_current_dir(&args.project_dir).with_cli_context(|| {
            format!("cannot enter project directory {}", args.project_dir.display())
        })?;
    }

    // 4. Create adapters and run.
    let service = FinalizeService::new(
        Box::new(SystemProcessRunner::new()),
        Box::new(LocalFilesystem::new()),
    );

    output.header(&format!("Finalizing '{}'...", args.package_name))?;
    info!(package = %args.package_name, "finalize started");

    service.run(&request).map_err(CliError::Core)?;

    info!(package = %args.package_name, "finalize completed");

    // 5. Success + next steps.
    output.success("Project successfully initialized")?;
    if !global.quiet {
        show_notes(&args, &output)?;
    }

    Ok(())
}

// ── Request construction ──────────────────────────────────────────────────────

/// Convert raw CLI strings into the validated core request.
///
/// Each `parse()` call is a domain boundary: unrecognized agents,
/// visibilities, and protocols fail here, before any side effect.
fn build_request(args: &FinalizeArgs, config: &AppConfig) -> CliResult<FinalizeRequest> {
    let license: LicenseRequest = args.license.parse().map_err(core_err)?;
    let agent: AgentChoice = args.agent.parse().map_err(core_err)?;

    let target = match (&args.visibility, &args.project_url) {
        (Some(visibility), _) => RemoteTarget::Host {
            visibility: visibility.parse::<Visibility>().map_err(core_err)?,
        },
        (None, Some(url)) => RemoteTarget::Url {
            url: url.clone(),
            protocol: args.protocol.parse::<Protocol>().map_err(core_err)?,
        },
        // clap enforces one of the two; this arm is unreachable via parsing.
        (None, None) => {
            return Err(CliError::InvalidInput {
                message: "either --visibility or --project-url is required".into(),
                source: None,
            });
        }
    };

    Ok(FinalizeRequest {
        language_version: args.language_version.clone(),
        license,
        dependencies: args.dependencies.clone(),
        dev_dependencies: args.dev_dependencies.clone(),
        agent,
        package_name: args.package_name.clone(),
        remote: RemoteSettings {
            name: args
                .remote_name
                .clone()
                .unwrap_or_else(|| config.defaults.remote_name.clone()),
            default_branch: args
                .default_branch
                .clone()
                .unwrap_or_else(|| config.defaults.default_branch.clone()),
            target,
        },
    })
}

fn core_err(err: groundwork_core::domain::DomainError) -> CliError {
    CliError::Core(GroundworkError::from(err))
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(request: &FinalizeRequest, args: &FinalizeArgs, out: &OutputManager) -> CliResult<()> {
    out.info(&format!(
        "Dry run: would finalize '{}' in {}",
        args.package_name,
        args.project_dir.display(),
    ))?;
    out.print(&format!("  Language version: {}", request.language_version))?;
    out.print(&format!("  License:          {:?}", request.license))?;
    out.print(&format!("  Agent:            {:?}", request.agent))?;
    out.print(&format!("  Remote:           {:?}", request.remote.target))?;
    out.print("")?;
    out.print("Steps, in order:")?;
    for step in [
        "pin language version (pyproject.toml, .github/workflows/test.yml)",
        "install license",
        "git init",
        "inject dependencies and run `uv sync`",
        "allow direnv",
        "install git hooks (`uv run prek install`)",
        "materialize coding-agent files",
        "remove template scaffolding (data/)",
        "initialize coding-agent environment",
        "initial commit",
        "set up remote",
    ] {
        out.print(&format!("  \u{2022} {step}"))?;
    }
    Ok(())
}

/// Post-run pointers the user will want next (Codecov token wiring).
fn show_notes(args: &FinalizeArgs, out: &OutputManager) -> CliResult<()> {
    let Some(username) = &args.github_username else {
        return Ok(());
    };
    let package = &args.package_name;

    out.print("")?;
    out.print("If using GitHub, generate a CODECOV_TOKEN at:")?;
    out.print(&format!(
        "  https://app.codecov.io/gh/{username}/{package}/settings"
    ))?;
    out.print("and add it to the GitHub repository secrets as CODECOV_TOKEN at:")?;
    out.print(&format!(
        "  https://github.com/{username}/{package}/settings/secrets/actions"
    ))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
