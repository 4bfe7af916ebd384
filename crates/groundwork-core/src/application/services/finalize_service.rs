//! Finalize Service - main pipeline orchestrator.
//!
//! Runs every post-generation step in a fixed order, each to completion,
//! aborting on the first fatal error. Ordering is load-bearing:
//! dependency injection into the manifest happens before the sync tool runs,
//! agent file materialization happens before the scaffolding directory is
//! removed, and the initial commit happens after the tree reached its final
//! shape.

use std::path::Path;

use tracing::{info, warn};

use crate::application::ports::{ExternalCommand, Filesystem, OutputMode, ProcessRunner};
use crate::application::request::FinalizeRequest;
use crate::application::services::{AgentSetup, LicenseInstaller, RemoteSetup, ensure_installed};
use crate::domain::{PlaceholderSet, dependencies::format_dependency_lines};
use crate::error::GroundworkResult;

/// Project manifest the version pin and dependency lists are spliced into.
pub const MANIFEST_FILE: &str = "pyproject.toml";
/// CI workflow carrying the same version pin.
pub const WORKFLOW_FILE: &str = ".github/workflows/test.yml";
/// Template scaffolding directory, removed once its resources are consumed.
pub const SCAFFOLD_DIR: &str = "data";

/// Versions below 3.<this> still work but should be upgraded.
const MINIMUM_SUPPORTED_MINOR: u32 = 12;

const DIRENV_INSTALL_HINT: &str = "pixi global install direnv";

/// Main pipeline service.
///
/// Owns the two ports and drives the sub-components through one run.
pub struct FinalizeService {
    runner: Box<dyn ProcessRunner>,
    fs: Box<dyn Filesystem>,
}

impl FinalizeService {
    pub fn new(runner: Box<dyn ProcessRunner>, fs: Box<dyn Filesystem>) -> Self {
        Self { runner, fs }
    }

    /// Run the whole post-generation pipeline.
    ///
    /// All-or-nothing per run: a fatal failure leaves the project partially
    /// set up, and re-running from a fresh render is the expected recovery
    /// path.
    pub fn run(&self, request: &FinalizeRequest) -> GroundworkResult<()> {
        let agent = AgentSetup::new(self.runner.as_ref(), self.fs.as_ref());

        self.pin_language_version(&request.language_version)?;
        LicenseInstaller::new(self.fs.as_ref()).install(&request.license)?;
        self.git_init()?;
        self.sync_dependencies(&request.dependencies, &request.dev_dependencies)?;
        self.allow_direnv()?;
        self.install_git_hooks()?;
        agent.materialize_files(request.agent)?;
        self.remove_scaffolding()?;
        agent.initialize_environment(request.agent)?;
        self.initial_commit()?;
        RemoteSetup::new(self.runner.as_ref()).configure(&request.package_name, &request.remote)?;

        info!("project finalized");
        Ok(())
    }

    /// Pin the language version in the manifest and the CI workflow.
    fn pin_language_version(&self, version: &str) -> GroundworkResult<()> {
        info!(version, "pinning language version");
        if let Some(minor) = minor_component(version) {
            if minor < MINIMUM_SUPPORTED_MINOR {
                warn!(
                    version,
                    "version should be upgraded to the latest available release"
                );
            }
        }

        let placeholders = PlaceholderSet::new().push("{python_version}", version);
        for file in [WORKFLOW_FILE, MANIFEST_FILE] {
            self.transform_file(Path::new(file), &placeholders)?;
        }
        Ok(())
    }

    /// Read, substitute, write back. Whole-file overwrite, not atomic:
    /// this runs once, synchronously, with no concurrent readers.
    fn transform_file(
        &self,
        path: &Path,
        placeholders: &PlaceholderSet,
    ) -> GroundworkResult<()> {
        let contents = self.fs.read_to_string(path)?;
        self.fs.write(path, &placeholders.apply(&contents))?;
        Ok(())
    }

    fn git_init(&self) -> GroundworkResult<()> {
        self.run_checked(ExternalCommand::new("git").arg("init"))
    }

    /// Splice the formatted dependency lists into the manifest, then let the
    /// package manager resolve and lock them.
    fn sync_dependencies(&self, dependencies: &str, dev_dependencies: &str) -> GroundworkResult<()> {
        let placeholders = PlaceholderSet::new()
            .push("    {dependencies}\n", format_dependency_lines(dependencies))
            .push(
                "    {dev_dependencies}\n",
                format_dependency_lines(dev_dependencies),
            );
        self.transform_file(Path::new(MANIFEST_FILE), &placeholders)?;

        self.run_checked(ExternalCommand::new("uv").arg("sync"))
    }

    fn allow_direnv(&self) -> GroundworkResult<()> {
        ensure_installed(self.runner.as_ref(), "direnv", DIRENV_INSTALL_HINT)?;
        self.run_checked(ExternalCommand::new("direnv").args(["allow", "."]))
    }

    /// Install pre-commit and pre-push hooks (via prek).
    fn install_git_hooks(&self) -> GroundworkResult<()> {
        self.run_checked(ExternalCommand::new("uv").args(["run", "prek", "install"]))
    }

    fn remove_scaffolding(&self) -> GroundworkResult<()> {
        self.fs.remove_dir_all(Path::new(SCAFFOLD_DIR))?;
        Ok(())
    }

    fn initial_commit(&self) -> GroundworkResult<()> {
        self.run_checked(ExternalCommand::new("git").args(["add", "."]))?;
        self.run_checked(ExternalCommand::new("git").args(["commit", "-m", "Setup"]))
    }

    fn run_checked(&self, command: ExternalCommand) -> GroundworkResult<()> {
        self.runner.run(&command, OutputMode::Inherit, true)?;
        Ok(())
    }
}

/// Minor component of a `major.minor` version string, if it parses.
fn minor_component(version: &str) -> Option<u32> {
    version.split('.').nth(1)?.parse().ok()
}

// ── tests ─────────────────────────────────────────────────────────────────────
