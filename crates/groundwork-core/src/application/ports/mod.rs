//! Application ports (traits) for external dependencies.
//!
//! The pipeline needs exactly two things from the outside world: the ability
//! to run external programs and the ability to touch the rendered file tree.
//! Adapters in `groundwork-adapters` implement these.
//!
//! ## Port Types
//!
//! - `ProcessRunner`: external program execution
//! - `Filesystem`: file and directory operations on the rendered tree
//!
//! Both are mocked with mockall in service unit tests.

use std::fmt;
use std::path::Path;

use crate::application::error::PipelineError;

// ── ExternalCommand ───────────────────────────────────────────────────────────

/// A program name plus its ordered argument vector.
///
/// Never empty: the program is a required constructor argument. Arguments are
/// passed through verbatim with no shell interpretation; arguments containing
/// embedded whitespace are a documented limitation of the pipeline, not
/// something this type guards against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn argv(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

// ── CommandResult ─────────────────────────────────────────────────────────────

/// How the child's standard streams are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Streams pass through to the user's terminal (interactive tools).
    Inherit,
    /// Streams are discarded (availability probes).
    Suppress,
    /// Streams are captured into the [`CommandResult`].
    Capture,
}

/// Outcome of one runner invocation. Produced once, not retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code; `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    /// Captured standard output; empty unless [`OutputMode::Capture`].
    pub stdout: String,
    /// Captured standard error; empty unless [`OutputMode::Capture`].
    pub stderr: String,
}

impl CommandResult {
    /// A plain exit status with no captured streams.
    pub fn from_code(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Self::default()
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

// ── ProcessRunner ─────────────────────────────────────────────────────────────

/// Port for external program execution.
///
/// Runs in the current working directory and environment. A spawn failure
/// (executable not found) surfaces as [`PipelineError::ProgramNotFound`],
/// distinct from [`PipelineError::CommandFailed`] which means the program ran
/// and exited nonzero while `check` was set.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    fn run(
        &self,
        command: &ExternalCommand,
        output: OutputMode,
        check: bool,
    ) -> Result<CommandResult, PipelineError>;
}

// ── Filesystem ────────────────────────────────────────────────────────────────

/// Port for filesystem operations on the rendered project tree.
///
/// Implemented by:
/// - `groundwork_adapters::filesystem::LocalFilesystem` (production)
/// - `groundwork_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a file fully into memory as text.
    fn read_to_string(&self, path: &Path) -> Result<String, PipelineError>;

    /// Write content to a file, whole-file overwrite (not atomic).
    fn write(&self, path: &Path, contents: &str) -> Result<(), PipelineError>;

    /// Copy a single file, overwriting the destination.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), PipelineError>;

    /// Recursively copy a directory tree.
    fn copy_dir(&self, from: &Path, to: &Path) -> Result<(), PipelineError>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> Result<(), PipelineError>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// List the entry names (not paths) directly under a directory.
    fn list_dir(&self, path: &Path) -> Result<Vec<String>, PipelineError>;
}
