//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No pipeline logic lives here: free-form
//! values (agent, visibility, protocol, license) stay strings until the
//! command layer parses them through the core domain's boundaries, so that
//! validation errors carry the domain's own messages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "groundwork",
    bin_name = "groundwork",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3d7} Post-generation project finalization",
    long_about = "Groundwork turns a freshly rendered project skeleton into a \
                  working, version-controlled, tool-configured repository.",
    after_help = "EXAMPLES:\n\
        \x20 groundwork finalize --language-version 3.12 --license MIT \\\n\
        \x20     --package-name my_package --project-url https://github.com/user/my_package.git\n\
        \x20 groundwork check-name my_module\n\
        \x20 groundwork completions bash > /usr/share/bash-completion/completions/groundwork",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the post-generation pipeline on a rendered project tree.
    #[command(
        visible_alias = "f",
        about = "Finalize a rendered project",
        after_help = "EXAMPLES:\n\
            \x20 groundwork finalize --language-version 3.12 --license MIT \\\n\
            \x20     --package-name my_package --visibility private --agent claude\n\
            \x20 groundwork finalize --language-version 3.13 --license None \\\n\
            \x20     --package-name my_package --project-url https://github.com/user/repo.git"
    )]
    Finalize(FinalizeArgs),

    /// Validate a module name before rendering begins.
    #[command(
        about = "Check a module name",
        after_help = "EXAMPLES:\n\
            \x20 groundwork check-name valid_module_name2\n\
            \x20 groundwork check-name 'invalid module name'   # exits 2"
    )]
    CheckName(CheckNameArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 groundwork completions bash > ~/.local/share/bash-completion/completions/groundwork\n\
            \x20 groundwork completions zsh  > ~/.zfunc/_groundwork\n\
            \x20 groundwork completions fish > ~/.config/fish/completions/groundwork.fish"
    )]
    Completions(CompletionsArgs),
}

// ── finalize ──────────────────────────────────────────────────────────────────

/// Arguments for `groundwork finalize`.
///
/// Every value is produced by the outer template generator; this tool only
/// re-validates the ones with closed value sets.
#[derive(Debug, Args)]
pub struct FinalizeArgs {
    /// Language version to pin in the manifest and CI workflow.
    #[arg(
        long = "language-version",
        value_name = "VERSION",
        help = "Language version to pin, e.g. 3.12"
    )]
    pub language_version: String,

    /// License name, or `None` to skip.
    #[arg(
        long = "license",
        value_name = "NAME",
        default_value = "None",
        help = "License to install (e.g. MIT), or None"
    )]
    pub license: String,

    /// Whitespace-separated runtime dependencies.
    #[arg(
        long = "dependencies",
        value_name = "SPEC",
        default_value = "",
        help = "Runtime dependencies, whitespace-separated"
    )]
    pub dependencies: String,

    /// Whitespace-separated development dependencies.
    #[arg(
        long = "dev-dependencies",
        value_name = "SPEC",
        default_value = "",
        help = "Development dependencies, whitespace-separated"
    )]
    pub dev_dependencies: String,

    /// Coding agent to set up (claude, codex, or none).
    #[arg(
        long = "agent",
        value_name = "AGENT",
        default_value = "none",
        help = "Coding agent to set up (claude, codex, none)"
    )]
    pub agent: String,

    /// Package name, used when creating the hosted repository.
    #[arg(
        long = "package-name",
        value_name = "NAME",
        help = "Package name for the hosted repository"
    )]
    pub package_name: String,

    /// Create a hosted repository with this visibility.
    #[arg(
        long = "visibility",
        value_name = "LEVEL",
        conflicts_with = "project_url",
        help = "Create a hosted repository (private, internal, public)"
    )]
    pub visibility: Option<String>,

    /// Attach this existing remote url instead of creating a repository.
    #[arg(
        long = "project-url",
        value_name = "URL",
        required_unless_present = "visibility",
        help = "Existing remote url to attach"
    )]
    pub project_url: Option<String>,

    /// Transport protocol for --project-url.
    #[arg(
        long = "protocol",
        value_name = "PROTOCOL",
        default_value = "git",
        help = "Remote transport protocol (git, https)"
    )]
    pub protocol: String,

    /// Remote name to attach (config default: origin).
    #[arg(
        long = "remote-name",
        value_name = "NAME",
        help = "Name for the remote [default: origin]"
    )]
    pub remote_name: Option<String>,

    /// Default branch for upstream tracking (config default: master).
    #[arg(
        long = "default-branch",
        value_name = "BRANCH",
        help = "Default branch for upstream tracking [default: master]"
    )]
    pub default_branch: Option<String>,

    /// Hosting account name, used only for the post-run pointers.
    #[arg(
        long = "github-username",
        value_name = "NAME",
        help = "Hosting account name (enables the Codecov pointers)"
    )]
    pub github_username: Option<String>,

    /// Directory containing the rendered project tree.
    #[arg(
        short = 'C',
        long = "project-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Rendered project directory to finalize"
    )]
    pub project_dir: PathBuf,

    /// Preview the step plan without executing anything.
    #[arg(long = "dry-run", help = "Show the step plan without executing")]
    pub dry_run: bool,
}

// ── check-name ────────────────────────────────────────────────────────────────

/// Arguments for `groundwork check-name`.
#[derive(Debug, Args)]
pub struct CheckNameArgs {
    /// Module name to validate.
    #[arg(value_name = "NAME", help = "Module name to validate")]
    pub name: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `groundwork completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn minimal_finalize(extra: &[&str]) -> Vec<String> {
        let mut args = vec![
            "groundwork".to_string(),
            "finalize".into(),
            "--language-version".into(),
            "3.12".into(),
            "--package-name".into(),
            "my_package".into(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        args
    }

    #[test]
    fn parse_finalize_with_project_url() {
        let cli = Cli::parse_from(minimal_finalize(&[
            "--project-url",
            "https://github.com/user/repo.git",
        ]));
        let Commands::Finalize(args) = cli.command else {
            panic!("expected finalize command");
        };
        assert_eq!(args.language_version, "3.12");
        assert_eq!(args.protocol, "git");
        // Remote name and branch fall back to config defaults downstream.
        assert!(args.remote_name.is_none());
        assert!(args.default_branch.is_none());
    }

    #[test]
    fn parse_finalize_with_visibility() {
        let cli = Cli::parse_from(minimal_finalize(&["--visibility", "private"]));
        let Commands::Finalize(args) = cli.command else {
            panic!("expected finalize command");
        };
        assert_eq!(args.visibility.as_deref(), Some("private"));
        assert!(args.project_url.is_none());
    }

    #[test]
    fn visibility_and_project_url_conflict() {
        let result = Cli::try_parse_from(minimal_finalize(&[
            "--visibility",
            "private",
            "--project-url",
            "https://github.com/user/repo.git",
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn remote_target_is_required() {
        // Neither --visibility nor --project-url.
        let result = Cli::try_parse_from(minimal_finalize(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn parse_check_name() {
        let cli = Cli::parse_from(["groundwork", "check-name", "my_module"]);
        let Commands::CheckName(args) = cli.command else {
            panic!("expected check-name command");
        };
        assert_eq!(args.name, "my_module");
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["groundwork", "--quiet", "--verbose", "check-name", "x"]);
        assert!(result.is_err());
    }
}
