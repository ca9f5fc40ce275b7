//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::PreflightConfig;

/// Preflight - verify prerequisites before running your tooling.
#[derive(Debug, Parser)]
#[command(name = "preflight")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .preflight.yml)
    #[arg(short, long, global = true, env = "PREFLIGHT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Report every check, including those that pass
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Show failures only, without hints
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run prerequisite checks (default if no command specified)
    Check(CheckArgs),

    /// List the checks that would run
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Ad-hoc checks given on the command line, added to those from the config file.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckSelection {
    /// Require programs to be installed (comma-separated)
    #[arg(long = "command", value_delimiter = ',', value_name = "PROGRAM")]
    pub commands: Vec<String>,

    /// Require an active Google Cloud SDK project
    #[arg(long)]
    pub gcloud: bool,

    /// Require git user.email and user.name
    #[arg(long)]
    pub git_identity: bool,

    /// Require Cloud Source Repositories credentials in ~/.gitcookies
    #[arg(long)]
    pub git_cookies: bool,

    /// Require a file to exist (repeatable)
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Require a directory to exist and be empty (repeatable)
    #[arg(long = "empty-dir", value_name = "PATH")]
    pub empty_dirs: Vec<PathBuf>,
}

impl CheckSelection {
    /// The selection as a config fragment.
    pub fn to_config(&self) -> PreflightConfig {
        PreflightConfig {
            commands: self.commands.clone(),
            gcloud_project: self.gcloud,
            git_identity: self.git_identity,
            git_cookies: self.git_cookies,
            files: self.files.clone(),
            empty_dirs: self.empty_dirs.clone(),
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub selection: CheckSelection,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub selection: CheckSelection,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
