//! Prerequisite checks.
//!
//! Each check inspects one aspect of the environment and reports a
//! [`CheckOutcome`]. Checks never print and never terminate the process;
//! the caller decides what to do with an unmet prerequisite.
//!
//! # Modules
//!
//! - [`commands`] - External program availability
//! - [`fs`] - File existence and directory emptiness
//! - [`gcloud`] - Cloud SDK project configuration
//! - [`git`] - Git identity and Cloud Source Repositories credentials

pub mod commands;
pub mod fs;
pub mod gcloud;
pub mod git;

pub use commands::{check_commands, VERSION_PROBE_ARG};
pub use fs::{file_exists, is_empty_dir};
pub use gcloud::{check_gcloud_project, UNSET_MARKER};
pub use git::{check_git_cookies, check_git_identity, GITCOOKIES_FILE, SOURCE_REPOS_DOMAIN};

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::shell::CommandRunner;

/// A suggested follow-up action shown when a check fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hint {
    /// Full hint text.
    pub text: String,
    /// Literal command or variable inside `text` to highlight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Hint {
    /// A hint with no highlighted command.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            command: None,
        }
    }

    /// A hint of the form "`<lead>` `<command>`" with the command highlighted.
    pub fn command(lead: &str, command: impl Into<String>) -> Self {
        let command = command.into();
        Self {
            text: format!("{} {}", lead, command),
            command: Some(command),
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The result of running a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The prerequisite holds.
    Ready,

    /// The prerequisite does not hold.
    Unmet {
        /// Human-readable failure message.
        reason: String,
        /// Remediation hints, in display order.
        hints: Vec<Hint>,
    },
}

impl CheckOutcome {
    /// Build an unmet outcome.
    pub fn unmet(reason: impl Into<String>, hints: Vec<Hint>) -> Self {
        Self::Unmet {
            reason: reason.into(),
            hints,
        }
    }

    /// Whether the prerequisite holds.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Collaborators shared by all checks in one run.
pub struct CheckContext<'a> {
    /// Launcher for external programs.
    pub runner: &'a dyn CommandRunner,
    /// The invoking user's home directory, if it could be determined.
    pub home: Option<PathBuf>,
}

impl<'a> CheckContext<'a> {
    /// Context using the current user's home directory.
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self {
            runner,
            home: dirs::home_dir(),
        }
    }

    /// Context with an explicit home directory (for testing).
    pub fn with_home(runner: &'a dyn CommandRunner, home: Option<PathBuf>) -> Self {
        Self { runner, home }
    }
}

/// One configured prerequisite check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// Every listed program answers a `--version` probe.
    Commands(Vec<String>),
    /// The Cloud SDK has an active project.
    GcloudProject,
    /// Git has `user.email` and `user.name` configured.
    GitIdentity,
    /// `~/.gitcookies` holds Cloud Source Repositories credentials.
    GitCookies,
    /// A file exists and is readable.
    FileExists(PathBuf),
    /// A directory exists and has no entries.
    EmptyDirectory(PathBuf),
}

impl Check {
    /// Short label used in progress output and reports.
    pub fn name(&self) -> String {
        match self {
            Self::Commands(names) => format!("commands ({})", names.join(", ")),
            Self::GcloudProject => "gcloud project".to_string(),
            Self::GitIdentity => "git identity".to_string(),
            Self::GitCookies => "git cookies".to_string(),
            Self::FileExists(path) => format!("file {}", path.display()),
            Self::EmptyDirectory(path) => format!("empty directory {}", path.display()),
        }
    }

    /// Run the check.
    ///
    /// The file and directory checks only answer yes or no; here a `false`
    /// becomes an unmet outcome so every check shares one calling convention.
    pub fn run(&self, ctx: &CheckContext<'_>) -> CheckOutcome {
        match self {
            Self::Commands(names) => check_commands(ctx.runner, names.as_slice()),
            Self::GcloudProject => check_gcloud_project(ctx.runner),
            Self::GitIdentity => check_git_identity(ctx.runner),
            Self::GitCookies => check_git_cookies(ctx.home.as_deref()),
            Self::FileExists(path) => gate(file_exists(path), || missing_file(path)),
            Self::EmptyDirectory(path) => gate(is_empty_dir(path), || non_empty_dir(path)),
        }
    }
}

fn gate(passed: bool, unmet: impl FnOnce() -> CheckOutcome) -> CheckOutcome {
    if passed {
        CheckOutcome::Ready
    } else {
        unmet()
    }
}

fn missing_file(path: &Path) -> CheckOutcome {
    CheckOutcome::unmet(
        format!("Required file {} does not exist", path.display()),
        Vec::new(),
    )
}

fn non_empty_dir(path: &Path) -> CheckOutcome {
    CheckOutcome::unmet(
        format!("Directory {} must exist and be empty", path.display()),
        vec![Hint::text(
            "Choose an empty directory or remove its contents first.",
        )],
    )
}
