//! External command execution.

use crate::error::{PreflightError, Result};
use std::process::{Command, Stdio};

/// Result of executing an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: stderr.into(),
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            success: false,
        }
    }
}

/// Launches external programs on behalf of the checks.
///
/// Checks only see this trait, so tests can substitute [`MockRunner`]
/// and never spawn a real process.
///
/// [`MockRunner`]: super::MockRunner
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// Returns an error only when the program could not be launched.
    /// A program that runs and exits non-zero is an `Ok` failure result.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult>;
}

/// Runs programs directly (no intermediate shell) and captures both streams.
///
/// There is no timeout: a hung program blocks the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult> {
        let cmdline = command_line(program, args);
        tracing::debug!("Launching `{}`", cmdline);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                tracing::debug!("Could not launch `{}`: {}", cmdline, e);
                PreflightError::CommandFailed {
                    command: cmdline.clone(),
                    code: None,
                }
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        tracing::debug!("`{}` exited with {:?}", cmdline, output.status.code());

        if output.status.success() {
            Ok(CommandResult::success(stdout, stderr))
        } else {
            Ok(CommandResult::failure(output.status.code(), stdout, stderr))
        }
    }
}

/// Join a program and its arguments into a single display string.
pub fn command_line(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success("out", "");
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert_eq!(result.stdout, "out");
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(Some(2), "", "boom");
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(2));
        assert_eq!(result.stderr, "boom");
    }

    #[test]
    fn command_line_joins_args() {
        assert_eq!(
            command_line("git", &["config", "--list"]),
            "git config --list"
        );
        assert_eq!(command_line("git", &[]), "git");
    }

    #[test]
    #[cfg(unix)]
    fn system_runner_captures_stdout() {
        let result = SystemRunner::new().run("echo", &["hello"]).unwrap();
        assert!(result.success);
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[test]
    #[cfg(unix)]
    fn system_runner_reports_nonzero_exit() {
        let result = SystemRunner::new().run("false", &[]).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
    }

    #[test]
    fn system_runner_errors_when_program_missing() {
        let result = SystemRunner::new().run("preflight-no-such-program-xyz", &["--version"]);
        assert!(matches!(
            result,
            Err(PreflightError::CommandFailed { code: None, .. })
        ));
    }
}
