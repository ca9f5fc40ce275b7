//! Scripted command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning processes.
//! Responses are keyed by the full command line; anything unscripted
//! behaves like a program that could not be launched.
//!
//! # Example
//!
//! ```
//! use preflight::shell::{CommandResult, CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new();
//! runner.respond("git --version", CommandResult::success("git version 2.43.0", ""));
//!
//! assert!(runner.run("git", &["--version"]).unwrap().success);
//! assert!(runner.run("hg", &["--version"]).is_err());
//! assert_eq!(runner.invocations(), vec!["git --version", "hg --version"]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{PreflightError, Result};

use super::command::{command_line, CommandResult, CommandRunner};

/// Command runner returning pre-configured results.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: RefCell<HashMap<String, CommandResult>>,
    invocations: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the result for a command line such as `"git config --list"`.
    pub fn respond(&self, command: &str, result: CommandResult) {
        self.responses
            .borrow_mut()
            .insert(command.to_string(), result);
    }

    /// Script a program whose `--version` probe exits 0.
    pub fn installed(&self, program: &str) {
        self.respond(
            &format!("{} --version", program),
            CommandResult::success(format!("{} 1.0.0", program), ""),
        );
    }

    /// Every command line run so far, in order.
    pub fn invocations(&self) -> Vec<String> {
        self.invocations.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult> {
        let line = command_line(program, args);
        self.invocations.borrow_mut().push(line.clone());

        self.responses
            .borrow()
            .get(&line)
            .cloned()
            .ok_or_else(|| PreflightError::CommandFailed {
                command: line,
                code: None,
            })
    }
}
