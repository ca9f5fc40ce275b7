//! Preflight - prerequisite checks for command-line tooling.
//!
//! Preflight verifies that a machine is ready before a tool does real
//! work: required programs are installed, the Google Cloud SDK has an
//! active project, git has a user identity and Cloud Source Repositories
//! credentials, and expected files and empty directories are in place.
//!
//! # Modules
//!
//! - [`checks`] - The individual prerequisite checks
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.preflight.yml` loading and validation
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Sequential evaluation of a list of checks
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output and styling
//!
//! # Example
//!
//! ```
//! use preflight::checks::{Check, CheckContext, CheckOutcome};
//! use preflight::runner::Preflight;
//! use preflight::shell::{CommandResult, MockRunner};
//!
//! let runner = MockRunner::new();
//! runner.installed("git");
//! runner.respond("git config --list", CommandResult::success("user.email=a@b.c\n", ""));
//!
//! let ctx = CheckContext::with_home(&runner, None);
//! let report = Preflight::new(vec![
//!     Check::Commands(vec!["git".to_string()]),
//!     Check::GitIdentity,
//! ])
//! .run(&ctx);
//!
//! assert_eq!(report.exit_code(), 1);
//! let failed = report.first_unmet().unwrap();
//! assert_eq!(failed.name, "git identity");
//! assert!(matches!(failed.outcome, CheckOutcome::Unmet { .. }));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{PreflightError, Result};
