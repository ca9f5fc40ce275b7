//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for writing to the terminal
//! - [`MockUI`] for capturing output in tests
//! - [`PreflightTheme`] string formatters
//!
//! # Example
//!
//! ```
//! use preflight::checks::Hint;
//! use preflight::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.error("Git user identity is not configured");
//! ui.hint(&Hint::command("Set your name with:", "git config --global user.name X"));
//!
//! assert_eq!(ui.errors(), &["Git user identity is not configured".to_string()]);
//! assert_eq!(ui.hints().len(), 1);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, PreflightTheme};

use crate::checks::Hint;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display a failure message.
    fn error(&mut self, msg: &str);

    /// Display a remediation hint.
    fn hint(&mut self, hint: &Hint);
}
