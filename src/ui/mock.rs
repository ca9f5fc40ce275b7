//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.

use crate::checks::Hint;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<Hint>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Messages shown so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Success messages shown so far.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Warnings shown so far.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Failure messages shown so far.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Hints shown so far.
    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    /// Whether nothing at all was shown.
    pub fn is_silent(&self) -> bool {
        self.messages.is_empty()
            && self.successes.is_empty()
            && self.warnings.is_empty()
            && self.errors.is_empty()
            && self.hints.is_empty()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn hint(&mut self, hint: &Hint) {
        self.hints.push(hint.clone());
    }
}
