//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::checks::Hint;

use super::{should_use_colors, OutputMode, PreflightTheme, UserInterface};

/// Terminal UI implementation.
///
/// Plain and success messages go to stdout; failures, warnings and hints
/// go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: PreflightTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            PreflightTheme::new()
        } else {
            PreflightTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn hint(&mut self, hint: &Hint) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_hint(hint)).ok();
        }
    }
}
