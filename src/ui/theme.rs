//! Visual theme and styling.
//!
//! Every formatter here is a pure string transform; printing is left to
//! the [`UserInterface`](super::UserInterface) implementations.

use console::Style;

use crate::checks::Hint;

/// Preflight's visual theme.
#[derive(Debug, Clone)]
pub struct PreflightTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning and hint text (yellow).
    pub warning: Style,
    /// Style for failure messages (red bold).
    pub error: Style,
    /// Style for literal commands and variables inside text (cyan bold).
    pub command: Style,
}

impl Default for PreflightTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PreflightTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            command: Style::new().cyan().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            command: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a failure message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format warning-styled text.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(msg))
    }

    /// Style every occurrence of `literal` inside `text`.
    ///
    /// Text outside the literal is returned unchanged. An empty literal
    /// leaves the text untouched.
    pub fn highlight(&self, text: &str, literal: &str) -> String {
        if literal.is_empty() {
            return text.to_string();
        }
        let styled = self.command.apply_to(literal).to_string();
        text.replace(literal, &styled)
    }

    /// Format a remediation hint: indented, with its command highlighted.
    pub fn format_hint(&self, hint: &Hint) -> String {
        let text = match &hint.command {
            Some(command) => {
                let (lead, rest) = match hint.text.find(command.as_str()) {
                    Some(pos) => hint.text.split_at(pos),
                    None => (hint.text.as_str(), ""),
                };
                format!(
                    "{}{}",
                    self.format_warning(lead),
                    self.highlight(rest, command)
                )
            }
            None => self.format_warning(&hint.text),
        };
        format!("  {}", text)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}
