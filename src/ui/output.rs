//! Output verbosity.

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Report every check, including those that pass.
    Verbose,
    /// Silent on success; failures and their hints only.
    #[default]
    Normal,
    /// Failures only, without hints or informational messages.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode reports checks that pass.
    pub fn shows_passed_checks(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows informational messages and hints.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
