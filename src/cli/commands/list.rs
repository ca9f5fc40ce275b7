//! List command implementation.
//!
//! The `preflight list` command shows the checks `preflight check` would
//! run, in order, without running them.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::config::project_config_path;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::resolve::resolve_checks;

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(checks) = resolve_checks(
            &self.project_root,
            self.config_path.as_deref(),
            &self.args.selection,
        )?
        else {
            ui.error(&format!(
                "No configuration found at {}",
                project_config_path(&self.project_root).display()
            ));
            return Ok(CommandResult::failure(2));
        };

        if checks.is_empty() {
            ui.warning("No checks configured.");
        }
        for check in &checks {
            ui.message(&check.name());
        }

        Ok(CommandResult::success())
    }
}
