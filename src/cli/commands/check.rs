//! Check command implementation.
//!
//! The `preflight check` command runs every configured prerequisite check
//! and reports the first one that is unmet.

use std::path::{Path, PathBuf};

use crate::checks::{CheckContext, CheckOutcome};
use crate::cli::args::CheckArgs;
use crate::config::project_config_path;
use crate::error::{PreflightError, Result};
use crate::runner::{Preflight, PreflightReport, RunProgress};
use crate::shell::SystemRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::resolve::resolve_checks;

/// Exit code when there is nothing to check.
const NO_CONFIG_EXIT_CODE: i32 = 2;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Run the checks against the given context and report the outcome.
    pub fn run_checks(
        &self,
        ui: &mut dyn UserInterface,
        ctx: &CheckContext<'_>,
    ) -> Result<CommandResult> {
        let Some(checks) = resolve_checks(
            &self.project_root,
            self.config_path.as_deref(),
            &self.args.selection,
        )?
        else {
            ui.error(&format!(
                "No configuration found. Create {} or pass checks as flags (see --help).",
                project_config_path(&self.project_root).display()
            ));
            return Ok(CommandResult::failure(NO_CONFIG_EXIT_CODE));
        };

        let verbose = ui.output_mode().shows_passed_checks() && !self.args.json;
        let report = Preflight::new(checks).run_with_progress(ctx, |event| {
            if !verbose {
                return;
            }
            match event {
                RunProgress::CheckStarting { name, index, total } => {
                    ui.message(&format!("[{}/{}] Checking {}", index, total, name));
                }
                RunProgress::CheckFinished {
                    name,
                    outcome: CheckOutcome::Ready,
                } => ui.success(name),
                RunProgress::CheckFinished { .. } => {}
            }
        });

        if self.args.json {
            print_json(&report)?;
        } else {
            show_report(ui, &report);
        }

        if report.is_ready() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(report.exit_code()))
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runner = SystemRunner::new();
        let ctx = CheckContext::new(&runner);
        self.run_checks(ui, &ctx)
    }
}

fn show_report(ui: &mut dyn UserInterface, report: &PreflightReport) {
    if let Some(failed) = report.first_unmet() {
        if let CheckOutcome::Unmet { reason, hints } = &failed.outcome {
            ui.error(reason);
            for hint in hints {
                ui.hint(hint);
            }
        }
    }
}

fn print_json(report: &PreflightReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| PreflightError::Other(anyhow::anyhow!("Failed to serialize report: {}", e)))?;
    println!("{}", json);
    Ok(())
}
