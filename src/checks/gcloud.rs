//! Cloud SDK project configuration.

use crate::shell::CommandRunner;

use super::{CheckOutcome, Hint};

/// Text the Cloud SDK prints on stderr when a property has no value.
pub const UNSET_MARKER: &str = "(unset)";

/// Verify that `gcloud` has an active project configured.
///
/// Runs `gcloud config get-value project`. The check passes when the
/// command exits 0 and its stderr does not contain [`UNSET_MARKER`].
pub fn check_gcloud_project(runner: &dyn CommandRunner) -> CheckOutcome {
    let configured = match runner.run("gcloud", &["config", "get-value", "project"]) {
        Ok(result) => result.success && !result.stderr.contains(UNSET_MARKER),
        Err(_) => false,
    };

    if configured {
        return CheckOutcome::Ready;
    }

    CheckOutcome::unmet(
        "The Google Cloud SDK has no active project configured",
        vec![
            Hint::command("To set up the SDK, run:", "gcloud init"),
            Hint::command(
                "To select an existing project, run:",
                "gcloud config set project <PROJECT_ID>",
            ),
        ],
    )
}
