//! Resolving which checks a command should run.

use std::path::Path;

use crate::checks::Check;
use crate::cli::args::CheckSelection;
use crate::config::{load_config, PreflightConfig};
use crate::error::{PreflightError, Result};

/// Combine the config file with ad-hoc flags into the list of checks.
///
/// A missing `.preflight.yml` is tolerated when flags select at least one
/// check. Returns `Ok(None)` when there is neither a config file nor any
/// flag, so the caller can report that nothing was configured. An
/// explicitly named config file must exist.
pub fn resolve_checks(
    project_root: &Path,
    config_path: Option<&Path>,
    selection: &CheckSelection,
) -> Result<Option<Vec<Check>>> {
    let adhoc = selection.to_config();

    let mut config = match load_config(project_root, config_path) {
        Ok(config) => config,
        Err(PreflightError::ConfigNotFound { path }) if config_path.is_none() => {
            if adhoc.is_empty() {
                return Ok(None);
            }
            tracing::debug!("No config at {}, using flags only", path.display());
            PreflightConfig::default()
        }
        Err(e) => return Err(e),
    };

    crate::config::validate(&adhoc)?;
    config.merge(adhoc);
    Ok(Some(config.checks(project_root)))
}
