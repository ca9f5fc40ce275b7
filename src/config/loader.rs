//! Configuration file discovery and loading.

use crate::config::schema::PreflightConfig;
use crate::error::{PreflightError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the project config.
pub const CONFIG_FILE_NAME: &str = ".preflight.yml";

/// Path where the project config is expected.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.preflight.yml` (primary indicator)
/// 2. `.git` directory (fallback)
///
/// # Returns
///
/// The path to the project root, or None if not found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file and parse it into [`PreflightConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<PreflightConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PreflightError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PreflightError::Io(e)
        }
    })?;

    let config = parse_config(&content, path)?;
    validate(&config)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Parse YAML content into [`PreflightConfig`].
///
/// An empty document is an empty config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<PreflightConfig> {
    if content.trim().is_empty() {
        return Ok(PreflightConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| PreflightError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Reject configs that cannot produce meaningful checks.
pub fn validate(config: &PreflightConfig) -> Result<()> {
    if config.commands.iter().any(|c| c.trim().is_empty()) {
        return Err(PreflightError::ConfigValidationError {
            message: "command names must not be blank".to_string(),
        });
    }
    Ok(())
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads that file. Otherwise loads
/// `.preflight.yml` from the project root.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<PreflightConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_config_file(&project_config_path(project_root)),
    }
}
