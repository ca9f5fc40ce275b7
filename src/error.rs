//! Error types for preflight operations.
//!
//! This module defines [`PreflightError`], the error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `PreflightError` covers infrastructure failures: unreadable config,
//!   a child process that could not be launched, I/O errors
//! - An unmet prerequisite is not an error; checks report it as
//!   [`CheckOutcome::Unmet`](crate::checks::CheckOutcome::Unmet)
//! - Use `anyhow::Error` (via `PreflightError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for preflight operations.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// External command could not be launched or was killed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for preflight operations.
pub type Result<T> = std::result::Result<T, PreflightError>;
