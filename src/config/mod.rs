//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and validation in [`loader`]
//!
//! # Example
//!
//! ```
//! use preflight::config::load_config;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".preflight.yml"), "commands: [git]").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.commands, vec!["git".to_string()]);
//! assert_eq!(config.checks(temp.path()).len(), 1);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_root, load_config, load_config_file, parse_config, project_config_path,
    validate, CONFIG_FILE_NAME,
};
pub use schema::PreflightConfig;
