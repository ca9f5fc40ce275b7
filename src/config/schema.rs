//! Configuration schema definitions.
//!
//! This module contains the struct that maps to the `.preflight.yml`
//! file format.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::checks::Check;

/// Root configuration structure for `.preflight.yml`.
///
/// ```yaml
/// commands: [git, gcloud, docker]
/// gcloud_project: true
/// git_identity: true
/// git_cookies: false
/// files: [Dockerfile]
/// empty_dirs: [build]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreflightConfig {
    /// Programs that must answer a `--version` probe.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,

    /// Require an active Cloud SDK project.
    #[serde(skip_serializing_if = "is_false")]
    pub gcloud_project: bool,

    /// Require git `user.email` and `user.name`.
    #[serde(skip_serializing_if = "is_false")]
    pub git_identity: bool,

    /// Require Cloud Source Repositories credentials in `~/.gitcookies`.
    #[serde(skip_serializing_if = "is_false")]
    pub git_cookies: bool,

    /// Files that must exist (relative to the project root).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<PathBuf>,

    /// Directories that must exist and be empty (relative to the project root).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub empty_dirs: Vec<PathBuf>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl PreflightConfig {
    /// Whether the config requests no checks at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fold `other` into this config.
    ///
    /// Lists are appended (skipping entries already present) and flags
    /// are OR-ed, so merging never removes a check.
    pub fn merge(&mut self, other: PreflightConfig) {
        extend_unique(&mut self.commands, other.commands);
        self.gcloud_project |= other.gcloud_project;
        self.git_identity |= other.git_identity;
        self.git_cookies |= other.git_cookies;
        extend_unique(&mut self.files, other.files);
        extend_unique(&mut self.empty_dirs, other.empty_dirs);
    }

    /// The checks this config requests, in run order.
    ///
    /// Order: commands, gcloud project, git identity, git cookies, files,
    /// empty directories. Relative paths are resolved against `project_root`.
    pub fn checks(&self, project_root: &Path) -> Vec<Check> {
        let mut checks = Vec::new();

        if !self.commands.is_empty() {
            checks.push(Check::Commands(self.commands.clone()));
        }
        if self.gcloud_project {
            checks.push(Check::GcloudProject);
        }
        if self.git_identity {
            checks.push(Check::GitIdentity);
        }
        if self.git_cookies {
            checks.push(Check::GitCookies);
        }
        for file in &self.files {
            checks.push(Check::FileExists(project_root.join(file)));
        }
        for dir in &self.empty_dirs {
            checks.push(Check::EmptyDirectory(project_root.join(dir)));
        }

        checks
    }
}

fn extend_unique<T: PartialEq>(target: &mut Vec<T>, items: Vec<T>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let yaml = r#"
commands: [git, gcloud]
gcloud_project: true
git_identity: true
git_cookies: true
files: [Dockerfile]
empty_dirs: [out]
"#;
        let config: PreflightConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.commands, vec!["git", "gcloud"]);
        assert!(config.gcloud_project);
        assert!(config.git_identity);
        assert!(config.git_cookies);
        assert_eq!(config.files, vec![PathBuf::from("Dockerfile")]);
        assert_eq!(config.empty_dirs, vec![PathBuf::from("out")]);
    }

    #[test]
    fn missing_fields_default_to_off() {
        let config: PreflightConfig = serde_yaml::from_str("commands: [git]").unwrap();
        assert!(!config.gcloud_project);
        assert!(!config.git_identity);
        assert!(config.files.is_empty());
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<PreflightConfig, _> = serde_yaml::from_str("comands: [git]");
        assert!(result.is_err());
    }

    #[test]
    fn default_config_is_empty() {
        assert!(PreflightConfig::default().is_empty());
        let config = PreflightConfig {
            git_identity: true,
            ..Default::default()
        };
        assert!(!config.is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn checks_follow_fixed_order_and_resolve_paths() {
        let config = PreflightConfig {
            commands: vec!["git".into()],
            gcloud_project: true,
            git_identity: true,
            git_cookies: true,
            files: vec![PathBuf::from("app.yaml")],
            empty_dirs: vec![PathBuf::from("/abs/out")],
        };

        let checks = config.checks(Path::new("/project"));
        assert_eq!(
            checks,
            vec![
                Check::Commands(vec!["git".into()]),
                Check::GcloudProject,
                Check::GitIdentity,
                Check::GitCookies,
                Check::FileExists(PathBuf::from("/project/app.yaml")),
                Check::EmptyDirectory(PathBuf::from("/abs/out")),
            ]
        );
    }

    #[test]
    fn empty_config_has_no_checks() {
        assert!(PreflightConfig::default()
            .checks(Path::new("/project"))
            .is_empty());
    }

    #[test]
    fn merge_appends_and_ors() {
        let mut base = PreflightConfig {
            commands: vec!["git".into()],
            git_identity: true,
            ..Default::default()
        };
        base.merge(PreflightConfig {
            commands: vec!["git".into(), "docker".into()],
            gcloud_project: true,
            files: vec![PathBuf::from("Dockerfile")],
            ..Default::default()
        });

        assert_eq!(base.commands, vec!["git", "docker"]);
        assert!(base.git_identity);
        assert!(base.gcloud_project);
        assert_eq!(base.files, vec![PathBuf::from("Dockerfile")]);
    }

    #[test]
    fn serializes_only_set_fields() {
        let config = PreflightConfig {
            commands: vec!["git".into()],
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("commands"));
        assert!(!yaml.contains("gcloud_project"));
    }
}
