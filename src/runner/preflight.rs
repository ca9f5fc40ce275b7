//! Sequential prerequisite evaluation.

use serde::Serialize;

use crate::checks::{Check, CheckContext, CheckOutcome};

/// Progress events emitted while checks run.
#[derive(Debug)]
pub enum RunProgress<'a> {
    /// A check is about to start.
    CheckStarting {
        name: &'a str,
        index: usize,
        total: usize,
    },
    /// A check finished.
    CheckFinished {
        name: &'a str,
        outcome: &'a CheckOutcome,
    },
}

/// Outcome of one check within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Check label.
    pub name: String,
    /// What the check found.
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

/// Result of a preflight run.
///
/// Holds one entry per check that ran. Checks after the first unmet
/// one are not run and do not appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreflightReport {
    /// Reports in execution order.
    pub results: Vec<CheckReport>,
}

impl PreflightReport {
    /// Whether every check that ran passed.
    pub fn is_ready(&self) -> bool {
        self.results.iter().all(|r| r.outcome.is_ready())
    }

    /// The check that stopped the run, if any.
    pub fn first_unmet(&self) -> Option<&CheckReport> {
        self.results.iter().find(|r| !r.outcome.is_ready())
    }

    /// Process exit code for this report: 0 when ready, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_ready() {
            0
        } else {
            1
        }
    }
}

/// Runs a list of checks in order, stopping at the first unmet prerequisite.
#[derive(Debug, Clone, Default)]
pub struct Preflight {
    checks: Vec<Check>,
}

impl Preflight {
    /// Create a preflight over the given checks.
    pub fn new(checks: Vec<Check>) -> Self {
        Self { checks }
    }

    /// Run all checks.
    pub fn run(&self, ctx: &CheckContext<'_>) -> PreflightReport {
        self.run_with_progress(ctx, |_| {})
    }

    /// Run all checks, reporting progress through `on_progress`.
    pub fn run_with_progress<F>(
        &self,
        ctx: &CheckContext<'_>,
        mut on_progress: F,
    ) -> PreflightReport
    where
        F: FnMut(RunProgress<'_>),
    {
        let mut report = PreflightReport::default();
        let total = self.checks.len();

        for (index, check) in self.checks.iter().enumerate() {
            let name = check.name();
            on_progress(RunProgress::CheckStarting {
                name: &name,
                index: index + 1,
                total,
            });
            tracing::debug!("Running check [{}/{}] {}", index + 1, total, name);

            let outcome = check.run(ctx);
            on_progress(RunProgress::CheckFinished {
                name: &name,
                outcome: &outcome,
            });

            let ready = outcome.is_ready();
            if !ready {
                tracing::debug!("Check '{}' unmet, stopping", name);
            }
            report.results.push(CheckReport { name, outcome });
            if !ready {
                break;
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{CommandResult, MockRunner};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn identity_runner() -> MockRunner {
        let runner = MockRunner::new();
        runner.installed("git");
        runner.respond(
            "git config --list",
            CommandResult::success("user.email=x@y.com\nuser.name=X\n", ""),
        );
        runner
    }

    #[test]
    fn empty_preflight_is_ready() {
        let runner = MockRunner::new();
        let ctx = CheckContext::with_home(&runner, None);

        let report = Preflight::default().run(&ctx);
        assert!(report.is_ready());
        assert!(report.results.is_empty());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn all_passing_checks_are_reported() {
        let runner = identity_runner();
        let ctx = CheckContext::with_home(&runner, None);
        let preflight = Preflight::new(vec![
            Check::Commands(vec!["git".into()]),
            Check::GitIdentity,
        ]);

        let report = preflight.run(&ctx);
        assert!(report.is_ready());
        assert_eq!(report.results.len(), 2);
        assert!(report.first_unmet().is_none());
    }

    #[test]
    fn stops_at_first_unmet_check() {
        let runner = identity_runner();
        let ctx = CheckContext::with_home(&runner, None);
        let preflight = Preflight::new(vec![
            Check::Commands(vec!["git".into(), "gcloud".into()]),
            Check::GitIdentity,
        ]);

        let report = preflight.run(&ctx);
        assert!(!report.is_ready());
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.results.len(), 1);
        assert_eq!(
            report.first_unmet().map(|r| r.name.as_str()),
            Some("commands (git, gcloud)")
        );
        assert!(!runner
            .invocations()
            .contains(&"git config --list".to_string()));
    }

    #[test]
    fn progress_events_bracket_each_check() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        let ctx = CheckContext::with_home(&runner, None);
        let preflight = Preflight::new(vec![
            Check::EmptyDirectory(temp.path().to_path_buf()),
            Check::FileExists(PathBuf::from("/definitely/not/here")),
        ]);

        let mut events = Vec::new();
        preflight.run_with_progress(&ctx, |event| match event {
            RunProgress::CheckStarting { index, total, .. } => {
                events.push(format!("start {}/{}", index, total))
            }
            RunProgress::CheckFinished { outcome, .. } => {
                events.push(format!("done {}", outcome.is_ready()))
            }
        });

        assert_eq!(
            events,
            vec!["start 1/2", "done true", "start 2/2", "done false"]
        );
    }

    #[test]
    fn report_serializes_flat() {
        let report = PreflightReport {
            results: vec![CheckReport {
                name: "git identity".into(),
                outcome: CheckOutcome::Ready,
            }],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["results"][0]["name"], "git identity");
        assert_eq!(json["results"][0]["status"], "ready");
    }

    #[test]
    fn repeated_runs_agree() {
        let runner = identity_runner();
        let ctx = CheckContext::with_home(&runner, None);
        let preflight = Preflight::new(vec![Check::GitIdentity, Check::GitCookies]);

        assert_eq!(preflight.run(&ctx), preflight.run(&ctx));
    }
}
