//! Git identity and Cloud Source Repositories credentials.

use std::fs;
use std::path::Path;

use crate::shell::CommandRunner;

use super::{CheckOutcome, Hint};

/// Credential file read from the user's home directory.
pub const GITCOOKIES_FILE: &str = ".gitcookies";

/// Domain that must appear in the credential file.
pub const SOURCE_REPOS_DOMAIN: &str = "source.developers.google.com";

const SOURCE_REPOS_AUTH_DOCS: &str =
    "https://cloud.google.com/source-repositories/docs/authentication";

/// Verify that git has a user identity configured.
///
/// Runs `git config --list` and requires a zero exit with both `email`
/// and `name` somewhere in the output.
pub fn check_git_identity(runner: &dyn CommandRunner) -> CheckOutcome {
    let configured = match runner.run("git", &["config", "--list"]) {
        Ok(result) => {
            result.success && result.stdout.contains("email") && result.stdout.contains("name")
        }
        Err(_) => false,
    };

    if configured {
        return CheckOutcome::Ready;
    }

    CheckOutcome::unmet(
        "Git user identity is not configured",
        vec![
            Hint::command(
                "Set your email with:",
                "git config --global user.email \"you@example.com\"",
            ),
            Hint::command(
                "Set your name with:",
                "git config --global user.name \"Your Name\"",
            ),
        ],
    )
}

/// Verify that `<home>/.gitcookies` holds Cloud Source Repositories credentials.
///
/// A missing home directory, a missing or unreadable file, and a file
/// without [`SOURCE_REPOS_DOMAIN`] all produce the same outcome, since the
/// fix is the same in every case.
pub fn check_git_cookies(home: Option<&Path>) -> CheckOutcome {
    let authenticated = home
        .map(|home| home.join(GITCOOKIES_FILE))
        .and_then(|path| match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::debug!("Could not read {}: {}", path.display(), e);
                None
            }
        })
        .is_some_and(|content| content.contains(SOURCE_REPOS_DOMAIN));

    if authenticated {
        return CheckOutcome::Ready;
    }

    CheckOutcome::unmet(
        "Git is not authenticated with Cloud Source Repositories",
        vec![Hint::text(format!(
            "Follow the instructions at {} to generate ~/{}.",
            SOURCE_REPOS_AUTH_DOCS, GITCOOKIES_FILE
        ))],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{CommandResult, MockRunner};
    use tempfile::TempDir;

    const LIST: &str = "git config --list";

    #[test]
    fn identity_with_email_and_name_is_ready() {
        let runner = MockRunner::new();
        runner.respond(
            LIST,
            CommandResult::success("core.editor=vim\nuser.email=x@y.com\nuser.name=X\n", ""),
        );

        assert_eq!(check_git_identity(&runner), CheckOutcome::Ready);
    }

    #[test]
    fn identity_with_only_email_fails() {
        let runner = MockRunner::new();
        runner.respond(LIST, CommandResult::success("user.email=x@y.com\n", ""));

        match check_git_identity(&runner) {
            CheckOutcome::Unmet { hints, .. } => assert_eq!(hints.len(), 2),
            CheckOutcome::Ready => panic!("expected unmet outcome"),
        }
    }

    #[test]
    fn identity_fails_on_nonzero_exit() {
        let runner = MockRunner::new();
        runner.respond(
            LIST,
            CommandResult::failure(Some(128), "user.email=x@y.com\nuser.name=X\n", ""),
        );

        assert!(!check_git_identity(&runner).is_ready());
    }

    #[test]
    fn identity_fails_without_git() {
        let runner = MockRunner::new();
        assert!(!check_git_identity(&runner).is_ready());
    }

    #[test]
    fn identity_is_idempotent() {
        let runner = MockRunner::new();
        runner.respond(LIST, CommandResult::success("user.email=x@y.com\n", ""));

        assert_eq!(check_git_identity(&runner), check_git_identity(&runner));
        assert_eq!(runner.invocations().len(), 2);
    }

    #[test]
    fn cookies_with_domain_are_ready() {
        let home = TempDir::new().unwrap();
        fs::write(
            home.path().join(GITCOOKIES_FILE),
            "source.developers.google.com\tFALSE\t/\tTRUE\t2147483647\to\tgit-me=1//abc\n",
        )
        .unwrap();

        assert_eq!(check_git_cookies(Some(home.path())), CheckOutcome::Ready);
    }

    #[test]
    fn cookies_without_domain_fail() {
        let home = TempDir::new().unwrap();
        fs::write(
            home.path().join(GITCOOKIES_FILE),
            "example.com\tFALSE\t/\tTRUE\t0\to\tvalue\n",
        )
        .unwrap();

        assert!(!check_git_cookies(Some(home.path())).is_ready());
    }

    #[test]
    fn missing_cookies_file_gives_same_failure_as_wrong_content() {
        let empty_home = TempDir::new().unwrap();
        let wrong_home = TempDir::new().unwrap();
        fs::write(wrong_home.path().join(GITCOOKIES_FILE), "nothing here").unwrap();

        let missing = check_git_cookies(Some(empty_home.path()));
        let wrong = check_git_cookies(Some(wrong_home.path()));
        assert_eq!(missing, wrong);
        assert_eq!(check_git_cookies(None), missing);
    }

    #[test]
    fn cookies_failure_links_documentation() {
        match check_git_cookies(None) {
            CheckOutcome::Unmet { hints, .. } => {
                assert!(hints[0].text.contains(SOURCE_REPOS_AUTH_DOCS));
            }
            CheckOutcome::Ready => panic!("expected unmet outcome"),
        }
    }
}
