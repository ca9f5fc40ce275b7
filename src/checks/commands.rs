//! External program availability.

use crate::shell::CommandRunner;

use super::{CheckOutcome, Hint};

/// Argument passed to every program when probing for it.
pub const VERSION_PROBE_ARG: &str = "--version";

/// Verify that every program in `names` can be invoked.
///
/// Each program is run once with [`VERSION_PROBE_ARG`]. A program that
/// cannot be launched, or whose probe exits non-zero, is reported as
/// missing. This means an installed program that rejects `--version` is
/// indistinguishable from one that is not installed.
///
/// All programs are probed before reporting, so the failure names every
/// missing program in the order given.
pub fn check_commands<S: AsRef<str>>(runner: &dyn CommandRunner, names: &[S]) -> CheckOutcome {
    let mut missing = Vec::new();

    for name in names {
        let name = name.as_ref();
        let found = match runner.run(name, &[VERSION_PROBE_ARG]) {
            Ok(result) => result.success,
            Err(_) => false,
        };
        tracing::debug!("Probe for `{}`: {}", name, if found { "found" } else { "missing" });
        if !found {
            missing.push(name.to_string());
        }
    }

    if missing.is_empty() {
        return CheckOutcome::Ready;
    }

    CheckOutcome::unmet(
        format!(
            "The following required programs are not installed: {}",
            missing.join(", ")
        ),
        vec![Hint::text(
            "Install them and make sure they are available on your PATH.",
        )],
    )
}
