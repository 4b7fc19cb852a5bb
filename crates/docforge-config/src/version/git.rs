//! The `git describe` subprocess call.
//!
//! Uses the `git` CLI via `std::process::Command` — a documentation build
//! already runs inside a checkout, and the CLI handles every repository
//! layout (worktrees, submodules, shallow clones with tags fetched).
//! Invoked bare, so only annotated tags are considered.

use std::process::Command;

use super::VersionError;

/// Run `git describe` in the current working directory and return the
/// trimmed description.
pub(crate) fn describe() -> Result<String, VersionError> {
    let output = Command::new("git").arg("describe").output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(VersionError::Describe { stderr });
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| VersionError::NonUtf8)?;
    Ok(stdout.trim().to_string())
}
