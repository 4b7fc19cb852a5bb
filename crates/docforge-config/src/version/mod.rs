//! Version resolution from source control.
//!
//! Determines the `(release, version)` pair stamped into documentation
//! titles and footers. An upstream build orchestrator may supply both
//! values explicitly; otherwise they derive from `git describe` against
//! the working checkout. A failed query is fatal — there is no fallback
//! version.

mod git;

use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing development suffix, e.g. the `-dev-5-gabcdef` in
/// `1.2.3-dev-5-gabcdef`.
static DEV_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-dev.*$").expect("dev suffix pattern is valid"));

/// Resolved version identifiers, computed once per configuration load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Full descriptive string from source control: nearest tag, commit
    /// distance, abbreviated hash (e.g. `1.2.3-dev-5-gabcdef`).
    pub release: String,

    /// Normalized form with any trailing `-dev*` suffix collapsed to the
    /// literal `-dev` (e.g. `1.2.3-dev`).
    pub version: String,
}

/// Explicit version override supplied by an upstream build orchestrator.
#[derive(Debug, Clone, Default)]
pub struct VersionOverride {
    /// The version to use verbatim. Presence of an override suppresses the
    /// source-control query entirely.
    pub version: String,

    /// Release string accompanying the version. Defaults to `version` when
    /// not supplied, so consumers never observe an unset release.
    pub release: Option<String>,
}

/// Failure to obtain a version from source control. Fatal to configuration
/// loading: no retry, no default.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// `git` could not be spawned (not installed, not on PATH).
    #[error("failed to invoke git: {0}")]
    Spawn(#[from] std::io::Error),

    /// `git describe` ran but reported failure (not a repository, or no
    /// reachable annotated tag).
    #[error("git describe failed: {stderr}")]
    Describe { stderr: String },

    /// `git describe` produced bytes that are not valid UTF-8.
    #[error("git describe produced non-UTF-8 output")]
    NonUtf8,
}

/// Resolve the release/version pair for the current checkout.
///
/// With an override present the source-control query never runs. Without
/// one, `git describe` must succeed.
pub fn resolve(overridden: Option<&VersionOverride>) -> Result<VersionInfo, VersionError> {
    resolve_with(overridden, git::describe)
}

/// Resolution with an injectable describe operation.
///
/// `describe` is invoked only when no override is present and must return
/// the already-trimmed description text.
pub fn resolve_with<F>(
    overridden: Option<&VersionOverride>,
    describe: F,
) -> Result<VersionInfo, VersionError>
where
    F: FnOnce() -> Result<String, VersionError>,
{
    if let Some(o) = overridden {
        let release = o.release.clone().unwrap_or_else(|| o.version.clone());
        tracing::debug!(version = %o.version, %release, "using overridden version");
        return Ok(VersionInfo {
            release,
            version: o.version.clone(),
        });
    }

    let release = describe()?;
    let version = normalize(&release);
    tracing::debug!(%release, %version, "resolved version from source control");
    Ok(VersionInfo { release, version })
}

/// Collapse a trailing `-dev<anything>` suffix to the literal `-dev`.
fn normalize(release: &str) -> String {
    DEV_SUFFIX.replace(release, "-dev").into_owned()
}
