//! `docforge-ctl version` — resolve and print the release/version pair.

use clap::Args;
use docforge_config::version;

use super::CommandError;
use crate::output;

#[derive(Debug, Args)]
pub(crate) struct VersionArgs {
    /// Use this version verbatim instead of querying source control
    #[arg(long, env = "DOCFORGE_VERSION", value_name = "VERSION")]
    pub set_version: Option<String>,

    /// Release string accompanying --set-version (defaults to the version)
    #[arg(
        long,
        env = "DOCFORGE_RELEASE",
        value_name = "RELEASE",
        requires = "set_version"
    )]
    pub set_release: Option<String>,
}

pub(crate) fn handle_version_command(args: VersionArgs) -> Result<(), CommandError> {
    let overridden = super::override_from(args.set_version, args.set_release);
    let info = version::resolve(overridden.as_ref())?;

    output::label("Release", &info.release);
    output::label("Version", &info.version);
    Ok(())
}
