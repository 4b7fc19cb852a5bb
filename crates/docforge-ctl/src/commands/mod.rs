//! Command handlers for the docforge CLI.
//!
//! Each module handles one subcommand, delegating to `docforge-config` for
//! resolution and assembly.

pub(crate) mod emit;
pub(crate) mod init;
pub(crate) mod version;

pub(crate) use emit::handle_emit_command;
pub(crate) use init::handle_init_command;
pub(crate) use version::handle_version_command;

use docforge_config::VersionOverride;

/// Build the resolver override from the shared `--set-version` /
/// `--set-release` flags. Release alone never forms an override; clap
/// enforces that it only appears alongside a version.
pub(crate) fn override_from(
    set_version: Option<String>,
    set_release: Option<String>,
) -> Option<VersionOverride> {
    set_version.map(|version| VersionOverride {
        version,
        release: set_release,
    })
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum CommandError {
    #[error(transparent)]
    Version(#[from] docforge_config::VersionError),

    #[error(transparent)]
    Project(#[from] docforge_config::ProjectError),

    #[error("docforge.toml already exists; refusing to overwrite")]
    AlreadyInitialized,

    #[error("failed to write {path}: {source}")]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize configuration: {0}")]
    Toml(#[from] toml::ser::Error),
}
