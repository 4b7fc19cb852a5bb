//! `docforge-ctl emit` — assemble and emit the configuration document.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use docforge_config::{version, DocConfig, ProjectMetadata};

use super::CommandError;
use crate::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum EmitFormat {
    Json,
    Toml,
}

#[derive(Debug, Args)]
pub(crate) struct EmitArgs {
    /// Output format for the configuration document
    #[arg(long, value_enum, default_value = "json")]
    pub format: EmitFormat,

    /// Write to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory to search for docforge.toml
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

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

pub(crate) fn handle_emit_command(args: EmitArgs) -> Result<(), CommandError> {
    let metadata = ProjectMetadata::discover(&args.project_dir)?;
    let overridden = super::override_from(args.set_version, args.set_release);
    let info = version::resolve(overridden.as_ref())?;
    let config = DocConfig::assemble(&metadata, &info);
    tracing::debug!(project = %config.project, release = %config.release, "assembled configuration");

    let rendered = match args.format {
        EmitFormat::Json => serde_json::to_string_pretty(&config)?,
        EmitFormat::Toml => toml::to_string_pretty(&config)?,
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered).map_err(|e| CommandError::Write {
                path: path.clone(),
                source: e,
            })?;
            output::success(format!("Wrote configuration to {}", path.display()));
        }
        None => output::plain(rendered),
    }
    Ok(())
}
