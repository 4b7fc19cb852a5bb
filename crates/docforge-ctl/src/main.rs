//! `docforge-ctl` — resolve versions and emit documentation-build
//! configuration for an external documentation generator.

mod commands;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "docforge-ctl",
    version,
    about = "Resolve versions and emit documentation-build configuration",
    styles = output::clap_styles()
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve the release/version pair for the current checkout
    Version(commands::version::VersionArgs),

    /// Assemble and emit the configuration document
    Emit(commands::emit::EmitArgs),

    /// Create a starter docforge.toml in the current directory
    Init(commands::init::InitArgs),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Version(args) => commands::handle_version_command(args),
        Command::Emit(args) => commands::handle_emit_command(args),
        Command::Init(args) => commands::handle_init_command(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(e);
            ExitCode::FAILURE
        }
    }
}
