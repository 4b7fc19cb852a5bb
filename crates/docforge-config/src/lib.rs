//! Configuration model for the docforge documentation toolchain.
//!
//! Produces the configuration object an external documentation generator
//! consumes: project identity, resolved version identifiers, and per-format
//! output descriptors.
//!
//! ```text
//! docforge.toml  →  ProjectMetadata  ─┐
//!                                     ├─  DocConfig::assemble  →  emitted config
//! git describe   →  VersionInfo      ─┘
//! ```
//!
//! Version resolution honors an explicit override from an upstream build
//! orchestrator; when one is present the source-control query never runs.
//! All produced values are computed once per configuration load and are
//! immutable afterwards.

pub mod config;
pub mod formats;
pub mod project;
pub mod version;

pub use config::DocConfig;
pub use project::{ProjectError, ProjectMetadata};
pub use version::{resolve, VersionError, VersionInfo, VersionOverride};
