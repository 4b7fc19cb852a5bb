//! `docforge-ctl init` — write a starter docforge.toml.

use std::path::Path;

use clap::Args;

use super::CommandError;
use crate::output;

const PROJECT_FILENAME: &str = "docforge.toml";

#[derive(Debug, Args)]
pub(crate) struct InitArgs {
    /// Project display name
    #[arg(long, default_value = "APPNAME")]
    pub name: String,

    /// Author / organization
    #[arg(long, default_value = "COMPANY")]
    pub company: String,
}

pub(crate) fn handle_init_command(args: InitArgs) -> Result<(), CommandError> {
    let path = Path::new(PROJECT_FILENAME);
    if path.exists() {
        return Err(CommandError::AlreadyInitialized);
    }

    let slug = args.name.to_lowercase().replace(' ', "-");
    let contents = starter_config(&args.name, &slug, &args.company);
    std::fs::write(path, contents).map_err(|e| CommandError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    output::success(format!("Created {PROJECT_FILENAME}"));
    output::hint("Edit it to fill in your project details.");
    Ok(())
}

fn starter_config(name: &str, slug: &str, company: &str) -> String {
    format!(
        r#"# Project identity for the documentation build.
name = "{name}"
slug = "{slug}"
company = "{company}"
description = "One line description of project."

# Defaults to the current year when omitted.
# copyright-years = "2012"

# Role and domain applied to unannotated markup.
# default-role = "c:func"
# primary-domain = "c"

# HTML rendering. Theme defaults to "default".
# html-theme = "default"
# html-style = "{slug}.css"

# Linked documentation sets (name = inventory URL).
# [intersphinx]
# libcork = "http://libcork.readthedocs.org/en/latest/"
"#
    )
}
