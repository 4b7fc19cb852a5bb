//! Project metadata loading from `docforge.toml`.
//!
//! Checks two locations in precedence order:
//! 1. `./docforge.toml` (project root)
//! 2. `./docs/docforge.toml` (docs tree)
//!
//! A missing or unparsable file is an error — the configuration is useless
//! without a project identity.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde::Deserialize;

const PROJECT_FILENAME: &str = "docforge.toml";
const DOCS_DIR: &str = "docs";

fn default_copyright_years() -> String {
    chrono::Utc::now().year().to_string()
}

fn default_html_theme() -> String {
    "default".to_string()
}

/// Project identity for the documentation build, parsed from
/// `docforge.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectMetadata {
    /// Display name used in titles.
    pub name: String,

    /// Lowercase identifier used for output file stems.
    pub slug: String,

    /// Author / organization credited in every output format.
    pub company: String,

    /// Years shown in the copyright line. Defaults to the current year.
    #[serde(default = "default_copyright_years")]
    pub copyright_years: String,

    /// One-line description used by the texinfo descriptor.
    #[serde(default)]
    pub description: String,

    /// Role applied to unannotated interpreted text (e.g. `c:func`).
    pub default_role: Option<String>,

    /// Domain assumed for unprefixed directives (e.g. `c`).
    pub primary_domain: Option<String>,

    /// HTML theme name understood by the generator. Defaults to `default`.
    #[serde(default = "default_html_theme")]
    pub html_theme: String,

    /// Stylesheet applied on top of the theme.
    pub html_style: Option<String>,

    /// Linked documentation sets, name → inventory URL.
    #[serde(default)]
    pub intersphinx: BTreeMap<String, String>,
}

impl ProjectMetadata {
    /// Load metadata from an explicit `docforge.toml` path.
    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ProjectError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let metadata: Self = toml::from_str(&contents).map_err(|e| ProjectError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), project = %metadata.name, "loaded project metadata");
        Ok(metadata)
    }

    /// Discover and load `docforge.toml` under `dir`, checking the project
    /// root before the docs tree.
    pub fn discover(dir: &Path) -> Result<Self, ProjectError> {
        let candidates = [
            dir.join(PROJECT_FILENAME),
            dir.join(DOCS_DIR).join(PROJECT_FILENAME),
        ];
        for candidate in candidates {
            if candidate.is_file() {
                return Self::load(&candidate);
            }
        }
        Err(ProjectError::NotFound {
            dir: dir.to_path_buf(),
        })
    }

    /// Copyright line: `"<years>, <company>"`.
    pub fn copyright(&self) -> String {
        format!("{}, {}", self.copyright_years, self.company)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("no docforge.toml found under {dir}")]
    NotFound { dir: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_metadata() {
        let toml_str = r#"
name = "Widget"
slug = "widget"
company = "Acme Corp"
copyright-years = "2012"
description = "A library for widgets."
default-role = "c:func"
primary-domain = "c"
html-theme = "alabaster"
html-style = "widget.css"

[intersphinx]
libcork = "http://libcork.readthedocs.org/en/latest/"
"#;
        let meta: ProjectMetadata = toml::from_str(toml_str).unwrap();
        assert_eq!(meta.name, "Widget");
        assert_eq!(meta.slug, "widget");
        assert_eq!(meta.copyright_years, "2012");
        assert_eq!(meta.default_role.as_deref(), Some("c:func"));
        assert_eq!(meta.primary_domain.as_deref(), Some("c"));
        assert_eq!(meta.html_theme, "alabaster");
        assert_eq!(meta.html_style.as_deref(), Some("widget.css"));
        assert_eq!(
            meta.intersphinx.get("libcork").map(String::as_str),
            Some("http://libcork.readthedocs.org/en/latest/")
        );
    }

    #[test]
    fn test_parse_minimal_metadata_applies_defaults() {
        let toml_str = r#"
name = "Widget"
slug = "widget"
company = "Acme Corp"
"#;
        let meta: ProjectMetadata = toml::from_str(toml_str).unwrap();
        assert_eq!(meta.copyright_years, chrono::Utc::now().year().to_string());
        assert_eq!(meta.html_theme, "default");
        assert!(meta.html_style.is_none());
        assert!(meta.description.is_empty());
        assert!(meta.intersphinx.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_identity() {
        let err = toml::from_str::<ProjectMetadata>("name = \"Widget\"").unwrap_err();
        assert!(err.to_string().contains("slug") || err.to_string().contains("missing"));
    }

    #[test]
    fn test_copyright_line() {
        let meta: ProjectMetadata = toml::from_str(
            r#"
name = "Widget"
slug = "widget"
company = "Acme Corp"
copyright-years = "2012"
"#,
        )
        .unwrap();
        assert_eq!(meta.copyright(), "2012, Acme Corp");
    }

    #[test]
    fn test_discover_prefers_project_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(
            dir.path().join("docforge.toml"),
            "name = \"Root\"\nslug = \"root\"\ncompany = \"Acme\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("docs").join("docforge.toml"),
            "name = \"Docs\"\nslug = \"docs\"\ncompany = \"Acme\"\n",
        )
        .unwrap();

        let meta = ProjectMetadata::discover(dir.path()).unwrap();
        assert_eq!(meta.name, "Root");
    }

    #[test]
    fn test_discover_falls_back_to_docs_tree() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(
            dir.path().join("docs").join("docforge.toml"),
            "name = \"Docs\"\nslug = \"docs\"\ncompany = \"Acme\"\n",
        )
        .unwrap();

        let meta = ProjectMetadata::discover(dir.path()).unwrap();
        assert_eq!(meta.name, "Docs");
    }

    #[test]
    fn test_discover_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectMetadata::discover(dir.path()).unwrap_err();
        assert!(matches!(err, ProjectError::NotFound { .. }));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docforge.toml");
        std::fs::write(&path, "name = [unclosed").unwrap();

        let err = ProjectMetadata::load(&path).unwrap_err();
        assert!(matches!(err, ProjectError::Parse { .. }));
    }
}
