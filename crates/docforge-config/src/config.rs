//! Assembly of the complete configuration object.
//!
//! `DocConfig::assemble` is pure: every derived field is computed from the
//! project metadata and the resolved version, once per configuration load.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::formats::{HtmlOptions, LatexDocument, ManPage, TexinfoDocument};
use crate::project::ProjectMetadata;
use crate::version::VersionInfo;

/// Entry-point document for every output format.
const MASTER_DOC: &str = "index";
/// Source file extension the generator scans for.
const SOURCE_SUFFIX: &str = ".rst";
/// Directory of page templates relative to the docs tree.
const TEMPLATES_DIR: &str = "_templates";
/// Directory of static assets relative to the docs tree.
const STATIC_DIR: &str = "_static";
/// Build output directory, excluded from the source scan.
const BUILD_DIR: &str = "_build";
/// Syntax highlighting style.
const PYGMENTS_STYLE: &str = "sphinx";
/// Top-level info directory category for texinfo output.
const TEXINFO_CATEGORY: &str = "Miscellaneous";
/// Manual section for generated man pages.
const MAN_SECTION: u8 = 1;

/// The complete configuration handed to the documentation generator.
#[derive(Debug, Clone, Serialize)]
pub struct DocConfig {
    /// Project display name.
    pub project: String,

    /// Copyright line (`"<years>, <company>"`).
    pub copyright: String,

    /// Full descriptive version string.
    pub release: String,

    /// Normalized version string.
    pub version: String,

    pub master_doc: String,
    pub source_suffix: String,
    pub templates_path: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub pygments_style: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_domain: Option<String>,

    /// Substitution block appended to every source document; defines
    /// `|project_name|`.
    pub rst_epilog: String,

    pub html: HtmlOptions,
    pub latex_documents: Vec<LatexDocument>,
    pub man_pages: Vec<ManPage>,
    pub texinfo_documents: Vec<TexinfoDocument>,

    /// Linked documentation sets, name → inventory URL.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub intersphinx: BTreeMap<String, String>,
}

impl DocConfig {
    /// Build the configuration from project identity and resolved version.
    pub fn assemble(project: &ProjectMetadata, version: &VersionInfo) -> Self {
        let title = format!("{} Documentation", project.name);

        Self {
            project: project.name.clone(),
            copyright: project.copyright(),
            release: version.release.clone(),
            version: version.version.clone(),
            master_doc: MASTER_DOC.to_string(),
            source_suffix: SOURCE_SUFFIX.to_string(),
            templates_path: vec![TEMPLATES_DIR.to_string()],
            exclude_patterns: vec![BUILD_DIR.to_string()],
            pygments_style: PYGMENTS_STYLE.to_string(),
            default_role: project.default_role.clone(),
            primary_domain: project.primary_domain.clone(),
            rst_epilog: format!("\n.. |project_name| replace:: {}\n", project.name),
            html: HtmlOptions {
                theme: project.html_theme.clone(),
                style: project.html_style.clone(),
                static_path: vec![STATIC_DIR.to_string()],
                help_basename: format!("{}-doc", project.slug),
            },
            latex_documents: vec![LatexDocument {
                start_doc: MASTER_DOC.to_string(),
                target: format!("{}.tex", project.slug),
                title: title.clone(),
                author: project.company.clone(),
                document_class: "manual".to_string(),
            }],
            man_pages: vec![ManPage {
                source: MASTER_DOC.to_string(),
                name: project.slug.clone(),
                description: title.clone(),
                authors: vec![project.company.clone()],
                section: MAN_SECTION,
            }],
            texinfo_documents: vec![TexinfoDocument {
                start_doc: MASTER_DOC.to_string(),
                target: project.slug.clone(),
                title,
                author: project.company.clone(),
                dir_entry: project.name.clone(),
                description: project.description.clone(),
                category: TEXINFO_CATEGORY.to_string(),
            }],
            intersphinx: project.intersphinx.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> ProjectMetadata {
        toml::from_str(
            r#"
name = "Widget"
slug = "widget"
company = "Acme Corp"
copyright-years = "2012"
description = "A library for widgets."

[intersphinx]
libcork = "http://libcork.readthedocs.org/en/latest/"
"#,
        )
        .unwrap()
    }

    fn sample_version() -> VersionInfo {
        VersionInfo {
            release: "1.2.3-dev-5-gabcdef".to_string(),
            version: "1.2.3-dev".to_string(),
        }
    }

    #[test]
    fn test_assemble_derives_identity_fields() {
        let config = DocConfig::assemble(&sample_project(), &sample_version());
        assert_eq!(config.project, "Widget");
        assert_eq!(config.copyright, "2012, Acme Corp");
        assert_eq!(config.release, "1.2.3-dev-5-gabcdef");
        assert_eq!(config.version, "1.2.3-dev");
    }

    #[test]
    fn test_assemble_epilog_names_the_project() {
        let config = DocConfig::assemble(&sample_project(), &sample_version());
        assert!(config.rst_epilog.contains("|project_name| replace:: Widget"));
    }

    #[test]
    fn test_assemble_descriptor_tuples() {
        let config = DocConfig::assemble(&sample_project(), &sample_version());

        assert_eq!(config.html.help_basename, "widget-doc");

        let latex = &config.latex_documents[0];
        assert_eq!(latex.start_doc, "index");
        assert_eq!(latex.target, "widget.tex");
        assert_eq!(latex.title, "Widget Documentation");
        assert_eq!(latex.author, "Acme Corp");
        assert_eq!(latex.document_class, "manual");

        let man = &config.man_pages[0];
        assert_eq!(man.name, "widget");
        assert_eq!(man.section, 1);
        assert_eq!(man.authors, vec!["Acme Corp".to_string()]);

        let texinfo = &config.texinfo_documents[0];
        assert_eq!(texinfo.dir_entry, "Widget");
        assert_eq!(texinfo.description, "A library for widgets.");
        assert_eq!(texinfo.category, "Miscellaneous");
    }

    #[test]
    fn test_assemble_carries_intersphinx_through() {
        let config = DocConfig::assemble(&sample_project(), &sample_version());
        assert_eq!(
            config.intersphinx.get("libcork").map(String::as_str),
            Some("http://libcork.readthedocs.org/en/latest/")
        );
    }

    #[test]
    fn test_config_serializes_to_json() {
        let config = DocConfig::assemble(&sample_project(), &sample_version());
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["project"], "Widget");
        assert_eq!(value["html"]["help_basename"], "widget-doc");
        assert_eq!(value["man_pages"][0]["section"], 1);
        // Optional fields absent from the sample stay out of the document.
        assert!(value.get("default_role").is_none());
    }
}
