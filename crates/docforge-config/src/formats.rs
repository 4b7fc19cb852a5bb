//! Per-format output descriptors.
//!
//! Each output format the documentation generator supports gets a fixed
//! descriptor: entry point, output identifier, title, author/organization,
//! and format-specific extras.

use serde::Serialize;

/// HTML rendering options.
#[derive(Debug, Clone, Serialize)]
pub struct HtmlOptions {
    /// Theme name understood by the generator.
    pub theme: String,

    /// Stylesheet applied on top of the theme, when the project supplies
    /// one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Directories of static assets copied verbatim into the output.
    pub static_path: Vec<String>,

    /// Basename for generated HTML help files (`<slug>-doc`).
    pub help_basename: String,
}

/// A LaTeX document to produce.
#[derive(Debug, Clone, Serialize)]
pub struct LatexDocument {
    /// Document that serves as the entry point.
    pub start_doc: String,

    /// Output file name (`<slug>.tex`).
    pub target: String,

    /// Title printed on the cover page.
    pub title: String,

    /// Author / organization.
    pub author: String,

    /// LaTeX document class (`manual` or `howto`).
    pub document_class: String,
}

/// A man page to produce.
#[derive(Debug, Clone, Serialize)]
pub struct ManPage {
    /// Document that serves as the entry point.
    pub source: String,

    /// Page name as installed (`<slug>`).
    pub name: String,

    /// Short description shown in the NAME section.
    pub description: String,

    /// Authors credited in the page footer.
    pub authors: Vec<String>,

    /// Manual section number.
    pub section: u8,
}

/// A texinfo document to produce.
#[derive(Debug, Clone, Serialize)]
pub struct TexinfoDocument {
    /// Document that serves as the entry point.
    pub start_doc: String,

    /// Output file name (`<slug>`).
    pub target: String,

    /// Title of the document.
    pub title: String,

    /// Author / organization.
    pub author: String,

    /// Entry name in the top-level info directory.
    pub dir_entry: String,

    /// One-line description of the project.
    pub description: String,

    /// Directory category the entry is filed under.
    pub category: String,
}
