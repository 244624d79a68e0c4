//! HTML rendering for parsed CVs.
//!
//! Each section is dispatched to a kind-specific formatter; the fragments
//! are concatenated in document order and wrapped in a fixed shell.
//! Rendering is a pure function of the document and the options: warnings
//! about missing fields are collected in the outcome instead of being
//! printed, and the generation timestamp is only emitted when the caller
//! supplies one.

mod header;
mod labels;
mod sections;
mod template;
mod text;

pub use labels::{Labels, Language};

use chrono::{DateTime, Utc};
use cv_parser::Document;
use template::ShellInputs;

/// Style and label choices for one render.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Photo path or URL referenced from the header fragment.
    pub photo: String,
    pub lang: Language,
    /// Emitted as an HTML comment when present. Tests that compare whole
    /// documents leave it unset.
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            photo: "photo.jpeg".to_string(),
            lang: Language::default(),
            generated_at: None,
        }
    }
}

/// A rendered document plus the diagnostics gathered along the way.
/// Warnings are informational only; they never affect the HTML.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub html: String,
    pub warnings: Vec<String>,
}

/// Render a parsed document into a complete HTML page.
pub fn render(document: &Document, options: &RenderOptions) -> RenderOutcome {
    let labels = Labels::for_language(options.lang);
    let mut warnings = Vec::new();

    let fragments: Vec<String> = document
        .sections
        .iter()
        .map(|section| sections::format_section(section, &document.header, labels, &mut warnings))
        .collect();

    let header_html = header::format_header(&document.header, &options.photo);
    let generated_at = options.generated_at.map(|ts| ts.to_rfc3339());
    let name = text::escape(&document.header.name);

    let html = template::fill_shell(&ShellInputs {
        lang: options.lang.tag(),
        document_title: labels.document_title,
        name: &name,
        header_html: &header_html,
        sections_html: &fragments.join("\n\n"),
        print_label: labels.print,
        share_label: labels.share,
        link_copied_label: labels.link_copied,
        generated_at: generated_at.as_deref(),
    });

    RenderOutcome { html, warnings }
}
