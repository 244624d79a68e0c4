use serde::Serialize;

/// Fully parsed CV: header fields plus sections in source order.
///
/// Built in a single parsing pass and immutable afterwards; the renderer
/// consumes it once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub header: Header,
    pub sections: Vec<Section>,
}

/// Fields extracted from the document's fixed-position prefix.
///
/// Name, title and tagline are empty strings when the prefix does not carry
/// them; contact fields are keyed by marker, not position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Header {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub contact: Contact,
}

/// Contact sub-record. Every field is independently present or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub profile_url: Option<String>,
}

/// Semantic tag derived from a section title.
///
/// Resolved once at parse time so the renderer never re-derives it from the
/// title wording, and stays agnostic to the two supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Profile,
    Experience,
    Education,
    FocusAreas,
    Principles,
    Languages,
    Generic,
}

/// A level-2 block: title, derived kind, flat content, and subsections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub kind: SectionKind,
    pub content: Vec<ContentItem>,
    pub subsections: Vec<Subsection>,
}

/// A flat content entry: either a paragraph line or a bullet item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentItem {
    Paragraph(String),
    Bullet(String),
}

impl ContentItem {
    pub fn paragraph_text(&self) -> Option<&str> {
        match self {
            ContentItem::Paragraph(text) => Some(text),
            ContentItem::Bullet(_) => None,
        }
    }

    pub fn bullet_text(&self) -> Option<&str> {
        match self {
            ContentItem::Bullet(text) => Some(text),
            ContentItem::Paragraph(_) => None,
        }
    }
}

/// A level-3 block nested in a section, typically one job, one degree, or
/// one competency entry.
///
/// `role` holds the first bold line, `period` the first italic line;
/// `description` only collects text that arrived after the period and before
/// any bullets. Text that fits no slot lands in `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Subsection {
    pub title: String,
    pub role: Option<String>,
    pub period: Option<String>,
    pub description: Vec<String>,
    pub bullets: Vec<String>,
    pub content: Vec<ContentItem>,
}
