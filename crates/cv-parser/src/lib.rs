//! Line-oriented parser for markdown CVs.
//!
//! The dialect is a small markdown subset: a level-1 heading plus emphasis
//! lines form the header, level-2 headings open sections, level-3 headings
//! open subsections, and bold/italic/bullet lines inside a subsection fill
//! its role, period, description and bullet slots. Parsing is a single pass
//! over the lines and never fails; malformed input degrades to empty or
//! absent fields.

mod header;
mod line;
mod model;
mod section;
mod state;

pub use line::normalize_inline_text;
pub use model::{Contact, ContentItem, Document, Header, Section, SectionKind, Subsection};
pub use section::resolve_section_kind;

use line::LineKind;
use state::State;

/// Number of leading lines scanned for header fields and contact markers.
const HEADER_PREFIX_LINES: usize = 15;

/// Parse a markdown CV into its structured form.
///
/// The header is extracted from the fixed-position prefix in a separate scan;
/// the section scanner then walks every line, classifying each one by its
/// leading marker. Lines that appear before the first level-2 heading carry
/// no open section and fall through as no-ops, so the two scans never
/// interfere.
pub fn parse(text: &str) -> Document {
    let lines: Vec<&str> = text.lines().collect();

    let prefix_len = lines.len().min(HEADER_PREFIX_LINES);
    let header = header::parse_header(&lines[..prefix_len]);

    let mut state = State::new();
    for raw in &lines {
        match line::classify(raw) {
            LineKind::SectionHeading(title) => state.enter_section(title),
            LineKind::SubsectionHeading(title) => state.enter_subsection(title),
            LineKind::Bold(raw) => state.push_bold(raw),
            LineKind::Italic(raw) => state.push_italic(raw),
            LineKind::Bullet(text) => state.push_bullet(text),
            LineKind::Rule | LineKind::Blank => {}
            LineKind::Text(text) => state.push_text(text),
        }
    }

    Document {
        header,
        sections: state.finalize(),
    }
}
