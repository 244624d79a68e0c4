use pulldown_cmark::{Event, Options, Parser};

/// One source line, classified by its leading marker.
///
/// Classification looks at markers only; whether a bold or italic line ends
/// up as a field or as plain content depends on scanner state and is decided
/// by the caller. `Bold` and `Italic` therefore carry the raw trimmed line
/// so it can still be stored verbatim when it falls through to content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    SectionHeading(&'a str),
    SubsectionHeading(&'a str),
    Bold(&'a str),
    Italic(&'a str),
    Bullet(&'a str),
    Rule,
    Blank,
    Text(&'a str),
}

pub fn classify(raw: &str) -> LineKind<'_> {
    let line = raw.trim();

    if line.is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return LineKind::SectionHeading(rest.trim());
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return LineKind::SubsectionHeading(rest.trim());
    }
    if let Some(rest) = line.strip_prefix("- ") {
        return LineKind::Bullet(rest.trim());
    }
    if line.starts_with("---") {
        return LineKind::Rule;
    }
    if line.starts_with("**") {
        return LineKind::Bold(line);
    }
    if line.starts_with('*') {
        return LineKind::Italic(line);
    }

    LineKind::Text(line)
}

/// Strip emphasis markers from a single line and collapse whitespace.
///
/// Runs the text through the markdown event stream instead of trimming
/// asterisks by hand, so `**Senior *Lead* Engineer**` comes out flat.
/// Unbalanced markers that survive as literal text are trimmed off the ends.
pub fn normalize_inline_text(input: &str) -> String {
    let mut segments = Vec::new();
    let parser = Parser::new_ext(input, Options::empty());

    for event in parser {
        match event {
            Event::Text(cow) | Event::Code(cow) => segments.push(cow.to_string()),
            Event::SoftBreak | Event::HardBreak => segments.push(" ".to_string()),
            _ => {}
        }
    }

    let joined = segments.join("");
    let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_matches('*').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_heading_levels() {
        assert_eq!(classify("## Profil"), LineKind::SectionHeading("Profil"));
        assert_eq!(
            classify("### Acme Corp"),
            LineKind::SubsectionHeading("Acme Corp")
        );
        // A level-4 heading is not part of the dialect.
        assert_eq!(classify("#### Deep"), LineKind::Text("#### Deep"));
    }

    #[test]
    fn distinguishes_bold_from_italic() {
        assert_eq!(classify("**Engineer**"), LineKind::Bold("**Engineer**"));
        assert_eq!(classify("*2019 - 2021*"), LineKind::Italic("*2019 - 2021*"));
    }

    #[test]
    fn recognizes_bullets_rules_and_blanks() {
        assert_eq!(classify("- Built things"), LineKind::Bullet("Built things"));
        assert_eq!(classify("---"), LineKind::Rule);
        assert_eq!(classify("   "), LineKind::Blank);
    }

    #[test]
    fn rule_is_not_mistaken_for_bullet() {
        assert_eq!(classify("----"), LineKind::Rule);
    }

    #[test]
    fn normalizes_emphasis_markers() {
        assert_eq!(normalize_inline_text("**Acme Corp**"), "Acme Corp");
        assert_eq!(normalize_inline_text("*2019 - 2021*"), "2019 - 2021");
        assert_eq!(
            normalize_inline_text("**Senior *Lead* Engineer**"),
            "Senior Lead Engineer"
        );
    }

    #[test]
    fn normalization_trims_unbalanced_markers() {
        assert_eq!(normalize_inline_text("*2019 - 2021"), "2019 - 2021");
    }
}
