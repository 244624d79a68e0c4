use cv_parser::{ContentItem, Header, Section, SectionKind, Subsection};

use crate::labels::Labels;
use crate::text::{escape, inline_markup};

/// Delimiter between period and location inside a period field.
const PERIOD_LOCATION_DELIMITER: char = '|';

/// Delimiter used when joining language entries into one line.
const LANGUAGE_DELIMITER: &str = " · ";

/// Substrings that mark the distinguished methods subsection of a
/// focus-areas section, both languages.
const METHODS_MARKERS: &[&str] = &["methoden", "methods"];

/// Keyword substrings that identify a degree line, case-insensitive.
const DEGREE_KEYWORDS: &[&str] = &["bachelor", "master", "b.sc", "m.sc", "diplom"];

/// Dispatch one section to its kind-specific formatter. Unknown kinds fall
/// back to the generic formatter. Missing fields inside a section are
/// reported through `warnings` and never fail the render.
pub fn format_section(
    section: &Section,
    header: &Header,
    labels: &Labels,
    warnings: &mut Vec<String>,
) -> String {
    match section.kind {
        SectionKind::Profile => format_profile(section, header),
        SectionKind::Experience => format_experience(section, warnings),
        SectionKind::Education => format_education(section, warnings),
        SectionKind::FocusAreas => format_focus_areas(section, labels),
        SectionKind::Principles => format_principles(section),
        SectionKind::Languages => format_languages(section),
        SectionKind::Generic => format_generic(section),
    }
}

/// Common section wrapper: titled block with the shared heading style.
fn section_shell(title: &str, body: &str) -> String {
    format!(
        "      <section class=\"mb-12\">\n        <h2 class=\"text-xl font-medium text-gray-900 mb-4 pb-2 border-b border-gray-200\">{}</h2>\n{}\n      </section>",
        escape(title),
        body
    )
}

fn format_profile(section: &Section, header: &Header) -> String {
    let mut paragraphs = Vec::new();

    if !header.tagline.is_empty() {
        paragraphs.push(format!(
            "          <p class=\"italic text-gray-500\">{}</p>",
            inline_markup(&header.tagline)
        ));
    }

    for item in &section.content {
        if let Some(text) = item.paragraph_text() {
            paragraphs.push(format!("          <p>{}</p>", inline_markup(text)));
        }
    }

    let body = format!(
        "        <div class=\"text-xs text-gray-700 space-y-3 leading-relaxed\">\n{}\n        </div>",
        paragraphs.join("\n")
    );
    section_shell(&section.title, &body)
}

fn format_experience(section: &Section, warnings: &mut Vec<String>) -> String {
    let entries: Vec<String> = section
        .subsections
        .iter()
        .map(|subsection| format_experience_entry(subsection, warnings))
        .collect();

    section_shell(&section.title, &entries.join("\n"))
}

fn format_experience_entry(subsection: &Subsection, warnings: &mut Vec<String>) -> String {
    if subsection.role.is_none() {
        warnings.push(format!(
            "experience entry '{}' has no job title",
            subsection.title
        ));
    }
    if subsection.period.is_none() {
        warnings.push(format!(
            "experience entry '{}' has no period",
            subsection.title
        ));
    }

    let heading = match &subsection.role {
        Some(role) if !subsection.title.is_empty() => {
            format!("{} · {}", escape(role), escape(&subsection.title))
        }
        Some(role) => escape(role),
        None => escape(&subsection.title),
    };

    let mut entry = format!(
        "        <div class=\"mb-10\">\n          <h3 class=\"text-base font-semibold text-gray-900 mb-3\">{heading}</h3>"
    );

    if let Some(raw_period) = &subsection.period {
        let (period, location) = split_period_location(raw_period);
        let mut line = format!(
            "<span class=\"entry-period\">{}</span>",
            escape(period)
        );
        if let Some(location) = location {
            line.push_str(&format!(
                " <span class=\"entry-location\">{}</span>",
                escape(location)
            ));
        }
        entry.push_str(&format!(
            "\n          <p class=\"text-xs text-gray-500 italic mb-2\">{line}</p>"
        ));
    }

    if !subsection.description.is_empty() {
        entry.push_str(&format!(
            "\n          <p class=\"text-xs text-gray-600 mb-3\">{}</p>",
            inline_markup(&subsection.description.join(" "))
        ));
    }

    if !subsection.bullets.is_empty() {
        let items: Vec<String> = subsection
            .bullets
            .iter()
            .map(|bullet| format!("              <li>• {}</li>", inline_markup(bullet)))
            .collect();
        entry.push_str(&format!(
            "\n          <ul class=\"text-xs text-gray-700 space-y-1.5 ml-4\">\n{}\n          </ul>",
            items.join("\n")
        ));
    }

    entry.push_str("\n        </div>");
    entry
}

/// Split a period field on the fixed delimiter into period and location.
fn split_period_location(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once(PERIOD_LOCATION_DELIMITER) {
        Some((period, location)) => (period.trim(), Some(location.trim())),
        None => (raw.trim(), None),
    }
}

fn format_education(section: &Section, warnings: &mut Vec<String>) -> String {
    let blocks: Vec<String> = if section.subsections.is_empty() {
        format_education_flat(section).into_iter().collect()
    } else {
        section
            .subsections
            .iter()
            .map(|subsection| format_education_entry(subsection, warnings))
            .collect()
    };

    section_shell(&section.title, &blocks.join("\n"))
}

fn format_education_entry(subsection: &Subsection, warnings: &mut Vec<String>) -> String {
    let degree = subsection
        .content
        .iter()
        .filter_map(ContentItem::paragraph_text)
        .chain(subsection.description.iter().map(String::as_str))
        .find(|text| is_degree_line(text));

    if subsection.period.is_none() {
        warnings.push(format!(
            "education entry '{}' has no period",
            subsection.title
        ));
    }

    education_block(
        &subsection.title,
        degree.unwrap_or_default(),
        subsection.period.as_deref().unwrap_or_default(),
    )
}

/// Fallback for sections without subsections: scan the flat content for a
/// bold institution line, a degree-keyword line and an italic period line.
fn format_education_flat(section: &Section) -> Option<String> {
    let mut institution = "";
    let mut degree = "";
    let mut period = "";

    for item in &section.content {
        let Some(text) = item.paragraph_text() else {
            continue;
        };

        if text.starts_with("**") && institution.is_empty() {
            institution = text.trim_matches('*').trim();
        } else if is_degree_line(text) && degree.is_empty() {
            degree = text;
        } else if text.starts_with('*') && period.is_empty() {
            period = text.trim_matches('*').trim();
        }
    }

    if institution.is_empty() {
        return None;
    }

    Some(education_block(institution, degree, period))
}

fn education_block(institution: &str, degree: &str, period: &str) -> String {
    format!(
        "        <div class=\"mb-2\">\n          <p class=\"font-semibold text-gray-900\">{}</p>\n          <p class=\"text-gray-700\">{}</p>\n          <p class=\"text-sm text-gray-600 italic\">{}</p>\n        </div>",
        escape(institution),
        escape(degree),
        escape(period)
    )
}

fn is_degree_line(text: &str) -> bool {
    let lowered = text.to_lowercase();
    DEGREE_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

fn format_focus_areas(section: &Section, labels: &Labels) -> String {
    let mut cards = Vec::new();
    let mut method_items: &[String] = &[];

    for subsection in &section.subsections {
        let lowered = subsection.title.to_lowercase();
        if METHODS_MARKERS.iter().any(|marker| lowered.contains(marker)) {
            method_items = &subsection.bullets;
        } else {
            cards.push(card(&subsection.title, &joined_text(subsection), "h3"));
        }
    }

    let mut body = card_grid(&cards);

    if !method_items.is_empty() {
        let pills: Vec<String> = method_items
            .iter()
            .map(|item| {
                format!(
                    "            <span class=\"px-3 py-1 bg-white border border-gray-300 rounded-full text-xs text-gray-700 whitespace-nowrap\">{}</span>",
                    escape(item)
                )
            })
            .collect();
        body.push_str(&format!(
            "\n        <div class=\"mt-6 pt-4 border-t border-gray-200\">\n          <p class=\"text-xs text-gray-500 mb-3\">{}</p>\n          <div class=\"flex flex-wrap gap-2\">\n{}\n          </div>\n        </div>",
            escape(labels.methods),
            pills.join("\n")
        ));
    }

    section_shell(&section.title, &body)
}

fn format_principles(section: &Section) -> String {
    let cards: Vec<String> = section
        .subsections
        .iter()
        .map(|subsection| card(&subsection.title, &joined_text(subsection), "h4"))
        .collect();

    section_shell(&section.title, &card_grid(&cards))
}

/// Join a card subsection's text: content paragraphs first, then any
/// description lines.
fn joined_text(subsection: &Subsection) -> String {
    let mut parts: Vec<&str> = subsection
        .content
        .iter()
        .filter_map(ContentItem::paragraph_text)
        .collect();
    parts.extend(subsection.description.iter().map(String::as_str));
    parts.join(" ")
}

fn card(title: &str, text: &str, heading_tag: &str) -> String {
    format!(
        "          <div class=\"bg-gray-50 p-4 rounded border border-gray-200\">\n            <{tag} class=\"text-sm font-medium text-gray-900 mb-1.5\">{title}</{tag}>\n            <p class=\"text-xs text-gray-700 leading-relaxed\">{text}</p>\n          </div>",
        tag = heading_tag,
        title = escape(title),
        text = inline_markup(text)
    )
}

fn card_grid(cards: &[String]) -> String {
    format!(
        "        <div class=\"grid grid-cols-2 gap-4\">\n{}\n        </div>",
        cards.join("\n")
    )
}

fn format_languages(section: &Section) -> String {
    let mut items: Vec<&str> = section
        .content
        .iter()
        .filter_map(ContentItem::bullet_text)
        .collect();

    // Some variants nest the language bullets inside a subsection.
    if items.is_empty() {
        for subsection in &section.subsections {
            items.extend(subsection.bullets.iter().map(String::as_str));
        }
    }

    let joined = items
        .iter()
        .map(|item| escape(item))
        .collect::<Vec<String>>()
        .join(LANGUAGE_DELIMITER);

    let body = format!(
        "        <p class=\"text-xs text-gray-700\">{joined}</p>"
    );
    section_shell(&section.title, &body)
}

fn format_generic(section: &Section) -> String {
    let mut blocks = Vec::new();
    let mut pending_bullets: Vec<String> = Vec::new();

    for item in &section.content {
        match item {
            ContentItem::Paragraph(text) => {
                flush_bullets(&mut blocks, &mut pending_bullets);
                blocks.push(format!("          <p>{}</p>", inline_markup(text)));
            }
            ContentItem::Bullet(text) => {
                pending_bullets.push(format!("            <li>• {}</li>", inline_markup(text)));
            }
        }
    }
    flush_bullets(&mut blocks, &mut pending_bullets);

    let body = format!(
        "        <div class=\"text-xs text-gray-700 space-y-2\">\n{}\n        </div>",
        blocks.join("\n")
    );
    section_shell(&section.title, &body)
}

/// Close a run of consecutive bullets into one list block.
fn flush_bullets(blocks: &mut Vec<String>, pending: &mut Vec<String>) {
    if pending.is_empty() {
        return;
    }
    blocks.push(format!(
        "          <ul class=\"space-y-1\">\n{}\n          </ul>",
        pending.join("\n")
    ));
    pending.clear();
}
