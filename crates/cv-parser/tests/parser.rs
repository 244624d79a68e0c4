use cv_parser::{parse, ContentItem, SectionKind};
use pretty_assertions::assert_eq;

fn sample_cv() -> String {
    std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/markdown/sample_cv.md"
    ))
    .unwrap()
}

#[test]
fn parses_header_from_prefix() {
    let document = parse(&sample_cv());
    let header = &document.header;

    assert_eq!(header.name, "Jana Hoffmann");
    assert_eq!(header.title, "Engineering Managerin");
    assert_eq!(header.tagline, "Technologie mit ruhiger Hand");
    assert_eq!(header.contact.location.as_deref(), Some("Berlin, Deutschland"));
    assert_eq!(
        header.contact.email.as_deref(),
        Some("jana.hoffmann@example.com")
    );
    assert_eq!(header.contact.phone.as_deref(), Some("+49 170 1234567"));
    assert_eq!(
        header.contact.profile_url.as_deref(),
        Some("https://www.linkedin.com/in/janahoffmann")
    );
}

#[test]
fn sections_preserve_source_order_and_kind() {
    let document = parse(&sample_cv());

    let kinds: Vec<SectionKind> = document.sections.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Profile,
            SectionKind::Experience,
            SectionKind::Education,
            SectionKind::FocusAreas,
            SectionKind::Principles,
            SectionKind::Languages,
        ]
    );
}

#[test]
fn experience_subsections_fill_all_slots() {
    let document = parse(&sample_cv());
    let experience = &document.sections[1];

    assert_eq!(experience.subsections.len(), 2);

    let acme = &experience.subsections[0];
    assert_eq!(acme.title, "Acme GmbH");
    assert_eq!(acme.role.as_deref(), Some("Engineering Managerin"));
    assert_eq!(acme.period.as_deref(), Some("2019 - 2024 | Berlin"));
    assert_eq!(acme.description, vec!["Verantwortlich für drei Produktteams."]);
    assert_eq!(
        acme.bullets,
        vec![
            "Plattform-Migration ohne Ausfallzeit geleitet",
            "Einstellungsprozess neu aufgesetzt"
        ]
    );

    let beispiel = &experience.subsections[1];
    assert_eq!(beispiel.role.as_deref(), Some("Senior Entwicklerin"));
    assert!(beispiel.description.is_empty());
    assert_eq!(beispiel.bullets, vec!["Zahlungssystem von Grund auf gebaut"]);
}

#[test]
fn education_keeps_degree_line_as_content() {
    let document = parse(&sample_cv());
    let education = &document.sections[2];
    let uni = &education.subsections[0];

    assert_eq!(uni.title, "Technische Universität Berlin");
    assert_eq!(
        uni.content,
        vec![ContentItem::Paragraph(
            "Master of Science, Informatik".to_string()
        )]
    );
    assert_eq!(uni.period.as_deref(), Some("2008 - 2014"));
}

#[test]
fn language_bullets_stay_in_section_content() {
    let document = parse(&sample_cv());
    let languages = &document.sections[5];

    assert!(languages.subsections.is_empty());
    let bullets: Vec<&str> = languages
        .content
        .iter()
        .filter_map(ContentItem::bullet_text)
        .collect();
    assert_eq!(
        bullets,
        vec![
            "Deutsch (Muttersprache)",
            "Englisch (fließend)",
            "Französisch (Grundkenntnisse)"
        ]
    );
}

#[test]
fn input_without_sections_yields_empty_list() {
    let document = parse("# Jane Doe\n\nJust a paragraph.\n");

    assert_eq!(document.header.name, "Jane Doe");
    assert!(document.sections.is_empty());
}

#[test]
fn empty_input_is_fine() {
    let document = parse("");

    assert_eq!(document.header.name, "");
    assert!(document.sections.is_empty());
}

#[test]
fn subsection_heading_without_section_is_a_no_op() {
    let document = parse("### Orphan\n- lost bullet\n\n## Profil\nText.\n");

    assert_eq!(document.sections.len(), 1);
    assert!(document.sections[0].subsections.is_empty());
    assert_eq!(
        document.sections[0].content,
        vec![ContentItem::Paragraph("Text.".to_string())]
    );
}

#[test]
fn description_classification_is_order_sensitive() {
    let with_period_first = parse(
        "## Berufserfahrung\n### Firma\n*2020 - 2021*\nFreeform line.\n",
    );
    let sub = &with_period_first.sections[0].subsections[0];
    assert_eq!(sub.description, vec!["Freeform line."]);
    assert!(sub.content.is_empty());

    let with_text_first = parse(
        "## Berufserfahrung\n### Firma\nFreeform line.\n*2020 - 2021*\n",
    );
    let sub = &with_text_first.sections[0].subsections[0];
    assert!(sub.description.is_empty());
    assert_eq!(
        sub.content,
        vec![ContentItem::Paragraph("Freeform line.".to_string())]
    );
}

#[test]
fn horizontal_rules_change_nothing() {
    let document = parse("## Profil\nBefore.\n---\nAfter.\n");

    assert_eq!(
        document.sections[0].content,
        vec![
            ContentItem::Paragraph("Before.".to_string()),
            ContentItem::Paragraph("After.".to_string()),
        ]
    );
}

#[test]
fn subsection_titles_lose_emphasis_markers() {
    let document = parse("## Berufserfahrung\n### **Acme GmbH**\n");

    assert_eq!(document.sections[0].subsections[0].title, "Acme GmbH");
}
