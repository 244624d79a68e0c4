use crate::model::SectionKind;

/// Keyword sets that map a section title to its semantic kind. Each entry
/// covers both supported languages; matching is case-insensitive substring
/// membership and the first hit wins.
const KIND_KEYWORDS: &[(SectionKind, &[&str])] = &[
    (SectionKind::Profile, &["profil", "profile"]),
    (SectionKind::Experience, &["berufserfahrung", "experience"]),
    (SectionKind::Education, &["ausbildung", "education"]),
    (SectionKind::FocusAreas, &["schwerpunkt", "focus"]),
    (SectionKind::Principles, &["haltung", "principles"]),
    (SectionKind::Languages, &["sprache", "language"]),
];

/// Resolve the semantic kind for a section title. Unrecognized titles map
/// to [`SectionKind::Generic`].
pub fn resolve_section_kind(title: &str) -> SectionKind {
    let lowered = title.to_lowercase();

    for (kind, keywords) in KIND_KEYWORDS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return *kind;
        }
    }

    SectionKind::Generic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_german_titles() {
        assert_eq!(resolve_section_kind("Profil"), SectionKind::Profile);
        assert_eq!(
            resolve_section_kind("Berufserfahrung"),
            SectionKind::Experience
        );
        assert_eq!(resolve_section_kind("Ausbildung"), SectionKind::Education);
        assert_eq!(resolve_section_kind("Schwerpunkte"), SectionKind::FocusAreas);
        assert_eq!(resolve_section_kind("Haltung"), SectionKind::Principles);
        assert_eq!(resolve_section_kind("Sprachen"), SectionKind::Languages);
    }

    #[test]
    fn resolves_english_titles() {
        assert_eq!(resolve_section_kind("Profile"), SectionKind::Profile);
        assert_eq!(
            resolve_section_kind("Professional Experience"),
            SectionKind::Experience
        );
        assert_eq!(resolve_section_kind("Education"), SectionKind::Education);
        assert_eq!(
            resolve_section_kind("Core Competencies & Focus Areas"),
            SectionKind::FocusAreas
        );
        assert_eq!(resolve_section_kind("Principles"), SectionKind::Principles);
        assert_eq!(resolve_section_kind("Languages"), SectionKind::Languages);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(resolve_section_kind("SPRACHEN"), SectionKind::Languages);
        assert_eq!(resolve_section_kind("eDuCaTiOn"), SectionKind::Education);
    }

    #[test]
    fn unknown_titles_are_generic() {
        assert_eq!(resolve_section_kind("Hobbys"), SectionKind::Generic);
        assert_eq!(resolve_section_kind(""), SectionKind::Generic);
    }
}
