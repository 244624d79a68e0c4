/// Output language. Two values are supported; everything else maps to the
/// default at the CLI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    De,
    En,
}

impl Default for Language {
    fn default() -> Self {
        Language::De
    }
}

impl Language {
    /// Map a language tag to a [`Language`]. Unrecognized tags are treated
    /// as the default, never as an error.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "en" => Language::En,
            _ => Language::De,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }
}

/// Microcopy for one output language: document title, action-bar captions
/// and the methods subheading of the focus-areas section.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub document_title: &'static str,
    pub print: &'static str,
    pub share: &'static str,
    pub link_copied: &'static str,
    pub methods: &'static str,
}

const DE_LABELS: Labels = Labels {
    document_title: "Lebenslauf",
    print: "Drucken",
    share: "Teilen",
    link_copied: "Link kopiert!",
    methods: "Methoden & Arbeitsweisen",
};

const EN_LABELS: Labels = Labels {
    document_title: "CV",
    print: "Print",
    share: "Share",
    link_copied: "Link copied!",
    methods: "Methods & Practices",
};

impl Labels {
    pub fn for_language(lang: Language) -> &'static Labels {
        match lang {
            Language::De => &DE_LABELS,
            Language::En => &EN_LABELS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_tags_fall_back_to_default() {
        assert_eq!(Language::from_tag("en"), Language::En);
        assert_eq!(Language::from_tag("EN"), Language::En);
        assert_eq!(Language::from_tag("de"), Language::De);
        assert_eq!(Language::from_tag("fr"), Language::De);
        assert_eq!(Language::from_tag(""), Language::De);
    }
}
