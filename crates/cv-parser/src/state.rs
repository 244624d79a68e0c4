use crate::line::normalize_inline_text;
use crate::model::{ContentItem, Section, Subsection};
use crate::section::resolve_section_kind;

/// Scanner state: the section currently being built and, through it, the
/// subsection currently being built. Both may be absent.
#[derive(Default)]
pub struct State {
    sections: Vec<Section>,
    current: Option<SectionBuilder>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// A level-2 heading flushes the open section and starts a new one.
    pub fn enter_section(&mut self, title: &str) {
        self.exit_section();
        self.current = Some(SectionBuilder::new(title));
    }

    /// A level-3 heading opens a new subsection. With no open section the
    /// line is dropped.
    pub fn enter_subsection(&mut self, title: &str) {
        if let Some(section) = &mut self.current {
            section.subsections.push(SubsectionBuilder::new(title));
        }
    }

    /// A bold line becomes the role of the open subsection if that slot is
    /// still free; otherwise it is routed like plain text, markers intact.
    pub fn push_bold(&mut self, raw: &str) {
        let Some(section) = &mut self.current else {
            return;
        };

        if let Some(subsection) = section.subsections.last_mut() {
            if subsection.role.is_none() {
                subsection.role = Some(normalize_inline_text(raw));
                return;
            }
        }

        section.route_text(raw);
    }

    /// An italic line becomes the period of the open subsection; only the
    /// first one is retained, later italic lines are routed like plain text.
    pub fn push_italic(&mut self, raw: &str) {
        let Some(section) = &mut self.current else {
            return;
        };

        if let Some(subsection) = section.subsections.last_mut() {
            if subsection.period.is_none() {
                subsection.period = Some(normalize_inline_text(raw));
                if subsection.phase == Phase::Open {
                    subsection.phase = Phase::Describing;
                }
                return;
            }
        }

        section.route_text(raw);
    }

    pub fn push_bullet(&mut self, text: &str) {
        let Some(section) = &mut self.current else {
            return;
        };

        if let Some(subsection) = section.subsections.last_mut() {
            subsection.bullets.push(text.to_string());
            subsection.phase = Phase::Listing;
        } else {
            section.content.push(ContentItem::Bullet(text.to_string()));
        }
    }

    pub fn push_text(&mut self, text: &str) {
        if let Some(section) = &mut self.current {
            section.route_text(text);
        }
    }

    pub fn finalize(mut self) -> Vec<Section> {
        self.exit_section();
        self.sections
    }

    fn exit_section(&mut self) {
        if let Some(current) = self.current.take() {
            self.sections.push(current.into_section());
        }
    }
}

struct SectionBuilder {
    title: String,
    content: Vec<ContentItem>,
    subsections: Vec<SubsectionBuilder>,
}

impl SectionBuilder {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
            subsections: Vec::new(),
        }
    }

    /// Route a plain text line according to the open subsection's phase:
    /// description while one is being collected, subsection content before
    /// any period or bullets appeared, and section content otherwise.
    fn route_text(&mut self, text: &str) {
        if let Some(subsection) = self.subsections.last_mut() {
            match subsection.phase {
                Phase::Describing => {
                    subsection.description.push(text.to_string());
                    return;
                }
                Phase::Open => {
                    subsection
                        .content
                        .push(ContentItem::Paragraph(text.to_string()));
                    return;
                }
                Phase::Listing => {}
            }
        }

        self.content.push(ContentItem::Paragraph(text.to_string()));
    }

    fn into_section(self) -> Section {
        Section {
            kind: resolve_section_kind(&self.title),
            title: self.title,
            content: self.content,
            subsections: self
                .subsections
                .into_iter()
                .map(SubsectionBuilder::into_subsection)
                .collect(),
        }
    }
}

/// Field-assignment phase of the subsection being built. Plain text routes
/// differently depending on which fields were already seen, so the
/// transitions are guarded rather than inferred from field presence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Neither period nor bullets seen; plain text is subsection content.
    Open,
    /// Period seen, bullets not started; plain text joins the description.
    Describing,
    /// Bullets started; plain text no longer belongs to this subsection.
    Listing,
}

struct SubsectionBuilder {
    title: String,
    role: Option<String>,
    period: Option<String>,
    description: Vec<String>,
    bullets: Vec<String>,
    content: Vec<ContentItem>,
    phase: Phase,
}

impl SubsectionBuilder {
    fn new(title: &str) -> Self {
        Self {
            title: normalize_inline_text(title),
            role: None,
            period: None,
            description: Vec::new(),
            bullets: Vec::new(),
            content: Vec::new(),
            phase: Phase::Open,
        }
    }

    fn into_subsection(self) -> Subsection {
        Subsection {
            title: self.title,
            role: self.role,
            period: self.period,
            description: self.description,
            bullets: self.bullets,
            content: self.content,
        }
    }
}
