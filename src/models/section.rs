//! Page sections and the scroll-position → active-section mapping.
//!
//! Geometry is passed in as a plain table so the mapping can be exercised
//! without a browser; the landing page measures the table from the DOM on
//! every scroll event.

/// Sections in their fixed top-to-bottom order. The order is also the
/// tie-break when spans overlap: the first one declared wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Inicio,
    Sobre,
    Especialidades,
    Depoimentos,
    Faq,
    Contato,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Inicio,
        Section::Sobre,
        Section::Especialidades,
        Section::Depoimentos,
        Section::Faq,
        Section::Contato,
    ];

    /// DOM id of the `<section>` element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Inicio => "inicio",
            Section::Sobre => "sobre",
            Section::Especialidades => "especialidades",
            Section::Depoimentos => "depoimentos",
            Section::Faq => "faq",
            Section::Contato => "contato",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Inicio => "Início",
            Section::Sobre => "A Doutora",
            Section::Especialidades => "Especialidades",
            Section::Depoimentos => "Depoimentos",
            Section::Faq => "FAQ",
            Section::Contato => "Contato",
        }
    }

    pub fn index(self) -> usize {
        Section::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }
}

/// Vertical extent of one section, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(section: Section, top: f64, height: f64) -> Self {
        Self { section, top, height }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

pub fn viewport_midpoint(scroll_y: f64, viewport_height: f64) -> f64 {
    scroll_y + viewport_height / 2.0
}

/// First span, in declared section order, whose extent contains `y`.
pub fn locate(y: f64, spans: &[SectionSpan]) -> Option<Section> {
    Section::ALL.iter().copied().find(|section| {
        spans
            .iter()
            .any(|span| span.section == *section && span.contains(y))
    })
}

pub fn is_header_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// The navigation-highlighted section. Always names exactly one section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveSection(pub Section);

impl Default for ActiveSection {
    fn default() -> Self {
        ActiveSection(Section::Inicio)
    }
}

impl ActiveSection {
    /// Keeps the current section when the midpoint falls outside every span
    /// (e.g. over the footer).
    pub fn recompute(self, scroll_y: f64, viewport_height: f64, spans: &[SectionSpan]) -> Self {
        match locate(viewport_midpoint(scroll_y, viewport_height), spans) {
            Some(section) => ActiveSection(section),
            None => self,
        }
    }

    pub fn section(self) -> Section {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new(Section::Inicio, 0.0, 900.0),
            SectionSpan::new(Section::Sobre, 900.0, 1200.0),
            SectionSpan::new(Section::Especialidades, 2100.0, 1000.0),
            SectionSpan::new(Section::Depoimentos, 3100.0, 700.0),
            SectionSpan::new(Section::Faq, 3800.0, 800.0),
            SectionSpan::new(Section::Contato, 4600.0, 1100.0),
        ]
    }

    #[test]
    fn test_top_of_page_is_inicio() {
        let active = ActiveSection::default().recompute(0.0, 800.0, &page());
        assert_eq!(active.section(), Section::Inicio);
    }

    #[test]
    fn test_midpoint_not_scroll_offset_decides() {
        // scroll_y alone is still inside Inicio, the midpoint is in Sobre.
        let active = ActiveSection::default().recompute(600.0, 800.0, &page());
        assert_eq!(active.section(), Section::Sobre);
    }

    #[test]
    fn test_span_end_is_exclusive() {
        assert_eq!(locate(900.0, &page()), Some(Section::Sobre));
        assert_eq!(locate(899.9, &page()), Some(Section::Inicio));
    }

    #[test]
    fn test_overlap_resolves_to_first_declared() {
        let spans = vec![
            SectionSpan::new(Section::Faq, 0.0, 500.0),
            SectionSpan::new(Section::Sobre, 100.0, 500.0),
        ];
        assert_eq!(locate(200.0, &spans), Some(Section::Sobre));
    }

    #[test]
    fn test_gap_keeps_previous_section() {
        let active = ActiveSection(Section::Contato).recompute(6000.0, 800.0, &page());
        assert_eq!(active.section(), Section::Contato);
    }

    #[test]
    fn test_every_offset_has_one_first_matching_section() {
        let spans = page();
        let mut active = ActiveSection::default();
        let mut offset = 0.0;
        while offset < 5200.0 {
            active = active.recompute(offset, 800.0, &spans);
            let mid = viewport_midpoint(offset, 800.0);
            let expected = spans
                .iter()
                .find(|span| span.contains(mid))
                .map(|span| span.section);
            if let Some(expected) = expected {
                assert_eq!(active.section(), expected, "offset {}", offset);
            }
            offset += 37.0;
        }
    }

    #[test]
    fn test_header_threshold_is_strict() {
        assert!(!is_header_scrolled(50.0, 50.0));
        assert!(is_header_scrolled(50.5, 50.0));
    }

    #[test]
    fn test_section_ids_are_unique_and_ordered() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["inicio", "sobre", "especialidades", "depoimentos", "faq", "contato"]);
        assert_eq!(Section::Faq.index(), 4);
    }
}
