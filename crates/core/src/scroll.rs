//! Public header rules driven by the scroll position.

/// Vertical extent of a `section[id]` on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

pub fn header_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Id of the section the reader is in: the last one whose span, moved up by
/// `pre_offset`, contains `scroll_y`.
pub fn current_section(sections: &[SectionSpan], scroll_y: f64, pre_offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| {
            let top = s.top - pre_offset;
            scroll_y >= top && scroll_y < top + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

/// Whether a nav link `href` points at `section_id`.
pub fn link_targets(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<SectionSpan> {
        [("accueil", 0.0, 600.0), ("projets", 600.0, 800.0), ("contact", 1400.0, 400.0)]
            .into_iter()
            .map(|(id, top, height)| SectionSpan {
                id: id.to_string(),
                top,
                height,
            })
            .collect()
    }

    #[test]
    fn header_threshold_is_strict() {
        assert!(!header_scrolled(100.0, 100.0));
        assert!(header_scrolled(100.5, 100.0));
    }

    #[test]
    fn pre_offset_switches_early() {
        let s = spans();
        assert_eq!(current_section(&s, 0.0, 100.0), Some("accueil"));
        assert_eq!(current_section(&s, 499.0, 100.0), Some("accueil"));
        assert_eq!(current_section(&s, 500.0, 100.0), Some("projets"));
        assert_eq!(current_section(&s, 1300.0, 100.0), Some("contact"));
        assert_eq!(current_section(&s, 5000.0, 100.0), None);
    }

    #[test]
    fn links_match_by_fragment() {
        assert!(link_targets("#projets", "projets"));
        assert!(!link_targets("projets", "projets"));
        assert!(!link_targets("#projets-2", "projets"));
    }
}
