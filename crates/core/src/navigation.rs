//! Back-office section switching and sidebar rules.

use crate::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Projects,
    Users,
    Testimonials,
    Statistics,
    Settings,
}

impl Section {
    /// Id of the `.dashboard-section` element and `data-section` value of its nav item.
    pub fn id(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Projects => "projets",
            Section::Users => "utilisateurs",
            Section::Testimonials => "temoignages",
            Section::Statistics => "statistiques",
            Section::Settings => "parametres",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Projects => "Projets",
            Section::Users => "Utilisateurs",
            Section::Testimonials => "Témoignages",
            Section::Statistics => "Statistiques",
            Section::Settings => "Paramètres",
        }
    }

    /// Table reloaded when the section is opened.
    pub fn loader(self) -> Option<Table> {
        match self {
            Section::Projects => Some(Table::Projects),
            Section::Users => Some(Table::Users),
            Section::Testimonials => Some(Table::Testimonials),
            Section::Dashboard | Section::Statistics | Section::Settings => None,
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::all().iter().copied().find(|s| s.id() == id)
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::Dashboard,
            Section::Projects,
            Section::Users,
            Section::Testimonials,
            Section::Statistics,
            Section::Settings,
        ]
    }
}

/// Page title for a `data-section` value; unknown ids read as the dashboard.
pub fn page_title(section_id: &str) -> &'static str {
    Section::from_id(section_id)
        .unwrap_or_default()
        .title()
}

/// Where a click landed relative to the mobile sidebar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutsideClick {
    pub viewport_width: f64,
    pub sidebar_open: bool,
    pub inside_sidebar: bool,
    pub on_menu_button: bool,
}

impl OutsideClick {
    /// Whether a click on the main content closes the mobile overlay.
    pub fn closes_sidebar(&self, mobile_breakpoint: f64) -> bool {
        self.viewport_width <= mobile_breakpoint
            && self.sidebar_open
            && !self.inside_sidebar
            && !self.on_menu_button
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_cover_every_section_and_fall_back() {
        assert_eq!(page_title("temoignages"), "Témoignages");
        assert_eq!(page_title("parametres"), "Paramètres");
        assert_eq!(page_title("inconnu"), "Dashboard");
        assert_eq!(page_title(""), "Dashboard");
    }

    #[test]
    fn only_table_sections_reload_data() {
        assert_eq!(Section::Projects.loader(), Some(Table::Projects));
        assert_eq!(Section::Users.loader(), Some(Table::Users));
        assert_eq!(Section::Testimonials.loader(), Some(Table::Testimonials));
        assert_eq!(Section::Statistics.loader(), None);
        assert_eq!(Section::Dashboard.loader(), None);
    }

    #[test]
    fn ids_round_trip() {
        for &s in Section::all() {
            assert_eq!(Section::from_id(s.id()), Some(s));
        }
    }

    #[test]
    fn outside_click_rule() {
        let click = OutsideClick {
            viewport_width: 600.0,
            sidebar_open: true,
            inside_sidebar: false,
            on_menu_button: false,
        };
        assert!(click.closes_sidebar(768.0));
        assert!(!OutsideClick { viewport_width: 1024.0, ..click }.closes_sidebar(768.0));
        assert!(!OutsideClick { sidebar_open: false, ..click }.closes_sidebar(768.0));
        assert!(!OutsideClick { inside_sidebar: true, ..click }.closes_sidebar(768.0));
        assert!(!OutsideClick { on_menu_button: true, ..click }.closes_sidebar(768.0));
    }

    #[test]
    fn outside_click_is_a_plain_value() {
        let click = OutsideClick {
            viewport_width: 768.0,
            sidebar_open: true,
            inside_sidebar: false,
            on_menu_button: false,
        };
        let copy = click;
        assert_eq!(copy, click);
        assert_ne!(OutsideClick { viewport_width: 767.5, ..click }, click);
        assert!(copy.closes_sidebar(768.0));
    }
}
