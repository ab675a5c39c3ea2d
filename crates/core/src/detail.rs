//! Detail modal content.
//!
//! Known defect kept on purpose: the body is a canned example per entity kind and
//! does not depend on which row was clicked. Only the title shows the id.

use crate::entity::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: &'static str,
}

const fn field(label: &'static str, value: &'static str) -> DetailField {
    DetailField { label, value }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterButton {
    Close,
    Edit { entity: EntityKind, id: u32 },
}

impl FooterButton {
    pub fn label(self) -> &'static str {
        match self {
            FooterButton::Close => "Fermer",
            FooterButton::Edit { .. } => "Modifier",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            FooterButton::Close => "btn btn-secondary",
            FooterButton::Edit { .. } => "btn btn-primary",
        }
    }
}

/// Inline style of the testimonial quote; the page stylesheet has no rule for it.
pub const QUOTE_STYLE: &str =
    "font-style: italic; padding: 1rem; background: #f3f4f6; border-radius: 0.5rem;";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub fields: &'static [DetailField],
    /// Quoted paragraph shown under the fields (testimonials only).
    pub quote: Option<&'static str>,
    pub footer: Vec<FooterButton>,
}

const ACTIVITY_FIELDS: &[DetailField] = &[
    field("Type", "Projet"),
    field("Description", "Nouveau projet créé: Éducation pour tous"),
    field("Utilisateur", "Admin"),
    field("Date", "2025-01-10 14:30"),
];

const PROJECT_FIELDS: &[DetailField] = &[
    field("Nom", "Éducation pour tous"),
    field("Catégorie", "Éducation"),
    field("Statut", "Actif"),
    field("Budget", "€15,000"),
    field("Date de début", "2025-01-01"),
    field(
        "Description",
        "Projet visant à promouvoir l'éducation pour tous dans les communautés défavorisées.",
    ),
];

const USER_FIELDS: &[DetailField] = &[
    field("Nom", "Jean Dupont"),
    field("Email", "jean@example.com"),
    field("Rôle", "Admin"),
    field("Statut", "Actif"),
    field("Date d'inscription", "2024-01-15"),
];

const TESTIMONIAL_FIELDS: &[DetailField] = &[
    field("Auteur", "Amina Mohamed"),
    field("Rôle", "Directrice, Association pour le Développement"),
    field("Statut", "Approuvé"),
    field("Date", "2025-01-08"),
];

const TESTIMONIAL_QUOTE: &str = "\"PeaceConnect a transformé notre communauté. Grâce à leurs programmes éducatifs, nous avons pu sensibiliser plus de 500 personnes aux enjeux du développement durable.\"";

/// Build the modal content for `(entity, id)`.
pub fn detail_view(entity: EntityKind, id: u32) -> DetailView {
    let (fields, quote) = match entity {
        EntityKind::Activity => (ACTIVITY_FIELDS, None),
        EntityKind::Project => (PROJECT_FIELDS, None),
        EntityKind::User => (USER_FIELDS, None),
        EntityKind::Testimonial => (TESTIMONIAL_FIELDS, Some(TESTIMONIAL_QUOTE)),
    };

    let mut footer = vec![FooterButton::Close];
    if entity.is_editable() {
        footer.push(FooterButton::Edit { entity, id });
    }

    DetailView {
        title: format!("{} #{id}", entity.display_name()),
        fields,
        quote,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_uses_id_but_body_does_not() {
        let a = detail_view(EntityKind::Project, 1);
        let b = detail_view(EntityKind::Project, 4);
        assert_eq!(a.title, "Projet #1");
        assert_eq!(b.title, "Projet #4");
        assert_eq!(a.fields, b.fields);
        assert_eq!(b.fields[0].value, "Éducation pour tous");
    }

    #[test]
    fn activity_footer_has_no_edit() {
        let v = detail_view(EntityKind::Activity, 2);
        assert_eq!(v.title, "Activité #2");
        assert_eq!(v.footer, vec![FooterButton::Close]);
    }

    #[test]
    fn editable_footers_route_the_clicked_id() {
        for &k in &[EntityKind::Project, EntityKind::User, EntityKind::Testimonial] {
            let v = detail_view(k, 7);
            assert_eq!(
                v.footer,
                vec![FooterButton::Close, FooterButton::Edit { entity: k, id: 7 }]
            );
        }
    }

    #[test]
    fn only_testimonials_have_a_quote() {
        assert!(detail_view(EntityKind::Testimonial, 1).quote.is_some());
        assert!(detail_view(EntityKind::User, 1).quote.is_none());
    }

    #[test]
    fn quote_is_styled_inline() {
        for rule in ["font-style: italic", "padding: 1rem", "background: #f3f4f6"] {
            assert!(QUOTE_STYLE.contains(rule), "missing {rule}");
        }
    }
}
