//! Back-office table models.
//!
//! A loader clears its container and appends one [`TableRow`] per record. The
//! container is abstracted as a [`RowSink`] so the same loader drives the DOM
//! `<tbody>` in the browser and a plain vector in tests.

use crate::dataset::{ACTIVITIES, PROJECTS, TESTIMONIALS, USERS};
use crate::entity::EntityKind;
use crate::records::{excerpt, Activity, Project, Status, Testimonial, User};

/// One `<td>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// `<span class="status-badge {class}">{label}</span>`
    Badge { class: &'static str, label: String },
}

impl Cell {
    fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    fn status(status: Status) -> Self {
        Cell::Badge {
            class: status.badge_class(),
            label: status.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    View,
    Edit,
    Delete,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::View => "Voir",
            ActionKind::Edit => "Modifier",
            ActionKind::Delete => "Supprimer",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ActionKind::View => "action-btn view",
            ActionKind::Edit => "action-btn edit",
            ActionKind::Delete => "action-btn delete",
        }
    }
}

/// A row button, dispatched as `(entity, id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowAction {
    pub action: ActionKind,
    pub entity: EntityKind,
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<Cell>,
    pub actions: Vec<RowAction>,
}

impl TableRow {
    fn new(entity: EntityKind, id: u32, data: Vec<Cell>, actions: &[ActionKind]) -> Self {
        let mut cells = Vec::with_capacity(data.len() + 1);
        cells.push(Cell::text(format!("#{id}")));
        cells.extend(data);
        Self {
            cells,
            actions: actions
                .iter()
                .map(|&action| RowAction { action, entity, id })
                .collect(),
        }
    }
}

/// A container that can be emptied and appended to.
pub trait RowSink {
    fn clear(&mut self);
    fn append(&mut self, row: TableRow);
}

impl RowSink for Vec<TableRow> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn append(&mut self, row: TableRow) {
        self.push(row);
    }
}

/// The four back-office tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Activity,
    Projects,
    Users,
    Testimonials,
}

impl Table {
    /// Id of the `<tbody>` the table renders into.
    pub fn body_id(self) -> &'static str {
        match self {
            Table::Activity => "activityTableBody",
            Table::Projects => "projectsTableBody",
            Table::Users => "usersTableBody",
            Table::Testimonials => "testimonialsTableBody",
        }
    }

    pub fn entity(self) -> EntityKind {
        match self {
            Table::Activity => EntityKind::Activity,
            Table::Projects => EntityKind::Project,
            Table::Users => EntityKind::User,
            Table::Testimonials => EntityKind::Testimonial,
        }
    }

    pub fn all() -> &'static [Table] {
        &[
            Table::Activity,
            Table::Projects,
            Table::Users,
            Table::Testimonials,
        ]
    }

    /// Rows for the static dataset of this table.
    pub fn rows(self, excerpt_chars: usize) -> Vec<TableRow> {
        match self {
            Table::Activity => ACTIVITIES.iter().map(activity_row).collect(),
            Table::Projects => PROJECTS.iter().map(project_row).collect(),
            Table::Users => USERS.iter().map(user_row).collect(),
            Table::Testimonials => TESTIMONIALS
                .iter()
                .map(|t| testimonial_row(t, excerpt_chars))
                .collect(),
        }
    }

    /// Clear `sink` and render every record into it.
    pub fn load<S: RowSink + ?Sized>(self, sink: &mut S, excerpt_chars: usize) {
        sink.clear();
        for row in self.rows(excerpt_chars) {
            sink.append(row);
        }
    }
}

pub fn activity_row(a: &Activity) -> TableRow {
    TableRow::new(
        EntityKind::Activity,
        a.id,
        vec![
            Cell::Badge {
                class: "active",
                label: a.kind.to_string(),
            },
            Cell::text(a.description),
            Cell::text(a.user),
            Cell::text(a.date),
        ],
        &[ActionKind::View],
    )
}

pub fn project_row(p: &Project) -> TableRow {
    TableRow::new(
        EntityKind::Project,
        p.id,
        vec![
            Cell::text(p.name),
            Cell::text(p.category),
            Cell::status(p.status),
            Cell::text(p.budget),
            Cell::text(p.date),
        ],
        &[ActionKind::View, ActionKind::Edit, ActionKind::Delete],
    )
}

pub fn user_row(u: &User) -> TableRow {
    TableRow::new(
        EntityKind::User,
        u.id,
        vec![
            Cell::text(u.name),
            Cell::text(u.email),
            Cell::text(u.role),
            Cell::status(u.status),
            Cell::text(u.date),
        ],
        &[ActionKind::View, ActionKind::Edit],
    )
}

pub fn testimonial_row(t: &Testimonial, excerpt_chars: usize) -> TableRow {
    TableRow::new(
        EntityKind::Testimonial,
        t.id,
        vec![
            Cell::text(t.author),
            Cell::text(t.role),
            Cell::text(excerpt(t.content, excerpt_chars)),
            Cell::status(t.status),
            Cell::text(t.date),
        ],
        &[ActionKind::View, ActionKind::Edit],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_twice_does_not_duplicate_rows() {
        for &table in Table::all() {
            let mut sink: Vec<TableRow> = Vec::new();
            table.load(&mut sink, 50);
            let first = sink.clone();
            table.load(&mut sink, 50);
            assert_eq!(sink, first, "{table:?}");
            assert!(!sink.is_empty());
        }
    }

    #[test]
    fn project_rows_carry_status_and_three_actions() {
        let rows = Table::Projects.rows(50);
        assert_eq!(rows.len(), 4);

        let pending = &rows[2];
        assert_eq!(pending.cells[0], Cell::Text("#3".into()));
        assert_eq!(
            pending.cells[3],
            Cell::Badge {
                class: "pending",
                label: "En attente".into()
            }
        );
        let kinds: Vec<_> = pending.actions.iter().map(|a| a.action).collect();
        assert_eq!(
            kinds,
            vec![ActionKind::View, ActionKind::Edit, ActionKind::Delete]
        );
        assert!(pending
            .actions
            .iter()
            .all(|a| a.entity == EntityKind::Project && a.id == 3));
    }

    #[test]
    fn activity_rows_are_view_only_with_active_badge() {
        for row in Table::Activity.rows(50) {
            assert_eq!(row.actions.len(), 1);
            assert_eq!(row.actions[0].action, ActionKind::View);
            assert!(matches!(row.cells[1], Cell::Badge { class: "active", .. }));
        }
    }

    #[test]
    fn inactive_user_gets_inactive_badge() {
        let rows = Table::Users.rows(50);
        assert!(matches!(
            &rows[3].cells[4],
            Cell::Badge { class: "inactive", label } if label == "Inactif"
        ));
        assert!(rows.iter().all(|r| r.actions.len() == 2));
    }

    #[test]
    fn testimonial_content_is_shown_verbatim_when_short() {
        let rows = Table::Testimonials.rows(50);
        let contents: Vec<_> = rows
            .iter()
            .map(|r| match &r.cells[3] {
                Cell::Text(text) => text.as_str(),
                Cell::Badge { .. } => panic!("content cell should be text"),
            })
            .collect();
        assert_eq!(
            contents,
            vec![
                "PeaceConnect a transformé...",
                "L'approche collaborative...",
                "Les projets durables...",
            ]
        );
    }

    #[test]
    fn long_testimonial_content_is_cut_in_rows() {
        let long = Testimonial {
            content: "Grâce à leurs programmes, nous avons sensibilisé 500 personnes.",
            ..TESTIMONIALS[0]
        };
        let Cell::Text(content) = &testimonial_row(&long, 50).cells[3] else {
            panic!("content cell should be text");
        };
        assert!(content.ends_with("..."));
        assert_eq!(content.chars().count(), 53);
    }
}
