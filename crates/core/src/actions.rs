//! Row and modal actions: show details, edit, delete, logout.
//!
//! Edit and delete are placeholders. They talk to the user through [`Dialogs`]
//! and never touch the table data.

use serde_json::json;

use crate::backend::Backend;
use crate::detail::{detail_view, DetailView};
use crate::entity::EntityKind;

/// Blocking browser dialogs.
pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// The single shared detail modal.
pub trait ModalHost {
    fn open(&self, view: &DetailView);
    fn close(&self);
}

pub const LOGOUT_PROMPT: &str = "Êtes-vous sûr de vouloir vous déconnecter ?";

pub fn edit_message(entity: EntityKind, id: u32) -> String {
    format!("Fonctionnalité d'édition à implémenter pour {entity} #{id}")
}

pub fn delete_prompt(entity: EntityKind) -> String {
    format!("Êtes-vous sûr de vouloir supprimer ce {entity} ?")
}

pub fn delete_message(entity: EntityKind, id: u32) -> String {
    format!("Fonctionnalité de suppression à implémenter pour {entity} #{id}")
}

pub fn show_details<M: ModalHost + ?Sized>(modal: &M, entity: EntityKind, id: u32) {
    modal.open(&detail_view(entity, id));
}

pub fn edit_item<M, D>(modal: &M, dialogs: &D, entity: EntityKind, id: u32)
where
    M: ModalHost + ?Sized,
    D: Dialogs + ?Sized,
{
    modal.close();
    log::info!("Édition de {entity} #{id}");
    dialogs.alert(&edit_message(entity, id));
}

/// Ask for confirmation, then acknowledge. Returns whether the user confirmed.
pub fn delete_item<D, B>(dialogs: &D, backend: &B, entity: EntityKind, id: u32) -> bool
where
    D: Dialogs + ?Sized,
    B: Backend + ?Sized,
{
    if !dialogs.confirm(&delete_prompt(entity)) {
        return false;
    }
    log::info!("Suppression de {entity} #{id}");
    backend.send(&format!("{entity}/delete"), &json!({ "id": id }));
    dialogs.alert(&delete_message(entity, id));
    true
}

/// Confirm logout and return where to navigate.
pub fn confirm_logout<'a, D>(dialogs: &D, logout_url: &'a str) -> Option<&'a str>
where
    D: Dialogs + ?Sized,
{
    dialogs.confirm(LOGOUT_PROMPT).then_some(logout_url)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Prompt {
        Confirm(String),
        Alert(String),
    }

    /// Dialogs answering `confirm` from a script and recording every prompt.
    #[derive(Default)]
    pub struct ScriptedDialogs {
        answers: RefCell<VecDeque<bool>>,
        pub prompts: RefCell<Vec<Prompt>>,
    }

    impl ScriptedDialogs {
        pub fn answering(answers: &[bool]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().copied().collect()),
                prompts: RefCell::default(),
            }
        }
    }

    impl Dialogs for ScriptedDialogs {
        fn confirm(&self, message: &str) -> bool {
            self.prompts
                .borrow_mut()
                .push(Prompt::Confirm(message.to_string()));
            self.answers.borrow_mut().pop_front().unwrap_or(false)
        }

        fn alert(&self, message: &str) {
            self.prompts
                .borrow_mut()
                .push(Prompt::Alert(message.to_string()));
        }
    }

    #[derive(Default)]
    pub struct FakeModal {
        pub shown: RefCell<Option<DetailView>>,
    }

    impl ModalHost for FakeModal {
        fn open(&self, view: &DetailView) {
            *self.shown.borrow_mut() = Some(view.clone());
        }

        fn close(&self) {
            *self.shown.borrow_mut() = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FakeModal, Prompt, ScriptedDialogs};
    use super::*;
    use crate::backend::InertBackend;
    use crate::table::{Table, TableRow};

    #[test]
    fn deleting_a_project_confirms_then_leaves_the_table_alone() {
        let mut body: Vec<TableRow> = Vec::new();
        Table::Projects.load(&mut body, 50);
        let before = body.clone();

        let dialogs = ScriptedDialogs::answering(&[true]);
        assert!(delete_item(&dialogs, &InertBackend, EntityKind::Project, 2));

        assert_eq!(
            *dialogs.prompts.borrow(),
            vec![
                Prompt::Confirm("Êtes-vous sûr de vouloir supprimer ce project ?".into()),
                Prompt::Alert(
                    "Fonctionnalité de suppression à implémenter pour project #2".into()
                ),
            ]
        );
        assert_eq!(body, before);
    }

    #[test]
    fn cancelled_delete_shows_no_acknowledgement() {
        let dialogs = ScriptedDialogs::answering(&[false]);
        assert!(!delete_item(&dialogs, &InertBackend, EntityKind::Project, 1));
        assert_eq!(dialogs.prompts.borrow().len(), 1);
    }

    #[test]
    fn edit_closes_the_modal_before_alerting() {
        let modal = FakeModal::default();
        show_details(&modal, EntityKind::User, 3);
        assert_eq!(
            modal.shown.borrow().as_ref().map(|v| v.title.clone()),
            Some("Utilisateur #3".to_string())
        );

        let dialogs = ScriptedDialogs::default();
        edit_item(&modal, &dialogs, EntityKind::User, 3);
        assert!(modal.shown.borrow().is_none());
        assert_eq!(
            *dialogs.prompts.borrow(),
            vec![Prompt::Alert(
                "Fonctionnalité d'édition à implémenter pour user #3".into()
            )]
        );
    }

    #[test]
    fn logout_navigates_only_when_confirmed() {
        let yes = ScriptedDialogs::answering(&[true]);
        assert_eq!(
            confirm_logout(&yes, "../front-office/index.html"),
            Some("../front-office/index.html")
        );
        let no = ScriptedDialogs::answering(&[false]);
        assert_eq!(confirm_logout(&no, "../front-office/index.html"), None);
        assert_eq!(
            *no.prompts.borrow(),
            vec![Prompt::Confirm(LOGOUT_PROMPT.into())]
        );
    }
}
