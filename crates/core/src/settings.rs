use serde_json::Value;

use crate::actions::Dialogs;
use crate::backend::Backend;

pub const SAVED_MESSAGE: &str = "Paramètres enregistrés avec succès !";

/// Key/value snapshot of the settings form, in form order.
///
/// A repeated key keeps its first position and its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    fields: Vec<(String, String)>,
}

impl SettingsForm {
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in entries {
            form.set(key.into(), value.into());
        }
        form
    }

    fn set(&mut self, key: String, value: String) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        )
    }

    /// Log, hand to the backend stub, and acknowledge. Nothing is validated or stored.
    pub fn submit<D, B>(&self, dialogs: &D, backend: &B)
    where
        D: Dialogs + ?Sized,
        B: Backend + ?Sized,
    {
        let payload = self.to_json();
        log::info!("Paramètres à sauvegarder: {payload}");
        backend.send("parametres", &payload);
        dialogs.alert(SAVED_MESSAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{Prompt, ScriptedDialogs};
    use crate::backend::InertBackend;

    #[test]
    fn last_value_wins_for_repeated_keys() {
        let form = SettingsForm::from_entries([
            ("siteName", "PeaceConnect"),
            ("lang", "en"),
            ("lang", "fr"),
        ]);
        assert_eq!(form.get("lang"), Some("fr"));
        assert_eq!(form.keys().collect::<Vec<_>>(), vec!["siteName", "lang"]);
    }

    #[test]
    fn payload_follows_form_order() {
        let form = SettingsForm::from_entries([
            ("siteName", "P"),
            ("email", "a@b.co"),
            ("lang", "fr"),
        ]);
        assert_eq!(
            form.to_json().to_string(),
            r#"{"siteName":"P","email":"a@b.co","lang":"fr"}"#
        );
    }

    #[test]
    fn submit_always_acknowledges() {
        let dialogs = ScriptedDialogs::default();
        SettingsForm::default().submit(&dialogs, &InertBackend);
        assert_eq!(
            *dialogs.prompts.borrow(),
            vec![Prompt::Alert(SAVED_MESSAGE.into())]
        );
    }
}
