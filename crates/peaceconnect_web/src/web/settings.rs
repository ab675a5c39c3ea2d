use js_sys::Array;
use peaceconnect::backend::InertBackend;
use peaceconnect::bootstrap::Wired;
use peaceconnect::settings::SettingsForm;
use wasm_bindgen::JsCast;
use web_sys::{Event, FormData, HtmlFormElement};

use super::dialogs::BrowserDialogs;
use super::dom;
use super::error::WebError;

const FORM: &str = "settingsForm";

/// Text entries of the form; file inputs are ignored.
fn read_form(form: &HtmlFormElement) -> Result<SettingsForm, WebError> {
    let data = FormData::new_with_form(form).map_err(WebError::js("FormData"))?;
    let iter = js_sys::try_iter(&data)
        .map_err(WebError::js("FormData.entries"))?
        .ok_or(WebError::Cast("FormData"))?;
    let mut entries = Vec::new();
    for item in iter {
        let pair: Array = item
            .map_err(WebError::js("FormData.entries"))?
            .dyn_into()
            .map_err(|_| WebError::Cast("FormData entry"))?;
        if let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            entries.push((key, value));
        }
    }
    Ok(SettingsForm::from_entries(entries))
}

pub(crate) fn init_settings() -> Result<Wired, WebError> {
    let Some(form) = dom::by_id::<HtmlFormElement>(FORM) else {
        return Ok(Wired::Skipped(FORM));
    };
    let target = form.clone();
    dom::listen(&form, "submit", move |ev: Event| {
        ev.prevent_default();
        match read_form(&target) {
            Ok(settings) => settings.submit(&BrowserDialogs, &InertBackend),
            Err(e) => log::warn!("settings: {e}"),
        }
    })?;
    Ok(Wired::Attached)
}
