//! Detail modal and the row actions exported to page scripts.

use leptos::prelude::*;
use peaceconnect::actions::{self, ModalHost};
use peaceconnect::backend::InertBackend;
use peaceconnect::bootstrap::Wired;
use peaceconnect::detail::{DetailField, DetailView, FooterButton, QUOTE_STYLE};
use peaceconnect::entity::EntityKind;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent};

use super::dialogs::BrowserDialogs;
use super::dom;
use super::error::WebError;
use super::mount;

const MODAL: &str = "detailModal";
const ACTIVE: &str = "active";

struct DomModal;

impl ModalHost for DomModal {
    fn open(&self, detail: &DetailView) {
        if let Err(e) = open_modal(detail) {
            log::warn!("detail modal: {e}");
        }
    }

    fn close(&self) {
        if let Some(modal) = dom::by_id::<Element>(MODAL) {
            dom::set_class(&modal, ACTIVE, false);
        }
    }
}

fn open_modal(detail: &DetailView) -> Result<(), WebError> {
    let modal = dom::by_id::<Element>(MODAL).ok_or(WebError::Missing(MODAL))?;
    if let Some(title) = dom::by_id::<Element>("modalTitle") {
        title.set_text_content(Some(&detail.title));
    }
    if let Some(body) = dom::by_id::<HtmlElement>("modalBody") {
        let (fields, quote) = (detail.fields, detail.quote);
        mount::replace("modalBody", &body, move || {
            view! { <DetailBody fields=fields quote=quote/> }.into_any()
        });
    }
    if let Some(footer) = dom::by_id::<HtmlElement>("modalFooter") {
        let buttons = detail.footer.clone();
        mount::replace("modalFooter", &footer, move || {
            view! { <DetailFooter buttons=buttons/> }.into_any()
        });
    }
    dom::set_class(&modal, ACTIVE, true);
    Ok(())
}

#[component]
fn DetailBody(fields: &'static [DetailField], quote: Option<&'static str>) -> impl IntoView {
    let rows = fields
        .iter()
        .map(|f| {
            view! {
                <p><strong>{format!("{}:", f.label)}</strong>" "{f.value}</p>
            }
        })
        .collect_view();
    let quote = quote.map(|q| {
        view! {
            <p><strong>"Contenu:"</strong></p>
            <p style=QUOTE_STYLE>{q}</p>
        }
    });
    view! { {rows}{quote} }
}

#[component]
fn DetailFooter(buttons: Vec<FooterButton>) -> impl IntoView {
    buttons
        .into_iter()
        .map(|button| {
            view! {
                <button class=button.class() on:click=move |_| on_footer(button)>
                    {button.label()}
                </button>
            }
        })
        .collect_view()
}

fn on_footer(button: FooterButton) {
    match button {
        FooterButton::Close => DomModal.close(),
        FooterButton::Edit { entity, id } => edit_item(entity, id),
    }
}

pub(crate) fn show_details(entity: EntityKind, id: u32) {
    actions::show_details(&DomModal, entity, id);
}

pub(crate) fn edit_item(entity: EntityKind, id: u32) {
    actions::edit_item(&DomModal, &BrowserDialogs, entity, id);
}

pub(crate) fn delete_item(entity: EntityKind, id: u32) -> bool {
    actions::delete_item(&BrowserDialogs, &InertBackend, entity, id)
}

/// Close button, overlay click and Escape.
pub(crate) fn init_modal() -> Result<Wired, WebError> {
    let Some(modal) = dom::by_id::<Element>(MODAL) else {
        return Ok(Wired::Skipped(MODAL));
    };
    for id in ["modalClose", "modalOverlay"] {
        if let Some(el) = dom::by_id::<Element>(id) {
            dom::listen(&el, "click", |_: Event| DomModal.close())?;
        }
    }
    dom::listen(&dom::document()?, "keydown", move |ev: KeyboardEvent| {
        if ev.key() == "Escape" && dom::has_class(&modal, ACTIVE) {
            DomModal.close();
        }
    })?;
    Ok(Wired::Attached)
}

fn parse_entity(kind: &str) -> Option<EntityKind> {
    match kind.parse::<EntityKind>() {
        Ok(entity) => Some(entity),
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}

#[wasm_bindgen(js_name = showDetails)]
pub fn show_details_js(id: u32, kind: &str) {
    if let Some(entity) = parse_entity(kind) {
        show_details(entity, id);
    }
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal_js() {
    DomModal.close();
}

#[wasm_bindgen(js_name = editItem)]
pub fn edit_item_js(id: u32, kind: &str) {
    if let Some(entity) = parse_entity(kind) {
        edit_item(entity, id);
    }
}

/// Returns whether the user confirmed.
#[wasm_bindgen(js_name = deleteItem)]
pub fn delete_item_js(id: u32, kind: &str) -> bool {
    parse_entity(kind).is_some_and(|entity| delete_item(entity, id))
}
