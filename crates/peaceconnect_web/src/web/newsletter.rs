use std::rc::Rc;

use peaceconnect::bootstrap::Wired;
use peaceconnect::config::SiteConfig;
use peaceconnect::newsletter;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement, HtmlInputElement};

use super::dom;
use super::error::WebError;
use super::notification::show_notification;

const FORM: &str = "newsletterForm";

fn email_input(form: &HtmlFormElement) -> Option<HtmlInputElement> {
    dom::by_id::<HtmlInputElement>("newsletterEmail").or_else(|| {
        form.query_selector("input[type=\"email\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into().ok())
    })
}

pub(crate) fn init_newsletter(cfg: &Rc<SiteConfig>) -> Result<Wired, WebError> {
    let Some(form) = dom::by_id::<HtmlFormElement>(FORM) else {
        return Ok(Wired::Skipped(FORM));
    };
    let Some(input) = email_input(&form) else {
        return Ok(Wired::Skipped("newsletterEmail"));
    };
    let cfg = Rc::clone(cfg);
    dom::listen(&form, "submit", move |ev: Event| {
        ev.prevent_default();
        let outcome = newsletter::submit(&input.value());
        if let Err(e) = show_notification(outcome.message(), outcome.notification_kind(), &cfg) {
            log::warn!("notification: {e}");
        }
        if outcome.clears_field() {
            input.set_value("");
        }
    })?;
    Ok(Wired::Attached)
}
