use peaceconnect::config::SiteConfig;
use peaceconnect::notification::{Notification, NotificationKind, Schedule, EXIT_STYLE};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::dom;
use super::error::WebError;

/// Append a floating message to `<body>`; it animates out and removes itself.
pub(crate) fn show_notification(
    message: &str,
    kind: NotificationKind,
    cfg: &SiteConfig,
) -> Result<(), WebError> {
    let doc = dom::document()?;
    let body = doc.body().ok_or(WebError::Missing("body"))?;
    let notification = Notification::new(message, kind);

    let el: HtmlElement = doc
        .create_element("div")
        .map_err(WebError::js("createElement"))?
        .dyn_into()
        .map_err(|_| WebError::Cast("div"))?;
    el.set_class_name(kind.class());
    el.set_text_content(Some(&notification.message));
    el.set_attribute("role", "status")
        .and_then(|_| el.set_attribute("style", &notification.inline_style()))
        .map_err(WebError::js("setAttribute"))?;
    body.append_child(&el).map_err(WebError::js("appendChild"))?;

    let schedule = Schedule::new(cfg.notification_display_ms, cfg.notification_exit_ms);
    let leaving = el.clone();
    dom::set_timeout(schedule.exit_at_ms, move || {
        let _ = leaving.style().set_property("animation", EXIT_STYLE);
    })?;
    dom::set_timeout(schedule.remove_at_ms, move || el.remove())?;
    Ok(())
}
