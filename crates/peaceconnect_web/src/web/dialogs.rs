use peaceconnect::actions::Dialogs;

use super::dom;

/// `window.confirm` / `window.alert`.
pub(crate) struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        dom::window()
            .and_then(|w| {
                w.confirm_with_message(message)
                    .map_err(super::error::WebError::js("confirm"))
            })
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Ok(w) = dom::window() {
            if let Err(e) = w.alert_with_message(message) {
                log::warn!("alert failed: {e:?}");
            }
        }
    }
}
