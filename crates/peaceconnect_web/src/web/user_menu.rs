use std::rc::Rc;

use peaceconnect::actions::confirm_logout;
use peaceconnect::bootstrap::Wired;
use peaceconnect::config::SiteConfig;
use web_sys::{Element, Event};

use super::dialogs::BrowserDialogs;
use super::dom;
use super::error::WebError;

fn logout(cfg: &SiteConfig) {
    let Some(url) = confirm_logout(&BrowserDialogs, &cfg.logout_url) else {
        return;
    };
    let result = dom::window().and_then(|w| {
        w.location()
            .set_href(url)
            .map_err(WebError::js("location.href"))
    });
    if let Err(e) = result {
        log::warn!("logout: {e}");
    }
}

/// Dropdown toggle, close on any other click, and both logout entries.
pub(crate) fn init_user_menu(cfg: &Rc<SiteConfig>) -> Result<Wired, WebError> {
    let mut wired = Wired::Skipped("userMenuBtn");

    if let (Some(btn), Some(dropdown)) = (
        dom::by_id::<Element>("userMenuBtn"),
        dom::by_id::<Element>("userDropdown"),
    ) {
        let menu = dropdown.clone();
        dom::listen(&btn, "click", move |ev: Event| {
            ev.stop_propagation();
            dom::toggle_class(&menu, "active");
        })?;
        dom::listen(&dom::document()?, "click", move |_: Event| {
            dom::set_class(&dropdown, "active", false);
        })?;
        wired = Wired::Attached;
    }

    // The dropdown entry is a link; the sidebar one is a plain button.
    for (id, is_link) in [("logoutBtn", false), ("logoutDropdown", true)] {
        if let Some(el) = dom::by_id::<Element>(id) {
            let cfg = Rc::clone(cfg);
            dom::listen(&el, "click", move |ev: Event| {
                if is_link {
                    ev.prevent_default();
                }
                logout(&cfg);
            })?;
            wired = Wired::Attached;
        }
    }
    Ok(wired)
}
