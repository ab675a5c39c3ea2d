use std::rc::Rc;

use peaceconnect::bootstrap::Wired;
use peaceconnect::config::SiteConfig;
use peaceconnect::navigation::OutsideClick;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, Node};

use super::dom;
use super::error::WebError;

pub(crate) const SIDEBAR: &str = "sidebar";

/// Collapse toggle, mobile open button, and close-on-outside-click for narrow viewports.
pub(crate) fn init_sidebar(cfg: &Rc<SiteConfig>) -> Result<Wired, WebError> {
    let Some(sidebar) = dom::by_id::<Element>(SIDEBAR) else {
        return Ok(Wired::Skipped(SIDEBAR));
    };
    let menu_btn = dom::by_id::<Element>("mobileMenuBtn");

    if let Some(toggle) = dom::by_id::<Element>("sidebarToggle") {
        let sidebar = sidebar.clone();
        dom::listen(&toggle, "click", move |_: Event| {
            dom::toggle_class(&sidebar, "collapsed");
        })?;
    }

    if let Some(btn) = &menu_btn {
        let sidebar = sidebar.clone();
        dom::listen(btn, "click", move |_: Event| {
            dom::toggle_class(&sidebar, "active");
        })?;
    }

    if let Some(main) = dom::by_id::<Element>("mainContent") {
        let cfg = Rc::clone(cfg);
        dom::listen(&main, "click", move |ev: MouseEvent| {
            let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = |el: &Element| target.as_ref().is_some_and(|t| el.contains(Some(t)));
            let click = OutsideClick {
                viewport_width: dom::viewport_width(),
                sidebar_open: dom::has_class(&sidebar, "active"),
                inside_sidebar: inside(&sidebar),
                on_menu_button: menu_btn.as_ref().is_some_and(|b| inside(b)),
            };
            if click.closes_sidebar(cfg.mobile_breakpoint_px) {
                dom::set_class(&sidebar, "active", false);
            }
        })?;
    }

    Ok(Wired::Attached)
}
