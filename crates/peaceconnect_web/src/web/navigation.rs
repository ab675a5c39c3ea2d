//! Single-page section switching in the back office.

use std::rc::Rc;

use peaceconnect::bootstrap::Wired;
use peaceconnect::config::SiteConfig;
use peaceconnect::navigation::{page_title, Section};
use web_sys::{Element, Event};

use super::error::WebError;
use super::{dom, sidebar, tables};

const NAV_ITEMS: &str = ".nav-item[data-section]";

struct Nav {
    items: Vec<Element>,
    sections: Vec<Element>,
    cfg: Rc<SiteConfig>,
}

impl Nav {
    fn activate(&self, clicked: &Element, target: &str) {
        for item in &self.items {
            dom::set_class(item, "active", false);
        }
        dom::set_class(clicked, "active", true);

        for section in &self.sections {
            dom::set_class(section, "active", section.id() == target);
        }

        if let Some(title) = dom::by_id::<Element>("pageTitle") {
            title.set_text_content(Some(page_title(target)));
        }

        match Section::from_id(target).and_then(Section::loader) {
            Some(table) => {
                tables::load_table(table, &self.cfg);
            }
            None => log::debug!("section {target}: nothing to load"),
        }

        if self.cfg.is_mobile_width(dom::viewport_width()) {
            if let Some(sidebar) = dom::by_id::<Element>(sidebar::SIDEBAR) {
                dom::set_class(&sidebar, "active", false);
            }
        }
    }
}

pub(crate) fn init_navigation(cfg: &Rc<SiteConfig>) -> Result<Wired, WebError> {
    let items: Vec<Element> = dom::query_all(NAV_ITEMS)?;
    if items.is_empty() {
        return Ok(Wired::Skipped(NAV_ITEMS));
    }
    let nav = Rc::new(Nav {
        items,
        sections: dom::query_all(".dashboard-section")?,
        cfg: Rc::clone(cfg),
    });

    for item in &nav.items {
        let nav = Rc::clone(&nav);
        let clicked = item.clone();
        dom::listen(item, "click", move |ev: Event| {
            ev.prevent_default();
            let target = clicked.get_attribute("data-section").unwrap_or_default();
            nav.activate(&clicked, &target);
        })?;
    }
    Ok(Wired::Attached)
}
