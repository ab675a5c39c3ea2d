//! Sticky header, mobile menu, and the active link that follows scrolling.

use std::rc::Rc;

use peaceconnect::bootstrap::Wired;
use peaceconnect::config::SiteConfig;
use peaceconnect::scroll::{current_section, header_scrolled, link_targets, SectionSpan};
use web_sys::{Element, Event, HtmlElement};

use super::dom;
use super::error::WebError;

struct ScrollSpy {
    header: Option<Element>,
    links: Vec<Element>,
    sections: Vec<HtmlElement>,
    cfg: Rc<SiteConfig>,
}

impl ScrollSpy {
    fn update(&self) {
        let y = dom::scroll_y();
        if let Some(header) = &self.header {
            dom::set_class(
                header,
                "scrolled",
                header_scrolled(y, self.cfg.header_scroll_threshold_px),
            );
        }

        // Offsets move with layout; measure on every scroll.
        let spans: Vec<SectionSpan> = self
            .sections
            .iter()
            .map(|s| SectionSpan {
                id: s.id(),
                top: s.offset_top() as f64,
                height: s.offset_height() as f64,
            })
            .collect();
        let current = current_section(&spans, y, self.cfg.section_offset_px);
        for link in &self.links {
            let on = current.is_some_and(|id| {
                link.get_attribute("href")
                    .is_some_and(|href| link_targets(&href, id))
            });
            dom::set_class(link, "active", on);
        }
    }
}

pub(crate) fn init_header(cfg: &Rc<SiteConfig>) -> Result<Wired, WebError> {
    let header = dom::by_id::<Element>("header");
    let toggle = dom::by_id::<Element>("navToggle");
    let menu = dom::by_id::<Element>("navMenu");
    let links: Vec<Element> = dom::query_all(".nav-link")?;

    if header.is_none() && toggle.is_none() && links.is_empty() {
        return Ok(Wired::Skipped("header"));
    }

    if let (Some(toggle), Some(menu)) = (toggle, menu) {
        let button = toggle.clone();
        dom::listen(&toggle, "click", move |_: Event| {
            dom::toggle_class(&menu, "active");
            dom::toggle_class(&button, "active");
        })?;
    }

    let spy = Rc::new(ScrollSpy {
        header,
        links,
        sections: dom::query_all("section[id]")?,
        cfg: Rc::clone(cfg),
    });
    spy.update();
    let on_scroll = Rc::clone(&spy);
    dom::listen(&dom::window()?, "scroll", move |_: Event| on_scroll.update())?;
    Ok(Wired::Attached)
}
