//! One-shot fade-in of cards as they enter the viewport.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use peaceconnect::bootstrap::Wired;
use peaceconnect::config::SiteConfig;
use peaceconnect::reveal::{
    RevealTracker, HIDDEN_OPACITY, HIDDEN_TRANSFORM, TARGETS, TRANSITION, VISIBLE_OPACITY,
    VISIBLE_TRANSFORM,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::dom;
use super::error::WebError;

const INDEX_ATTR: &str = "data-reveal";

fn set_styles(el: &HtmlElement, opacity: &str, transform: &str) -> Result<(), WebError> {
    let style = el.style();
    style
        .set_property("opacity", opacity)
        .and_then(|_| style.set_property("transform", transform))
        .map_err(WebError::js("style.setProperty"))
}

pub(crate) fn init_scroll_reveal(cfg: &Rc<SiteConfig>) -> Result<Wired, WebError> {
    let targets: Vec<HtmlElement> = dom::query_all(TARGETS)?;
    if targets.is_empty() {
        return Ok(Wired::Skipped(".feature-card"));
    }
    for (i, el) in targets.iter().enumerate() {
        set_styles(el, HIDDEN_OPACITY, HIDDEN_TRANSFORM)?;
        el.style()
            .set_property("transition", TRANSITION)
            .map_err(WebError::js("style.setProperty"))?;
        el.set_attribute(INDEX_ATTR, &i.to_string())
            .map_err(WebError::js("setAttribute"))?;
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.len())));
    let on_entries = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = target
                .get_attribute(INDEX_ATTR)
                .and_then(|v| v.parse::<usize>().ok())
            else {
                continue;
            };
            if !tracker.borrow_mut().observe(index, entry.is_intersecting()) {
                continue;
            }
            observer.unobserve(&target);
            if let Ok(el) = target.dyn_into::<HtmlElement>() {
                if let Err(e) = set_styles(&el, VISIBLE_OPACITY, VISIBLE_TRANSFORM) {
                    log::warn!("reveal: {e}");
                }
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(cfg.reveal_threshold));
    options.set_root_margin(&cfg.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options)
            .map_err(WebError::js("IntersectionObserver"))?;
    on_entries.forget();

    for el in &targets {
        observer.observe(el);
    }
    log::debug!("reveal: observing {} elements", targets.len());
    Ok(Wired::Attached)
}
