//! Thin helpers over web-sys used by every initializer.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, Window};

use super::error::WebError;

pub(crate) fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

pub(crate) fn document() -> Result<Document, WebError> {
    window()?.document().ok_or(WebError::NoDocument)
}

/// Element with `id`, cast to `T`. `None` when absent or of another type.
pub(crate) fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()
        .ok()?
        .get_element_by_id(id)?
        .dyn_into::<T>()
        .ok()
}

pub(crate) fn query_all<T: JsCast>(selector: &str) -> Result<Vec<T>, WebError> {
    let list = document()?
        .query_selector_all(selector)
        .map_err(WebError::js("querySelectorAll"))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

pub(crate) fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>, WebError> {
    let list = root
        .query_selector_all(selector)
        .map_err(WebError::js("querySelectorAll"))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Attach `handler` to `target` for the lifetime of the page.
pub(crate) fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), WebError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(WebError::js("addEventListener"))?;
    cb.forget();
    Ok(())
}

pub(crate) fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) -> Result<i32, WebError> {
    let cb = Closure::once_into_js(f);
    window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        )
        .map_err(WebError::js("setTimeout"))
}

/// Add or remove `class`. Failures are ignored; class names are constants.
pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub(crate) fn toggle_class(el: &Element, class: &str) {
    let _ = el.class_list().toggle(class);
}

pub(crate) fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub(crate) fn viewport_width() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub(crate) fn scroll_y() -> f64 {
    window().ok().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}
