//! Leptos views mounted into existing page containers.
//!
//! Each container id owns the handles of the views mounted into it. Clearing a
//! slot drops those handles, which unmounts the views and disposes their owners.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;

use leptos::mount::mount_to;
use leptos::prelude::*;
use web_sys::HtmlElement;

thread_local! {
    static SLOTS: RefCell<HashMap<&'static str, Vec<Box<dyn Any>>>> = RefCell::new(HashMap::new());
}

/// Unmount everything under `slot` and empty the container.
pub(crate) fn clear(slot: &'static str, container: &HtmlElement) {
    let handles = SLOTS.with(|slots| slots.borrow_mut().remove(slot));
    drop(handles);
    container.set_inner_html("");
}

/// Append `view` to `container`, owned by `slot`.
pub(crate) fn append(
    slot: &'static str,
    container: &HtmlElement,
    view: impl FnOnce() -> AnyView + 'static,
) {
    let handle = mount_to(container.clone(), view);
    SLOTS.with(|slots| {
        slots
            .borrow_mut()
            .entry(slot)
            .or_default()
            .push(Box::new(handle));
    });
}

/// Replace the content of `container` with a single view.
pub(crate) fn replace(
    slot: &'static str,
    container: &HtmlElement,
    view: impl FnOnce() -> AnyView + 'static,
) {
    clear(slot, container);
    append(slot, container, view);
}
