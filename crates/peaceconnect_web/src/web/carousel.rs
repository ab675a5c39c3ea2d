use std::cell::RefCell;
use std::rc::Rc;

use peaceconnect::bootstrap::Wired;
use peaceconnect::carousel::Carousel;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent};

use super::dom;
use super::error::WebError;

const ROOT: &str = "testimonialsCarousel";

struct CarouselView {
    state: Carousel,
    slides: Vec<Element>,
    dots: Vec<Element>,
    track: Option<HtmlElement>,
}

impl CarouselView {
    fn render(&self) {
        for (i, slide) in self.slides.iter().enumerate() {
            dom::set_class(slide, "active", self.state.is_active(i));
        }
        for (i, dot) in self.dots.iter().enumerate() {
            let active = self.state.is_active(i);
            dom::set_class(dot, "active", active);
            let _ = dot.set_attribute("aria-selected", if active { "true" } else { "false" });
        }
        if let Some(track) = &self.track {
            let offset = format!("translateX({}%)", self.state.track_offset_percent());
            let _ = track.style().set_property("transform", &offset);
        }
    }
}

fn build_dots(container: &Element, count: usize) -> Result<Vec<Element>, WebError> {
    let doc = dom::document()?;
    container.set_inner_html("");
    (0..count)
        .map(|i| {
            let dot = doc
                .create_element("button")
                .map_err(WebError::js("createElement"))?;
            dot.set_class_name("carousel-dot");
            let label = format!("Aller au témoignage {}", i + 1);
            dot.set_attribute("type", "button")
                .and_then(|_| dot.set_attribute("aria-label", &label))
                .map_err(WebError::js("setAttribute"))?;
            container
                .append_child(&dot)
                .map_err(WebError::js("appendChild"))?;
            Ok(dot)
        })
        .collect()
}

/// Run `op` on the carousel state, then repaint.
fn step(view: &Rc<RefCell<CarouselView>>, op: impl FnOnce(&mut Carousel) -> Option<usize>) -> bool {
    let mut view = view.borrow_mut();
    let moved = op(&mut view.state).is_some();
    if moved {
        view.render();
    }
    moved
}

pub(crate) fn init_carousel() -> Result<Wired, WebError> {
    let Some(root) = dom::by_id::<HtmlElement>(ROOT) else {
        return Ok(Wired::Skipped(ROOT));
    };
    let slides: Vec<Element> = dom::query_all_in(&root, ".testimonial-card")?;
    let Some(state) = Carousel::new(slides.len()) else {
        return Ok(Wired::Skipped(".testimonial-card"));
    };
    let dots = match dom::by_id::<Element>("carouselDots") {
        Some(container) => build_dots(&container, slides.len())?,
        None => Vec::new(),
    };
    let view = Rc::new(RefCell::new(CarouselView {
        state,
        slides,
        dots,
        track: dom::by_id::<HtmlElement>("testimonialsTrack"),
    }));
    view.borrow().render();

    if let Some(prev) = dom::by_id::<Element>("prevBtn") {
        let view = Rc::clone(&view);
        dom::listen(&prev, "click", move |_: Event| {
            step(&view, |c| Some(c.prev()));
        })?;
    }
    if let Some(next) = dom::by_id::<Element>("nextBtn") {
        let view = Rc::clone(&view);
        dom::listen(&next, "click", move |_: Event| {
            step(&view, |c| Some(c.next()));
        })?;
    }

    let dots = view.borrow().dots.clone();
    for (i, dot) in dots.iter().enumerate() {
        let view = Rc::clone(&view);
        dom::listen(dot, "click", move |_: Event| {
            step(&view, |c| Some(c.go_to(i as isize)));
        })?;
    }

    if !root.has_attribute("tabindex") {
        root.set_tab_index(0);
    }
    dom::listen(&root, "keydown", move |ev: KeyboardEvent| {
        if step(&view, |c| c.on_key(&ev.key())) {
            ev.prevent_default();
        }
    })?;
    Ok(Wired::Attached)
}
