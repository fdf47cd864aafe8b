//! Browser glue: window scroll subscription and one-shot reveal animations.
//!
//! Only the `wasm32` build touches the DOM. Native builds (unit tests, static
//! rendering) see a page parked at scroll offset 0 with nothing revealed.

use leptos::prelude::*;

/// Elements carrying this class animate in the first time they are seen.
pub const REVEAL_SELECTOR: &str = ".reveal";

/// Class added once an element has entered the viewport.
pub const VISIBLE_CLASS: &str = "is-visible";

/// Current vertical scroll offset as a signal.
///
/// The window listener lives exactly as long as the calling component:
/// it is attached here and removed on the owner's cleanup. Each caller gets
/// its own subscription.
pub fn use_scroll_offset() -> ReadSignal<f64> {
    let (offset, set_offset) = signal(0.0_f64);

    #[cfg(target_arch = "wasm32")]
    {
        set_offset.set(browser::scroll_y());
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            set_offset.set(browser::scroll_y());
        });
        on_cleanup(move || handle.remove());
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_offset;

    offset
}

/// Start watching every `.reveal` element on the page.
///
/// Call once after mounting. If the browser cannot provide an observer the
/// elements are shown straight away so no content stays hidden.
pub fn arm_reveal_observer() {
    #[cfg(target_arch = "wasm32")]
    match browser::observe_reveals() {
        Ok(count) => log::debug!("reveal observer armed for {count} elements"),
        Err(err) => {
            log::warn!("reveal observer unavailable, showing all content: {err}");
            browser::reveal_all();
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{REVEAL_SELECTOR, VISIBLE_CLASS};
    use crate::error::DomError;

    pub fn scroll_y() -> f64 {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        match window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::warn!("could not read scroll offset: {}", DomError::from(err));
                0.0
            }
        }
    }

    fn document() -> Result<web_sys::Document, DomError> {
        web_sys::window()
            .ok_or(DomError::NoWindow)?
            .document()
            .ok_or(DomError::NoDocument)
    }

    fn reveal_targets() -> Result<Vec<Element>, DomError> {
        let nodes = document()?.query_selector_all(REVEAL_SELECTOR)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    pub fn observe_reveals() -> Result<usize, DomError> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    mark_visible(&target);
                    // one-shot: never replays for this mount
                    observer.unobserve(&target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.1));
        options.set_root_margin("0px 0px -50px 0px");
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        callback.forget(); // Keep the closure alive for the page lifetime

        let targets = reveal_targets()?;
        for target in &targets {
            observer.observe(target);
        }
        Ok(targets.len())
    }

    fn mark_visible(target: &Element) {
        if let Err(err) = target.class_list().add_1(VISIBLE_CLASS) {
            log::warn!("could not reveal element: {}", DomError::from(err));
        }
    }

    pub fn reveal_all() {
        match reveal_targets() {
            Ok(targets) => {
                for target in &targets {
                    mark_visible(target);
                }
            }
            Err(err) => log::warn!("could not reveal content: {err}"),
        }
    }
}
