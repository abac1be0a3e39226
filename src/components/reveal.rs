use crate::components::counter_display::animate_counter;
use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD, STAT_ITEM_CLASS, STAT_NUMBER_SELECTOR, VISIBLE_CLASS};
use crate::dom::{child, query_all};
use crate::models::{RevealKind, RevealTarget};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type Tracked = Rc<RefCell<Vec<(web_sys::Element, RevealTarget)>>>;

fn reveal_kind(element: &web_sys::Element) -> RevealKind {
    if element.class_list().contains(STAT_ITEM_CLASS) && child(element, STAT_NUMBER_SELECTOR).is_some() {
        RevealKind::Statistic
    } else {
        RevealKind::Plain
    }
}

/// Observe every `.animate-on-scroll` element and reveal it on first entry.
///
/// Returns the number of observed elements.
///
/// # Errors
///
/// Returns an error if the `IntersectionObserver` cannot be created.
pub fn observe_reveal_targets() -> Result<usize, JsValue> {
    let elements = query_all(REVEAL_SELECTOR);
    if elements.is_empty() {
        return Ok(0);
    }

    let tracked: Tracked = Rc::new(RefCell::new(
        elements
            .iter()
            .map(|el| (el.clone(), RevealTarget::new(reveal_kind(el))))
            .collect(),
    ));

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: JsValue| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
            handle_entry(&tracked, &entry);
        }
    }) as Box<dyn FnMut(js_sys::Array, JsValue)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for element in &elements {
        observer.observe(element);
    }
    callback.forget();

    Ok(elements.len())
}

fn handle_entry(tracked: &Tracked, entry: &IntersectionObserverEntry) {
    let element = entry.target();
    let node: &web_sys::Node = &element;

    let effects = {
        let mut tracked = tracked.borrow_mut();
        let Some((_, target)) = tracked
            .iter_mut()
            .find(|(el, _)| el.is_same_node(Some(node)))
        else {
            return;
        };
        target.observe(entry.is_intersecting(), entry.intersection_ratio())
    };

    if effects.reveal {
        let _ = element.class_list().add_1(VISIBLE_CLASS);
    }

    if effects.start_counter {
        if let Some(display) = child(&element, STAT_NUMBER_SELECTOR) {
            animate_counter(&display);
        }
    }
}
