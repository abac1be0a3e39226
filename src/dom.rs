use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Run `f` on the next animation frame
pub fn request_animation_frame<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let closure = Closure::once(f);
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[must_use]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[must_use]
pub fn query(selector: &str) -> Option<web_sys::Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`; an invalid selector matches nothing
#[must_use]
pub fn query_all(selector: &str) -> Vec<web_sys::Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// First descendant of `parent` matching `selector`
#[must_use]
pub fn child(parent: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    parent.query_selector(selector).ok().flatten()
}

/// All descendants of `parent` matching `selector`
#[must_use]
pub fn children(parent: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    let Ok(nodes) = parent.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Attach a listener that stays alive for the lifetime of the page
///
/// # Errors
///
/// Returns an error if the browser rejects the listener.
pub fn listen<E>(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once the document has been parsed.
///
/// The wasm module usually finishes loading after `DOMContentLoaded`, so
/// this runs immediately unless the document is still loading.
pub fn on_dom_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(document) = document() else {
        return;
    };

    if document.ready_state() != "loading" {
        f();
        return;
    }

    let closure = Closure::once(f);
    if document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}

/// Set an inline style property, ignoring failures
pub fn set_style(element: &web_sys::Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}
