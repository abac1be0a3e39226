use crate::constants::{ACTIVE_CLASS, ANCHOR_SELECTOR, MENU_SELECTOR, MENU_TOGGLE_SELECTOR, NAVBAR_SELECTOR};
use crate::dom::{children, listen, query, query_all, set_style};
use crate::models::{AnchorAction, MenuState};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

fn navbar_height() -> f64 {
    query(NAVBAR_SELECTOR)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map_or(0.0, |el| f64::from(el.offset_height()))
}

fn target_offset_top(selector: &str) -> Option<f64> {
    query(selector)?
        .dyn_into::<HtmlElement>()
        .ok()
        .map(|el| f64::from(el.offset_top()))
}

fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else { return };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scroll same-page `#...` links to just below the fixed navbar.
///
/// The navbar height is measured once, here. Returns the number of links wired.
///
/// # Errors
///
/// Returns an error if a listener cannot be attached.
pub fn wire_anchor_links() -> Result<usize, JsValue> {
    let offset = navbar_height();
    let anchors = query_all(ANCHOR_SELECTOR);

    for anchor in &anchors {
        let link = anchor.clone();
        listen(anchor, "click", move |ev: web_sys::Event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let action = AnchorAction::resolve(&href, offset, target_offset_top);

            if action.prevents_default() {
                ev.prevent_default();
            }
            if let AnchorAction::ScrollTo(top) = action {
                smooth_scroll_to(top);
            }
        })?;
    }

    Ok(anchors.len())
}

/// Reflect `state` onto the toggle button, the menu and the three bars
pub fn apply_menu_state(toggle: &web_sys::Element, menu: &web_sys::Element, state: MenuState) {
    let _ = menu.class_list().toggle_with_force(ACTIVE_CLASS, state.is_open());
    let _ = toggle.class_list().toggle_with_force(ACTIVE_CLASS, state.is_open());

    for (bar, style) in children(toggle, "span").iter().zip(state.bar_styles()) {
        if let Some(transform) = style.transform {
            set_style(bar, "transform", transform);
        }
        if let Some(opacity) = style.opacity {
            set_style(bar, "opacity", opacity);
        }
    }
}

/// Wire the hamburger toggle. Returns `false` if the toggle or menu is missing.
///
/// # Errors
///
/// Returns an error if the click listener cannot be attached.
pub fn wire_mobile_menu() -> Result<bool, JsValue> {
    let (Some(toggle), Some(menu)) = (query(MENU_TOGGLE_SELECTOR), query(MENU_SELECTOR)) else {
        return Ok(false);
    };

    let state = Rc::new(Cell::new(MenuState::default()));
    let button = toggle.clone();

    listen(&toggle, "click", move |_: web_sys::Event| {
        let mut current = state.get();
        current.toggle();
        state.set(current);
        apply_menu_state(&button, &menu, current);
    })?;

    Ok(true)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(html: &str) -> web_sys::Element {
        let document = crate::dom::document().expect("document");
        let fixture = document.create_element("div").expect("div");
        fixture.set_inner_html(html);
        document.body().expect("body").append_child(&fixture).expect("append");
        fixture
    }

    fn dispatch_click(target: &web_sys::Element) -> bool {
        let init = web_sys::EventInit::new();
        init.set_cancelable(true);
        let event = web_sys::Event::new_with_event_init_dict("click", &init).expect("event");
        target.dispatch_event(&event).expect("dispatch")
    }

    #[wasm_bindgen_test]
    fn test_menu_double_toggle_restores_closed_state() {
        let fixture = mount(
            r#"<header class="navbar"><nav></nav>
               <button class="mobile-menu-toggle"><span></span><span></span><span></span></button></header>"#,
        );
        assert!(wire_mobile_menu().expect("wire"));

        let toggle = query(MENU_TOGGLE_SELECTOR).expect("toggle");
        let menu = query(MENU_SELECTOR).expect("menu");
        let bars = children(&toggle, "span");

        dispatch_click(&toggle);
        assert!(menu.class_list().contains(ACTIVE_CLASS));
        assert!(toggle.class_list().contains(ACTIVE_CLASS));
        assert!(bars[1].get_attribute("style").unwrap_or_default().contains("opacity: 0"));

        dispatch_click(&toggle);
        assert!(!menu.class_list().contains(ACTIVE_CLASS));
        assert!(!toggle.class_list().contains(ACTIVE_CLASS));
        assert!(bars[0].get_attribute("style").unwrap_or_default().contains("transform: none"));
        assert!(bars[1].get_attribute("style").unwrap_or_default().contains("opacity: 1"));
        assert!(bars[2].get_attribute("style").unwrap_or_default().contains("transform: none"));

        fixture.remove();
    }

    #[wasm_bindgen_test]
    fn test_bare_hash_link_is_cancelled() {
        let fixture = mount(r##"<a id="bare-link" href="#">Top</a><a id="dead-link" href="#nowhere">Gone</a>"##);
        wire_anchor_links().expect("wire");

        let document = crate::dom::document().expect("document");
        let bare = document.get_element_by_id("bare-link").expect("bare link");
        let dead = document.get_element_by_id("dead-link").expect("dead link");

        // dispatch_event returns false when the default action was prevented
        assert!(!dispatch_click(&bare));
        assert!(dispatch_click(&dead));

        fixture.remove();
    }
}
