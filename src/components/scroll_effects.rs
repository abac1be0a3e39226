use crate::constants::{NAVBAR_SELECTOR, PARALLAX_ATTR, PARALLAX_SELECTOR, SCROLLED_CLASS};
use crate::dom::{child, query, query_all, request_animation_frame, set_style};
use crate::geometry::{is_scrolled, parallax_offset, parallax_transform};
use crate::models::FrameGate;
use leptos::leptos_dom::helpers::window_event_listener;
use std::rc::Rc;

fn scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Toggle the navbar's scrolled style for the given scroll offset
pub fn update_navbar(navbar: &web_sys::Element, scroll_y: f64) {
    let _ = navbar.class_list().toggle_with_force(SCROLLED_CLASS, is_scrolled(scroll_y));
}

/// Move each parallax image according to its container's `data-parallax` speed
pub fn apply_parallax(scroll_y: f64) {
    for container in query_all(PARALLAX_SELECTOR) {
        let Some(speed) = container
            .get_attribute(PARALLAX_ATTR)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
        else {
            continue;
        };
        let Some(image) = child(&container, "img") else { continue };

        set_style(&image, "transform", &parallax_transform(parallax_offset(scroll_y, speed)));
    }
}

/// Wire the navbar scroll state and the frame-coalesced parallax effect.
///
/// The navbar check runs on every scroll event. Parallax work is limited to
/// one pending animation frame; scroll events arriving meanwhile are dropped.
pub fn wire_scroll_effects() {
    let navbar = query(NAVBAR_SELECTOR);
    let gate = Rc::new(FrameGate::new());

    window_event_listener(leptos::ev::scroll, move |_| {
        if let Some(navbar) = &navbar {
            update_navbar(navbar, scroll_y());
        }

        if gate.try_acquire() {
            let gate = Rc::clone(&gate);
            request_animation_frame(move || {
                apply_parallax(scroll_y());
                gate.release();
            });
        }
    });
}
