use crate::constants::{COUNTED_CLASS, COUNTER_TARGET_ATTR};
use crate::counter::{parse_target, CounterAnimation};
use crate::dom::request_animation_frame;

/// Count a `.stat-number` element up to its `data-target`.
///
/// The element is marked counted before the first frame renders. The first
/// frame is drawn synchronously, the rest one per animation frame.
pub fn animate_counter(display: &web_sys::Element) {
    let _ = display.class_list().add_1(COUNTED_CLASS);

    let Some(raw) = display.get_attribute(COUNTER_TARGET_ATTR) else {
        leptos::logging::warn!("Counter has no {} attribute", COUNTER_TARGET_ATTR);
        return;
    };
    let Some(target) = parse_target(&raw) else {
        leptos::logging::warn!("Counter target {:?} is not a number", raw);
        return;
    };

    step(display.clone(), CounterAnimation::new(target));
}

fn step(display: web_sys::Element, mut animation: CounterAnimation) {
    let Some(frame) = animation.next() else { return };
    display.set_text_content(Some(&frame));

    if !animation.is_finished() {
        request_animation_frame(move || step(display, animation));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn stat_number(target: &str) -> web_sys::Element {
        let document = crate::dom::document().expect("document");
        let element = document.create_element("span").expect("span");
        element.set_class_name("stat-number");
        element.set_attribute(COUNTER_TARGET_ATTR, target).expect("attribute");
        element
    }

    #[wasm_bindgen_test]
    fn test_first_frame_renders_immediately() {
        let display = stat_number("30000");
        animate_counter(&display);

        assert!(display.class_list().contains(COUNTED_CLASS));
        assert_eq!(display.text_content().as_deref(), Some("240"));
    }

    #[wasm_bindgen_test]
    fn test_unparsable_target_is_marked_but_untouched() {
        let display = stat_number("lots");
        display.set_text_content(Some("0"));
        animate_counter(&display);

        assert!(display.class_list().contains(COUNTED_CLASS));
        assert_eq!(display.text_content().as_deref(), Some("0"));
    }
}
