use crate::constants::MAGNETIC_SELECTOR;
use crate::dom::{listen, query_all, set_style};
use crate::geometry::{Rect, Transform};
use wasm_bindgen::JsValue;
use web_sys::MouseEvent;

fn bounding_rect(element: &web_sys::Element) -> Rect {
    let bounds = element.get_bounding_client_rect();
    Rect {
        left: bounds.left(),
        top: bounds.top(),
        width: bounds.width(),
        height: bounds.height(),
    }
}

/// Pull `button` toward a pointer at viewport position (`client_x`, `client_y`)
pub fn pull_toward(button: &web_sys::Element, client_x: f64, client_y: f64) {
    let transform = Transform::magnetic(&bounding_rect(button), client_x, client_y);
    set_style(button, "transform", &transform.to_string());
}

pub fn release(button: &web_sys::Element) {
    set_style(button, "transform", &Transform::REST.to_string());
}

/// Give every `.btn` / `.btn-app` a magnetic hover. Returns the button count.
///
/// # Errors
///
/// Returns an error if a listener cannot be attached.
pub fn wire_magnetic_buttons() -> Result<usize, JsValue> {
    let buttons = query_all(MAGNETIC_SELECTOR);

    for button in &buttons {
        let target = button.clone();
        listen(button, "mousemove", move |ev: MouseEvent| {
            pull_toward(&target, f64::from(ev.client_x()), f64::from(ev.client_y()));
        })?;

        let target = button.clone();
        listen(button, "mouseleave", move |_: MouseEvent| release(&target))?;
    }

    Ok(buttons.len())
}
