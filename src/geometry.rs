use crate::constants::{MAGNETIC_PULL, MAGNETIC_SCALE, PARALLAX_DAMPING, SCROLL_THRESHOLD};
use std::fmt;

/// Axis-aligned box in viewport pixels, as reported by `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Offset of a point from the center of this box
    #[must_use]
    pub fn offset_from_center(&self, x: f64, y: f64) -> (f64, f64) {
        let (cx, cy) = self.center();
        (x - cx, y - cy)
    }
}

/// A `translate(..) scale(..)` CSS transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Transform {
    pub const REST: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Pull toward the pointer by a fraction of its offset from the element center.
    ///
    /// The box is expected to be measured fresh for every pointer event.
    #[must_use]
    pub fn magnetic(rect: &Rect, pointer_x: f64, pointer_y: f64) -> Self {
        let (dx, dy) = rect.offset_from_center(pointer_x, pointer_y);
        Self {
            translate_x: dx * MAGNETIC_PULL,
            translate_y: dy * MAGNETIC_PULL,
            scale: MAGNETIC_SCALE,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}, {}) scale({})",
            CssLength(self.translate_x),
            CssLength(self.translate_y),
            css_number(self.scale)
        )
    }
}

/// Pixel length that renders a bare `0` for zero
struct CssLength(f64);

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}px", self.0)
        }
    }
}

/// Collapse `-0.0` so it never renders as "-0"
fn css_number(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Whether the navbar should be in its scrolled state at this scroll offset
#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Vertical image offset for a parallax element with the given speed factor
#[must_use]
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    css_number(-(scroll_y * speed * PARALLAX_DAMPING))
}

/// CSS transform placing a parallax image at the given vertical offset
#[must_use]
pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({}px)", css_number(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 40.0,
    };

    #[test]
    fn test_rect_center() {
        assert_eq!(BUTTON.center(), (200.0, 70.0));
        assert_eq!(BUTTON.offset_from_center(220.0, 60.0), (20.0, -10.0));
    }

    #[test]
    fn test_magnetic_transform_pulls_toward_pointer() {
        let transform = Transform::magnetic(&BUTTON, 300.0, 90.0);
        assert_eq!(transform.translate_x, 100.0 * MAGNETIC_PULL);
        assert_eq!(transform.translate_y, 20.0 * MAGNETIC_PULL);
        assert_eq!(transform.scale, 1.02);
    }

    #[test]
    fn test_magnetic_transform_css() {
        let transform = Transform::magnetic(&BUTTON, 220.0, 90.0);
        assert_eq!(transform.to_string(), "translate(3px, 3px) scale(1.02)");
    }

    #[test]
    fn test_magnetic_transform_at_center() {
        let transform = Transform::magnetic(&BUTTON, 200.0, 70.0);
        assert_eq!(transform.to_string(), "translate(0, 0) scale(1.02)");
    }

    #[test]
    fn test_rest_transform_css() {
        assert_eq!(Transform::REST.to_string(), "translate(0, 0) scale(1)");
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
        assert!(is_scrolled(2400.0));
    }

    #[test]
    fn test_parallax_offset() {
        assert_eq!(parallax_offset(500.0, 0.5), -25.0);
        assert!((parallax_offset(1000.0, -0.3) - 30.0).abs() < 1e-9);
        assert_eq!(parallax_offset(0.0, 0.5), 0.0);
    }

    #[test]
    fn test_parallax_transform_css() {
        assert_eq!(parallax_transform(-25.0), "translateY(-25px)");
        assert_eq!(parallax_transform(parallax_offset(0.0, 0.8)), "translateY(0px)");
    }
}
