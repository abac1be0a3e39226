/// Outcome of a click on an in-page `#...` link
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorAction {
    /// Bare `#`: cancel navigation, do not scroll
    Suppress,
    /// Cancel navigation and smooth-scroll to this document offset
    ScrollTo(f64),
    /// No matching element; let the browser handle the click
    FallThrough,
}

impl AnchorAction {
    /// Decide what a click on `href` should do.
    ///
    /// `target_top` looks up the document offset of the element the hash
    /// points at; it is not called for a bare `#`.
    pub fn resolve(
        href: &str,
        navbar_height: f64,
        target_top: impl FnOnce(&str) -> Option<f64>,
    ) -> Self {
        if href == "#" {
            return Self::Suppress;
        }

        match target_top(href) {
            Some(top) => Self::ScrollTo(top - navbar_height),
            None => Self::FallThrough,
        }
    }

    #[must_use]
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::FallThrough)
    }
}
