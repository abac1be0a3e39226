/// Inline style for one of the three hamburger bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: Option<&'static str>,
    pub opacity: Option<&'static str>,
}

const OPEN_BARS: [BarStyle; 3] = [
    BarStyle { transform: Some("rotate(45deg) translate(5px, 5px)"), opacity: None },
    BarStyle { transform: None, opacity: Some("0") },
    BarStyle { transform: Some("rotate(-45deg) translate(7px, -6px)"), opacity: None },
];

const CLOSED_BARS: [BarStyle; 3] = [
    BarStyle { transform: Some("none"), opacity: None },
    BarStyle { transform: None, opacity: Some("1") },
    BarStyle { transform: Some("none"), opacity: None },
];

/// Open/closed state of the mobile navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu and return the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Bar styles forming an "X" when open and three flat bars when closed
    #[must_use]
    pub fn bar_styles(self) -> [BarStyle; 3] {
        if self.open {
            OPEN_BARS
        } else {
            CLOSED_BARS
        }
    }
}
