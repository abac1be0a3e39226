use crate::constants::REVEAL_THRESHOLD;

/// One-way entrance state of an observed element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unseen,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Plain,
    /// Statistic container holding a counter display
    Statistic,
}

/// What the DOM layer must do after an intersection report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealEffects {
    pub reveal: bool,
    pub start_counter: bool,
}

/// Per-element reveal bookkeeping
#[derive(Debug, Clone)]
pub struct RevealTarget {
    kind: RevealKind,
    state: RevealState,
    counted: bool,
}

impl RevealTarget {
    #[must_use]
    pub fn new(kind: RevealKind) -> Self {
        Self {
            kind,
            state: RevealState::Unseen,
            counted: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> RevealState {
        self.state
    }

    #[must_use]
    pub fn is_counted(&self) -> bool {
        self.counted
    }

    /// Feed one intersection report for this element.
    ///
    /// Only the first qualifying report has any effect; the counter is
    /// marked as started before the caller gets a chance to run it.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> RevealEffects {
        if !qualifies(is_intersecting, ratio) {
            return RevealEffects::default();
        }

        let mut effects = RevealEffects::default();

        if self.state == RevealState::Unseen {
            self.state = RevealState::Visible;
            effects.reveal = true;
        }

        if self.kind == RevealKind::Statistic && !self.counted {
            self.counted = true;
            effects.start_counter = true;
        }

        effects
    }
}

/// Whether an intersection report counts as the element being on screen
#[must_use]
pub fn qualifies(is_intersecting: bool, ratio: f64) -> bool {
    is_intersecting && ratio >= REVEAL_THRESHOLD
}
