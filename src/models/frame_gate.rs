use std::cell::Cell;

/// Single-slot gate that lets at most one animation-frame callback be pending.
///
/// Requests made while a frame is pending are dropped, not queued.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot. Returns `false` if a frame is already pending.
    pub fn try_acquire(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Free the slot once the frame callback has run
    pub fn release(&self) {
        self.pending.set(false);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}
