use crate::constants::{COUNTER_DURATION_MS, FRAME_INTERVAL_MS};
use std::iter::FusedIterator;

/// How a counter renders its running value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFormat {
    /// Whole-number target: integer with thousands separators ("30,000")
    Grouped,
    /// Fractional target: one decimal digit, with a trailing `%` on the final frame
    /// when `percent` is set
    OneDecimal { percent: bool },
}

impl CounterFormat {
    /// Pick the format for a target value.
    ///
    /// `99.9` is the only target rendered as a percentage.
    #[must_use]
    pub fn for_target(target: f64) -> Self {
        if target.fract() == 0.0 {
            Self::Grouped
        } else {
            Self::OneDecimal { percent: target == 99.9 }
        }
    }

    fn render_running(self, current: f64) -> String {
        match self {
            Self::Grouped => format_grouped(current.floor()),
            Self::OneDecimal { .. } => format!("{current:.1}"),
        }
    }

    fn render_final(self, target: f64) -> String {
        match self {
            Self::Grouped => format_grouped(target),
            Self::OneDecimal { percent: true } => format!("{target:.1}%"),
            Self::OneDecimal { percent: false } => format!("{target:.1}"),
        }
    }
}

/// Format a whole number with `,` thousands separators
#[must_use]
pub fn format_grouped(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0.0 && digits != "0" {
        grouped.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Parse a `data-target` attribute. Only finite numbers are accepted.
#[must_use]
pub fn parse_target(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Number of frames after which a counter always snaps to its target
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn frame_budget() -> u32 {
    (COUNTER_DURATION_MS / FRAME_INTERVAL_MS).ceil() as u32
}

/// Frame-by-frame counter from zero up to a target.
///
/// Each call to `next` is one animation frame and yields the text to display.
/// The sequence ends with the exactly formatted target and cannot be restarted.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
    steps: u32,
    max_steps: u32,
    format: CounterFormat,
    finished: bool,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self {
            target,
            increment: target / (COUNTER_DURATION_MS / FRAME_INTERVAL_MS),
            current: 0.0,
            steps: 0,
            max_steps: frame_budget(),
            format: CounterFormat::for_target(target),
            finished: false,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Iterator for CounterAnimation {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        self.current += self.increment;
        self.steps += 1;

        // An increment that underflows to zero would never reach the target
        let running = self.increment > 0.0 && self.steps < self.max_steps;
        if running && self.current < self.target {
            Some(self.format.render_running(self.current))
        } else {
            self.finished = true;
            Some(self.format.render_final(self.target))
        }
    }
}

impl FusedIterator for CounterAnimation {}
