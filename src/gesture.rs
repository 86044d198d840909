//! Reveal-toggle gesture state machine.
//!
//! Three pointer-down events inside a short time window and a small radius
//! of the first tracked tap flip a boolean "revealed" flag (used by the
//! shell to show or hide the launcher button). Purely deterministic: the
//! caller supplies timestamps, so there is no hidden clock.

use kurbo::Point;

use crate::foundation::math::distance;

/// Default tap collection window in milliseconds.
pub const DEFAULT_WINDOW_MS: f64 = 450.0;
/// Default tap radius in pixels.
pub const DEFAULT_RADIUS_PX: f64 = 48.0;
const TAPS_TO_TOGGLE: usize = 3;

/// Tracks recent taps and a toggleable revealed flag.
#[derive(Clone, Debug)]
pub struct TapTracker {
    window_ms: f64,
    radius_px: f64,
    taps: Vec<(f64, Point)>,
    revealed: bool,
}

impl Default for TapTracker {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MS, DEFAULT_RADIUS_PX)
    }
}

impl TapTracker {
    /// Build a tracker with explicit window and radius.
    pub fn new(window_ms: f64, radius_px: f64) -> Self {
        Self {
            window_ms,
            radius_px,
            taps: Vec::new(),
            revealed: false,
        }
    }

    /// Current revealed state.
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one pointer-down event; returns the (possibly toggled)
    /// revealed state.
    ///
    /// `now_ms` must be monotonic per tracker. Taps older than the window
    /// are evicted first; when three surviving taps all lie within the
    /// radius of the first surviving tap, the flag toggles and the tap
    /// buffer clears.
    pub fn pointer_down(&mut self, now_ms: f64, at: Point) -> bool {
        self.taps.retain(|(t, _)| now_ms - *t <= self.window_ms);
        self.taps.push((now_ms, at));

        let within_radius = match self.taps.first() {
            Some((_, first)) => self
                .taps
                .iter()
                .all(|(_, p)| distance(*p, *first) <= self.radius_px),
            None => true,
        };

        if within_radius && self.taps.len() >= TAPS_TO_TOGGLE {
            self.revealed = !self.revealed;
            self.taps.clear();
        }
        self.revealed
    }
}

#[cfg(test)]
#[path = "../tests/unit/gesture.rs"]
mod tests;
