//! Normalized coordinate frame derived from a container size.
//!
//! The frame is aspect- and size-independent: one normalized unit equals
//! half the container's shorter dimension, positive Y points up. An
//! [`OriginState`] is a pure function of the observed size with no identity
//! beyond the current frame; a resize simply replaces it.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
/// A point in normalized origin space (roughly `[-1, 1]` per axis).
pub struct Norm {
    /// Horizontal component; positive is right.
    pub x: f64,
    /// Vertical component; positive is up.
    pub y: f64,
}

impl Norm {
    /// Build a normalized point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
/// A point in container pixel space; positive `top` is down.
pub struct PxPoint {
    /// Pixels from the container's left edge.
    pub left: f64,
    /// Pixels from the container's top edge.
    pub top: f64,
}

impl PxPoint {
    /// Build a pixel point.
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Coordinate frame for the current container size.
pub struct OriginState {
    /// Observed container width in pixels.
    pub width: f64,
    /// Observed container height in pixels.
    pub height: f64,
    /// Frame center X in pixels.
    pub center_x: f64,
    /// Frame center Y in pixels.
    pub center_y: f64,
    /// Pixels per normalized unit; always `>= 1`.
    pub scale: f64,
}

impl OriginState {
    /// Derive the frame for an observed container size.
    ///
    /// A dimension that is not finite or not positive yields the degenerate
    /// pre-layout state (`center 0/0`, `scale 1`) so that mapping never
    /// divides by zero before the first real layout pass.
    pub fn from_size(width: f64, height: f64) -> Self {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Self {
                width,
                height,
                center_x: 0.0,
                center_y: 0.0,
                scale: 1.0,
            };
        }
        Self {
            width,
            height,
            center_x: width / 2.0,
            center_y: height / 2.0,
            scale: (0.5 * width.min(height)).max(1.0),
        }
    }

    /// Whether this is the pre-layout degenerate frame.
    ///
    /// Matches the [`OriginState::from_size`] guard exactly: non-finite
    /// dimensions are degenerate too.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0)
    }
}

/// Map a normalized point to container pixels.
pub fn map_to_px(origin: OriginState, n: Norm) -> PxPoint {
    PxPoint {
        left: origin.center_x + n.x * origin.scale,
        top: origin.center_y - n.y * origin.scale,
    }
}

/// Map a container pixel point back to normalized space.
///
/// Exact inverse of [`map_to_px`] for any frame with `scale > 0`;
/// [`OriginState::from_size`] never produces a smaller scale.
pub fn px_to_norm(origin: OriginState, p: PxPoint) -> Norm {
    Norm {
        x: (p.left - origin.center_x) / origin.scale,
        y: (origin.center_y - p.top) / origin.scale,
    }
}

#[cfg(test)]
#[path = "../tests/unit/origin.rs"]
mod tests;
