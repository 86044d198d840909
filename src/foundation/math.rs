pub use kurbo::{Point, Vec2};

/// Full turn in radians.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;
/// Degrees to radians factor.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
/// Radians to degrees factor.
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Clamp `value` to `[min, max]` (inclusive).
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Normalize an angle in degrees to `[0, 360)`.
pub fn normalize_angle(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// Convert degrees to radians.
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

/// Convert radians to degrees.
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

/// Linear interpolation between `a` and `b`; `t` is clamped to `[0, 1]`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * clamp(t, 0.0, 1.0)
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Angle from `from` to `to` in degrees, normalized to `[0, 360)`.
pub fn angle_between(from: Point, to: Point) -> f64 {
    let d = to - from;
    normalize_angle(rad_to_deg(d.y.atan2(d.x)))
}

/// Whether two points coincide within `tolerance` on both axes.
pub fn points_equal(a: Point, b: Point, tolerance: f64) -> bool {
    (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance
}

/// Scale a vector to unit length; the zero vector stays zero.
pub fn normalize_vec(v: Vec2) -> Vec2 {
    let len = v.hypot();
    if len == 0.0 {
        return Vec2::ZERO;
    }
    v / len
}
