//! Field-level validators.
//!
//! Every primitive is total: it never fails, never panics, and always
//! returns a usable value. Out-of-range or mistyped input is repaired to a
//! clamped value or the supplied fallback, and the repair is recorded as an
//! advisory [`Issue`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::schema::PctPoint;
use crate::foundation::math::clamp;
use crate::validate::report::Issue;

/// Range accepted for extended percent points (anchor base/tip and centers).
pub const POINT_RANGE: (f64, f64) = (-200.0, 200.0);

#[derive(Clone, Debug, PartialEq)]
/// A repaired field value plus the advisory issues the repair produced.
pub struct Checked<T> {
    /// The in-range value to use.
    pub value: T,
    /// Advisory notes; empty when the input passed unchanged.
    pub issues: Vec<Issue>,
}

impl<T> Checked<T> {
    fn ok(value: T) -> Self {
        Self {
            value,
            issues: Vec::new(),
        }
    }

    fn repaired(value: T, issue: Issue) -> Self {
        Self {
            value,
            issues: vec![issue],
        }
    }

    /// Whether the input was accepted without repair.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate a numeric field against `[min, max]`.
///
/// A missing field silently takes the fallback (returned as supplied, not
/// clamped); a present but non-numeric value takes it with an issue. A
/// finite number is clamped, with an issue only when clamping changed it.
pub fn validate_number(
    raw: Option<&Value>,
    min: f64,
    max: f64,
    fallback: f64,
    field: &str,
) -> Checked<f64> {
    let Some(raw) = raw else {
        return Checked::ok(fallback);
    };
    let Some(value) = raw.as_f64().filter(|v| v.is_finite()) else {
        return Checked::repaired(fallback, Issue::new(field, "must be a valid number"));
    };

    let clamped = clamp(value, min, max);
    if clamped != value {
        return Checked::repaired(
            clamped,
            Issue::new(
                field,
                format!("clamped from {value} to {clamped} (range: {min}-{max})"),
            ),
        );
    }
    Checked::ok(clamped)
}

/// Validate a keyword field against the members of a string enum.
///
/// Only JSON strings that deserialize to `T` are accepted; a present value
/// of any other shape yields the fallback plus an issue listing `allowed`.
/// A missing field takes the fallback silently.
pub fn validate_enum<T: DeserializeOwned>(
    raw: Option<&Value>,
    allowed: &[&str],
    fallback: T,
    field: &str,
) -> Checked<T> {
    let Some(raw) = raw else {
        return Checked::ok(fallback);
    };
    let parsed = raw
        .as_str()
        .and_then(|s| serde_json::from_value::<T>(Value::String(s.to_owned())).ok());
    match parsed {
        Some(value) => Checked::ok(value),
        None => Checked::repaired(
            fallback,
            Issue::new(field, format!("must be one of: {}", allowed.join(", "))),
        ),
    }
}

/// Validate a strictly boolean field.
pub fn validate_boolean(raw: Option<&Value>, fallback: bool, field: &str) -> Checked<bool> {
    match raw {
        None => Checked::ok(fallback),
        Some(Value::Bool(value)) => Checked::ok(*value),
        Some(_) => Checked::repaired(fallback, Issue::new(field, "must be a boolean")),
    }
}

/// Validate a 2D percent point against [`POINT_RANGE`] per axis.
///
/// A present non-object value is rejected wholesale in favor of the full
/// fallback point; only a well-formed object gets per-axis clamping. Both
/// the documented `xPct`/`yPct` spelling and plain `x`/`y` keys are read.
pub fn validate_point(raw: Option<&Value>, fallback: PctPoint, field: &str) -> Checked<PctPoint> {
    let Some(raw) = raw else {
        return Checked::ok(fallback);
    };
    let Some(obj) = raw.as_object() else {
        return Checked::repaired(
            fallback,
            Issue::new(field, "must be an object with x and y properties"),
        );
    };

    let axis = |long: &str, short: &str| obj.get(long).or_else(|| obj.get(short));
    let (min, max) = POINT_RANGE;
    let x = validate_number(
        axis("xPct", "x"),
        min,
        max,
        fallback.x_pct,
        &format!("{field}.x"),
    );
    let y = validate_number(
        axis("yPct", "y"),
        min,
        max,
        fallback.y_pct,
        &format!("{field}.y"),
    );

    let mut issues = x.issues;
    issues.extend(y.issues);
    Checked {
        value: PctPoint::new(x.value, y.value),
        issues,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/validate/primitives.rs"]
mod tests;
