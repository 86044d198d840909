use serde_json::json;

use super::*;
use crate::config::schema::Fit;

#[test]
fn number_in_range_passes_unchanged() {
    let checked = validate_number(Some(&json!(42.5)), 0.0, 100.0, 50.0, "xPct");
    assert_eq!(checked.value, 42.5);
    assert!(checked.is_valid());
}

#[test]
fn number_out_of_range_is_clamped_with_issue() {
    let checked = validate_number(Some(&json!(500)), 0.0, 100.0, 50.0, "xPct");
    assert_eq!(checked.value, 100.0);
    assert_eq!(checked.issues.len(), 1);
    assert_eq!(checked.issues[0].field, "xPct");
    assert_eq!(
        checked.issues[0].message,
        "clamped from 500 to 100 (range: 0-100)"
    );

    let low = validate_number(Some(&json!(-3)), 0.0, 100.0, 50.0, "yPct");
    assert_eq!(low.value, 0.0);
    assert!(!low.is_valid());
}

#[test]
fn missing_number_takes_fallback_silently() {
    let checked = validate_number(None, 0.0, 100.0, 50.0, "xPct");
    assert_eq!(checked.value, 50.0);
    assert!(checked.is_valid());
}

#[test]
fn mistyped_number_takes_fallback_with_issue() {
    for raw in [json!("12"), json!(true), json!(null), json!([1.0])] {
        let checked = validate_number(Some(&raw), 0.0, 100.0, 50.0, "z");
        assert_eq!(checked.value, 50.0);
        assert_eq!(checked.issues[0].message, "must be a valid number");
    }
}

#[test]
fn fallback_is_returned_as_supplied_even_outside_range() {
    // The caller owns its defaults; the range only constrains input.
    let checked = validate_number(Some(&json!("nope")), 0.0, 100.0, 150.0, "scalePct");
    assert_eq!(checked.value, 150.0);
    assert!(!checked.is_valid());
}

#[test]
fn enum_accepts_known_keywords() {
    let allowed = &["contain", "cover", "fill", "none"];
    let checked = validate_enum(Some(&json!("cover")), allowed, Fit::Contain, "fit");
    assert_eq!(checked.value, Fit::Cover);
    assert!(checked.is_valid());
}

#[test]
fn enum_rejects_unknown_keywords_and_non_strings() {
    let allowed = &["contain", "cover", "fill", "none"];
    let bad = validate_enum(Some(&json!("blur")), allowed, Fit::Contain, "fit");
    assert_eq!(bad.value, Fit::Contain);
    assert_eq!(bad.issues[0].message, "must be one of: contain, cover, fill, none");

    let mistyped = validate_enum(Some(&json!(3)), allowed, Fit::Fill, "fit");
    assert_eq!(mistyped.value, Fit::Fill);
    assert!(!mistyped.is_valid());

    let missing = validate_enum::<Fit>(None, allowed, Fit::None, "fit");
    assert_eq!(missing.value, Fit::None);
    assert!(missing.is_valid());
}

#[test]
fn boolean_is_strict() {
    assert!(validate_boolean(Some(&json!(true)), false, "enabled").value);
    assert!(validate_boolean(Some(&json!(true)), false, "enabled").is_valid());

    // Truthy strings and numbers are not booleans.
    let one = validate_boolean(Some(&json!(1)), false, "enabled");
    assert!(!one.value);
    assert_eq!(one.issues[0].message, "must be a boolean");
    let yes = validate_boolean(Some(&json!("true")), false, "enabled");
    assert!(!yes.value);
    assert!(!yes.is_valid());

    assert!(validate_boolean(None, true, "enabled").is_valid());
}

#[test]
fn point_reads_both_key_spellings() {
    let fallback = PctPoint::new(50.0, 50.0);
    let long = validate_point(Some(&json!({"xPct": 10, "yPct": 20})), fallback, "center");
    assert_eq!(long.value, PctPoint::new(10.0, 20.0));
    assert!(long.is_valid());

    let short = validate_point(Some(&json!({"x": -30, "y": 120})), fallback, "center");
    assert_eq!(short.value, PctPoint::new(-30.0, 120.0));
    assert!(short.is_valid());
}

#[test]
fn point_clamps_each_axis_to_the_extended_range() {
    let fallback = PctPoint::new(0.0, 0.0);
    let checked = validate_point(Some(&json!({"x": 999, "y": -999})), fallback, "base");
    assert_eq!(checked.value, PctPoint::new(POINT_RANGE.1, POINT_RANGE.0));
    assert_eq!(checked.issues.len(), 2);
    assert_eq!(checked.issues[0].field, "base.x");
    assert_eq!(checked.issues[1].field, "base.y");
}

#[test]
fn point_rejects_non_objects_wholesale() {
    let fallback = PctPoint::new(50.0, 50.0);
    for raw in [json!("0,0"), json!([0, 0]), json!(7), json!(null)] {
        let checked = validate_point(Some(&raw), fallback, "tip");
        assert_eq!(checked.value, fallback);
        assert_eq!(
            checked.issues[0].message,
            "must be an object with x and y properties"
        );
    }
    assert!(validate_point(None, fallback, "tip").is_valid());
}

#[test]
fn point_axes_fall_back_independently() {
    let fallback = PctPoint::new(10.0, 20.0);
    let checked = validate_point(Some(&json!({"xPct": 33})), fallback, "center");
    assert_eq!(checked.value, PctPoint::new(33.0, 20.0));
    assert!(checked.is_valid());
}
