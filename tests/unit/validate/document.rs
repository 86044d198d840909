use serde_json::{Value, json};

use super::*;
use crate::config::schema::{
    CameraConfig, MaterialConfig, PctPoint, PivotSource, Rounding, SpinDirection,
};

fn validator() -> Validator {
    Validator::default()
}

fn bg(id: &str) -> BackgroundLayer {
    BackgroundLayer {
        id: id.to_owned(),
        src: "/Asset/BG/BG1.png".to_owned(),
        x_pct: 50.0,
        y_pct: 50.0,
        scale_pct: 100.0,
        opacity_pct: 100.0,
        z: 0.0,
        fit: Fit::Contain,
    }
}

#[test]
fn bg_layer_clamps_and_defaults_with_two_advisories() {
    let raw = json!({"xPct": 500, "fit": "blur"});
    let checked = validator().validate_bg_layer(&raw, 0);

    assert_eq!(checked.value.x_pct, 100.0);
    assert_eq!(checked.value.fit, Fit::Contain);
    assert_eq!(checked.value.y_pct, 50.0);
    assert_eq!(checked.value.id, "BG1");
    assert_eq!(checked.value.src, "/Asset/BG/BG1.png");

    assert_eq!(checked.issues.len(), 2);
    assert_eq!(checked.issues[0].field, "backgrounds[0].xPct");
    assert_eq!(
        checked.issues[0].message,
        "clamped from 500 to 100 (range: 0-100)"
    );
    assert_eq!(checked.issues[1].field, "backgrounds[0].fit");
}

#[test]
fn bg_layer_entry_that_is_not_an_object_is_replaced_whole() {
    let checked = validator().validate_bg_layer(&json!("BG1.png"), 2);
    assert_eq!(checked.value.id, "BG3");
    assert_eq!(checked.value.src, "/Asset/BG/BG3.png");
    assert_eq!(checked.value.z, 2.0);
    assert_eq!(checked.issues.len(), 1);
    assert_eq!(checked.issues[0].field, "backgrounds[2]");
}

#[test]
fn duplicate_ids_get_letter_suffixes_in_order() {
    let scene = validator().validate_config(&json!({
        "backgrounds": [{"id": "BG1"}, {"id": "BG1"}, {"id": "BG1"}]
    }));
    let ids: Vec<&str> = scene
        .config
        .backgrounds
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(ids, ["BG1", "BG1.a", "BG1.b"]);
    assert_eq!(scene.report.len(), 2);
    assert!(scene.report.to_string().contains("duplicate id \"BG1\""));
}

#[test]
fn duplicate_suffixes_go_numeric_past_a_full_alphabet() {
    let mut layers: Vec<BackgroundLayer> = (0..29).map(|_| bg("BG")).collect();
    let mut report = ValidationReport::new();
    ensure_unique_ids(&mut layers, &mut report, "backgrounds");

    assert_eq!(layers[0].id, "BG");
    assert_eq!(layers[1].id, "BG.a");
    assert_eq!(layers[26].id, "BG.z");
    assert_eq!(layers[27].id, "BG.27");
    assert_eq!(layers[28].id, "BG.28");
    assert_eq!(report.len(), 28);
}

#[test]
fn renamed_ids_do_not_collide_with_later_entries() {
    // The second "BG1" was renamed to "BG1.a", so the later literal
    // "BG1.a" is itself a duplicate and gets suffixed off its own base.
    let scene = validator().validate_config(&json!({
        "backgrounds": [{"id": "BG1"}, {"id": "BG1"}, {"id": "BG1.a"}]
    }));
    let ids: Vec<&str> = scene
        .config
        .backgrounds
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(ids[0], "BG1");
    assert_eq!(ids[1], "BG1.a");
    assert_eq!(ids[2], "BG1.a.a");
}

#[test]
fn non_object_documents_degrade_to_the_minimal_config() {
    for raw in [json!(null), json!([1, 2]), json!("config"), json!(12)] {
        let scene = validator().validate_config(&raw);
        assert_eq!(scene.config.schema_version, "1.0.0");
        assert!(scene.config.backgrounds.is_empty());
        assert!(scene.config.layers.is_empty());
        assert_eq!(scene.report.len(), 1);
        assert_eq!(scene.report.iter().next().map(|i| i.field.as_str()), Some("$"));
    }
}

#[test]
fn empty_object_validates_without_repairs() {
    let scene = validator().validate_config(&json!({}));
    assert!(scene.report.is_empty());
    assert_eq!(scene.config.schema_version, "1.0.0");
    assert_eq!(scene.config.meta.app, "LauncherScreen Logic System");
    assert!(!scene.config.meta.build.is_empty());
    assert_eq!(scene.config.meta.author, None);
    assert_eq!(scene.config.defaults, DefaultsBundle::canonical());
}

#[test]
fn validation_is_idempotent() {
    let messy = json!({
        "schemaVersion": "1.2.0",
        "meta": {"app": "Demo", "author": 7},
        "backgrounds": [
            {"id": "BG1", "xPct": 500, "fit": "blur"},
            {"id": "BG1", "opacityPct": -40}
        ],
        "layers": [
            {"id": "hand", "zHint": 900, "logic2": {"minScalePct": 300, "maxScalePct": 50}},
            {"id": "hand", "logic3": true, "clock": {"mode": "modeB"}}
        ]
    });
    let first = validator().validate_config(&messy);
    assert!(!first.report.is_empty());

    let reserialized: Value = serde_json::to_value(&first.config).unwrap();
    let second = validator().validate_config(&reserialized);
    assert_eq!(second.config, first.config);
    assert!(second.report.is_empty(), "unexpected: {}", second.report);
}

#[test]
fn meta_author_must_be_a_string() {
    let scene = validator().validate_config(&json!({"meta": {"author": ["a", "b"]}}));
    assert_eq!(scene.config.meta.author, None);
    assert_eq!(scene.report.len(), 1);
    assert_eq!(scene.report.iter().next().map(|i| i.field.as_str()), Some("meta.author"));

    let kept = validator().validate_config(&json!({"meta": {"author": "ren"}}));
    assert_eq!(kept.config.meta.author.as_deref(), Some("ren"));
    assert!(kept.report.is_empty());
}

#[test]
fn logic2_swaps_inverted_scale_bounds() {
    let checked = validator().validate_logic2(&json!({
        "minScalePct": 300,
        "maxScalePct": 50
    }));
    assert_eq!(checked.value.min_scale_pct, 50.0);
    assert_eq!(checked.value.max_scale_pct, 300.0);
    assert_eq!(checked.issues.len(), 1);
    assert_eq!(checked.issues[0].field, "logic2.minScalePct");
    assert!(checked.issues[0].message.contains("swapped"));
}

#[test]
fn logic2_fields_validate_against_their_ranges() {
    let checked = validator().validate_logic2(&json!({
        "enabled": false,
        "scalePct": 9000,
        "center": {"xPct": 10, "yPct": 90},
        "marginPct": -2,
        "rounding": "floor"
    }));
    assert!(!checked.value.enabled);
    assert_eq!(checked.value.scale_pct, 400.0);
    assert_eq!(checked.value.center, PctPoint::new(10.0, 90.0));
    assert_eq!(checked.value.margin_pct, 0.0);
    assert_eq!(checked.value.rounding, Rounding::Floor);
    assert_eq!(checked.issues.len(), 2); // scalePct clamp + marginPct clamp
}

#[test]
fn feature_config_that_is_not_an_object_falls_back_whole() {
    let checked = validator().validate_logic2(&json!(true));
    assert_eq!(checked.value, Logic2Config::default());
    assert_eq!(checked.issues.len(), 1);
    assert_eq!(checked.issues[0].field, "logic2");
}

#[test]
fn logic2a_validates_anchor_points() {
    let checked = validator().validate_logic2a(&json!({
        "enabled": true,
        "base": {"x": 0, "y": 60},
        "tip": "up",
        "pivot": "center"
    }));
    assert!(checked.value.enabled);
    assert_eq!(checked.value.base, PctPoint::new(0.0, 60.0));
    assert_eq!(checked.value.tip, PctPoint::new(0.0, -50.0));
    assert_eq!(checked.issues.len(), 1);
    assert_eq!(checked.issues[0].field, "logic2A.tip");
}

#[test]
fn logic3_keywords_and_ranges() {
    let checked = validator().validate_logic3(&json!({
        "fullSpinPerMinute": 500,
        "direction": "ccw",
        "maxFps": 10,
        "pivotSource": "logic2-center"
    }));
    assert_eq!(checked.value.full_spin_per_minute, 120.0);
    assert_eq!(checked.value.direction, SpinDirection::Ccw);
    assert_eq!(checked.value.max_fps, 15.0);
    assert_eq!(checked.value.pivot_source, PivotSource::Logic2Center);
    assert_eq!(checked.issues.len(), 2);
}

#[test]
fn orbit_point_accepts_dotmark_object_and_null() {
    let v = validator();

    let anchor = v.validate_logic3a(&json!({"orbitPoint": "dotmark"}));
    assert_eq!(
        anchor.value.orbit_point,
        Some(OrbitPoint::Anchor(OrbitAnchor::Dotmark))
    );
    assert!(anchor.issues.is_empty());

    let at = v.validate_logic3a(&json!({"orbitPoint": {"xPct": 25, "yPct": 75}}));
    assert_eq!(
        at.value.orbit_point,
        Some(OrbitPoint::At(PctPoint::new(25.0, 75.0)))
    );
    assert!(at.issues.is_empty());

    let off = v.validate_logic3a(&json!({"orbitPoint": null}));
    assert_eq!(off.value.orbit_point, None);
    assert!(off.issues.is_empty());

    let bad = v.validate_logic3a(&json!({"orbitPoint": 42}));
    assert_eq!(
        bad.value.orbit_point,
        Some(OrbitPoint::Anchor(OrbitAnchor::Dotmark))
    );
    assert_eq!(bad.issues.len(), 1);
    assert_eq!(bad.issues[0].field, "logic3A.orbitPoint");
}

#[test]
fn start_phase_is_auto_or_degrees() {
    let v = validator();

    let auto = v.validate_logic3a(&json!({"startPhase": "auto"}));
    assert_eq!(auto.value.start_phase, StartPhase::Keyword(StartPhaseKeyword::Auto));

    let deg = v.validate_logic3a(&json!({"startPhase": 90}));
    assert_eq!(deg.value.start_phase, StartPhase::Degrees(90.0));
    assert!(deg.issues.is_empty());

    let wrapped = v.validate_logic3a(&json!({"startPhase": 400}));
    assert_eq!(wrapped.value.start_phase, StartPhase::Degrees(360.0));
    assert_eq!(wrapped.issues.len(), 1);

    let bad = v.validate_logic3a(&json!({"startPhase": "noon"}));
    assert_eq!(bad.value.start_phase, StartPhase::Keyword(StartPhaseKeyword::Auto));
    assert_eq!(bad.issues.len(), 1);
}

#[test]
fn clock_mode_is_tri_state() {
    let v = validator();

    let a = v.validate_clock(&json!({"mode": "modeA"}));
    assert_eq!(a.value.mode, Some(ClockMode::ModeA));
    let b = v.validate_clock(&json!({"mode": "modeB"}));
    assert_eq!(b.value.mode, Some(ClockMode::ModeB));
    let unset = v.validate_clock(&json!({"mode": null}));
    assert_eq!(unset.value.mode, None);
    assert!(unset.issues.is_empty());

    let bad = v.validate_clock(&json!({"mode": "modeC"}));
    assert_eq!(bad.value.mode, None);
    assert_eq!(bad.issues.len(), 1);
    assert_eq!(bad.issues[0].field, "clock.mode");
}

#[test]
fn effect_filters_clamp_independently() {
    let checked = validator().validate_effect(&json!({
        "blurPx": 100,
        "brightnessPct": 250,
        "hueRotateDeg": -10,
        "blend": "screen"
    }));
    assert_eq!(checked.value.blur_px, 20.0);
    assert_eq!(checked.value.brightness_pct, 200.0);
    assert_eq!(checked.value.hue_rotate_deg, 0.0);
    assert_eq!(checked.value.contrast_pct, 100.0);
    assert_eq!(checked.issues.len(), 3);
}

#[test]
fn effect3d_validates_nested_material_and_camera() {
    let checked = validator().validate_effect3d(&json!({
        "mode": "lit",
        "material": {"type": "standard", "metalness": 3, "roughness": 0.4},
        "camera": {"fovDeg": 10}
    }));
    assert_eq!(checked.value.mode, crate::config::schema::Effect3dMode::Lit);
    assert_eq!(checked.value.material.kind, crate::config::schema::MaterialType::Standard);
    assert_eq!(checked.value.material.metalness, 1.0);
    assert_eq!(checked.value.material.roughness, 0.4);
    assert_eq!(checked.value.camera.fov_deg, 30.0);
    assert_eq!(checked.value.camera.far, 1000.0);
    assert_eq!(checked.issues.len(), 2);
}

#[test]
fn effect3d_mistyped_nested_blocks_fall_back_whole() {
    let checked = validator().validate_effect3d(&json!({
        "material": "shiny",
        "camera": [75]
    }));
    assert_eq!(checked.value.material, MaterialConfig::default());
    assert_eq!(checked.value.camera, CameraConfig::default());
    assert_eq!(checked.issues.len(), 2);
}

#[test]
fn features_materialize_only_when_present_and_non_null() {
    let scene = validator().validate_config(&json!({
        "layers": [
            {"id": "plain"},
            {"id": "nulled", "logic3": null},
            {"id": "off", "logic3": {"enabled": false}},
            {"id": "on", "logic3": {"enabled": true}}
        ]
    }));
    let layers = &scene.config.layers;
    assert!(layers[0].logic3.is_none());
    assert!(layers[1].logic3.is_none());
    let off = layers[2].logic3.as_ref().unwrap();
    assert!(!off.enabled);
    let on = layers[3].logic3.as_ref().unwrap();
    assert!(on.enabled);
    assert!(scene.report.is_empty());
}

#[test]
fn layer_entry_that_is_not_an_object_is_replaced_whole() {
    let scene = validator().validate_config(&json!({"layers": ["hand.png"]}));
    let layer = &scene.config.layers[0];
    assert_eq!(layer.id, "layer1");
    assert_eq!(layer.path, "/Asset/PNG/layer1.png");
    assert!(layer.enabled);
    assert_eq!(layer.z_hint, 10.0);
    assert!(layer.logic2.is_none());
    assert_eq!(scene.report.len(), 1);
}

#[test]
fn feature_issues_carry_the_layer_path_prefix() {
    let scene = validator().validate_config(&json!({
        "layers": [{"id": "hand", "logic2": {"scalePct": "big"}}]
    }));
    assert_eq!(scene.report.len(), 1);
    assert_eq!(
        scene.report.iter().next().map(|i| i.field.as_str()),
        Some("layers[0].logic2.scalePct")
    );
}

#[test]
fn injected_defaults_bundle_drives_fallbacks() {
    let mut bundle = DefaultsBundle::canonical();
    bundle.logic2.scale_pct = 75.0;
    bundle.layer.z_hint = 3.0;
    let v = Validator::new(bundle);

    let feature = v.validate_logic2(&json!({"scalePct": "big"}));
    assert_eq!(feature.value.scale_pct, 75.0);

    let scene = v.validate_config(&json!({"layers": [{"id": "a"}]}));
    assert_eq!(scene.config.layers[0].z_hint, 3.0);
    assert_eq!(scene.config.defaults.logic2.scale_pct, 75.0);
}
