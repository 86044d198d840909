//! Whole-document validation.
//!
//! [`Validator::validate_config`] turns an arbitrary, possibly malformed
//! JSON value into a complete [`SceneConfig`]. It is total: every defect is
//! repaired at the narrowest tier that can absorb it (field, then entity,
//! then document) and recorded as an advisory [`crate::Issue`], never
//! surfaced as an error.

use serde_json::Value;

use crate::config::schema::{
    BackgroundLayer, ClockConfig, ClockMode, DefaultsBundle, Effect3dConfig, EffectConfig, Fit,
    Logic2AConfig, Logic2Config, Logic3AConfig, Logic3Config, Meta, OrbitAnchor, OrbitPoint,
    SceneConfig, SceneLayer, StartPhase, StartPhaseKeyword,
};
use crate::validate::primitives::{
    Checked, validate_boolean, validate_enum, validate_number, validate_point,
};
use crate::validate::report::{Issue, ValidationReport};

const FIT_KEYWORDS: &[&str] = &["contain", "cover", "fill", "none"];
const ROUNDING_KEYWORDS: &[&str] = &["round", "floor", "ceil"];
const ROTATION_MODE_KEYWORDS: &[&str] = &["anchored", "free"];
const PIVOT_KEYWORDS: &[&str] = &["base", "center"];
const DIRECTION_KEYWORDS: &[&str] = &["cw", "ccw"];
const SPIN_EASING_KEYWORDS: &[&str] = &["linear", "thick", "smooth"];
const PIVOT_SOURCE_KEYWORDS: &[&str] = &["logic2A-base", "logic2-center"];
const CLOCK_ROLE_KEYWORDS: &[&str] = &["second", "minute", "hour"];
const SECOND_MODE_KEYWORDS: &[&str] = &["tick", "smooth"];
const CLOCK_SYNC_KEYWORDS: &[&str] = &["device", "device+server"];
const VISIBILITY_KEYWORDS: &[&str] = &["visible", "hidden"];
const BLEND_KEYWORDS: &[&str] = &["normal", "multiply", "screen", "overlay"];
const EFFECT3D_MODE_KEYWORDS: &[&str] = &["basic", "lit", "shader", "particle"];
const MATERIAL_KEYWORDS: &[&str] = &["basic", "lambert", "phong", "standard"];
const QUALITY_KEYWORDS: &[&str] = &["auto", "low", "med", "high"];

/// Result of one validation pass: the repaired config plus what changed.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedScene {
    /// Structurally complete, range-correct configuration.
    pub config: SceneConfig,
    /// Advisory repair notes, in document order.
    pub report: ValidationReport,
}

/// Walks raw scene documents and repairs them against a defaults bundle.
///
/// The bundle is injected at construction and read-only afterwards;
/// [`Validator::default`] uses [`DefaultsBundle::canonical`].
#[derive(Clone, Debug, Default)]
pub struct Validator {
    defaults: DefaultsBundle,
}

impl Validator {
    /// Build a validator around an explicit defaults bundle.
    pub fn new(defaults: DefaultsBundle) -> Self {
        Self { defaults }
    }

    /// The injected defaults bundle.
    pub fn defaults(&self) -> &DefaultsBundle {
        &self.defaults
    }

    /// Validate one raw background layer entry.
    ///
    /// `id`/`src` fall back to index-derived synthetic values; a raw entry
    /// that is not an object at all is replaced by the fully-defaulted
    /// layer for that index (entity tier).
    pub fn validate_bg_layer(&self, raw: &Value, index: usize) -> Checked<BackgroundLayer> {
        let prefix = format!("backgrounds[{index}]");
        let Some(obj) = raw.as_object() else {
            return Checked {
                value: default_bg_layer(index),
                issues: vec![Issue::new(prefix, "entry must be an object; using defaults")],
            };
        };

        let mut report = ValidationReport::new();
        let id = string_or(obj.get("id"), || format!("BG{}", index + 1));
        let src = string_or(obj.get("src"), || format!("/Asset/BG/BG{}.png", index + 1));

        let layer = BackgroundLayer {
            id,
            src,
            x_pct: report.absorb(validate_number(
                obj.get("xPct"),
                0.0,
                100.0,
                50.0,
                &format!("{prefix}.xPct"),
            )),
            y_pct: report.absorb(validate_number(
                obj.get("yPct"),
                0.0,
                100.0,
                50.0,
                &format!("{prefix}.yPct"),
            )),
            scale_pct: report.absorb(validate_number(
                obj.get("scalePct"),
                1.0,
                400.0,
                100.0,
                &format!("{prefix}.scalePct"),
            )),
            opacity_pct: report.absorb(validate_number(
                obj.get("opacityPct"),
                0.0,
                100.0,
                100.0,
                &format!("{prefix}.opacityPct"),
            )),
            z: report.absorb(validate_number(
                obj.get("z"),
                0.0,
                10.0,
                index as f64,
                &format!("{prefix}.z"),
            )),
            fit: report.absorb(validate_enum(
                obj.get("fit"),
                FIT_KEYWORDS,
                Fit::Contain,
                &format!("{prefix}.fit"),
            )),
        };

        Checked {
            value: layer,
            issues: report.into_iter().collect(),
        }
    }

    /// Validate a raw `logic2` placement sub-config.
    pub fn validate_logic2(&self, raw: &Value) -> Checked<Logic2Config> {
        self.logic2_at(raw, "logic2")
    }

    fn logic2_at(&self, raw: &Value, prefix: &str) -> Checked<Logic2Config> {
        let d = &self.defaults.logic2;
        let Some(obj) = raw.as_object() else {
            return feature_fallback(d.clone(), prefix);
        };

        let mut report = ValidationReport::new();
        let mut min_scale_pct = report.absorb(validate_number(
            obj.get("minScalePct"),
            1.0,
            400.0,
            d.min_scale_pct,
            &format!("{prefix}.minScalePct"),
        ));
        let mut max_scale_pct = report.absorb(validate_number(
            obj.get("maxScalePct"),
            1.0,
            400.0,
            d.max_scale_pct,
            &format!("{prefix}.maxScalePct"),
        ));
        // Each bound clamps against the absolute range, so the pair can end
        // up unordered; repair by swapping and note it.
        if min_scale_pct > max_scale_pct {
            report.note(
                format!("{prefix}.minScalePct"),
                format!("{min_scale_pct} exceeds maxScalePct {max_scale_pct}; swapped"),
            );
            std::mem::swap(&mut min_scale_pct, &mut max_scale_pct);
        }

        let config = Logic2Config {
            enabled: report.absorb(validate_boolean(
                obj.get("enabled"),
                d.enabled,
                &format!("{prefix}.enabled"),
            )),
            scale_pct: report.absorb(validate_number(
                obj.get("scalePct"),
                1.0,
                400.0,
                d.scale_pct,
                &format!("{prefix}.scalePct"),
            )),
            min_scale_pct,
            max_scale_pct,
            center: report.absorb(validate_point(
                obj.get("center"),
                d.center,
                &format!("{prefix}.center"),
            )),
            margin_pct: report.absorb(validate_number(
                obj.get("marginPct"),
                0.0,
                50.0,
                d.margin_pct,
                &format!("{prefix}.marginPct"),
            )),
            rounding: report.absorb(validate_enum(
                obj.get("rounding"),
                ROUNDING_KEYWORDS,
                d.rounding,
                &format!("{prefix}.rounding"),
            )),
        };
        Checked {
            value: config,
            issues: report.into_iter().collect(),
        }
    }

    /// Validate a raw `logic2A` anchored-rotation sub-config.
    pub fn validate_logic2a(&self, raw: &Value) -> Checked<Logic2AConfig> {
        self.logic2a_at(raw, "logic2A")
    }

    fn logic2a_at(&self, raw: &Value, prefix: &str) -> Checked<Logic2AConfig> {
        let d = &self.defaults.logic2_a;
        let Some(obj) = raw.as_object() else {
            return feature_fallback(d.clone(), prefix);
        };

        let mut report = ValidationReport::new();
        let config = Logic2AConfig {
            enabled: report.absorb(validate_boolean(
                obj.get("enabled"),
                d.enabled,
                &format!("{prefix}.enabled"),
            )),
            rotation_mode: report.absorb(validate_enum(
                obj.get("rotationMode"),
                ROTATION_MODE_KEYWORDS,
                d.rotation_mode,
                &format!("{prefix}.rotationMode"),
            )),
            base: report.absorb(validate_point(
                obj.get("base"),
                d.base,
                &format!("{prefix}.base"),
            )),
            tip: report.absorb(validate_point(
                obj.get("tip"),
                d.tip,
                &format!("{prefix}.tip"),
            )),
            pivot: report.absorb(validate_enum(
                obj.get("pivot"),
                PIVOT_KEYWORDS,
                d.pivot,
                &format!("{prefix}.pivot"),
            )),
        };
        Checked {
            value: config,
            issues: report.into_iter().collect(),
        }
    }

    /// Validate a raw `logic3` spin sub-config.
    pub fn validate_logic3(&self, raw: &Value) -> Checked<Logic3Config> {
        self.logic3_at(raw, "logic3")
    }

    fn logic3_at(&self, raw: &Value, prefix: &str) -> Checked<Logic3Config> {
        let d = &self.defaults.logic3;
        let Some(obj) = raw.as_object() else {
            return feature_fallback(d.clone(), prefix);
        };

        let mut report = ValidationReport::new();
        let config = Logic3Config {
            enabled: report.absorb(validate_boolean(
                obj.get("enabled"),
                d.enabled,
                &format!("{prefix}.enabled"),
            )),
            full_spin_per_minute: report.absorb(validate_number(
                obj.get("fullSpinPerMinute"),
                0.0,
                120.0,
                d.full_spin_per_minute,
                &format!("{prefix}.fullSpinPerMinute"),
            )),
            direction: report.absorb(validate_enum(
                obj.get("direction"),
                DIRECTION_KEYWORDS,
                d.direction,
                &format!("{prefix}.direction"),
            )),
            max_fps: report.absorb(validate_number(
                obj.get("maxFps"),
                15.0,
                60.0,
                d.max_fps,
                &format!("{prefix}.maxFps"),
            )),
            easing: report.absorb(validate_enum(
                obj.get("easing"),
                SPIN_EASING_KEYWORDS,
                d.easing,
                &format!("{prefix}.easing"),
            )),
            pivot_source: report.absorb(validate_enum(
                obj.get("pivotSource"),
                PIVOT_SOURCE_KEYWORDS,
                d.pivot_source,
                &format!("{prefix}.pivotSource"),
            )),
        };
        Checked {
            value: config,
            issues: report.into_iter().collect(),
        }
    }

    /// Validate a raw `logic3A` orbit sub-config.
    pub fn validate_logic3a(&self, raw: &Value) -> Checked<Logic3AConfig> {
        self.logic3a_at(raw, "logic3A")
    }

    fn logic3a_at(&self, raw: &Value, prefix: &str) -> Checked<Logic3AConfig> {
        let d = &self.defaults.logic3_a;
        let Some(obj) = raw.as_object() else {
            return feature_fallback(d.clone(), prefix);
        };

        let mut report = ValidationReport::new();
        let orbit_point = self.orbit_point(obj.get("orbitPoint"), &mut report, prefix);
        let start_phase = start_phase(obj.get("startPhase"), &mut report, prefix);
        let config = Logic3AConfig {
            enabled: report.absorb(validate_boolean(
                obj.get("enabled"),
                d.enabled,
                &format!("{prefix}.enabled"),
            )),
            full_orbit_per_minute: report.absorb(validate_number(
                obj.get("fullOrbitPerMinute"),
                0.0,
                60.0,
                d.full_orbit_per_minute,
                &format!("{prefix}.fullOrbitPerMinute"),
            )),
            direction: report.absorb(validate_enum(
                obj.get("direction"),
                DIRECTION_KEYWORDS,
                d.direction,
                &format!("{prefix}.direction"),
            )),
            radius_pct: report.absorb(validate_number(
                obj.get("radiusPct"),
                0.0,
                100.0,
                d.radius_pct,
                &format!("{prefix}.radiusPct"),
            )),
            orbit_point,
            start_phase,
            max_fps: report.absorb(validate_number(
                obj.get("maxFps"),
                15.0,
                60.0,
                d.max_fps,
                &format!("{prefix}.maxFps"),
            )),
        };
        Checked {
            value: config,
            issues: report.into_iter().collect(),
        }
    }

    fn orbit_point(
        &self,
        raw: Option<&Value>,
        report: &mut ValidationReport,
        prefix: &str,
    ) -> Option<OrbitPoint> {
        let field = format!("{prefix}.orbitPoint");
        match raw {
            // An explicit null disables the orbit center on purpose.
            Some(Value::Null) => None,
            Some(Value::String(s)) if s == "dotmark" => Some(OrbitPoint::Anchor(OrbitAnchor::Dotmark)),
            Some(v @ Value::Object(_)) => {
                let fallback = match self.defaults.logic3_a.orbit_point {
                    Some(OrbitPoint::At(p)) => p,
                    _ => crate::config::schema::PctPoint::new(0.0, 0.0),
                };
                Some(OrbitPoint::At(report.absorb(validate_point(
                    Some(v),
                    fallback,
                    &field,
                ))))
            }
            Some(_) => {
                report.note(field, "must be \"dotmark\", a point object, or null");
                self.defaults.logic3_a.orbit_point
            }
            None => self.defaults.logic3_a.orbit_point,
        }
    }

    /// Validate a raw `clock` driver sub-config.
    pub fn validate_clock(&self, raw: &Value) -> Checked<ClockConfig> {
        self.clock_at(raw, "clock")
    }

    fn clock_at(&self, raw: &Value, prefix: &str) -> Checked<ClockConfig> {
        let d = &self.defaults.clock;
        let Some(obj) = raw.as_object() else {
            return feature_fallback(d.clone(), prefix);
        };

        let mut report = ValidationReport::new();
        let mode = match obj.get("mode") {
            Some(Value::Null) | None => d.mode,
            Some(Value::String(s)) if s == "modeA" => Some(ClockMode::ModeA),
            Some(Value::String(s)) if s == "modeB" => Some(ClockMode::ModeB),
            Some(_) => {
                report.note(format!("{prefix}.mode"), "must be \"modeA\", \"modeB\", or null");
                d.mode
            }
        };
        let config = ClockConfig {
            enabled: report.absorb(validate_boolean(
                obj.get("enabled"),
                d.enabled,
                &format!("{prefix}.enabled"),
            )),
            mode,
            role: report.absorb(validate_enum(
                obj.get("role"),
                CLOCK_ROLE_KEYWORDS,
                d.role,
                &format!("{prefix}.role"),
            )),
            second_mode: report.absorb(validate_enum(
                obj.get("secondMode"),
                SECOND_MODE_KEYWORDS,
                d.second_mode,
                &format!("{prefix}.secondMode"),
            )),
            offset_deg: report.absorb(validate_number(
                obj.get("offsetDeg"),
                -180.0,
                180.0,
                d.offset_deg,
                &format!("{prefix}.offsetDeg"),
            )),
            sync: report.absorb(validate_enum(
                obj.get("sync"),
                CLOCK_SYNC_KEYWORDS,
                d.sync,
                &format!("{prefix}.sync"),
            )),
        };
        Checked {
            value: config,
            issues: report.into_iter().collect(),
        }
    }

    /// Validate a raw `effect` filter sub-config.
    pub fn validate_effect(&self, raw: &Value) -> Checked<EffectConfig> {
        self.effect_at(raw, "effect")
    }

    fn effect_at(&self, raw: &Value, prefix: &str) -> Checked<EffectConfig> {
        let d = &self.defaults.effect;
        let Some(obj) = raw.as_object() else {
            return feature_fallback(d.clone(), prefix);
        };

        let mut report = ValidationReport::new();
        let mut number = |key: &str, min: f64, max: f64, fallback: f64| {
            report.absorb(validate_number(
                obj.get(key),
                min,
                max,
                fallback,
                &format!("{prefix}.{key}"),
            ))
        };
        let opacity_pct = number("opacityPct", 0.0, 100.0, d.opacity_pct);
        let blur_px = number("blurPx", 0.0, 20.0, d.blur_px);
        let brightness_pct = number("brightnessPct", 0.0, 200.0, d.brightness_pct);
        let contrast_pct = number("contrastPct", 0.0, 200.0, d.contrast_pct);
        let saturate_pct = number("saturatePct", 0.0, 200.0, d.saturate_pct);
        let grayscale_pct = number("grayscalePct", 0.0, 100.0, d.grayscale_pct);
        let hue_rotate_deg = number("hueRotateDeg", 0.0, 360.0, d.hue_rotate_deg);
        let z_index_hint = number("zIndexHint", 0.0, 100.0, d.z_index_hint);

        let config = EffectConfig {
            enabled: report.absorb(validate_boolean(
                obj.get("enabled"),
                d.enabled,
                &format!("{prefix}.enabled"),
            )),
            visibility: report.absorb(validate_enum(
                obj.get("visibility"),
                VISIBILITY_KEYWORDS,
                d.visibility,
                &format!("{prefix}.visibility"),
            )),
            opacity_pct,
            blend: report.absorb(validate_enum(
                obj.get("blend"),
                BLEND_KEYWORDS,
                d.blend,
                &format!("{prefix}.blend"),
            )),
            blur_px,
            brightness_pct,
            contrast_pct,
            saturate_pct,
            grayscale_pct,
            hue_rotate_deg,
            z_index_hint,
        };
        Checked {
            value: config,
            issues: report.into_iter().collect(),
        }
    }

    /// Validate a raw `effect3d` sub-config.
    pub fn validate_effect3d(&self, raw: &Value) -> Checked<Effect3dConfig> {
        self.effect3d_at(raw, "effect3d")
    }

    fn effect3d_at(&self, raw: &Value, prefix: &str) -> Checked<Effect3dConfig> {
        let d = &self.defaults.effect3d;
        let Some(obj) = raw.as_object() else {
            return feature_fallback(d.clone(), prefix);
        };

        let mut report = ValidationReport::new();
        let material = {
            let mp = format!("{prefix}.material");
            match obj.get("material").and_then(Value::as_object) {
                Some(m) => crate::config::schema::MaterialConfig {
                    kind: report.absorb(validate_enum(
                        m.get("type"),
                        MATERIAL_KEYWORDS,
                        d.material.kind,
                        &format!("{mp}.type"),
                    )),
                    metalness: report.absorb(validate_number(
                        m.get("metalness"),
                        0.0,
                        1.0,
                        d.material.metalness,
                        &format!("{mp}.metalness"),
                    )),
                    roughness: report.absorb(validate_number(
                        m.get("roughness"),
                        0.0,
                        1.0,
                        d.material.roughness,
                        &format!("{mp}.roughness"),
                    )),
                },
                None => {
                    if obj.contains_key("material") {
                        report.note(mp, "must be an object; using defaults");
                    }
                    d.material.clone()
                }
            }
        };
        let camera = {
            let cp = format!("{prefix}.camera");
            match obj.get("camera").and_then(Value::as_object) {
                Some(c) => crate::config::schema::CameraConfig {
                    fov_deg: report.absorb(validate_number(
                        c.get("fovDeg"),
                        30.0,
                        120.0,
                        d.camera.fov_deg,
                        &format!("{cp}.fovDeg"),
                    )),
                    near: report.absorb(validate_number(
                        c.get("near"),
                        0.1,
                        10.0,
                        d.camera.near,
                        &format!("{cp}.near"),
                    )),
                    far: report.absorb(validate_number(
                        c.get("far"),
                        10.0,
                        2000.0,
                        d.camera.far,
                        &format!("{cp}.far"),
                    )),
                },
                None => {
                    if obj.contains_key("camera") {
                        report.note(cp, "must be an object; using defaults");
                    }
                    d.camera.clone()
                }
            }
        };

        let config = Effect3dConfig {
            enabled: report.absorb(validate_boolean(
                obj.get("enabled"),
                d.enabled,
                &format!("{prefix}.enabled"),
            )),
            mode: report.absorb(validate_enum(
                obj.get("mode"),
                EFFECT3D_MODE_KEYWORDS,
                d.mode,
                &format!("{prefix}.mode"),
            )),
            depth_z: report.absorb(validate_number(
                obj.get("depthZ"),
                -10.0,
                10.0,
                d.depth_z,
                &format!("{prefix}.depthZ"),
            )),
            parallax_strength: report.absorb(validate_number(
                obj.get("parallaxStrength"),
                0.0,
                2.0,
                d.parallax_strength,
                &format!("{prefix}.parallaxStrength"),
            )),
            material,
            camera,
            max_fps: report.absorb(validate_number(
                obj.get("maxFps"),
                15.0,
                60.0,
                d.max_fps,
                &format!("{prefix}.maxFps"),
            )),
            quality: report.absorb(validate_enum(
                obj.get("quality"),
                QUALITY_KEYWORDS,
                d.quality,
                &format!("{prefix}.quality"),
            )),
        };
        Checked {
            value: config,
            issues: report.into_iter().collect(),
        }
    }

    /// Validate one raw scene layer entry.
    ///
    /// Feature sub-configs are materialized only for keys present (and not
    /// `null`) on the raw object; their own `enabled` flag then decides
    /// whether the feature is active. Absent keys stay `None`.
    pub fn validate_layer(&self, raw: &Value, index: usize) -> Checked<SceneLayer> {
        let prefix = format!("layers[{index}]");
        let Some(obj) = raw.as_object() else {
            return Checked {
                value: self.default_layer(index),
                issues: vec![Issue::new(prefix, "entry must be an object; using defaults")],
            };
        };

        let mut report = ValidationReport::new();
        let mut layer = SceneLayer {
            id: string_or(obj.get("id"), || format!("layer{}", index + 1)),
            path: string_or(obj.get("path"), || {
                format!("/Asset/PNG/layer{}.png", index + 1)
            }),
            enabled: report.absorb(validate_boolean(
                obj.get("enabled"),
                self.defaults.layer.enabled,
                &format!("{prefix}.enabled"),
            )),
            z_hint: report.absorb(validate_number(
                obj.get("zHint"),
                0.0,
                100.0,
                self.defaults.layer.z_hint,
                &format!("{prefix}.zHint"),
            )),
            logic2: None,
            logic2_a: None,
            logic3: None,
            logic3_a: None,
            clock: None,
            effect: None,
            effect3d: None,
        };

        let feature = |obj: &serde_json::Map<String, Value>, key: &str| -> Option<Value> {
            obj.get(key).filter(|v| !v.is_null()).cloned()
        };
        if let Some(v) = feature(obj, "logic2") {
            layer.logic2 = Some(report.absorb(self.logic2_at(&v, &format!("{prefix}.logic2"))));
        }
        if let Some(v) = feature(obj, "logic2A") {
            layer.logic2_a = Some(report.absorb(self.logic2a_at(&v, &format!("{prefix}.logic2A"))));
        }
        if let Some(v) = feature(obj, "logic3") {
            layer.logic3 = Some(report.absorb(self.logic3_at(&v, &format!("{prefix}.logic3"))));
        }
        if let Some(v) = feature(obj, "logic3A") {
            layer.logic3_a = Some(report.absorb(self.logic3a_at(&v, &format!("{prefix}.logic3A"))));
        }
        if let Some(v) = feature(obj, "clock") {
            layer.clock = Some(report.absorb(self.clock_at(&v, &format!("{prefix}.clock"))));
        }
        if let Some(v) = feature(obj, "effect") {
            layer.effect = Some(report.absorb(self.effect_at(&v, &format!("{prefix}.effect"))));
        }
        if let Some(v) = feature(obj, "effect3d") {
            layer.effect3d = Some(report.absorb(self.effect3d_at(&v, &format!("{prefix}.effect3d"))));
        }

        Checked {
            value: layer,
            issues: report.into_iter().collect(),
        }
    }

    fn default_layer(&self, index: usize) -> SceneLayer {
        SceneLayer {
            id: format!("layer{}", index + 1),
            path: format!("/Asset/PNG/layer{}.png", index + 1),
            enabled: self.defaults.layer.enabled,
            z_hint: self.defaults.layer.z_hint,
            logic2: None,
            logic2_a: None,
            logic3: None,
            logic3_a: None,
            clock: None,
            effect: None,
            effect3d: None,
        }
    }

    /// Top-level entry: repair an arbitrary value into a complete config.
    ///
    /// A document that is not a JSON object at all (null, array, scalar)
    /// degrades to the minimal safe config (document tier). The canonical
    /// defaults bundle is attached unmodified.
    pub fn validate_config(&self, raw: &Value) -> ValidatedScene {
        let Some(obj) = raw.as_object() else {
            let mut report = ValidationReport::new();
            report.note("$", "document must be a JSON object; using minimal safe config");
            return ValidatedScene {
                config: self.minimal_config(),
                report,
            };
        };

        let mut report = ValidationReport::new();
        let schema_version = string_or(obj.get("schemaVersion"), || "1.0.0".to_owned());
        let raw_meta = obj.get("meta").and_then(Value::as_object);
        let author = match raw_meta.and_then(|m| m.get("author")) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                report.note("meta.author", "must be a string; dropped");
                None
            }
        };
        let meta = Meta {
            app: string_or(raw_meta.and_then(|m| m.get("app")), default_app),
            build: string_or(raw_meta.and_then(|m| m.get("build")), default_build),
            author,
        };

        let backgrounds = match obj.get("backgrounds").and_then(Value::as_array) {
            Some(entries) => entries
                .iter()
                .enumerate()
                .map(|(i, bg)| report.absorb(self.validate_bg_layer(bg, i)))
                .collect(),
            None => Vec::new(),
        };
        let layers = match obj.get("layers").and_then(Value::as_array) {
            Some(entries) => entries
                .iter()
                .enumerate()
                .map(|(i, layer)| report.absorb(self.validate_layer(layer, i)))
                .collect(),
            None => Vec::new(),
        };

        let mut config = SceneConfig {
            schema_version,
            meta,
            backgrounds,
            layers,
            defaults: self.defaults.clone(),
        };
        ensure_unique_ids(&mut config.backgrounds, &mut report, "backgrounds");
        ensure_unique_ids(&mut config.layers, &mut report, "layers");

        ValidatedScene { config, report }
    }

    fn minimal_config(&self) -> SceneConfig {
        SceneConfig {
            schema_version: "1.0.0".to_owned(),
            meta: Meta {
                app: default_app(),
                build: default_build(),
                author: None,
            },
            backgrounds: Vec::new(),
            layers: Vec::new(),
            defaults: self.defaults.clone(),
        }
    }
}

/// Anything with a renamable string identifier.
pub trait Identified {
    /// Current identifier.
    fn id(&self) -> &str;
    /// Replace the identifier.
    fn set_id(&mut self, id: String);
}

impl Identified for BackgroundLayer {
    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Identified for SceneLayer {
    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Rename duplicate ids in array order.
///
/// The first occurrence of an id always keeps it. Duplicate occurrence `n`
/// (1-based) gets `.a` through `.z` for `n <= 26` and the numeric suffix
/// `.{n}` beyond that, so the scheme stays deterministic past a full
/// alphabet of collisions. A suffixed candidate that happens to collide
/// with an id already handed out is skipped for the next one.
pub fn ensure_unique_ids<T: Identified>(
    items: &mut [T],
    report: &mut ValidationReport,
    context: &str,
) {
    let mut used = std::collections::HashSet::<String>::new();
    let mut counts = std::collections::HashMap::<String, usize>::new();
    for item in items.iter_mut() {
        let base = item.id().to_owned();
        if used.insert(base.clone()) {
            continue;
        }
        let count = counts.entry(base.clone()).or_insert(0);
        let new_id = loop {
            *count += 1;
            let candidate = format!("{base}.{}", duplicate_suffix(*count));
            if used.insert(candidate.clone()) {
                break candidate;
            }
        };
        report.note(
            context,
            format!("duplicate id \"{base}\" renamed to \"{new_id}\""),
        );
        item.set_id(new_id);
    }
}

fn duplicate_suffix(n: usize) -> String {
    debug_assert!(n >= 1);
    if n <= 26 {
        let letter = (b'a' + (n as u8 - 1)) as char;
        letter.to_string()
    } else {
        n.to_string()
    }
}

fn feature_fallback<T>(fallback: T, prefix: &str) -> Checked<T> {
    Checked {
        value: fallback,
        issues: vec![Issue::new(
            prefix.to_owned(),
            "must be an object; using defaults",
        )],
    }
}

fn default_bg_layer(index: usize) -> BackgroundLayer {
    BackgroundLayer {
        id: format!("BG{}", index + 1),
        src: format!("/Asset/BG/BG{}.png", index + 1),
        x_pct: 50.0,
        y_pct: 50.0,
        scale_pct: 100.0,
        opacity_pct: 100.0,
        z: index as f64,
        fit: Fit::Contain,
    }
}

fn string_or(raw: Option<&Value>, fallback: impl FnOnce() -> String) -> String {
    match raw.and_then(Value::as_str) {
        Some(s) => s.to_owned(),
        None => fallback(),
    }
}

fn default_app() -> String {
    "LauncherScreen Logic System".to_owned()
}

fn default_build() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn start_phase(
    raw: Option<&Value>,
    report: &mut ValidationReport,
    prefix: &str,
) -> StartPhase {
    let field = format!("{prefix}.startPhase");
    match raw {
        None => StartPhase::Keyword(StartPhaseKeyword::Auto),
        Some(Value::String(s)) if s == "auto" => StartPhase::Keyword(StartPhaseKeyword::Auto),
        Some(v) if v.is_number() => StartPhase::Degrees(report.absorb(validate_number(
            Some(v),
            0.0,
            360.0,
            0.0,
            &field,
        ))),
        Some(_) => {
            report.note(field, "must be \"auto\" or degrees 0-360");
            StartPhase::Keyword(StartPhaseKeyword::Auto)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/validate/document.rs"]
mod tests;
