//! Data shapes for the versioned scene description.
//!
//! The wire format is the original camelCase JSON (`schemaVersion`, `xPct`,
//! `logic2A`, ...). Downstream of [`crate::Validator`] every field is
//! guaranteed present and in range; the `Option` feature sub-configs on
//! [`SceneLayer`] stay `None` unless the key was present in the raw input
//! (presence materializes a feature, its own `enabled` flag activates it).

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A complete, layered scene description.
///
/// Produced once per raw input by [`crate::Validator::validate_config`] and
/// treated as immutable by all readers; a re-validation replaces the whole
/// value rather than mutating it in place.
pub struct SceneConfig {
    /// Schema version string, e.g. `"1.0.0"`.
    pub schema_version: String,
    /// Document metadata.
    pub meta: Meta,
    /// Background layers (bootstrap display), bottom-up by `z`.
    pub backgrounds: Vec<BackgroundLayer>,
    /// Foreground scene layers for the logic pipeline.
    pub layers: Vec<SceneLayer>,
    /// Canonical per-feature fallback records, attached unmodified.
    pub defaults: DefaultsBundle,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Document metadata.
pub struct Meta {
    /// Authoring application name.
    pub app: String,
    /// Build identifier (RFC 3339 timestamp by convention).
    pub build: String,
    /// Optional author note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One background image layer.
pub struct BackgroundLayer {
    /// Unique identifier, e.g. `"BG1"`.
    pub id: String,
    /// Image path, e.g. `"/Asset/BG/BG2.png"`.
    pub src: String,
    /// Horizontal position as percent of the normalized scale; 0-100, 50 is the origin.
    pub x_pct: f64,
    /// Vertical position as percent of the normalized scale; 0-100, 50 is the origin.
    pub y_pct: f64,
    /// Scale percent in vmin units; 1-400, default 100.
    pub scale_pct: f64,
    /// Opacity percent; 0-100, default 100.
    pub opacity_pct: f64,
    /// Stacking order; 0-10, defaults to the array index.
    pub z: f64,
    /// Object-fit mode, default `contain`.
    pub fit: Fit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How a background image fills its container.
pub enum Fit {
    /// Scale to fit inside the container, preserving aspect.
    #[default]
    Contain,
    /// Scale to cover the container, preserving aspect.
    Cover,
    /// Stretch to the container bounds.
    Fill,
    /// Natural size, centered on the origin.
    None,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One foreground scene layer plus its optional feature sub-configs.
pub struct SceneLayer {
    /// Unique identifier, e.g. `"hand-minute"`.
    pub id: String,
    /// Image path, e.g. `"/Asset/PNG/clock-hand.png"`.
    pub path: String,
    /// Whether the layer participates in composition; default true.
    pub enabled: bool,
    /// Composer ordering hint; 0-100, default 10.
    pub z_hint: f64,
    /// Basic placement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic2: Option<Logic2Config>,
    /// Anchored rotation (reserved runtime).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic2_a: Option<Logic2AConfig>,
    /// Spin (reserved runtime).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic3: Option<Logic3Config>,
    /// Orbit (reserved runtime).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic3_a: Option<Logic3AConfig>,
    /// Real-time clock driver (reserved runtime).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock: Option<ClockConfig>,
    /// Basic filter effects (reserved runtime).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<EffectConfig>,
    /// 3D effects (reserved runtime).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect3d: Option<Effect3dConfig>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A point expressed in percent units.
pub struct PctPoint {
    /// Horizontal percent component.
    pub x_pct: f64,
    /// Vertical percent component.
    pub y_pct: f64,
}

impl PctPoint {
    /// Build a percent point.
    pub fn new(x_pct: f64, y_pct: f64) -> Self {
        Self { x_pct, y_pct }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Basic placement config.
pub struct Logic2Config {
    /// Whether placement is active; default true.
    pub enabled: bool,
    /// Scale percent in vmin units; 1-400, default 100.
    pub scale_pct: f64,
    /// Lower scale bound; 1-400, default 10.
    pub min_scale_pct: f64,
    /// Upper scale bound; 1-400, default 400.
    pub max_scale_pct: f64,
    /// Placement center; 0-100 each, default 50/50.
    pub center: PctPoint,
    /// Boundary margin percent; 0-50, default 5.
    pub margin_pct: f64,
    /// Pixel rounding mode, default `round`.
    pub rounding: Rounding,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Pixel rounding mode for placement.
pub enum Rounding {
    /// Round to nearest.
    #[default]
    Round,
    /// Round down.
    Floor,
    /// Round up.
    Ceil,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Anchored rotation config (configuration shape only).
pub struct Logic2AConfig {
    /// Whether rotation is active; default false.
    pub enabled: bool,
    /// Rotation mode, default `anchored`.
    pub rotation_mode: RotationMode,
    /// Anchor base point; -200..200 each, default 0/50.
    pub base: PctPoint,
    /// Anchor tip point; -200..200 each, default 0/-50.
    pub tip: PctPoint,
    /// Pivot selection, default `base`.
    pub pivot: PivotMode,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Rotation mode.
pub enum RotationMode {
    /// Rotate around the configured anchor.
    #[default]
    Anchored,
    /// Unconstrained rotation.
    Free,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Pivot selection for anchored rotation.
pub enum PivotMode {
    /// Pivot on the base point.
    #[default]
    Base,
    /// Pivot on the layer center.
    Center,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Spin config (configuration shape only).
pub struct Logic3Config {
    /// Whether spin is active; default false.
    pub enabled: bool,
    /// Full revolutions per minute; 0-120, default 1.
    pub full_spin_per_minute: f64,
    /// Spin direction, default `cw`.
    pub direction: SpinDirection,
    /// Frame-rate cap; 15-60, default 45.
    pub max_fps: f64,
    /// Easing profile, default `linear`.
    pub easing: SpinEasing,
    /// Where the spin pivot comes from, default `logic2A-base`.
    pub pivot_source: PivotSource,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Rotation direction.
pub enum SpinDirection {
    /// Clockwise.
    #[default]
    Cw,
    /// Counter-clockwise.
    Ccw,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Spin easing profile.
pub enum SpinEasing {
    /// Constant angular velocity.
    #[default]
    Linear,
    /// Heavy start.
    Thick,
    /// Smoothed start and stop.
    Smooth,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Which configured point drives the spin pivot.
pub enum PivotSource {
    /// The `logic2A` base anchor.
    #[default]
    #[serde(rename = "logic2A-base")]
    Logic2ABase,
    /// The `logic2` placement center.
    #[serde(rename = "logic2-center")]
    Logic2Center,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Orbit config (configuration shape only).
pub struct Logic3AConfig {
    /// Whether orbit is active; default false.
    pub enabled: bool,
    /// Full orbits per minute; 0-60, default 0.5.
    pub full_orbit_per_minute: f64,
    /// Orbit direction, default `cw`.
    pub direction: SpinDirection,
    /// Orbit radius percent in vmin units; 0-100, default 20.
    pub radius_pct: f64,
    /// Orbit center; `None` means explicitly disabled (`null` on the wire).
    pub orbit_point: Option<OrbitPoint>,
    /// Starting phase, default `auto`.
    pub start_phase: StartPhase,
    /// Frame-rate cap; 15-60, default 45.
    pub max_fps: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// Orbit center: the origin marker or an explicit percent point.
pub enum OrbitPoint {
    /// A named anchor (`"dotmark"` on the wire).
    Anchor(OrbitAnchor),
    /// An explicit percent point.
    At(PctPoint),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Named orbit anchors.
pub enum OrbitAnchor {
    /// The scene origin marker.
    Dotmark,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// Orbit starting phase: derived automatically or fixed in degrees.
pub enum StartPhase {
    /// A named mode (`"auto"` on the wire).
    Keyword(StartPhaseKeyword),
    /// Fixed phase in degrees; 0-360.
    Degrees(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Named starting-phase modes.
pub enum StartPhaseKeyword {
    /// Derive the phase from the current time.
    Auto,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Real-time clock driver config (configuration shape only).
pub struct ClockConfig {
    /// Whether the clock driver is active; default false.
    pub enabled: bool,
    /// Dial mode; `None` (`null` on the wire) until a mode is chosen.
    pub mode: Option<ClockMode>,
    /// Which hand this layer represents, default `minute`.
    pub role: ClockRole,
    /// Second-hand motion, default `smooth`.
    pub second_mode: SecondMode,
    /// Offset in degrees; -180..180, default 0.
    pub offset_deg: f64,
    /// Time source, default `device`.
    pub sync: ClockSync,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Clock dial mode.
pub enum ClockMode {
    /// 12-hour dial, two revolutions per day.
    #[serde(rename = "modeA")]
    ModeA,
    /// 24-hour dial.
    #[serde(rename = "modeB")]
    ModeB,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Clock hand role.
pub enum ClockRole {
    /// Second hand.
    Second,
    /// Minute hand.
    #[default]
    Minute,
    /// Hour hand.
    Hour,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Second-hand motion.
pub enum SecondMode {
    /// Discrete one-second steps.
    Tick,
    /// Continuous sweep.
    #[default]
    Smooth,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Clock time source.
pub enum ClockSync {
    /// Device clock only.
    #[default]
    #[serde(rename = "device")]
    Device,
    /// Device clock corrected by the server.
    #[serde(rename = "device+server")]
    DeviceServer,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Basic filter effects config (configuration shape only).
pub struct EffectConfig {
    /// Whether effects are active; default false.
    pub enabled: bool,
    /// Visibility toggle, default `visible`.
    pub visibility: Visibility,
    /// Opacity percent; 0-100, default 100.
    pub opacity_pct: f64,
    /// Blend mode, default `normal`.
    pub blend: BlendMode,
    /// Blur radius in pixels; 0-20, default 0.
    pub blur_px: f64,
    /// Brightness percent; 0-200, default 100.
    pub brightness_pct: f64,
    /// Contrast percent; 0-200, default 100.
    pub contrast_pct: f64,
    /// Saturation percent; 0-200, default 100.
    pub saturate_pct: f64,
    /// Grayscale percent; 0-100, default 0.
    pub grayscale_pct: f64,
    /// Hue rotation in degrees; 0-360, default 0.
    pub hue_rotate_deg: f64,
    /// Visual layering hint; 0-100, default 0.
    pub z_index_hint: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Layer visibility.
pub enum Visibility {
    /// Rendered.
    #[default]
    Visible,
    /// Not rendered but still laid out.
    Hidden,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Blend mode for filter effects.
pub enum BlendMode {
    /// Source over destination.
    #[default]
    Normal,
    /// Multiply.
    Multiply,
    /// Screen.
    Screen,
    /// Overlay.
    Overlay,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// 3D effects config (configuration shape only).
pub struct Effect3dConfig {
    /// Whether the 3D pipeline is active; default false.
    pub enabled: bool,
    /// Pipeline mode, default `basic`.
    pub mode: Effect3dMode,
    /// Depth offset; -10..10, default 0.
    pub depth_z: f64,
    /// Parallax multiplier; 0-2, default 0.5.
    pub parallax_strength: f64,
    /// Material parameters.
    pub material: MaterialConfig,
    /// Camera parameters.
    pub camera: CameraConfig,
    /// Frame-rate cap; 15-60, default 30.
    pub max_fps: f64,
    /// Quality preset, default `auto`.
    pub quality: Quality,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// 3D pipeline mode.
pub enum Effect3dMode {
    /// Unlit textured quad.
    #[default]
    Basic,
    /// Lit material.
    Lit,
    /// Custom shader.
    Shader,
    /// Particle system.
    Particle,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Material parameters for the 3D pipeline.
pub struct MaterialConfig {
    /// Material type, default `basic`.
    #[serde(rename = "type")]
    pub kind: MaterialType,
    /// Metalness; 0-1, default 0.
    pub metalness: f64,
    /// Roughness; 0-1, default 1.
    pub roughness: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Material type.
pub enum MaterialType {
    /// Unlit.
    #[default]
    Basic,
    /// Lambert shading.
    Lambert,
    /// Phong shading.
    Phong,
    /// PBR standard.
    Standard,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Camera parameters for the 3D pipeline.
pub struct CameraConfig {
    /// Vertical field of view in degrees; 30-120, default 75.
    pub fov_deg: f64,
    /// Near plane; 0.1-10, default 0.1.
    pub near: f64,
    /// Far plane; 10-2000, default 1000.
    pub far: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Rendering quality preset.
pub enum Quality {
    /// Pick based on the device.
    #[default]
    Auto,
    /// Low.
    Low,
    /// Medium.
    Med,
    /// High.
    High,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Core-field fallbacks shared by all scene layers.
pub struct LayerDefaults {
    /// Default `enabled` flag.
    pub enabled: bool,
    /// Default composer ordering hint.
    pub z_hint: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One canonical default record per feature.
///
/// Owned read-only: the validator receives a bundle at construction and
/// attaches a copy to every validated config; it never mutates one.
pub struct DefaultsBundle {
    /// Scene-layer core-field defaults.
    pub layer: LayerDefaults,
    /// Placement defaults.
    pub logic2: Logic2Config,
    /// Anchored-rotation defaults.
    pub logic2_a: Logic2AConfig,
    /// Spin defaults.
    pub logic3: Logic3Config,
    /// Orbit defaults.
    pub logic3_a: Logic3AConfig,
    /// Clock-driver defaults.
    pub clock: ClockConfig,
    /// Filter-effect defaults.
    pub effect: EffectConfig,
    /// 3D-effect defaults.
    pub effect3d: Effect3dConfig,
}
