//! Scenery validates declarative layered scene descriptions and places
//! their layers in a normalized, size-independent coordinate frame.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: raw JSON `->` [`SceneConfig`] + [`ValidationReport`]
//!    (total: every defect is repaired at field, entity, or document tier)
//! 2. **Observe**: container size `->` [`OriginState`] (pure; replaced on
//!    every resize, degenerate before first layout)
//! 3. **Compose**: validated config + origin `->` pixel placements for
//!    background layers
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total validation**: no public validation entry point returns an
//!   error or panics; repairs are reported as advisory [`Issue`]s.
//! - **Replace, never mutate**: validated configs and origin frames are
//!   produced whole and swapped, so readers never see a partial update.
//! - **Degrade, never crash**: a broken manifest or config file renders a
//!   scene with fewer layers, not an error screen.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod diag;
mod foundation;
mod gesture;
mod manifest;
mod origin;
mod scene;
mod validate;
mod watch;

pub use config::schema::{
    BackgroundLayer, BlendMode, CameraConfig, ClockConfig, ClockMode, ClockRole, ClockSync,
    DefaultsBundle, Effect3dConfig, Effect3dMode, EffectConfig, Fit, LayerDefaults, Logic2AConfig,
    Logic2Config, Logic3AConfig, Logic3Config, MaterialConfig, MaterialType, Meta, OrbitAnchor,
    OrbitPoint, PctPoint, PivotMode, PivotSource, Quality, RotationMode, Rounding, SceneConfig,
    SceneLayer, SecondMode, SpinDirection, SpinEasing, StartPhase, StartPhaseKeyword, Visibility,
};
pub use diag::{Deduped, LogLevel, LogPort, TracingPort, report_to_port};
pub use foundation::error::{SceneryError, SceneryResult};
pub use foundation::math::{
    DEG_TO_RAD, Point, RAD_TO_DEG, TWO_PI, Vec2, angle_between, clamp, deg_to_rad, distance, lerp,
    normalize_angle, normalize_vec, points_equal, rad_to_deg,
};
pub use gesture::{DEFAULT_RADIUS_PX, DEFAULT_WINDOW_MS, TapTracker};
pub use manifest::{DEFAULT_MANIFEST_PATH, load_manifest, parse_manifest};
pub use origin::{Norm, OriginState, PxPoint, map_to_px, px_to_norm};
pub use scene::compose::{
    BgPlacement, compose_backgrounds, enabled_layers, pct_to_norm, place_background,
};
pub use validate::document::{Identified, ValidatedScene, Validator, ensure_unique_ids};
pub use validate::primitives::{
    Checked, POINT_RANGE, validate_boolean, validate_enum, validate_number, validate_point,
};
pub use validate::report::{Issue, ValidationReport};
pub use watch::ConfigWatcher;
