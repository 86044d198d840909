//! Canonical default records for every feature.
//!
//! The bundle is an explicitly constructed value handed to the
//! [`crate::Validator`] rather than ambient global state, so tests and
//! embedders can swap in alternate default sets.

use crate::config::schema::{
    BlendMode, CameraConfig, ClockConfig, ClockRole, ClockSync, DefaultsBundle, Effect3dConfig,
    Effect3dMode, EffectConfig, LayerDefaults, Logic2AConfig, Logic2Config, Logic3AConfig,
    Logic3Config, MaterialConfig, MaterialType, OrbitAnchor, OrbitPoint, PctPoint, PivotMode,
    PivotSource, Quality, RotationMode, Rounding, SecondMode, SpinDirection, SpinEasing,
    StartPhase, StartPhaseKeyword, Visibility,
};

impl Default for Logic2Config {
    fn default() -> Self {
        Self {
            enabled: true,
            scale_pct: 100.0,
            min_scale_pct: 10.0,
            max_scale_pct: 400.0,
            center: PctPoint::new(50.0, 50.0),
            margin_pct: 5.0,
            rounding: Rounding::Round,
        }
    }
}

impl Default for Logic2AConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            rotation_mode: RotationMode::Anchored,
            base: PctPoint::new(0.0, 50.0),
            tip: PctPoint::new(0.0, -50.0),
            pivot: PivotMode::Base,
        }
    }
}

impl Default for Logic3Config {
    fn default() -> Self {
        Self {
            enabled: false,
            full_spin_per_minute: 1.0,
            direction: SpinDirection::Cw,
            max_fps: 45.0,
            easing: SpinEasing::Linear,
            pivot_source: PivotSource::Logic2ABase,
        }
    }
}

impl Default for Logic3AConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            full_orbit_per_minute: 0.5,
            direction: SpinDirection::Cw,
            radius_pct: 20.0,
            orbit_point: Some(OrbitPoint::Anchor(OrbitAnchor::Dotmark)),
            start_phase: StartPhase::Keyword(StartPhaseKeyword::Auto),
            max_fps: 45.0,
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: None,
            role: ClockRole::Minute,
            second_mode: SecondMode::Smooth,
            offset_deg: 0.0,
            sync: ClockSync::Device,
        }
    }
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            visibility: Visibility::Visible,
            opacity_pct: 100.0,
            blend: BlendMode::Normal,
            blur_px: 0.0,
            brightness_pct: 100.0,
            contrast_pct: 100.0,
            saturate_pct: 100.0,
            grayscale_pct: 0.0,
            hue_rotate_deg: 0.0,
            z_index_hint: 0.0,
        }
    }
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            kind: MaterialType::Basic,
            metalness: 0.0,
            roughness: 1.0,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Default for Effect3dConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: Effect3dMode::Basic,
            depth_z: 0.0,
            parallax_strength: 0.5,
            material: MaterialConfig::default(),
            camera: CameraConfig::default(),
            max_fps: 30.0,
            quality: Quality::Auto,
        }
    }
}

impl Default for LayerDefaults {
    fn default() -> Self {
        Self {
            enabled: true,
            z_hint: 10.0,
        }
    }
}

impl Default for DefaultsBundle {
    fn default() -> Self {
        Self::canonical()
    }
}

impl DefaultsBundle {
    /// The canonical defaults bundle: one default record per feature.
    pub fn canonical() -> Self {
        Self {
            layer: LayerDefaults::default(),
            logic2: Logic2Config::default(),
            logic2_a: Logic2AConfig::default(),
            logic3: Logic3Config::default(),
            logic3_a: Logic3AConfig::default(),
            clock: ClockConfig::default(),
            effect: EffectConfig::default(),
            effect3d: Effect3dConfig::default(),
        }
    }
}
