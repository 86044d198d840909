//! Read-only scene composition.
//!
//! Combines a validated [`SceneConfig`] with the current [`OriginState`] to
//! produce pixel placements for background layers. Never mutates the
//! config; a new frame or a re-validated config just means calling again.

use serde::{Deserialize, Serialize};

use crate::config::schema::{BackgroundLayer, Fit, SceneConfig, SceneLayer};
use crate::origin::{Norm, OriginState, map_to_px};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Pixel placement for one background layer.
pub struct BgPlacement {
    /// Layer id.
    pub id: String,
    /// Image path.
    pub src: String,
    /// Anchor X in container pixels.
    pub left: f64,
    /// Anchor Y in container pixels.
    pub top: f64,
    /// Scale factor (1.0 = natural size).
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Object-fit mode.
    pub fit: Fit,
    /// Stacking order.
    pub z: f64,
}

/// Convert a validated percent position (0-100 per axis, 50/50 = origin)
/// into a normalized point.
pub fn pct_to_norm(x_pct: f64, y_pct: f64) -> Norm {
    Norm {
        x: (x_pct - 50.0) / 50.0,
        y: (50.0 - y_pct) / 50.0,
    }
}

/// Place one background layer in the given frame.
pub fn place_background(origin: OriginState, layer: &BackgroundLayer) -> BgPlacement {
    let anchor = map_to_px(origin, pct_to_norm(layer.x_pct, layer.y_pct));
    BgPlacement {
        id: layer.id.clone(),
        src: layer.src.clone(),
        left: anchor.left,
        top: anchor.top,
        scale: layer.scale_pct / 100.0,
        opacity: layer.opacity_pct / 100.0,
        fit: layer.fit,
        z: layer.z,
    }
}

/// Place every background layer, bottom-up.
///
/// Ordering is `(z, original index)` and stable, so two layers sharing a
/// `z` keep their authored order.
pub fn compose_backgrounds(config: &SceneConfig, origin: OriginState) -> Vec<BgPlacement> {
    let mut indexed: Vec<(usize, &BackgroundLayer)> =
        config.backgrounds.iter().enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| {
        a.z.partial_cmp(&b.z)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(ia.cmp(ib))
    });
    indexed
        .into_iter()
        .map(|(_, layer)| place_background(origin, layer))
        .collect()
}

/// Scene layers that participate in composition, in composer order.
///
/// Presence of a feature sub-config materializes the feature; this filter
/// only looks at the layer-level `enabled` flag. Ordering is
/// `(zHint, original index)`, stable.
pub fn enabled_layers(config: &SceneConfig) -> Vec<&SceneLayer> {
    let mut indexed: Vec<(usize, &SceneLayer)> = config
        .layers
        .iter()
        .enumerate()
        .filter(|(_, layer)| layer.enabled)
        .collect();
    indexed.sort_by(|(ia, a), (ib, b)| {
        a.z_hint
            .partial_cmp(&b.z_hint)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(ia.cmp(ib))
    });
    indexed.into_iter().map(|(_, layer)| layer).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compose.rs"]
mod tests;
