//! External background manifest loading.
//!
//! A manifest is a JSON document `{ "layers": [ ... ] }` whose elements are
//! validated exactly like raw background layers. Loading is total: an
//! unreadable file, malformed JSON, or a missing/mistyped `layers` field
//! all degrade to the empty layer list (the scene simply renders with
//! fewer layers), never to an error visible to the caller.

use std::path::Path;

use serde_json::Value;
use tracing::warn;

use crate::config::schema::BackgroundLayer;
use crate::validate::document::{Validator, ensure_unique_ids};
use crate::validate::report::ValidationReport;

/// Default manifest location, relative to the asset root.
pub const DEFAULT_MANIFEST_PATH: &str = "launcher-bg.json";

/// Parse manifest bytes into validated background layers.
///
/// Returns the layers (possibly empty) plus the advisory repair report.
pub fn parse_manifest(bytes: &[u8], validator: &Validator) -> (Vec<BackgroundLayer>, ValidationReport) {
    let mut report = ValidationReport::new();

    let doc: Value = match serde_json::from_slice(bytes) {
        Ok(doc) => doc,
        Err(err) => {
            warn!(error = %err, "manifest is not valid JSON; using empty layer list");
            report.note("$", format!("manifest is not valid JSON: {err}"));
            return (Vec::new(), report);
        }
    };

    let Some(entries) = doc.get("layers").and_then(Value::as_array) else {
        report.note("layers", "missing or not an array; using empty layer list");
        return (Vec::new(), report);
    };

    let mut layers: Vec<BackgroundLayer> = entries
        .iter()
        .enumerate()
        .map(|(i, raw)| report.absorb(validator.validate_bg_layer(raw, i)))
        .collect();
    ensure_unique_ids(&mut layers, &mut report, "layers");
    (layers, report)
}

/// Load and validate a manifest file.
///
/// An unreadable file degrades to the empty list with one warn trace.
pub fn load_manifest(path: impl AsRef<Path>, validator: &Validator) -> Vec<BackgroundLayer> {
    let path = path.as_ref();
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "manifest load failed; using empty layer list");
            return Vec::new();
        }
    };
    let (layers, report) = parse_manifest(&bytes, validator);
    if !report.is_empty() {
        warn!(path = %path.display(), issues = report.len(), "manifest validated with repairs");
    }
    layers
}

#[cfg(test)]
#[path = "../tests/unit/manifest.rs"]
mod tests;
