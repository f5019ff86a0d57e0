//! WASM API for catalog enumeration (selection controls)

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::helpers::serialize;
use crate::models::interval::INTERVALS;
use crate::models::note::{FLAT_NAMES, SHARP_NAMES};
use crate::models::pattern::{chord_names, patterns_of_kind, scale_names, PatternKind};
use crate::models::tonic::Tonic;
use crate::models::tuning::presets;

/// Pattern entry for a dropdown
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PatternOption<'a> {
    id: &'a str,
    name: &'a str,
    size: usize,
}

/// Ids of every catalog scale
#[wasm_bindgen(js_name = listScales)]
pub fn list_scales() -> Result<JsValue, JsValue> {
    serialize(&scale_names(), "Failed to serialize scale names")
}

/// Ids of every catalog chord
#[wasm_bindgen(js_name = listChords)]
pub fn list_chords() -> Result<JsValue, JsValue> {
    serialize(&chord_names(), "Failed to serialize chord names")
}

/// Scales or chords with display names and sizes
#[wasm_bindgen(js_name = listPatterns)]
pub fn list_patterns(kind: &str) -> Result<JsValue, JsValue> {
    let kind = crate::api::helpers::parse_pattern_kind(kind)?;
    let options: Vec<PatternOption> = patterns_of_kind(kind)
        .map(|p| PatternOption {
            id: &p.id,
            name: &p.name,
            size: p.len(),
        })
        .collect();
    serialize(&options, "Failed to serialize patterns")
}

/// Every interval with token, semitones, short name, solfège and color
#[wasm_bindgen(js_name = listIntervals)]
pub fn list_intervals() -> Result<JsValue, JsValue> {
    serialize(&INTERVALS.to_vec(), "Failed to serialize intervals")
}

/// Sharp and flat names of the 12 pitch classes
#[wasm_bindgen(js_name = listNoteNames)]
pub fn list_note_names(prefer_flats: bool) -> Result<JsValue, JsValue> {
    let names = if prefer_flats { FLAT_NAMES } else { SHARP_NAMES };
    serialize(&names, "Failed to serialize note names")
}

/// The 17 spelled tonics
#[wasm_bindgen(js_name = listTonics)]
pub fn list_tonics() -> Result<JsValue, JsValue> {
    let names: Vec<&str> = Tonic::ALL.iter().map(|t| t.as_str()).collect();
    serialize(&names, "Failed to serialize tonics")
}

#[wasm_bindgen(js_name = listTuningPresets)]
pub fn list_tuning_presets() -> Result<JsValue, JsValue> {
    serialize(&presets(), "Failed to serialize tuning presets")
}

/// Kinds accepted by `listPatterns` and the config's `patternKind`
#[wasm_bindgen(js_name = listPatternKinds)]
pub fn list_pattern_kinds() -> Result<JsValue, JsValue> {
    let kinds = [PatternKind::Scale, PatternKind::Chord, PatternKind::Interval];
    serialize(&kinds, "Failed to serialize pattern kinds")
}
