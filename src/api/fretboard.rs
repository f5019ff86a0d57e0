//! WASM API for fretboard mapping and annotation

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, parse_note, serialize, theory_error, validation_error};
use crate::config::FretboardConfig;
use crate::fretboard;
use crate::models::tuning::{self, Tuning};
use crate::{wasm_info, wasm_warn};

/// Note at a (string, fret) position
///
/// # Parameters
/// - `tuning_js`: JavaScript array of note names, highest string first
/// - `string_index`: 0-based, 0 = highest string
/// - `fret`: 0 = open string
#[wasm_bindgen(js_name = noteAtPosition)]
pub fn note_at_position(tuning_js: JsValue, string_index: usize, fret: u32) -> Result<String, JsValue> {
    let names: Vec<String> = deserialize(tuning_js, "Invalid tuning")?;
    let tuning = Tuning::parse(&names).map_err(theory_error)?;
    fretboard::note_at_position(&tuning, string_index, fret)
        .map(|n| n.to_string())
        .map_err(theory_error)
}

/// Every (string, fret) pair in `start_fret..=end_fret` where `note` sounds
#[wasm_bindgen(js_name = findNotePositions)]
pub fn find_note_positions(
    tuning_js: JsValue,
    note: &str,
    start_fret: u8,
    end_fret: u8,
) -> Result<JsValue, JsValue> {
    let names: Vec<String> = deserialize(tuning_js, "Invalid tuning")?;
    let tuning = Tuning::parse(&names).map_err(theory_error)?;
    let range = fretboard::FretRange::new(start_fret, end_fret).map_err(theory_error)?;
    let positions = fretboard::positions_of(&tuning, range, parse_note(note)?);
    serialize(&positions, "Failed to serialize note positions")
}

/// Resolve a full fretboard configuration into positions and labels
///
/// # Parameters
/// - `config_js`: JavaScript object matching `FretboardConfig` (camelCase);
///   missing fields take their defaults
///
/// # Returns
/// JavaScript object with key, pattern, active notes and one entry per position
#[wasm_bindgen(js_name = annotateFretboard)]
pub fn annotate_fretboard(config_js: JsValue) -> Result<JsValue, JsValue> {
    let config: FretboardConfig = deserialize(config_js, "Invalid fretboard config")?;
    wasm_info!(
        "annotateFretboard: {} {} {} frets {}..={}",
        config.tonic,
        config.pattern_kind,
        config.pattern_name,
        config.start_fret,
        config.end_fret
    );

    let model = config.build().map_err(theory_error)?;
    serialize(&model, "Failed to serialize fretboard model")
}

/// Check a configuration without building it
#[wasm_bindgen(js_name = validateConfig)]
pub fn validate_config(config_js: JsValue) -> Result<(), JsValue> {
    let config: FretboardConfig = deserialize(config_js, "Invalid fretboard config")?;
    config.validate().map_err(|e| {
        wasm_warn!("Rejected fretboard config: {}", e);
        theory_error(e)
    })
}

/// Note names of a named tuning preset
#[wasm_bindgen(js_name = getTuningPreset)]
pub fn get_tuning_preset(id: &str) -> Result<JsValue, JsValue> {
    let preset = tuning::preset(id)
        .ok_or_else(|| validation_error(format!("Unknown tuning preset: '{}'", id)))?;
    serialize(&preset.strings, "Failed to serialize tuning preset")
}
