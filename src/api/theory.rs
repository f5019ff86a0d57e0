//! WASM API for theory queries
//!
//! Thin wrappers over `theory::engine`: parse the JS arguments, run the pure
//! function, serialize the result. Errors are logged and returned as strings.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{parse_key, parse_note, parse_pattern_kind, serialize, theory_error};
use crate::models::note;
use crate::models::pattern::{get_pattern, PatternKind};
use crate::theory::{degree, engine, label};
use crate::{wasm_error, wasm_log};

fn to_js_array(names: &[String]) -> js_sys::Array {
    names.iter().map(|n| JsValue::from_str(n)).collect()
}

/// Pitch class `offset` semitones from `root`, spelled with sharps
#[wasm_bindgen(js_name = noteAt)]
pub fn note_at(root: &str, offset: i32) -> Result<String, JsValue> {
    Ok(note::note_at(parse_note(root)?, offset).to_string())
}

/// Upward semitone distance between two notes (0-11)
#[wasm_bindgen(js_name = noteDistance)]
pub fn note_distance(from: &str, to: &str) -> Result<u8, JsValue> {
    Ok(note::distance(parse_note(from)?, parse_note(to)?))
}

/// Letter-correct names of a scale's notes
///
/// # Returns
/// JavaScript array of note names, ascending by degree
#[wasm_bindgen(js_name = getScaleNotes)]
pub fn get_scale_notes(tonic: &str, is_major: bool, scale_name: &str) -> Result<js_sys::Array, JsValue> {
    wasm_log!("getScaleNotes: {} {}", tonic, scale_name);
    let key = parse_key(tonic, is_major)?;
    let notes = engine::get_scale_notes(&key, scale_name).map_err(theory_error)?;
    let pattern = get_pattern(scale_name, PatternKind::Scale)
        .map_err(theory_error)?;
    let names: Vec<String> = notes
        .iter()
        .map(|&n| engine::spell_in_pattern(n, &key, &pattern).map(|s| s.to_string()))
        .collect::<Result<_, _>>()
        .map_err(theory_error)?;
    Ok(to_js_array(&names))
}

/// Letter-correct names of a chord's notes, root first
#[wasm_bindgen(js_name = getChordNotes)]
pub fn get_chord_notes(tonic: &str, is_major: bool, chord_name: &str) -> Result<js_sys::Array, JsValue> {
    wasm_log!("getChordNotes: {} {}", tonic, chord_name);
    let key = parse_key(tonic, is_major)?;
    let pattern = get_pattern(chord_name, PatternKind::Chord)
        .map_err(theory_error)?;
    let names: Vec<String> = engine::get_spelled_pattern_notes(&key, &pattern)
        .map_err(theory_error)?
        .iter()
        .map(|s| s.to_string())
        .collect();
    Ok(to_js_array(&names))
}

#[wasm_bindgen(js_name = getNoteFromInterval)]
pub fn get_note_from_interval(tonic: &str, interval_token: &str) -> Result<String, JsValue> {
    let key = parse_key(tonic, true)?;
    engine::spell_note_from_interval(&key, interval_token)
        .map(|n| n.to_string())
        .map_err(theory_error)
}

/// Interval token from `tonic` to `note`
///
/// When `pattern_kind`/`pattern_name` are given the pattern's own token is
/// preferred; pass empty strings for the canonical token.
#[wasm_bindgen(js_name = getInterval)]
pub fn get_interval(
    tonic: &str,
    note: &str,
    pattern_kind: &str,
    pattern_name: &str,
) -> Result<String, JsValue> {
    let key = parse_key(tonic, true)?;
    let note = parse_note(note)?;

    let context = if pattern_name.is_empty() {
        None
    } else {
        let kind = parse_pattern_kind(pattern_kind)?;
        Some(get_pattern(pattern_name, kind).map_err(theory_error)?)
    };

    Ok(engine::get_interval(&key, note, context.as_ref()).token.to_string())
}

#[wasm_bindgen(js_name = getRomanNumeral)]
pub fn get_roman_numeral(degree: u8, is_major_key: bool) -> Result<String, JsValue> {
    degree::get_roman_numeral(degree, is_major_key).map_err(theory_error)
}

#[wasm_bindgen(js_name = getExpectedNoteForDegree)]
pub fn get_expected_note_for_degree(tonic: &str, degree: u8) -> Result<String, JsValue> {
    let key = parse_key(tonic, true)?;
    engine::spell_expected_note_for_degree(&key, degree)
        .map(|n| n.to_string())
        .map_err(theory_error)
}

/// Display name of `note` in the context of a key and pattern
#[wasm_bindgen(js_name = spellNote)]
pub fn spell_note(
    note: &str,
    tonic: &str,
    is_major: bool,
    pattern_kind: &str,
    pattern_name: &str,
) -> Result<String, JsValue> {
    let key = parse_key(tonic, is_major)?;
    let kind = parse_pattern_kind(pattern_kind)?;
    engine::spell(parse_note(note)?, &key, kind, pattern_name).map_err(|e| {
        wasm_error!("spellNote failed for {} in {} {}", note, tonic, pattern_name);
        theory_error(e)
    })
}

/// Full label set (name, interval, degree, solfège, numeral, color) for a note
#[wasm_bindgen(js_name = describeNote)]
pub fn describe_note(
    note: &str,
    tonic: &str,
    is_major: bool,
    pattern_kind: &str,
    pattern_name: &str,
) -> Result<JsValue, JsValue> {
    let key = parse_key(tonic, is_major)?;
    let kind = parse_pattern_kind(pattern_kind)?;
    let pattern = get_pattern(pattern_name, kind).map_err(theory_error)?;
    let described = label::describe(parse_note(note)?, &key, &pattern).map_err(theory_error)?;
    serialize(&described, "Failed to serialize note label")
}
