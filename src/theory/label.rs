//! Per-note annotations handed to the renderer

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::TheoryError;
use crate::models::key::Key;
use crate::models::note::Note;
use crate::models::pattern::Pattern;
use crate::theory::degree::get_roman_numeral;
use crate::theory::engine::{get_degree, get_interval, spell_in_pattern};

/// Which annotation is drawn inside a note marker
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum LabelMode {
    /// Spelled note name (F#, Bb)
    #[default]
    NoteName = 0,

    /// Interval short name (m3, P5)
    Interval = 1,

    /// Ordinal position within the pattern (1, 2, 3...)
    Degree = 2,

    /// Movable-do syllable
    Solfege = 3,

    /// Roman numeral of the note's diatonic degree
    RomanNumeral = 4,
}

/// Everything the renderer may show for one pitch class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteLabel {
    pub note: Note,
    pub name: String,
    pub interval: String,
    pub interval_short_name: String,
    /// Ordinal within the pattern; `None` for notes added by hand
    pub degree: Option<usize>,
    pub solfege: String,
    pub roman_numeral: String,
    pub color: String,
    pub is_root: bool,
}

impl NoteLabel {
    /// Text for the chosen display mode
    pub fn text(&self, mode: LabelMode) -> String {
        match mode {
            LabelMode::NoteName => self.name.clone(),
            LabelMode::Interval => self.interval_short_name.clone(),
            LabelMode::Degree => self
                .degree
                .map(|d| d.to_string())
                .unwrap_or_else(|| self.interval.clone()),
            LabelMode::Solfege => self.solfege.clone(),
            LabelMode::RomanNumeral => self.roman_numeral.clone(),
        }
    }
}

/// Resolve every label of `note` against a key and pattern
pub fn describe(note: Note, key: &Key, pattern: &Pattern) -> Result<NoteLabel, TheoryError> {
    let interval = get_interval(key, note, Some(pattern));
    let spelled = spell_in_pattern(note, key, pattern)?;
    let roman_numeral = get_roman_numeral(interval.simple_degree(), key.is_major())?;

    Ok(NoteLabel {
        note,
        name: spelled.to_string(),
        interval: interval.token.to_string(),
        interval_short_name: interval.short_name.to_string(),
        degree: get_degree(key, note, pattern),
        solfege: interval.solfege.to_string(),
        roman_numeral,
        color: interval.color.to_string(),
        is_root: note == key.root(),
    })
}
