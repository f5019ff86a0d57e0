//! Instrument tunings
//!
//! Strings are listed from the highest-pitched string (index 0) to the
//! lowest, matching how the diagram is drawn top to bottom.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::models::note::Note;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuning {
    pub strings: Vec<Note>,
}

impl Tuning {
    /// Parse note names into a tuning, rejecting unknown names and empty lists
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Tuning, TheoryError> {
        if names.is_empty() {
            return Err(TheoryError::EmptyTuning);
        }
        let strings = names
            .iter()
            .map(|n| n.as_ref().parse::<Note>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Tuning { strings })
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Open-string note, or `StringOutOfRange`
    pub fn open_note(&self, string_index: usize) -> Result<Note, TheoryError> {
        self.strings
            .get(string_index)
            .copied()
            .ok_or(TheoryError::StringOutOfRange {
                index: string_index,
                strings: self.strings.len(),
            })
    }
}

impl Default for Tuning {
    fn default() -> Self {
        standard_guitar()
    }
}

/// A named tuning offered to the selection controls
#[derive(Debug, Clone, Serialize)]
pub struct TuningPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub strings: &'static [&'static str],
}

impl TuningPreset {
    pub fn tuning(&self) -> Result<Tuning, TheoryError> {
        Tuning::parse(self.strings)
    }
}

static PRESETS: Lazy<Vec<TuningPreset>> = Lazy::new(|| {
    vec![
        TuningPreset { id: "guitar_standard", name: "Guitar (Standard)", strings: &["E", "B", "G", "D", "A", "E"] },
        TuningPreset { id: "guitar_drop_d", name: "Guitar (Drop D)", strings: &["E", "B", "G", "D", "A", "D"] },
        TuningPreset { id: "guitar_dadgad", name: "Guitar (DADGAD)", strings: &["D", "A", "G", "D", "A", "D"] },
        TuningPreset { id: "guitar_open_g", name: "Guitar (Open G)", strings: &["D", "B", "G", "D", "G", "D"] },
        TuningPreset { id: "guitar_7_string", name: "Guitar (7-String)", strings: &["E", "B", "G", "D", "A", "E", "B"] },
        TuningPreset { id: "bass_4", name: "Bass (4-String)", strings: &["G", "D", "A", "E"] },
        TuningPreset { id: "bass_5", name: "Bass (5-String)", strings: &["G", "D", "A", "E", "B"] },
        TuningPreset { id: "ukulele", name: "Ukulele (GCEA)", strings: &["A", "E", "C", "G"] },
        TuningPreset { id: "mandolin", name: "Mandolin", strings: &["E", "A", "D", "G"] },
        TuningPreset { id: "banjo_open_g", name: "Banjo (Open G)", strings: &["D", "B", "G", "D", "G"] },
    ]
});

pub fn presets() -> &'static [TuningPreset] {
    &PRESETS
}

/// Find a preset by id
pub fn preset(id: &str) -> Option<&'static TuningPreset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// E B G D A E
pub fn standard_guitar() -> Tuning {
    Tuning {
        strings: vec![Note::E, Note::B, Note::G, Note::D, Note::A, Note::E],
    }
}
