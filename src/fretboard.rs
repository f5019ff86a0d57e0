//! Fretboard position mapper
//!
//! Maps (string, fret) to a pitch class from the tuning alone, then joins
//! that with the active note set so the renderer gets one record per
//! position it has to draw.

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::models::key::Key;
use crate::models::note::Note;
use crate::models::pattern::Pattern;
use crate::models::tuning::Tuning;
use crate::theory::active::ActiveNoteSet;
use crate::theory::label::{describe, LabelMode, NoteLabel};

/// Inclusive fret range; fret 0 is the open string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FretRange {
    pub start_fret: u8,
    pub end_fret: u8,
}

impl FretRange {
    pub fn new(start_fret: u8, end_fret: u8) -> Result<Self, TheoryError> {
        if end_fret < start_fret {
            return Err(TheoryError::InvalidFretRange {
                start: start_fret,
                end: end_fret,
            });
        }
        Ok(Self { start_fret, end_fret })
    }

    pub fn frets(&self) -> impl Iterator<Item = u8> {
        self.start_fret..=self.end_fret
    }

    pub fn len(&self) -> usize {
        (self.end_fret - self.start_fret) as usize + 1
    }
}

/// Note sounding at `fret` on string `string_index` (0 = highest string)
pub fn note_at_position(tuning: &Tuning, string_index: usize, fret: u32) -> Result<Note, TheoryError> {
    Ok(tuning.open_note(string_index)?.note_at((fret % 12) as i32))
}

/// Every (string, fret) in range where `note` sounds
pub fn positions_of(tuning: &Tuning, range: FretRange, note: Note) -> Vec<(usize, u8)> {
    tuning
        .strings
        .iter()
        .enumerate()
        .flat_map(|(string_index, open)| {
            range
                .frets()
                .filter(move |&fret| open.note_at(fret as i32) == note)
                .map(move |fret| (string_index, fret))
        })
        .collect()
}

/// One drawable position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FretAnnotation {
    pub string_index: usize,
    pub fret: u8,
    pub note: Note,
    pub active: bool,
    /// Text for the configured label mode; empty for inactive positions
    pub text: String,
    /// Full label set for active positions
    pub label: Option<NoteLabel>,
}

/// Annotate every position in range, string by string
pub fn annotate(
    tuning: &Tuning,
    range: FretRange,
    key: &Key,
    pattern: &Pattern,
    active: &ActiveNoteSet,
    mode: LabelMode,
) -> Result<Vec<FretAnnotation>, TheoryError> {
    if tuning.strings.is_empty() {
        return Err(TheoryError::EmptyTuning);
    }

    // Labels depend only on the pitch class
    let mut labels: [Option<NoteLabel>; 12] = Default::default();
    for note in active.notes() {
        labels[note.index() as usize] = Some(describe(note, key, pattern)?);
    }

    let mut annotations = Vec::with_capacity(tuning.string_count() * range.len());
    for string_index in 0..tuning.string_count() {
        for fret in range.frets() {
            let note = note_at_position(tuning, string_index, fret as u32)?;
            let label = labels[note.index() as usize].clone();
            annotations.push(FretAnnotation {
                string_index,
                fret,
                note,
                active: label.is_some(),
                text: label.as_ref().map(|l| l.text(mode)).unwrap_or_default(),
                label,
            });
        }
    }

    log::debug!(
        "Annotated {} positions ({} strings, frets {}..={}) for {} {}",
        annotations.len(),
        tuning.string_count(),
        range.start_fret,
        range.end_fret,
        key,
        pattern.id
    );

    Ok(annotations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pattern::{get_pattern, PatternKind};
    use crate::models::tonic::Tonic;
    use crate::models::tuning::standard_guitar;

    #[test]
    fn test_high_e_third_fret_is_g() {
        let tuning = standard_guitar();
        assert_eq!(note_at_position(&tuning, 0, 3).unwrap(), Note::G);
    }

    #[test]
    fn test_twelfth_fret_is_open_string() {
        let tuning = standard_guitar();
        for string in 0..tuning.string_count() {
            assert_eq!(
                note_at_position(&tuning, string, 12).unwrap(),
                note_at_position(&tuning, string, 0).unwrap()
            );
            assert_eq!(
                note_at_position(&tuning, string, 29).unwrap(),
                note_at_position(&tuning, string, 5).unwrap()
            );
        }
    }

    #[test]
    fn test_string_out_of_range() {
        assert_eq!(
            note_at_position(&standard_guitar(), 7, 0),
            Err(TheoryError::StringOutOfRange { index: 7, strings: 6 })
        );
    }

    #[test]
    fn test_fret_range_validation() {
        assert_eq!(
            FretRange::new(5, 3),
            Err(TheoryError::InvalidFretRange { start: 5, end: 3 })
        );
        assert_eq!(FretRange::new(3, 3).unwrap().len(), 1);
    }

    #[test]
    fn test_positions_of() {
        let range = FretRange::new(0, 5).unwrap();
        let positions = positions_of(&standard_guitar(), range, Note::A);
        assert_eq!(positions, vec![(0, 5), (2, 2), (4, 0), (5, 5)]);
    }

    #[test]
    fn test_annotate_c_major_first_position() {
        let key = Key::major(Tonic::C);
        let pattern = get_pattern("major", PatternKind::Scale).unwrap();
        let active = ActiveNoteSet::from_pattern(&key, &pattern).unwrap();
        let range = FretRange::new(0, 3).unwrap();

        let annotations =
            annotate(&standard_guitar(), range, &key, &pattern, &active, LabelMode::Interval).unwrap();
        assert_eq!(annotations.len(), 6 * 4);

        // B string, first fret is C
        let c = annotations
            .iter()
            .find(|a| a.string_index == 1 && a.fret == 1)
            .unwrap();
        assert!(c.active);
        assert_eq!(c.text, "R");
        assert!(c.label.as_ref().unwrap().is_root);

        // High E string, second fret is F#: not in C major
        let f_sharp = annotations
            .iter()
            .find(|a| a.string_index == 0 && a.fret == 2)
            .unwrap();
        assert!(!f_sharp.active);
        assert!(f_sharp.text.is_empty());
        assert!(f_sharp.label.is_none());
    }

    #[test]
    fn test_annotate_empty_tuning() {
        let key = Key::major(Tonic::C);
        let pattern = get_pattern("major", PatternKind::Chord).unwrap();
        let active = ActiveNoteSet::from_pattern(&key, &pattern).unwrap();
        let tuning = Tuning { strings: vec![] };
        assert_eq!(
            annotate(&tuning, FretRange::new(0, 1).unwrap(), &key, &pattern, &active, LabelMode::NoteName),
            Err(TheoryError::EmptyTuning)
        );
    }
}
