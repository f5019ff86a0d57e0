//! Theory engine
//!
//! Pure functions of (key, pattern). Nothing here holds state: the catalogs
//! are read-only and everything else is recomputed on each call.

use crate::error::TheoryError;
use crate::models::interval::{self, Interval};
use crate::models::key::Key;
use crate::models::note::Note;
use crate::models::pattern::{get_pattern, Pattern, PatternKind};
use crate::theory::spelling::{expected_spelling, spell_interval, SpelledNote, MAJOR_SCALE_STEPS};

/// Notes of a pattern above the key's root, in pattern order
pub fn get_pattern_notes(key: &Key, pattern: &Pattern) -> Result<Vec<Note>, TheoryError> {
    pattern
        .resolved_intervals()
        .map(|intervals| {
            intervals
                .iter()
                .map(|i| key.root().note_at(i.semitones as i32))
                .collect()
        })
}

/// Notes of a catalog scale, ascending by degree
pub fn get_scale_notes(key: &Key, scale_name: &str) -> Result<Vec<Note>, TheoryError> {
    get_pattern_notes(key, &get_pattern(scale_name, PatternKind::Scale)?)
}

/// Notes of a catalog chord, root first
pub fn get_chord_notes(key: &Key, chord_name: &str) -> Result<Vec<Note>, TheoryError> {
    get_pattern_notes(key, &get_pattern(chord_name, PatternKind::Chord)?)
}

pub fn get_note_from_interval(key: &Key, token: &str) -> Result<Note, TheoryError> {
    let interval = interval::lookup(token)?;
    Ok(key.root().note_at(interval.semitones as i32))
}

/// Interval from the key's root to `note`
///
/// With a pattern in context, the token that pattern uses for this distance
/// wins ("#4" in lydian, "b5" in locrian). Otherwise the catalog's canonical
/// token for the distance is returned.
pub fn get_interval(key: &Key, note: Note, context: Option<&Pattern>) -> &'static Interval {
    let semitones = key.root().distance(note);
    if let Some(pattern) = context {
        if let Some(interval) = pattern.token_for_semitones(semitones) {
            return interval;
        }
        log::debug!(
            "{} is outside {} {}, using canonical interval",
            note,
            pattern.id,
            pattern.kind
        );
    }
    interval::canonical(semitones)
}

/// 1-based ordinal of `note` within the pattern, if it belongs to it
pub fn get_degree(key: &Key, note: Note, pattern: &Pattern) -> Option<usize> {
    pattern.position_of_semitones(key.root().distance(note))
}

/// The note the major scale on the key's tonic puts on `degree` (1-7)
pub fn get_expected_note_for_degree(key: &Key, degree: u8) -> Result<Note, TheoryError> {
    if !(1..=7).contains(&degree) {
        return Err(TheoryError::DegreeOutOfRange(degree));
    }
    Ok(key
        .root()
        .note_at(MAJOR_SCALE_STEPS[(degree - 1) as usize] as i32))
}

/// `get_note_from_interval` with the letter the token's degree calls for
pub fn spell_note_from_interval(key: &Key, token: &str) -> Result<SpelledNote, TheoryError> {
    Ok(spell_interval(key.tonic, interval::lookup(token)?))
}

/// `get_expected_note_for_degree` spelled on the degree's letter
pub fn spell_expected_note_for_degree(key: &Key, degree: u8) -> Result<SpelledNote, TheoryError> {
    expected_spelling(key.tonic, degree)
}

/// Letter-correct spelling of every pattern note, in pattern order
pub fn get_spelled_pattern_notes(key: &Key, pattern: &Pattern) -> Result<Vec<SpelledNote>, TheoryError> {
    Ok(pattern
        .resolved_intervals()?
        .into_iter()
        .map(|i| spell_interval(key.tonic, i))
        .collect())
}

/// Spelling of `note` against an already-resolved pattern
pub fn spell_in_pattern(note: Note, key: &Key, pattern: &Pattern) -> Result<SpelledNote, TheoryError> {
    let interval = get_interval(key, note, Some(pattern));
    match pattern.kind {
        PatternKind::Interval => {
            // Major-scale spelling of the degree, shifted by the token's accidentals
            let expected = expected_spelling(key.tonic, interval.simple_degree())?;
            Ok(SpelledNote::new(expected.letter, expected.accidental + interval.accidental()))
        }
        PatternKind::Scale | PatternKind::Chord => {
            let spelled = get_spelled_pattern_notes(key, pattern)?;
            Ok(spelled
                .into_iter()
                .find(|s| s.note() == note)
                .unwrap_or_else(|| spell_interval(key.tonic, interval)))
        }
    }
}

/// Display name of `note` for the given key and pattern
pub fn spell(note: Note, key: &Key, kind: PatternKind, pattern_name: &str) -> Result<String, TheoryError> {
    let pattern = get_pattern(pattern_name, kind)?;
    Ok(spell_in_pattern(note, key, &pattern)?.to_string())
}
