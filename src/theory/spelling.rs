//! Enharmonic spelling
//!
//! Instead of guessing sharps or flats from the pitch, every note is spelled
//! from a scale degree: the degree picks the letter (counted up from the
//! tonic's letter), and the accidental is whatever makes that letter sound
//! the right pitch. Distinct degrees therefore always get distinct letters.
//!
//! Example: in E major, degree 2 is F#. So "b2" = F natural, "#2" = F##.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TheoryError;
use crate::models::interval::Interval;
use crate::models::note::{Letter, Note};
use crate::models::tonic::Tonic;

/// Semitones of each major-scale degree above the tonic
pub const MAJOR_SCALE_STEPS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// A pitch with a definite letter name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpelledNote {
    pub letter: Letter,

    /// Net accidental: negative flats, positive sharps
    pub accidental: i8,
}

impl SpelledNote {
    pub fn new(letter: Letter, accidental: i8) -> Self {
        Self { letter, accidental }
    }

    /// Spell `note` on `letter`, picking the accidental in [-6, 5]
    pub fn on_letter(letter: Letter, note: Note) -> Self {
        let raw = letter.natural().distance(note) as i8;
        let accidental = if raw > 5 { raw - 12 } else { raw };
        Self { letter, accidental }
    }

    /// The sounding pitch class
    pub fn note(&self) -> Note {
        self.letter.natural().note_at(self.accidental as i32)
    }

    pub fn accidental_symbol(&self) -> String {
        match self.accidental {
            a if a > 0 => "#".repeat(a as usize),
            a if a < 0 => "b".repeat(a.unsigned_abs() as usize),
            _ => String::new(),
        }
    }
}

impl fmt::Display for SpelledNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_str(), self.accidental_symbol())
    }
}

/// Spelling of the major-scale note on `degree` (1-7) of `tonic`
pub fn expected_spelling(tonic: Tonic, degree: u8) -> Result<SpelledNote, TheoryError> {
    if !(1..=7).contains(&degree) {
        return Err(TheoryError::DegreeOutOfRange(degree));
    }
    let steps = (degree - 1) as usize;
    let letter = tonic.letter().step(steps);
    let pitch = tonic.note().note_at(MAJOR_SCALE_STEPS[steps] as i32);
    Ok(SpelledNote::on_letter(letter, pitch))
}

/// Spelling of an interval token above `tonic`
///
/// The token's degree gives the letter, its accidentals shift the major-scale
/// spelling of that degree ("b3" over Eb: G becomes Gb).
pub fn spell_interval(tonic: Tonic, interval: &Interval) -> SpelledNote {
    let steps = interval.letter_steps();
    let letter = tonic.letter().step(steps);
    let pitch = tonic.note().note_at(interval.semitones as i32);
    SpelledNote::on_letter(letter, pitch)
}
