//! Pitch model: the 12-tone chromatic space
//!
//! Arithmetic is always done on the pitch-class integer modulo 12. Display
//! spelling (sharp vs flat) is a separate lookup and is never inferred from
//! the arithmetic itself; see `theory::spelling` for context-aware spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;

/// Primary (sharp) spelling of each pitch class
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Alternate (flat) spelling of each pitch class
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// One of the 12 pitch classes, independent of octave (0 = C, 11 = B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Note(u8);

impl Note {
    pub const C: Note = Note(0);
    pub const D: Note = Note(2);
    pub const E: Note = Note(4);
    pub const F: Note = Note(5);
    pub const G: Note = Note(7);
    pub const A: Note = Note(9);
    pub const B: Note = Note(11);

    /// Create a note from any integer, wrapping into 0-11
    pub fn new(index: i32) -> Self {
        Note(index.rem_euclid(12) as u8)
    }

    /// Pitch-class index (0-11)
    pub fn index(self) -> u8 {
        self.0
    }

    /// The note `offset` semitones away (negative offsets go down)
    pub fn note_at(self, offset: i32) -> Note {
        Note::new(self.0 as i32 + offset)
    }

    /// Semitones upward from `self` to `to`, always in [0, 11]
    pub fn distance(self, to: Note) -> u8 {
        (to.0 as i32 - self.0 as i32).rem_euclid(12) as u8
    }

    pub fn sharp_name(self) -> &'static str {
        SHARP_NAMES[self.0 as usize]
    }

    pub fn flat_name(self) -> &'static str {
        FLAT_NAMES[self.0 as usize]
    }

    /// All 12 pitch classes in ascending order starting from C
    pub fn all() -> impl Iterator<Item = Note> {
        (0..12).map(Note)
    }
}

/// `(index(root) + offset) mod 12`, wrapping for negative offsets
pub fn note_at(root: Note, offset: i32) -> Note {
    root.note_at(offset)
}

/// Unique `k` in [0, 11] such that `note_at(from, k) == to`
pub fn distance(from: Note, to: Note) -> u8 {
    from.distance(to)
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sharp_name())
    }
}

/// Natural letter names, in staff order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

const LETTERS: [Letter; 7] = [
    Letter::C,
    Letter::D,
    Letter::E,
    Letter::F,
    Letter::G,
    Letter::A,
    Letter::B,
];

impl Letter {
    /// Position in C D E F G A B (0-6)
    pub fn index(self) -> usize {
        self as usize
    }

    /// The natural pitch class carrying this letter
    pub fn natural(self) -> Note {
        match self {
            Letter::C => Note(0),
            Letter::D => Note(2),
            Letter::E => Note(4),
            Letter::F => Note(5),
            Letter::G => Note(7),
            Letter::A => Note(9),
            Letter::B => Note(11),
        }
    }

    /// Letter `steps` staff positions above this one (wraps after B)
    pub fn step(self, steps: usize) -> Letter {
        LETTERS[(self.index() + steps) % 7]
    }

    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        }
    }
}

/// Split a note name into its letter and accidental offset
///
/// Accepts `#`/`♯` for sharps and `b`/`♭` for flats, repeated any number of
/// times ("F##", "Bbb"). Surrounding whitespace is ignored.
pub fn parse_spelling(s: &str) -> Result<(Letter, i8), TheoryError> {
    let trimmed = s.trim();
    let mut chars = trimmed.chars();
    let letter = chars
        .next()
        .and_then(Letter::from_char)
        .ok_or_else(|| TheoryError::InvalidNote(s.to_string()))?;

    let mut accidental: i8 = 0;
    for c in chars {
        match c {
            '#' | '♯' => accidental += 1,
            'b' | '♭' => accidental -= 1,
            _ => return Err(TheoryError::InvalidNote(s.to_string())),
        }
        if accidental.abs() > 2 {
            return Err(TheoryError::InvalidNote(s.to_string()));
        }
    }

    Ok((letter, accidental))
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (letter, accidental) = parse_spelling(s)?;
        Ok(letter.natural().note_at(accidental as i32))
    }
}

impl TryFrom<String> for Note {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.sharp_name().to_string()
    }
}
