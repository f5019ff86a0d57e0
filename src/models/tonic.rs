//! Enumeration of spelled key roots
//!
//! Represents the 17 commonly used tonics in Western music:
//! - 7 natural tonics (C, D, E, F, G, A, B)
//! - 5 sharp tonics (C#, D#, F#, G#, A#)
//! - 5 flat tonics (Db, Eb, Gb, Ab, Bb)
//!
//! Enharmonic equivalents are listed separately (e.g., C# and Db) because
//! they result in different letter names for every derived note.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;
use crate::models::key::KeyQuality;
use crate::models::note::{Letter, Note};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tonic {
    C,
    #[serde(rename = "C#")]
    Cs,
    Db,
    D,
    #[serde(rename = "D#")]
    Ds,
    Eb,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    Gb,
    G,
    #[serde(rename = "G#")]
    Gs,
    Ab,
    A,
    #[serde(rename = "A#")]
    As,
    Bb,
    B,
}

/// Conventional major-key tonic for each pitch class (fewest accidentals)
const MAJOR_TONICS: [Tonic; 12] = [
    Tonic::C,
    Tonic::Db,
    Tonic::D,
    Tonic::Eb,
    Tonic::E,
    Tonic::F,
    Tonic::Fs,
    Tonic::G,
    Tonic::Ab,
    Tonic::A,
    Tonic::Bb,
    Tonic::B,
];

/// Conventional minor-key tonic for each pitch class (relative to the major table)
const MINOR_TONICS: [Tonic; 12] = [
    Tonic::C,
    Tonic::Cs,
    Tonic::D,
    Tonic::Eb,
    Tonic::E,
    Tonic::F,
    Tonic::Fs,
    Tonic::G,
    Tonic::Gs,
    Tonic::A,
    Tonic::Bb,
    Tonic::B,
];

impl Tonic {
    pub const ALL: [Tonic; 17] = [
        Tonic::C, Tonic::Cs, Tonic::Db, Tonic::D, Tonic::Ds,
        Tonic::Eb, Tonic::E, Tonic::F, Tonic::Fs, Tonic::Gb,
        Tonic::G, Tonic::Gs, Tonic::Ab, Tonic::A, Tonic::As,
        Tonic::Bb, Tonic::B,
    ];

    /// Convert tonic to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Tonic::C => "C",
            Tonic::Cs => "C#",
            Tonic::Db => "Db",
            Tonic::D => "D",
            Tonic::Ds => "D#",
            Tonic::Eb => "Eb",
            Tonic::E => "E",
            Tonic::F => "F",
            Tonic::Fs => "F#",
            Tonic::Gb => "Gb",
            Tonic::G => "G",
            Tonic::Gs => "G#",
            Tonic::Ab => "Ab",
            Tonic::A => "A",
            Tonic::As => "A#",
            Tonic::Bb => "Bb",
            Tonic::B => "B",
        }
    }

    pub fn letter(&self) -> Letter {
        match self {
            Tonic::C | Tonic::Cs => Letter::C,
            Tonic::Db | Tonic::D | Tonic::Ds => Letter::D,
            Tonic::Eb | Tonic::E => Letter::E,
            Tonic::F | Tonic::Fs => Letter::F,
            Tonic::Gb | Tonic::G | Tonic::Gs => Letter::G,
            Tonic::Ab | Tonic::A | Tonic::As => Letter::A,
            Tonic::Bb | Tonic::B => Letter::B,
        }
    }

    /// Accidental offset of the tonic itself (-1, 0 or +1)
    pub fn accidental(&self) -> i8 {
        match self {
            Tonic::Cs | Tonic::Ds | Tonic::Fs | Tonic::Gs | Tonic::As => 1,
            Tonic::Db | Tonic::Eb | Tonic::Gb | Tonic::Ab | Tonic::Bb => -1,
            _ => 0,
        }
    }

    /// Sounding pitch class of this tonic
    pub fn note(&self) -> Note {
        self.letter().natural().note_at(self.accidental() as i32)
    }

    /// Conventional spelling of a key root for the given quality
    pub fn for_note(note: Note, quality: KeyQuality) -> Tonic {
        let table = match quality {
            KeyQuality::Major => &MAJOR_TONICS,
            KeyQuality::Minor => &MINOR_TONICS,
        };
        table[note.index() as usize]
    }
}

impl fmt::Display for Tonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tonic {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-insensitive parsing
        match s.trim().to_uppercase().as_str() {
            "C" => Ok(Tonic::C),
            "C#" | "C♯" => Ok(Tonic::Cs),
            "DB" | "D♭" => Ok(Tonic::Db),
            "D" => Ok(Tonic::D),
            "D#" | "D♯" => Ok(Tonic::Ds),
            "EB" | "E♭" => Ok(Tonic::Eb),
            "E" => Ok(Tonic::E),
            "F" => Ok(Tonic::F),
            "F#" | "F♯" => Ok(Tonic::Fs),
            "GB" | "G♭" => Ok(Tonic::Gb),
            "G" => Ok(Tonic::G),
            "G#" | "G♯" => Ok(Tonic::Gs),
            "AB" | "A♭" => Ok(Tonic::Ab),
            "A" => Ok(Tonic::A),
            "A#" | "A♯" => Ok(Tonic::As),
            "BB" | "B♭" => Ok(Tonic::Bb),
            "B" => Ok(Tonic::B),
            _ => Err(TheoryError::InvalidNote(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_naturals_sharps_flats() {
        assert_eq!("C".parse::<Tonic>().unwrap(), Tonic::C);
        assert_eq!("G".parse::<Tonic>().unwrap(), Tonic::G);
        assert_eq!("F#".parse::<Tonic>().unwrap(), Tonic::Fs);
        assert_eq!("A#".parse::<Tonic>().unwrap(), Tonic::As);
        assert_eq!("Db".parse::<Tonic>().unwrap(), Tonic::Db);
        assert_eq!("Bb".parse::<Tonic>().unwrap(), Tonic::Bb);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("c".parse::<Tonic>().unwrap(), Tonic::C);
        assert_eq!("f#".parse::<Tonic>().unwrap(), Tonic::Fs);
        assert_eq!("bb".parse::<Tonic>().unwrap(), Tonic::Bb);
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("H".parse::<Tonic>().is_err());
        assert!("C###".parse::<Tonic>().is_err());
        assert!("Cb".parse::<Tonic>().is_err());
        assert!("".parse::<Tonic>().is_err());
    }

    #[test]
    fn test_letter_and_note() {
        assert_eq!(Tonic::Db.letter(), Letter::D);
        assert_eq!(Tonic::Db.note(), Tonic::Cs.note());
        assert_eq!(Tonic::Bb.note().index(), 10);
        assert_eq!(Tonic::E.accidental(), 0);
    }

    #[test]
    fn test_for_note_tables_round_trip_pitch() {
        for note in Note::all() {
            assert_eq!(Tonic::for_note(note, KeyQuality::Major).note(), note);
            assert_eq!(Tonic::for_note(note, KeyQuality::Minor).note(), note);
        }
        let cs: Note = "C#".parse().unwrap();
        assert_eq!(Tonic::for_note(cs, KeyQuality::Major), Tonic::Db);
        assert_eq!(Tonic::for_note(cs, KeyQuality::Minor), Tonic::Cs);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Tonic::Fs).unwrap();
        assert_eq!(json, "\"F#\"");

        let parsed: Tonic = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Tonic::Fs);
    }

    #[test]
    fn test_all_17_tonics_are_distinct_spellings() {
        let names: std::collections::HashSet<_> = Tonic::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(names.len(), 17);
    }
}
