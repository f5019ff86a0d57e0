//! Interval catalog
//!
//! Named intervals keyed by a short token ("1", "b3", "#4", "b5", ...).
//! Several tokens share a semitone distance ("#4" and "b5" are both 6), so
//! they are distinct entries: the token carries the letter-degree that the
//! spelling layer needs. Reverse lookup from a bare distance goes through
//! `CANONICAL_TOKENS`, which fixes exactly one token per distance.

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

use crate::error::TheoryError;
use crate::models::note::Note;

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    /// Canonical short token, e.g. "b3"
    pub token: &'static str,

    /// Distance above the root, modulo 12
    pub semitones: u8,

    /// Display name, e.g. "m3"
    pub short_name: &'static str,

    pub name: &'static str,

    /// Movable-do chromatic syllable
    pub solfege: &'static str,

    /// Default hex color used by styling
    pub color: &'static str,
}

impl Interval {
    /// Numeric degree of the token ("b13" -> 13)
    pub fn degree(&self) -> u8 {
        self.token
            .trim_start_matches(['b', '#'])
            .parse()
            .unwrap_or(1)
    }

    /// Net accidental on the token ("bb7" -> -2, "#4" -> 1)
    pub fn accidental(&self) -> i8 {
        self.token
            .chars()
            .map(|c| match c {
                '#' => 1,
                'b' => -1,
                _ => 0,
            })
            .sum()
    }

    /// Letter steps above the root: compound degrees fold into one octave
    pub fn letter_steps(&self) -> usize {
        (self.degree() as usize - 1) % 7
    }

    /// Degree folded into 1-7 ("9" -> 2, "13" -> 6)
    pub fn simple_degree(&self) -> u8 {
        self.letter_steps() as u8 + 1
    }

    pub fn is_compound(&self) -> bool {
        self.degree() > 7
    }
}

macro_rules! interval {
    ($token:expr, $semitones:expr, $short:expr, $name:expr, $solfege:expr, $color:expr) => {
        Interval {
            token: $token,
            semitones: $semitones,
            short_name: $short,
            name: $name,
            solfege: $solfege,
            color: $color,
        }
    };
}

/// Every interval the catalog knows, simple intervals first
pub static INTERVALS: [Interval; 23] = [
    interval!("1", 0, "R", "Unison", "Do", "#e74c3c"),
    interval!("b2", 1, "m2", "Minor second", "Ra", "#e67e22"),
    interval!("2", 2, "M2", "Major second", "Re", "#f39c12"),
    interval!("#2", 3, "A2", "Augmented second", "Ri", "#f1c40f"),
    interval!("b3", 3, "m3", "Minor third", "Me", "#d4ac0d"),
    interval!("3", 4, "M3", "Major third", "Mi", "#2ecc71"),
    interval!("4", 5, "P4", "Perfect fourth", "Fa", "#1abc9c"),
    interval!("#4", 6, "A4", "Augmented fourth", "Fi", "#16a085"),
    interval!("b5", 6, "d5", "Diminished fifth", "Se", "#48c9b0"),
    interval!("5", 7, "P5", "Perfect fifth", "Sol", "#3498db"),
    interval!("#5", 8, "A5", "Augmented fifth", "Si", "#2980b9"),
    interval!("b6", 8, "m6", "Minor sixth", "Le", "#5dade2"),
    interval!("6", 9, "M6", "Major sixth", "La", "#9b59b6"),
    interval!("bb7", 9, "d7", "Diminished seventh", "La", "#a569bd"),
    interval!("b7", 10, "m7", "Minor seventh", "Te", "#8e44ad"),
    interval!("7", 11, "M7", "Major seventh", "Ti", "#e84393"),
    interval!("b9", 1, "m9", "Minor ninth", "Ra", "#e67e22"),
    interval!("9", 2, "M9", "Major ninth", "Re", "#f39c12"),
    interval!("#9", 3, "A9", "Augmented ninth", "Ri", "#f1c40f"),
    interval!("11", 5, "P11", "Perfect eleventh", "Fa", "#1abc9c"),
    interval!("#11", 6, "A11", "Augmented eleventh", "Fi", "#16a085"),
    interval!("b13", 8, "m13", "Minor thirteenth", "Le", "#5dade2"),
    interval!("13", 9, "M13", "Major thirteenth", "La", "#9b59b6"),
];

/// The one token each semitone distance resolves to without pattern context
pub const CANONICAL_TOKENS: [&str; 12] = [
    "1", "b2", "2", "b3", "3", "4", "b5", "5", "b6", "6", "b7", "7",
];

lazy_static! {
    static ref INTERVAL_INDEX: HashMap<&'static str, &'static Interval> =
        INTERVALS.iter().map(|i| (i.token, i)).collect();
}

/// Look up an interval by its exact token
pub fn lookup(token: &str) -> Result<&'static Interval, TheoryError> {
    INTERVAL_INDEX
        .get(token.trim())
        .copied()
        .ok_or_else(|| TheoryError::UnknownInterval(token.to_string()))
}

/// Canonical interval for a semitone distance (taken modulo 12)
pub fn canonical(semitones: u8) -> &'static Interval {
    // Every canonical token is present in INTERVALS
    INTERVAL_INDEX[CANONICAL_TOKENS[(semitones % 12) as usize]]
}

/// Canonical interval from `root` up to `target`
pub fn interval_between(root: Note, target: Note) -> &'static Interval {
    canonical(root.distance(target))
}

/// All tokens, in catalog order
pub fn tokens() -> impl Iterator<Item = &'static str> {
    INTERVALS.iter().map(|i| i.token)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Semitones implied by a token's degree and accidentals over the major scale
    fn implied_semitones(interval: &Interval) -> u8 {
        const MAJOR: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];
        (MAJOR[interval.letter_steps()] + interval.accidental() as i32).rem_euclid(12) as u8
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        assert_eq!(lookup("b3").unwrap().semitones, 3);
        assert_eq!(lookup("#4").unwrap().short_name, "A4");
        assert_eq!(lookup(" 5 ").unwrap().token, "5");
        assert_eq!(lookup("b4"), Err(TheoryError::UnknownInterval("b4".to_string())));
        assert_eq!(lookup(""), Err(TheoryError::UnknownInterval(String::new())));
    }

    #[test]
    fn test_aliases_are_distinct_entries() {
        let sharp_four = lookup("#4").unwrap();
        let flat_five = lookup("b5").unwrap();
        assert_eq!(sharp_four.semitones, flat_five.semitones);
        assert_ne!(sharp_four.token, flat_five.token);
        assert_ne!(sharp_four.short_name, flat_five.short_name);
    }

    #[test]
    fn test_catalog_semitones_agree_with_token_spelling() {
        for interval in INTERVALS.iter() {
            assert_eq!(
                interval.semitones,
                implied_semitones(interval),
                "token {} disagrees with its semitone count",
                interval.token
            );
        }
    }

    #[test]
    fn test_canonical_token_per_distance() {
        for semitones in 0..12u8 {
            let interval = canonical(semitones);
            assert_eq!(interval.semitones, semitones);
            assert!(!interval.is_compound());
        }
        assert_eq!(canonical(6).token, "b5");
        assert_eq!(canonical(13).token, "b2");
    }

    #[test]
    fn test_interval_between() {
        assert_eq!(interval_between(Note::C, Note::F).token, "4");
        assert_eq!(interval_between(Note::G, Note::F).token, "b7");
        assert_eq!(interval_between(Note::E, Note::E).token, "1");
    }

    #[test]
    fn test_degree_parsing() {
        let flat_thirteen = lookup("b13").unwrap();
        assert_eq!(flat_thirteen.degree(), 13);
        assert_eq!(flat_thirteen.simple_degree(), 6);
        assert_eq!(flat_thirteen.accidental(), -1);
        assert_eq!(lookup("bb7").unwrap().accidental(), -2);
        assert_eq!(lookup("9").unwrap().letter_steps(), 1);
    }

    #[test]
    fn test_tokens_are_unique() {
        let unique: std::collections::HashSet<_> = tokens().collect();
        assert_eq!(unique.len(), INTERVALS.len());
    }
}
