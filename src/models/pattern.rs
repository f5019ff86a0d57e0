//! Pattern catalog (scales, chords, single intervals)
//!
//! A pattern is an ordered list of interval tokens counted from the root.
//! The catalog is the single source of truth for scale and chord
//! definitions: adding one is an edit to `predefined_patterns`, nothing else.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;
use crate::models::interval::{self, Interval};
use crate::models::key::KeyQuality;

/// What kind of pattern is displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    #[default]
    Scale,
    Chord,
    /// Root plus one interval; the pattern name is the interval token
    Interval,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Scale => "scale",
            PatternKind::Chord => "chord",
            PatternKind::Interval => "interval",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PatternKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scale" => Ok(PatternKind::Scale),
            "chord" => Ok(PatternKind::Chord),
            "interval" => Ok(PatternKind::Interval),
            _ => Err(format!(
                "Invalid pattern kind: '{}'. Expected one of: scale, chord, interval",
                s
            )),
        }
    }
}

/// A scale, chord or interval definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Unique identifier within its kind ("major", "m7b5", ...)
    pub id: String,

    /// Display name
    pub name: String,

    pub kind: PatternKind,

    /// Interval tokens, root first
    pub intervals: Vec<String>,

    pub description: Option<String>,
}

impl Pattern {
    /// Root plus a single interval, validated against the catalog
    pub fn interval(token: &str) -> Result<Pattern, TheoryError> {
        let interval = interval::lookup(token)?;
        let intervals = if interval.semitones == 0 && !interval.is_compound() {
            vec!["1".to_string()]
        } else {
            vec!["1".to_string(), interval.token.to_string()]
        };
        Ok(Pattern {
            id: interval.token.to_string(),
            name: interval.name.to_string(),
            kind: PatternKind::Interval,
            intervals,
            description: None,
        })
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Catalog entries for every token, in pattern order
    pub fn resolved_intervals(&self) -> Result<Vec<&'static Interval>, TheoryError> {
        self.intervals.iter().map(|t| interval::lookup(t)).collect()
    }

    /// The token this pattern assigns to a semitone distance, if any
    pub fn token_for_semitones(&self, semitones: u8) -> Option<&'static Interval> {
        self.intervals
            .iter()
            .filter_map(|t| interval::lookup(t).ok())
            .find(|i| i.semitones == semitones % 12)
    }

    /// 1-based position of the token with this semitone distance
    pub fn position_of_semitones(&self, semitones: u8) -> Option<usize> {
        self.intervals
            .iter()
            .position(|t| {
                interval::lookup(t)
                    .map(|i| i.semitones == semitones % 12)
                    .unwrap_or(false)
            })
            .map(|idx| idx + 1)
    }

    /// True when no two tokens fold onto the same letter degree
    pub fn has_distinct_degrees(&self) -> bool {
        let mut seen = [false; 7];
        for interval in self.intervals.iter().filter_map(|t| interval::lookup(t).ok()) {
            let steps = interval.letter_steps();
            if seen[steps] {
                return false;
            }
            seen[steps] = true;
        }
        true
    }

    /// Minor when the pattern carries a minor third and no major third
    pub fn quality(&self) -> KeyQuality {
        let has = |token: &str| self.intervals.iter().any(|t| t == token);
        if has("b3") && !has("3") {
            KeyQuality::Minor
        } else {
            KeyQuality::Major
        }
    }
}

fn pattern(kind: PatternKind, id: &str, name: &str, tokens: &str, description: Option<&str>) -> Pattern {
    Pattern {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        intervals: tokens.split_whitespace().map(str::to_string).collect(),
        description: description.map(str::to_string),
    }
}

fn scale(id: &str, name: &str, tokens: &str, description: &str) -> Pattern {
    pattern(PatternKind::Scale, id, name, tokens, Some(description))
}

fn chord(id: &str, name: &str, tokens: &str) -> Pattern {
    pattern(PatternKind::Chord, id, name, tokens, None)
}

/// Get all predefined scales and chords
pub fn predefined_patterns() -> Vec<Pattern> {
    vec![
        // WESTERN MODES
        scale("major", "Major (Ionian)", "1 2 3 4 5 6 7", "Major scale, basis for Western music"),
        scale("minor", "Natural Minor (Aeolian)", "1 2 b3 4 5 b6 b7", "Standard natural minor scale"),
        scale("dorian", "Dorian", "1 2 b3 4 5 6 b7", "Minor mode with major 6th"),
        scale("phrygian", "Phrygian", "1 b2 b3 4 5 b6 b7", "Minor mode with minor 2nd"),
        scale("lydian", "Lydian", "1 2 3 #4 5 6 7", "Major mode with augmented 4th"),
        scale("mixolydian", "Mixolydian", "1 2 3 4 5 6 b7", "Major mode with minor 7th"),
        scale("locrian", "Locrian", "1 b2 b3 4 b5 b6 b7", "Only mode with diminished 5th"),

        // MINOR VARIANTS AND DOMINANT SCALES
        scale("harmonic_minor", "Harmonic Minor", "1 2 b3 4 5 b6 7", "Natural minor with raised 7th"),
        scale("melodic_minor", "Melodic Minor", "1 2 b3 4 5 6 7", "Natural minor with raised 6th and 7th"),
        scale("phrygian_dominant", "Phrygian Dominant", "1 b2 3 4 5 b6 b7", "Phrygian with major 3rd"),
        scale("lydian_dominant", "Lydian Dominant", "1 2 3 #4 5 6 b7", "Lydian with minor 7th"),

        // PENTATONIC, BLUES, SYMMETRIC
        scale("major_pentatonic", "Major Pentatonic", "1 2 3 5 6", "Major scale without 4th and 7th"),
        scale("minor_pentatonic", "Minor Pentatonic", "1 b3 4 5 b7", "Natural minor without 2nd and 6th"),
        scale("blues", "Blues", "1 b3 4 b5 5 b7", "Minor pentatonic with added flat 5th"),
        scale("whole_tone", "Whole Tone", "1 2 3 #4 #5 b7", "Six whole steps"),

        // TRIADS
        chord("major", "Major", "1 3 5"),
        chord("minor", "Minor", "1 b3 5"),
        chord("diminished", "Diminished", "1 b3 b5"),
        chord("augmented", "Augmented", "1 3 #5"),
        chord("sus2", "Suspended 2nd", "1 2 5"),
        chord("sus4", "Suspended 4th", "1 4 5"),
        chord("power", "Power (5)", "1 5"),

        // SIXTHS AND SEVENTHS
        chord("6", "Major 6th", "1 3 5 6"),
        chord("m6", "Minor 6th", "1 b3 5 6"),
        chord("7", "Dominant 7th", "1 3 5 b7"),
        chord("maj7", "Major 7th", "1 3 5 7"),
        chord("m7", "Minor 7th", "1 b3 5 b7"),
        chord("mmaj7", "Minor Major 7th", "1 b3 5 7"),
        chord("m7b5", "Half-Diminished 7th", "1 b3 b5 b7"),
        chord("dim7", "Diminished 7th", "1 b3 b5 bb7"),
        chord("aug7", "Augmented 7th", "1 3 #5 b7"),
        chord("7sus4", "Dominant 7th sus4", "1 4 5 b7"),

        // EXTENDED
        chord("add9", "Add 9", "1 3 5 9"),
        chord("9", "Dominant 9th", "1 3 5 b7 9"),
        chord("maj9", "Major 9th", "1 3 5 7 9"),
        chord("m9", "Minor 9th", "1 b3 5 b7 9"),
        chord("7b9", "Dominant 7th flat 9", "1 3 5 b7 b9"),
        chord("7#9", "Dominant 7th sharp 9", "1 3 5 b7 #9"),
        chord("11", "Dominant 11th", "1 3 5 b7 9 11"),
        chord("13", "Dominant 13th", "1 3 5 b7 9 13"),
        chord("maj7#11", "Major 7th sharp 11", "1 3 5 7 #11"),
    ]
}

lazy_static! {
    static ref PATTERNS: Vec<Pattern> = predefined_patterns();
    static ref PATTERN_INDEX: HashMap<(PatternKind, String), usize> = PATTERNS
        .iter()
        .enumerate()
        .map(|(idx, p)| ((p.kind, p.id.to_lowercase()), idx))
        .collect();
}

/// Look up a pattern by id (case-insensitive) or display name
///
/// For `PatternKind::Interval` the name is an interval token and the pattern
/// is built on the fly.
pub fn get_pattern(name: &str, kind: PatternKind) -> Result<Pattern, TheoryError> {
    if kind == PatternKind::Interval {
        return Pattern::interval(name);
    }

    let wanted = name.trim().to_lowercase();
    PATTERN_INDEX
        .get(&(kind, wanted.clone()))
        .map(|&idx| &PATTERNS[idx])
        .or_else(|| {
            PATTERNS
                .iter()
                .find(|p| p.kind == kind && p.name.to_lowercase() == wanted)
        })
        .cloned()
        .ok_or_else(|| TheoryError::UnknownPattern {
            name: name.to_string(),
            kind,
        })
}

/// Ids of every pattern of the given kind, in catalog order
pub fn pattern_ids(kind: PatternKind) -> Vec<&'static str> {
    PATTERNS
        .iter()
        .filter(|p| p.kind == kind)
        .map(|p| p.id.as_str())
        .collect()
}

pub fn scale_names() -> Vec<&'static str> {
    pattern_ids(PatternKind::Scale)
}

pub fn chord_names() -> Vec<&'static str> {
    pattern_ids(PatternKind::Chord)
}

/// Every predefined pattern of the given kind
pub fn patterns_of_kind(kind: PatternKind) -> impl Iterator<Item = &'static Pattern> {
    PATTERNS.iter().filter(move |p| p.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_starts_at_root_with_known_tokens() {
        for p in predefined_patterns() {
            assert_eq!(p.intervals.first().map(String::as_str), Some("1"), "{}", p.id);
            assert!(p.resolved_intervals().is_ok(), "{} has unknown tokens", p.id);
        }
    }

    #[test]
    fn test_semitone_offsets_are_distinct() {
        for p in predefined_patterns() {
            let mut semitones: Vec<u8> = p
                .resolved_intervals()
                .unwrap()
                .iter()
                .map(|i| i.semitones)
                .collect();
            let len = semitones.len();
            semitones.sort();
            semitones.dedup();
            assert_eq!(semitones.len(), len, "{} repeats a pitch class", p.id);
        }
    }

    #[test]
    fn test_ids_unique_per_kind() {
        let patterns = predefined_patterns();
        let mut keys: Vec<(PatternKind, &str)> =
            patterns.iter().map(|p| (p.kind, p.id.as_str())).collect();
        let len = keys.len();
        keys.sort_by_key(|(k, id)| (k.as_str(), *id));
        keys.dedup();
        assert_eq!(keys.len(), len, "Duplicate pattern ids found");
    }

    #[test]
    fn test_get_pattern_by_kind() {
        let scale = get_pattern("major", PatternKind::Scale).unwrap();
        let chord = get_pattern("major", PatternKind::Chord).unwrap();
        assert_eq!(scale.len(), 7);
        assert_eq!(chord.intervals, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_get_pattern_case_insensitive_and_by_name() {
        assert_eq!(get_pattern("Dorian", PatternKind::Scale).unwrap().id, "dorian");
        assert_eq!(get_pattern("Half-Diminished 7th", PatternKind::Chord).unwrap().id, "m7b5");
    }

    #[test]
    fn test_unknown_pattern() {
        assert_eq!(
            get_pattern("hungarian_gypsy", PatternKind::Scale),
            Err(TheoryError::UnknownPattern {
                name: "hungarian_gypsy".to_string(),
                kind: PatternKind::Scale,
            })
        );
        // Chord ids are not visible as scales
        assert!(get_pattern("m7", PatternKind::Scale).is_err());
    }

    #[test]
    fn test_interval_patterns() {
        let p = get_pattern("b3", PatternKind::Interval).unwrap();
        assert_eq!(p.intervals, vec!["1", "b3"]);
        assert_eq!(get_pattern("1", PatternKind::Interval).unwrap().intervals, vec!["1"]);
        assert_eq!(
            get_pattern("b4", PatternKind::Interval),
            Err(TheoryError::UnknownInterval("b4".to_string()))
        );
    }

    #[test]
    fn test_quality_from_third() {
        assert_eq!(get_pattern("dorian", PatternKind::Scale).unwrap().quality(), KeyQuality::Minor);
        assert_eq!(get_pattern("7", PatternKind::Chord).unwrap().quality(), KeyQuality::Major);
        assert_eq!(get_pattern("sus4", PatternKind::Chord).unwrap().quality(), KeyQuality::Major);
    }

    #[test]
    fn test_token_and_position_lookup() {
        let lydian = get_pattern("lydian", PatternKind::Scale).unwrap();
        assert_eq!(lydian.token_for_semitones(6).unwrap().token, "#4");
        assert_eq!(lydian.position_of_semitones(6), Some(4));
        assert_eq!(lydian.position_of_semitones(5), None);
    }

    #[test]
    fn test_distinct_degrees() {
        assert!(get_pattern("major", PatternKind::Scale).unwrap().has_distinct_degrees());
        assert!(get_pattern("13", PatternKind::Chord).unwrap().has_distinct_degrees());
        assert!(!get_pattern("blues", PatternKind::Scale).unwrap().has_distinct_degrees());
    }

    #[test]
    fn test_enumeration() {
        assert!(scale_names().contains(&"minor_pentatonic"));
        assert!(chord_names().contains(&"dim7"));
        assert!(!scale_names().contains(&"dim7"));
    }
}
