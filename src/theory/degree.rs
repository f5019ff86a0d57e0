//! Roman numerals and solfège for scale degrees

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::models::interval::Interval;

/// Triad quality built on a diatonic degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriadQuality {
    Major,
    Minor,
    Diminished,
}

const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Triads of the major scale, degree 1 first
const MAJOR_TEMPLATE: [TriadQuality; 7] = [
    TriadQuality::Major,
    TriadQuality::Minor,
    TriadQuality::Minor,
    TriadQuality::Major,
    TriadQuality::Major,
    TriadQuality::Minor,
    TriadQuality::Diminished,
];

/// Triads of the natural minor scale, degree 1 first
const MINOR_TEMPLATE: [TriadQuality; 7] = [
    TriadQuality::Minor,
    TriadQuality::Diminished,
    TriadQuality::Major,
    TriadQuality::Minor,
    TriadQuality::Minor,
    TriadQuality::Major,
    TriadQuality::Major,
];

/// Diatonic syllables of the major scale (movable do)
pub const DIATONIC_SOLFEGE: [&str; 7] = ["Do", "Re", "Mi", "Fa", "Sol", "La", "Ti"];

fn check_degree(degree: u8) -> Result<usize, TheoryError> {
    if (1..=7).contains(&degree) {
        Ok((degree - 1) as usize)
    } else {
        Err(TheoryError::DegreeOutOfRange(degree))
    }
}

/// Quality of the triad on `degree` in a major or natural-minor key
pub fn triad_quality(degree: u8, is_major_key: bool) -> Result<TriadQuality, TheoryError> {
    let idx = check_degree(degree)?;
    Ok(if is_major_key {
        MAJOR_TEMPLATE[idx]
    } else {
        MINOR_TEMPLATE[idx]
    })
}

/// Roman numeral for a scale degree: upper case major, lower case minor,
/// lower case with "°" for diminished
pub fn get_roman_numeral(degree: u8, is_major_key: bool) -> Result<String, TheoryError> {
    let numeral = NUMERALS[check_degree(degree)?];
    Ok(match triad_quality(degree, is_major_key)? {
        TriadQuality::Major => numeral.to_string(),
        TriadQuality::Minor => numeral.to_lowercase(),
        TriadQuality::Diminished => format!("{}°", numeral.to_lowercase()),
    })
}

/// Chromatic movable-do syllable for an interval
pub fn solfege(interval: &Interval) -> &'static str {
    interval.solfege
}

/// Diatonic syllable for a major-scale degree
pub fn diatonic_solfege(degree: u8) -> Result<&'static str, TheoryError> {
    Ok(DIATONIC_SOLFEGE[check_degree(degree)?])
}
