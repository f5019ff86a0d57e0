//! Key: a spelled tonic plus its quality
//!
//! A bare `Note` does not decide whether derived notes read as sharps or
//! flats. The tonic's letter does, and the quality picks which letter a
//! pitch class gets when the caller only supplies a pitch.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::note::Note;
use crate::models::tonic::Tonic;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyQuality {
    #[default]
    Major,
    Minor,
}

impl fmt::Display for KeyQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyQuality::Major => write!(f, "major"),
            KeyQuality::Minor => write!(f, "minor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub tonic: Tonic,
    pub quality: KeyQuality,
}

impl Key {
    pub fn new(tonic: Tonic, quality: KeyQuality) -> Self {
        Self { tonic, quality }
    }

    pub fn major(tonic: Tonic) -> Self {
        Self::new(tonic, KeyQuality::Major)
    }

    pub fn minor(tonic: Tonic) -> Self {
        Self::new(tonic, KeyQuality::Minor)
    }

    /// Key on a bare pitch class, spelled conventionally for the quality
    pub fn from_note(root: Note, quality: KeyQuality) -> Self {
        Self::new(Tonic::for_note(root, quality), quality)
    }

    pub fn root(&self) -> Note {
        self.tonic.note()
    }

    pub fn is_major(&self) -> bool {
        self.quality == KeyQuality::Major
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_note_uses_quality_table() {
        let g_sharp: Note = "G#".parse().unwrap();
        assert_eq!(Key::from_note(g_sharp, KeyQuality::Major).tonic, Tonic::Ab);
        assert_eq!(Key::from_note(g_sharp, KeyQuality::Minor).tonic, Tonic::Gs);
        assert_eq!(Key::from_note(g_sharp, KeyQuality::Minor).root(), g_sharp);
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::major(Tonic::Eb).to_string(), "Eb major");
        assert_eq!(Key::minor(Tonic::Fs).to_string(), "F# minor");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(KeyQuality::default(), KeyQuality::Major);
        assert_eq!(crate::models::pattern::PatternKind::default(), crate::models::pattern::PatternKind::Scale);
        assert_eq!(crate::theory::label::LabelMode::default(), crate::theory::label::LabelMode::NoteName);
        assert_eq!(KeyQuality::Minor.to_string(), "minor");
    }
}
