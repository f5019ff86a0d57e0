//! Fretboard configuration
//!
//! One explicit struct carries every selection the UI makes (key, pattern,
//! tuning, fret range, label mode, manual note edits). It is deserialized
//! from the JS host or from a JSON/YAML file and resolved into a
//! `FretboardModel` for the renderer.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TheoryError;
use crate::fretboard::{annotate, FretAnnotation, FretRange};
use crate::models::key::{Key, KeyQuality};
use crate::models::note::Note;
use crate::models::pattern::{get_pattern, Pattern, PatternKind};
use crate::models::tonic::Tonic;
use crate::models::tuning::Tuning;
use crate::theory::active::ActiveNoteSet;
use crate::theory::engine::get_spelled_pattern_notes;
use crate::theory::label::LabelMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FretboardConfig {
    /// Key root as spelled by the user ("F#", "Bb")
    pub tonic: String,

    /// Overrides the quality inferred from the pattern's third
    pub key_quality: Option<KeyQuality>,

    pub pattern_kind: PatternKind,

    /// Pattern id, or the interval token for `PatternKind::Interval`
    pub pattern_name: String,

    /// Note names, highest string first
    pub tuning: Vec<String>,

    pub start_fret: u8,
    pub end_fret: u8,

    pub label_mode: LabelMode,

    pub added_notes: Vec<Note>,
    pub removed_notes: Vec<Note>,
}

impl Default for FretboardConfig {
    fn default() -> Self {
        Self {
            tonic: "C".to_string(),
            key_quality: None,
            pattern_kind: PatternKind::Scale,
            pattern_name: "major".to_string(),
            tuning: ["E", "B", "G", "D", "A", "E"].iter().map(|s| s.to_string()).collect(),
            start_fret: 0,
            end_fret: 12,
            label_mode: LabelMode::NoteName,
            added_notes: Vec::new(),
            removed_notes: Vec::new(),
        }
    }
}

/// Everything the renderer needs for one redraw
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretboardModel {
    pub key: Key,
    pub pattern: Pattern,
    /// Letter-correct names of the pattern's notes, in pattern order
    pub pattern_note_names: Vec<String>,
    pub active_notes: Vec<Note>,
    pub range: FretRange,
    pub string_count: usize,
    pub positions: Vec<FretAnnotation>,
}

impl FretboardConfig {
    pub fn from_json(json: &str) -> Result<Self, TheoryError> {
        serde_json::from_str(json).map_err(|e| TheoryError::InvalidConfig(e.to_string()))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, TheoryError> {
        serde_yaml::from_str(yaml).map_err(|e| TheoryError::InvalidConfig(e.to_string()))
    }

    /// Read a config file; `.yaml`/`.yml` parse as YAML, anything else as JSON
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TheoryError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TheoryError::InvalidConfig(format!("{}: {}", path.display(), e)))?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&contents),
            _ => Self::from_json(&contents),
        }
    }

    pub fn to_json(&self) -> Result<String, TheoryError> {
        serde_json::to_string_pretty(self).map_err(|e| TheoryError::InvalidConfig(e.to_string()))
    }

    pub fn pattern(&self) -> Result<Pattern, TheoryError> {
        get_pattern(&self.pattern_name, self.pattern_kind)
    }

    /// Key from the spelled tonic; quality defaults to the pattern's third
    pub fn key(&self) -> Result<Key, TheoryError> {
        let quality = match self.key_quality {
            Some(quality) => quality,
            None => self.pattern()?.quality(),
        };
        let tonic = match self.tonic.parse::<Tonic>() {
            Ok(tonic) => tonic,
            Err(_) => {
                // Theoretical spellings (E#, B##) fall back to the conventional tonic
                let note: Note = self.tonic.parse()?;
                let tonic = Tonic::for_note(note, quality);
                log::warn!("Tonic '{}' respelled as {} for a {} key", self.tonic, tonic, quality);
                tonic
            }
        };
        Ok(Key::new(tonic, quality))
    }

    pub fn parsed_tuning(&self) -> Result<Tuning, TheoryError> {
        Tuning::parse(&self.tuning)
    }

    pub fn range(&self) -> Result<FretRange, TheoryError> {
        FretRange::new(self.start_fret, self.end_fret)
    }

    /// Check every field up front
    pub fn validate(&self) -> Result<(), TheoryError> {
        self.pattern()?;
        self.key()?;
        self.parsed_tuning()?;
        self.range()?;
        Ok(())
    }

    /// Resolve the configuration into a renderable model
    pub fn build(&self) -> Result<FretboardModel, TheoryError> {
        let pattern = self.pattern()?;
        let key = self.key()?;
        let tuning = self.parsed_tuning()?;
        let range = self.range()?;

        let active = ActiveNoteSet::from_pattern(&key, &pattern)?
            .with_edits(&self.added_notes, &self.removed_notes);
        let positions = annotate(&tuning, range, &key, &pattern, &active, self.label_mode)?;
        let pattern_note_names = get_spelled_pattern_notes(&key, &pattern)?
            .iter()
            .map(|s| s.to_string())
            .collect();

        log::info!(
            "Built fretboard for {} {} {} ({} active notes)",
            key,
            pattern.id,
            pattern.kind,
            active.len()
        );

        Ok(FretboardModel {
            key,
            pattern,
            pattern_note_names,
            active_notes: active.notes(),
            range,
            string_count: tuning.string_count(),
            positions,
        })
    }
}
