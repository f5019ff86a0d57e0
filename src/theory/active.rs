//! Active note set: pattern notes plus explicit user edits
//!
//! The pattern part is derived and never mutated. User edits live in two
//! side lists so that changing key or pattern can rebuild the derived part
//! while the caller decides whether to keep the edits.

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::models::key::Key;
use crate::models::note::Note;
use crate::models::pattern::Pattern;
use crate::theory::engine::get_pattern_notes;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveNoteSet {
    pattern_notes: Vec<Note>,
    added: Vec<Note>,
    removed: Vec<Note>,
}

impl ActiveNoteSet {
    pub fn from_pattern(key: &Key, pattern: &Pattern) -> Result<Self, TheoryError> {
        Ok(Self {
            pattern_notes: get_pattern_notes(key, pattern)?,
            added: Vec::new(),
            removed: Vec::new(),
        })
    }

    /// Apply a batch of edits: additions first, then removals
    pub fn with_edits(mut self, added: &[Note], removed: &[Note]) -> Self {
        for &note in added {
            self.add(note);
        }
        for &note in removed {
            self.remove(note);
        }
        self
    }

    pub fn contains(&self, note: Note) -> bool {
        self.added.contains(&note)
            || (self.pattern_notes.contains(&note) && !self.removed.contains(&note))
    }

    /// Whether the note comes from the pattern rather than a user edit
    pub fn is_pattern_note(&self, note: Note) -> bool {
        self.pattern_notes.contains(&note)
    }

    pub fn add(&mut self, note: Note) {
        if let Some(pos) = self.removed.iter().position(|&n| n == note) {
            self.removed.remove(pos);
        } else if !self.pattern_notes.contains(&note) && !self.added.contains(&note) {
            self.added.push(note);
        }
    }

    pub fn remove(&mut self, note: Note) {
        if let Some(pos) = self.added.iter().position(|&n| n == note) {
            self.added.remove(pos);
        } else if self.pattern_notes.contains(&note) && !self.removed.contains(&note) {
            self.removed.push(note);
        }
    }

    /// Flip membership; returns whether the note is active afterwards
    pub fn toggle(&mut self, note: Note) -> bool {
        if self.contains(note) {
            self.remove(note);
            false
        } else {
            self.add(note);
            true
        }
    }

    /// Active notes: pattern order first, then additions in insertion order
    pub fn notes(&self) -> Vec<Note> {
        self.pattern_notes
            .iter()
            .filter(|n| !self.removed.contains(n))
            .chain(self.added.iter())
            .copied()
            .collect()
    }

    pub fn len(&self) -> usize {
        let kept = self.pattern_notes.iter().filter(|n| !self.removed.contains(n)).count();
        kept + self.added.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn added(&self) -> &[Note] {
        &self.added
    }

    pub fn removed(&self) -> &[Note] {
        &self.removed
    }
}
