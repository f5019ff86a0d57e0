//! Models module for the fretboard theory core
//!
//! This module contains the static pitch model and catalogs (notes,
//! tonics, intervals, scales/chords, tunings) and the key type that the
//! theory engine works from.

pub mod note;
pub mod tonic;
pub mod key;
pub mod interval;
pub mod pattern;
pub mod tuning;

// Re-export commonly used types
pub use note::{Letter, Note};
pub use tonic::Tonic;
pub use key::{Key, KeyQuality};
pub use interval::Interval;
pub use pattern::{Pattern, PatternKind};
pub use tuning::Tuning;
