//! Fretboard theory WASM API
//!
//! This module provides the JavaScript-facing API consumed by the rendering
//! layer. It includes shared utilities for serialization, argument parsing,
//! error handling and logging, plus the exported functions grouped by domain.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, parsing, error handling, and logging
//! - `theory`: Note, interval, scale/chord, spelling and roman-numeral queries
//! - `fretboard`: Position mapping and full fretboard annotation
//! - `catalog`: Enumeration of scales, chords, intervals, notes and tunings

pub mod helpers;
pub mod theory;
pub mod fretboard;
pub mod catalog;

pub use theory::*;
pub use fretboard::{note_at_position, find_note_positions, annotate_fretboard, validate_config, get_tuning_preset};
pub use catalog::*;
