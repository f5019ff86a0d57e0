//! Theory engine
//!
//! Derives notes, interval tokens, spelling, degrees and solfège from a key
//! and a pattern. Everything here is a pure function of its inputs and the
//! read-only catalogs in `models`.

pub mod active;
pub mod degree;
pub mod engine;
pub mod label;
pub mod spelling;

pub use active::ActiveNoteSet;
pub use degree::{get_roman_numeral, TriadQuality};
pub use engine::*;
pub use label::{describe, LabelMode, NoteLabel};
pub use spelling::SpelledNote;
