//! Error types for the theory core
//!
//! Every failure here is a programmer or configuration error. Nothing is
//! silently defaulted: the caller decides how to present a fallback.

use thiserror::Error;

use crate::models::pattern::PatternKind;

/// Errors produced by the pitch model, catalogs, theory engine and fretboard mapper
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Interval token is not in the catalog
    #[error("Unknown interval: '{0}'")]
    UnknownInterval(String),

    /// Scale or chord name is not in the catalog
    #[error("Unknown {kind} pattern: '{name}'")]
    UnknownPattern { name: String, kind: PatternKind },

    /// Degree lookup outside 1-7
    #[error("Degree {0} out of range (expected 1-7)")]
    DegreeOutOfRange(u8),

    /// Note name outside the 12-tone set
    #[error("Invalid note: '{0}'")]
    InvalidNote(String),

    #[error("Invalid fret range: {start}..={end}")]
    InvalidFretRange { start: u8, end: u8 },

    #[error("Tuning has no strings")]
    EmptyTuning,

    #[error("String index {index} out of range ({strings} strings)")]
    StringOutOfRange { index: usize, strings: usize },

    /// Configuration could not be parsed or read
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type TheoryResult<T> = Result<T, TheoryError>;
