//! Fretboard Theory WASM Module
//!
//! Music-theory core for an interactive fretboard diagram. It works out
//! which positions are active for a key and a scale, chord or interval, and
//! how each note is named, numbered and colored. Drawing is left to the
//! JavaScript host.

pub mod error;
pub mod models;
pub mod theory;
pub mod fretboard;
pub mod config;
pub mod api;

// Re-export commonly used types
pub use error::{TheoryError, TheoryResult};
pub use models::*;
pub use config::{FretboardConfig, FretboardModel};
pub use fretboard::{FretAnnotation, FretRange};
pub use theory::{ActiveNoteSet, LabelMode, NoteLabel, SpelledNote};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            wasm_warn!("Logger already initialized");
        }
    }

    log::info!("Fretboard theory WASM module initialized");
}
