//! Deck serialization: plain text, JSON, and the PTCGO vendor format

pub mod json;
pub mod ptcgo;
pub mod text;

pub use json::{from_json, to_json};
pub use ptcgo::to_ptcgo;
pub use text::{from_text, to_text};

use crate::core::Deck;
use crate::{DeckError, Result};
use std::fs;
use std::path::Path;

/// Parse a deck from an unknown serialized form.
///
/// JSON is attempted first; the plain-text list format is the fallback once
/// the input fails structurally as JSON. Both failing collapses into a
/// single user-facing parse error.
pub fn import(input: &str) -> Result<Deck> {
    if let Ok(deck) = from_json(input) {
        return Ok(deck);
    }
    from_text(input).map_err(|_| {
        DeckError::ParseError("Could not parse deck. Please check the format.".to_string())
    })
}

/// Load a deck list from a file, in either supported form
pub fn load_from_file(path: &Path) -> Result<Deck> {
    let content = fs::read_to_string(path).map_err(DeckError::IoError)?;
    import(&content)
}
