//! Pokemon TCG deck validation and statistics engine
//!
//! Pure computation over a deck of trading cards: classifying raw card
//! records, tallying composition statistics, checking format legality, and
//! round-tripping deck lists through text, JSON, and the PTCGO format.
//! The owning caller holds the single mutable `Deck` and re-derives a
//! `ValidationResult` after each mutation; nothing here does I/O except the
//! codec file loader.

pub mod classify;
pub mod codec;
pub mod core;
pub mod error;
pub mod rules;

pub use error::{DeckError, Result};
