//! Core deck model types

pub mod card;
pub mod deck;
pub mod stats;
pub mod types;

pub use card::{CardEntry, Category, SetInfo};
pub use deck::{Deck, Format, FormatRules};
pub use stats::{compute_stats, DeckStats};
pub use types::{CardId, CardName, Subtype, TypeTag};
