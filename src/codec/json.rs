//! JSON deck codec
//!
//! Structurally faithful serde round trip of the deck model. This is the
//! form persistence layers store verbatim.

use crate::core::{CardEntry, Deck};
use crate::{DeckError, Result};

pub fn to_json(deck: &Deck) -> Result<String> {
    serde_json::to_string_pretty(deck).map_err(|e| DeckError::SerializationError(e.to_string()))
}

/// Parse a deck from JSON.
///
/// The top-level object must carry a `name` and a `cards` sequence; `format`
/// defaults to standard when absent. Entries at count 0 are dropped, never
/// persisted, and entries sharing an id are merged so the deck invariant of
/// unique ids holds at the boundary.
pub fn from_json(input: &str) -> Result<Deck> {
    let mut deck: Deck = serde_json::from_str(input)
        .map_err(|_| DeckError::ParseError("Could not parse deck data".to_string()))?;
    deck.cards.retain(|c| c.count > 0);
    merge_duplicate_ids(&mut deck);
    Ok(deck)
}

/// Same-id entries merge by summing, uncapped, so the legality checker can
/// flag what the payload actually says
fn merge_duplicate_ids(deck: &mut Deck) {
    let mut merged: Vec<CardEntry> = Vec::with_capacity(deck.cards.len());
    for card in deck.cards.drain(..) {
        if let Some(existing) = merged.iter_mut().find(|c| c.id == card.id) {
            existing.count = existing.count.saturating_add(card.count);
        } else {
            merged.push(card);
        }
    }
    deck.cards = merged;
}
