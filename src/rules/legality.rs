//! Format legality rules
//!
//! Hard errors only; advisory output lives in the advisor module. Errors are
//! collected exhaustively in a single pass so the caller can list every
//! problem at once - validation never short-circuits on the first failure.

use crate::core::Deck;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Outcome of the legality check
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalityReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Apply the format's legality rules to a deck.
///
/// Rules, in emission order:
/// - total card count must land inside the format's size bounds
/// - no name may exceed the max-copies threshold, counted across entries
///   sharing that name; basic energy is exempt
/// - at least one Basic Pokemon (a Pokemon entry with no evolution marker)
pub fn validate(deck: &Deck) -> LegalityReport {
    let rules = deck.format.rules();
    let mut errors = Vec::new();

    let total = deck.total_cards();
    if total < rules.min_cards {
        errors.push(format!("Deck needs {} more cards", rules.min_cards - total));
    }
    if total > rules.max_cards {
        errors.push(format!("Deck has {} too many cards", total - rules.max_cards));
    }

    // Copies are counted per name, not per entry, so reprints of the same
    // card across sets still share the limit.
    let mut copies: FxHashMap<&str, u32> = FxHashMap::default();
    for card in deck.cards.iter().filter(|c| !c.is_basic_energy()) {
        let entry = copies.entry(card.name.as_str()).or_insert(0);
        *entry = entry.saturating_add(card.count);
    }

    // Emit in first-seen order for deterministic output
    let mut reported: Vec<&str> = Vec::new();
    for card in &deck.cards {
        let name = card.name.as_str();
        if reported.contains(&name) {
            continue;
        }
        if let Some(&count) = copies.get(name) {
            if count > rules.max_copies {
                errors.push(format!(
                    "Too many copies of {name} ({count}/{})",
                    rules.max_copies
                ));
                reported.push(name);
            }
        }
    }

    if !deck.cards.iter().any(|c| c.is_basic_pokemon()) {
        errors.push("Deck must contain at least one Basic Pokémon".to_string());
    }

    LegalityReport {
        is_valid: errors.is_empty(),
        errors,
    }
}
