//! Composition heuristics
//!
//! Non-blocking advice about deck composition. Nothing here ever makes a
//! deck illegal. Rules fire in a fixed order so output stays stable for
//! callers and tests.

use crate::core::{Category, Deck, DeckStats, TypeTag};
use serde::Serialize;

const MIN_RECOMMENDED_ENERGY: u32 = 8;
const MAX_RECOMMENDED_ENERGY: u32 = 15;
const MIN_RECOMMENDED_SUPPORTERS: u32 = 8;
const MAX_FOCUSED_TYPES: usize = 2;

/// A concrete improvement suggestion, optionally naming candidate cards
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub category: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<String>,
    pub reason: String,
}

/// Advisory output; never affects legality
#[derive(Debug, Clone, Default, Serialize)]
pub struct Advice {
    pub warnings: Vec<String>,
    pub suggestions: Vec<Suggestion>,
}

/// Run the composition heuristics over a deck and its precomputed stats.
pub fn advise(deck: &Deck, stats: &DeckStats) -> Advice {
    let mut advice = Advice::default();

    if stats.energy_count < MIN_RECOMMENDED_ENERGY {
        advice
            .warnings
            .push("Consider adding more Energy cards (recommended: 8-12)".to_string());
    }
    if stats.energy_count > MAX_RECOMMENDED_ENERGY {
        advice
            .warnings
            .push("Too many Energy cards might slow down your deck".to_string());
    }

    let supporter_count: u32 = deck
        .cards
        .iter()
        .filter(|c| c.is_supporter())
        .map(|c| c.count)
        .sum();
    if supporter_count < MIN_RECOMMENDED_SUPPORTERS {
        advice
            .warnings
            .push("Consider adding more Supporter cards for consistency".to_string());
    }

    let has_draw_power = deck
        .cards
        .iter()
        .any(|c| c.name.contains("Professor") || c.name.contains("Draw"));
    if !has_draw_power {
        advice.suggestions.push(Suggestion {
            category: "Draw Power".to_string(),
            cards: vec![
                "Professor's Research".to_string(),
                "Colress's Experiment".to_string(),
                "Pokégear 3.0".to_string(),
            ],
            reason: "Improve deck consistency with draw support".to_string(),
        });
    }

    let mut pokemon_types: Vec<&TypeTag> = Vec::new();
    for card in deck.cards.iter().filter(|c| c.category == Category::Pokemon) {
        for tag in &card.types {
            if !pokemon_types.contains(&tag) {
                pokemon_types.push(tag);
            }
        }
    }
    if pokemon_types.len() > MAX_FOCUSED_TYPES {
        advice.suggestions.push(Suggestion {
            category: "Type Focus".to_string(),
            cards: Vec::new(),
            reason: "Consider focusing on 1-2 types for better energy consistency".to_string(),
        });
    }

    advice.suggestions.push(Suggestion {
        category: "Meta Counters".to_string(),
        cards: vec![
            "Lost Vacuum".to_string(),
            "Counter Catcher".to_string(),
            "Boss's Orders".to_string(),
        ],
        reason: "Popular tech cards in current meta".to_string(),
    });

    advice
}
