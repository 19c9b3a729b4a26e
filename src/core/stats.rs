//! Deck statistics aggregation

use crate::core::{Category, Deck, TypeTag};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Per-category and per-type tallies derived from a deck
///
/// A dual-type card contributes its full count to each of its type buckets,
/// so the distribution totals can exceed `pokemon_count`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    pub total_cards: u32,
    pub pokemon_count: u32,
    pub trainer_count: u32,
    pub energy_count: u32,
    pub type_distribution: FxHashMap<TypeTag, u32>,
}

/// Single pass over the card list
pub fn compute_stats(deck: &Deck) -> DeckStats {
    let mut stats = DeckStats::default();

    // Saturating: imported lists may carry absurd counts, and a tally must
    // never panic or wrap on them
    for card in &deck.cards {
        stats.total_cards = stats.total_cards.saturating_add(card.count);

        let bucket = match card.category {
            Category::Pokemon => &mut stats.pokemon_count,
            Category::Trainer => &mut stats.trainer_count,
            Category::Energy => &mut stats.energy_count,
        };
        *bucket = bucket.saturating_add(card.count);

        for tag in &card.types {
            let entry = stats.type_distribution.entry(tag.clone()).or_insert(0);
            *entry = entry.saturating_add(card.count);
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardEntry, Format};

    fn deck_with(cards: Vec<CardEntry>) -> Deck {
        let mut deck = Deck::new("Test", Format::Standard);
        deck.cards = cards;
        deck
    }

    #[test]
    fn test_empty_deck() {
        let stats = compute_stats(&deck_with(vec![]));
        assert_eq!(stats.total_cards, 0);
        assert!(stats.type_distribution.is_empty());
    }

    #[test]
    fn test_category_tallies() {
        let mut pikachu = CardEntry::new("svi-25", "Pikachu", Category::Pokemon);
        pikachu.count = 4;
        let mut ball = CardEntry::new("sv1-196", "Ultra Ball", Category::Trainer);
        ball.count = 3;
        let mut energy = CardEntry::new("sve-4", "Lightning Energy", Category::Energy);
        energy.count = 10;

        let stats = compute_stats(&deck_with(vec![pikachu, ball, energy]));
        assert_eq!(stats.total_cards, 17);
        assert_eq!(stats.pokemon_count, 4);
        assert_eq!(stats.trainer_count, 3);
        assert_eq!(stats.energy_count, 10);
    }

    #[test]
    fn test_total_equals_sum_of_counts() {
        let mut a = CardEntry::new("a", "A", Category::Pokemon);
        a.count = 2;
        let mut b = CardEntry::new("b", "B", Category::Trainer);
        b.count = 7;

        let deck = deck_with(vec![a, b]);
        let expected: u32 = deck.cards.iter().map(|c| c.count).sum();
        assert_eq!(compute_stats(&deck).total_cards, expected);
    }

    #[test]
    fn test_huge_counts_saturate() {
        let mut a = CardEntry::new("a", "A", Category::Pokemon);
        a.count = u32::MAX;
        a.types.push(TypeTag::new("Fire"));
        let mut b = CardEntry::new("b", "B", Category::Pokemon);
        b.count = u32::MAX;
        b.types.push(TypeTag::new("Fire"));

        let stats = compute_stats(&deck_with(vec![a, b]));
        assert_eq!(stats.total_cards, u32::MAX);
        assert_eq!(stats.pokemon_count, u32::MAX);
        assert_eq!(stats.type_distribution[&TypeTag::new("Fire")], u32::MAX);
    }

    #[test]
    fn test_dual_type_double_counts() {
        let mut card = CardEntry::new("x", "Dual", Category::Pokemon);
        card.count = 3;
        card.types.push(TypeTag::new("Fire"));
        card.types.push(TypeTag::new("Water"));

        let stats = compute_stats(&deck_with(vec![card]));
        assert_eq!(stats.type_distribution[&TypeTag::new("Fire")], 3);
        assert_eq!(stats.type_distribution[&TypeTag::new("Water")], 3);
    }
}
