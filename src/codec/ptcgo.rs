//! PTCGO deck list exporter
//!
//! The vendor importer is strict about this layout, so the section headers
//! and card lines are emitted bit-exact:
//!
//! ```text
//! ##Pokémon - 20
//! * 3 Charizard ex OBF 125
//!
//! ##Trainer Cards - 15
//! * 4 Professor's Research SVI 189
//!
//! ##Energy - 25
//! * 25 Fire Energy Energy
//!
//! Total Cards - 60
//! ```

use crate::core::{compute_stats, CardEntry, Category, Deck};

/// Render a deck in the PTCGO line format.
pub fn to_ptcgo(deck: &Deck) -> String {
    let stats = compute_stats(deck);
    let mut lines: Vec<String> = Vec::new();

    let sections = [
        (Category::Pokemon, format!("##Pokémon - {}", stats.pokemon_count)),
        (Category::Trainer, format!("##Trainer Cards - {}", stats.trainer_count)),
        (Category::Energy, format!("##Energy - {}", stats.energy_count)),
    ];

    for (category, header) in sections {
        lines.push(header);
        for card in deck.cards.iter().filter(|c| c.category == category) {
            lines.push(card_line(card));
        }
        lines.push(String::new());
    }

    lines.push(format!("Total Cards - {}", stats.total_cards));
    lines.join("\n")
}

fn card_line(card: &CardEntry) -> String {
    match &card.set_info {
        Some(set) => format!("* {} {} {} {}", card.count, card.name, set.set_code, set.number),
        // Basic energy has no meaningful set code in the vendor format
        None if card.category == Category::Energy => {
            format!("* {} {} Energy", card.count, card.name)
        }
        None => format!("* {} {}", card.count, card.name),
    }
}
