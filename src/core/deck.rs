//! Deck aggregate and its add/remove operations
//!
//! A `Deck` is owned by a single logical caller and mutated in place through
//! `add_card`/`remove_card`. The legality and advisor modules only ever read
//! a deck; they never hold references across calls.

use crate::core::{CardEntry, CardId};
use crate::{DeckError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Play formats; each determines the legality rule parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Standard,
    Expanded,
    Unlimited,
}

/// Numeric thresholds for a format's legality rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRules {
    pub min_cards: u32,
    pub max_cards: u32,
    pub max_copies: u32,
}

impl Format {
    /// All three formats currently share identical thresholds; the
    /// per-format indirection is kept so a divergence only touches here.
    pub fn rules(&self) -> FormatRules {
        match self {
            Format::Standard | Format::Expanded | Format::Unlimited => FormatRules {
                min_cards: 60,
                max_cards: 60,
                max_copies: 4,
            },
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Format::Standard => "standard",
            Format::Expanded => "expanded",
            Format::Unlimited => "unlimited",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Format {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Format::Standard),
            "expanded" => Ok(Format::Expanded),
            "unlimited" => Ok(Format::Unlimited),
            other => Err(DeckError::ParseError(format!("Unknown format: {other}"))),
        }
    }
}

/// A complete deck list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,

    #[serde(default)]
    pub format: Format,

    /// Insertion-ordered; order only matters for display and export
    pub cards: Vec<CardEntry>,
}

impl Deck {
    pub fn new(name: impl Into<String>, format: Format) -> Self {
        Deck {
            name: name.into(),
            format,
            cards: Vec::new(),
        }
    }

    /// Total physical cards across all entries, saturating on absurd
    /// imported counts
    pub fn total_cards(&self) -> u32 {
        self.cards
            .iter()
            .fold(0u32, |total, c| total.saturating_add(c.count))
    }

    pub fn entry(&self, id: &CardId) -> Option<&CardEntry> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Add `quantity` copies of a card, mutating the deck in place.
    ///
    /// An existing entry with the same id has its count increased; a new
    /// card is appended with `count = quantity` (the incoming entry's own
    /// count field is ignored). Non-exempt cards silently clamp at the
    /// format's max-copies threshold; basic energy is unbounded. The caller
    /// is responsible for surfacing that a clamp occurred.
    pub fn add_card(&mut self, card: CardEntry, quantity: u32) {
        if quantity == 0 {
            return;
        }

        let max_copies = self.format.rules().max_copies;
        let cap = |card: &CardEntry, count: u32| {
            if card.is_basic_energy() {
                count
            } else {
                count.min(max_copies)
            }
        };

        if let Some(existing) = self.cards.iter_mut().find(|c| c.id == card.id) {
            existing.count = cap(existing, existing.count.saturating_add(quantity));
        } else {
            let mut card = card;
            card.count = cap(&card, quantity);
            self.cards.push(card);
        }
    }

    /// Remove `quantity` copies of the card with the given id.
    ///
    /// An entry that drops to zero (or below) is removed entirely; a count
    /// of 0 is never persisted. Removing an unknown id is a no-op.
    pub fn remove_card(&mut self, id: &CardId, quantity: u32) {
        let Some(pos) = self.cards.iter().position(|c| &c.id == id) else {
            return;
        };

        let entry = &mut self.cards[pos];
        if entry.count > quantity {
            entry.count -= quantity;
        } else {
            self.cards.remove(pos);
        }
    }
}
