//! Card entry types and category classification helpers

use crate::core::{CardId, CardName, Subtype, TypeTag};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Card categories in the Pokemon TCG
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pokemon,
    Trainer,
    Energy,
}

impl Category {
    /// Display label used by the text exporter section headers
    pub fn label(&self) -> &'static str {
        match self {
            Category::Pokemon => "Pokemon",
            Category::Trainer => "Trainer",
            Category::Energy => "Energy",
        }
    }
}

/// Set name/code and collector number, used only for export formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetInfo {
    pub set_code: String,
    pub number: String,
}

/// One distinct card within a deck
///
/// Many physical copies of the same card collapse into a single entry with
/// a `count`. Within a deck `id` is unique; inserting the same id again
/// merges counts rather than duplicating the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardEntry {
    /// Opaque unique identifier
    pub id: CardId,

    /// Display name (e.g., "Charizard ex")
    pub name: CardName,

    /// Pokemon / Trainer / Energy
    pub category: Category,

    /// Subtypes (e.g., "Basic", "ex", "Supporter", "Special")
    #[serde(default)]
    pub subtypes: SmallVec<[Subtype; 2]>,

    /// Elemental type tags; empty for non-Pokemon
    #[serde(default)]
    pub types: SmallVec<[TypeTag; 2]>,

    /// Name of the card this evolves from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evolves_from: Option<CardName>,

    /// Quantity of this card in the deck; an entry at 0 is removed,
    /// never persisted
    #[serde(alias = "quantity")]
    pub count: u32,

    /// Set code and collector number, export formatting only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_info: Option<SetInfo>,
}

impl CardEntry {
    pub fn new(id: impl Into<CardId>, name: impl Into<CardName>, category: Category) -> Self {
        CardEntry {
            id: id.into(),
            name: name.into(),
            category,
            subtypes: SmallVec::new(),
            types: SmallVec::new(),
            evolves_from: None,
            count: 1,
            set_info: None,
        }
    }

    pub fn has_subtype(&self, subtype: &str) -> bool {
        self.subtypes.iter().any(|s| s.as_str() == subtype)
    }

    /// Basic energy is exempt from the max-copies rule: Energy category
    /// without the "Special" subtype
    pub fn is_basic_energy(&self) -> bool {
        self.category == Category::Energy && !self.has_subtype("Special")
    }

    /// A Basic Pokemon carries no evolution marker
    pub fn is_basic_pokemon(&self) -> bool {
        self.category == Category::Pokemon && self.evolves_from.is_none()
    }

    pub fn is_supporter(&self) -> bool {
        self.category == Category::Trainer && self.has_subtype("Supporter")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = CardEntry::new("sv3-125", "Charizard ex", Category::Pokemon);
        assert_eq!(card.id.as_str(), "sv3-125");
        assert_eq!(card.name.as_str(), "Charizard ex");
        assert_eq!(card.count, 1);
        assert!(card.types.is_empty());
        assert!(card.is_basic_pokemon());
    }

    #[test]
    fn test_evolution_marker() {
        let mut card = CardEntry::new("sv3-124", "Charmeleon", Category::Pokemon);
        card.evolves_from = Some(CardName::new("Charmander"));
        assert!(!card.is_basic_pokemon());
    }

    #[test]
    fn test_basic_energy_exemption() {
        let mut fire = CardEntry::new("sve-2", "Fire Energy", Category::Energy);
        fire.subtypes.push(Subtype::new("Basic"));
        assert!(fire.is_basic_energy());

        let mut jet = CardEntry::new("pal-190", "Jet Energy", Category::Energy);
        jet.subtypes.push(Subtype::new("Special"));
        assert!(!jet.is_basic_energy());

        let trainer = CardEntry::new("sv1-196", "Ultra Ball", Category::Trainer);
        assert!(!trainer.is_basic_energy());
    }

    #[test]
    fn test_supporter_detection() {
        let mut research = CardEntry::new("sv1-189", "Professor's Research", Category::Trainer);
        research.subtypes.push(Subtype::new("Supporter"));
        assert!(research.is_supporter());

        let ball = CardEntry::new("sv1-196", "Ultra Ball", Category::Trainer);
        assert!(!ball.is_supporter());
    }
}
