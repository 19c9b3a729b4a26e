//! Normalization boundary for loosely-typed card records
//!
//! Card data arrives from a lookup API or manual entry with no fixed schema.
//! `RawCard` captures that shape with everything optional; `classify` either
//! produces a strict `CardEntry` or fails loudly for that single record.
//! Callers skip or surface the bad record, never the whole deck.

use crate::core::{CardEntry, CardId, CardName, Category, SetInfo, Subtype, TypeTag};
use crate::{DeckError, Result};
use serde::Deserialize;
use smallvec::SmallVec;

/// A card record as it arrives from the outside world
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    pub id: Option<String>,
    pub name: Option<String>,
    pub supertype: Option<String>,

    #[serde(default)]
    pub subtypes: Vec<String>,

    #[serde(default)]
    pub types: Vec<String>,

    pub evolves_from: Option<String>,

    pub set: Option<RawSet>,

    /// Collector number within the set
    pub number: Option<String>,

    #[serde(alias = "quantity")]
    pub count: Option<u32>,
}

/// Set block of a raw record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSet {
    pub id: Option<String>,
    pub name: Option<String>,
    pub ptcgo_code: Option<String>,
}

/// Map a raw record into a strict `CardEntry`.
///
/// The supertype match is exact and case-sensitive ("Pokémon", "Trainer",
/// "Energy"); anything else is rejected. Missing optional fields default to
/// empty. Pure function, no side effects.
pub fn classify(raw: &RawCard) -> Result<CardEntry> {
    let category = match raw.supertype.as_deref().unwrap_or("") {
        "Pokémon" => Category::Pokemon,
        "Trainer" => Category::Trainer,
        "Energy" => Category::Energy,
        other => return Err(DeckError::UnknownSupertype(other.to_string())),
    };

    let id = raw
        .id
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| DeckError::InvalidCardRecord("missing card id".to_string()))?;
    let name = raw
        .name
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| DeckError::InvalidCardRecord("missing card name".to_string()))?;

    let subtypes: SmallVec<[Subtype; 2]> =
        raw.subtypes.iter().map(|s| Subtype::new(s.clone())).collect();
    let types: SmallVec<[TypeTag; 2]> =
        raw.types.iter().map(|t| TypeTag::new(t.clone())).collect();

    let set_info = raw.set.as_ref().and_then(|set| {
        let set_code = set.ptcgo_code.clone().or_else(|| set.id.clone())?;
        let number = raw.number.clone()?;
        Some(SetInfo { set_code, number })
    });

    Ok(CardEntry {
        id: CardId::new(id),
        name: CardName::new(name),
        category,
        subtypes,
        types,
        evolves_from: raw.evolves_from.clone().map(CardName::new),
        count: raw.count.unwrap_or(1),
        set_info,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, name: &str, supertype: &str) -> RawCard {
        RawCard {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            supertype: Some(supertype.to_string()),
            ..RawCard::default()
        }
    }

    #[test]
    fn test_classify_pokemon() {
        let mut record = raw("sv3-125", "Charizard ex", "Pokémon");
        record.subtypes = vec!["Stage 2".to_string(), "ex".to_string()];
        record.types = vec!["Fire".to_string()];
        record.evolves_from = Some("Charmeleon".to_string());

        let card = classify(&record).unwrap();
        assert_eq!(card.category, Category::Pokemon);
        assert_eq!(card.types.len(), 1);
        assert!(!card.is_basic_pokemon());
        assert_eq!(card.count, 1);
    }

    #[test]
    fn test_classify_rejects_unknown_supertype() {
        let record = raw("x", "Mystery", "Artifact");
        match classify(&record) {
            Err(DeckError::UnknownSupertype(s)) => assert_eq!(s, "Artifact"),
            other => panic!("expected UnknownSupertype, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_rejects_missing_supertype() {
        let record = RawCard {
            id: Some("x".to_string()),
            name: Some("Mystery".to_string()),
            ..RawCard::default()
        };
        assert!(matches!(
            classify(&record),
            Err(DeckError::UnknownSupertype(_))
        ));
    }

    #[test]
    fn test_classify_case_sensitive() {
        // "pokemon" without the accent or capital is not accepted
        let record = raw("x", "Pikachu", "pokemon");
        assert!(classify(&record).is_err());
    }

    #[test]
    fn test_classify_requires_id_and_name() {
        let mut record = raw("", "Pikachu", "Pokémon");
        assert!(matches!(
            classify(&record),
            Err(DeckError::InvalidCardRecord(_))
        ));

        record = raw("svi-25", "", "Pokémon");
        assert!(classify(&record).is_err());
    }

    #[test]
    fn test_set_info_extraction() {
        let mut record = raw("sv3-125", "Charizard ex", "Pokémon");
        record.set = Some(RawSet {
            id: Some("sv3".to_string()),
            name: Some("Obsidian Flames".to_string()),
            ptcgo_code: Some("OBF".to_string()),
        });
        record.number = Some("125".to_string());

        let card = classify(&record).unwrap();
        let set_info = card.set_info.unwrap();
        assert_eq!(set_info.set_code, "OBF");
        assert_eq!(set_info.number, "125");
    }

    #[test]
    fn test_set_without_number_is_dropped() {
        let mut record = raw("sv3-125", "Charizard ex", "Pokémon");
        record.set = Some(RawSet {
            id: Some("sv3".to_string()),
            ..RawSet::default()
        });
        assert!(classify(&record).unwrap().set_info.is_none());
    }

    #[test]
    fn test_classify_from_api_json() {
        let json = r#"{
            "id": "sv1-189",
            "name": "Professor's Research",
            "supertype": "Trainer",
            "subtypes": ["Supporter"],
            "set": { "id": "sv1", "ptcgoCode": "SVI" },
            "number": "189"
        }"#;
        let record: RawCard = serde_json::from_str(json).unwrap();
        let card = classify(&record).unwrap();
        assert_eq!(card.category, Category::Trainer);
        assert!(card.is_supporter());
    }
}
