//! Legality rules and composition heuristics

pub mod advisor;
pub mod legality;

pub use advisor::{advise, Advice, Suggestion};
pub use legality::{validate, LegalityReport};

use crate::core::{compute_stats, Deck, DeckStats};
use serde::Serialize;

/// Complete validation snapshot of a deck
///
/// Derived, never stored: the owning caller recomputes this whole value
/// after every deck mutation rather than patching pieces of it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: DeckStats,
}

impl ValidationResult {
    /// Run stats, legality, and heuristics over a deck in one shot.
    pub fn compute(deck: &Deck) -> Self {
        let stats = compute_stats(deck);
        let report = validate(deck);
        let advice = advise(deck, &stats);

        ValidationResult {
            is_valid: report.is_valid,
            errors: report.errors,
            warnings: advice.warnings,
            stats,
        }
    }
}
