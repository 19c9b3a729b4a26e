//! Plain-text deck list codec
//!
//! The export groups cards into `## Pokemon` / `## Trainer` / `## Energy`
//! sections under a `# {name}` header. The import is permissive by design:
//! the format has no escaping, so lines that do not look like a card line
//! are simply ignored rather than rejected.

use crate::core::{CardEntry, CardName, Category, Deck, Format};
use crate::{DeckError, Result};
use deunicode::deunicode;

const SECTIONS: [Category; 3] = [Category::Pokemon, Category::Trainer, Category::Energy];

/// Render a deck as a plain-text list.
pub fn to_text(deck: &Deck) -> String {
    let mut lines: Vec<String> = vec![
        format!("# {}", deck.name),
        format!("Format: {}", deck.format),
    ];

    for category in SECTIONS {
        lines.push(String::new());
        lines.push(format!("## {}", category.label()));
        for card in deck.cards.iter().filter(|c| c.category == category) {
            lines.push(format!("{}x {}", card.count, card.name));
        }
    }

    lines.join("\n")
}

/// Parse a plain-text deck list.
///
/// Card lines match `<count><optional 'x'><whitespace><name>`. A card line
/// only counts when it sits under a recognized section header; lines outside
/// any section are ignored rather than guessed into a category. Duplicate
/// names within a section merge by summing, uncapped, so the legality
/// checker can flag what the list actually says.
pub fn from_text(input: &str) -> Result<Deck> {
    let mut deck = Deck::new("Imported Deck", Format::Standard);
    let mut named = false;
    let mut section: Option<Category> = None;
    let mut parsed_any = false;

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(heading) = line.strip_prefix("##") {
            // Some exporters spell the format line as a section header
            // ("## Format: standard"); it is not a card section
            if let Some(value) = heading.trim().strip_prefix("Format:") {
                if let Ok(format) = value.parse::<Format>() {
                    deck.format = format;
                }
                continue;
            }
            section = recognize_section(heading);
            continue;
        }

        if let Some(title) = line.strip_prefix('#') {
            if !named && !title.trim().is_empty() {
                deck.name = title.trim().to_string();
                named = true;
            }
            continue;
        }

        if let Some(value) = line.strip_prefix("Format:") {
            if let Ok(format) = value.parse::<Format>() {
                deck.format = format;
            }
            continue;
        }

        let Some(category) = section else {
            continue;
        };
        if let Some((count, name)) = parse_card_line(line) {
            push_card(&mut deck, category, name, count);
            parsed_any = true;
        }
    }

    if !parsed_any {
        return Err(DeckError::ParseError(
            "No card lines found in deck list".to_string(),
        ));
    }

    Ok(deck)
}

/// Match a section heading, tolerating accents and trailing counts
/// ("## Pokemon", "##Pokémon - 12", "##Trainer Cards - 8")
fn recognize_section(heading: &str) -> Option<Category> {
    let folded = deunicode(heading.trim()).to_lowercase();
    if folded.starts_with("pokemon") {
        Some(Category::Pokemon)
    } else if folded.starts_with("trainer") {
        Some(Category::Trainer)
    } else if folded.starts_with("energy") {
        Some(Category::Energy)
    } else {
        None
    }
}

/// Parse `<count><optional 'x'><whitespace><name>`
fn parse_card_line(line: &str) -> Option<(u32, &str)> {
    let digits_end = line.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let count: u32 = line[..digits_end].parse().ok()?;

    let rest = line[digits_end..].strip_prefix('x').unwrap_or(&line[digits_end..]);
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let name = rest.trim();
    if name.is_empty() {
        return None;
    }
    Some((count, name))
}

fn push_card(deck: &mut Deck, category: Category, name: &str, count: u32) {
    if count == 0 {
        return;
    }

    let id = slug_id(name, category);
    if let Some(existing) = deck.cards.iter_mut().find(|c| c.id.as_str() == id) {
        existing.count = existing.count.saturating_add(count);
        return;
    }

    let mut card = CardEntry::new(id, CardName::new(name), category);
    card.count = count;
    deck.cards.push(card);
}

/// Deterministic id for a text-imported card; the format carries no ids
fn slug_id(name: &str, category: Category) -> String {
    let slug = deunicode(name)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{}-{}", category.label().to_lowercase(), slug)
}
