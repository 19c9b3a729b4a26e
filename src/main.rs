//! deckcheck - validate and convert Pokemon TCG deck lists

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use ptcg_deck::{
    codec,
    core::compute_stats,
    rules::{advise, ValidationResult},
};
use std::path::PathBuf;

/// Output format for deck conversion
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Plain-text deck list
    Text,
    /// JSON deck object
    Json,
    /// PTCGO importer format
    Ptcgo,
}

#[derive(Parser)]
#[command(name = "deckcheck")]
#[command(about = "Pokemon TCG deck list checker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a deck list and print its statistics
    Check {
        /// Deck list file (JSON or plain text)
        file: PathBuf,

        /// Emit the full validation result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a deck list to another format
    Convert {
        /// Deck list file (JSON or plain text)
        file: PathBuf,

        /// Target format
        #[arg(long, value_enum, default_value = "text")]
        to: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file, json } => {
            let deck = codec::load_from_file(&file)
                .with_context(|| format!("failed to load deck from {}", file.display()))?;
            let result = ValidationResult::compute(&deck);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&deck, &result);
            }

            if !result.is_valid {
                std::process::exit(1);
            }
        }
        Commands::Convert { file, to, out } => {
            let deck = codec::load_from_file(&file)
                .with_context(|| format!("failed to load deck from {}", file.display()))?;

            let rendered = match to {
                OutputFormat::Text => codec::to_text(&deck),
                OutputFormat::Json => codec::to_json(&deck)?,
                OutputFormat::Ptcgo => codec::to_ptcgo(&deck),
            };

            match out {
                Some(path) => std::fs::write(&path, rendered)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => println!("{rendered}"),
            }
        }
    }

    Ok(())
}

fn print_report(deck: &ptcg_deck::core::Deck, result: &ValidationResult) {
    println!("Deck: {} ({})", deck.name, deck.format);
    println!(
        "Cards: {} total ({} Pokemon, {} Trainer, {} Energy)",
        result.stats.total_cards,
        result.stats.pokemon_count,
        result.stats.trainer_count,
        result.stats.energy_count
    );

    if result.is_valid {
        println!("Legal: yes");
    } else {
        println!("Legal: no");
        for error in &result.errors {
            println!("  error: {error}");
        }
    }

    for warning in &result.warnings {
        println!("  warning: {warning}");
    }

    let advice = advise(deck, &compute_stats(deck));
    for suggestion in &advice.suggestions {
        if suggestion.cards.is_empty() {
            println!("  suggestion [{}]: {}", suggestion.category, suggestion.reason);
        } else {
            println!(
                "  suggestion [{}]: {} (try: {})",
                suggestion.category,
                suggestion.reason,
                suggestion.cards.join(", ")
            );
        }
    }
}
