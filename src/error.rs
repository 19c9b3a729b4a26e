//! Error types for the deck engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Unknown supertype: {0}")]
    UnknownSupertype(String),

    #[error("Invalid card record: {0}")]
    InvalidCardRecord(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, DeckError>;
