//! Error types for the configuration and checkpoint boundaries.
//!
//! Gameplay itself never fails. Running out of cards or losing track of an
//! opponent card degrades silently into a smaller effect.

use thiserror::Error;

use crate::cards::CardId;

/// Problems with card definitions or game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("card {0} is defined more than once")]
    DuplicateCard(CardId),

    #[error("deck list references unknown card {0}")]
    UnknownCard(CardId),

    #[error("deck list is empty")]
    EmptyDeck,

    #[error("starting_cards must be at least 1")]
    NoStartingCards,
}

/// Problems saving or restoring a game checkpoint.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("checkpoint encoding failed: {0}")]
    Encode(#[source] bincode::Error),

    #[error("checkpoint decoding failed: {0}")]
    Decode(#[source] bincode::Error),

    #[error("checkpoint does not fit the configuration: {0}")]
    Config(#[from] ConfigError),
}
