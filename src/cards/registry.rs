//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores the card definitions loaded at startup and
//! provides lookup by `CardId`. Definitions come from JSON or from
//! [`catalog::standard`](super::catalog::standard).

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::definition::{CardDefinition, CardId};
use crate::core::error::ConfigError;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use elemental_duel::cards::{CardRegistry, CardId};
///
/// let registry = CardRegistry::from_json(r#"[
///     { "id": 1, "name": "Ember Fox", "power": 6, "element": "Fire" },
///     { "id": 2, "name": "Tide Crab", "power": 5, "element": "Water",
///       "ability": "DrawExtra", "ability_value": 2 }
/// ]"#).unwrap();
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.get(CardId::new(2)).unwrap().name, "Tide Crab");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load definitions from a JSON array, or an object with a `cards` array.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Document {
            List(Vec<CardDefinition>),
            Wrapped { cards: Vec<CardDefinition> },
        }

        let cards = match serde_json::from_str(json)? {
            Document::List(cards) | Document::Wrapped { cards } => cards,
        };
        Self::from_definitions(cards)
    }

    /// Build a registry from a list of definitions.
    pub fn from_definitions(
        cards: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for card in cards {
            registry.register(card)?;
        }
        Ok(registry)
    }

    /// Register a card definition.
    ///
    /// Fails if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), ConfigError> {
        if self.cards.contains_key(&card.id) {
            return Err(ConfigError::DuplicateCard(card.id));
        }
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions (unspecified order).
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }
}
