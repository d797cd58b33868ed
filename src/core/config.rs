//! Game configuration.
//!
//! Hand size at the deal, pacing delays and the deck list, plus two rule
//! choices made explicit as settings:
//! - `TiePolicy`: what happens to both cards on equal power
//! - `AbilityBeneficiary`: whose hand receives cards moved by abilities
//!
//! Configuration can be built in code or loaded from JSON:
//!
//! ```
//! use elemental_duel::core::{GameConfig, TiePolicy};
//!
//! let json = r#"{ "starting_cards": 3, "tie_policy": "discard" }"#;
//! let config = GameConfig::from_json(json).unwrap();
//! assert_eq!(config.starting_cards, 3);
//! assert_eq!(config.tie_policy, TiePolicy::Discard);
//! assert_eq!(config.round_delay_ms, 2500);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::{CardId, CardRegistry};

/// What to do with both cards when a round ends in a tie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// Put both cards at the bottom of the deck, player's card first.
    #[default]
    ReturnToDeck,
    /// Take both cards out of play.
    Discard,
}

/// Which hand receives cards moved by DrawExtra, StealCard and ReviveRandom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityBeneficiary {
    /// Always the player's hand, whichever side triggered the ability.
    #[default]
    Player,
    /// The hand of the side whose card triggered the ability.
    CardOwner,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards dealt to each side at game start.
    pub starting_cards: usize,

    /// Pause between a resolved round and the next one, in milliseconds.
    pub round_delay_ms: u64,

    /// Pause between game over and the automatic redeal, in milliseconds.
    pub game_over_delay_ms: u64,

    /// Tie handling.
    pub tie_policy: TiePolicy,

    /// Recipient of cards moved by abilities.
    pub ability_beneficiary: AbilityBeneficiary,

    /// Cards that make up the deck, one entry per copy.
    ///
    /// Empty means "one copy of every registered card".
    pub deck: Vec<CardId>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_cards: 5,
            round_delay_ms: 2500,
            game_over_delay_ms: 3000,
            tie_policy: TiePolicy::default(),
            ability_beneficiary: AbilityBeneficiary::default(),
            deck: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the number of cards dealt to each side.
    #[must_use]
    pub fn with_starting_cards(mut self, count: usize) -> Self {
        self.starting_cards = count;
        self
    }

    /// Set the pause after each round.
    #[must_use]
    pub fn with_round_delay(mut self, delay: Duration) -> Self {
        self.round_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the pause before an automatic redeal.
    #[must_use]
    pub fn with_game_over_delay(mut self, delay: Duration) -> Self {
        self.game_over_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the tie policy.
    #[must_use]
    pub fn with_tie_policy(mut self, policy: TiePolicy) -> Self {
        self.tie_policy = policy;
        self
    }

    /// Set the ability beneficiary.
    #[must_use]
    pub fn with_ability_beneficiary(mut self, beneficiary: AbilityBeneficiary) -> Self {
        self.ability_beneficiary = beneficiary;
        self
    }

    /// Set the deck list.
    #[must_use]
    pub fn with_deck(mut self, deck: impl IntoIterator<Item = CardId>) -> Self {
        self.deck = deck.into_iter().collect();
        self
    }

    /// Pause after each round.
    #[must_use]
    pub fn round_delay(&self) -> Duration {
        Duration::from_millis(self.round_delay_ms)
    }

    /// Pause before an automatic redeal.
    #[must_use]
    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }

    /// Resolve the deck list against a registry.
    ///
    /// An empty list expands to every registered card, sorted by ID so the
    /// result does not depend on hash order.
    #[must_use]
    pub fn deck_list(&self, registry: &CardRegistry) -> Vec<CardId> {
        if self.deck.is_empty() {
            let mut ids: Vec<_> = registry.iter().map(|c| c.id).collect();
            ids.sort();
            ids
        } else {
            self.deck.clone()
        }
    }

    /// Check the configuration against the card definitions it will use.
    pub fn validate(&self, registry: &CardRegistry) -> Result<(), ConfigError> {
        if self.starting_cards == 0 {
            return Err(ConfigError::NoStartingCards);
        }
        if let Some(unknown) = self.deck.iter().find(|id| !registry.contains(**id)) {
            return Err(ConfigError::UnknownCard(*unknown));
        }
        if self.deck_list(registry).is_empty() {
            return Err(ConfigError::EmptyDeck);
        }
        Ok(())
    }
}
