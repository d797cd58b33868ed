//! Card instances - runtime card state.
//!
//! A `CardInstance` is one dealt copy of a definition. It carries the
//! definition's data by value so that hands and events are self-contained,
//! and it owns the only mutable field: `power`, which DoublePower raises
//! permanently for that copy.

use serde::{Deserialize, Serialize};

use super::ability::Ability;
use super::definition::{CardDefinition, CardId};
use super::element::Element;
use crate::core::entity::EntityId;

/// A card in play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique entity ID for this copy.
    pub entity_id: EntityId,

    /// Definition this copy was made from.
    pub card_id: CardId,

    pub name: String,

    /// Current base power (before elemental modifiers).
    pub power: i64,

    pub element: Element,

    pub ability: Ability,

    pub ability_value: i64,
}

impl CardInstance {
    /// Create a fresh copy of a definition.
    #[must_use]
    pub fn from_definition(entity_id: EntityId, def: &CardDefinition) -> Self {
        Self {
            entity_id,
            card_id: def.id,
            name: def.name.clone(),
            power: i64::from(def.power),
            element: def.element,
            ability: def.ability,
            ability_value: def.ability_value,
        }
    }

    /// Create a neutral, ability-less card directly (tests, tools).
    #[must_use]
    pub fn plain(entity_id: EntityId, name: impl Into<String>, power: i64) -> Self {
        Self {
            entity_id,
            card_id: CardId::new(entity_id.raw()),
            name: name.into(),
            power,
            element: Element::None,
            ability: Ability::None,
            ability_value: 0,
        }
    }

    /// Set the element (builder pattern).
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    /// Set the ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: Ability, value: i64) -> Self {
        self.ability = ability;
        self.ability_value = value;
        self
    }

    /// Multiply power by `factor`, saturating at the `i64` bounds.
    pub fn boost_power(&mut self, factor: i64) {
        self.power = self.power.saturating_mul(factor);
    }
}

impl std::fmt::Display for CardInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.name, self.entity_id.raw())
    }
}
