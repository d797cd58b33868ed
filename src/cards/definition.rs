//! Card definitions - static card data.
//!
//! `CardDefinition` holds what the asset store knows about a card: its
//! name, sprite reference, base power, element and ability. The deck holds
//! `CardInstance`s created from these, and only instances ever change.

use serde::{Deserialize, Serialize};

use super::ability::Ability;
use super::element::Element;

/// Unique identifier for a card definition.
///
/// Identifies the kind of card ("Ember Fox"), not a dealt copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use elemental_duel::cards::{Ability, CardDefinition, CardId, Element};
///
/// let fox = CardDefinition::new(CardId::new(1), "Ember Fox", 6)
///     .with_element(Element::Fire)
///     .with_ability(Ability::DrawExtra, 2);
///
/// assert_eq!(fox.power, 6);
/// assert_eq!(fox.ability_value, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (display and ability messages).
    pub name: String,

    /// Sprite reference for the presentation layer.
    #[serde(default)]
    pub sprite: String,

    /// Base power.
    pub power: u32,

    #[serde(default)]
    pub element: Element,

    #[serde(default)]
    pub ability: Ability,

    /// Ability parameter (cards to draw for DrawExtra).
    #[serde(default)]
    pub ability_value: i64,

    /// Flavour text.
    #[serde(default)]
    pub description: String,
}

impl CardDefinition {
    /// Create a neutral card with no ability.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, power: u32) -> Self {
        Self {
            id,
            name: name.into(),
            sprite: String::new(),
            power,
            element: Element::None,
            ability: Ability::None,
            ability_value: 0,
            description: String::new(),
        }
    }

    /// Set the element (builder pattern).
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    /// Set the ability and its parameter (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: Ability, value: i64) -> Self {
        self.ability = ability;
        self.ability_value = value;
        self
    }

    /// Set the sprite reference (builder pattern).
    #[must_use]
    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = sprite.into();
        self
    }

    /// Set the flavour text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_card_definition_builder() {
        let card = CardDefinition::new(CardId::new(1), "Test Card", 4)
            .with_element(Element::Earth)
            .with_ability(Ability::DoublePower, 0)
            .with_sprite("cards/test.png")
            .with_description("A test.");

        assert_eq!(card.name, "Test Card");
        assert_eq!(card.power, 4);
        assert_eq!(card.element, Element::Earth);
        assert_eq!(card.ability, Ability::DoublePower);
        assert_eq!(card.sprite, "cards/test.png");
        assert_eq!(card.description, "A test.");
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let card: CardDefinition =
            serde_json::from_str(r#"{ "id": 3, "name": "Plain", "power": 2 }"#).unwrap();

        assert_eq!(card.element, Element::None);
        assert_eq!(card.ability, Ability::None);
        assert_eq!(card.ability_value, 0);
        assert!(card.sprite.is_empty());
    }
}
