//! Built-in card set.
//!
//! Used when no external definitions are supplied. Kept separate so balance
//! tweaks stay out of the engine.

use super::ability::Ability;
use super::definition::{CardDefinition, CardId};
use super::element::Element;
use super::registry::CardRegistry;

fn card(id: u32, name: &str, power: u32, element: Element) -> CardDefinition {
    CardDefinition::new(CardId::new(id), name, power)
        .with_element(element)
        .with_sprite(format!("cards/{}.png", name.to_lowercase().replace(' ', "_")))
}

/// Every card in the standard set.
#[must_use]
pub fn standard_cards() -> Vec<CardDefinition> {
    vec![
        card(1, "Ember Fox", 6, Element::Fire),
        card(2, "Cinder Drake", 9, Element::Fire).with_ability(Ability::DestroyOnLoss, 0),
        card(3, "Flame Imp", 4, Element::Fire).with_ability(Ability::DrawExtra, 2),
        card(4, "Tide Crab", 5, Element::Water),
        card(5, "River Serpent", 8, Element::Water).with_ability(Ability::StealCard, 0),
        card(6, "Mist Sprite", 3, Element::Water).with_ability(Ability::ReviveRandom, 0),
        card(7, "Stone Golem", 10, Element::Earth),
        card(8, "Mud Toad", 4, Element::Earth).with_ability(Ability::DoublePower, 0),
        card(9, "Thorn Boar", 7, Element::Earth).with_ability(Ability::DrawExtra, 1),
        card(10, "Wandering Knight", 7, Element::None),
        card(11, "Village Guard", 5, Element::None).with_ability(Ability::DoublePower, 0),
        card(12, "Old Hermit", 2, Element::None).with_ability(Ability::ReviveRandom, 0),
    ]
}

/// Registry holding the standard set.
#[must_use]
pub fn standard() -> CardRegistry {
    CardRegistry::from_definitions(standard_cards()).expect("standard card IDs are unique")
}
