//! Elemental power resolution.

use crate::cards::CardInstance;

/// Effective power of `card` when fighting `opponent`.
///
/// Doubles against the element the card beats, halves (rounding down)
/// against the element that beats it, unchanged otherwise.
///
/// ```
/// use elemental_duel::cards::{CardInstance, Element};
/// use elemental_duel::core::EntityId;
/// use elemental_duel::rules::elemental_power;
///
/// let fire = CardInstance::plain(EntityId(0), "A", 10).with_element(Element::Fire);
/// let water = CardInstance::plain(EntityId(1), "B", 10).with_element(Element::Water);
///
/// assert_eq!(elemental_power(&fire, &water), 5);
/// assert_eq!(elemental_power(&water, &fire), 20);
/// ```
#[must_use]
pub fn elemental_power(card: &CardInstance, opponent: &CardInstance) -> i64 {
    card.element.advantage_against(opponent.element).apply(card.power)
}
