//! Ability dispatch - turning a card's ability and its round outcome into a
//! change on the piles.
//!
//! Dispatch runs after both round cards are back in a hand. Every ability
//! is guarded: if the deck is empty or the card it needs has moved, the
//! ability does nothing and reports nothing.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::{Ability, CardInstance};
use crate::core::{AbilityBeneficiary, EntityId, Side};
use crate::zones::{Piles, Zone, ZonePosition};

/// Power multiplier applied by DoublePower.
pub const DOUBLE_POWER_FACTOR: i64 = 2;

/// What an ability did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityEffect {
    /// Cards drawn from the deck (may be fewer than requested).
    Drew { requested: i64, drawn: Vec<EntityId> },
    /// Card taken from the opposing hand.
    Stole { card: EntityId },
    /// Card taken out of play.
    Destroyed { card: EntityId },
    /// Triggering card's new power.
    PowerBoosted { power: i64 },
    /// Top card of the deck taken.
    Revived { card: EntityId },
}

/// Report of a fired ability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityOutcome {
    /// Triggering card.
    pub card: EntityId,

    pub ability: Ability,

    /// Side that played the triggering card.
    pub side: Side,

    pub effect: AbilityEffect,

    /// Human-readable message, e.g. `"Flame Imp: Drew 2 extra cards!"`.
    pub message: String,
}

/// One ability invocation.
#[derive(Clone, Copy, Debug)]
pub struct AbilityTrigger<'a> {
    /// Card whose ability fires, as it was played.
    pub card: &'a CardInstance,

    /// The card it fought, if still known.
    pub opponent: Option<&'a CardInstance>,

    /// Side that played `card`.
    pub side: Side,

    /// Did `card` win the round?
    pub won: bool,
}

impl<'a> AbilityTrigger<'a> {
    /// Create a trigger for a card that won its round.
    #[must_use]
    pub fn won(card: &'a CardInstance, opponent: &'a CardInstance, side: Side) -> Self {
        Self {
            card,
            opponent: Some(opponent),
            side,
            won: true,
        }
    }

    /// Create a trigger for a card that lost its round.
    #[must_use]
    pub fn lost(card: &'a CardInstance, opponent: &'a CardInstance, side: Side) -> Self {
        Self {
            card,
            opponent: Some(opponent),
            side,
            won: false,
        }
    }

    /// Forget the opponent card.
    #[must_use]
    pub fn without_opponent(mut self) -> Self {
        self.opponent = None;
        self
    }
}

/// Side whose hand receives cards moved by an ability.
#[must_use]
pub fn beneficiary_side(beneficiary: AbilityBeneficiary, trigger_side: Side) -> Side {
    match beneficiary {
        AbilityBeneficiary::Player => Side::Player,
        AbilityBeneficiary::CardOwner => trigger_side,
    }
}

/// Apply a card's ability for its round outcome.
///
/// Returns `None` when the ability does not fire for this outcome or has
/// nothing to act on.
pub fn dispatch_ability(
    piles: &mut Piles,
    trigger: &AbilityTrigger<'_>,
    beneficiary: AbilityBeneficiary,
) -> Option<AbilityOutcome> {
    let card = trigger.card;
    if !card.ability.fires_on(trigger.won) {
        return None;
    }

    let receiver = beneficiary_side(beneficiary, trigger.side);

    let (effect, message) = match card.ability {
        Ability::DrawExtra => {
            let requested = card.ability_value;
            let drawn: Vec<_> = (0..requested.max(0))
                .map_while(|_| piles.draw(Zone::Hand(receiver)))
                .collect();
            if drawn.is_empty() {
                debug!("{}: DrawExtra with empty deck", card);
                return None;
            }
            let message = format!("{}: Drew {} extra cards!", card.name, drawn.len());
            (AbilityEffect::Drew { requested, drawn }, message)
        }

        Ability::StealCard => {
            let other = trigger.opponent?;
            let from = Zone::Hand(receiver.opponent());
            if !piles.move_card(other.entity_id, from, Zone::Hand(receiver), ZonePosition::Bottom) {
                debug!("{}: StealCard target {} not in {}", card, other, from);
                return None;
            }
            let message = format!("{}: Stole opponent's {}!", card.name, other.name);
            (AbilityEffect::Stole { card: other.entity_id }, message)
        }

        Ability::DestroyOnLoss => {
            let other = trigger.opponent?;
            match piles.take(other.entity_id) {
                Some((Zone::Removed, taken)) => {
                    // Already out of play; put it back where it was.
                    piles.add(taken, Zone::Removed, ZonePosition::Bottom);
                    debug!("{}: DestroyOnLoss target {} already removed", card, other);
                    return None;
                }
                Some((_, taken)) => piles.add(taken, Zone::Removed, ZonePosition::Bottom),
                None => {
                    debug!("{}: DestroyOnLoss target {} not found", card, other);
                    return None;
                }
            }
            let message = format!("{}: Destroyed {} on loss!", card.name, other.name);
            (AbilityEffect::Destroyed { card: other.entity_id }, message)
        }

        Ability::DoublePower => {
            let Some(instance) = piles.get_mut(card.entity_id) else {
                debug!("{}: DoublePower card no longer tracked", card);
                return None;
            };
            instance.boost_power(DOUBLE_POWER_FACTOR);
            let power = instance.power;
            let message = format!("{}: Power doubled when losing!", card.name);
            (AbilityEffect::PowerBoosted { power }, message)
        }

        Ability::ReviveRandom => {
            let Some(revived) = piles.draw(Zone::Hand(receiver)) else {
                debug!("{}: ReviveRandom with empty deck", card);
                return None;
            };
            let message = format!("{}: Revived a random card!", card.name);
            (AbilityEffect::Revived { card: revived }, message)
        }

        Ability::None => return None,
    };

    debug!("ability fired: {}", message);

    Some(AbilityOutcome {
        card: card.entity_id,
        ability: card.ability,
        side: trigger.side,
        effect,
        message,
    })
}
