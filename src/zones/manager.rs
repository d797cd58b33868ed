//! Card piles and movement between them.
//!
//! `Piles` owns every card instance of a game. A card is in exactly one
//! zone at a time: the deck, one of the two hands, or the removed pile.
//! The only exception is the two cards fighting a round, which the round
//! engine holds while it resolves them.
//!
//! Zones are ordered. Index 0 is the "top" (the deck's draw side); the last
//! index is the "bottom". Hands receive cards at the bottom, which is the
//! same as appending.
//!
//! Piles are `im::Vector`s so that hand snapshots handed to the
//! presentation layer are O(1) clones.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::entity::EntityId;
use crate::core::rng::GameRng;
use crate::core::side::{Side, SideMap};

/// Where a card can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Undealt draw pile, shared by both sides.
    Deck,
    /// A side's hand.
    Hand(Side),
    /// Out of play for the rest of the game.
    Removed,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Deck => f.write_str("deck"),
            Zone::Hand(side) => write!(f, "{} hand", side),
            Zone::Removed => f.write_str("removed"),
        }
    }
}

/// Position for inserting a card into a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Front of the zone (next card drawn from the deck).
    Top,
    /// Back of the zone.
    Bottom,
}

/// All card piles of one game.
///
/// ## Usage
///
/// ```
/// use elemental_duel::cards::CardInstance;
/// use elemental_duel::core::{EntityId, Side};
/// use elemental_duel::zones::{Piles, Zone, ZonePosition};
///
/// let mut piles = Piles::new();
/// piles.add(CardInstance::plain(EntityId(0), "A", 1), Zone::Deck, ZonePosition::Bottom);
/// piles.add(CardInstance::plain(EntityId(1), "B", 2), Zone::Deck, ZonePosition::Bottom);
///
/// let drawn = piles.draw(Zone::Hand(Side::Player)).unwrap();
/// assert_eq!(drawn, EntityId(0));
/// assert_eq!(piles.locate(EntityId(0)), Some(Zone::Hand(Side::Player)));
/// assert_eq!(piles.zone_size(Zone::Deck), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    deck: Vector<CardInstance>,
    hands: SideMap<Vector<CardInstance>>,
    removed: Vector<CardInstance>,
}

impl Piles {
    /// Create empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in a zone, top first.
    #[must_use]
    pub fn zone(&self, zone: Zone) -> &Vector<CardInstance> {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Hand(side) => &self.hands[side],
            Zone::Removed => &self.removed,
        }
    }

    fn zone_mut(&mut self, zone: Zone) -> &mut Vector<CardInstance> {
        match zone {
            Zone::Deck => &mut self.deck,
            Zone::Hand(side) => &mut self.hands[side],
            Zone::Removed => &mut self.removed,
        }
    }

    /// A side's hand.
    #[must_use]
    pub fn hand(&self, side: Side) -> &Vector<CardInstance> {
        &self.hands[side]
    }

    /// The deck, top first.
    #[must_use]
    pub fn deck(&self) -> &Vector<CardInstance> {
        &self.deck
    }

    /// Cards out of play.
    #[must_use]
    pub fn removed(&self) -> &Vector<CardInstance> {
        &self.removed
    }

    /// Put a card into a zone.
    pub fn add(&mut self, card: CardInstance, zone: Zone, position: ZonePosition) {
        let pile = self.zone_mut(zone);
        match position {
            ZonePosition::Top => pile.push_front(card),
            ZonePosition::Bottom => pile.push_back(card),
        }
    }

    /// Take the card at `index` out of a zone.
    pub fn take_at(&mut self, zone: Zone, index: usize) -> Option<CardInstance> {
        let pile = self.zone_mut(zone);
        if index >= pile.len() {
            return None;
        }
        Some(pile.remove(index))
    }

    /// Take a specific card out of a specific zone.
    ///
    /// Returns `None` if the card is not in that zone.
    pub fn take_from(&mut self, zone: Zone, entity: EntityId) -> Option<CardInstance> {
        let index = self.position_in(zone, entity)?;
        self.take_at(zone, index)
    }

    /// Take a card out of whichever zone holds it.
    pub fn take(&mut self, entity: EntityId) -> Option<(Zone, CardInstance)> {
        let zone = self.locate(entity)?;
        let card = self.take_from(zone, entity)?;
        Some((zone, card))
    }

    /// Move a card from the top of the deck into `to`.
    ///
    /// Returns the moved card's ID, or `None` if the deck is empty.
    pub fn draw(&mut self, to: Zone) -> Option<EntityId> {
        let card = self.deck.pop_front()?;
        let entity = card.entity_id;
        self.add(card, to, ZonePosition::Bottom);
        Some(entity)
    }

    /// Move a card from `from` into `to`.
    ///
    /// Returns `false` (and moves nothing) if the card is not in `from`.
    pub fn move_card(
        &mut self,
        entity: EntityId,
        from: Zone,
        to: Zone,
        position: ZonePosition,
    ) -> bool {
        match self.take_from(from, entity) {
            Some(card) => {
                self.add(card, to, position);
                true
            }
            None => false,
        }
    }

    fn position_in(&self, zone: Zone, entity: EntityId) -> Option<usize> {
        self.zone(zone).iter().position(|c| c.entity_id == entity)
    }

    /// Find which zone holds a card.
    #[must_use]
    pub fn locate(&self, entity: EntityId) -> Option<Zone> {
        [
            Zone::Hand(Side::Player),
            Zone::Hand(Side::Computer),
            Zone::Deck,
            Zone::Removed,
        ]
        .into_iter()
        .find(|&zone| self.position_in(zone, entity).is_some())
    }

    /// Is the card in this zone?
    #[must_use]
    pub fn is_in_zone(&self, entity: EntityId, zone: Zone) -> bool {
        self.position_in(zone, entity).is_some()
    }

    /// Get a card by ID, wherever it is.
    #[must_use]
    pub fn get(&self, entity: EntityId) -> Option<&CardInstance> {
        let zone = self.locate(entity)?;
        self.zone(zone).iter().find(|c| c.entity_id == entity)
    }

    /// Get a mutable reference to a card, wherever it is.
    pub fn get_mut(&mut self, entity: EntityId) -> Option<&mut CardInstance> {
        let zone = self.locate(entity)?;
        let index = self.position_in(zone, entity)?;
        self.zone_mut(zone).get_mut(index)
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.zone(zone).len()
    }

    /// Cards in the deck and both hands.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.deck.len() + self.hands[Side::Player].len() + self.hands[Side::Computer].len()
    }

    /// Every card tracked, including removed ones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards_in_play() + self.removed.len()
    }

    /// Shuffle a zone.
    pub fn shuffle(&mut self, zone: Zone, rng: &mut GameRng) {
        let pile = self.zone_mut(zone);
        let mut cards: Vec<_> = pile.iter().cloned().collect();
        rng.shuffle(&mut cards);
        *pile = cards.into_iter().collect();
    }

    /// Drop every card.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
