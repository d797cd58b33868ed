//! Ability tags carried by cards.
//!
//! The tag only names the rule; `effects::dispatch_ability` decides when it
//! fires and what it does.

use serde::{Deserialize, Serialize};

/// Secondary rule attached to a card, triggered by its round outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    #[default]
    None,
    /// On a win, draw `value` cards from the deck.
    DrawExtra,
    /// On a win, take the opponent card from the computer's hand.
    StealCard,
    /// On a loss, take the opponent card out of play.
    DestroyOnLoss,
    /// On a loss, this card's power doubles permanently.
    DoublePower,
    /// On a win, take the top card of the deck.
    ReviveRandom,
}

impl Ability {
    /// Does this ability fire for the given outcome?
    #[must_use]
    pub const fn fires_on(self, won: bool) -> bool {
        match self {
            Ability::DrawExtra | Ability::StealCard | Ability::ReviveRandom => won,
            Ability::DestroyOnLoss | Ability::DoublePower => !won,
            Ability::None => false,
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ability::None => "None",
            Ability::DrawExtra => "DrawExtra",
            Ability::StealCard => "StealCard",
            Ability::DestroyOnLoss => "DestroyOnLoss",
            Ability::DoublePower => "DoublePower",
            Ability::ReviveRandom => "ReviveRandom",
        };
        f.write_str(name)
    }
}
