//! Events emitted by the round engine.
//!
//! The engine never draws anything. It reports what happened as immutable
//! records, and whatever presents the game (see [`crate::view`]) reacts to
//! them: showing the centre cards, updating counts, printing messages.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardInstance;
use crate::core::{Side, SideMap};
use crate::effects::AbilityOutcome;
use crate::zones::{Piles, Zone};

/// Events produced by one call into the engine.
///
/// Most calls emit one to four events.
pub type EventBatch = SmallVec<[GameEvent; 8]>;

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Winner(Side),
    Tie,
}

/// The two cards of a round and how they fared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Round number within the game (first round is 1).
    pub round: u32,

    /// Cards as they were drawn from the hands.
    pub cards: SideMap<CardInstance>,

    /// Effective power after elemental modifiers.
    pub powers: SideMap<i64>,

    pub outcome: RoundOutcome,
}

impl RoundResult {
    /// Winning side, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.outcome {
            RoundOutcome::Winner(side) => Some(side),
            RoundOutcome::Tie => None,
        }
    }

    /// Is this round a tie?
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.outcome == RoundOutcome::Tie
    }
}

/// Hands and pile sizes after a change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSnapshot {
    pub hands: SideMap<Vector<CardInstance>>,
    pub deck_size: usize,
    pub removed: usize,
}

impl HandSnapshot {
    /// Capture the current piles. Hands are shared, not copied.
    #[must_use]
    pub fn capture(piles: &Piles) -> Self {
        Self {
            hands: SideMap::new(|side| piles.hand(side).clone()),
            deck_size: piles.zone_size(Zone::Deck),
            removed: piles.zone_size(Zone::Removed),
        }
    }

    /// Number of cards in a side's hand.
    #[must_use]
    pub fn hand_size(&self, side: Side) -> usize {
        self.hands[side].len()
    }
}

/// Something the presentation layer may want to show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game was dealt.
    GameStarted {
        game: u32,
        hand_sizes: SideMap<usize>,
        deck_size: usize,
    },

    /// Two cards fought.
    RoundResolved(RoundResult),

    /// A card ability fired.
    AbilityTriggered(AbilityOutcome),

    /// Hands changed (after a deal, a round, or the end of its display).
    HandsChanged(HandSnapshot),

    /// The pause after a round ended; the next round may be triggered.
    RoundFinished { round: u32 },

    /// A round was triggered with an empty hand.
    GameOver { winner: Side },
}

impl GameEvent {
    /// Short name for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::GameStarted { .. } => "game_started",
            GameEvent::RoundResolved(_) => "round_resolved",
            GameEvent::AbilityTriggered(_) => "ability_triggered",
            GameEvent::HandsChanged(_) => "hands_changed",
            GameEvent::RoundFinished { .. } => "round_finished",
            GameEvent::GameOver { .. } => "game_over",
        }
    }
}
