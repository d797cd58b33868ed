//! Game state: phase, piles, counters and RNG.
//!
//! ## GameState
//!
//! Everything needed to continue a game:
//! - Phase of the round state machine
//! - Game and round counters
//! - All card piles (deck, hands, removed)
//! - Entity allocator and RNG
//!
//! A `GameState` can be saved to bytes and restored; the restored game
//! continues exactly as the saved one would have.

use serde::{Deserialize, Serialize};

use super::entity::EntityAllocator;
use super::error::CheckpointError;
use super::rng::{GameRng, GameRngState};
use super::side::Side;
use crate::cards::{CardDefinition, CardInstance};
use crate::zones::{Piles, Zone, ZonePosition};

/// Phase of the round state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a round to be triggered.
    #[default]
    Idle,
    /// A round was resolved and is being shown.
    RoundInProgress,
    /// A side ran out of cards. Terminal until the next deal.
    GameOver { winner: Side },
}

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub phase: Phase,

    /// Games dealt so far (first game is 1).
    pub game_number: u32,

    /// Rounds resolved in the current game.
    pub round_number: u32,

    pub piles: Piles,

    pub entities: EntityAllocator,

    pub rng: GameRng,
}

/// Serializable form of `GameState`.
#[derive(Serialize, Deserialize)]
struct Checkpoint {
    phase: Phase,
    game_number: u32,
    round_number: u32,
    piles: Piles,
    entities: EntityAllocator,
    rng: GameRngState,
}

impl GameState {
    /// Create an empty state. No cards until `deal` is called.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            phase: Phase::Idle,
            game_number: 0,
            round_number: 0,
            piles: Piles::new(),
            entities: EntityAllocator::default(),
            rng: GameRng::new(seed),
        }
    }

    /// Start a new game from a deck list.
    ///
    /// Rebuilds the deck from scratch, shuffles it, then deals one card to
    /// the player and one to the computer, `starting_cards` times, for as
    /// long as the deck holds at least two cards.
    pub fn deal<'a>(
        &mut self,
        deck_list: impl IntoIterator<Item = &'a CardDefinition>,
        starting_cards: usize,
    ) {
        self.piles.clear();
        self.entities.reset();
        self.rng = self.rng.next_game();
        self.game_number += 1;
        self.round_number = 0;
        self.phase = Phase::Idle;

        for def in deck_list {
            let card = CardInstance::from_definition(self.entities.alloc(), def);
            self.piles.add(card, Zone::Deck, ZonePosition::Bottom);
        }
        self.piles.shuffle(Zone::Deck, &mut self.rng);

        for _ in 0..starting_cards {
            if self.piles.zone_size(Zone::Deck) < 2 {
                break;
            }
            self.piles.draw(Zone::Hand(Side::Player));
            self.piles.draw(Zone::Hand(Side::Computer));
        }
    }

    /// Hand size for a side.
    #[must_use]
    pub fn hand_size(&self, side: Side) -> usize {
        self.piles.zone_size(Zone::Hand(side))
    }

    /// Is the game waiting for a round trigger?
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Encode the state for later restoration.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        let checkpoint = Checkpoint {
            phase: self.phase,
            game_number: self.game_number,
            round_number: self.round_number,
            piles: self.piles.clone(),
            entities: self.entities.clone(),
            rng: self.rng.state(),
        };
        bincode::serialize(&checkpoint).map_err(CheckpointError::Encode)
    }

    /// Restore a state saved with `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Checkpoint =
            bincode::deserialize(bytes).map_err(CheckpointError::Decode)?;
        Ok(Self {
            phase: checkpoint.phase,
            game_number: checkpoint.game_number,
            round_number: checkpoint.round_number,
            piles: checkpoint.piles,
            entities: checkpoint.entities,
            rng: GameRng::from_state(&checkpoint.rng),
        })
    }
}
