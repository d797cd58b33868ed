//! # elemental-duel
//!
//! Round-resolution engine for a two-sided elemental card battle.
//!
//! A player and a computer opponent each hold a hand dealt from a shared
//! deck. Every round both sides play a random card; elements modify power
//! (Fire beats Earth, Earth beats Water, Water beats Fire), the stronger
//! card wins both cards, and the cards' abilities fire. A side with an
//! empty hand when a round is triggered loses the game.
//!
//! ## Design Principles
//!
//! 1. **No Clock, No Renderer**: The engine takes an explicit `now` and
//!    returns events. Timing and drawing belong to the caller.
//!
//! 2. **Every Card Accounted For**: Cards move between deck, hands and a
//!    removed pile; none are created or lost during a game.
//!
//! 3. **Deterministic**: One seed fixes every shuffle and pick. States can
//!    be checkpointed and resumed exactly.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, sides, state, RNG, configuration, errors
//! - `cards`: Card definitions, instances, elements, abilities, catalog
//! - `zones`: Deck, hands and removed pile
//! - `rules`: Elemental resolver and the round engine
//! - `effects`: Ability dispatch
//! - `events`: Records emitted by the engine
//! - `schedule`: Cancellable pacing timers
//! - `view`: Headless table text model

pub mod core;
pub mod zones;
pub mod cards;
pub mod rules;
pub mod effects;
pub mod events;
pub mod schedule;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    AbilityBeneficiary, CheckpointError, ConfigError, EntityId, GameConfig, GameRng, GameState,
    Phase, Side, SideMap, TiePolicy,
};

pub use crate::zones::{Piles, Zone, ZonePosition};

pub use crate::cards::{Ability, CardDefinition, CardId, CardInstance, CardRegistry, Element};

pub use crate::rules::{elemental_power, Input, RoundEngine};

pub use crate::effects::{AbilityEffect, AbilityOutcome};

pub use crate::events::{EventBatch, GameEvent, HandSnapshot, RoundOutcome, RoundResult};

pub use crate::schedule::{Scheduler, Task};

pub use crate::view::TableView;
