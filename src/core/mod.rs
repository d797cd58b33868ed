//! Core engine types: entities, sides, state, RNG, configuration, errors.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;
pub mod side;
pub mod state;

pub use config::{AbilityBeneficiary, GameConfig, TiePolicy};
pub use entity::{EntityAllocator, EntityId};
pub use error::{CheckpointError, ConfigError};
pub use rng::{GameRng, GameRngState};
pub use side::{Side, SideMap};
pub use state::{GameState, Phase};
