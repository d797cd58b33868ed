//! Round rules and the game state machine.
//!
//! - `elemental_power`: Effective power after the elemental cycle
//! - `RoundEngine`: Deals games, plays rounds, fires pacing timers
//! - `Input`: Signals the engine reacts to
//!
//! The engine never draws anything or reads a clock. Every call returns
//! the events it produced, in order, for a presentation layer to consume.

pub mod elemental;
pub mod engine;

pub use elemental::elemental_power;
pub use engine::{Input, RoundEngine};
