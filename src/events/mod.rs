//! Event records flowing from the engine to presentation.
//!
//! ## Key Types
//!
//! - `GameEvent`: One thing that happened
//! - `RoundResult`: Cards, effective powers and outcome of a round
//! - `HandSnapshot`: Post-change view of both hands
//! - `EventBatch`: Events returned by a single engine call

pub mod event;

pub use event::{EventBatch, GameEvent, HandSnapshot, RoundOutcome, RoundResult};
