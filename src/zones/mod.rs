//! Zone system for card locations.
//!
//! ## Key Types
//!
//! - `Zone`: Deck, a side's hand, or removed from play
//! - `ZonePosition`: Top (draw side) or bottom of a zone
//! - `Piles`: Owns every card of a game and moves cards between zones

pub mod manager;

pub use manager::{Piles, Zone, ZonePosition};
