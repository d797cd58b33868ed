//! Card instance identification.
//!
//! Every dealt copy of a card gets a unique `EntityId`. Two copies of the
//! same definition are different entities, which is what lets abilities ask
//! "is *that* card still in the computer's hand?" rather than "is a card
//! with that name there?".
//!
//! ## Usage
//!
//! ```
//! use elemental_duel::core::{EntityAllocator, EntityId};
//!
//! let mut ids = EntityAllocator::default();
//! let first = ids.alloc();
//! let second = ids.alloc();
//!
//! assert_eq!(first, EntityId(0));
//! assert_ne!(first, second);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an entity ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Monotonic allocator for entity IDs.
///
/// Never reuses an ID within a game. Reset when a new game is dealt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    /// Allocate the next entity ID.
    pub fn alloc(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }

    /// Start again from zero.
    pub fn reset(&mut self) {
        self.next = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_display() {
        let id = EntityId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Entity(7)");
    }

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = EntityAllocator::default();
        let a = ids.alloc();
        let b = ids.alloc();
        let c = ids.alloc();

        assert!(a < b && b < c);
        assert_eq!(ids.allocated(), 3);
    }

    #[test]
    fn test_allocator_reset() {
        let mut ids = EntityAllocator::default();
        ids.alloc();
        ids.alloc();
        ids.reset();

        assert_eq!(ids.allocated(), 0);
        assert_eq!(ids.alloc(), EntityId(0));
    }
}
