//! Card system: definitions, instances, elements, abilities and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Static card data loaded at startup
//! - `CardInstance`: One dealt copy, with its own (mutable) power
//! - `Element` / `Advantage`: The elemental cycle
//! - `Ability`: Win/loss-triggered secondary rule
//! - `CardRegistry`: Card definition lookup

pub mod ability;
pub mod catalog;
pub mod definition;
pub mod element;
pub mod instance;
pub mod registry;

pub use ability::Ability;
pub use definition::{CardDefinition, CardId};
pub use element::{Advantage, Element};
pub use instance::CardInstance;
pub use registry::CardRegistry;
