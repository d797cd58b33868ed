//! Deferred work for presentational pacing.
//!
//! After a round resolves the engine waits before accepting the next one,
//! and after game over it waits before dealing again. Both waits are timers
//! on a `Scheduler` driven by explicit `now` values, never by a wall clock.
//! Dealing a new game cancels every pending timer, so a timer from the old
//! game can never act on the new one.
//!
//! ## Key Types
//!
//! - `Task`: What to do when a timer fires
//! - `TimerId`: Handle for cancellation
//! - `Scheduler`: Pending timers in due order

mod timers;

pub use timers::{Scheduled, Scheduler, Task, TimerId};
