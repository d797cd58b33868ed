//! Ability effects.
//!
//! Each card carries at most one `Ability`. After a decisive round the
//! winning card's ability is dispatched as "won", then the losing card's as
//! "lost". Dispatch is a plain function over the piles:
//! - `AbilityTrigger`: which card, against which opponent, with what outcome
//! - `dispatch_ability`: apply the ability, report what it did
//! - `AbilityOutcome`: the report, with a display message

mod dispatcher;

pub use dispatcher::{
    beneficiary_side, dispatch_ability, AbilityEffect, AbilityOutcome, AbilityTrigger,
    DOUBLE_POWER_FACTOR,
};
