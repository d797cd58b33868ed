//! Headless presentation.
//!
//! `TableView` consumes the engine's events and keeps the texts a table UI
//! shows: card counts, the round result, ability messages and the two
//! centre cards. It never looks at `GameState`, so anything it shows can be
//! reproduced by replaying events.

mod table;

pub use table::TableView;
