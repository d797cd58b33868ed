//! Text model of the game table.

use std::fmt;

use crate::cards::CardInstance;
use crate::core::{Side, SideMap};
use crate::events::{GameEvent, RoundOutcome, RoundResult};

/// What the table shows, rebuilt from the event stream alone.
///
/// ```
/// use std::time::Duration;
/// use elemental_duel::cards::catalog;
/// use elemental_duel::core::{GameConfig, Side};
/// use elemental_duel::rules::{Input, RoundEngine};
/// use elemental_duel::view::TableView;
///
/// let mut engine = RoundEngine::new(GameConfig::default(), catalog::standard(), 7).unwrap();
/// let mut table = TableView::new();
/// table.apply_all(&engine.initiate_game());
/// assert_eq!(table.count_text(Side::Player), "Player: 5 cards");
///
/// table.apply_all(&engine.handle(Input::InitiateRound, Duration::ZERO));
/// assert!(table.centre().is_some());
/// assert!(!table.result_text().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableView {
    hand_sizes: SideMap<usize>,
    deck_size: usize,
    result_text: String,
    ability_messages: Vec<String>,
    centre: Option<SideMap<CardInstance>>,
    winner: Option<Side>,
}

impl TableView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the table for one event.
    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted {
                hand_sizes,
                deck_size,
                ..
            } => {
                *self = Self {
                    hand_sizes: hand_sizes.clone(),
                    deck_size: *deck_size,
                    ..Self::default()
                };
            }
            GameEvent::RoundResolved(result) => {
                self.result_text = result_text(result);
                self.ability_messages.clear();
                self.centre = Some(result.cards.clone());
            }
            GameEvent::AbilityTriggered(outcome) => {
                self.ability_messages.push(outcome.message.clone());
            }
            GameEvent::HandsChanged(snapshot) => {
                self.hand_sizes = SideMap::new(|side| snapshot.hand_size(side));
                self.deck_size = snapshot.deck_size;
            }
            GameEvent::RoundFinished { .. } => {
                self.centre = None;
            }
            GameEvent::GameOver { winner } => {
                self.result_text = format!("{} wins the game!", winner);
                self.ability_messages.clear();
                self.centre = None;
                self.winner = Some(*winner);
            }
        }
    }

    /// Update the table for a batch of events, in order.
    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    /// Card count label, e.g. `"Player: 5 cards"`.
    #[must_use]
    pub fn count_text(&self, side: Side) -> String {
        format!("{}: {} cards", side, self.hand_sizes[side])
    }

    #[must_use]
    pub fn hand_size(&self, side: Side) -> usize {
        self.hand_sizes[side]
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    /// Last round result or game over text.
    #[must_use]
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    /// Ability messages of the last round, in firing order.
    #[must_use]
    pub fn ability_messages(&self) -> &[String] {
        &self.ability_messages
    }

    /// The two cards in the centre while a round is on display.
    #[must_use]
    pub fn centre(&self) -> Option<&SideMap<CardInstance>> {
        self.centre.as_ref()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.count_text(Side::Computer))?;
        if let Some(centre) = &self.centre {
            writeln!(f, "  {}  vs  {}", centre[Side::Player], centre[Side::Computer])?;
        }
        if !self.result_text.is_empty() {
            writeln!(f, "{}", self.result_text)?;
        }
        for message in &self.ability_messages {
            writeln!(f, "{}", message)?;
        }
        write!(f, "{}", self.count_text(Side::Player))
    }
}

fn result_text(result: &RoundResult) -> String {
    let name = |side: Side| &result.cards[side].name;
    let power = |side: Side| result.powers[side];
    match result.outcome {
        RoundOutcome::Winner(winner) => {
            let loser = winner.opponent();
            format!(
                "{} wins! {} ({}) beats {} ({})",
                winner,
                name(winner),
                power(winner),
                name(loser),
                power(loser)
            )
        }
        RoundOutcome::Tie => format!("Draw! Both cards have power {}", power(Side::Player)),
    }
}
