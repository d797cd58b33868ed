//! The round engine.
//!
//! Drives the game state machine:
//!
//! ```text
//! Idle --InitiateRound--> RoundInProgress --FinishRound timer--> Idle
//!   \--InitiateRound with an empty hand--> GameOver --ResetGame timer--> Idle (new deal)
//! ```
//!
//! Time is never read from a clock. Callers pass `now` (game time since an
//! arbitrary epoch) into every call, and due timers fire on the next call
//! that reaches their time.

use std::time::Duration;

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::elemental::elemental_power;
use crate::cards::{CardId, CardInstance, CardRegistry};
use crate::core::{
    CheckpointError, ConfigError, GameConfig, GameState, Phase, Side, SideMap, TiePolicy,
};
use crate::effects::{dispatch_ability, AbilityTrigger};
use crate::events::{EventBatch, GameEvent, HandSnapshot, RoundOutcome, RoundResult};
use crate::schedule::{Scheduler, Task};
use crate::zones::{Zone, ZonePosition};

/// Signals from the outside world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// Play one round.
    InitiateRound,
    /// Abandon the current game and deal a new one.
    InitiateGame,
}

/// Serialized form of a `RoundEngine`.
#[derive(Serialize, Deserialize)]
struct EngineCheckpoint {
    state: Vec<u8>,
    timers: Scheduler,
}

/// Round engine: game state, rules and pacing timers.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use elemental_duel::cards::catalog;
/// use elemental_duel::core::{GameConfig, Phase};
/// use elemental_duel::rules::{Input, RoundEngine};
///
/// let mut engine = RoundEngine::new(GameConfig::default(), catalog::standard(), 42).unwrap();
/// engine.initiate_game();
///
/// let events = engine.handle(Input::InitiateRound, Duration::ZERO);
/// assert!(!events.is_empty());
/// assert_eq!(engine.state().phase, Phase::RoundInProgress);
///
/// // Ignored: the round is still on display.
/// assert!(engine.handle(Input::InitiateRound, Duration::from_millis(100)).is_empty());
///
/// engine.advance(Duration::from_millis(2500));
/// assert_eq!(engine.state().phase, Phase::Idle);
/// ```
#[derive(Clone, Debug)]
pub struct RoundEngine {
    config: GameConfig,
    registry: CardRegistry,
    deck_list: Vec<CardId>,
    state: GameState,
    timers: Scheduler,
}

impl RoundEngine {
    /// Create an engine. No cards are dealt until `initiate_game`.
    pub fn new(config: GameConfig, registry: CardRegistry, seed: u64) -> Result<Self, ConfigError> {
        Self::with_state(config, registry, GameState::new(seed))
    }

    /// Create an engine around an existing state.
    ///
    /// A state carries no timers. A game that was mid-round or over gets its
    /// pending step re-armed as already due, so the next `advance` finishes
    /// the round or deals again. `restore` keeps the saved due times instead.
    pub fn with_state(
        config: GameConfig,
        registry: CardRegistry,
        state: GameState,
    ) -> Result<Self, ConfigError> {
        config.validate(&registry)?;
        let deck_list = config.deck_list(&registry);

        let mut timers = Scheduler::new();
        match state.phase {
            Phase::RoundInProgress => {
                timers.schedule(Task::FinishRound, Duration::ZERO);
            }
            Phase::GameOver { .. } => {
                timers.schedule(Task::ResetGame, Duration::ZERO);
            }
            Phase::Idle => {}
        }

        Ok(Self {
            config,
            registry,
            deck_list,
            state,
            timers,
        })
    }

    /// Save the game state and pending timers.
    pub fn checkpoint(&self) -> Result<Vec<u8>, CheckpointError> {
        let saved = EngineCheckpoint {
            state: self.state.to_bytes()?,
            timers: self.timers.clone(),
        };
        bincode::serialize(&saved).map_err(CheckpointError::Encode)
    }

    /// Rebuild an engine saved with `checkpoint`.
    ///
    /// The restored engine produces the same events as the saved one for the
    /// same inputs and times.
    pub fn restore(
        config: GameConfig,
        registry: CardRegistry,
        bytes: &[u8],
    ) -> Result<Self, CheckpointError> {
        let saved: EngineCheckpoint =
            bincode::deserialize(bytes).map_err(CheckpointError::Decode)?;
        let state = GameState::from_bytes(&saved.state)?;
        let mut engine = Self::with_state(config, registry, state)?;
        engine.timers = saved.timers;
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for tools and tests that arrange specific hands.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn timers(&self) -> &Scheduler {
        &self.timers
    }

    /// Route an input signal, after firing every timer due by `now`.
    pub fn handle(&mut self, input: Input, now: Duration) -> EventBatch {
        let mut events = self.advance(now);
        let more = match input {
            Input::InitiateRound => self.initiate_round(now),
            Input::InitiateGame => self.initiate_game(),
        };
        events.extend(more);
        events
    }

    /// Fire every timer due at or before `now`.
    pub fn advance(&mut self, now: Duration) -> EventBatch {
        let mut events = EventBatch::new();
        while let Some(timer) = self.timers.pop_next_due(now) {
            trace!("{} fired: {:?}", timer.id, timer.task);
            match timer.task {
                Task::FinishRound => self.finish_round(&mut events),
                Task::ResetGame => events.extend(self.initiate_game()),
            }
        }
        events
    }

    /// Deal a new game.
    ///
    /// Cancels every pending timer first, so nothing scheduled for the old
    /// game can touch the new one.
    pub fn initiate_game(&mut self) -> EventBatch {
        self.timers.cancel_all();

        let registry = &self.registry;
        let defs = self.deck_list.iter().filter_map(|id| registry.get(*id));
        self.state.deal(defs, self.config.starting_cards);

        let piles = &self.state.piles;
        info!(
            "game {} dealt: player {} cards, computer {} cards, deck {}",
            self.state.game_number,
            piles.zone_size(Zone::Hand(Side::Player)),
            piles.zone_size(Zone::Hand(Side::Computer)),
            piles.zone_size(Zone::Deck),
        );

        let mut events = EventBatch::new();
        events.push(GameEvent::GameStarted {
            game: self.state.game_number,
            hand_sizes: SideMap::new(|side| piles.zone_size(Zone::Hand(side))),
            deck_size: piles.zone_size(Zone::Deck),
        });
        events.push(GameEvent::HandsChanged(HandSnapshot::capture(piles)));
        events
    }

    /// Play one round, if the engine is idle.
    pub fn initiate_round(&mut self, now: Duration) -> EventBatch {
        let mut events = EventBatch::new();

        if !self.state.is_idle() {
            trace!("round trigger ignored in {:?}", self.state.phase);
            return events;
        }

        let player_empty = self.state.hand_size(Side::Player) == 0;
        let computer_empty = self.state.hand_size(Side::Computer) == 0;
        if player_empty || computer_empty {
            let winner = if player_empty { Side::Computer } else { Side::Player };
            self.state.phase = Phase::GameOver { winner };
            info!(
                "game {} over after {} rounds: {} wins",
                self.state.game_number, self.state.round_number, winner
            );
            events.push(GameEvent::GameOver { winner });
            self.timers
                .schedule(Task::ResetGame, now + self.config.game_over_delay());
            return events;
        }

        let (player_card, computer_card) = match self.draw_round_cards() {
            Some(cards) => cards,
            None => return events,
        };
        self.resolve_round(player_card, computer_card, &mut events);

        self.state.phase = Phase::RoundInProgress;
        self.timers
            .schedule(Task::FinishRound, now + self.config.round_delay());
        events
    }

    /// Play rounds spaced by the round delay until the game ends.
    ///
    /// Returns the winner, or `None` if `max_rounds` rounds were not enough.
    /// Leaves the engine in `GameOver` with the reset timer pending.
    pub fn play_to_end(&mut self, start: Duration, max_rounds: u32) -> Option<Side> {
        let mut now = start;
        for _ in 0..=max_rounds {
            self.handle(Input::InitiateRound, now);
            if let Some(winner) = self.state.winner() {
                return Some(winner);
            }
            now += self.config.round_delay();
        }
        None
    }

    fn draw_round_cards(&mut self) -> Option<(CardInstance, CardInstance)> {
        let state = &mut self.state;
        let sizes = SideMap::new(|side| state.hand_size(side));
        let pi = state.rng.pick_index(sizes[Side::Player])?;
        let ci = state.rng.pick_index(sizes[Side::Computer])?;
        let player_card = state.piles.take_at(Zone::Hand(Side::Player), pi)?;
        let computer_card = state.piles.take_at(Zone::Hand(Side::Computer), ci)?;
        Some((player_card, computer_card))
    }

    fn resolve_round(
        &mut self,
        player_card: CardInstance,
        computer_card: CardInstance,
        events: &mut EventBatch,
    ) {
        self.state.round_number += 1;

        let powers = SideMap::from_parts(
            elemental_power(&player_card, &computer_card),
            elemental_power(&computer_card, &player_card),
        );
        let outcome = if powers[Side::Player] > powers[Side::Computer] {
            RoundOutcome::Winner(Side::Player)
        } else if powers[Side::Player] < powers[Side::Computer] {
            RoundOutcome::Winner(Side::Computer)
        } else {
            RoundOutcome::Tie
        };
        let result = RoundResult {
            round: self.state.round_number,
            cards: SideMap::from_parts(player_card, computer_card),
            powers,
            outcome,
        };

        debug!(
            "round {}: {} ({}) vs {} ({}) -> {:?}",
            result.round,
            result.cards[Side::Player],
            result.powers[Side::Player],
            result.cards[Side::Computer],
            result.powers[Side::Computer],
            result.outcome,
        );

        let piles = &mut self.state.piles;
        match result.outcome {
            RoundOutcome::Winner(winner) => {
                let loser = winner.opponent();
                piles.add(result.cards[winner].clone(), Zone::Hand(winner), ZonePosition::Bottom);
                piles.add(result.cards[loser].clone(), Zone::Hand(winner), ZonePosition::Bottom);
            }
            RoundOutcome::Tie => {
                let destination = match self.config.tie_policy {
                    TiePolicy::ReturnToDeck => Zone::Deck,
                    TiePolicy::Discard => Zone::Removed,
                };
                for side in Side::BOTH {
                    piles.add(result.cards[side].clone(), destination, ZonePosition::Bottom);
                }
            }
        }

        events.push(GameEvent::RoundResolved(result.clone()));

        if let RoundOutcome::Winner(winner) = result.outcome {
            let loser = winner.opponent();
            let triggers = [
                AbilityTrigger::won(&result.cards[winner], &result.cards[loser], winner),
                AbilityTrigger::lost(&result.cards[loser], &result.cards[winner], loser),
            ];
            for trigger in &triggers {
                if let Some(outcome) =
                    dispatch_ability(piles, trigger, self.config.ability_beneficiary)
                {
                    events.push(GameEvent::AbilityTriggered(outcome));
                }
            }
        }

        events.push(GameEvent::HandsChanged(HandSnapshot::capture(piles)));
    }

    fn finish_round(&mut self, events: &mut EventBatch) {
        if self.state.phase != Phase::RoundInProgress {
            return;
        }
        self.state.phase = Phase::Idle;
        events.push(GameEvent::RoundFinished {
            round: self.state.round_number,
        });
        events.push(GameEvent::HandsChanged(HandSnapshot::capture(&self.state.piles)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{catalog, CardDefinition, Element};
    use crate::core::EntityId;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn engine() -> RoundEngine {
        RoundEngine::new(GameConfig::default(), catalog::standard(), 42).unwrap()
    }

    /// Replace both hands with exactly the given cards and empty the deck.
    fn arrange(engine: &mut RoundEngine, player: Vec<CardInstance>, computer: Vec<CardInstance>) {
        let piles = &mut engine.state_mut().piles;
        piles.clear();
        for card in player {
            piles.add(card, Zone::Hand(Side::Player), ZonePosition::Bottom);
        }
        for card in computer {
            piles.add(card, Zone::Hand(Side::Computer), ZonePosition::Bottom);
        }
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = GameConfig::default().with_deck([CardId::new(999)]);
        assert!(matches!(
            RoundEngine::new(config, catalog::standard(), 1),
            Err(ConfigError::UnknownCard(_))
        ));
    }

    #[test]
    fn test_initiate_game_events() {
        let mut engine = engine();
        let events = engine.initiate_game();

        assert_eq!(events.len(), 2);
        match &events[0] {
            GameEvent::GameStarted { game, hand_sizes, deck_size } => {
                assert_eq!(*game, 1);
                assert_eq!(hand_sizes[Side::Player], 5);
                assert_eq!(hand_sizes[Side::Computer], 5);
                assert_eq!(*deck_size, 2);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(events[1], GameEvent::HandsChanged(_)));
    }

    #[test]
    fn test_round_moves_cards_to_winner() {
        let mut engine = engine();
        engine.initiate_game();
        arrange(
            &mut engine,
            vec![CardInstance::plain(EntityId(0), "A", 10).with_element(Element::Fire)],
            vec![CardInstance::plain(EntityId(1), "B", 10).with_element(Element::Water)],
        );

        let events = engine.initiate_round(ms(0));

        let GameEvent::RoundResolved(result) = &events[0] else {
            panic!("expected round result first");
        };
        assert_eq!(result.powers[Side::Player], 5);
        assert_eq!(result.powers[Side::Computer], 20);
        assert_eq!(result.outcome, RoundOutcome::Winner(Side::Computer));

        let hand = engine.state().piles.hand(Side::Computer);
        let ids: Vec<_> = hand.iter().map(|c| c.entity_id).collect();
        assert_eq!(ids, vec![EntityId(1), EntityId(0)]);
        assert_eq!(engine.state().hand_size(Side::Player), 0);
        assert!(matches!(events.last(), Some(GameEvent::HandsChanged(_))));
    }

    #[test]
    fn test_tie_returns_cards_to_deck_bottom() {
        let mut engine = engine();
        engine.initiate_game();
        arrange(
            &mut engine,
            vec![CardInstance::plain(EntityId(0), "A", 4)],
            vec![CardInstance::plain(EntityId(1), "B", 4)],
        );
        engine
            .state_mut()
            .piles
            .add(CardInstance::plain(EntityId(2), "C", 1), Zone::Deck, ZonePosition::Bottom);

        let events = engine.initiate_round(ms(0));

        assert!(matches!(&events[0], GameEvent::RoundResolved(r) if r.is_tie()));
        let deck: Vec<_> = engine.state().piles.deck().iter().map(|c| c.entity_id).collect();
        assert_eq!(deck, vec![EntityId(2), EntityId(0), EntityId(1)]);
        assert_eq!(engine.state().piles.total_cards(), 3);
    }

    #[test]
    fn test_tie_discard_policy() {
        let config = GameConfig::default().with_tie_policy(TiePolicy::Discard);
        let mut engine = RoundEngine::new(config, catalog::standard(), 42).unwrap();
        engine.initiate_game();
        arrange(
            &mut engine,
            vec![CardInstance::plain(EntityId(0), "A", 4)],
            vec![CardInstance::plain(EntityId(1), "B", 4)],
        );

        engine.initiate_round(ms(0));

        assert_eq!(engine.state().piles.zone_size(Zone::Removed), 2);
        assert_eq!(engine.state().piles.total_cards(), 2);
    }

    #[test]
    fn test_no_round_while_in_progress() {
        let mut engine = engine();
        engine.initiate_game();

        assert!(!engine.initiate_round(ms(0)).is_empty());
        let round = engine.state().round_number;

        assert!(engine.handle(Input::InitiateRound, ms(2499)).is_empty());
        assert_eq!(engine.state().round_number, round);

        let events = engine.handle(Input::InitiateRound, ms(2500));
        assert!(matches!(events[0], GameEvent::RoundFinished { round: 1 }));
        assert_eq!(engine.state().round_number, round + 1);
    }

    #[test]
    fn test_empty_hand_game_over() {
        let mut engine = engine();
        engine.initiate_game();
        arrange(&mut engine, vec![], vec![CardInstance::plain(EntityId(1), "B", 4)]);

        let events = engine.initiate_round(ms(0));

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::GameOver { winner: Side::Computer }));
        assert_eq!(engine.state().winner(), Some(Side::Computer));
        assert_eq!(engine.state().hand_size(Side::Computer), 1);
        assert_eq!(engine.timers().len(), 1);
    }

    #[test]
    fn test_player_empty_takes_precedence() {
        let mut engine = engine();
        engine.initiate_game();
        arrange(&mut engine, vec![], vec![]);

        let events = engine.initiate_round(ms(0));
        assert!(matches!(events[0], GameEvent::GameOver { winner: Side::Computer }));
    }

    #[test]
    fn test_game_over_resets_after_delay() {
        let mut engine = engine();
        engine.initiate_game();
        arrange(&mut engine, vec![CardInstance::plain(EntityId(0), "A", 4)], vec![]);

        engine.initiate_round(ms(1000));
        assert_eq!(engine.state().winner(), Some(Side::Player));

        // Triggers are ignored while the game is over.
        assert!(engine.handle(Input::InitiateRound, ms(2000)).is_empty());

        let events = engine.advance(ms(4000));
        assert!(matches!(events[0], GameEvent::GameStarted { game: 2, .. }));
        assert!(engine.state().is_idle());
        assert_eq!(engine.state().hand_size(Side::Player), 5);
    }

    #[test]
    fn test_reset_cancels_pending_finish() {
        let mut engine = engine();
        engine.initiate_game();
        engine.initiate_round(ms(0));
        assert_eq!(engine.timers().len(), 1);

        engine.handle(Input::InitiateGame, ms(100));
        assert!(engine.timers().is_empty());
        assert!(engine.state().is_idle());

        // The stale FinishRound would have fired here.
        let events = engine.advance(ms(5000));
        assert!(events.is_empty());
    }

    #[test]
    fn test_abilities_follow_round_result() {
        let mut registry = CardRegistry::new();
        registry
            .register(CardDefinition::new(CardId::new(1), "Filler", 1))
            .unwrap();
        let mut engine = RoundEngine::new(GameConfig::default(), registry, 3).unwrap();
        engine.initiate_game();
        arrange(
            &mut engine,
            vec![CardInstance::plain(EntityId(0), "Imp", 6)
                .with_ability(crate::cards::Ability::DrawExtra, 1)],
            vec![CardInstance::plain(EntityId(1), "Toad", 2)
                .with_ability(crate::cards::Ability::DoublePower, 0)],
        );
        engine
            .state_mut()
            .piles
            .add(CardInstance::plain(EntityId(2), "Top", 1), Zone::Deck, ZonePosition::Top);

        let events = engine.initiate_round(ms(0));
        let kinds: Vec<_> = events.iter().map(GameEvent::kind).collect();
        assert_eq!(
            kinds,
            vec!["round_resolved", "ability_triggered", "ability_triggered", "hands_changed"]
        );

        let piles = &engine.state().piles;
        assert_eq!(piles.zone_size(Zone::Hand(Side::Player)), 3);
        assert_eq!(piles.get(EntityId(1)).unwrap().power, 4);
    }

    #[test]
    fn test_with_state_mid_round_finishes_round() {
        let mut engine = engine();
        engine.initiate_game();
        engine.handle(Input::InitiateRound, ms(0));
        let bytes = engine.state().to_bytes().unwrap();

        let state = GameState::from_bytes(&bytes).unwrap();
        let mut restored =
            RoundEngine::with_state(GameConfig::default(), catalog::standard(), state).unwrap();
        assert_eq!(restored.state().phase, Phase::RoundInProgress);

        let events = restored.advance(ms(3_600_000));
        assert!(matches!(events[0], GameEvent::RoundFinished { round: 1 }));
        assert!(restored.state().is_idle());

        let events = restored.handle(Input::InitiateRound, ms(7_200_000));
        assert!(matches!(events[0], GameEvent::RoundResolved(_)));
        assert_eq!(restored.state().round_number, 2);
    }

    #[test]
    fn test_with_state_game_over_deals_again() {
        let mut engine = engine();
        engine.initiate_game();
        arrange(&mut engine, vec![], vec![CardInstance::plain(EntityId(1), "B", 4)]);
        engine.initiate_round(ms(0));
        let bytes = engine.state().to_bytes().unwrap();

        let state = GameState::from_bytes(&bytes).unwrap();
        let mut restored =
            RoundEngine::with_state(GameConfig::default(), catalog::standard(), state).unwrap();
        assert_eq!(restored.state().winner(), Some(Side::Computer));

        let events = restored.advance(ms(1));
        assert!(matches!(events[0], GameEvent::GameStarted { game: 2, .. }));
        assert!(restored.state().is_idle());
        assert_eq!(restored.state().hand_size(Side::Player), 5);
    }

    #[test]
    fn test_checkpoint_keeps_due_times() {
        let mut engine = engine();
        engine.initiate_game();
        engine.handle(Input::InitiateRound, ms(1000));
        let bytes = engine.checkpoint().unwrap();

        let mut restored =
            RoundEngine::restore(GameConfig::default(), catalog::standard(), &bytes).unwrap();
        assert_eq!(restored.timers().next_due(), Some(ms(3500)));

        assert!(restored.advance(ms(3499)).is_empty());
        assert_eq!(restored.advance(ms(3500)), engine.advance(ms(3500)));
        assert_eq!(
            restored.handle(Input::InitiateRound, ms(3500)),
            engine.handle(Input::InitiateRound, ms(3500))
        );
    }

    #[test]
    fn test_restore_rejects_bad_input() {
        let bytes = engine().checkpoint().unwrap();
        let config = GameConfig::default().with_starting_cards(0);

        assert!(matches!(
            RoundEngine::restore(config, catalog::standard(), &bytes),
            Err(CheckpointError::Config(ConfigError::NoStartingCards))
        ));
        assert!(matches!(
            RoundEngine::restore(GameConfig::default(), catalog::standard(), &[7, 7]),
            Err(CheckpointError::Decode(_))
        ));
    }

    #[test]
    fn test_play_to_end_terminates() {
        let mut engine = engine();
        engine.initiate_game();
        let total = engine.state().piles.total_cards();

        let winner = engine.play_to_end(ms(0), 10_000);
        assert!(winner.is_some());
        assert_eq!(engine.state().piles.total_cards(), total);
    }
}
