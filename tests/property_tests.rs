//! Property tests: card conservation, determinism and checkpoint resume.

use std::time::Duration;

use proptest::prelude::*;

use elemental_duel::cards::{catalog, CardInstance, Element};
use elemental_duel::core::{EntityId, GameConfig, GameState, TiePolicy};
use elemental_duel::events::GameEvent;
use elemental_duel::rules::{elemental_power, Input, RoundEngine};

const ROUND_DELAY: u64 = 2500;

fn element() -> impl Strategy<Value = Element> {
    prop_oneof![
        Just(Element::None),
        Just(Element::Fire),
        Just(Element::Water),
        Just(Element::Earth),
    ]
}

fn tie_policy() -> impl Strategy<Value = TiePolicy> {
    prop_oneof![Just(TiePolicy::ReturnToDeck), Just(TiePolicy::Discard)]
}

fn standard(seed: u64) -> RoundEngine {
    RoundEngine::new(GameConfig::default(), catalog::standard(), seed).unwrap()
}

/// Play `rounds` triggers spaced by the round delay, collecting every event.
fn drive(engine: &mut RoundEngine, start: u64, rounds: usize) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for i in 0..rounds {
        let now = Duration::from_millis(start + i as u64 * ROUND_DELAY);
        events.extend(engine.handle(Input::InitiateRound, now));
    }
    events
}

proptest! {
    #[test]
    fn prop_cycle_is_symmetric(power in 0i64..1000, a in element(), b in element()) {
        let mine = CardInstance::plain(EntityId(0), "A", power).with_element(a);
        let theirs = CardInstance::plain(EntityId(1), "B", power).with_element(b);

        let forward = elemental_power(&mine, &theirs);
        let backward = elemental_power(&theirs, &mine);

        if a.beats() == Some(b) {
            prop_assert_eq!(forward, power * 2);
            prop_assert_eq!(backward, power / 2);
        } else if b.beats() == Some(a) {
            prop_assert_eq!(forward, power / 2);
            prop_assert_eq!(backward, power * 2);
        } else {
            prop_assert_eq!(forward, power);
            prop_assert_eq!(backward, power);
        }
    }

    #[test]
    fn prop_cards_conserved(seed in any::<u64>(), rounds in 1usize..120, policy in tie_policy()) {
        let config = GameConfig::default().with_tie_policy(policy);
        let mut engine = RoundEngine::new(config, catalog::standard(), seed).unwrap();
        engine.initiate_game();
        let total = engine.state().piles.total_cards();

        for i in 0..rounds {
            let now = Duration::from_millis(i as u64 * ROUND_DELAY);
            let events = engine.handle(Input::InitiateRound, now);
            prop_assert_eq!(engine.state().piles.total_cards(), total);

            for event in &events {
                if let GameEvent::HandsChanged(snapshot) = event {
                    let seen = snapshot.hands.iter().map(|(_, h)| h.len()).sum::<usize>()
                        + snapshot.deck_size
                        + snapshot.removed;
                    prop_assert_eq!(seen, total);
                }
            }
        }
    }

    #[test]
    fn prop_same_seed_same_game(seed in any::<u64>(), rounds in 1usize..60) {
        let mut a = RoundEngine::new(GameConfig::default(), catalog::standard(), seed).unwrap();
        let mut b = RoundEngine::new(GameConfig::default(), catalog::standard(), seed).unwrap();

        let start_a: Vec<_> = a.initiate_game().into_iter().collect();
        let start_b: Vec<_> = b.initiate_game().into_iter().collect();
        prop_assert_eq!(start_a, start_b);

        prop_assert_eq!(drive(&mut a, 0, rounds), drive(&mut b, 0, rounds));
    }

    #[test]
    fn prop_checkpoint_resumes(
        seed in any::<u64>(),
        before in 0usize..40,
        offset in 0u64..ROUND_DELAY,
        after in 1usize..30,
    ) {
        let mut saved = standard(seed);
        saved.initiate_game();
        drive(&mut saved, 0, before);

        // Mid-round, game over or idle, with whatever timers are pending.
        let bytes = saved.checkpoint().unwrap();
        let mut restored =
            RoundEngine::restore(saved.config().clone(), saved.registry().clone(), &bytes)
                .unwrap();
        prop_assert_eq!(restored.state().phase, saved.state().phase);
        prop_assert_eq!(restored.timers().next_due(), saved.timers().next_due());

        let resume_at = before as u64 * ROUND_DELAY + offset;
        prop_assert_eq!(
            drive(&mut saved, resume_at, after),
            drive(&mut restored, resume_at, after)
        );
    }

    #[test]
    fn prop_state_restore_never_stalls(seed in any::<u64>(), before in 0usize..40) {
        let mut saved = standard(seed);
        saved.initiate_game();
        drive(&mut saved, 0, before);

        let bytes = saved.state().to_bytes().unwrap();
        let state = GameState::from_bytes(&bytes).unwrap();
        let mut restored =
            RoundEngine::with_state(GameConfig::default(), catalog::standard(), state).unwrap();

        restored.advance(Duration::ZERO);
        prop_assert!(restored.state().is_idle());
        prop_assert_eq!(restored.state().piles.total_cards(), saved.state().piles.total_cards());

        let events = restored.handle(Input::InitiateRound, Duration::ZERO);
        prop_assert!(!events.is_empty());
    }
}

#[test]
fn test_different_seeds_differ() {
    let deal = |seed| {
        let mut engine = standard(seed);
        engine.initiate_game();
        engine.state().piles.clone()
    };

    let piles: Vec<_> = (0..8).map(deal).collect();
    assert!(piles.iter().any(|p| *p != piles[0]));
}
