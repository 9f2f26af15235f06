//! Property tests: stat bounds and pellet limits hold for arbitrary
//! sequences of actions and elapsed time.

use bunny_logic::actions::{Action, Food, PlayKind};
use bunny_logic::clock::ManualClock;
use bunny_logic::engine::BunnyEngine;
use bunny_logic::stats::Stats;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Act(Action),
    Wait(f64),
    Status,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Feed(Food::Carrot)),
        (-20i64..=500).prop_map(|count| Action::Feed(Food::Pellet { count })),
        Just(Action::Play(PlayKind::Pat)),
        Just(Action::Play(PlayKind::Toy)),
        Just(Action::Clean),
        Just(Action::Reset),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => action_strategy().prop_map(Op::Act),
        2 => (0.0f64..100_000.0).prop_map(Op::Wait),
        1 => Just(Op::Status),
    ]
}

proptest! {
    #[test]
    fn stats_stay_in_bounds(ops in proptest::collection::vec(op_strategy(), 1..64)) {
        let clock = ManualClock::default();
        let mut bunny = BunnyEngine::with_clock(clock.clone());

        for op in ops {
            let snap = match op {
                Op::Act(action) => bunny.apply(action),
                Op::Wait(secs) => {
                    clock.advance(secs);
                    continue;
                }
                Op::Status => bunny.status(),
            };
            prop_assert!(snap.stats().in_bounds(), "out of bounds: {:?}", snap);
            prop_assert!((0.0..=100.0).contains(&snap.overall_health));
        }
    }

    #[test]
    fn pellets_relieve_at_most_ten_hunger(
        prefix in proptest::collection::vec(action_strategy(), 0..16),
        count in 1i64..10_000,
    ) {
        let clock = ManualClock::default();
        let mut bunny = BunnyEngine::with_clock(clock);
        for action in prefix {
            bunny.apply(action);
        }
        let before = bunny.status().hunger;
        let after = bunny.feed(Food::Pellet { count }).hunger;
        prop_assert!(before - after <= 10.0 + 1e-9);
        prop_assert!(after <= before);
    }

    #[test]
    fn reset_always_restores_defaults(ops in proptest::collection::vec(op_strategy(), 0..32)) {
        let clock = ManualClock::default();
        let mut bunny = BunnyEngine::with_clock(clock.clone());
        for op in ops {
            match op {
                Op::Act(action) => { bunny.apply(action); }
                Op::Wait(secs) => clock.advance(secs),
                Op::Status => { bunny.status(); }
            }
        }
        let snap = bunny.reset();
        prop_assert_eq!(snap.stats(), Stats::INITIAL);
        prop_assert!(!snap.easter_bunny);
        prop_assert_eq!(bunny.perfect_count(), 0);
    }
}
