//! Unit tests for pet-behavior.

use pet_core::{PetRng, Point, ScreenBounds, Timestamp};

use crate::{Behavior, BehaviorEngine, EngineConfig, Intent, NeedsState, Personality, SwitchReason};

// ── Helpers ───────────────────────────────────────────────────────────────────

const T: Timestamp = Timestamp(1_700_000_000.0);

fn personality(playfulness: f64, laziness: f64, curiosity: f64) -> Personality {
    Personality::new(playfulness, laziness, curiosity, 0.5).unwrap()
}

/// Needs with no pending decay at `T` and a behavior that started `age` seconds ago.
fn needs(energy: f64, hunger: f64, age: f64) -> NeedsState {
    NeedsState {
        energy,
        happiness: 50.0,
        hunger,
        last_update: T,
        target: None,
        state_change: T.offset(-age),
    }
}

fn quiet_config() -> EngineConfig {
    EngineConfig { screen: ScreenBounds::default(), snapshot_chance: 0.0 }
}

fn engine(p: Personality, n: NeedsState) -> BehaviorEngine {
    BehaviorEngine::new(p, n, quiet_config())
}

fn switch_of(intents: &[Intent]) -> Option<(Behavior, Behavior, SwitchReason)> {
    intents.iter().find_map(|i| match i {
        Intent::ChangeBehavior { from, to, reason } => Some((*from, *to, *reason)),
        Intent::SaveNeeds => None,
    })
}

// ── Personality ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod personality_tests {
    use super::*;

    #[test]
    fn new_accepts_range_edges() {
        let p = Personality::new(0.3, 1.0, 0.65, 0.3).unwrap();
        assert_eq!(p.playfulness(), 0.3);
        assert_eq!(p.laziness(), 1.0);
        assert_eq!(p.curiosity(), 0.65);
        assert_eq!(p.friendliness(), 0.3);
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Personality::new(0.29, 0.5, 0.5, 0.5).is_err());
        assert!(Personality::new(0.5, 1.01, 0.5, 0.5).is_err());
        assert!(Personality::new(0.5, 0.5, f64::NAN, 0.5).is_err());
        assert!(Personality::new(0.5, 0.5, 0.5, f64::INFINITY).is_err());
    }

    #[test]
    fn random_traits_in_range() {
        let mut rng = PetRng::new(7);
        for _ in 0..500 {
            let p = Personality::random(&mut rng);
            for t in [p.playfulness(), p.laziness(), p.curiosity(), p.friendliness()] {
                assert!((0.3..=1.0).contains(&t), "trait {t} out of range");
            }
        }
    }

    #[test]
    fn random_is_seed_deterministic() {
        let a = Personality::random(&mut PetRng::new(99));
        let b = Personality::random(&mut PetRng::new(99));
        assert_eq!(a, b);
    }
}

// ── NeedsState ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod needs_tests {
    use super::*;

    #[test]
    fn fresh_defaults() {
        let n = NeedsState::fresh(T);
        assert_eq!(n.energy, 100.0);
        assert_eq!(n.happiness, 100.0);
        assert_eq!(n.hunger, 0.0);
        assert_eq!(n.last_update, T);
        assert_eq!(n.state_change, T);
        assert!(n.target.is_none());
    }

    #[test]
    fn decay_rates() {
        let mut n = NeedsState::fresh(T);
        n.happiness = 50.0;
        n.decay(100.0, 1.0);
        assert!((n.energy - 90.0).abs() < 1e-9);
        assert!((n.hunger - 15.0).abs() < 1e-9);
        assert!((n.happiness - 45.0).abs() < 1e-9);
    }

    #[test]
    fn decay_clamps_long_absence() {
        let mut n = NeedsState::fresh(T);
        n.decay(1.0e7, 1.0);
        assert_eq!(n.energy, 0.0);
        assert_eq!(n.hunger, 100.0);
        assert_eq!(n.happiness, 0.0);
        assert!(n.in_range());
    }

    #[test]
    fn feed_scenario() {
        let mut n = NeedsState::fresh(T);
        n.hunger = 50.0;
        n.happiness = 50.0;
        n.feed();
        assert_eq!(n.hunger, 20.0);
        assert_eq!(n.happiness, 60.0);
    }

    #[test]
    fn feed_and_pet_clamp() {
        let mut n = NeedsState::fresh(T);
        n.hunger = 10.0;
        n.feed();
        assert_eq!(n.hunger, 0.0);
        assert_eq!(n.happiness, 100.0);

        n.happiness = 95.0;
        n.pet();
        assert_eq!(n.happiness, 100.0);
    }

    #[test]
    fn restore_validates() {
        let ok = NeedsState::restore(80.0, 70.0, 30.0, T, T).unwrap();
        assert_eq!(ok.energy, 80.0);
        assert!(ok.target.is_none());

        assert!(NeedsState::restore(101.0, 70.0, 30.0, T, T).is_err());
        assert!(NeedsState::restore(80.0, -1.0, 30.0, T, T).is_err());
        assert!(NeedsState::restore(80.0, 70.0, f64::NAN, T, T).is_err());
        assert!(NeedsState::restore(80.0, 70.0, 30.0, Timestamp(f64::INFINITY), T).is_err());
    }
}

// ── Behavior table ────────────────────────────────────────────────────────────

#[cfg(test)]
mod behavior_tests {
    use super::*;

    #[test]
    fn profile_table() {
        let p = Behavior::Sleeping.profile();
        assert_eq!(p.base_weight, 0.3);
        assert_eq!((p.min_dwell, p.max_dwell), (10.0, 30.0));
        assert_eq!(Behavior::Idle.profile().base_weight, 1.0);
        assert_eq!(Behavior::Walking.profile().max_dwell, 15.0);
    }

    #[test]
    fn weights_follow_needs() {
        let p = personality(1.0, 1.0, 1.0);
        let rested = needs(100.0, 0.0, 0.0);
        assert_eq!(Behavior::Sleeping.weight(&p, &rested), 0.0);
        assert_eq!(Behavior::Hunting.weight(&p, &rested), 0.0);
        assert_eq!(Behavior::Playing.weight(&p, &rested), 0.5);
        assert_eq!(Behavior::Idle.weight(&p, &rested), 1.0);
        assert_eq!(Behavior::Walking.weight(&p, &rested), 0.7);

        let tired_hungry = needs(0.0, 100.0, 0.0);
        assert_eq!(Behavior::Playing.weight(&p, &tired_hungry), 0.0);
        assert_eq!(Behavior::Sleeping.weight(&p, &tired_hungry), 0.3);
        assert_eq!(Behavior::Hunting.weight(&p, &tired_hungry), 0.4);
    }

    #[test]
    fn weights_scale_with_personality() {
        let p = personality(0.5, 0.5, 0.5);
        let n = needs(50.0, 50.0, 0.0);
        assert!((Behavior::Playing.weight(&p, &n) - 0.125).abs() < 1e-12);
        assert!((Behavior::Sleeping.weight(&p, &n) - 0.075).abs() < 1e-12);
        assert!((Behavior::Hunting.weight(&p, &n) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn sample_dwell_in_range() {
        let mut rng = PetRng::new(3);
        for b in Behavior::ALL {
            let p = b.profile();
            for _ in 0..200 {
                let d = b.sample_dwell(&mut rng);
                assert!((p.min_dwell..=p.max_dwell).contains(&d));
            }
        }
    }

    #[test]
    fn seeks_target_and_names() {
        assert!(Behavior::Walking.seeks_target());
        assert!(Behavior::Hunting.seeks_target());
        assert!(!Behavior::Sleeping.seeks_target());
        assert_eq!(Behavior::Playing.to_string(), "playing");
        assert_eq!(Behavior::default(), Behavior::Idle);
    }
}

// ── BehaviorEngine ────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine_tests {
    use super::*;

    #[test]
    fn energy_decay_scenario() {
        let mut n = NeedsState::fresh(T);
        n.state_change = T.offset(100.0); // behavior just started: no switch due
        let mut eng = engine(personality(0.5, 1.0, 0.5), n);
        let mut rng = PetRng::new(1);

        let intents = eng.update(T.offset(100.0), None, &mut rng);
        assert!(intents.is_empty());
        assert!((eng.needs.energy - 90.0).abs() < 1e-9);
        assert_eq!(eng.needs.last_update, T.offset(100.0));
        assert_eq!(eng.behavior(), Behavior::Idle);
    }

    #[test]
    fn same_timestamp_is_idempotent_for_needs() {
        let mut eng = engine(personality(0.5, 0.7, 0.5), needs(60.0, 40.0, 0.0));
        let mut rng = PetRng::new(2);
        eng.update(T, None, &mut rng);
        let before = (eng.needs.energy, eng.needs.hunger, eng.needs.happiness);
        eng.update(T, None, &mut rng);
        let after = (eng.needs.energy, eng.needs.hunger, eng.needs.happiness);
        assert_eq!(before, after);
    }

    #[test]
    fn clock_going_backwards_does_not_decay() {
        let mut eng = engine(personality(0.5, 1.0, 0.5), needs(60.0, 40.0, 0.0));
        let mut rng = PetRng::new(2);
        eng.update(T.offset(-500.0), None, &mut rng);
        assert_eq!(eng.needs.energy, 60.0);
        assert_eq!(eng.needs.hunger, 40.0);
    }

    #[test]
    fn exhausted_always_sleeps() {
        for seed in 0..50 {
            let mut eng = engine(personality(1.0, 0.3, 1.0), needs(10.0, 95.0, 1000.0));
            let mut rng = PetRng::new(seed);
            let intents = eng.update(T, Some(Point::new(5.0, 5.0)), &mut rng);
            let (from, to, reason) = switch_of(&intents).expect("switch due");
            assert_eq!(from, Behavior::Idle);
            assert_eq!(to, Behavior::Sleeping);
            assert_eq!(reason, SwitchReason::Exhausted);
            assert_eq!(eng.behavior(), Behavior::Sleeping);
            assert_eq!(eng.needs.state_change, T);
        }
    }

    #[test]
    fn starving_always_hunts_and_keeps_target() {
        for seed in 0..50 {
            let mut n = needs(20.0, 81.0, 1000.0);
            n.target = Some(Point::new(300.0, 400.0));
            let mut eng = engine(personality(1.0, 1.0, 1.0), n);
            let mut rng = PetRng::new(seed);
            let intents = eng.update(T, Some(Point::new(5.0, 5.0)), &mut rng);
            let (_, to, reason) = switch_of(&intents).expect("switch due");
            assert_eq!(to, Behavior::Hunting);
            assert_eq!(reason, SwitchReason::Starving);
            assert_eq!(eng.needs.target, Some(Point::new(300.0, 400.0)));
        }
    }

    #[test]
    fn starving_without_target_stays_targetless() {
        let mut eng = engine(personality(1.0, 1.0, 1.0), needs(50.0, 90.0, 1000.0));
        let mut rng = PetRng::new(11);
        eng.update(T, None, &mut rng);
        assert_eq!(eng.behavior(), Behavior::Hunting);
        assert!(eng.needs.target.is_none());
    }

    #[test]
    fn full_curiosity_chases_cursor() {
        let cursor = Point::new(640.0, 360.0);
        for seed in 0..50 {
            let mut eng = engine(personality(0.5, 0.5, 1.0), needs(60.0, 10.0, 1000.0));
            let mut rng = PetRng::new(seed);
            let intents = eng.update(T, Some(cursor), &mut rng);
            let (_, to, reason) = switch_of(&intents).expect("switch due");
            assert_eq!(to, Behavior::Hunting);
            assert_eq!(reason, SwitchReason::CursorSpotted);
            assert_eq!(eng.needs.target, Some(cursor));
        }
    }

    #[test]
    fn sleeping_pet_ignores_cursor() {
        for seed in 0..50 {
            let n = needs(60.0, 10.0, 1000.0);
            let mut eng = engine(personality(0.5, 0.5, 1.0), n).with_behavior(Behavior::Sleeping);
            let mut rng = PetRng::new(seed);
            let intents = eng.update(T, Some(Point::new(1.0, 1.0)), &mut rng);
            let (from, _, reason) = switch_of(&intents).expect("switch due");
            assert_eq!(from, Behavior::Sleeping);
            assert_eq!(reason, SwitchReason::Whim);
            assert_ne!(eng.needs.target, Some(Point::new(1.0, 1.0)));
        }
    }

    #[test]
    fn lottery_targets_lie_on_screen() {
        let screen = ScreenBounds::new(800.0, 600.0, 100.0);
        let mut walked = 0;
        for seed in 0..300 {
            let mut eng = BehaviorEngine::new(
                personality(0.5, 0.5, 0.5),
                needs(60.0, 50.0, 1000.0),
                EngineConfig { screen, snapshot_chance: 0.0 },
            );
            let mut rng = PetRng::new(seed);
            eng.update(T, None, &mut rng);
            match eng.behavior() {
                Behavior::Walking | Behavior::Hunting => {
                    walked += 1;
                    let t = eng.needs.target.expect("wandering behavior has a target");
                    assert!((0.0..=800.0).contains(&t.x));
                    assert!((0.0..=600.0).contains(&t.y));
                }
                _ => assert!(eng.needs.target.is_none()),
            }
        }
        assert!(walked > 0, "lottery never picked a wandering behavior");
    }

    #[test]
    fn no_switch_before_shortest_dwell() {
        for seed in 0..50 {
            let mut eng = engine(personality(0.5, 0.5, 0.5), needs(60.0, 10.0, 2.9));
            let mut rng = PetRng::new(seed);
            let intents = eng.update(T, None, &mut rng);
            assert!(switch_of(&intents).is_none());
        }
    }

    #[test]
    fn always_switches_after_longest_dwell() {
        for seed in 0..50 {
            let mut eng = engine(personality(0.5, 0.5, 0.5), needs(60.0, 10.0, 8.01));
            let mut rng = PetRng::new(seed);
            let intents = eng.update(T, None, &mut rng);
            assert!(switch_of(&intents).is_some());
        }
    }

    #[test]
    fn snapshot_chance_extremes() {
        let cfg = EngineConfig { snapshot_chance: 1.0, ..quiet_config() };
        let mut eng = BehaviorEngine::new(personality(0.5, 0.5, 0.5), needs(60.0, 10.0, 0.0), cfg);
        let mut rng = PetRng::new(4);
        for i in 0..10 {
            let intents = eng.update(T.offset(i as f64 * 0.05), None, &mut rng);
            assert!(intents.contains(&Intent::SaveNeeds));
        }

        let mut eng = engine(personality(0.5, 0.5, 0.5), needs(60.0, 10.0, 0.0));
        for i in 0..10 {
            let intents = eng.update(T.offset(i as f64 * 0.05), None, &mut rng);
            assert!(!intents.contains(&Intent::SaveNeeds));
        }
    }

    #[test]
    fn set_config_rejects_bad_chance() {
        let mut eng = engine(personality(0.5, 0.5, 0.5), needs(60.0, 10.0, 0.0));
        assert!(eng.set_config(EngineConfig { snapshot_chance: -0.1, ..quiet_config() }).is_err());
        assert!(eng.set_config(EngineConfig { snapshot_chance: 0.5, ..quiet_config() }).is_ok());
        assert_eq!(eng.config().snapshot_chance, 0.5);
    }

    #[test]
    fn target_reached_clears_target() {
        let mut n = needs(60.0, 10.0, 0.0);
        n.target = Some(Point::new(1.0, 2.0));
        let mut eng = engine(personality(0.5, 0.5, 0.5), n);
        eng.target_reached();
        assert!(eng.needs.target.is_none());
        eng.target_reached();
        assert!(eng.needs.target.is_none());
    }

    #[test]
    fn cursor_moved_retargets_only_while_hunting() {
        let mut eng = engine(personality(0.5, 0.5, 0.5), needs(60.0, 10.0, 0.0));
        eng.cursor_moved(Point::new(9.0, 9.0));
        assert!(eng.needs.target.is_none());

        let mut eng = eng.with_behavior(Behavior::Hunting);
        eng.cursor_moved(Point::new(9.0, 9.0));
        assert_eq!(eng.needs.target, Some(Point::new(9.0, 9.0)));
    }

    #[test]
    fn pet_and_feed_bypass_selection() {
        let mut eng = engine(personality(0.5, 0.5, 0.5), needs(60.0, 50.0, 0.0));
        eng.feed();
        eng.pet();
        assert_eq!(eng.needs.hunger, 20.0);
        assert_eq!(eng.needs.happiness, 70.0);
        assert_eq!(eng.behavior(), Behavior::Idle);
    }
}

// ── Invariants ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn needs_stay_in_range(
            energy in 0.0f64..=100.0,
            hunger in 0.0f64..=100.0,
            happiness in 0.0f64..=100.0,
            laziness in 0.3f64..=1.0,
            curiosity in 0.3f64..=1.0,
            steps in proptest::collection::vec(-10.0f64..5_000.0, 1..20),
            seed in any::<u64>(),
        ) {
            let mut n = needs(energy, hunger, 0.0);
            n.happiness = happiness;
            let mut eng = engine(personality(0.6, laziness, curiosity), n);
            let mut rng = PetRng::new(seed);
            let mut now = T;
            for (i, dt) in steps.into_iter().enumerate() {
                now = now.offset(dt);
                let cursor = (i % 2 == 0).then(|| Point::new(100.0, 100.0));
                eng.update(now, cursor, &mut rng);
                prop_assert!(eng.needs.in_range(), "needs escaped range: {:?}", eng.needs);
            }
        }

        #[test]
        fn low_energy_forces_sleep(
            energy in 0.0f64..19.99,
            hunger in 0.0f64..=100.0,
            seed in any::<u64>(),
        ) {
            let mut eng = engine(personality(1.0, 0.3, 1.0), needs(energy, hunger, 1000.0));
            let mut rng = PetRng::new(seed);
            eng.update(T, Some(Point::new(1.0, 1.0)), &mut rng);
            prop_assert_eq!(eng.behavior(), Behavior::Sleeping);
        }

        #[test]
        fn high_hunger_forces_hunt(
            energy in 20.0f64..=100.0,
            hunger in 80.01f64..=100.0,
            seed in any::<u64>(),
        ) {
            let mut eng = engine(personality(1.0, 1.0, 0.3), needs(energy, hunger, 1000.0));
            let mut rng = PetRng::new(seed);
            eng.update(T, None, &mut rng);
            prop_assert_eq!(eng.behavior(), Behavior::Hunting);
        }
    }
}
