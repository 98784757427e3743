//! Unit tests for pet-motion.

use pet_behavior::Behavior;
use pet_core::{PetRng, Point, ScreenBounds};

use crate::{Facing, MotionConfig, MotionIntegrator, PhysicsState};

// ── Helpers ───────────────────────────────────────────────────────────────────

const DT: f64 = 0.05;

fn integrator_at(x: f64, y: f64) -> MotionIntegrator {
    MotionIntegrator::new(
        PhysicsState::at_rest(Point::new(x, y)),
        ScreenBounds::default(),
        MotionConfig::default(),
    )
    .unwrap()
}

// ── PhysicsState ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod physics_state {
    use super::*;

    #[test]
    fn at_rest_defaults() {
        let s = PhysicsState::at_rest(Point::new(3.0, 4.0));
        assert_eq!(s.velocity, Point::ZERO);
        assert_eq!(s.acceleration, Point::ZERO);
        assert_eq!(s.facing, Facing::Right);
        assert_eq!(s.speed(), 0.0);
    }

    #[test]
    fn spawn_lands_on_whole_pixels_inside_bounds() {
        let bounds = ScreenBounds::default();
        let mut rng = PetRng::new(5);
        for _ in 0..200 {
            let s = PhysicsState::spawn(&bounds, &mut rng);
            assert!(bounds.contains(s.position));
            assert_eq!(s.position.x.fract(), 0.0);
            assert_eq!(s.position.y.fract(), 0.0);
        }
    }

    #[test]
    fn spawn_on_tiny_screen_is_origin() {
        let bounds = ScreenBounds::new(150.0, 150.0, 200.0);
        let s = PhysicsState::spawn(&bounds, &mut PetRng::new(1));
        assert_eq!(s.position, Point::ZERO);
    }

    #[test]
    fn facing_sign() {
        assert_eq!(Facing::Right.sign(), 1);
        assert_eq!(Facing::Left.sign(), -1);
        assert_eq!(Facing::from_dx(0.0), Facing::Left);
        assert_eq!(Facing::from_dx(0.1), Facing::Right);
        assert_eq!(Facing::Left.to_string(), "left");
    }
}

// ── MotionConfig ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod motion_config {
    use super::*;

    #[test]
    fn rejects_bad_friction() {
        for friction in [0.0, -0.5, 1.0, 1.01, f64::NAN] {
            let cfg = MotionConfig { friction, ..MotionConfig::default() };
            assert!(cfg.validate().is_err(), "friction {friction} accepted");
        }
    }

    #[test]
    fn rejects_bad_acceleration() {
        for accel in [-1.0, f64::NAN, f64::INFINITY] {
            let hunt = MotionConfig { hunt_accel: accel, ..MotionConfig::default() };
            assert!(hunt.validate().is_err(), "hunt_accel {accel} accepted");
            let walk = MotionConfig { walk_accel: accel, ..MotionConfig::default() };
            assert!(walk.validate().is_err(), "walk_accel {accel} accepted");
        }
        let still = MotionConfig { hunt_accel: 0.0, walk_accel: 0.0, ..MotionConfig::default() };
        still.validate().unwrap();
    }

    #[test]
    fn new_clamps_initial_position() {
        let m = MotionIntegrator::new(
            PhysicsState::at_rest(Point::new(5000.0, -20.0)),
            ScreenBounds::default(),
            MotionConfig::default(),
        )
        .unwrap();
        assert_eq!(m.state().position, Point::new(1720.0, 0.0));
    }
}

// ── MotionIntegrator::step ────────────────────────────────────────────────────

#[cfg(test)]
mod step {
    use super::*;

    #[test]
    fn hunting_toward_right_target() {
        let mut m = integrator_at(100.0, 100.0);
        let out = m.step(DT, Behavior::Hunting, Some(Point::new(110.0, 100.0)));

        assert!(!out.arrived);
        assert_eq!(out.state.acceleration, Point::new(2.0, 0.0));
        assert!(out.state.velocity.x > 0.0);
        assert_eq!(out.state.velocity.y, 0.0);
        assert_eq!(out.state.facing, Facing::Right);
        assert!(out.state.position.x > 100.0);
        // v = 2.0 * 0.05 * 0.95
        assert!((out.state.velocity.x - 0.095).abs() < 1e-12);
        assert!((out.state.position.x - 100.095).abs() < 1e-9);
    }

    #[test]
    fn walking_uses_unit_acceleration_and_faces_left() {
        let mut m = integrator_at(500.0, 500.0);
        let out = m.step(DT, Behavior::Walking, Some(Point::new(200.0, 100.0)));
        assert!((out.state.acceleration.length() - 1.0).abs() < 1e-12);
        assert_eq!(out.state.facing, Facing::Left);
        assert!(out.state.position.x < 500.0);
        assert!(out.state.position.y < 500.0);
    }

    #[test]
    fn near_target_reports_arrival() {
        let mut m = integrator_at(100.0, 100.0);
        m.step(DT, Behavior::Hunting, Some(Point::new(300.0, 100.0)));
        let out = m.step(DT, Behavior::Hunting, Some(Point::new(103.0, 104.0))); // 5 px away
        assert!(out.arrived);
        assert_eq!(out.state.acceleration, Point::ZERO);
    }

    #[test]
    fn arrival_keeps_facing() {
        let mut m = integrator_at(100.0, 100.0);
        m.step(DT, Behavior::Walking, Some(Point::new(0.0, 100.0)));
        assert_eq!(m.state().facing, Facing::Left);
        let out = m.step(DT, Behavior::Walking, Some(m.state().position));
        assert!(out.arrived);
        assert_eq!(out.state.facing, Facing::Left);
    }

    #[test]
    fn no_target_keeps_acceleration() {
        let mut m = integrator_at(100.0, 100.0);
        m.step(DT, Behavior::Walking, Some(Point::new(1000.0, 100.0)));
        let before = m.state().acceleration;
        let out = m.step(DT, Behavior::Walking, None);
        assert!(!out.arrived);
        assert_eq!(out.state.acceleration, before);
    }

    #[test]
    fn friction_decays_velocity() {
        let mut m = integrator_at(800.0, 500.0);
        m.step(DT, Behavior::Hunting, Some(Point::new(1500.0, 500.0)));
        // Arrive to zero the acceleration, then coast.
        m.step(DT, Behavior::Hunting, Some(m.state().position));
        let mut last = m.state().speed();
        for _ in 0..100 {
            let out = m.step(DT, Behavior::Idle, None);
            assert!(out.state.speed() <= last);
            last = out.state.speed();
        }
        assert!(last < 0.01);
    }

    #[test]
    fn clamps_at_screen_edge() {
        let mut m = integrator_at(1719.0, 879.0);
        for _ in 0..500 {
            let out = m.step(DT, Behavior::Hunting, Some(Point::new(5000.0, 5000.0)));
            assert!(out.state.position.x <= 1720.0);
            assert!(out.state.position.y <= 880.0);
        }
        assert_eq!(m.state().position, Point::new(1720.0, 880.0));
    }

    #[test]
    fn place_clamps_and_keeps_velocity() {
        let mut m = integrator_at(100.0, 100.0);
        m.step(DT, Behavior::Hunting, Some(Point::new(900.0, 100.0)));
        let v = m.state().velocity;
        m.place(Point::new(-50.0, 2000.0));
        assert_eq!(m.state().position, Point::new(0.0, 880.0));
        assert_eq!(m.state().velocity, v);
    }

    #[test]
    fn set_bounds_reclamps() {
        let mut m = integrator_at(1500.0, 800.0);
        m.set_bounds(ScreenBounds::new(1280.0, 720.0, 200.0));
        assert_eq!(m.state().position, Point::new(1080.0, 520.0));
    }
}

// ── Invariants ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn position_stays_on_screen(
            start_x in -500.0f64..3000.0,
            start_y in -500.0f64..3000.0,
            targets in proptest::collection::vec(
                proptest::option::of((-5000.0f64..5000.0, -5000.0f64..5000.0)),
                1..200,
            ),
            hunting in any::<bool>(),
        ) {
            let bounds = ScreenBounds::default();
            let mut m = MotionIntegrator::new(
                PhysicsState::at_rest(Point::new(start_x, start_y)),
                bounds,
                MotionConfig::default(),
            ).unwrap();
            let behavior = if hunting { Behavior::Hunting } else { Behavior::Walking };
            for t in targets {
                let out = m.step(DT, behavior, t.map(Point::from));
                prop_assert!(bounds.contains(out.state.position), "escaped: {:?}", out.state.position);
            }
        }
    }
}
