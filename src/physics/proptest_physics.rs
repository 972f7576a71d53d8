//! Property-based tests for the rocket physics using proptest.

use bevy::math::DVec2;
use proptest::prelude::*;

use crate::test_utils::fixtures;
use crate::types::{G, MIN_DISTANCE_SQUARED, ROCKET_RADIUS, Rocket, TRAIL_CAPACITY};

use super::{GravityField, Integrator, step};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The trail never exceeds its capacity and stays in insertion order.
    #[test]
    fn prop_trail_bounded_and_ordered(
        vx in -20.0f64..20.0,
        vy in -20.0f64..20.0,
        ticks in 1usize..200,
    ) {
        let mut rocket = Rocket::new(DVec2::new(100.0, 100.0), ROCKET_RADIUS, TRAIL_CAPACITY);
        rocket.vel = DVec2::new(vx, vy);
        let mut visited = Vec::new();

        for _ in 0..ticks {
            visited.push(rocket.pos);
            step(Integrator::Euler, &mut rocket, &[], G, MIN_DISTANCE_SQUARED).unwrap();
            prop_assert!(rocket.trail.len() <= TRAIL_CAPACITY);
        }

        let expected: Vec<DVec2> = visited
            .iter()
            .skip(visited.len().saturating_sub(TRAIL_CAPACITY))
            .copied()
            .collect();
        let actual: Vec<DVec2> = rocket.trail.iter().copied().collect();
        prop_assert_eq!(actual, expected);
    }

    /// Gravity never yields NaN or infinity, however close the probe is.
    #[test]
    fn prop_gravity_finite_near_body(
        dx in -1.0f64..1.0,
        dy in -1.0f64..1.0,
        mass in 1.0f64..1e6,
    ) {
        let center = DVec2::new(300.0, 300.0);
        let bodies = vec![fixtures::planet(center, 1e-6, mass)];
        let field = GravityField::new(&bodies, G, MIN_DISTANCE_SQUARED);
        let pos = center + DVec2::new(dx, dy) * 1e-4;

        let acc = field.acceleration(pos);
        prop_assert!(acc.is_finite());

        match field.kick(pos, 0.0, DVec2::ZERO, 1.0) {
            Ok(vel) => prop_assert!(vel.is_finite()),
            Err(contact) => prop_assert_eq!(contact.body, 0),
        }
    }

    /// The pull always points at the body.
    #[test]
    fn prop_gravity_attractive(
        x in 0.0f64..800.0,
        y in 0.0f64..600.0,
    ) {
        let center = DVec2::new(400.0, 300.0);
        prop_assume!(center.distance(DVec2::new(x, y)) > 50.0);

        let bodies = vec![fixtures::planet(center, 40.0, 1500.0)];
        let field = GravityField::new(&bodies, G, MIN_DISTANCE_SQUARED);
        let pos = DVec2::new(x, y);

        let vel = field.kick(pos, ROCKET_RADIUS, DVec2::ZERO, 1.0).unwrap();
        prop_assert!(vel.dot(center - pos) > 0.0);
    }

    /// A contact at the start of a tick never moves the rocket.
    #[test]
    fn prop_contact_freezes_rocket(
        offset_x in -30.0f64..30.0,
        offset_y in -30.0f64..30.0,
        vx in -10.0f64..10.0,
        vy in -10.0f64..10.0,
    ) {
        let center = DVec2::new(400.0, 300.0);
        let offset = DVec2::new(offset_x, offset_y);
        prop_assume!(offset.length() < 40.0 + ROCKET_RADIUS);

        let bodies = vec![fixtures::planet(center, 40.0, 1500.0)];
        let mut rocket = Rocket::new(center + offset, ROCKET_RADIUS, TRAIL_CAPACITY);
        rocket.vel = DVec2::new(vx, vy);
        let before = rocket.clone();

        prop_assert!(step(Integrator::Euler, &mut rocket, &bodies, G, MIN_DISTANCE_SQUARED).is_err());
        prop_assert_eq!(rocket, before);
    }
}
