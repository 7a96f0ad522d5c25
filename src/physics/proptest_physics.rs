//! Property-based tests for the propagation physics using proptest.
//!
//! These tests verify physical invariants across a wide range of orbital
//! parameters and central bodies.

use bevy::math::DVec2;
use proptest::prelude::*;

use super::{acceleration, step};
use crate::collision::has_collided;
use crate::test_utils::{assertions, fixtures};
use crate::types::{PhysicalConstants, G};

fn constants(mass: f64, radius: f64) -> PhysicalConstants {
    PhysicalConstants::new(G, mass, radius).expect("positive constants")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Gravity points at the origin with inverse-square magnitude.
    #[test]
    fn prop_acceleration_inverse_square(
        mass in 1e20f64..1e27,
        angle in 0.0f64..std::f64::consts::TAU,
        r in 1e3f64..1e9,
    ) {
        let constants = constants(mass, 1.0);
        let pos = DVec2::from_angle(angle) * r;

        let acc = acceleration(pos, &constants).expect("nonzero distance");

        let expected = constants.gm() / (r * r);
        let error = (acc.length() - expected).abs() / expected;
        prop_assert!(error < 1e-9, "magnitude error {error:.3e}");
        assertions::assert_points_to_origin(pos, acc, 1e-9);
    }

    /// Axis-aligned points exactly on the surface count as impacts.
    #[test]
    fn prop_surface_contact_is_collision(
        radius in 1.0f64..1e8,
        axis in 0usize..4,
    ) {
        let constants = constants(1e24, radius);
        let pos = match axis {
            0 => DVec2::new(radius, 0.0),
            1 => DVec2::new(-radius, 0.0),
            2 => DVec2::new(0.0, radius),
            _ => DVec2::new(0.0, -radius),
        };
        prop_assert!(has_collided(pos, &constants));
    }

    /// Points clearly outside are clear, points clearly inside are impacts.
    #[test]
    fn prop_collision_inside_outside(
        radius in 1.0f64..1e8,
        angle in 0.0f64..std::f64::consts::TAU,
        factor in 0.0f64..3.0,
    ) {
        prop_assume!((factor - 1.0).abs() > 1e-6);
        let constants = constants(1e24, radius);
        let pos = DVec2::from_angle(angle) * (radius * factor);

        prop_assert_eq!(has_collided(pos, &constants), factor < 1.0);
    }

    /// Central force: r × v is preserved by each kick-drift step.
    #[test]
    fn prop_angular_momentum_conservation(
        r in 7e6f64..4e7,
        eccentricity in 0.0f64..0.5,
    ) {
        let constants = PhysicalConstants::earth();
        let mut state = fixtures::elliptical_orbit(r, eccentricity, &constants);
        let initial = assertions::angular_momentum(&state);

        for _ in 0..2000 {
            step(&mut state, &constants, 1.0).expect("orbit stays clear of origin");
        }

        let drift = ((assertions::angular_momentum(&state) - initial) / initial).abs();
        prop_assert!(drift < 1e-9, "Angular momentum drift {drift:.3e}");
    }

    /// Energy error stays small and bounded for circular orbits.
    #[test]
    fn prop_energy_drift_bounded(r in 7e6f64..4e7) {
        let constants = PhysicalConstants::earth();
        let mut state = fixtures::circular_orbit(r, &constants);
        let initial = assertions::specific_energy(&state, &constants);

        for _ in 0..5000 {
            step(&mut state, &constants, 1.0).expect("orbit stays clear of origin");
        }

        let last = assertions::specific_energy(&state, &constants);
        assertions::assert_energy_conserved(initial, last, 1e-3);
    }
}
