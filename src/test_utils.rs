//! Test utilities for orbit propagation tests.
//!
//! Provides fixtures for creating test orbits and assertions for verifying
//! physical invariants like energy and angular momentum conservation.

use bevy::math::DVec2;

use crate::types::{PhysicalConstants, State};

/// Fixtures for creating test orbital states.
pub mod fixtures {
    use super::*;

    /// Create a state in a circular orbit at distance `r` from the body's center.
    ///
    /// The body is placed on the positive x-axis with velocity in the +y direction.
    pub fn circular_orbit(r: f64, constants: &PhysicalConstants) -> State {
        // Circular orbit velocity: v = sqrt(GM/r)
        let v = (constants.gm() / r).sqrt();
        State::new(DVec2::new(r, 0.0), DVec2::new(0.0, v))
    }

    /// Create a state in an elliptical orbit at perigee.
    ///
    /// The body starts at perigee (closest approach) on the positive x-axis.
    pub fn elliptical_orbit(
        perigee: f64,
        eccentricity: f64,
        constants: &PhysicalConstants,
    ) -> State {
        assert!(
            (0.0..1.0).contains(&eccentricity),
            "Eccentricity must be in [0, 1) for elliptical orbit"
        );

        // Semi-major axis from perigee and eccentricity: a = r_p / (1 - e)
        let a = perigee / (1.0 - eccentricity);
        // Vis-viva equation at perigee: v = sqrt(GM * (2/r - 1/a))
        let v = (constants.gm() * (2.0 / perigee - 1.0 / a)).sqrt();

        State::new(DVec2::new(perigee, 0.0), DVec2::new(0.0, v))
    }

    /// Create a state at rest at `altitude` meters above the surface.
    pub fn dropped_from(altitude: f64, constants: &PhysicalConstants) -> State {
        State::new(
            DVec2::new(constants.central_radius() + altitude, 0.0),
            DVec2::ZERO,
        )
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;

    /// Compute specific orbital energy (energy per unit mass).
    ///
    /// E = v²/2 - GM/r
    pub fn specific_energy(state: &State, constants: &PhysicalConstants) -> f64 {
        0.5 * state.vel.length_squared() - constants.gm() / state.pos.length()
    }

    /// Compute specific angular momentum (2D scalar).
    pub fn angular_momentum(state: &State) -> f64 {
        state.pos.x * state.vel.y - state.pos.y * state.vel.x
    }

    /// Assert that energy is conserved within tolerance.
    ///
    /// # Panics
    /// Panics if relative energy drift exceeds tolerance.
    pub fn assert_energy_conserved(initial_energy: f64, final_energy: f64, tolerance: f64) {
        let drift = if initial_energy.abs() > 1e-10 {
            ((final_energy - initial_energy) / initial_energy).abs()
        } else {
            (final_energy - initial_energy).abs()
        };
        assert!(
            drift <= tolerance,
            "Energy not conserved: initial={initial_energy:.6e}, final={final_energy:.6e}, \
             drift={drift:.6e}, tolerance={tolerance:.6e}"
        );
    }

    /// Assert that a vector points from `pos` toward the origin.
    ///
    /// # Panics
    /// Panics if `v` is not antiparallel to `pos` within `tolerance` radians.
    pub fn assert_points_to_origin(pos: DVec2, v: DVec2, tolerance: f64) {
        let (n, m) = (pos.normalize(), v.normalize());
        let angle = n.perp_dot(m).abs().atan2(-n.dot(m));
        assert!(
            angle <= tolerance,
            "Vector {v:?} is {angle:.3e} rad off the inward direction at {pos:?}"
        );
    }
}
