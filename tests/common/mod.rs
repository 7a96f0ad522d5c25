//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec2;
use impactor::types::{PhysicalConstants, State};

/// Reference constants: G = 6.67408e-11, Earth mass and radius.
pub fn earth() -> PhysicalConstants {
    PhysicalConstants::earth()
}

/// Create a circular orbit state at distance `r` from Earth's center.
pub fn circular_orbit(r: f64) -> State {
    let v = (earth().gm() / r).sqrt();
    State::new(DVec2::new(r, 0.0), DVec2::new(0.0, v))
}

/// Compute specific orbital energy around Earth.
pub fn orbital_energy(pos: DVec2, vel: DVec2) -> f64 {
    0.5 * vel.length_squared() - earth().gm() / pos.length()
}

/// Compute specific angular momentum (2D scalar).
pub fn angular_momentum(pos: DVec2, vel: DVec2) -> f64 {
    pos.x * vel.y - pos.y * vel.x
}

/// Orbital period around Earth for a given semi-major axis.
pub fn orbital_period(semi_major_axis: f64) -> f64 {
    use std::f64::consts::TAU;
    TAU * (semi_major_axis.powi(3) / earth().gm()).sqrt()
}

/// Independent semi-implicit Euler loop, used to cross-check the driver.
///
/// Checks for contact after each step and stops without recording it.
pub fn reference_loop(
    mut pos: DVec2,
    mut vel: DVec2,
    dt: f64,
    max_steps: usize,
) -> (Vec<DVec2>, Option<usize>) {
    let gm = earth().gm();
    let radius = earth().central_radius();
    let mut points = Vec::with_capacity(max_steps);

    for step in 1..=max_steps {
        let r = pos.x.hypot(pos.y);
        let acc = -(pos / r) * (gm / r / r);
        vel += acc * dt;
        pos += vel * dt;

        if pos.length() <= radius {
            return (points, Some(step));
        }
        points.push(pos);
    }

    (points, None)
}
