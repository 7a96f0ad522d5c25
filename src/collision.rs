//! Collision detection against the central body.
//!
//! The point mass has collided once it touches or enters the body's
//! surface. Contact counts: a position exactly on the surface is an impact.

use bevy::math::DVec2;

use crate::types::{PhysicalConstants, METERS_PER_KM};

/// Returns true iff `|pos| <= central_radius`.
#[inline]
pub fn has_collided(pos: DVec2, constants: &PhysicalConstants) -> bool {
    pos.length() <= constants.central_radius()
}

/// Details of the tick on which the point mass reached the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactReport {
    /// Step index of the impact (0 = the initial state was already in contact).
    pub step: usize,
    /// Position at impact in meters from the body's center.
    pub position: DVec2,
    /// Velocity at impact in m/s.
    pub velocity: DVec2,
    /// Simulation time of impact (seconds since the run started).
    pub time: f64,
}

impl ImpactReport {
    /// Impact velocity magnitude in m/s.
    pub fn impact_speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Impact velocity magnitude in km/s.
    pub fn impact_speed_km_s(&self) -> f64 {
        self.impact_speed() / METERS_PER_KM
    }

    /// How far below the surface the impact point landed (m).
    ///
    /// Fixed steps overshoot the surface, so this is usually a little positive.
    pub fn penetration_depth(&self, constants: &PhysicalConstants) -> f64 {
        constants.central_radius() - self.position.length()
    }
}
