//! Gravity of the fixed central body.
//!
//! The body sits at the origin, so the separation vector is the position
//! itself and no ephemeris lookup is needed.

use bevy::math::DVec2;

use crate::types::PhysicalConstants;

use super::DomainError;

/// Compute gravitational acceleration at a given position.
///
/// a = -(GM / |r|²) · r̂
///
/// Unlike a softened N-body kernel there is no distance floor: a position
/// exactly at the origin is a singularity and is reported as an error.
/// |r| comes from `hypot`, so any finite position has a finite distance and
/// the pull fades smoothly to zero far out.
///
/// # Arguments
/// * `pos` - Position in meters from the central body's center
/// * `constants` - Central body configuration
///
/// # Returns
/// Acceleration vector in m/s², or `DomainError` if `|pos|` is zero or not finite
#[inline]
pub fn acceleration(pos: DVec2, constants: &PhysicalConstants) -> Result<DVec2, DomainError> {
    let r = pos.x.hypot(pos.y);

    if !r.is_finite() {
        return Err(DomainError::NonFinitePosition);
    }
    if r == 0.0 {
        return Err(DomainError::ZeroDistance);
    }

    Ok(-(pos / r) * (constants.gm() / r / r))
}

/// Magnitude of the surface gravity of the central body (m/s²).
pub fn surface_gravity(constants: &PhysicalConstants) -> f64 {
    let r = constants.central_radius();
    constants.gm() / (r * r)
}
