//! Orbital diagnostics for the two-body problem.
//!
//! Derives conserved quantities and orbital elements from a state vector so
//! a caller can classify an orbit before running it, and check a finished run
//! for energy drift:
//! - Impact: the orbit dips below the central body's surface on the way in
//! - Escape: hyperbolic trajectory (E >= 0)
//! - Bound: closed orbit that stays above the surface

use bevy::math::DVec2;

use crate::types::{PhysicalConstants, State};

/// Orbital elements computed from state vectors.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis (meters). Negative for hyperbolic orbits, infinite for parabolic.
    pub semi_major_axis: f64,
    /// Eccentricity (0 = circular, <1 = elliptical, =1 = parabolic, >1 = hyperbolic).
    pub eccentricity: f64,
    /// Specific orbital energy (m²/s²). E >= 0 = unbound.
    pub energy: f64,
    /// Specific angular momentum, signed (m²/s). Positive = counter-clockwise.
    pub angular_momentum: f64,
    /// Orbital period (seconds). Only for bound orbits (E < 0).
    pub period: Option<f64>,
    /// Closest approach to the body's center (meters).
    pub perigee: f64,
}

impl OrbitalElements {
    /// Returns true if orbit is bound (E < 0).
    pub fn is_bound(&self) -> bool {
        self.energy < 0.0
    }

    /// Returns true if orbit is unbound (E >= 0).
    pub fn is_escape(&self) -> bool {
        !self.is_bound()
    }

    /// Apogee distance (farthest from the body). Only for bound orbits.
    pub fn apogee(&self) -> Option<f64> {
        self.is_bound()
            .then(|| self.semi_major_axis * (1.0 + self.eccentricity))
    }

    /// Excess velocity at infinity for unbound orbits (m/s).
    /// Returns 0 for bound orbits.
    pub fn v_infinity(&self) -> f64 {
        if self.energy > 0.0 {
            (2.0 * self.energy).sqrt()
        } else {
            0.0
        }
    }
}

/// Classification of an orbit from its initial state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrbitClass {
    /// The orbit reaches the surface. `perigee` is below the body's radius.
    Impact { perigee: f64 },
    /// Unbound trajectory that clears the surface.
    Escape { v_infinity: f64 },
    /// Closed orbit that clears the surface.
    Bound { perigee: f64, apogee: f64, period: f64 },
}

/// Calculate specific orbital energy.
///
/// E = v²/2 - GM/r
///
/// # Returns
/// `None` if position is at the origin
pub fn specific_energy(state: &State, constants: &PhysicalConstants) -> Option<f64> {
    let r = state.radius();
    if r == 0.0 {
        return None;
    }
    Some(0.5 * state.vel.length_squared() - constants.gm() / r)
}

/// Calculate signed specific angular momentum.
///
/// h = r × v (in 2D, r.x*v.y - r.y*v.x)
pub fn angular_momentum(pos: DVec2, vel: DVec2) -> f64 {
    pos.perp_dot(vel)
}

/// Speed of a circular orbit at distance `r` (m/s).
pub fn circular_velocity(r: f64, constants: &PhysicalConstants) -> f64 {
    (constants.gm() / r).sqrt()
}

/// Escape speed at distance `r` (m/s).
pub fn escape_velocity(r: f64, constants: &PhysicalConstants) -> f64 {
    (2.0 * constants.gm() / r).sqrt()
}

/// Compute orbital elements from position and velocity state vectors.
///
/// Uses vis-viva and angular momentum; perigee comes from h²/(GM(1+e)) so it
/// stays valid for every conic.
///
/// # Returns
/// `None` if position is at the origin
pub fn compute_orbital_elements(
    state: &State,
    constants: &PhysicalConstants,
) -> Option<OrbitalElements> {
    let gm = constants.gm();
    let energy = specific_energy(state, constants)?;
    let h = angular_momentum(state.pos, state.vel);

    // e² = 1 + 2Eh²/μ², clamped against rounding just below zero
    let eccentricity = (1.0 + 2.0 * energy * h * h / (gm * gm)).max(0.0).sqrt();

    let semi_major_axis = if energy == 0.0 {
        f64::INFINITY
    } else {
        -gm / (2.0 * energy)
    };

    let period = (energy < 0.0)
        .then(|| std::f64::consts::TAU * (semi_major_axis.powi(3) / gm).sqrt());

    let perigee = h * h / (gm * (1.0 + eccentricity));

    Some(OrbitalElements {
        semi_major_axis,
        eccentricity,
        energy,
        angular_momentum: h,
        period,
        perigee,
    })
}

/// Classify the orbit that starts from `state`.
///
/// An unbound trajectory only counts as an impact while it is still inbound;
/// past perigee it is already leaving.
///
/// # Returns
/// `None` if position is at the origin
pub fn classify_orbit(state: &State, constants: &PhysicalConstants) -> Option<OrbitClass> {
    let elements = compute_orbital_elements(state, constants)?;
    let radius = constants.central_radius();
    let inbound = state.pos.dot(state.vel) < 0.0;

    if elements.perigee <= radius && (elements.is_bound() || inbound) {
        return Some(OrbitClass::Impact {
            perigee: elements.perigee,
        });
    }

    match (elements.apogee(), elements.period) {
        (Some(apogee), Some(period)) => Some(OrbitClass::Bound {
            perigee: elements.perigee,
            apogee,
            period,
        }),
        _ => Some(OrbitClass::Escape {
            v_infinity: elements.v_infinity(),
        }),
    }
}

/// Relative change in specific energy between two states.
///
/// A run with semi-implicit Euler should show a small, nonzero value.
///
/// # Returns
/// `None` if either position is at the origin or the initial energy is zero
pub fn energy_drift(initial: &State, last: &State, constants: &PhysicalConstants) -> Option<f64> {
    let e0 = specific_energy(initial, constants)?;
    let e1 = specific_energy(last, constants)?;
    if e0 == 0.0 {
        return None;
    }
    Some(((e1 - e0) / e0).abs())
}
