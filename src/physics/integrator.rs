//! Fixed-step integrator for single-body orbit propagation.
//!
//! Implements semi-implicit (symplectic) Euler: the velocity is kicked with
//! the acceleration at the current position, then the position drifts with
//! the *updated* velocity.
//!
//! This is first order and does not conserve energy exactly. Drift stays
//! bounded for short horizons, which is all the propagation driver needs.
//! The update order matters: swapping it gives plain explicit Euler, whose
//! energy error grows without bound.

use bevy::math::DVec2;

use crate::types::{PhysicalConstants, State};

use super::gravity::acceleration;
use super::DomainError;

/// Advance `state` by one step of `dt` seconds.
///
/// 1. a = acceleration(x)
/// 2. v' = v + a·dt
/// 3. x' = x + v'·dt
///
/// `dt` must be positive; the driver validates it before any step runs.
/// Fails if the current position is singular or the new one overflows;
/// on error the state is left untouched.
///
/// Returns the acceleration used for the step.
pub fn step(
    state: &mut State,
    constants: &PhysicalConstants,
    dt: f64,
) -> Result<DVec2, DomainError> {
    debug_assert!(dt > 0.0, "timestep must be positive");

    let acc = acceleration(state.pos, constants)?;

    let vel = state.vel + acc * dt;
    let pos = state.pos + vel * dt;
    if !pos.is_finite() {
        return Err(DomainError::NonFinitePosition);
    }

    state.vel = vel;
    state.pos = pos;
    Ok(acc)
}

/// Advance `state` by `n_steps` steps of `dt`, without collision checks.
///
/// Stops at the first domain error and returns it along with the 1-based
/// index of the failing step.
pub fn integrate(
    state: &mut State,
    constants: &PhysicalConstants,
    dt: f64,
    n_steps: usize,
) -> Result<(), (usize, DomainError)> {
    for i in 0..n_steps {
        step(state, constants, dt).map_err(|e| (i + 1, e))?;
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
