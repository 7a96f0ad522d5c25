//! Physics for single-body orbit propagation.
//!
//! Gravity of a fixed central body plus a fixed-step semi-implicit Euler
//! integrator. Both are plain functions over an explicitly passed `State`;
//! nothing here owns simulation state.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

pub use gravity::{acceleration, surface_gravity};
pub use integrator::{integrate, step};

/// Singular input to the gravity model.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    #[error("position is at the central body's center (zero distance)")]
    ZeroDistance,

    #[error("position is not finite")]
    NonFinitePosition,
}
