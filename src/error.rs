//! Error types for simulation setup and propagation.
//!
//! Configuration errors are caught before the first step runs. Domain errors
//! come out of the gravity model mid-run and end that run.

use crate::physics::DomainError;

/// Invalid simulation input, rejected at construction time.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid timestep: {0} (must be positive and finite)")]
    InvalidTimestep(f64),

    #[error("step budget must be at least 1")]
    ZeroStepBudget,

    #[error("physical constant `{name}` must be positive and finite, got {value}")]
    NonPositiveConstant { name: &'static str, value: f64 },

    #[error("initial {field} is not finite")]
    NonFiniteState { field: &'static str },

    #[error("initial position is at the central body's center")]
    PositionAtOrigin,
}

/// Any failure surfaced by a simulation run.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("gravity evaluation failed at step {step}: {source}")]
    Domain {
        step: usize,
        #[source]
        source: DomainError,
    },
}

impl SimulationError {
    /// Step index of a mid-run failure, if this error happened during a run.
    pub fn step(&self) -> Option<usize> {
        match self {
            SimulationError::Domain { step, .. } => Some(*step),
            SimulationError::Config(_) => None,
        }
    }
}
