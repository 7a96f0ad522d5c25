//! Impactor - Single-Body Orbit Propagation
//!
//! A library crate that propagates a point mass around a fixed central body
//! with a fixed-step semi-implicit Euler integrator, stopping on impact with
//! the body's surface or when the step budget runs out.

pub mod collision;
pub mod error;
pub mod outcome;
pub mod physics;
pub mod scenarios;
pub mod simulation;
pub mod trajectory;
pub mod types;

pub use error::{ConfigError, SimulationError};
pub use physics::DomainError;
pub use simulation::{
    new_simulation, Phase, SimulationConfig, SimulationDriver, SimulationRun, StepResult,
    TerminalState,
};
pub use trajectory::{Trajectory, TrajectoryRecorder};
pub use types::{PhysicalConstants, State};

#[cfg(test)]
pub mod test_utils;
