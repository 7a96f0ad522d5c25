//! Preset scenario definitions.
//!
//! Reference initial conditions around Earth. Each scenario is plain data;
//! `build` turns it into a ready driver.

use bevy::math::DVec2;

use crate::error::ConfigError;
use crate::simulation::{SimulationConfig, SimulationDriver};
use crate::types::{PhysicalConstants, State};

/// A predefined propagation setup around Earth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    /// Initial position (meters from Earth's center).
    pub position: DVec2,
    /// Initial velocity (m/s).
    pub velocity: DVec2,
    /// Stepping configuration.
    pub config: SimulationConfig,
}

impl Scenario {
    pub fn initial_state(&self) -> State {
        State::new(self.position, self.velocity)
    }

    /// Driver for this scenario with Earth as the central body.
    pub fn build(&self) -> Result<SimulationDriver, ConfigError> {
        self.build_with(PhysicalConstants::earth())
    }

    /// Driver for this scenario around a different central body.
    pub fn build_with(
        &self,
        constants: PhysicalConstants,
    ) -> Result<SimulationDriver, ConfigError> {
        SimulationDriver::new(self.initial_state(), constants, self.config)
    }
}

/// All available preset scenarios.
pub static SCENARIOS: &[Scenario] = &[LOW_CIRCULAR_ORBIT, SUBORBITAL_IMPACT];

/// Low orbit 1629 km above the surface, slightly faster than circular.
///
/// Stays clear of the surface for the whole 5000 s budget.
pub static LOW_CIRCULAR_ORBIT: Scenario = Scenario {
    id: "low_orbit",
    name: "Low Earth Orbit",
    description: "8000 km from Earth's center at 7.5 km/s. Runs out its step budget.",
    position: DVec2::new(8e6, 0.0),
    velocity: DVec2::new(0.0, 7500.0),
    config: SimulationConfig {
        dt: 1.0,
        max_steps: 5000,
    },
};

/// Object 129 km up moving far too slowly to orbit.
///
/// Falls back to the surface within a few minutes.
pub static SUBORBITAL_IMPACT: Scenario = Scenario {
    id: "suborbital_impact",
    name: "Suborbital Impact",
    description: "6500 km from Earth's center at 1 km/s. Hits the surface.",
    position: DVec2::new(6.5e6, 0.0),
    velocity: DVec2::new(0.0, 1000.0),
    config: SimulationConfig {
        dt: 1.0,
        max_steps: 5000,
    },
};

/// Look up a scenario by its id.
pub fn find(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}
