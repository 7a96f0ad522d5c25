//! Propagation driver.
//!
//! Owns the point mass state and the trajectory recorder, and advances them
//! one fixed step per tick until the object hits the central body or the
//! step budget runs out.
//!
//! Per tick:
//! 1. integrate one step (semi-implicit Euler)
//! 2. check the new position against the body's surface
//! 3. record the position if it is still clear of the surface
//!
//! A colliding position is never recorded, so the last trajectory point is
//! always above the surface. Step indices are 1-based: step `n` is the `n`-th
//! completed integration. Step 0 is reserved for a run whose initial position
//! is already in contact with the body; that run collides without moving.

use bevy::log::{debug, info, warn};
use bevy::math::DVec2;

use crate::collision::{has_collided, ImpactReport};
use crate::error::{ConfigError, SimulationError};
use crate::physics::{self, DomainError};
use crate::trajectory::{Trajectory, TrajectoryRecorder};
use crate::types::{PhysicalConstants, State};

// =============================================================================
// Configuration
// =============================================================================

/// Upper bound on trajectory points reserved up front; longer runs grow on demand.
const MAX_PREALLOCATED_POINTS: usize = 1 << 20;

/// Stepping configuration for a propagation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Fixed timestep in seconds. Default: 1.
    pub dt: f64,
    /// Maximum number of steps before the run is exhausted. Default: 5000.
    pub max_steps: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: 1.0,
            max_steps: 5000,
        }
    }
}

impl SimulationConfig {
    pub fn new(dt: f64, max_steps: usize) -> Self {
        Self { dt, max_steps }
    }

    /// Reject a non-positive or non-finite timestep and an empty step budget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(ConfigError::InvalidTimestep(self.dt));
        }
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroStepBudget);
        }
        Ok(())
    }

    /// Simulated time covered by a full budget (seconds).
    pub fn horizon(&self) -> f64 {
        self.dt * self.max_steps as f64
    }
}

// =============================================================================
// Outcomes
// =============================================================================

/// How a completed run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalState {
    /// The point mass reached the central body's surface on `step`.
    Collided { step: usize },
    /// The step budget was used up without an impact.
    Exhausted,
}

/// Lifecycle of a driver.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Phase {
    #[default]
    Running,
    Collided {
        step: usize,
    },
    Exhausted,
    /// A gravity evaluation failed on `step`; the run is over.
    Failed {
        step: usize,
        source: DomainError,
    },
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_running()
    }

    /// The terminal state, if the run ended normally.
    pub fn terminal_state(&self) -> Option<TerminalState> {
        match *self {
            Phase::Collided { step } => Some(TerminalState::Collided { step }),
            Phase::Exhausted => Some(TerminalState::Exhausted),
            Phase::Running | Phase::Failed { .. } => None,
        }
    }
}

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepResult {
    /// The step ended clear of the surface; the position was recorded.
    Continued(DVec2),
    /// The step ended on or inside the surface. The position was not recorded.
    Collided { position: DVec2, step: usize },
    /// The run had already ended; nothing was advanced.
    Halted(TerminalState),
}

/// Everything a finished run produced.
#[derive(Clone, Debug)]
pub struct SimulationRun {
    pub trajectory: Trajectory,
    pub terminal: TerminalState,
    /// Impact details when `terminal` is `Collided`.
    pub impact: Option<ImpactReport>,
    /// Completed integration steps.
    pub steps: usize,
    /// Simulated time covered (seconds).
    pub elapsed: f64,
}

impl SimulationRun {
    pub fn collided(&self) -> bool {
        matches!(self.terminal, TerminalState::Collided { .. })
    }

    pub fn into_parts(self) -> (Trajectory, TerminalState) {
        (self.trajectory, self.terminal)
    }
}

// =============================================================================
// Driver
// =============================================================================

/// State machine driving one propagation run.
#[derive(Clone, Debug)]
pub struct SimulationDriver {
    state: State,
    constants: PhysicalConstants,
    config: SimulationConfig,
    recorder: TrajectoryRecorder,
    phase: Phase,
    steps: usize,
    impact: Option<ImpactReport>,
}

/// Build a driver from raw initial conditions.
pub fn new_simulation(
    initial_position: DVec2,
    initial_velocity: DVec2,
    constants: PhysicalConstants,
    dt: f64,
    max_steps: usize,
) -> Result<SimulationDriver, ConfigError> {
    SimulationDriver::new(
        State::new(initial_position, initial_velocity),
        constants,
        SimulationConfig::new(dt, max_steps),
    )
}

impl SimulationDriver {
    /// Validate inputs and create a driver in the `Running` phase.
    ///
    /// Nothing is integrated here; every error is caught before the first tick.
    pub fn new(
        state: State,
        constants: PhysicalConstants,
        config: SimulationConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        state.validate()?;

        debug!(
            "Propagation set up: r0 = {:.1} km, v0 = {:.1} m/s, dt = {} s, budget = {} steps",
            state.radius() / 1000.0,
            state.speed(),
            config.dt,
            config.max_steps,
        );

        let capacity = config.max_steps.min(MAX_PREALLOCATED_POINTS);

        Ok(Self {
            state,
            constants,
            config,
            recorder: TrajectoryRecorder::with_capacity(capacity),
            phase: Phase::Running,
            steps: 0,
            impact: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Completed integration steps.
    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    /// Simulated time covered so far (seconds).
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * self.config.dt
    }

    /// Positions recorded so far. Still available after a failed run.
    pub fn trajectory(&self) -> &Trajectory {
        self.recorder.view()
    }

    pub fn impact(&self) -> Option<&ImpactReport> {
        self.impact.as_ref()
    }

    pub fn into_trajectory(self) -> Trajectory {
        self.recorder.into_trajectory()
    }

    /// Advance by exactly one step.
    ///
    /// Once the run has ended this does not advance: a finished run returns
    /// `StepResult::Halted`, a failed run returns its error again.
    pub fn tick(&mut self) -> Result<StepResult, SimulationError> {
        match self.phase {
            Phase::Running => {}
            Phase::Collided { step } => {
                return Ok(StepResult::Halted(TerminalState::Collided { step }));
            }
            Phase::Exhausted => return Ok(StepResult::Halted(TerminalState::Exhausted)),
            Phase::Failed { step, source } => {
                return Err(SimulationError::Domain { step, source });
            }
        }

        // Already in contact before moving
        if self.steps == 0 && has_collided(self.state.pos, &self.constants) {
            return Ok(self.collide(0));
        }

        let step = self.steps + 1;
        if let Err(source) = physics::step(&mut self.state, &self.constants, self.config.dt) {
            warn!(
                "Propagation aborted at step {}: {} ({} points kept)",
                step,
                source,
                self.recorder.len()
            );
            self.phase = Phase::Failed { step, source };
            return Err(SimulationError::Domain { step, source });
        }
        self.steps = step;

        let pos = self.state.pos;
        if has_collided(pos, &self.constants) {
            return Ok(self.collide(step));
        }

        self.recorder.record(pos);

        if step >= self.config.max_steps {
            info!(
                "Step budget exhausted after {} steps ({:.0} s), closest approach {:.1} km",
                step,
                self.elapsed(),
                self.trajectory().min_radius().unwrap_or(pos.length()) / 1000.0
            );
            self.phase = Phase::Exhausted;
        }

        Ok(StepResult::Continued(pos))
    }

    /// Tick until the run reaches a terminal phase.
    ///
    /// A domain error stops the run; the trajectory recorded up to the failing
    /// step stays readable through [`trajectory`](Self::trajectory).
    pub fn run(&mut self) -> Result<SimulationRun, SimulationError> {
        loop {
            if let Some(terminal) = self.phase.terminal_state() {
                return Ok(SimulationRun {
                    trajectory: self.recorder.snapshot(),
                    terminal,
                    impact: self.impact,
                    steps: self.steps,
                    elapsed: self.elapsed(),
                });
            }
            self.tick()?;
        }
    }

    fn collide(&mut self, step: usize) -> StepResult {
        let report = ImpactReport {
            step,
            position: self.state.pos,
            velocity: self.state.vel,
            time: self.elapsed(),
        };

        info!(
            "IMPACT at step {} (t = {:.0} s): {:.2} km/s",
            step,
            report.time,
            report.impact_speed_km_s(),
        );

        self.impact = Some(report);
        self.phase = Phase::Collided { step };
        StepResult::Collided {
            position: report.position,
            step,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
