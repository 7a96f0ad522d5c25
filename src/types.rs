//! Core physics types and constants for single-body orbit propagation.

use bevy::math::DVec2;

use crate::error::ConfigError;

/// Physical constants (SI units)

/// Gravitational constant used by the reference scenarios (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67408e-11;

/// Earth mass (kg)
pub const EARTH_MASS: f64 = 5.972e24;

/// Earth mean radius (m)
pub const EARTH_RADIUS: f64 = 6.371e6;

/// Meters per kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Immutable description of the central body and the gravity law.
///
/// The central body sits at the coordinate origin and never moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalConstants {
    /// Gravitational constant (N·m²/kg²)
    gravitational_constant: f64,
    /// Central body mass (kg)
    central_mass: f64,
    /// Central body radius (m)
    central_radius: f64,
}

impl PhysicalConstants {
    /// Create a validated set of constants. Every value must be positive and finite.
    pub fn new(
        gravitational_constant: f64,
        central_mass: f64,
        central_radius: f64,
    ) -> Result<Self, ConfigError> {
        check_positive("gravitational_constant", gravitational_constant)?;
        check_positive("central_mass", central_mass)?;
        check_positive("central_radius", central_radius)?;
        Ok(Self {
            gravitational_constant,
            central_mass,
            central_radius,
        })
    }

    /// Earth as the central body, with the reference gravitational constant.
    pub const fn earth() -> Self {
        Self {
            gravitational_constant: G,
            central_mass: EARTH_MASS,
            central_radius: EARTH_RADIUS,
        }
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    pub fn central_mass(&self) -> f64 {
        self.central_mass
    }

    pub fn central_radius(&self) -> f64 {
        self.central_radius
    }

    /// Standard gravitational parameter GM (m³/s²)
    #[inline]
    pub fn gm(&self) -> f64 {
        self.gravitational_constant * self.central_mass
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::earth()
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveConstant { name, value })
    }
}

/// Position and velocity of the orbiting point mass.
///
/// Only the integrator writes to this, and only while the driver lends it out.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct State {
    /// Position in meters from the central body's center
    pub pos: DVec2,
    /// Velocity in meters per second
    pub vel: DVec2,
}

impl State {
    pub fn new(pos: DVec2, vel: DVec2) -> Self {
        Self { pos, vel }
    }

    /// Distance from the central body's center (m)
    #[inline]
    pub fn radius(&self) -> f64 {
        self.pos.length()
    }

    /// Speed (m/s)
    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Velocity in km/s
    pub fn vel_km_per_s(&self) -> DVec2 {
        self.vel / METERS_PER_KM
    }

    /// Height above the central body's surface (m). Negative when inside.
    pub fn altitude(&self, constants: &PhysicalConstants) -> f64 {
        self.radius() - constants.central_radius()
    }

    /// Reject non-finite components and a position at the origin.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.pos.is_finite() {
            return Err(ConfigError::NonFiniteState { field: "position" });
        }
        if !self.vel.is_finite() {
            return Err(ConfigError::NonFiniteState { field: "velocity" });
        }
        if self.pos == DVec2::ZERO {
            return Err(ConfigError::PositionAtOrigin);
        }
        Ok(())
    }
}
