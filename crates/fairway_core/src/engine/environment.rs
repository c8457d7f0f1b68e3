//! Atmospheric environment for a shot.

use serde::{Deserialize, Serialize};

use super::aero;
use super::Vec3;

/// Measurement unit system for user-facing inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Units {
    /// Meters / Celsius
    Metric,
    /// Feet / Fahrenheit
    #[default]
    Imperial,
}

pub const DEFAULT_ALTITUDE_FT: f32 = 0.0;
pub const DEFAULT_TEMPERATURE_F: f32 = 75.0;

/// Read-only atmospheric parameters shared by every step of one shot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnvironmentParams {
    /// Air density (kg/m³)
    pub air_density: f32,
    /// Dynamic air viscosity (kg/(m·s))
    pub air_viscosity: f32,
    /// Tuning multiplier on the drag coefficient
    pub drag_scale: f32,
    /// Tuning multiplier on the lift coefficient
    pub lift_scale: f32,
    /// Unit normal of the ground plane
    pub floor_normal: Vec3,
}

impl EnvironmentParams {
    /// Build from altitude and temperature in the given unit system.
    ///
    /// Altitude is feet (imperial) or meters (metric); temperature is °F or
    /// °C. Scale factors default to 1.0 and the ground is the horizontal
    /// plane.
    pub fn from_conditions(altitude: f32, temperature: f32, units: Units) -> Self {
        Self {
            air_density: aero::air_density(altitude, temperature, units),
            air_viscosity: aero::dynamic_viscosity(temperature, units),
            drag_scale: 1.0,
            lift_scale: 1.0,
            floor_normal: Vec3::y(),
        }
    }
}

impl Default for EnvironmentParams {
    /// Sea level at 75 °F.
    fn default() -> Self {
        Self::from_conditions(DEFAULT_ALTITUDE_FT, DEFAULT_TEMPERATURE_F, Units::Imperial)
    }
}
