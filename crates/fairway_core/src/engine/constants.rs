//! Physical and tuning constants for the shot simulation.
//!
//! The tuning values (spin friction thresholds, bounce coefficients) are the
//! calibrated set matched against reference carry/rollout distances; they are
//! data, not derived quantities, and must be reproduced exactly.

/// Gravitational acceleration used for forces (m/s²)
pub const GRAVITY: f32 = 9.81;

/// Regulation ball properties
pub mod ball {
    /// Ball mass (kg)
    pub const MASS: f32 = 0.045_926_23;
    /// Ball radius (m)
    pub const RADIUS: f32 = 0.021_335;
    /// Cross-sectional area (m²)
    pub const CROSS_SECTION: f32 = std::f32::consts::PI * RADIUS * RADIUS;
    /// Moment of inertia (kg·m²)
    pub const MOMENT_OF_INERTIA: f32 = 0.4 * MASS * RADIUS * RADIUS;
    /// Spin decay time constant while airborne (s)
    pub const SPIN_DECAY_TAU: f32 = 5.0;
}

/// Constants for the barometric and Sutherland formulas
pub mod atmosphere {
    /// 0 °C in Kelvin
    pub const KELVIN_OFFSET: f32 = 273.15;
    /// Standard pressure at sea level (Pa)
    pub const SEA_LEVEL_PRESSURE: f32 = 101_325.0;
    /// Standard gravity (m/s²)
    pub const EARTH_GRAVITY: f32 = 9.80665;
    /// Molar mass of dry air (kg/mol)
    pub const MOLAR_MASS_DRY_AIR: f32 = 0.028_964_4;
    /// Universal gas constant (J/(mol·K))
    pub const UNIVERSAL_GAS_CONSTANT: f32 = 8.314_462_618;
    /// Specific gas constant of dry air (J/(kg·K))
    pub const GAS_CONSTANT_DRY_AIR: f32 = 287.058;
    /// Dynamic viscosity of air at 0 °C (kg/(m·s))
    pub const VISCOSITY_AT_ZERO_C: f32 = 1.716e-5;
    /// Sutherland constant for air (K)
    pub const SUTHERLAND_CONSTANT: f32 = 198.72;
    pub const FEET_TO_METERS: f32 = 0.3048;
}

/// Spin-dependent ground friction tuning
pub mod spin_friction {
    /// Below this ball speed (m/s) spin friction is reduced: chip/bump zone
    pub const CHIP_SPEED_THRESHOLD: f32 = 20.0;
    /// Above this ball speed (m/s) spin friction is at full strength
    pub const PITCH_SPEED_THRESHOLD: f32 = 35.0;
    /// Velocity scale at zero speed
    pub const CHIP_VELOCITY_SCALE_MIN: f32 = 0.60;
    /// Velocity scale at the chip/pitch boundary
    pub const CHIP_VELOCITY_SCALE_MAX: f32 = 0.87;
    /// Below this spin (rpm) the grooves barely bite
    pub const LOW_SPIN_THRESHOLD: f32 = 1250.0;
    /// Bump/pitch transition spin (rpm)
    pub const MID_SPIN_THRESHOLD: f32 = 1750.0;
    /// Friction multiplier reached at LOW_SPIN_THRESHOLD
    pub const LOW_SPIN_MULTIPLIER_MAX: f32 = 1.30;
    /// Friction multiplier reached at MID_SPIN_THRESHOLD
    pub const MID_SPIN_MULTIPLIER_MAX: f32 = 2.25;
    /// Friction multiplier ceiling for high-spin wedges
    pub const HIGH_SPIN_MULTIPLIER_MAX: f32 = 2.50;
    /// Spin range (rpm) over which the multiplier saturates past MID_SPIN_THRESHOLD
    pub const HIGH_SPIN_SATURATION_RANGE: f32 = 1000.0;
    /// Total speed (m/s) over which rolling friction blends into kinetic
    pub const FRICTION_BLEND_SPEED: f32 = 15.0;
}

/// Launch-monitor unit conversions
pub mod units {
    pub const MPS_PER_MPH: f32 = 0.44704;
    pub const RAD_PER_RPM: f32 = 0.10472;
    pub const YARDS_PER_METER: f32 = 1.09361;
}

/// Fixed-step integration parameters
pub mod integration {
    /// Timestep (s)
    pub const DT: f32 = 1.0 / 240.0;
    /// Bound on total simulated time (s)
    pub const MAX_TIME: f32 = 12.0;
    /// Tee height the ball starts at (m)
    pub const START_HEIGHT: f32 = 0.02;
    /// Height (m) below which a grounded ball counts as in ground contact
    pub const GROUND_PROXIMITY: f32 = 0.02;
    /// Speed (m/s) below which a grounded ball is considered at rest
    pub const REST_SPEED: f32 = 0.05;
    /// Spin (rad/s) below which a grounded ball is considered at rest
    pub const REST_SPIN: f32 = 0.5;
}
