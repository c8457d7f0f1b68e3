//! Aerodynamic coefficients for ball flight.
//!
//! Drag and lift coefficients come from polynomial fits to wind tunnel data,
//! selected by Reynolds number; lift additionally depends on spin ratio.
//! The low/high Reynolds plateaus and the step onto the polynomial are part
//! of the calibrated model and are not smoothed.

use super::constants::atmosphere::*;
use super::environment::Units;
use super::lerp;

/// Lift coefficient cap; prevents ballooning on very high spin shots.
pub const CL_MAX: f32 = 0.55;

fn fahrenheit_to_celsius(temp_f: f32) -> f32 {
    (temp_f - 32.0) * 5.0 / 9.0
}

fn to_kelvin(temperature: f32, units: Units) -> f32 {
    match units {
        Units::Imperial => fahrenheit_to_celsius(temperature) + KELVIN_OFFSET,
        Units::Metric => temperature + KELVIN_OFFSET,
    }
}

/// Air density (kg/m³) from the barometric formula.
///
/// `altitude` is feet (imperial) or meters (metric); `temperature` is °F or
/// °C depending on `units`.
pub fn air_density(altitude: f32, temperature: f32, units: Units) -> f32 {
    let temp_k = to_kelvin(temperature, units);
    let altitude_m = match units {
        Units::Imperial => altitude * FEET_TO_METERS,
        Units::Metric => altitude,
    };

    let exponent =
        (-EARTH_GRAVITY * MOLAR_MASS_DRY_AIR * altitude_m) / (UNIVERSAL_GAS_CONSTANT * temp_k);
    let pressure = SEA_LEVEL_PRESSURE * exponent.exp();

    pressure / (GAS_CONSTANT_DRY_AIR * temp_k)
}

/// Dynamic air viscosity (kg/(m·s)) from Sutherland's formula.
pub fn dynamic_viscosity(temperature: f32, units: Units) -> f32 {
    let temp_k = to_kelvin(temperature, units);

    VISCOSITY_AT_ZERO_C
        * (temp_k / KELVIN_OFFSET).powf(1.5)
        * (KELVIN_OFFSET + SUTHERLAND_CONSTANT)
        / (temp_k + SUTHERLAND_CONSTANT)
}

/// Drag coefficient from Reynolds number.
///
/// Flat plateaus outside the fitted range; a cubic fit to wind tunnel data
/// across the drag crisis in between.
pub fn drag_coefficient(re: f32) -> f32 {
    if re < 50_000.0 {
        return 0.5;
    }
    if re > 200_000.0 {
        return 0.2;
    }

    1.1948 - 2.096_61e-5 * re + 1.424_72e-10 * re * re - 3.143_83e-16 * re * re * re
}

// Per-breakpoint lift models in spin ratio. Each breakpoint carries its own
// regression; the wind tunnel data across 50k-75k is not fit well by a
// single family.
fn cl_re50k(s: f32) -> f32 {
    0.047_212_1 + 2.847_95 * s - 23.4342 * s * s + 45.4849 * s * s * s
}

fn cl_re60k(s: f32) -> f32 {
    0.320_524 - 4.7032 * s + 14.0613 * s * s
}

fn cl_re65k(s: f32) -> f32 {
    0.266_667 - 4.0 * s + 13.3333 * s * s
}

fn cl_re70k(s: f32) -> f32 {
    0.049_618_9 + 0.002_113_96 * s + 2.342_01 * s * s
}

/// Linear model for Re >= 75k, capped at 0.38.
fn cl_high_re(s: f32) -> f32 {
    (1.3 * s + 0.05).min(0.38)
}

/// Lift model breakpoints, ordered by Reynolds number.
const CL_BREAKPOINTS: [(f32, fn(f32) -> f32); 5] = [
    (50_000.0, cl_re50k),
    (60_000.0, cl_re60k),
    (65_000.0, cl_re65k),
    (70_000.0, cl_re70k),
    (75_000.0, cl_high_re),
];

/// Lift coefficient from Reynolds number and spin ratio, clamped to
/// [0, [`CL_MAX`]].
///
/// Below Re 50k spin has negligible effect and a flat 0.1 applies. Between
/// 50k and 75k the two bracketing breakpoint models are evaluated and
/// linearly interpolated by Reynolds fraction. Above 75k the linear
/// high-Re model applies directly.
pub fn lift_coefficient(re: f32, spin_ratio: f32) -> f32 {
    if re < 50_000.0 {
        return 0.1;
    }
    if re > 75_000.0 {
        return cl_high_re(spin_ratio).clamp(0.0, CL_MAX);
    }

    let high_index = CL_BREAKPOINTS
        .iter()
        .position(|(bp_re, _)| re <= *bp_re)
        .unwrap_or(CL_BREAKPOINTS.len() - 1);
    let low_index = high_index.saturating_sub(1);

    let (re_low, cl_low) = CL_BREAKPOINTS[low_index];
    let (re_high, cl_high) = CL_BREAKPOINTS[high_index];

    let weight = if re_high > re_low { (re - re_low) / (re_high - re_low) } else { 0.0 };

    lerp(cl_low(spin_ratio), cl_high(spin_ratio), weight).clamp(0.0, CL_MAX)
}
