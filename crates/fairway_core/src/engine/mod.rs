//! The shot simulation engine.
//!
//! Leaves first: [`surface`] and [`constants`] are pure data, [`aero`]
//! computes the air environment and flight coefficients, [`ground`] the
//! contact forces, [`bounce`] the impact response, [`launch`] the initial
//! vectors, and [`integrator`] ties them together into a trajectory.

pub mod aero;
pub mod ball;
pub mod bounce;
pub mod constants;
pub mod environment;
pub mod ground;
pub mod integrator;
pub mod launch;
pub mod surface;
pub mod trace;

pub use ball::{BallState, FlightPhase};
pub use bounce::{bounce, restitution, BounceOutcome};
pub use environment::{EnvironmentParams, Units};
pub use ground::{contact_friction, ground_force, ground_torque, spin_friction_multiplier};
pub use ground::{ContactFriction, FrictionRegime};
pub use integrator::{simulate, ShotResult};
pub use launch::{build_launch_vectors, parse_spin, LaunchVectors, SpinData, SpinInput};
pub use surface::{SurfaceParams, SurfaceType};
pub use trace::{BufferTrace, LogTrace, NullTrace, TraceLevel, TraceSink};

/// 3D vector used throughout the engine (m, m/s, rad/s).
pub type Vec3 = nalgebra::Vector3<f32>;

/// Linear interpolation between two scalars.
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Scale `v` down to `max` length if it is longer. Never lengthens, so
/// degenerate near-zero vectors pass through untouched.
pub(crate) fn cap_norm(v: Vec3, max: f32) -> Vec3 {
    let n = v.norm();
    if n > max && n > 1e-6 {
        v * (max / n)
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_cap_norm_only_shrinks() {
        let long = Vec3::new(3.0, 4.0, 0.0);
        let capped = cap_norm(long, 1.0);
        assert!((capped.norm() - 1.0).abs() < 1e-6);

        let short = Vec3::new(0.3, 0.4, 0.0);
        assert_eq!(cap_norm(short, 1.0), short);

        assert_eq!(cap_norm(Vec3::zeros(), 1.0), Vec3::zeros());
    }
}
