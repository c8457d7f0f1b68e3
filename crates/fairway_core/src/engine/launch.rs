//! Launch vector construction from launch-monitor shot parameters.
//!
//! Launch monitors report spin in several formats: component spins
//! (backspin/sidespin), a resultant (total spin + spin axis), or both.
//! [`parse_spin`] normalizes any consistent subset into a full set;
//! [`build_launch_vectors`] converts monitor units (mph, degrees, rpm) into
//! simulation vectors (m/s, rad/s).

use serde::{Deserialize, Serialize};

use super::constants::units::{MPS_PER_MPH, RAD_PER_RPM};
use super::Vec3;

/// Raw spin fields from a shot record; any consistent subset may be present.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct SpinInput {
    /// Backspin (rpm)
    pub backspin: Option<f32>,
    /// Sidespin (rpm)
    pub sidespin: Option<f32>,
    /// Total spin (rpm)
    pub total: Option<f32>,
    /// Spin axis tilt (deg)
    pub axis: Option<f32>,
}

/// Normalized spin data (rpm / degrees), every field populated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinData {
    pub backspin: f32,
    pub sidespin: f32,
    pub total: f32,
    pub axis: f32,
    /// Set when a supplied total disagreed with the components by more than
    /// 1 rpm and was overridden by the computed value.
    pub inconsistent: bool,
}

/// Normalize spin data from the various launch-monitor input formats.
///
/// Missing totals/axes are derived from components and vice versa. When
/// components and a total are all present, the components are ground truth:
/// monitors measure backspin/sidespin directly and derive the total.
pub fn parse_spin(input: SpinInput) -> SpinData {
    let has_backspin = input.backspin.is_some();
    let has_sidespin = input.sidespin.is_some();
    let has_total = input.total.is_some();
    let has_axis = input.axis.is_some();

    let mut backspin = input.backspin.unwrap_or(0.0);
    let mut sidespin = input.sidespin.unwrap_or(0.0);
    let mut total = input.total.unwrap_or(0.0);
    let mut axis = input.axis.unwrap_or(0.0);

    // Derive total from components
    if total == 0.0 && (has_backspin || has_sidespin) {
        total = (backspin * backspin + sidespin * sidespin).sqrt();
    }

    // Derive axis from components
    if !has_axis && (has_backspin || has_sidespin) {
        axis = sidespin.atan2(backspin).to_degrees();
    }

    // Derive missing components from total + axis
    if has_total && has_axis {
        if !has_backspin {
            backspin = total * axis.to_radians().cos();
        }
        if !has_sidespin {
            sidespin = total * axis.to_radians().sin();
        }
    }

    // Components win over a disagreeing total
    let mut inconsistent = false;
    if has_backspin && has_sidespin && has_total {
        let computed = (backspin * backspin + sidespin * sidespin).sqrt();
        if (computed - total).abs() > 1.0 {
            total = computed;
            axis = sidespin.atan2(backspin).to_degrees();
            inconsistent = true;
        }
    }

    SpinData { backspin, sidespin, total, axis, inconsistent }
}

/// Initial physics vectors for one shot (m/s, rad/s).
#[derive(Clone, Copy, Debug)]
pub struct LaunchVectors {
    pub velocity: Vec3,
    pub spin: Vec3,
    /// Nominal horizontal shot direction; carry and total distance are
    /// measured along it
    pub shot_direction: Vec3,
}

/// Convert launch monitor values (mph, degrees, rpm) into physics vectors.
///
/// The speed vector starts along +X, is pitched up by the vertical launch
/// angle and yawed by the horizontal launch angle. Spin starts as a pure
/// back-spin axis (+Z) rolled around +X by the spin-axis angle. The shot
/// direction is the horizontal projection of the velocity, falling back to
/// +X when there is no meaningful horizontal speed.
pub fn build_launch_vectors(
    speed_mph: f32,
    vla_deg: f32,
    hla_deg: f32,
    total_spin_rpm: f32,
    spin_axis_deg: f32,
) -> LaunchVectors {
    let speed = speed_mph * MPS_PER_MPH;
    let vla = vla_deg.to_radians();
    let hla = hla_deg.to_radians();

    let velocity = Vec3::new(
        speed * vla.cos() * hla.cos(),
        speed * vla.sin(),
        speed * vla.cos() * hla.sin(),
    );

    let omega = total_spin_rpm * RAD_PER_RPM;
    let axis = spin_axis_deg.to_radians();
    let spin = Vec3::new(0.0, -omega * axis.sin(), omega * axis.cos());

    let flat = Vec3::new(velocity.x, 0.0, velocity.z);
    let shot_direction = if flat.norm() > 0.001 { flat.normalize() } else { Vec3::x() };

    LaunchVectors { velocity, spin, shot_direction }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_spin_from_components() {
        let data = parse_spin(SpinInput {
            backspin: Some(2400.0),
            sidespin: Some(700.0),
            ..SpinInput::default()
        });
        assert!((data.total - 2500.0).abs() < 0.5, "3-4-5 triangle: {}", data.total);
        assert!((data.axis - 16.26).abs() < 0.05, "axis from atan2: {}", data.axis);
        assert!(!data.inconsistent);
    }

    #[test]
    fn test_parse_spin_from_total_and_axis() {
        let data = parse_spin(SpinInput {
            total: Some(3000.0),
            axis: Some(10.0),
            ..SpinInput::default()
        });
        assert!((data.backspin - 3000.0 * 10.0f32.to_radians().cos()).abs() < 0.5);
        assert!((data.sidespin - 3000.0 * 10.0f32.to_radians().sin()).abs() < 0.5);
        assert!(!data.inconsistent);
    }

    #[test]
    fn test_parse_spin_backspin_only() {
        let data = parse_spin(SpinInput { backspin: Some(2600.0), ..SpinInput::default() });
        assert_eq!(data.total, 2600.0);
        assert_eq!(data.axis, 0.0);
        assert_eq!(data.sidespin, 0.0);
    }

    #[test]
    fn test_parse_spin_consistent_total_is_kept() {
        let data = parse_spin(SpinInput {
            backspin: Some(2400.0),
            sidespin: Some(700.0),
            total: Some(2500.0),
            axis: Some(16.26),
        });
        assert_eq!(data.total, 2500.0);
        assert!(!data.inconsistent);
    }

    #[test]
    fn test_parse_spin_overrides_disagreeing_total() {
        let data = parse_spin(SpinInput {
            backspin: Some(2400.0),
            sidespin: Some(700.0),
            total: Some(3000.0),
            axis: Some(0.0),
        });
        assert!(data.inconsistent, "components are ground truth");
        assert!((data.total - 2500.0).abs() < 0.5, "got {}", data.total);
        assert!((data.axis - 16.26).abs() < 0.05, "axis recomputed: {}", data.axis);
    }

    #[test]
    fn test_parse_spin_empty_input_is_zero() {
        let data = parse_spin(SpinInput::default());
        assert_eq!(data.total, 0.0);
        assert_eq!(data.backspin, 0.0);
        assert!(!data.inconsistent);
    }

    #[test]
    fn test_launch_vectors_pitch_and_speed() {
        let launch = build_launch_vectors(90.0, 12.0, 0.0, 2600.0, 0.0);

        let speed = 90.0 * MPS_PER_MPH;
        assert!((launch.velocity.norm() - speed).abs() < 1e-3);
        assert!((launch.velocity.y - speed * 12.0f32.to_radians().sin()).abs() < 1e-3);
        assert!(launch.velocity.z.abs() < 1e-4, "no yaw for HLA 0");

        // Pure backspin spins around +Z
        assert!((launch.spin.z - 2600.0 * RAD_PER_RPM).abs() < 0.1);
        assert!(launch.spin.y.abs() < 1e-4);

        assert!((launch.shot_direction - Vec3::x()).norm() < 1e-5);
    }

    #[test]
    fn test_launch_vectors_yaw_turns_shot_direction() {
        let launch = build_launch_vectors(100.0, 10.0, 5.0, 3000.0, 0.0);
        assert!(launch.velocity.z > 0.0, "positive HLA yaws off the +X line");
        assert!((launch.shot_direction.norm() - 1.0).abs() < 1e-5);
        assert!(launch.shot_direction.y == 0.0);
    }

    #[test]
    fn test_launch_vectors_spin_axis_tilts_spin() {
        let launch = build_launch_vectors(80.0, 20.0, 0.0, 4000.0, 15.0);
        let omega = 4000.0 * RAD_PER_RPM;
        assert!((launch.spin.norm() - omega).abs() < 1e-2);
        assert!(launch.spin.y < 0.0, "positive axis tilts spin toward -Y");
    }

    #[test]
    fn test_launch_vectors_zero_speed_fallback_direction() {
        let launch = build_launch_vectors(0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(launch.velocity, Vec3::zeros());
        assert_eq!(launch.shot_direction, Vec3::x());
    }

    proptest! {
        #[test]
        fn prop_component_spins_produce_consistent_total(
            backspin in 0.0f32..10_000.0,
            sidespin in -4_000.0f32..4_000.0,
        ) {
            let data = parse_spin(SpinInput {
                backspin: Some(backspin),
                sidespin: Some(sidespin),
                ..SpinInput::default()
            });
            let expected = (backspin * backspin + sidespin * sidespin).sqrt();
            prop_assert!((data.total - expected).abs() <= 1.0,
                "total {} vs components {}", data.total, expected);
        }

        #[test]
        fn prop_disagreeing_total_is_always_overridden(
            backspin in 100.0f32..8_000.0,
            sidespin in -3_000.0f32..3_000.0,
            error in 2.0f32..500.0,
        ) {
            let true_total = (backspin * backspin + sidespin * sidespin).sqrt();
            let data = parse_spin(SpinInput {
                backspin: Some(backspin),
                sidespin: Some(sidespin),
                total: Some(true_total + error),
                axis: Some(0.0),
            });
            prop_assert!(data.inconsistent);
            prop_assert!((data.total - true_total).abs() <= 1.0);
        }
    }
}
