//! Ball flight state.

use serde::{Deserialize, Serialize};

use super::constants::units::RAD_PER_RPM;
use super::Vec3;

/// Flight phase of the ball.
///
/// Transitions are monotonic: Flight → Rollout on the first ground contact
/// (bounce model), Rollout → Rest once the ball has no meaningful speed or
/// spin left (integrator). A phase never reverses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    /// Ball is airborne
    Flight,
    /// Ball is rolling or sliding on the ground after landing
    Rollout,
    /// Ball is stationary
    Rest,
}

/// Complete kinematic state of the ball during one shot.
///
/// Owned and mutated exclusively by the integration loop; everything else
/// the loop touches is read-only configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BallState {
    /// Position (m)
    pub pos: Vec3,
    /// Velocity (m/s)
    pub vel: Vec3,
    /// Angular velocity (rad/s); direction is the rotation axis
    pub spin: Vec3,
    pub phase: FlightPhase,
    /// Spin magnitude (rpm) at the moment of first ground contact. Written
    /// exactly once, at the Flight→Rollout transition, and kept while spin
    /// itself decays during rollout.
    pub impact_spin_rpm: f32,
}

impl BallState {
    /// Ball just launched with the given velocity and spin.
    pub fn launched(pos: Vec3, vel: Vec3, spin: Vec3) -> Self {
        Self { pos, vel, spin, phase: FlightPhase::Flight, impact_spin_rpm: 0.0 }
    }

    pub fn speed(&self) -> f32 {
        self.vel.norm()
    }

    /// Spin magnitude in rpm.
    pub fn spin_rpm(&self) -> f32 {
        self.spin.norm() / RAD_PER_RPM
    }

    /// Record the landing spin at the first ground contact. The value sticks:
    /// calls after the ball has left the Flight phase do nothing.
    pub fn record_impact_spin(&mut self) {
        if self.phase == FlightPhase::Flight {
            self.impact_spin_rpm = self.spin_rpm();
        }
    }
}
