//! Ground contact forces and torques.
//!
//! A grounded ball feels a viscous grass drag proportional to its horizontal
//! velocity and a friction force chosen by regime: pure rolling when the
//! contact point is (nearly) stationary, otherwise slipping with a blended
//! rolling/kinetic coefficient. Both regimes are scaled by a spin-dependent
//! "bite" multiplier driven by the spin the ball carried into its landing.

use super::constants::{ball, spin_friction, units, GRAVITY};
use super::surface::SurfaceParams;
use super::{lerp, Vec3};

/// Friction regime at the contact point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrictionRegime {
    /// Contact point is (nearly) stationary: rolling resistance applies
    Rolling,
    /// Contact point slides: blended rolling/kinetic friction applies
    Slipping,
}

/// Friction state at the contact point, shared by the force and torque
/// paths. The regime and coefficients are exposed for diagnostics.
#[derive(Clone, Copy, Debug)]
pub struct ContactFriction {
    pub force: Vec3,
    pub regime: FrictionRegime,
    /// Friction coefficient after spin scaling
    pub effective_friction: f32,
    /// Spin bite multiplier that produced it
    pub spin_multiplier: f32,
}

/// Spin-based friction multiplier.
///
/// High backspin makes the ball bite into the grass. The bite is set at
/// impact, not by the decaying spin during rollout, so the effective spin is
/// the larger of current spin and the recorded impact spin. Low-speed chip
/// shots bite less than high-speed wedge shots, hence the velocity scale.
pub fn spin_friction_multiplier(spin: Vec3, impact_spin_rpm: f32, ball_speed: f32) -> f32 {
    use spin_friction::*;

    let current_rpm = spin.norm() / units::RAD_PER_RPM;
    let effective_rpm = current_rpm.max(impact_spin_rpm);

    let velocity_scale = if ball_speed < CHIP_SPEED_THRESHOLD {
        lerp(CHIP_VELOCITY_SCALE_MIN, CHIP_VELOCITY_SCALE_MAX, ball_speed / CHIP_SPEED_THRESHOLD)
    } else if ball_speed < PITCH_SPEED_THRESHOLD {
        lerp(
            CHIP_VELOCITY_SCALE_MAX,
            1.0,
            (ball_speed - CHIP_SPEED_THRESHOLD) / (PITCH_SPEED_THRESHOLD - CHIP_SPEED_THRESHOLD),
        )
    } else {
        1.0
    };

    // Piecewise-linear in rpm: the grooves don't bite below LOW_SPIN_THRESHOLD
    let spin_multiplier = if effective_rpm < LOW_SPIN_THRESHOLD {
        1.0 + (effective_rpm / LOW_SPIN_THRESHOLD) * (LOW_SPIN_MULTIPLIER_MAX - 1.0)
    } else if effective_rpm < MID_SPIN_THRESHOLD {
        let excess = effective_rpm - LOW_SPIN_THRESHOLD;
        let range = MID_SPIN_THRESHOLD - LOW_SPIN_THRESHOLD;
        LOW_SPIN_MULTIPLIER_MAX + (excess / range) * (MID_SPIN_MULTIPLIER_MAX - LOW_SPIN_MULTIPLIER_MAX)
    } else {
        let excess = effective_rpm - MID_SPIN_THRESHOLD;
        let factor = (excess / HIGH_SPIN_SATURATION_RANGE).min(1.0);
        MID_SPIN_MULTIPLIER_MAX + factor * (HIGH_SPIN_MULTIPLIER_MAX - MID_SPIN_MULTIPLIER_MAX)
    };

    1.0 + (spin_multiplier - 1.0) * velocity_scale
}

/// Friction at the contact point.
///
/// Rolling below 0.05 m/s of contact-point slip; otherwise slipping, with
/// the rolling→kinetic blend eased (squared) over the first
/// [`spin_friction::FRICTION_BLEND_SPEED`] m/s of total speed.
pub fn contact_friction(
    vel: Vec3,
    spin: Vec3,
    impact_spin_rpm: f32,
    surface: &SurfaceParams,
    floor_normal: Vec3,
) -> ContactFriction {
    use spin_friction::FRICTION_BLEND_SPEED;

    let contact_vel = vel + spin.cross(&(-floor_normal * ball::RADIUS));
    let tangent_vel = contact_vel - floor_normal * contact_vel.dot(&floor_normal);
    let tangent_speed = tangent_vel.norm();

    let spin_multiplier = spin_friction_multiplier(spin, impact_spin_rpm, vel.norm());

    if tangent_speed < 0.05 {
        // Pure rolling
        let flat_vel = vel - floor_normal * vel.dot(&floor_normal);
        let dir = if flat_vel.norm() > 0.01 { flat_vel.normalize() } else { Vec3::zeros() };
        let mu = surface.rolling_friction * spin_multiplier;

        ContactFriction {
            force: dir * (-mu * ball::MASS * GRAVITY),
            regime: FrictionRegime::Rolling,
            effective_friction: mu,
            spin_multiplier,
        }
    } else {
        // Slipping: blend toward kinetic friction as total speed grows, with
        // the ramp eased so low-speed rollout keeps running
        let speed = vel.norm();
        let base = if speed < FRICTION_BLEND_SPEED {
            let blend = (speed / FRICTION_BLEND_SPEED).clamp(0.0, 1.0);
            let blend = blend * blend;
            lerp(surface.rolling_friction, surface.kinetic_friction, blend)
        } else {
            surface.kinetic_friction
        };
        let mu = base * spin_multiplier;
        let dir = if tangent_speed > 0.01 { tangent_vel.normalize() } else { Vec3::zeros() };

        ContactFriction {
            force: dir * (-mu * ball::MASS * GRAVITY),
            regime: FrictionRegime::Slipping,
            effective_friction: mu,
            spin_multiplier,
        }
    }
}

/// Total ground force: viscous grass drag (vertical component zeroed) plus
/// contact friction. The friction diagnostics ride along for tracing.
pub fn ground_force(
    vel: Vec3,
    spin: Vec3,
    impact_spin_rpm: f32,
    surface: &SurfaceParams,
    floor_normal: Vec3,
) -> (Vec3, ContactFriction) {
    let mut grass_drag = vel * (-6.0 * std::f32::consts::PI * ball::RADIUS * surface.grass_viscosity);
    grass_drag.y = 0.0;

    let friction = contact_friction(vel, spin, impact_spin_rpm, surface, floor_normal);
    (grass_drag + friction.force, friction)
}

/// Ground torque: friction torque about the contact point plus a viscous
/// grass torque opposing spin.
pub fn ground_torque(
    vel: Vec3,
    spin: Vec3,
    impact_spin_rpm: f32,
    surface: &SurfaceParams,
    floor_normal: Vec3,
) -> Vec3 {
    let grass_torque = spin * (-6.0 * std::f32::consts::PI * surface.grass_viscosity * ball::RADIUS);

    let friction = contact_friction(vel, spin, impact_spin_rpm, surface, floor_normal);
    let friction_torque = if friction.force.norm() > 0.001 {
        (-floor_normal * ball::RADIUS).cross(&friction.force)
    } else {
        Vec3::zeros()
    };

    friction_torque + grass_torque
}
