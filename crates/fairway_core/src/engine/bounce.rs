//! Impact response: the bounce state machine.
//!
//! Each ground contact decomposes velocity and spin against the contact
//! plane, picks a tangential model (simple retention, or the Penner
//! steep-impact model which can reverse the roll direction on high-spin
//! wedges) and a coefficient of restitution (speed- and spin-dependent on
//! the first bounce, aggressively damped during rollout so the ball settles
//! into pure roll).

use super::ball::FlightPhase;
use super::constants::{ball, units};
use super::surface::SurfaceParams;
use super::trace::{self, TraceSink};
use super::{cap_norm, lerp, Vec3};

/// Result of one ground impact. Pure data; the integrator applies it.
#[derive(Clone, Copy, Debug)]
pub struct BounceOutcome {
    pub velocity: Vec3,
    pub spin: Vec3,
    pub phase: FlightPhase,
}

/// Base coefficient of restitution for a turf impact, by normal speed.
///
/// Zero below 2 m/s (small bounces die), a fixed 0.25 above 20 m/s, a
/// quadratic fit in between.
pub fn restitution(speed_normal: f32) -> f32 {
    if speed_normal >= 20.0 {
        0.25
    } else if speed_normal <= 2.0 {
        0.0
    } else {
        0.45 - 0.0100 * speed_normal + 0.0002 * speed_normal * speed_normal
    }
}

/// Compute the ball's response to hitting the ground.
///
/// The first contact moves Flight→Rollout; later contacts stay in Rollout.
/// Rest is the integrator's decision, never this function's.
pub fn bounce(
    vel: Vec3,
    spin: Vec3,
    normal: Vec3,
    phase: FlightPhase,
    surface: &SurfaceParams,
    sink: &mut dyn TraceSink,
) -> BounceOutcome {
    let new_phase = if phase == FlightPhase::Flight { FlightPhase::Rollout } else { phase };

    // Decompose velocity against the contact plane
    let vel_normal = normal * vel.dot(&normal);
    let speed_normal = vel_normal.norm();
    let mut vel_tangent = vel - vel_normal;
    let speed_tangent = vel_tangent.norm();

    // Decompose angular velocity the same way
    let spin_normal = normal * spin.dot(&normal);
    let mut spin_tangent = spin - spin_normal;
    let spin_tangent_mag = spin_tangent.norm();

    // Impact angle measured from the surface plane, not from the normal
    let impact_speed = vel.norm();
    let angle_to_normal =
        if impact_speed > 1e-6 { vel.angle(&normal) } else { std::f32::consts::FRAC_PI_2 };
    let impact_angle = (angle_to_normal - std::f32::consts::FRAC_PI_2).abs();

    let spin_rpm = spin.norm() / units::RAD_PER_RPM;

    // Tangential retention
    let retention = if phase == FlightPhase::Flight {
        // First bounce: spin eats into the retained speed
        let spin_factor = (1.0 - spin_rpm / 8000.0).clamp(0.40, 1.0);
        0.55 * spin_factor
    } else {
        // Rollout bounces: low spin ratio keeps the ball running
        let spin_ratio =
            if impact_speed > 0.1 { spin.norm() * ball::RADIUS / impact_speed } else { 0.0 };
        if spin_ratio < 0.20 {
            lerp(0.85, 0.70, spin_ratio / 0.20)
        } else {
            0.70
        }
    };

    trace::verbose(sink, || {
        format!("  bounce: spin={spin_rpm:.0} rpm, retention={retention:.3}")
    });

    // New tangential speed
    let new_tangent_speed = if phase == FlightPhase::Flight {
        // The Penner model only holds for high-energy steep impacts. Shallow
        // driver-style landings and low-energy chips get simple retention,
        // which keeps them from rolling backward.
        if impact_angle < surface.critical_angle || impact_speed < 20.0 {
            trace::verbose(sink, || {
                format!(
                    "  bounce: simple retention (angle {:.1}°, speed {:.2} m/s)",
                    impact_angle.to_degrees(),
                    impact_speed
                )
            });
            speed_tangent * retention
        } else {
            let penner = retention * impact_speed * (impact_angle - surface.critical_angle).sin()
                - 2.0 * ball::RADIUS * spin_tangent_mag / 7.0;
            trace::verbose(sink, || {
                format!(
                    "  bounce: steep high-energy impact, tangent {:.2} -> {:.2} m/s",
                    speed_tangent, penner
                )
            });
            penner
        }
    } else {
        // Rollout: no spin subtraction, spin only decays through ground torque
        speed_tangent * retention
    };

    // Apply it to the tangential velocity
    if speed_tangent < 0.01 && new_tangent_speed.abs() < 0.01 {
        vel_tangent = Vec3::zeros();
    } else if new_tangent_speed < 0.0 {
        // Spin-back: reverse the tangential direction
        vel_tangent = if speed_tangent > 1e-6 {
            -vel_tangent.normalize() * new_tangent_speed.abs()
        } else {
            Vec3::zeros()
        };
    } else {
        vel_tangent = cap_norm(vel_tangent, new_tangent_speed);
    }

    // Tangential spin update
    if phase == FlightPhase::Flight {
        // First bounce: recompute spin from the new tangential speed
        let new_spin_mag = new_tangent_speed.abs() / ball::RADIUS;
        if spin_tangent_mag < 0.1 || new_spin_mag < 0.01 {
            spin_tangent = Vec3::zeros();
        } else if new_tangent_speed < 0.0 {
            spin_tangent = -spin_tangent.normalize() * new_spin_mag;
        } else {
            spin_tangent = cap_norm(spin_tangent, new_spin_mag);
        }
    } else {
        // Rollout: keep the spin magnitude but aim it along the rolling axis.
        // Forcing spin to match rolling speed would kill rollout energy; the
        // ball slips briefly and spin decays through ground torque instead.
        if new_tangent_speed > 0.05 {
            let existing_mag = spin_tangent.norm();
            let tangent_dir =
                if vel_tangent.norm() > 0.01 { vel_tangent.normalize() } else { Vec3::x() };
            let rolling_axis = normal.cross(&tangent_dir).normalize();
            spin_tangent =
                if existing_mag > 0.05 { rolling_axis * existing_mag } else { Vec3::zeros() };
        } else {
            spin_tangent = Vec3::zeros();
        }
    }

    // Coefficient of restitution
    let cor = if phase == FlightPhase::Flight {
        let base_cor = restitution(speed_normal);

        // The spin penalty is about impact energy: flop shots stick, soft
        // chips don't. Full penalty only for fast impacts.
        let cor_velocity_scale = if speed_normal < 12.0 {
            lerp(0.0, 0.50, speed_normal / 12.0)
        } else if speed_normal < 25.0 {
            lerp(0.50, 1.0, (speed_normal - 12.0) / 13.0)
        } else {
            1.0
        };

        let spin_reduction = if spin_rpm < 1500.0 {
            (spin_rpm / 1500.0) * 0.30
        } else {
            let factor = ((spin_rpm - 1500.0) / 1500.0).min(1.0);
            (0.30 + factor * 0.40) * cor_velocity_scale
        };

        let cor = base_cor * (1.0 - spin_reduction);
        trace::verbose(sink, || {
            format!(
                "  bounce: v_n={speed_normal:.2} m/s, base COR={base_cor:.3}, \
                 spin reduction={spin_reduction:.2}, COR={cor:.3}"
            )
        });
        cor
    } else {
        // Settle into roll: kill small rollout bounces, halve the rest
        let cor = if speed_normal < 4.0 { 0.0 } else { restitution(speed_normal) * 0.5 };
        if speed_normal > 0.5 {
            trace::verbose(sink, || {
                format!("  rollout bounce: v_n={speed_normal:.2} m/s, COR={cor:.3}")
            });
        }
        cor
    };

    BounceOutcome {
        velocity: vel_normal * -cor + vel_tangent,
        spin: spin_normal + spin_tangent,
        phase: new_phase,
    }
}
