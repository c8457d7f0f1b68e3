//! Ground surface catalog.
//!
//! Friction and bounce parameters per playing surface. The values are tuning
//! data calibrated against reference carry/rollout distances and are
//! reproduced exactly; there is no algorithm here.

use serde::{Deserialize, Serialize};

/// Playing surface selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceType {
    /// Firm fairway: good conditions, 50-70 yd rollout for low-spin drivers
    #[default]
    Fairway,
    /// Soft/wet fairway: reduced rollout (~20-30 yds)
    FairwaySoft,
    /// Longer grass, more friction: ball checks up quickly
    Rough,
    /// Hard ground, less friction: ball runs out
    Firm,
}

/// Ground interaction parameters for one surface type.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SurfaceParams {
    /// Kinetic (sliding) friction coefficient
    pub kinetic_friction: f32,
    /// Rolling resistance coefficient
    pub rolling_friction: f32,
    /// Grass drag viscosity (kg/(m·s))
    pub grass_viscosity: f32,
    /// Critical bounce angle from the surface plane (rad)
    pub critical_angle: f32,
}

impl SurfaceType {
    /// Parse a selector string; unknown names fall back to the fairway.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Fairway" | "fairway" => SurfaceType::Fairway,
            "FairwaySoft" | "fairway_soft" => SurfaceType::FairwaySoft,
            "Rough" | "rough" => SurfaceType::Rough,
            "Firm" | "firm" => SurfaceType::Firm,
            _ => SurfaceType::Fairway,
        }
    }

    /// Ground interaction parameters for this surface.
    pub fn params(self) -> SurfaceParams {
        match self {
            SurfaceType::Rough => SurfaceParams {
                kinetic_friction: 0.15,
                rolling_friction: 0.05,
                grass_viscosity: 0.0005,
                critical_angle: 0.38, // ~22°
            },
            SurfaceType::Fairway => SurfaceParams {
                kinetic_friction: 0.30,
                rolling_friction: 0.030,
                grass_viscosity: 0.0010,
                critical_angle: 0.25, // ~14°
            },
            SurfaceType::FairwaySoft => SurfaceParams {
                kinetic_friction: 0.42,
                rolling_friction: 0.18,
                grass_viscosity: 0.0020,
                critical_angle: 0.30, // ~17°
            },
            SurfaceType::Firm => SurfaceParams {
                kinetic_friction: 0.08,
                rolling_friction: 0.02,
                grass_viscosity: 0.0002,
                critical_angle: 0.21, // ~12°
            },
        }
    }
}
