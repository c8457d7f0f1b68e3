//! JSON boundary for headless shot simulation.
//!
//! Accepts launch-monitor shot records — either wrapped
//! (`{"BallData": {...}}`) or flat — simulates them and returns carry/total
//! distances in yards. Internal computation stays in meters; the conversion
//! happens here, at the boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::constants::integration::START_HEIGHT;
use crate::engine::environment::{
    EnvironmentParams, Units, DEFAULT_ALTITUDE_FT, DEFAULT_TEMPERATURE_F,
};
use crate::engine::launch::{self, SpinInput};
use crate::engine::surface::SurfaceType;
use crate::engine::trace::{NullTrace, TraceSink};
use crate::engine::{integrator, BallState, ShotResult, Vec3};
use crate::error::{Result, ShotError};

/// Ball data from a launch monitor record (mph / degrees / rpm).
///
/// Field names follow the launch-monitor wire format. Spin may arrive as any
/// consistent subset of the four spin fields.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BallData {
    /// Ball speed (mph)
    #[serde(rename = "Speed")]
    pub speed: Option<f32>,
    /// Vertical launch angle (deg)
    #[serde(rename = "VLA")]
    pub vla: Option<f32>,
    /// Horizontal launch angle (deg)
    #[serde(rename = "HLA")]
    pub hla: Option<f32>,
    /// Backspin (rpm)
    #[serde(rename = "BackSpin")]
    pub backspin: Option<f32>,
    /// Sidespin (rpm)
    #[serde(rename = "SideSpin")]
    pub sidespin: Option<f32>,
    /// Total spin (rpm)
    #[serde(rename = "TotalSpin")]
    pub total_spin: Option<f32>,
    /// Spin axis tilt (deg)
    #[serde(rename = "SpinAxis")]
    pub spin_axis: Option<f32>,
}

impl BallData {
    /// Extract ball data from a record that is either wrapped in a
    /// `"BallData"` object or flat. An absent or empty object is a reported
    /// error, never a panic.
    pub fn from_record(record: &Value) -> Result<Self> {
        let ball_value = record.get("BallData").cloned().unwrap_or_else(|| record.clone());
        match ball_value.as_object() {
            Some(map) if !map.is_empty() => serde_json::from_value(ball_value)
                .map_err(|e| ShotError::InvalidRequest(e.to_string())),
            _ => Err(ShotError::MissingBallData),
        }
    }
}

/// Optional simulation settings carried alongside the ball data.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ShotOptions {
    /// Surface selector; unknown names fall back to Fairway
    pub surface: String,
    /// Altitude (ft imperial / m metric)
    pub altitude: f32,
    /// Temperature (°F imperial / °C metric)
    pub temperature: f32,
    pub units: Units,
}

impl Default for ShotOptions {
    fn default() -> Self {
        Self {
            surface: "Fairway".to_string(),
            altitude: DEFAULT_ALTITUDE_FT,
            temperature: DEFAULT_TEMPERATURE_F,
            units: Units::Imperial,
        }
    }
}

/// Carry and total distance in yards.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShotResponse {
    pub carry_yd: f32,
    pub total_yd: f32,
}

/// Simulate a shot described by a JSON record and return the response JSON.
///
/// A missing or empty record is a reported error with no result — the
/// ingestion side decides what to do with it.
pub fn simulate_shot_json(request_json: &str) -> Result<String> {
    let root: Value = serde_json::from_str(request_json)?;

    let ball = BallData::from_record(&root)?;
    let options: ShotOptions =
        serde_json::from_value(root).map_err(|e| ShotError::InvalidRequest(e.to_string()))?;

    let result = simulate_shot(&ball, &options, &mut NullTrace);
    let response = ShotResponse { carry_yd: result.carry_yd(), total_yd: result.total_yd() };

    Ok(serde_json::to_string(&response)?)
}

/// Typed counterpart of [`simulate_shot_json`] for Rust callers; diagnostics
/// go to the supplied sink.
pub fn simulate_shot(ball: &BallData, options: &ShotOptions, sink: &mut dyn TraceSink) -> ShotResult {
    let spin = launch::parse_spin(SpinInput {
        backspin: ball.backspin,
        sidespin: ball.sidespin,
        total: ball.total_spin,
        axis: ball.spin_axis,
    });
    if spin.inconsistent {
        log::warn!(
            "spin data inconsistent: supplied total disagrees with components, using {:.0} rpm",
            spin.total
        );
    }

    let launch = launch::build_launch_vectors(
        ball.speed.unwrap_or(0.0),
        ball.vla.unwrap_or(0.0),
        ball.hla.unwrap_or(0.0),
        spin.total,
        spin.axis,
    );

    let env = EnvironmentParams::from_conditions(options.altitude, options.temperature, options.units);
    let surface = SurfaceType::from_name(&options.surface).params();

    let initial = BallState::launched(
        Vec3::new(0.0, START_HEIGHT, 0.0),
        launch.velocity,
        launch.spin,
    );

    integrator::simulate(initial, &env, &surface, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrapped_record() {
        let request = json!({
            "BallData": {
                "Speed": 90.0,
                "VLA": 12.0,
                "HLA": 0.0,
                "BackSpin": 2600.0
            }
        });
        let response = simulate_shot_json(&request.to_string()).unwrap();
        let parsed: Value = serde_json::from_str(&response).unwrap();
        assert!(parsed["carry_yd"].as_f64().unwrap() > 0.0);
        assert!(parsed["total_yd"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_flat_record() {
        let request = json!({
            "Speed": 90.0,
            "VLA": 12.0,
            "BackSpin": 2600.0
        });
        let response = simulate_shot_json(&request.to_string()).unwrap();
        let parsed: Value = serde_json::from_str(&response).unwrap();
        assert!(parsed["carry_yd"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_missing_ball_data_is_reported() {
        assert!(matches!(simulate_shot_json("{}"), Err(ShotError::MissingBallData)));
        assert!(matches!(
            simulate_shot_json(r#"{"BallData": {}}"#),
            Err(ShotError::MissingBallData)
        ));
        assert!(matches!(
            simulate_shot_json(r#"{"BallData": null}"#),
            Err(ShotError::MissingBallData)
        ));
    }

    #[test]
    fn test_malformed_json_is_reported() {
        assert!(matches!(simulate_shot_json("not json"), Err(ShotError::Serialization(_))));
    }

    #[test]
    fn test_surface_override_changes_rollout() {
        let fairway = json!({
            "BallData": { "Speed": 150.0, "VLA": 11.0, "BackSpin": 2500.0 },
            "surface": "Fairway"
        });
        let soft = json!({
            "BallData": { "Speed": 150.0, "VLA": 11.0, "BackSpin": 2500.0 },
            "surface": "FairwaySoft"
        });

        let on_fairway: ShotResponse =
            serde_json::from_str(&simulate_shot_json(&fairway.to_string()).unwrap()).unwrap();
        let on_soft: ShotResponse =
            serde_json::from_str(&simulate_shot_json(&soft.to_string()).unwrap()).unwrap();

        assert!(
            on_soft.total_yd < on_fairway.total_yd,
            "soft turf shortens the shot: {} vs {}",
            on_soft.total_yd,
            on_fairway.total_yd
        );
    }

    #[test]
    fn test_total_spin_and_axis_record() {
        let request = json!({
            "BallData": {
                "Speed": 100.0,
                "VLA": 14.0,
                "TotalSpin": 3000.0,
                "SpinAxis": -8.0
            }
        });
        let response = simulate_shot_json(&request.to_string()).unwrap();
        let parsed: Value = serde_json::from_str(&response).unwrap();
        assert!(parsed["carry_yd"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_unknown_surface_falls_back_to_fairway() {
        let named = json!({
            "BallData": { "Speed": 120.0, "VLA": 12.0, "BackSpin": 2800.0 },
            "surface": "Fairway"
        });
        let unknown = json!({
            "BallData": { "Speed": 120.0, "VLA": 12.0, "BackSpin": 2800.0 },
            "surface": "MoonDust"
        });
        assert_eq!(
            simulate_shot_json(&named.to_string()).unwrap(),
            simulate_shot_json(&unknown.to_string()).unwrap()
        );
    }
}
