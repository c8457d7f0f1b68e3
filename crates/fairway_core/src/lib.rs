//! # fairway_core - Deterministic Golf Shot Simulation Engine
//!
//! This library converts launch-monitor shot parameters (speed, launch
//! angles, spin) into a simulated trajectory over a chosen surface and
//! reports carry and total distance, with a JSON API for easy integration
//! with game engines and ingestion pipelines.
//!
//! ## Features
//! - 100% deterministic simulation (same inputs = same result, bit for bit)
//! - Reynolds- and spin-dependent drag/lift from wind tunnel fits
//! - Spin-aware ground friction, bounce and spin-back behavior
//! - JSON API for easy integration

pub mod api;
pub mod engine;
pub mod error;

// Re-export the main API
pub use api::{simulate_shot, simulate_shot_json, BallData, ShotOptions, ShotResponse};
pub use error::{Result, ShotError};

// Re-export the engine types callers compose with
pub use engine::{
    BallState, BounceOutcome, EnvironmentParams, FlightPhase, ShotResult, SpinData, SpinInput,
    SurfaceParams, SurfaceType, Units,
};
pub use engine::{BufferTrace, LogTrace, NullTrace, TraceLevel, TraceSink};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
