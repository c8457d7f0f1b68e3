pub mod shot_json;

pub use shot_json::{simulate_shot, simulate_shot_json, BallData, ShotOptions, ShotResponse};
