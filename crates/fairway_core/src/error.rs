//! Error types for the shot simulation API.
//!
//! The engine itself has no failure paths: degenerate numeric inputs (zero
//! velocity, zero spin) are expected physical states and are handled by
//! guards, not errors. Everything here is about malformed input records at
//! the JSON boundary, which are reported back to the caller instead of
//! aborting it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShotError {
    /// The shot record carried no ball data (or an empty object).
    #[error("shot record missing ball data")]
    MissingBallData,
    /// The record could not be interpreted as a shot.
    #[error("invalid shot request: {0}")]
    InvalidRequest(String),
    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShotError>;
