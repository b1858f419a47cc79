//! Error types for scene input and configuration

use thiserror::Error;

/// Rejected scene operation. Nothing is appended when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// A coordinate or length was NaN or infinite
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    /// Form input that does not parse as a number
    #[error("{field}: {input:?} is not a number")]
    Parse { field: &'static str, input: String },
}

/// Invalid settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings json: {0}")]
    Json(#[from] serde_json::Error),
    /// An inclusive range with `min > max`
    #[error("{name}: range min {min} exceeds max {max}")]
    InvalidRange { name: &'static str, min: i32, max: i32 },
    #[error("{name}: invalid value {value}")]
    InvalidValue { name: &'static str, value: f32 },
}
