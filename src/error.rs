//! Error types shared by every layer and by the configuration loader.

use thiserror::Error;

/// Everything a layer call or a layer configuration can fail with.
///
/// Numerical overflow is deliberately absent: `inf` and `NaN` flow through
/// the arithmetic exactly as IEEE-754 produces them.
#[derive(Error, Debug)]
pub enum LayerError {
    #[error("{layer}.{op}: shape mismatch, expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        layer: &'static str,
        op: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("{layer}.backward called without a cached forward pass")]
    MissingCache { layer: &'static str },

    #[error("unknown weight initialisation method '{0}'")]
    UnknownInitialization(String),

    #[error("invalid layer configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayerError>;
