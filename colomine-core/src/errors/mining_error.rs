//! Mining pipeline errors.

use super::config_error::ConfigError;
use super::error_code::{self, ColomineErrorCode};

/// Errors that stop a mining run before any computation begins.
///
/// Empty results, unmatched instances and low support are normal outcomes
/// and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("Invalid sketch {field}: {message}")]
    InvalidSketch { field: String, message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ColomineErrorCode for MiningError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSketch { .. } => error_code::INVALID_SKETCH,
            Self::Config(e) => e.error_code(),
        }
    }
}
