//! Catalog ingestion errors.

use super::error_code::{self, ColomineErrorCode};

/// Errors raised at the catalog boundary. Malformed rows are not errors;
/// they are skipped and counted by the loader.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog source unreadable: {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Invalid sampling ratio {ratio}: must be in (0, 1]")]
    InvalidRatio { ratio: f64 },
}

impl ColomineErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unreadable { .. } => error_code::CATALOG_UNREADABLE,
            Self::InvalidRatio { .. } => error_code::CATALOG_ERROR,
        }
    }
}
