//! Error handling for colomine.
//! One error enum per subsystem, each carrying a stable error code.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod mining_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::ColomineErrorCode;
pub use mining_error::MiningError;
