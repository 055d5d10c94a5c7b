//! ColomineErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string that
/// callers can match on without parsing messages.
pub trait ColomineErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CATALOG_UNREADABLE: &str = "CATALOG_UNREADABLE";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const INVALID_SKETCH: &str = "INVALID_SKETCH";
