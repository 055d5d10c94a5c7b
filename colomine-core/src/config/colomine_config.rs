//! Top-level colomine configuration with layered resolution.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{CatalogConfig, MiningConfig, ObservabilityConfig};
use crate::errors::ConfigError;

/// Name of the project config file looked up by [`ColomineConfig::load`].
pub const CONFIG_FILE_NAME: &str = "colomine.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`COLOMINE_*`)
/// 2. Project config (`colomine.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ColomineConfig {
    pub mining: MiningConfig,
    pub catalog: CatalogConfig,
    pub observability: ObservabilityConfig,
}

impl ColomineConfig {
    /// Load configuration from `root/colomine.toml` and the environment,
    /// then validate. A missing file falls back to defaults.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config);

        if let Err(e) = Self::validate(&config) {
            warn!(error = %e, "configuration rejected");
            return Err(e);
        }

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ColomineConfig) -> Result<(), ConfigError> {
        config.mining.validate()?;
        if let Some(delimiter) = config.catalog.delimiter {
            if delimiter == '\n' || delimiter == '\r' || delimiter == '-' || delimiter == '.' {
                return Err(ConfigError::ValidationFailed {
                    field: "catalog.delimiter".to_string(),
                    message: format!("'{}' cannot separate numeric fields", delimiter.escape_default()),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut ColomineConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ColomineConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut ColomineConfig, other: &ColomineConfig) {
        // Mining
        if other.mining.epsilon.is_some() {
            base.mining.epsilon = other.mining.epsilon;
        }
        if other.mining.min_freq.is_some() {
            base.mining.min_freq = other.mining.min_freq;
        }
        if other.mining.step.is_some() {
            base.mining.step = other.mining.step;
        }
        if other.mining.count_semantics.is_some() {
            base.mining.count_semantics = other.mining.count_semantics;
        }
        if other.mining.generator.is_some() {
            base.mining.generator = other.mining.generator;
        }
        if other.mining.grouping.is_some() {
            base.mining.grouping = other.mining.grouping;
        }
        if other.mining.signature_axis.is_some() {
            base.mining.signature_axis = other.mining.signature_axis;
        }

        // Catalog
        if other.catalog.has_header.is_some() {
            base.catalog.has_header = other.catalog.has_header;
        }
        if other.catalog.project.is_some() {
            base.catalog.project = other.catalog.project;
        }
        if other.catalog.delimiter.is_some() {
            base.catalog.delimiter = other.catalog.delimiter;
        }
        if other.catalog.sample_seed.is_some() {
            base.catalog.sample_seed = other.catalog.sample_seed;
        }

        // Observability
        if other.observability.log_filter.is_some() {
            base.observability.log_filter = other.observability.log_filter.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Unparsable values are logged and ignored; the lower layer stays in effect.
    fn apply_env_overrides(config: &mut ColomineConfig) {
        if let Some(v) = env_override("COLOMINE_EPSILON") {
            config.mining.epsilon = Some(v);
        }
        if let Some(v) = env_override("COLOMINE_MIN_FREQ") {
            config.mining.min_freq = Some(v);
        }
        if let Some(v) = env_override("COLOMINE_STEP") {
            config.mining.step = Some(v);
        }
        if let Some(v) = env_override("COLOMINE_COUNT_SEMANTICS") {
            config.mining.count_semantics = Some(v);
        }
        if let Some(v) = env_override("COLOMINE_GENERATOR") {
            config.mining.generator = Some(v);
        }
        if let Some(v) = env_override("COLOMINE_GROUPING") {
            config.mining.grouping = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse `key` from the environment. Set-but-unparsable values are logged.
fn env_override<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}
