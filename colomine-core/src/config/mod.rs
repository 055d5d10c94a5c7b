//! Configuration system for colomine.
//! TOML-based, layered resolution: env > project file > compiled defaults.

pub mod catalog_config;
pub mod colomine_config;
pub mod mining_config;
pub mod observability_config;

pub use catalog_config::CatalogConfig;
pub use colomine_config::ColomineConfig;
pub use mining_config::{GeneratorKind, GroupingStrategy, MiningConfig, SignatureAxis};
pub use observability_config::ObservabilityConfig;
