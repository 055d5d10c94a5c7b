//! # colomine-core
//!
//! Shared foundation for the colomine co-location miner: point and catalog
//! types, sketches, instances and patterns, the error enums, the TOML
//! configuration system, and tracing setup.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::ColomineConfig;
pub use errors::{CatalogError, ConfigError, MiningError};
pub use types::{
    Bounds, CountSemantics, FrequentPattern, Instance, KeywordCounts, KeywordId, PatternSlot,
    Point, PointId, Sketch, Slot, SlotLayout, SpatialCatalog,
};
