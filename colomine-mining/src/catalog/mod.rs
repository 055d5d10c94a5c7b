//! Catalog boundary: ingestion, projection, sampling and keyword ranking.
//!
//! Everything here runs before mining; the miner itself only reads an
//! already-built [`SpatialCatalog`](colomine_core::types::SpatialCatalog).

pub mod keywords;
pub mod loader;
pub mod projection;
pub mod sampling;

pub use keywords::frequent_keywords;
pub use loader::{load_catalog, parse_catalog, LoadReport};
pub use sampling::{sample_dense, sample_random};
