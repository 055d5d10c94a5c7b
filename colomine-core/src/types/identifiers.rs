//! Identifier aliases shared across the miner.

/// Unique identifier of a catalog point.
pub type PointId = u64;

/// Category id attached to every point.
pub type KeywordId = u32;
