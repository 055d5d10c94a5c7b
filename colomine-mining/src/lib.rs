//! # colomine-mining
//!
//! Frequent spatial co-location mining over a [`SpatialCatalog`].
//!
//! Phases:
//! 1. Candidate generation (grid sliding window or sweep-line)
//! 2. Grouping of candidates under tolerant matching (naive, signature, VP-tree)
//! 3. Frequency filtering by support
//!
//! The `catalog` module covers everything upstream of mining: loading,
//! projection, sampling and keyword ranking.
//!
//! [`SpatialCatalog`]: colomine_core::types::SpatialCatalog

pub mod catalog;
pub mod filter;
pub mod generation;
pub mod grouping;
pub mod matching;
pub mod pipeline;

pub use filter::FrequencyFilter;
pub use generation::{CandidateGenerator, SlidingWindowGenerator, SweepLineGenerator};
pub use grouping::{
    GroupingOutcome, GroupingStats, NaiveGrouper, PatternGrouper, SignatureGrouper, TreeGrouper,
};
pub use matching::{InstanceMatcher, Mapping};
pub use pipeline::{MiningDiagnostics, MiningPipeline, MiningResult};
