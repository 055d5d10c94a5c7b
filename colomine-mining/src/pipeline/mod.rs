//! Mining pipeline orchestration.

pub mod miner;

pub use miner::{MiningDiagnostics, MiningPipeline, MiningResult};
