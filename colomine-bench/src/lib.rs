//! # colomine-bench
//!
//! Synthetic catalogs for benchmarking the miner, and a serializable
//! per-run record for comparing runs against a baseline.

pub mod fixtures;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use colomine_core::errors::MiningError;
use colomine_core::types::{Sketch, SpatialCatalog};
use colomine_mining::{MiningDiagnostics, MiningPipeline};

/// One timed mining run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub name: String,
    pub catalog_size: usize,
    pub duration_ms: f64,
    pub diagnostics: MiningDiagnostics,
}

impl RunRecord {
    /// Allowed slowdown before a run counts as a regression.
    pub const REGRESSION_THRESHOLD: f64 = 0.20;

    /// Run `pipeline` once and record how long it took.
    pub fn measure(
        name: impl Into<String>,
        pipeline: &MiningPipeline,
        catalog: &SpatialCatalog,
        sketch: &Sketch,
    ) -> Result<Self, MiningError> {
        let start = Instant::now();
        let result = pipeline.run(catalog, sketch)?;
        Ok(Self {
            name: name.into(),
            catalog_size: catalog.len(),
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
            diagnostics: result.diagnostics,
        })
    }

    /// Check if this run regresses vs a baseline of the same workload.
    pub fn regresses_vs(&self, baseline: &RunRecord) -> bool {
        if baseline.duration_ms <= 0.0 {
            return false;
        }
        self.duration_ms / baseline.duration_ms > 1.0 + Self::REGRESSION_THRESHOLD
    }

    /// Whether both runs found the same patterns, judged by counters.
    pub fn same_outcome(&self, other: &RunRecord) -> bool {
        self.diagnostics.candidate_count == other.diagnostics.candidate_count
            && self.diagnostics.group_count == other.diagnostics.group_count
            && self.diagnostics.frequent_count == other.diagnostics.frequent_count
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Names of runs that regressed against, or disagree with, the baseline
/// run of the same name. Runs missing from the baseline are skipped.
pub fn compare_to_baseline(runs: &[RunRecord], baseline: &[RunRecord]) -> Vec<String> {
    runs.iter()
        .filter_map(|run| {
            let base = baseline.iter().find(|b| b.name == run.name)?;
            if !run.same_outcome(base) {
                Some(format!("{}: outcome changed", run.name))
            } else if run.regresses_vs(base) {
                Some(format!(
                    "{}: {:.1}ms vs baseline {:.1}ms",
                    run.name, run.duration_ms, base.duration_ms
                ))
            } else {
                None
            }
        })
        .collect()
}
