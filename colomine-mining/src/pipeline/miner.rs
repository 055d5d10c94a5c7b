//! Generate → group → filter.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use colomine_core::config::MiningConfig;
use colomine_core::errors::MiningError;
use colomine_core::types::{FrequentPattern, Sketch, SpatialCatalog};

use crate::filter::FrequencyFilter;
use crate::generation::generator_for;
use crate::grouping::grouper_for;
use crate::matching::InstanceMatcher;

/// Mines frequent co-location patterns of one sketch at a time.
///
/// The pipeline holds only its configuration; every run owns its scratch
/// state, so one pipeline can serve concurrent runs over a shared catalog.
#[derive(Debug, Clone)]
pub struct MiningPipeline {
    config: MiningConfig,
    matcher: InstanceMatcher,
}

/// Output of one run.
#[derive(Debug, Clone)]
pub struct MiningResult {
    /// Frequent patterns, descending support.
    pub patterns: Vec<FrequentPattern>,
    pub diagnostics: MiningDiagnostics,
}

/// Per-run counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiningDiagnostics {
    pub generator: String,
    pub grouping: String,
    /// Deduplicated candidate instances.
    pub candidate_count: usize,
    /// Equivalence groups before filtering.
    pub group_count: usize,
    /// Groups that met `min_freq`.
    pub frequent_count: usize,
    pub matcher_calls: usize,
    pub pruned_pairs: usize,
    /// Highest support among reported patterns.
    pub max_support: usize,
}

impl fmt::Display for MiningDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MiningDiagnostics {{ generator={}, grouping={}, candidates={}, groups={}, frequent={}, matcher_calls={}, pruned_pairs={}, max_support={} }}",
            self.generator,
            self.grouping,
            self.candidate_count,
            self.group_count,
            self.frequent_count,
            self.matcher_calls,
            self.pruned_pairs,
            self.max_support,
        )
    }
}

impl MiningPipeline {
    /// Create a pipeline, rejecting invalid configuration up front.
    pub fn new(config: MiningConfig) -> Result<Self, MiningError> {
        config.validate()?;
        let matcher = InstanceMatcher::new(config.effective_epsilon())?;
        Ok(Self { config, matcher })
    }

    /// Create a pipeline with default configuration.
    pub fn with_defaults() -> Result<Self, MiningError> {
        Self::new(MiningConfig::default())
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    /// Mine `sketch` over `catalog`.
    ///
    /// A sketch without requirements yields an empty result. Invalid sketch
    /// dimensions are rejected before any work starts.
    pub fn run(
        &self,
        catalog: &SpatialCatalog,
        sketch: &Sketch,
    ) -> Result<MiningResult, MiningError> {
        sketch.validate()?;

        let generator = generator_for(&self.config);
        let grouper = grouper_for(&self.config, self.matcher);
        let mut diagnostics = MiningDiagnostics {
            generator: generator.name().to_string(),
            grouping: grouper.name().to_string(),
            ..Default::default()
        };

        if sketch.is_empty() {
            debug!("empty sketch, nothing to mine");
            return Ok(MiningResult {
                patterns: Vec::new(),
                diagnostics,
            });
        }

        // Phase 1: candidate generation
        let instances = generator.generate(catalog, sketch);
        diagnostics.candidate_count = instances.len();
        info!(
            count = instances.len(),
            generator = generator.name(),
            "Phase 1: generated candidate instances"
        );

        // Phase 2: grouping
        let outcome = grouper.group(instances);
        diagnostics.group_count = outcome.groups.len();
        diagnostics.matcher_calls = outcome.stats.matcher_calls;
        diagnostics.pruned_pairs = outcome.stats.pruned_pairs;
        info!(
            groups = outcome.groups.len(),
            matcher_calls = outcome.stats.matcher_calls,
            pruned_pairs = outcome.stats.pruned_pairs,
            grouping = grouper.name(),
            "Phase 2: grouped instances"
        );

        // Phase 3: frequency filter
        let min_freq = self.config.effective_min_freq();
        let patterns = FrequencyFilter::new(min_freq).apply(outcome.groups);
        diagnostics.frequent_count = patterns.len();
        diagnostics.max_support = patterns.first().map_or(0, |p| p.support);
        info!(
            count = patterns.len(),
            min_freq,
            "Phase 3: retained frequent patterns"
        );

        Ok(MiningResult {
            patterns,
            diagnostics,
        })
    }

    /// Mine several sketches over one catalog in parallel. Results are in
    /// input order.
    pub fn run_many(
        &self,
        catalog: &SpatialCatalog,
        sketches: &[Sketch],
    ) -> Vec<Result<MiningResult, MiningError>> {
        sketches
            .par_iter()
            .map(|sketch| self.run(catalog, sketch))
            .collect()
    }
}
