//! Candidate generation: turning (catalog, sketch) into disjoint instances.
//!
//! Two interchangeable generators share one window-extraction routine:
//! - [`SlidingWindowGenerator`] enumerates a grid of window origins.
//! - [`SweepLineGenerator`] sweeps window-origin space and visits one
//!   origin per distinct window content.

pub mod sliding_window;
pub mod sweep_line;
pub mod window;

pub use sliding_window::SlidingWindowGenerator;
pub use sweep_line::SweepLineGenerator;
pub use window::{dedup_instances, extract_instances, Window, WindowEdges};

use colomine_core::config::{GeneratorKind, MiningConfig};
use colomine_core::types::{Instance, Sketch, SpatialCatalog};

/// Produces the deduplicated candidate instances of a sketch.
///
/// Output is ordered by each instance's sorted point-id vector.
pub trait CandidateGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    fn generate(&self, catalog: &SpatialCatalog, sketch: &Sketch) -> Vec<Instance>;
}

/// Build the generator selected by `config`.
pub fn generator_for(config: &MiningConfig) -> Box<dyn CandidateGenerator> {
    let semantics = config.effective_count_semantics();
    match config.effective_generator() {
        GeneratorKind::SlidingWindow => Box::new(SlidingWindowGenerator::new(
            config.effective_step(),
            semantics,
        )),
        GeneratorKind::SweepLine => Box::new(SweepLineGenerator::new(semantics)),
    }
}
