//! Grid sliding-window generator.

use tracing::debug;

use colomine_core::types::{CountSemantics, Instance, Sketch, SpatialCatalog};

use super::window::{dedup_instances, extract_instances, Window};
use super::CandidateGenerator;

/// Visits window origins `(x_min + i·step, y_min + j·step)` while the window
/// stays inside the catalog's bounding box, extracting from each closed
/// window. Cost grows with `area / step²`; used as a reference oracle.
#[derive(Debug, Clone, Copy)]
pub struct SlidingWindowGenerator {
    step: f64,
    semantics: CountSemantics,
}

impl SlidingWindowGenerator {
    /// `step` must be positive; the pipeline validates it beforehand.
    pub fn new(step: f64, semantics: CountSemantics) -> Self {
        Self { step, semantics }
    }

    /// Number of grid positions along one axis: origins `lo + i·step` with
    /// `origin <= hi - size`.
    fn positions(&self, lo: f64, hi: f64, size: f64) -> usize {
        let span = hi - size - lo;
        if span.is_nan() || span < 0.0 || self.step.is_nan() || self.step <= 0.0 {
            return 0;
        }
        (span / self.step).floor() as usize + 1
    }
}

impl CandidateGenerator for SlidingWindowGenerator {
    fn name(&self) -> &'static str {
        "sliding_window"
    }

    fn generate(&self, catalog: &SpatialCatalog, sketch: &Sketch) -> Vec<Instance> {
        if sketch.is_empty() || catalog.is_empty() {
            return Vec::new();
        }

        let bounds = catalog.bounds();
        let nx = self.positions(bounds.x_min, bounds.x_max, sketch.a);
        let ny = self.positions(bounds.y_min, bounds.y_max, sketch.b);

        let mut raw = Vec::new();
        let mut productive = 0usize;
        for i in 0..nx {
            let x0 = bounds.x_min + i as f64 * self.step;
            for j in 0..ny {
                let y0 = bounds.y_min + j as f64 * self.step;
                let window = Window::closed(x0, y0, sketch.a, sketch.b);
                if extract_instances(catalog, sketch, self.semantics, &window, &mut raw) > 0 {
                    productive += 1;
                }
            }
        }

        let instances = dedup_instances(raw);
        debug!(
            windows = nx * ny,
            productive_windows = productive,
            instances = instances.len(),
            "sliding window generation complete"
        );
        instances
    }
}
