//! Sweep-line generator over window-origin space.
//!
//! A point `p` lies in the window whose open minimum corner is `(x0, y0)`
//! iff `p.x - a <= x0 < p.x` and `p.y - b <= y0 < p.y`. Sweeping `y0`
//! downward, `p` enters at `y0 = p.y` and leaves at `y0 = p.y - b`, each
//! time over the origin interval `[p.x - a, p.x)`. The x-origin axis is kept
//! as a partition of maximal intervals with uniform window content; every
//! interval that satisfies the sketch across a vertical gap becomes a valid
//! region, and one window per merged region is handed to extraction.

use std::cmp::Ordering;

use tracing::debug;

use colomine_core::types::{
    CountSemantics, Instance, KeywordCounts, KeywordId, PointId, Sketch, SpatialCatalog,
};

use super::window::{dedup_instances, extract_instances, Window};
use super::CandidateGenerator;

/// Enter sorts before Leave at equal y and x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    Enter,
    Leave,
}

#[derive(Debug, Clone, Copy)]
struct Event {
    y: f64,
    x_lo: f64,
    x_hi: f64,
    keyword: KeywordId,
    token: u64,
    kind: EventKind,
}

/// Origin x-interval `[start, end)` with uniform window content.
///
/// `fingerprint` is an order-independent hash of the tracked points, so
/// neighbouring intervals only coalesce when they hold the same points and
/// not merely the same keyword counts.
#[derive(Debug, Clone)]
struct OriginInterval {
    start: f64,
    end: f64,
    counts: KeywordCounts,
    fingerprint: u64,
}

#[derive(Debug)]
struct OriginPartition {
    intervals: Vec<OriginInterval>,
}

impl OriginPartition {
    fn new(start: f64, end: f64) -> Self {
        Self {
            intervals: vec![OriginInterval {
                start,
                end,
                counts: KeywordCounts::new(),
                fingerprint: 0,
            }],
        }
    }

    /// Split the interval strictly containing `x` so that `x` becomes a
    /// boundary.
    fn split_at(&mut self, x: f64) {
        let idx = self.intervals.partition_point(|iv| iv.end <= x);
        if let Some(iv) = self.intervals.get_mut(idx) {
            if iv.start < x {
                let mut right = iv.clone();
                right.start = x;
                iv.end = x;
                self.intervals.insert(idx + 1, right);
            }
        }
    }

    fn apply(&mut self, event: &Event) {
        if !(event.x_lo < event.x_hi) {
            return;
        }
        self.split_at(event.x_lo);
        self.split_at(event.x_hi);

        let first = self.intervals.partition_point(|iv| iv.end <= event.x_lo);
        let last = self.intervals.partition_point(|iv| iv.start < event.x_hi);
        for iv in &mut self.intervals[first..last] {
            match event.kind {
                EventKind::Enter => {
                    iv.counts.increment(event.keyword);
                    iv.fingerprint = iv.fingerprint.wrapping_add(event.token);
                }
                EventKind::Leave => {
                    iv.counts.decrement(event.keyword);
                    iv.fingerprint = iv.fingerprint.wrapping_sub(event.token);
                }
            }
        }

        self.coalesce(first.saturating_sub(1), last + 1);
    }

    /// Merge neighbours with identical content within `[from, to)`.
    fn coalesce(&mut self, from: usize, to: usize) {
        let mut to = to.min(self.intervals.len());
        let mut i = from;
        while i + 1 < to {
            let (left, right) = (&self.intervals[i], &self.intervals[i + 1]);
            if left.fingerprint == right.fingerprint && left.counts == right.counts {
                let merged = self.intervals.remove(i + 1);
                self.intervals[i].end = merged.end;
                to -= 1;
            } else {
                i += 1;
            }
        }
    }
}

/// A rectangle of window origins `[x_lo, x_hi) × [y_lo, y_hi)` whose windows
/// all hold the same points and satisfy the sketch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OriginRegion {
    pub x_lo: f64,
    pub x_hi: f64,
    pub y_lo: f64,
    pub y_hi: f64,
    fingerprint: u64,
}

impl OriginRegion {
    /// Minimum corner, the region's representative origin.
    pub fn representative(&self) -> (f64, f64) {
        (self.x_lo, self.y_lo)
    }
}

/// Event-driven generator. Tracks only sketch keywords under
/// [`CountSemantics::AtLeast`]; tracks every point under
/// [`CountSemantics::Exact`] so surplus keywords invalidate a window.
#[derive(Debug, Clone, Copy)]
pub struct SweepLineGenerator {
    semantics: CountSemantics,
}

impl SweepLineGenerator {
    pub fn new(semantics: CountSemantics) -> Self {
        Self { semantics }
    }

    fn build_events(&self, catalog: &SpatialCatalog, sketch: &Sketch) -> Vec<Event> {
        let mut events = Vec::new();
        for p in catalog.points() {
            if self.semantics == CountSemantics::AtLeast && !sketch.is_relevant(p.keyword) {
                continue;
            }
            let (x_lo, x_hi) = (p.x - sketch.a, p.x);
            let token = point_token(p.id);
            events.push(Event {
                y: p.y,
                x_lo,
                x_hi,
                keyword: p.keyword,
                token,
                kind: EventKind::Enter,
            });
            events.push(Event {
                y: p.y - sketch.b,
                x_lo,
                x_hi,
                keyword: p.keyword,
                token,
                kind: EventKind::Leave,
            });
        }
        events.sort_by(|e, f| {
            f.y.total_cmp(&e.y)
                .then(e.x_lo.total_cmp(&f.x_lo))
                .then(e.kind.cmp(&f.kind))
        });
        events
    }

    /// All maximal valid origin regions, merged vertically.
    pub fn valid_regions(&self, catalog: &SpatialCatalog, sketch: &Sketch) -> Vec<OriginRegion> {
        if sketch.is_empty() || catalog.is_empty() {
            return Vec::new();
        }
        let events = self.build_events(catalog, sketch);
        let Some(first) = events.first() else {
            return Vec::new();
        };

        let bounds = catalog.bounds();
        let mut partition = OriginPartition::new(bounds.x_min - sketch.a, bounds.x_max);
        let mut regions = Vec::new();
        let mut y_prev = first.y;

        for event in &events {
            if event.y < y_prev {
                for iv in &partition.intervals {
                    if iv.counts.satisfies(sketch, self.semantics) {
                        regions.push(OriginRegion {
                            x_lo: iv.start,
                            x_hi: iv.end,
                            y_lo: event.y,
                            y_hi: y_prev,
                            fingerprint: iv.fingerprint,
                        });
                    }
                }
            }
            partition.apply(event);
            y_prev = event.y;
        }

        let raw = regions.len();
        let merged = merge_vertical(regions);
        debug!(
            events = events.len(),
            raw_regions = raw,
            merged_regions = merged.len(),
            "sweep complete"
        );
        merged
    }
}

impl CandidateGenerator for SweepLineGenerator {
    fn name(&self) -> &'static str {
        "sweep_line"
    }

    fn generate(&self, catalog: &SpatialCatalog, sketch: &Sketch) -> Vec<Instance> {
        let regions = self.valid_regions(catalog, sketch);
        let mut raw = Vec::new();
        for region in &regions {
            let (x0, y0) = region.representative();
            let window = Window::open_min(x0, y0, sketch.a, sketch.b);
            extract_instances(catalog, sketch, self.semantics, &window, &mut raw);
        }
        let instances = dedup_instances(raw);
        debug!(
            regions = regions.len(),
            instances = instances.len(),
            "sweep line generation complete"
        );
        instances
    }
}

/// Join regions stacked on top of each other with the same x-range and
/// content. Bounds are event coordinates, so they compare exactly.
fn merge_vertical(mut regions: Vec<OriginRegion>) -> Vec<OriginRegion> {
    regions.sort_by(|r, s| {
        r.x_lo
            .total_cmp(&s.x_lo)
            .then(r.x_hi.total_cmp(&s.x_hi))
            .then(r.fingerprint.cmp(&s.fingerprint))
            .then(s.y_hi.total_cmp(&r.y_hi))
    });

    let mut merged: Vec<OriginRegion> = Vec::with_capacity(regions.len());
    for region in regions {
        if let Some(last) = merged.last_mut() {
            if same_column(last, &region) && last.y_lo == region.y_hi {
                last.y_lo = region.y_lo;
                continue;
            }
        }
        merged.push(region);
    }
    merged.sort_by(|r, s| match r.y_lo.total_cmp(&s.y_lo) {
        Ordering::Equal => r.x_lo.total_cmp(&s.x_lo),
        other => other,
    });
    merged
}

#[inline]
fn same_column(r: &OriginRegion, s: &OriginRegion) -> bool {
    r.fingerprint == s.fingerprint && r.x_lo == s.x_lo && r.x_hi == s.x_hi
}

/// splitmix64 finalizer; spreads point ids for the content fingerprint.
#[inline]
fn point_token(id: PointId) -> u64 {
    let mut z = id.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
