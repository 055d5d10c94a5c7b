//! Immutable, x-sorted point catalog.

use std::ops::Range;

use super::collections::FxHashMap;
use super::identifiers::KeywordId;
use super::point::{Bounds, Point};

/// The read-only point set every mining call works against.
///
/// Points are kept sorted by x (ties by id) so window queries can binary
/// search the x-range and filter y linearly.
#[derive(Debug, Clone, Default)]
pub struct SpatialCatalog {
    points: Vec<Point>,
    bounds: Bounds,
}

impl SpatialCatalog {
    /// Build a catalog from points in any order.
    pub fn new(mut points: Vec<Point>) -> Self {
        points.sort_by(|p, q| p.x.total_cmp(&q.x).then(p.id.cmp(&q.id)));
        let mut bounds = Bounds::empty();
        for p in &points {
            bounds.expand_to_include(p.x, p.y);
        }
        Self { points, bounds }
    }

    /// Build a catalog that reports `bounds` (widened to cover every point).
    /// Used by sampling, which keeps the parent catalog's extent.
    pub fn with_bounds(points: Vec<Point>, bounds: Bounds) -> Self {
        let mut catalog = Self::new(points);
        if !catalog.points.is_empty() {
            catalog.bounds = catalog.bounds.union(&bounds);
        } else {
            catalog.bounds = bounds;
        }
        catalog
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index range of points with `lo <= x <= hi`.
    pub fn x_range_closed(&self, lo: f64, hi: f64) -> Range<usize> {
        let start = self.points.partition_point(|p| p.x < lo);
        let end = self.points.partition_point(|p| p.x <= hi);
        start..end.max(start)
    }

    /// Index range of points covered by a width-`a` window whose open left
    /// edge sits at `x0`: `x0 < x` and `x - a <= x0`.
    ///
    /// Stated in origin space so callers that derived `x0` as `p.x - a`
    /// get exactly the same comparison back.
    pub fn x_range_covering(&self, x0: f64, a: f64) -> Range<usize> {
        let start = self.points.partition_point(|p| p.x <= x0);
        let end = self.points.partition_point(|p| p.x - a <= x0);
        start..end.max(start)
    }

    /// Points with `lo <= x <= hi`, in catalog order.
    pub fn x_range(&self, lo: f64, hi: f64) -> &[Point] {
        &self.points[self.x_range_closed(lo, hi)]
    }

    /// Occurrence count per keyword.
    pub fn keyword_histogram(&self) -> FxHashMap<KeywordId, usize> {
        let mut histogram = FxHashMap::default();
        for p in &self.points {
            *histogram.entry(p.keyword).or_insert(0) += 1;
        }
        histogram
    }
}

impl FromIterator<Point> for SpatialCatalog {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
