//! Concrete sketch occurrences found in a catalog.

use std::cmp::Ordering;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::identifiers::{KeywordId, PointId};
use super::layout::SlotLayout;
use super::point::Point;

/// A point placed in an instance, with its offset from the window origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub point: Point,
    pub rel_x: f64,
    pub rel_y: f64,
}

impl Slot {
    /// Canonical slot order: keyword, then relative y, relative x, point id.
    pub fn canonical_cmp(&self, other: &Slot) -> Ordering {
        self.point
            .keyword
            .cmp(&other.point.keyword)
            .then(self.rel_y.total_cmp(&other.rel_y))
            .then(self.rel_x.total_cmp(&other.rel_x))
            .then(self.point.id.cmp(&other.point.id))
    }
}

/// One disjoint realization of a sketch: an `a × b` window at `origin` and
/// the points extracted from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub a: f64,
    pub b: f64,
    pub origin_x: f64,
    pub origin_y: f64,
    pub slots: Vec<Slot>,
}

impl Instance {
    pub fn new(
        a: f64,
        b: f64,
        origin_x: f64,
        origin_y: f64,
        points: impl IntoIterator<Item = Point>,
    ) -> Self {
        let slots = points
            .into_iter()
            .map(|point| Slot {
                point,
                rel_x: point.x - origin_x,
                rel_y: point.y - origin_y,
            })
            .collect();
        Self {
            a,
            b,
            origin_x,
            origin_y,
            slots,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Point ids in ascending order; the deduplication key.
    pub fn sorted_ids(&self) -> Vec<PointId> {
        let mut ids: Vec<PointId> = self.slots.iter().map(|s| s.point.id).collect();
        ids.sort_unstable();
        ids
    }

    /// Sort slots into canonical order.
    pub fn canonicalize(&mut self) {
        self.slots.sort_by(Slot::canonical_cmp);
    }

    pub fn into_canonical(mut self) -> Self {
        self.canonicalize();
        self
    }

    /// Slot keywords in current slot order, e.g. `"3,3,7,"`.
    /// Instances with different type signatures (after canonicalization)
    /// can never match.
    pub fn type_signature(&self) -> String {
        let mut signature = String::with_capacity(self.slots.len() * 4);
        for slot in &self.slots {
            let _ = write!(signature, "{},", slot.point.keyword);
        }
        signature
    }
}

impl SlotLayout for Instance {
    #[inline]
    fn width(&self) -> f64 {
        self.a
    }

    #[inline]
    fn height(&self) -> f64 {
        self.b
    }

    #[inline]
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn slot_keyword(&self, index: usize) -> KeywordId {
        self.slots[index].point.keyword
    }

    #[inline]
    fn slot_position(&self, index: usize) -> (f64, f64) {
        let slot = &self.slots[index];
        (slot.rel_x, slot.rel_y)
    }
}
