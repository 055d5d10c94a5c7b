//! Frequent patterns: the mining output.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::identifiers::{KeywordId, PointId};
use super::instance::Instance;
use super::layout::SlotLayout;

/// One abstract slot of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternSlot {
    pub rel_x: f64,
    pub rel_y: f64,
    pub keyword: KeywordId,
}

/// A representative arrangement with its accumulated support.
///
/// `support_ids[i]` holds every real point observed in slot `i` across the
/// instances merged into this pattern. It is evidence for the support value
/// and is not serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentPattern {
    pub a: f64,
    pub b: f64,
    pub slots: Vec<PatternSlot>,
    pub support: usize,
    #[serde(skip)]
    pub support_ids: Vec<BTreeSet<PointId>>,
}

impl FrequentPattern {
    /// Build a pattern from its representative instance and per-slot ids.
    pub fn from_representative(
        representative: &Instance,
        support_ids: Vec<BTreeSet<PointId>>,
    ) -> Self {
        let slots = representative
            .slots
            .iter()
            .map(|s| PatternSlot {
                rel_x: s.rel_x,
                rel_y: s.rel_y,
                keyword: s.point.keyword,
            })
            .collect();
        let support = Self::support_of(&support_ids);
        Self {
            a: representative.a,
            b: representative.b,
            slots,
            support,
            support_ids,
        }
    }

    /// Minimum, over slots, of the distinct point count. Zero without slots.
    pub fn support_of(support_ids: &[BTreeSet<PointId>]) -> usize {
        support_ids.iter().map(BTreeSet::len).min().unwrap_or(0)
    }

    pub fn keywords(&self) -> Vec<KeywordId> {
        self.slots.iter().map(|s| s.keyword).collect()
    }
}

impl SlotLayout for FrequentPattern {
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
        self.slots[index].keyword
    }

    #[inline]
    fn slot_position(&self, index: usize) -> (f64, f64) {
        let slot = &self.slots[index];
        (slot.rel_x, slot.rel_y)
    }
}
