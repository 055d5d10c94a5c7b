//! Frequency filtering and ranking.

use colomine_core::types::FrequentPattern;

use crate::grouping::GroupedPattern;

/// Keeps patterns whose support reaches `min_freq`, ranked by descending
/// support. The sort is stable, so equal supports keep grouping order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyFilter {
    min_freq: usize,
}

impl FrequencyFilter {
    pub fn new(min_freq: u32) -> Self {
        Self {
            min_freq: min_freq as usize,
        }
    }

    #[inline]
    pub fn retains(&self, support: usize) -> bool {
        support >= self.min_freq
    }

    pub fn apply(&self, groups: Vec<GroupedPattern>) -> Vec<FrequentPattern> {
        let mut patterns: Vec<FrequentPattern> = groups
            .into_iter()
            .filter(|g| self.retains(g.support()))
            .map(GroupedPattern::into_pattern)
            .collect();
        patterns.sort_by(|a, b| b.support.cmp(&a.support));
        patterns
    }
}
