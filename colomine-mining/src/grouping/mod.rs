//! Grouping: clustering matching instances into representative patterns.
//!
//! Three strategies share one contract and produce the same partition:
//! - [`NaiveGrouper`]: every representative against every later instance.
//! - [`SignatureGrouper`]: the same loop behind a bucketed-offset filter.
//! - [`TreeGrouper`]: type-signature buckets indexed by VP-trees.
//!
//! Each instance lands in the earliest-created representative it matches,
//! which is what keeps the three strategies interchangeable.

pub mod naive;
pub mod signature;
pub mod tree;
pub mod vp_tree;

pub use naive::NaiveGrouper;
pub use signature::SignatureGrouper;
pub use tree::TreeGrouper;
pub use vp_tree::VpTree;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use colomine_core::config::{GroupingStrategy, MiningConfig};
use colomine_core::types::{FrequentPattern, Instance, PointId};

use crate::matching::{InstanceMatcher, Mapping};

/// A representative instance plus the ids seen in each of its slots.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedPattern {
    pub representative: Instance,
    pub support_ids: Vec<BTreeSet<PointId>>,
    /// Instances merged into this group, the representative included.
    pub members: usize,
}

impl GroupedPattern {
    pub fn new(representative: Instance) -> Self {
        let support_ids = representative
            .slots
            .iter()
            .map(|s| BTreeSet::from([s.point.id]))
            .collect();
        Self {
            representative,
            support_ids,
            members: 1,
        }
    }

    /// Merge `other`'s point ids through `mapping` (representative slot
    /// `i` ↔ `other` slot `mapping[i]`).
    pub fn absorb(&mut self, other: &Instance, mapping: &Mapping) {
        for (i, ids) in self.support_ids.iter_mut().enumerate() {
            ids.insert(other.slots[mapping.get(i)].point.id);
        }
        self.members += 1;
    }

    pub fn support(&self) -> usize {
        FrequentPattern::support_of(&self.support_ids)
    }

    pub fn into_pattern(self) -> FrequentPattern {
        FrequentPattern::from_representative(&self.representative, self.support_ids)
    }
}

/// Work counters for one grouping pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingStats {
    pub instances: usize,
    pub groups: usize,
    /// Full matcher invocations.
    pub matcher_calls: usize,
    /// Pairs rejected before reaching the matcher.
    pub pruned_pairs: usize,
}

/// Output of one grouping pass.
#[derive(Debug, Clone)]
pub struct GroupingOutcome {
    pub groups: Vec<GroupedPattern>,
    pub stats: GroupingStats,
}

/// Consumes instances and clusters matching ones.
pub trait PatternGrouper: Send + Sync {
    fn name(&self) -> &'static str;

    fn group(&self, instances: Vec<Instance>) -> GroupingOutcome;
}

/// Put every instance's slots in canonical order so representatives look
/// the same whichever strategy picked them.
pub fn canonicalize(instances: Vec<Instance>) -> Vec<Instance> {
    instances.into_iter().map(Instance::into_canonical).collect()
}

/// Build the grouper selected by `config`.
pub fn grouper_for(config: &MiningConfig, matcher: InstanceMatcher) -> Box<dyn PatternGrouper> {
    match config.effective_grouping() {
        GroupingStrategy::Naive => Box::new(NaiveGrouper::new(matcher)),
        GroupingStrategy::Signature => Box::new(SignatureGrouper::new(
            matcher,
            config.effective_signature_axis(),
        )),
        GroupingStrategy::Tree => Box::new(TreeGrouper::new(matcher)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colomine_core::types::Point;

    #[test]
    fn absorb_follows_mapping() {
        let rep = Instance::new(
            1.0,
            1.0,
            0.0,
            0.0,
            [Point::new(1, 0.1, 0.1, 1), Point::new(2, 0.9, 0.9, 2)],
        );
        let other = Instance::new(
            1.0,
            1.0,
            0.0,
            0.0,
            [Point::new(20, 0.9, 0.9, 2), Point::new(10, 0.1, 0.1, 1)],
        );
        let matcher = InstanceMatcher::new(0.0).unwrap();
        let mapping = matcher.find_mapping(&rep, &other).unwrap();

        let mut group = GroupedPattern::new(rep);
        group.absorb(&other, &mapping);
        assert_eq!(group.support_ids[0], BTreeSet::from([1, 10]));
        assert_eq!(group.support_ids[1], BTreeSet::from([2, 20]));
        assert_eq!(group.support(), 2);
        assert_eq!(group.members, 2);

        let pattern = group.into_pattern();
        assert_eq!(pattern.support, 2);
        assert_eq!(pattern.keywords(), vec![1, 2]);
    }

    #[test]
    fn repeated_points_do_not_inflate_support() {
        let rep = Instance::new(1.0, 1.0, 0.0, 0.0, [Point::new(1, 0.5, 0.5, 1)]);
        let same = rep.clone();
        let matcher = InstanceMatcher::new(0.0).unwrap();
        let mapping = matcher.find_mapping(&rep, &same).unwrap();
        let mut group = GroupedPattern::new(rep);
        group.absorb(&same, &mapping);
        assert_eq!(group.support(), 1);
        assert_eq!(group.members, 2);
    }
}
