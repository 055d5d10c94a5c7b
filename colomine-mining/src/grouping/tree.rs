//! Tree-indexed grouping: type-signature buckets, each a VP-tree.

use colomine_core::constants::ORDER_TOLERANCE;
use colomine_core::types::collections::FxHashMap;
use colomine_core::types::Instance;

use super::vp_tree::{Rdv, VpTree};
use super::{canonicalize, GroupedPattern, GroupingOutcome, GroupingStats, PatternGrouper};
use crate::matching::InstanceMatcher;

/// Groups instances through a two-tier index.
///
/// Tier one keys on the canonical keyword sequence; instances with
/// different keys never match. Tier two is a VP-tree over each
/// representative's RDV. A matching pair of canonical instances has RDVs
/// within `2·epsilon` under Chebyshev distance, so the tree query returns
/// a superset of the matching representatives; each candidate is confirmed
/// with the full matcher and the earliest confirmed representative wins.
#[derive(Debug, Clone, Copy)]
pub struct TreeGrouper {
    matcher: InstanceMatcher,
}

impl TreeGrouper {
    pub fn new(matcher: InstanceMatcher) -> Self {
        Self { matcher }
    }

    fn threshold(&self) -> f64 {
        2.0 * (self.matcher.epsilon() + ORDER_TOLERANCE)
    }
}

/// Each canonical slot's y minus the first canonical slot's y.
pub fn relative_displacement(instance: &Instance) -> Rdv {
    let Some(first) = instance.slots.first() else {
        return Rdv::new();
    };
    instance
        .slots
        .iter()
        .map(|s| s.rel_y - first.rel_y)
        .collect()
}

impl PatternGrouper for TreeGrouper {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn group(&self, instances: Vec<Instance>) -> GroupingOutcome {
        let instances = canonicalize(instances);
        let threshold = self.threshold();
        let mut stats = GroupingStats {
            instances: instances.len(),
            ..Default::default()
        };
        let mut index: FxHashMap<String, VpTree> = FxHashMap::default();
        let mut groups: Vec<GroupedPattern> = Vec::new();

        for instance in instances {
            let rdv = relative_displacement(&instance);
            let tree = index.entry(instance.type_signature()).or_default();
            let candidates = tree.within(&rdv, threshold);
            stats.pruned_pairs += tree.len() - candidates.len();

            let mut merged = false;
            for pattern in candidates {
                stats.matcher_calls += 1;
                if let Some(mapping) =
                    self.matcher.find_mapping(&groups[pattern].representative, &instance)
                {
                    groups[pattern].absorb(&instance, &mapping);
                    merged = true;
                    break;
                }
            }

            if !merged {
                tree.insert(rdv, groups.len());
                groups.push(GroupedPattern::new(instance));
            }
        }

        stats.groups = groups.len();
        GroupingOutcome { groups, stats }
    }
}
