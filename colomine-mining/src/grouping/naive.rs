//! Naive pairwise grouping.

use colomine_core::types::Instance;

use super::{canonicalize, GroupedPattern, GroupingOutcome, GroupingStats, PatternGrouper};
use crate::matching::InstanceMatcher;

/// Takes the next unconsumed instance as a representative and matches it
/// against every later unconsumed instance. O(n²) matcher calls.
#[derive(Debug, Clone, Copy)]
pub struct NaiveGrouper {
    matcher: InstanceMatcher,
}

impl NaiveGrouper {
    pub fn new(matcher: InstanceMatcher) -> Self {
        Self { matcher }
    }
}

impl PatternGrouper for NaiveGrouper {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn group(&self, instances: Vec<Instance>) -> GroupingOutcome {
        let instances = canonicalize(instances);
        let mut stats = GroupingStats {
            instances: instances.len(),
            ..Default::default()
        };
        let mut consumed = vec![false; instances.len()];
        let mut groups = Vec::new();

        for i in 0..instances.len() {
            if consumed[i] {
                continue;
            }
            consumed[i] = true;
            let mut group = GroupedPattern::new(instances[i].clone());
            for j in (i + 1)..instances.len() {
                if consumed[j] {
                    continue;
                }
                stats.matcher_calls += 1;
                if let Some(mapping) = self.matcher.find_mapping(&group.representative, &instances[j]) {
                    group.absorb(&instances[j], &mapping);
                    consumed[j] = true;
                }
            }
            groups.push(group);
        }

        stats.groups = groups.len();
        GroupingOutcome { groups, stats }
    }
}
